// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the sources, store, and cycle from configuration.

use std::sync::Arc;

use teamwell_collector::CollectionCycle;
use teamwell_config::TeamwellConfig;
use teamwell_core::{ChatSource, HostSource, TeamwellError, TrackerSource};
use teamwell_github::GithubSource;
use teamwell_jira::JiraSource;
use teamwell_slack::SlackSource;
use teamwell_store::MemoryStore;
use tracing::info;

/// Everything a command needs.
///
/// The concrete sources are kept alongside the cycle for the
/// platform-specific queries the adapter trait does not cover.
pub struct App {
    pub slack: Arc<SlackSource>,
    pub jira: Arc<JiraSource>,
    pub github: Arc<GithubSource>,
    pub cycle: Arc<CollectionCycle>,
}

impl App {
    pub fn from_config(config: &TeamwellConfig) -> Result<Self, TeamwellError> {
        let slack = Arc::new(SlackSource::from_config(&config.slack, &config.http)?);
        let jira = Arc::new(JiraSource::from_config(&config.jira, &config.http)?);
        let github = Arc::new(GithubSource::from_config(&config.github, &config.http)?);

        info!(
            slack = config.slack.is_configured(),
            jira = config.jira.is_configured(),
            github = config.github.is_configured(),
            "sources initialized"
        );

        let chat: Arc<ChatSource> = slack.clone();
        let tracker: Arc<TrackerSource> = jira.clone();
        let host: Arc<HostSource> = github.clone();
        let cycle = Arc::new(CollectionCycle::new(
            chat,
            tracker,
            host,
            Arc::new(MemoryStore::new()),
            config.collection.clone(),
        ));

        Ok(Self {
            slack,
            jira,
            github,
            cycle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamwell_collector::SourceStatus;
    use teamwell_core::SourceKind;

    fn defaults() -> TeamwellConfig {
        teamwell_config::load_and_validate_str("").expect("defaults should be valid")
    }

    #[tokio::test]
    async fn placeholder_config_collects_sample_chat_only() {
        let app = App::from_config(&defaults()).unwrap();
        let report = app.cycle.run_cycle().await;

        for kind in [SourceKind::Chat, SourceKind::Tracker, SourceKind::Host] {
            let source = report.source(kind).unwrap();
            assert_eq!(source.status, SourceStatus::NotConfigured, "{kind}");
            assert!(source.statistics.is_none());
        }
        let stats = app.cycle.store_stats();
        assert!(stats.chat_messages > 0, "sample messages are stored");
        assert_eq!(stats.tracker_issues, 0);
        assert_eq!(stats.host_issues, 0);
    }

    #[tokio::test]
    async fn placeholder_config_reports_no_connections() {
        let app = App::from_config(&defaults()).unwrap();
        let report = app.cycle.test_all_connections().await;
        assert!(!report.chat && !report.tracker && !report.host);
        assert!(!report.overall);
    }

    #[tokio::test]
    async fn plain_http_to_a_remote_host_is_rejected() {
        let config = teamwell_config::load_and_validate_str(
            "[github]\ntoken = \"ghp_real\"\napi_url = \"http://api.example.com\"\n",
        )
        .expect("config should be valid");
        assert!(App::from_config(&config).is_err());
    }
}
