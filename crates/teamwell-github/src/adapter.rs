// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`SourceAdapter`] implementation for GitHub.

use std::sync::Arc;

use async_trait::async_trait;
use teamwell_config::model::{GithubConfig, HttpConfig};
use teamwell_core::{
    FetchOutcome, HostIssue, RepoRef, RepositoryStatistics, SourceAdapter, SourceKind,
    SourceStatistics, TeamwellError,
};
use tracing::{error, info, warn};

use crate::api::{GithubApi, StateFilter};
use crate::client::HttpGithubApi;
use crate::convert;

/// Listing cap for whole-repository scans (statistics, assignee lookups).
const SCAN_LIMIT: u32 = 1000;

/// Host source backed by a GitHub repository.
pub struct GithubSource {
    config: GithubConfig,
    api: Option<Arc<dyn GithubApi>>,
}

impl GithubSource {
    pub fn new(config: GithubConfig, api: Arc<dyn GithubApi>) -> Self {
        Self {
            config,
            api: Some(api),
        }
    }

    /// Build the source with the HTTPS transport. No transport is built
    /// while the token is a placeholder.
    pub fn from_config(config: &GithubConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let api: Option<Arc<dyn GithubApi>> = if config.is_configured() {
            Some(Arc::new(HttpGithubApi::new(config, http)?))
        } else {
            None
        };
        Ok(Self {
            config: config.clone(),
            api,
        })
    }

    fn transport(&self) -> Option<&dyn GithubApi> {
        if self.config.is_configured() {
            self.api.as_deref()
        } else {
            None
        }
    }

    async fn list(
        api: &dyn GithubApi,
        repo: &RepoRef,
        state: StateFilter,
        limit: u32,
    ) -> Result<Vec<HostIssue>, TeamwellError> {
        let slug = repo.slug();
        let raw = api.list_issues(repo, state, limit).await?;
        Ok(raw
            .iter()
            .filter_map(|entry| convert::to_host_issue(entry, &slug))
            .collect())
    }

    /// Open issues of the default repository assigned to `login`.
    pub async fn open_issues_for_assignee(&self, login: &str) -> Vec<HostIssue> {
        let Some(api) = self.transport() else {
            warn!("github token not configured");
            return Vec::new();
        };
        let repo = self.config.repo_ref();
        match Self::list(api, &repo, StateFilter::Open, SCAN_LIMIT).await {
            Ok(issues) => {
                let mine: Vec<_> = issues
                    .into_iter()
                    .filter(|i| i.assignees.contains(login))
                    .collect();
                info!(count = mine.len(), login, "fetched open github issues for assignee");
                mine
            }
            Err(e) => {
                error!(login, error = %e, "failed to fetch github issues for assignee");
                Vec::new()
            }
        }
    }

    /// Issue and popularity counts for the default repository.
    ///
    /// `total_issues` counts every listing entry, pull requests included,
    /// matching what the platform's `open_issues_count` covers.
    pub async fn repository_statistics(&self) -> Option<RepositoryStatistics> {
        let api = self.transport()?;
        let repo = self.config.repo_ref();

        let info = match api.repository(&repo).await {
            Ok(info) => info,
            Err(e) => {
                error!(repository = %repo, error = %e, "failed to fetch github repository");
                return None;
            }
        };
        let total = match api.list_issues(&repo, StateFilter::All, SCAN_LIMIT).await {
            Ok(entries) => entries.len() as u64,
            Err(e) => {
                error!(repository = %repo, error = %e, "failed to list github issues");
                return None;
            }
        };

        Some(RepositoryStatistics {
            repository: repo.slug(),
            total_issues: total,
            open_issues: info.open_issues_count,
            closed_issues: total.saturating_sub(info.open_issues_count),
            stars: info.stargazers_count,
            forks: info.forks_count,
        })
    }
}

#[async_trait]
impl SourceAdapter for GithubSource {
    type Scope = RepoRef;
    type Record = HostIssue;

    fn name(&self) -> &str {
        "github"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Host
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn default_scope(&self) -> RepoRef {
        self.config.repo_ref()
    }

    async fn fetch_recent(&self, repo: &RepoRef) -> FetchOutcome<HostIssue> {
        let Some(api) = self.transport() else {
            warn!("github token not configured");
            return FetchOutcome::not_configured(Vec::new());
        };

        match Self::list(api, repo, StateFilter::All, self.config.max_issues).await {
            Ok(issues) => {
                info!(count = issues.len(), repository = %repo, "fetched github issues");
                FetchOutcome::ok(issues)
            }
            Err(e) => {
                error!(repository = %repo, error = %e, "failed to fetch github issues");
                FetchOutcome::failed(e.to_string())
            }
        }
    }

    async fn test_connectivity(&self) -> bool {
        let Some(api) = self.transport() else {
            info!("github token not configured");
            return false;
        };
        match api.viewer().await {
            Ok(user) => {
                info!(login = %user.login, "github connection test succeeded");
                true
            }
            Err(e) => {
                error!(error = %e, "github connection test failed");
                false
            }
        }
    }

    async fn statistics(&self) -> Option<SourceStatistics> {
        self.repository_statistics()
            .await
            .map(SourceStatistics::Repository)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::api::{GithubRepository, GithubUser};
    use serde_json::{json, Value};
    use teamwell_core::{FetchStatus, IssueState};

    #[derive(Default)]
    struct FakeGithub {
        listings: Mutex<Vec<(String, StateFilter, u32)>>,
        fail: bool,
    }

    fn sample_listing() -> Vec<Value> {
        vec![
            json!({"id": 1, "number": 101, "state": "open", "assignees": [{"login": "bob.eng"}]}),
            json!({"id": 2, "number": 102, "state": "open",
                   "assignees": [{"login": "alice.dev"}, {"login": "charlie.tech"}]}),
            json!({"id": 3, "number": 103, "state": "closed", "closed_at": "2024-01-14T17:30:00Z"}),
            json!({"id": 4, "number": 104, "state": "open", "pull_request": {"url": "x"},
                   "assignees": [{"login": "bob.eng"}]}),
        ]
    }

    #[async_trait]
    impl GithubApi for FakeGithub {
        async fn list_issues(
            &self,
            repo: &RepoRef,
            state: StateFilter,
            limit: u32,
        ) -> Result<Vec<Value>, TeamwellError> {
            self.listings.lock().unwrap().push((repo.slug(), state, limit));
            if self.fail {
                return Err(TeamwellError::Api { status: 500, message: "oops".into() });
            }
            let entries = sample_listing();
            Ok(match state {
                StateFilter::All => entries,
                StateFilter::Open => entries
                    .into_iter()
                    .filter(|e| e["state"] == "open")
                    .collect(),
                StateFilter::Closed => entries
                    .into_iter()
                    .filter(|e| e["state"] == "closed")
                    .collect(),
            })
        }

        async fn repository(&self, _repo: &RepoRef) -> Result<GithubRepository, TeamwellError> {
            Ok(GithubRepository {
                full_name: Some("acme/widgets".into()),
                open_issues_count: 3,
                stargazers_count: 42,
                forks_count: 7,
            })
        }

        async fn viewer(&self) -> Result<GithubUser, TeamwellError> {
            Ok(GithubUser { login: "octo".into() })
        }
    }

    struct Unreachable;

    #[async_trait]
    impl GithubApi for Unreachable {
        async fn list_issues(&self, _: &RepoRef, _: StateFilter, _: u32) -> Result<Vec<Value>, TeamwellError> {
            panic!("network call with placeholder token");
        }
        async fn repository(&self, _: &RepoRef) -> Result<GithubRepository, TeamwellError> {
            panic!("network call with placeholder token");
        }
        async fn viewer(&self) -> Result<GithubUser, TeamwellError> {
            panic!("network call with placeholder token");
        }
    }

    fn configured() -> GithubConfig {
        GithubConfig {
            token: "ghp_real".into(),
            owner: "acme".into(),
            repository: "widgets".into(),
            ..GithubConfig::default()
        }
    }

    #[tokio::test]
    async fn placeholder_token_never_touches_network() {
        let source = GithubSource::new(GithubConfig::default(), Arc::new(Unreachable));
        let outcome = source.fetch_recent(&source.default_scope()).await;
        assert_eq!(outcome.status, FetchStatus::NotConfigured);
        assert!(outcome.is_empty());
        assert!(!source.test_connectivity().await);
        assert!(source.repository_statistics().await.is_none());
        assert!(source.open_issues_for_assignee("bob.eng").await.is_empty());
    }

    #[tokio::test]
    async fn fetch_lists_all_states_capped_and_skips_prs() {
        let api = Arc::new(FakeGithub::default());
        let source = GithubSource::new(configured(), api.clone());

        let outcome = source.fetch_recent(&RepoRef::new("acme", "widgets")).await;
        assert_eq!(outcome.status, FetchStatus::Ok);
        let numbers: Vec<_> = outcome.records.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![101, 102, 103]);
        assert!(outcome.records.iter().all(|i| i.repository == "acme/widgets"));
        assert_eq!(outcome.records[2].state, IssueState::Closed);

        let listings = api.listings.lock().unwrap();
        assert_eq!(listings[0], ("acme/widgets".to_string(), StateFilter::All, 50));
    }

    #[tokio::test]
    async fn listing_failure_is_failed_outcome() {
        let api = Arc::new(FakeGithub { fail: true, ..FakeGithub::default() });
        let source = GithubSource::new(configured(), api);
        assert!(source.fetch_recent(&source.default_scope()).await.is_failed());
        assert!(source.repository_statistics().await.is_none());
    }

    #[tokio::test]
    async fn assignee_filter_uses_open_issues() {
        let source = GithubSource::new(configured(), Arc::new(FakeGithub::default()));
        let bob = source.open_issues_for_assignee("bob.eng").await;
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].number, 101);
        assert!(source.open_issues_for_assignee("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn repository_statistics_counts() {
        let source = GithubSource::new(configured(), Arc::new(FakeGithub::default()));
        let stats = source.repository_statistics().await.unwrap();
        assert_eq!(stats.repository, "acme/widgets");
        assert_eq!(stats.total_issues, 4);
        assert_eq!(stats.open_issues, 3);
        assert_eq!(stats.closed_issues, 1);
        assert_eq!(stats.stars, 42);
        assert_eq!(stats.forks, 7);
        assert!(matches!(
            source.statistics().await,
            Some(SourceStatistics::Repository(_))
        ));
    }

    #[tokio::test]
    async fn connectivity_uses_viewer() {
        let source = GithubSource::new(configured(), Arc::new(FakeGithub::default()));
        assert!(source.test_connectivity().await);
        assert_eq!(source.kind(), SourceKind::Host);
    }
}
