// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`SourceAdapter`] implementation for Jira.

use std::sync::Arc;

use async_trait::async_trait;
use teamwell_config::model::{HttpConfig, JiraConfig};
use teamwell_core::{
    FetchOutcome, ProjectStatistics, SourceAdapter, SourceKind, SourceStatistics, TeamwellError,
    TrackerIssue,
};
use tracing::{error, info, warn};

use crate::api::JiraApi;
use crate::client::HttpJiraApi;
use crate::{convert, jql};

/// Tracker source backed by a Jira site.
pub struct JiraSource {
    config: JiraConfig,
    api: Option<Arc<dyn JiraApi>>,
}

impl JiraSource {
    pub fn new(config: JiraConfig, api: Arc<dyn JiraApi>) -> Self {
        Self {
            config,
            api: Some(api),
        }
    }

    /// Build the source with the HTTPS transport. No transport is built
    /// while any credential is a placeholder.
    pub fn from_config(config: &JiraConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let api: Option<Arc<dyn JiraApi>> = if config.is_configured() {
            Some(Arc::new(HttpJiraApi::new(config, http)?))
        } else {
            None
        };
        Ok(Self {
            config: config.clone(),
            api,
        })
    }

    fn transport(&self) -> Option<&dyn JiraApi> {
        if self.config.is_configured() {
            self.api.as_deref()
        } else {
            None
        }
    }

    async fn search_issues(
        &self,
        api: &dyn JiraApi,
        query: &str,
        project_key: &str,
    ) -> Result<Vec<TrackerIssue>, TeamwellError> {
        let page = api.search(query, self.config.max_results).await?;
        Ok(page
            .issues
            .iter()
            .filter_map(|raw| {
                convert::to_tracker_issue(raw, project_key, &self.config.story_points_field)
            })
            .collect())
    }

    /// Issues of the default project assigned to `assignee`. Empty on failure.
    pub async fn issues_for_assignee(&self, assignee: &str) -> Vec<TrackerIssue> {
        let Some(api) = self.transport() else {
            warn!("jira not configured, check url, username and token");
            return Vec::new();
        };
        let project = &self.config.project_key;
        match self
            .search_issues(api, &jql::for_assignee(project, assignee), project)
            .await
        {
            Ok(issues) => {
                info!(count = issues.len(), assignee, "fetched jira issues for assignee");
                issues
            }
            Err(e) => {
                error!(assignee, error = %e, "failed to fetch jira issues for assignee");
                Vec::new()
            }
        }
    }

    /// Number of issues matching `query`. Zero when unconfigured or on failure.
    pub async fn count_issues(&self, query: &str) -> u64 {
        let Some(api) = self.transport() else {
            return 0;
        };
        match api.search(query, 0).await {
            Ok(page) => page.total,
            Err(e) => {
                warn!(jql = query, error = %e, "failed to count jira issues");
                0
            }
        }
    }

    /// Open/completed counts for the default project.
    ///
    /// `total` is `open + completed`; issues in other statuses are not counted.
    pub async fn project_statistics(&self) -> Option<ProjectStatistics> {
        let api = self.transport()?;
        let key = &self.config.project_key;

        let project_name = match api.project(key).await {
            Ok(project) => project.name,
            Err(e) => {
                warn!(project = %key, error = %e, "failed to fetch jira project");
                None
            }
        };
        let open = self
            .count_issues(&jql::with_statuses(key, &jql::OPEN_STATUSES))
            .await;
        let completed = self
            .count_issues(&jql::with_statuses(key, &jql::DONE_STATUSES))
            .await;

        Some(ProjectStatistics {
            project_key: key.clone(),
            project_name,
            total: open + completed,
            open,
            completed,
        })
    }
}

#[async_trait]
impl SourceAdapter for JiraSource {
    type Scope = String;
    type Record = TrackerIssue;

    fn name(&self) -> &str {
        "jira"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Tracker
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn default_scope(&self) -> String {
        self.config.project_key.clone()
    }

    async fn fetch_recent(&self, project_key: &String) -> FetchOutcome<TrackerIssue> {
        let Some(api) = self.transport() else {
            warn!("jira not configured, check url, username and token");
            return FetchOutcome::not_configured(Vec::new());
        };

        match self
            .search_issues(api, &jql::recent(project_key), project_key)
            .await
        {
            Ok(issues) => {
                info!(count = issues.len(), project = %project_key, "fetched jira issues");
                FetchOutcome::ok(issues)
            }
            Err(e) => {
                error!(project = %project_key, error = %e, "failed to fetch jira issues");
                FetchOutcome::failed(e.to_string())
            }
        }
    }

    async fn test_connectivity(&self) -> bool {
        let Some(api) = self.transport() else {
            info!("jira not configured, check url, username and token");
            return false;
        };
        match api.myself().await {
            Ok(user) => {
                info!(
                    user = user.display_name.as_deref().unwrap_or("?"),
                    "jira connection test succeeded"
                );
                true
            }
            Err(e) => {
                error!(error = %e, "jira connection test failed");
                false
            }
        }
    }

    async fn statistics(&self) -> Option<SourceStatistics> {
        self.project_statistics().await.map(SourceStatistics::Project)
    }
}
