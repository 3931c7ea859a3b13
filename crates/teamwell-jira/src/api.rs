// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The slice of the Jira REST API the tracker source depends on.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use teamwell_core::TeamwellError;

/// One page of a JQL search. Issues stay raw for per-field conversion.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Total matches on the server, independent of the page size.
    pub total: u64,
    pub issues: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraProject {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
}

#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Run a JQL search. `max_results = 0` returns only the total.
    async fn search(&self, jql: &str, max_results: u32) -> Result<SearchPage, TeamwellError>;

    async fn project(&self, key: &str) -> Result<JiraProject, TeamwellError>;

    /// The authenticated user.
    async fn myself(&self) -> Result<JiraUser, TeamwellError>;
}
