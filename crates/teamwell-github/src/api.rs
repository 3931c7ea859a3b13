// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The slice of the GitHub REST API the host source depends on.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString};
use teamwell_core::{RepoRef, TeamwellError};

/// `state` filter of the issue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubRepository {
    #[serde(default)]
    pub full_name: Option<String>,
    /// Includes open pull requests.
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Up to `limit` entries of the issue listing, most recently created
    /// first. Pull requests appear in this listing too.
    async fn list_issues(
        &self,
        repo: &RepoRef,
        state: StateFilter,
        limit: u32,
    ) -> Result<Vec<Value>, TeamwellError>;

    async fn repository(&self, repo: &RepoRef) -> Result<GithubRepository, TeamwellError>;

    /// The authenticated user.
    async fn viewer(&self) -> Result<GithubUser, TeamwellError>;
}
