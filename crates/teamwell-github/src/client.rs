// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! reqwest-backed [`GithubApi`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use teamwell_config::model::{GithubConfig, HttpConfig};
use teamwell_core::{RepoRef, TeamwellError};
use teamwell_http::{Auth, JsonClient};
use tracing::debug;

use crate::api::{GithubApi, GithubRepository, GithubUser, StateFilter};

/// Largest page the issue listing accepts.
const MAX_PER_PAGE: u32 = 100;
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone)]
pub struct HttpGithubApi {
    http: JsonClient,
}

impl HttpGithubApi {
    pub fn new(config: &GithubConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        let client = JsonClient::with_headers(
            &config.api_url,
            Auth::Bearer(config.token.clone()),
            headers,
            http,
        )?;
        Ok(Self { http: client })
    }

    pub fn from_client(http: JsonClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GithubApi for HttpGithubApi {
    async fn list_issues(
        &self,
        repo: &RepoRef,
        state: StateFilter,
        limit: u32,
    ) -> Result<Vec<Value>, TeamwellError> {
        let path = format!("repos/{}/{}/issues", repo.owner, repo.name);
        let per_page = limit.clamp(1, MAX_PER_PAGE);
        let mut collected: Vec<Value> = Vec::new();
        let mut page = 1u32;

        while collected.len() < limit as usize {
            let body = self
                .http
                .get_json(
                    &path,
                    &[
                        ("state", state.to_string()),
                        ("per_page", per_page.to_string()),
                        ("page", page.to_string()),
                        ("sort", "created".to_string()),
                        ("direction", "desc".to_string()),
                    ],
                )
                .await?;

            let Value::Array(entries) = body else {
                return Err(TeamwellError::Parse {
                    message: format!("issue listing for {repo} is not an array"),
                    source: None,
                });
            };
            let received = entries.len();
            debug!(page, received, %repo, "github issue page");

            let room = limit as usize - collected.len();
            collected.extend(entries.into_iter().take(room));

            if received < per_page as usize {
                break;
            }
            page += 1;
        }

        Ok(collected)
    }

    async fn repository(&self, repo: &RepoRef) -> Result<GithubRepository, TeamwellError> {
        let body = self
            .http
            .get_json(&format!("repos/{}/{}", repo.owner, repo.name), &[])
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn viewer(&self) -> Result<GithubUser, TeamwellError> {
        let body = self.http.get_json("user", &[]).await?;
        Ok(serde_json::from_value(body)?)
    }
}
