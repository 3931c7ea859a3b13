// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! reqwest-backed [`JiraApi`] using basic auth (email + API token).

use async_trait::async_trait;
use serde_json::Value;
use teamwell_config::model::{HttpConfig, JiraConfig};
use teamwell_core::TeamwellError;
use teamwell_http::{Auth, JsonClient};

use crate::api::{JiraApi, JiraProject, JiraUser, SearchPage};

#[derive(Debug, Clone)]
pub struct HttpJiraApi {
    http: JsonClient,
}

impl HttpJiraApi {
    pub fn new(config: &JiraConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let auth = Auth::Basic {
            username: config.username.clone(),
            password: config.token.clone(),
        };
        Ok(Self {
            http: JsonClient::new(&config.url, auth, http)?,
        })
    }

    pub fn from_client(http: JsonClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl JiraApi for HttpJiraApi {
    async fn search(&self, jql: &str, max_results: u32) -> Result<SearchPage, TeamwellError> {
        let mut body = self
            .http
            .get_json(
                "rest/api/3/search",
                &[("jql", jql.to_string()), ("maxResults", max_results.to_string())],
            )
            .await?;

        let total = body.get("total").and_then(Value::as_u64).unwrap_or(0);
        let issues = match body.get_mut("issues").map(Value::take) {
            Some(Value::Array(issues)) => issues,
            _ => Vec::new(),
        };
        Ok(SearchPage { total, issues })
    }

    async fn project(&self, key: &str) -> Result<JiraProject, TeamwellError> {
        let body = self
            .http
            .get_json(&format!("rest/api/3/project/{key}"), &[])
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn myself(&self) -> Result<JiraUser, TeamwellError> {
        let body = self.http.get_json("rest/api/3/myself", &[]).await?;
        Ok(serde_json::from_value(body)?)
    }
}
