// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! reqwest-backed [`SlackApi`].

use async_trait::async_trait;
use serde_json::Value;
use teamwell_config::model::{HttpConfig, SlackConfig};
use teamwell_core::TeamwellError;
use teamwell_http::{Auth, JsonClient};
use tracing::debug;

use crate::api::{ChannelTypes, SlackApi, SlackChannel, SlackIdentity};

/// Slack Web API over HTTPS with the bot token as bearer credential.
#[derive(Debug, Clone)]
pub struct HttpSlackApi {
    http: JsonClient,
}

impl HttpSlackApi {
    pub fn new(config: &SlackConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let client = JsonClient::new(&config.api_url, Auth::Bearer(config.bot_token.clone()), http)?;
        Ok(Self { http: client })
    }

    /// Wrap an already-built client (tests point this at a mock server).
    pub fn from_client(http: JsonClient) -> Self {
        Self { http }
    }

    /// Call a Web API method and unwrap Slack's `{"ok": ...}` envelope.
    async fn call(&self, method: &str, query: &[(&str, String)]) -> Result<Value, TeamwellError> {
        let body = self.http.get_json(method, query).await?;
        if body.get("ok").and_then(Value::as_bool) == Some(true) {
            return Ok(body);
        }
        let reason = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        debug!(method, reason, "slack returned ok=false");
        Err(TeamwellError::Api {
            status: 200,
            message: format!("slack {method} failed: {reason}"),
        })
    }
}

#[async_trait]
impl SlackApi for HttpSlackApi {
    async fn conversations_history(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<Value>, TeamwellError> {
        let mut body = self
            .call(
                "conversations.history",
                &[("channel", channel_id.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        match body.get_mut("messages").map(Value::take) {
            Some(Value::Array(messages)) => Ok(messages),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(TeamwellError::Parse {
                message: format!("`messages` is not an array: {other}"),
                source: None,
            }),
        }
    }

    async fn conversations_list(
        &self,
        types: ChannelTypes,
        limit: u32,
    ) -> Result<Vec<SlackChannel>, TeamwellError> {
        let mut body = self
            .call(
                "conversations.list",
                &[
                    ("types", types.as_param().to_string()),
                    ("limit", limit.to_string()),
                    ("exclude_archived", "true".to_string()),
                ],
            )
            .await?;
        let channels = body.get_mut("channels").map(Value::take).unwrap_or(Value::Null);
        if channels.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(channels)?)
    }

    async fn auth_test(&self) -> Result<SlackIdentity, TeamwellError> {
        let body = self.call("auth.test", &[]).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpSlackApi {
        let config = SlackConfig {
            bot_token: "xoxb-test".into(),
            api_url: server.uri(),
            ..SlackConfig::default()
        };
        let client = JsonClient::new(
            &config.api_url,
            Auth::Bearer(config.bot_token.clone()),
            &HttpConfig::default(),
        )
        .unwrap()
        .with_retry_delay(Duration::ZERO);
        HttpSlackApi::from_client(client)
    }

    #[tokio::test]
    async fn history_returns_raw_messages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.history"))
            .and(query_param("channel", "C123"))
            .and(query_param("limit", "50"))
            .and(header("authorization", "Bearer xoxb-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "messages": [
                    {"ts": "1700000000.000100", "text": "hi"},
                    {"ts": "1700000001.000100", "text": "there"}
                ]
            })))
            .mount(&server)
            .await;

        let messages = api(&server).conversations_history("C123", 50).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["text"], "hi");
    }

    #[tokio::test]
    async fn ok_false_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.history"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "channel_not_found"})),
            )
            .mount(&server)
            .await;

        let err = api(&server).conversations_history("C404", 50).await.unwrap_err();
        assert!(err.to_string().contains("channel_not_found"));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn list_requests_public_and_private() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .and(query_param("types", "public_channel,private_channel"))
            .and(query_param("limit", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channels": [{"id": "C1", "name": "general"}, {"id": "G2", "name": "leads"}]
            })))
            .mount(&server)
            .await;

        let channels = api(&server)
            .conversations_list(ChannelTypes::PublicAndPrivate, 1000)
            .await
            .unwrap();
        assert_eq!(
            channels,
            vec![
                SlackChannel { id: "C1".into(), name: "general".into() },
                SlackChannel { id: "G2".into(), name: "leads".into() },
            ]
        );
    }

    #[tokio::test]
    async fn auth_test_reports_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth.test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true, "user": "wellbeing-bot", "team": "Acme"})),
            )
            .mount(&server)
            .await;

        let identity = api(&server).auth_test().await.unwrap();
        assert_eq!(identity.user.as_deref(), Some("wellbeing-bot"));
    }

    #[tokio::test]
    async fn server_error_is_retried_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth.test"))
            .respond_with(ResponseTemplate::new(502))
            .expect(2)
            .mount(&server)
            .await;

        let err = api(&server).auth_test().await.unwrap_err();
        assert!(matches!(err, TeamwellError::Api { status: 502, .. }));
    }
}
