// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`SourceAdapter`] implementation for Slack.

use std::sync::Arc;

use async_trait::async_trait;
use teamwell_config::model::{HttpConfig, SlackConfig};
use teamwell_core::{ChatMessage, FetchOutcome, SourceAdapter, SourceKind, TeamwellError};
use tracing::{error, info, warn};

use crate::api::{ChannelTypes, SlackApi};
use crate::client::HttpSlackApi;
use crate::{convert, fixtures};

/// Page size for channel-name resolution.
const RESOLVE_LIMIT: u32 = 1000;
/// Page size for the public channel listing.
const LIST_LIMIT: u32 = 100;

/// Chat source backed by a Slack workspace.
pub struct SlackSource {
    config: SlackConfig,
    api: Option<Arc<dyn SlackApi>>,
}

impl SlackSource {
    pub fn new(config: SlackConfig, api: Arc<dyn SlackApi>) -> Self {
        Self {
            config,
            api: Some(api),
        }
    }

    /// Build the source with the HTTPS transport. No transport is built
    /// while the bot token is a placeholder.
    pub fn from_config(config: &SlackConfig, http: &HttpConfig) -> Result<Self, TeamwellError> {
        let api: Option<Arc<dyn SlackApi>> = if config.is_configured() {
            Some(Arc::new(HttpSlackApi::new(config, http)?))
        } else {
            None
        };
        Ok(Self {
            config: config.clone(),
            api,
        })
    }

    /// The transport, if the token is real.
    fn transport(&self) -> Option<&dyn SlackApi> {
        if self.config.is_configured() {
            self.api.as_deref()
        } else {
            None
        }
    }

    /// Public channel names in the workspace.
    ///
    /// With a placeholder token this is the channel set of the sample data.
    /// Transport failures are logged and yield an empty list.
    pub async fn list_channels(&self) -> Vec<String> {
        let Some(api) = self.transport() else {
            warn!("slack bot token not configured, listing sample channels");
            return fixtures::sample_channels();
        };

        match api.conversations_list(ChannelTypes::Public, LIST_LIMIT).await {
            Ok(channels) => {
                info!(count = channels.len(), "fetched slack channels");
                channels.into_iter().map(|c| c.name).collect()
            }
            Err(e) => {
                error!(error = %e, "failed to list slack channels");
                Vec::new()
            }
        }
    }

    /// Resolve a channel name to its id across public and private channels.
    async fn resolve_channel(
        api: &dyn SlackApi,
        name: &str,
    ) -> Result<Option<String>, TeamwellError> {
        let channels = api
            .conversations_list(ChannelTypes::PublicAndPrivate, RESOLVE_LIMIT)
            .await?;
        Ok(channels.into_iter().find(|c| c.name == name).map(|c| c.id))
    }
}

#[async_trait]
impl SourceAdapter for SlackSource {
    type Scope = String;
    type Record = ChatMessage;

    fn name(&self) -> &str {
        "slack"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Chat
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn default_scope(&self) -> String {
        self.config.default_channel.clone()
    }

    async fn fetch_recent(&self, channel: &String) -> FetchOutcome<ChatMessage> {
        let Some(api) = self.transport() else {
            warn!("slack bot token not configured, serving sample messages");
            return FetchOutcome::not_configured(fixtures::sample_messages_for(channel));
        };

        let channel_id = match Self::resolve_channel(api, channel).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                warn!(channel = %channel, "slack channel not found");
                return FetchOutcome::ok(Vec::new());
            }
            Err(e) => {
                error!(channel = %channel, error = %e, "failed to resolve slack channel");
                return FetchOutcome::failed(e.to_string());
            }
        };

        let raw = match api
            .conversations_history(&channel_id, self.config.history_limit)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                error!(channel = %channel, error = %e, "failed to fetch slack history");
                return FetchOutcome::failed(e.to_string());
            }
        };

        let messages: Vec<ChatMessage> = raw
            .iter()
            .filter_map(|m| convert::to_chat_message(m, &channel_id, channel))
            .collect();
        info!(count = messages.len(), channel = %channel, "fetched slack messages");
        FetchOutcome::ok(messages)
    }

    async fn test_connectivity(&self) -> bool {
        let Some(api) = self.transport() else {
            info!("slack bot token not configured");
            return false;
        };
        match api.auth_test().await {
            Ok(identity) => {
                info!(
                    user = identity.user.as_deref().unwrap_or("?"),
                    "slack connection test succeeded"
                );
                true
            }
            Err(e) => {
                error!(error = %e, "slack connection test failed");
                false
            }
        }
    }
}
