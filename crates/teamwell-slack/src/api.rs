// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The slice of the Slack Web API the chat source depends on.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use teamwell_core::TeamwellError;

/// A conversation as returned by `conversations.list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlackChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Identity reported by `auth.test`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackIdentity {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Which conversation types `conversations.list` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTypes {
    Public,
    PublicAndPrivate,
}

impl ChannelTypes {
    pub fn as_param(self) -> &'static str {
        match self {
            ChannelTypes::Public => "public_channel",
            ChannelTypes::PublicAndPrivate => "public_channel,private_channel",
        }
    }
}

/// Slack Web API transport.
///
/// History entries are handed back as raw JSON so conversion can tolerate
/// missing or oddly-typed fields one at a time.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Most recent messages of a channel, newest first.
    async fn conversations_history(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<Value>, TeamwellError>;

    async fn conversations_list(
        &self,
        types: ChannelTypes,
        limit: u32,
    ) -> Result<Vec<SlackChannel>, TeamwellError>;

    async fn auth_test(&self) -> Result<SlackIdentity, TeamwellError>;
}
