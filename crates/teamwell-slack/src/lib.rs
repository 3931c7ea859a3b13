// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack chat source for Teamwell.
//!
//! Polls `conversations.history` for a named channel and normalizes the
//! messages into [`ChatMessage`](teamwell_core::ChatMessage) records. With a
//! placeholder bot token the adapter serves an embedded sample set instead
//! and never touches the network.

pub mod adapter;
pub mod api;
pub mod client;
pub mod convert;
pub mod fixtures;

pub use adapter::SlackSource;
pub use api::{ChannelTypes, SlackApi, SlackChannel, SlackIdentity};
pub use client::HttpSlackApi;
