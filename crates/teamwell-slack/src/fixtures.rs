// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded sample messages served while the bot token is a placeholder.

use teamwell_core::ChatMessage;
use tracing::{error, info};

const SAMPLE_MESSAGES: &str = include_str!("../fixtures/sample-slack-messages.json");

/// Channel reported when the sample set yields no names.
const FALLBACK_CHANNEL: &str = "general";

/// All sample messages. A malformed fixture logs and yields nothing.
pub fn sample_messages() -> Vec<ChatMessage> {
    match serde_json::from_str(SAMPLE_MESSAGES) {
        Ok(messages) => messages,
        Err(e) => {
            error!(error = %e, "embedded slack sample messages are malformed");
            Vec::new()
        }
    }
}

/// Sample messages posted in `channel`; an empty name means every channel.
pub fn sample_messages_for(channel: &str) -> Vec<ChatMessage> {
    let all = sample_messages();
    if channel.is_empty() {
        info!(count = all.len(), "loaded sample slack messages");
        return all;
    }
    let filtered: Vec<_> = all
        .into_iter()
        .filter(|m| m.channel_name == channel)
        .collect();
    info!(count = filtered.len(), channel, "loaded sample slack messages");
    filtered
}

/// Distinct channel names of the sample set, in first-seen order.
pub fn sample_channels() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for message in sample_messages() {
        if !names.contains(&message.channel_name) {
            names.push(message.channel_name);
        }
    }
    if names.is_empty() {
        names.push(FALLBACK_CHANNEL.to_string());
    }
    names
}
