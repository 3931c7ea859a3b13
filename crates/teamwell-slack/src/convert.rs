// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw Slack message JSON to [`ChatMessage`].

use chrono::{DateTime, Utc};
use serde_json::Value;
use teamwell_core::{ChatMessage, UNKNOWN_AUTHOR};
use tracing::warn;

/// Normalize one history entry. Returns `None` for messages without text
/// (joins, file-only posts, and similar).
pub fn to_chat_message(raw: &Value, channel_id: &str, channel_name: &str) -> Option<ChatMessage> {
    let text = raw.get("text").and_then(Value::as_str).unwrap_or_default();
    if text.is_empty() {
        return None;
    }

    let ts = str_field(raw, "ts");
    let timestamp = match ts.as_deref() {
        Some(ts) => parse_slack_ts(ts).unwrap_or_else(|| {
            warn!(ts, "unparsable slack timestamp, using processing time");
            Utc::now()
        }),
        None => Utc::now(),
    };

    Some(ChatMessage {
        message_id: ts.unwrap_or_default(),
        channel_id: channel_id.to_string(),
        channel_name: channel_name.to_string(),
        author_id: str_field(raw, "user"),
        author_name: str_field(raw, "username").unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        text: text.to_string(),
        timestamp,
        thread_ts: str_field(raw, "thread_ts"),
        reaction_count: reaction_total(raw),
    })
}

/// Slack `ts` values are fractional epoch seconds (`"1700000000.123456"`).
/// Precision is kept to the millisecond.
pub fn parse_slack_ts(ts: &str) -> Option<DateTime<Utc>> {
    let seconds: f64 = ts.trim().parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0) as i64)
}

fn reaction_total(raw: &Value) -> u32 {
    let total: u64 = raw
        .get("reactions")
        .and_then(Value::as_array)
        .map(|reactions| {
            reactions
                .iter()
                .filter_map(|r| r.get("count").and_then(Value::as_u64))
                .sum()
        })
        .unwrap_or(0);
    u32::try_from(total).unwrap_or(u32::MAX)
}

fn str_field(raw: &Value, name: &str) -> Option<String> {
    raw.get(name).and_then(Value::as_str).map(str::to_string)
}
