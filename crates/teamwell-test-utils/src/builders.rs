// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record builders. Each returns a fully-populated record that tests tweak
//! with struct update syntax or direct field writes.

use chrono::{DateTime, TimeZone, Utc};
use teamwell_core::{ChatMessage, HostIssue, IssueState, TrackerIssue};

/// `2024-01-15 HH:MM:00 UTC`, the day the sample data lives on.
pub fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn chat_message(author: &str, text: &str) -> ChatMessage {
    ChatMessage {
        message_id: format!("{author}-{}", text.len()),
        channel_id: "C0000000001".to_string(),
        channel_name: "general".to_string(),
        author_id: Some(format!("U-{author}")),
        author_name: author.to_string(),
        text: text.to_string(),
        timestamp: ts(9, 0),
        thread_ts: None,
        reaction_count: 0,
    }
}

pub fn tracker_issue(key: &str) -> TrackerIssue {
    let project = key.split('-').next().unwrap_or(key);
    let mut issue = TrackerIssue::new(key, project);
    issue.issue_id = key.replace('-', "");
    issue.summary = format!("work item {key}");
    issue.status = Some("To Do".to_string());
    issue.reporter = "alice.dev".to_string();
    issue.created = Some(ts(8, 0));
    issue.updated = Some(ts(9, 30));
    issue
}

pub fn host_issue(repository: &str, number: u64) -> HostIssue {
    let mut issue = HostIssue::new(repository, number);
    issue.id = 1000 + number;
    issue.title = format!("issue #{number}");
    issue.state = IssueState::Open;
    issue.author = "bob.eng".to_string();
    issue.created_at = Some(ts(10, 0));
    issue.updated_at = Some(ts(11, 0));
    issue
}
