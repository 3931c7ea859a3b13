// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw GitHub issue JSON to [`HostIssue`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use teamwell_core::{HostIssue, IssueState, UNKNOWN_AUTHOR};
use tracing::warn;

/// True for listing entries that are pull requests rather than issues.
pub fn is_pull_request(raw: &Value) -> bool {
    raw.get("pull_request").is_some_and(|pr| !pr.is_null())
}

/// Normalize one listing entry. Pull requests and entries without a number
/// yield `None`.
pub fn to_host_issue(raw: &Value, repository: &str) -> Option<HostIssue> {
    if is_pull_request(raw) {
        return None;
    }
    let Some(number) = raw.get("number").and_then(Value::as_u64) else {
        warn!(repository, "skipping github issue without a number");
        return None;
    };

    let closed_at = timestamp(raw, "closed_at");
    let state = raw
        .get("state")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<IssueState>().ok())
        .unwrap_or(if closed_at.is_some() {
            IssueState::Closed
        } else {
            IssueState::Open
        });

    let mut issue = HostIssue::new(repository, number);
    issue.id = raw.get("id").and_then(Value::as_u64).unwrap_or(number);
    issue.title = raw
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    issue.body = raw
        .get("body")
        .and_then(Value::as_str)
        .filter(|b| !b.is_empty())
        .map(str::to_string);
    issue.state = state;
    issue.author = login(raw.get("user")).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    issue.assignees = assignees(raw);
    issue.labels = labels(raw);
    issue.created_at = timestamp(raw, "created_at");
    issue.updated_at = timestamp(raw, "updated_at");
    issue.closed_at = match state {
        IssueState::Closed => closed_at,
        IssueState::Open => None,
    };
    issue.comment_count = raw
        .get("comments")
        .and_then(Value::as_u64)
        .map(|c| u32::try_from(c).unwrap_or(u32::MAX))
        .unwrap_or(0);

    Some(issue)
}

fn login(user: Option<&Value>) -> Option<String> {
    user?.get("login")?.as_str().map(str::to_string)
}

fn assignees(raw: &Value) -> BTreeSet<String> {
    let mut set: BTreeSet<String> = raw
        .get("assignees")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(|a| login(Some(a))).collect())
        .unwrap_or_default();
    if set.is_empty()
        && let Some(single) = login(raw.get("assignee"))
    {
        set.insert(single);
    }
    set
}

/// Labels come as objects with a `name`; bare strings are accepted too.
fn labels(raw: &Value) -> BTreeSet<String> {
    raw.get("labels")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|l| l.as_str().or_else(|| l.get("name").and_then(Value::as_str)))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn timestamp(raw: &Value, name: &str) -> Option<DateTime<Utc>> {
    let value = raw.get(name)?.as_str()?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            warn!(field = name, value, error = %e, "unparsable github timestamp");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn converts_closed_issue() {
        let raw = json!({
            "id": 9001,
            "number": 103,
            "title": "Update documentation for new endpoints",
            "body": "Add documentation for the new endpoints.",
            "state": "closed",
            "user": {"login": "bob.eng"},
            "assignees": [{"login": "bob.eng"}],
            "labels": [{"name": "documentation"}],
            "created_at": "2024-01-08T16:00:00Z",
            "updated_at": "2024-01-14T17:30:00Z",
            "closed_at": "2024-01-14T17:30:00Z",
            "comments": 2
        });

        let issue = to_host_issue(&raw, "acme/widgets").unwrap();
        assert_eq!(issue.id, 9001);
        assert_eq!(issue.number, 103);
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.author, "bob.eng");
        assert!(issue.assignees.contains("bob.eng"));
        assert!(issue.labels.contains("documentation"));
        assert_eq!(
            issue.closed_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 14, 17, 30, 0).unwrap())
        );
        assert_eq!(issue.comment_count, 2);
        assert_eq!(issue.repository, "acme/widgets");
    }

    #[test]
    fn pull_requests_are_skipped() {
        let raw = json!({"number": 5, "pull_request": {"url": "https://api.github.com/..."}});
        assert!(is_pull_request(&raw));
        assert!(to_host_issue(&raw, "a/b").is_none());

        let raw = json!({"number": 6, "pull_request": null});
        assert!(!is_pull_request(&raw));
        assert!(to_host_issue(&raw, "a/b").is_some());
    }

    #[test]
    fn open_issue_drops_closed_timestamp() {
        let raw = json!({"number": 1, "state": "open", "closed_at": "2024-01-01T00:00:00Z"});
        let issue = to_host_issue(&raw, "a/b").unwrap();
        assert_eq!(issue.state, IssueState::Open);
        assert!(issue.closed_at.is_none());
    }

    #[test]
    fn missing_state_is_inferred_from_closed_at() {
        let closed = json!({"number": 1, "closed_at": "2024-01-01T00:00:00Z"});
        assert_eq!(to_host_issue(&closed, "a/b").unwrap().state, IssueState::Closed);

        let open = json!({"number": 2, "state": "weird"});
        assert_eq!(to_host_issue(&open, "a/b").unwrap().state, IssueState::Open);
    }

    #[test]
    fn sparse_entry_defaults() {
        let issue = to_host_issue(&json!({"number": 7}), "a/b").unwrap();
        assert_eq!(issue.id, 7);
        assert_eq!(issue.author, UNKNOWN_AUTHOR);
        assert!(issue.body.is_none());
        assert!(issue.assignees.is_empty());
        assert_eq!(issue.comment_count, 0);
    }

    #[test]
    fn single_assignee_field_is_used_as_fallback() {
        let raw = json!({"number": 8, "assignee": {"login": "alice.dev"}, "assignees": []});
        let issue = to_host_issue(&raw, "a/b").unwrap();
        assert_eq!(issue.assignees.into_iter().collect::<Vec<_>>(), vec!["alice.dev"]);
    }

    #[test]
    fn entry_without_number_is_dropped() {
        assert!(to_host_issue(&json!({"id": 1, "title": "x"}), "a/b").is_none());
    }
}
