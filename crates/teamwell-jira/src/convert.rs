// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw Jira issue JSON to [`TrackerIssue`].
//!
//! Every field is read independently. A missing or oddly-typed field leaves
//! that field unset; only an issue without a key is dropped.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use teamwell_core::{TrackerIssue, UNKNOWN_AUTHOR};
use tracing::warn;

/// Jira's own timestamp layout: `2024-01-15T09:30:00.000+0000`.
const JIRA_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

pub fn to_tracker_issue(
    raw: &Value,
    project_key: &str,
    story_points_field: &str,
) -> Option<TrackerIssue> {
    let Some(key) = raw.get("key").and_then(Value::as_str).filter(|k| !k.is_empty()) else {
        warn!("skipping jira issue without a key");
        return None;
    };

    let null = Value::Null;
    let fields = raw.get("fields").unwrap_or(&null);

    let mut issue = TrackerIssue::new(key, project_key);
    issue.issue_id = raw
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    issue.summary = fields
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    issue.description = fields.get("description").and_then(description_text);
    issue.status = nested_str(fields, "status", "name");
    issue.priority = nested_str(fields, "priority", "name");
    issue.issue_type = nested_str(fields, "issuetype", "name");
    issue.reporter =
        nested_str(fields, "reporter", "displayName").unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    issue.assignee = nested_str(fields, "assignee", "displayName");
    issue.labels = string_set(fields.get("labels"), None);
    issue.components = string_set(fields.get("components"), Some("name"));
    issue.created = date_field(fields, "created");
    issue.updated = date_field(fields, "updated");
    issue.resolved = date_field(fields, "resolutiondate").or_else(|| date_field(fields, "resolved"));
    issue.story_points = fields.get(story_points_field).and_then(Value::as_f64);
    issue.time_spent_secs = fields.get("timespent").and_then(Value::as_i64);

    Some(issue)
}

/// Parse a Jira timestamp, accepting RFC 3339 and Jira's `+0000` offset form.
pub fn parse_jira_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, JIRA_DATETIME))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn date_field(fields: &Value, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.as_str()?;
    let parsed = parse_jira_datetime(raw);
    if parsed.is_none() {
        warn!(field = name, value = raw, "unparsable jira timestamp");
    }
    parsed
}

fn nested_str(fields: &Value, object: &str, name: &str) -> Option<String> {
    fields
        .get(object)?
        .get(name)?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Collect strings from an array, either directly or from `member` of each object.
fn string_set(value: Option<&Value>, member: Option<&str>) -> BTreeSet<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return BTreeSet::new();
    };
    items
        .iter()
        .filter_map(|item| match member {
            Some(m) => item.get(m).and_then(Value::as_str),
            None => item.as_str(),
        })
        .map(str::to_string)
        .collect()
}

/// Plain strings pass through; Atlassian Document Format trees are flattened.
fn description_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Object(_) => {
            let mut out = String::new();
            flatten_adf(value, &mut out);
            out.trim_end().to_string()
        }
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn flatten_adf(node: &Value, out: &mut String) {
    let kind = node.get("type").and_then(Value::as_str).unwrap_or_default();
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }
    if kind == "hardBreak" {
        out.push('\n');
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            flatten_adf(child, out);
        }
    }
    let is_block = matches!(
        kind,
        "paragraph" | "heading" | "blockquote" | "codeBlock" | "rule"
    );
    if is_block && !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
