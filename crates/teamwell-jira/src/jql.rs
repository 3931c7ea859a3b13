// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JQL query builders.

/// Statuses counted as open work.
pub const OPEN_STATUSES: [&str; 3] = ["To Do", "In Progress", "Open"];
/// Statuses counted as finished work.
pub const DONE_STATUSES: [&str; 3] = ["Done", "Closed", "Resolved"];

pub fn recent(project_key: &str) -> String {
    format!("project = {project_key} ORDER BY updated DESC")
}

pub fn for_assignee(project_key: &str, assignee: &str) -> String {
    format!(
        "project = {project_key} AND assignee = {} ORDER BY updated DESC",
        quote(assignee)
    )
}

pub fn with_statuses(project_key: &str, statuses: &[&str]) -> String {
    let list = statuses
        .iter()
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("project = {project_key} AND status in ({list})")
}

/// Double-quote a JQL value so account ids and emails survive intact.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
