// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Jira tracker source for Teamwell.
//!
//! Runs JQL searches against the Jira Cloud REST API (v3) and converts the
//! returned issues field by field into [`TrackerIssue`](teamwell_core::TrackerIssue)
//! records. Count-only searches back the project statistics.

pub mod adapter;
pub mod api;
pub mod client;
pub mod convert;
pub mod jql;

pub use adapter::JiraSource;
pub use api::{JiraApi, JiraProject, JiraUser, SearchPage};
pub use client::HttpJiraApi;
