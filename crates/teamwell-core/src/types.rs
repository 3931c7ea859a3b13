// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalized record types shared by every source adapter.
//!
//! These shapes are independent of any platform wire format. Adapters build
//! them field by field; once built they are never mutated, only superseded
//! by a later fetch of the same identity.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::TeamwellError;

/// Placeholder used wherever a platform omits or hides the author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

fn unknown_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

/// The three kinds of collaboration platform Teamwell polls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Team chat (Slack).
    Chat,
    /// Issue tracker (Jira).
    Tracker,
    /// Source-code host (GitHub).
    Host,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Platform message id (Slack uses the message `ts`).
    pub message_id: String,
    pub channel_id: String,
    pub channel_name: String,
    #[serde(default)]
    pub author_id: Option<String>,
    /// Display name, or [`UNKNOWN_AUTHOR`].
    #[serde(default = "unknown_author")]
    pub author_name: String,
    #[serde(default)]
    pub text: String,
    /// When the message was posted. Falls back to processing time when the
    /// platform timestamp is missing or unparsable.
    pub timestamp: DateTime<Utc>,
    /// Parent thread reference, if this message is a reply.
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub reaction_count: u32,
}

/// A ticket from the issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerIssue {
    pub issue_id: String,
    /// Human key such as `PROJ-123`; the natural identity for dedup.
    pub key: String,
    pub summary: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub issue_type: Option<String>,
    pub reporter: String,
    pub assignee: Option<String>,
    pub labels: BTreeSet<String>,
    pub components: BTreeSet<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub resolved: Option<DateTime<Utc>>,
    pub project_key: String,
    pub story_points: Option<f64>,
    /// Logged work in seconds.
    pub time_spent_secs: Option<i64>,
}

impl TrackerIssue {
    /// An issue with only its identity populated; every other field unset.
    pub fn new(key: impl Into<String>, project_key: impl Into<String>) -> Self {
        Self {
            issue_id: String::new(),
            key: key.into(),
            summary: String::new(),
            description: None,
            status: None,
            priority: None,
            issue_type: None,
            reporter: unknown_author(),
            assignee: None,
            labels: BTreeSet::new(),
            components: BTreeSet::new(),
            created: None,
            updated: None,
            resolved: None,
            project_key: project_key.into(),
            story_points: None,
            time_spent_secs: None,
        }
    }
}

/// Open/closed state of a host issue. There is no third state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
}

/// An issue from the source-code host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIssue {
    pub id: u64,
    /// Issue number, unique within [`HostIssue::repository`].
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub author: String,
    pub assignees: BTreeSet<String>,
    pub labels: BTreeSet<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Only ever set when `state` is [`IssueState::Closed`].
    pub closed_at: Option<DateTime<Utc>>,
    /// Repository slug, `owner/name`.
    pub repository: String,
    pub comment_count: u32,
}

impl HostIssue {
    /// An open issue with only its identity populated.
    pub fn new(repository: impl Into<String>, number: u64) -> Self {
        Self {
            id: 0,
            number,
            title: String::new(),
            body: None,
            state: IssueState::Open,
            author: unknown_author(),
            assignees: BTreeSet::new(),
            labels: BTreeSet::new(),
            created_at: None,
            updated_at: None,
            closed_at: None,
            repository: repository.into(),
            comment_count: 0,
        }
    }
}

/// Owner and name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name`.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = TeamwellError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.split_once('/') {
            Some((owner, name))
                if !owner.trim().is_empty() && !name.trim().is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner.trim(), name.trim()))
            }
            _ => Err(TeamwellError::Config(format!(
                "invalid repository `{trimmed}`, expected owner/name"
            ))),
        }
    }
}

/// Aggregate counts for a tracker project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatistics {
    pub project_key: String,
    pub project_name: Option<String>,
    pub total: u64,
    pub open: u64,
    pub completed: u64,
}

/// Aggregate counts for a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStatistics {
    pub repository: String,
    pub total_issues: u64,
    pub open_issues: u64,
    pub closed_issues: u64,
    pub stars: u64,
    pub forks: u64,
}

/// Statistics a source can report alongside its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceStatistics {
    Project(ProjectStatistics),
    Repository(RepositoryStatistics),
}

impl fmt::Display for SourceStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceStatistics::Project(p) => {
                if let Some(name) = &p.project_name {
                    write!(f, "project {name} ({}): ", p.project_key)?;
                } else {
                    write!(f, "project {}: ", p.project_key)?;
                }
                write!(
                    f,
                    "{} total, {} open, {} completed",
                    p.total, p.open, p.completed
                )
            }
            SourceStatistics::Repository(r) => write!(
                f,
                "repository {}: {} total, {} open, {} closed, {} stars, {} forks",
                r.repository, r.total_issues, r.open_issues, r.closed_issues, r.stars, r.forks
            ),
        }
    }
}
