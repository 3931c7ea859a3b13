// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Teamwell.
//!
//! Holds the normalized record types every source adapter produces, the
//! workspace error type, and the [`SourceAdapter`] trait that the chat,
//! tracker, and host integrations implement.

pub mod error;
pub mod traits;
pub mod types;

pub use error::TeamwellError;
pub use traits::{ChatSource, FetchOutcome, FetchStatus, HostSource, SourceAdapter, TrackerSource};
pub use types::{
    ChatMessage, HostIssue, IssueState, ProjectStatistics, RepoRef, RepositoryStatistics,
    SourceKind, SourceStatistics, TrackerIssue, UNKNOWN_AUTHOR,
};
