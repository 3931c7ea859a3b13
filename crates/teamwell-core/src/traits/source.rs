// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source adapter trait for collaboration platform integrations.

use async_trait::async_trait;

use crate::types::{ChatMessage, HostIssue, RepoRef, SourceKind, SourceStatistics, TrackerIssue};

/// How a single fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The platform answered and its payload was converted.
    Ok,
    /// Credentials are placeholders; the records are the adapter's fallback.
    NotConfigured,
    /// Transport, auth, or body decoding failed. Records are empty.
    Failed(String),
}

/// Result of one `fetch_recent` call: the records plus how they were obtained.
///
/// This is a value, not an error. A failed fetch is an empty, `Failed`
/// outcome that the collection cycle inspects and logs.
#[derive(Debug, Clone)]
pub struct FetchOutcome<R> {
    pub records: Vec<R>,
    pub status: FetchStatus,
}

impl<R> FetchOutcome<R> {
    pub fn ok(records: Vec<R>) -> Self {
        Self {
            records,
            status: FetchStatus::Ok,
        }
    }

    /// Outcome for an unconfigured platform, carrying its fallback records.
    pub fn not_configured(fallback: Vec<R>) -> Self {
        Self {
            records: fallback,
            status: FetchStatus::NotConfigured,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            status: FetchStatus::Failed(reason.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FetchStatus::Failed(_))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// A polled collaboration platform.
///
/// Implementations must never panic or surface errors from
/// [`fetch_recent`](SourceAdapter::fetch_recent): every failure becomes a
/// [`FetchStatus::Failed`] outcome, and a placeholder credential must
/// short-circuit before any network call.
#[async_trait]
pub trait SourceAdapter: Send + Sync + 'static {
    /// What a fetch is scoped to (channel name, project key, repository).
    type Scope: Send + Sync;
    /// The normalized record this source produces.
    type Record: Send + 'static;

    /// Human-readable adapter name, used in logs.
    fn name(&self) -> &str;

    fn kind(&self) -> SourceKind;

    /// False when the platform credential is still a placeholder.
    fn is_configured(&self) -> bool;

    /// The scope configured as this source's default.
    fn default_scope(&self) -> Self::Scope;

    /// Fetch the most recent records for `scope`.
    async fn fetch_recent(&self, scope: &Self::Scope) -> FetchOutcome<Self::Record>;

    /// Lightweight authenticated "who am I" call. No side effects.
    async fn test_connectivity(&self) -> bool;

    /// Aggregate statistics for the default scope, if the source offers any.
    async fn statistics(&self) -> Option<SourceStatistics> {
        None
    }
}

/// Chat adapters: scoped by channel name.
pub type ChatSource = dyn SourceAdapter<Scope = String, Record = ChatMessage>;

/// Tracker adapters: scoped by project key.
pub type TrackerSource = dyn SourceAdapter<Scope = String, Record = TrackerIssue>;

/// Host adapters: scoped by repository.
pub type HostSource = dyn SourceAdapter<Scope = RepoRef, Record = HostIssue>;
