// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock source adapter for deterministic cycle tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use teamwell_core::{
    ChatMessage, FetchOutcome, HostIssue, RepoRef, SourceAdapter, SourceKind, SourceStatistics,
    TrackerIssue,
};

/// A source whose fetches pop scripted outcomes from a FIFO queue.
///
/// With an empty queue it answers `Ok` with the default records. Clones share
/// state, so a test can keep one handle for assertions and give the other to
/// the code under test.
pub struct MockSource<S, R> {
    name: String,
    kind: SourceKind,
    scope: S,
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    outcomes: Mutex<VecDeque<FetchOutcome<R>>>,
    default_records: Mutex<Vec<R>>,
    statistics: Mutex<Option<SourceStatistics>>,
    latency: Mutex<Duration>,
    fetch_calls: AtomicUsize,
    connectivity_calls: AtomicUsize,
    statistics_calls: AtomicUsize,
    configured: AtomicBool,
    reachable: AtomicBool,
    panics: AtomicBool,
    statistics_panics: AtomicBool,
}

pub type MockChat = MockSource<String, ChatMessage>;
pub type MockTracker = MockSource<String, TrackerIssue>;
pub type MockHost = MockSource<RepoRef, HostIssue>;

impl<S: Clone, R> Clone for MockSource<S, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            scope: self.scope.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, R> MockSource<S, R> {
    pub fn new(name: &str, kind: SourceKind, scope: S) -> Self {
        Self {
            name: name.to_string(),
            kind,
            scope,
            inner: Arc::new(Inner {
                outcomes: Mutex::new(VecDeque::new()),
                default_records: Mutex::new(Vec::new()),
                statistics: Mutex::new(None),
                latency: Mutex::new(Duration::ZERO),
                fetch_calls: AtomicUsize::new(0),
                connectivity_calls: AtomicUsize::new(0),
                statistics_calls: AtomicUsize::new(0),
                configured: AtomicBool::new(true),
                reachable: AtomicBool::new(true),
                panics: AtomicBool::new(false),
                statistics_panics: AtomicBool::new(false),
            }),
        }
    }

    /// Records returned whenever no scripted outcome is queued.
    pub async fn set_records(&self, records: Vec<R>) {
        *self.inner.default_records.lock().await = records;
    }

    pub async fn push_outcome(&self, outcome: FetchOutcome<R>) {
        self.inner.outcomes.lock().await.push_back(outcome);
    }

    pub async fn set_statistics(&self, stats: Option<SourceStatistics>) {
        *self.inner.statistics.lock().await = stats;
    }

    /// Delay every fetch by `latency`.
    pub async fn set_latency(&self, latency: Duration) {
        *self.inner.latency.lock().await = latency;
    }

    /// Make every fetch panic.
    pub fn panic_on_fetch(&self) {
        self.inner.panics.store(true, Ordering::SeqCst);
    }

    /// Make every statistics lookup panic.
    pub fn panic_on_statistics(&self) {
        self.inner.statistics_panics.store(true, Ordering::SeqCst);
    }

    pub fn set_configured(&self, configured: bool) {
        self.inner.configured.store(configured, Ordering::SeqCst);
    }

    /// What `test_connectivity` answers.
    pub fn set_reachable(&self, reachable: bool) {
        self.inner.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.inner.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn connectivity_calls(&self) -> usize {
        self.inner.connectivity_calls.load(Ordering::SeqCst)
    }

    pub fn statistics_calls(&self) -> usize {
        self.inner.statistics_calls.load(Ordering::SeqCst)
    }
}

impl MockChat {
    pub fn chat() -> Self {
        Self::new("mock-chat", SourceKind::Chat, "general".to_string())
    }
}

impl MockTracker {
    pub fn tracker() -> Self {
        Self::new("mock-tracker", SourceKind::Tracker, "PROJ".to_string())
    }
}

impl MockHost {
    pub fn host() -> Self {
        Self::new("mock-host", SourceKind::Host, RepoRef::new("acme", "widgets"))
    }
}

#[async_trait]
impl<S, R> SourceAdapter for MockSource<S, R>
where
    S: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    type Scope = S;
    type Record = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn is_configured(&self) -> bool {
        self.inner.configured.load(Ordering::SeqCst)
    }

    fn default_scope(&self) -> S {
        self.scope.clone()
    }

    async fn fetch_recent(&self, _scope: &S) -> FetchOutcome<R> {
        self.inner.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let latency = *self.inner.latency.lock().await;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if self.inner.panics.load(Ordering::SeqCst) {
            panic!("{} fetch panicked", self.name);
        }

        if let Some(outcome) = self.inner.outcomes.lock().await.pop_front() {
            return outcome;
        }
        let records = self.inner.default_records.lock().await.clone();
        if self.is_configured() {
            FetchOutcome::ok(records)
        } else {
            FetchOutcome::not_configured(records)
        }
    }

    async fn test_connectivity(&self) -> bool {
        self.inner.connectivity_calls.fetch_add(1, Ordering::SeqCst);
        self.is_configured() && self.inner.reachable.load(Ordering::SeqCst)
    }

    async fn statistics(&self) -> Option<SourceStatistics> {
        self.inner.statistics_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.statistics_panics.load(Ordering::SeqCst) {
            panic!("{} statistics panicked", self.name);
        }
        self.inner.statistics.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::chat_message;
    use teamwell_core::FetchStatus;

    #[tokio::test]
    async fn scripted_outcomes_come_first() {
        let mock = MockChat::chat();
        mock.set_records(vec![chat_message("ada", "hi")]).await;
        mock.push_outcome(FetchOutcome::failed("scripted")).await;

        let scope = mock.default_scope();
        assert!(mock.fetch_recent(&scope).await.is_failed());
        let second = mock.fetch_recent(&scope).await;
        assert_eq!(second.status, FetchStatus::Ok);
        assert_eq!(second.len(), 1);
        assert_eq!(mock.fetch_calls(), 2);
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let mock = MockTracker::tracker();
        let handle = mock.clone();
        mock.fetch_recent(&"PROJ".to_string()).await;
        assert_eq!(handle.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn unconfigured_mock_reports_not_configured() {
        let mock = MockHost::host();
        mock.set_configured(false);
        let outcome = mock.fetch_recent(&mock.default_scope()).await;
        assert_eq!(outcome.status, FetchStatus::NotConfigured);
        assert!(!mock.test_connectivity().await);
    }

    #[tokio::test]
    #[should_panic(expected = "mock-chat fetch panicked")]
    async fn panic_mode_panics() {
        let mock = MockChat::chat();
        mock.panic_on_fetch();
        mock.fetch_recent(&"general".to_string()).await;
    }
}
