// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One pass over every source.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use teamwell_config::model::CollectionConfig;
use teamwell_core::{
    ChatMessage, ChatSource, FetchStatus, HostIssue, HostSource, SourceAdapter, SourceKind,
    TrackerIssue, TrackerSource,
};
use teamwell_store::{MemoryStore, StoreStats, StoredRecord};
use teamwell_wellbeing::{classify, WellbeingStatus};
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

use crate::report::{ConnectionReport, CycleReport, SourceReport, SourceStatus};

/// Whether any cycle is currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleState {
    Idle,
    Running,
}

/// Everything in the store, with counts.
#[derive(Debug, Clone, Serialize)]
pub struct CollectedData {
    pub chat_messages: Vec<ChatMessage>,
    pub tracker_issues: Vec<TrackerIssue>,
    pub host_issues: Vec<HostIssue>,
    pub statistics: StoreStats,
}

/// Polls the three sources and feeds the store.
///
/// Manual triggers and the scheduler both call [`run_cycle`](Self::run_cycle).
/// Overlapping invocations are not serialized; each runs to completion and
/// upserts are idempotent by key.
pub struct CollectionCycle {
    chat: Arc<ChatSource>,
    tracker: Arc<TrackerSource>,
    host: Arc<HostSource>,
    store: Arc<MemoryStore>,
    settings: CollectionConfig,
    started: AtomicU64,
    completed: AtomicU64,
    in_flight: AtomicUsize,
    last_report: Mutex<Option<CycleReport>>,
}

impl CollectionCycle {
    pub fn new(
        chat: Arc<ChatSource>,
        tracker: Arc<TrackerSource>,
        host: Arc<HostSource>,
        store: Arc<MemoryStore>,
        settings: CollectionConfig,
    ) -> Self {
        Self {
            chat,
            tracker,
            host,
            store,
            settings,
            started: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            last_report: Mutex::new(None),
        }
    }

    /// Run one collection pass.
    ///
    /// The three sub-steps run as separate tasks. A failed fetch or a panic in
    /// one adapter shows up as a `Failed` entry in the report; the others
    /// still run and store their records.
    pub async fn run_cycle(&self) -> CycleReport {
        let cycle = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        let _in_flight = InFlight::enter(&self.in_flight);
        let started_at = Utc::now();
        info!(cycle, "starting data collection");

        let chat_name = self.chat.name().to_string();
        let tracker_name = self.tracker.name().to_string();
        let host_name = self.host.name().to_string();

        let chat = tokio::spawn(collect_source(
            Arc::clone(&self.chat),
            Arc::clone(&self.store),
            self.settings.clone(),
        ));
        let tracker = tokio::spawn(collect_source(
            Arc::clone(&self.tracker),
            Arc::clone(&self.store),
            self.settings.clone(),
        ));
        let host = tokio::spawn(collect_source(
            Arc::clone(&self.host),
            Arc::clone(&self.store),
            self.settings.clone(),
        ));
        let (chat, tracker, host) = tokio::join!(chat, tracker, host);

        let report = CycleReport {
            cycle,
            started_at,
            finished_at: Utc::now(),
            sources: vec![
                settle(SourceKind::Chat, &chat_name, chat),
                settle(SourceKind::Tracker, &tracker_name, tracker),
                settle(SourceKind::Host, &host_name, host),
            ],
        };

        let failed = report.failed_sources().count();
        info!(
            cycle,
            fetched = report.total_fetched(),
            failed,
            elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
            "completed data collection"
        );

        *self
            .last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(report.clone());
        self.completed.fetch_add(1, Ordering::SeqCst);
        report
    }

    pub fn last_report(&self) -> Option<CycleReport> {
        self.last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn cycles_completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> CycleState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            CycleState::Running
        } else {
            CycleState::Idle
        }
    }

    /// Probe every source's credentials concurrently.
    pub async fn test_all_connections(&self) -> ConnectionReport {
        info!("testing all integration connections");
        let (chat, tracker, host) = tokio::join!(
            self.chat.test_connectivity(),
            self.tracker.test_connectivity(),
            self.host.test_connectivity(),
        );
        let report = ConnectionReport::new(chat, tracker, host);
        info!(chat, tracker, host, overall = report.overall, "connection test results");
        report
    }

    /// Classify the default chat channel from a fresh fetch.
    ///
    /// Reads the live source, not the store, so the answer reflects the
    /// channel right now even if no cycle has run yet.
    pub async fn analyze_wellbeing(&self) -> WellbeingStatus {
        let channel = self.chat.default_scope();
        let outcome = self.chat.fetch_recent(&channel).await;
        if let FetchStatus::Failed(reason) = &outcome.status {
            warn!(channel = %channel, reason = %reason, "chat fetch failed, classifying an empty batch");
        }
        let status = classify(&outcome.records);
        info!(
            channel = %channel,
            messages = status.messages_analyzed,
            mood = %status.mood,
            stress = %status.stress,
            "analyzed team wellbeing"
        );
        status
    }

    pub fn collected_data(&self) -> CollectedData {
        CollectedData {
            chat_messages: self.store.list_all(),
            tracker_issues: self.store.list_all(),
            host_issues: self.store.list_all(),
            statistics: self.store.stats(),
        }
    }

    pub fn clear_data(&self) {
        self.store.clear_all();
    }

    pub fn store_stats(&self) -> StoreStats {
        self.store.stats()
    }

    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }
}

/// Holds one slot of the in-flight count until dropped, including when the
/// cycle future is cancelled mid-flight.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Fetch, persist, and optionally gather statistics for one source.
async fn collect_source<S, R>(
    source: Arc<dyn SourceAdapter<Scope = S, Record = R>>,
    store: Arc<MemoryStore>,
    settings: CollectionConfig,
) -> SourceReport
where
    S: Send + Sync + 'static,
    R: StoredRecord + Debug,
{
    let clock = Instant::now();
    let name = source.name().to_string();
    info!(source = %name, "collecting");

    let scope = source.default_scope();
    let outcome = source.fetch_recent(&scope).await;
    let fetched = outcome.len();
    let status = SourceStatus::from(&outcome.status);

    match &status {
        SourceStatus::Failed(reason) => {
            error!(source = %name, reason = %reason, "collection failed");
        }
        _ => {
            info!(source = %name, fetched, ?status, "collected");
            if let Some(sample) = outcome.records.first() {
                debug!(source = %name, ?sample, "sample record");
            }
        }
    }

    let stored = if settings.persist && !outcome.is_failed() {
        store.upsert_batch(outcome.into_records())
    } else {
        0
    };

    // Own task: a panic here must not erase the counts of records already stored.
    let statistics = if settings.include_statistics && source.is_configured() {
        let stats_source = Arc::clone(&source);
        match tokio::spawn(async move { stats_source.statistics().await }).await {
            Ok(Some(stats)) => {
                info!(source = %name, "{stats}");
                Some(stats)
            }
            Ok(None) => None,
            Err(e) => {
                error!(source = %name, error = %e, "statistics lookup panicked");
                None
            }
        }
    } else {
        None
    };

    SourceReport {
        kind: R::KIND,
        adapter: name,
        fetched,
        stored,
        status,
        statistics,
        elapsed_ms: u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}

/// Turn a sub-step task result into a report, containing panics.
fn settle(kind: SourceKind, adapter: &str, joined: Result<SourceReport, JoinError>) -> SourceReport {
    match joined {
        Ok(report) => report,
        Err(e) => {
            let reason = if e.is_panic() {
                format!("{adapter} collection panicked")
            } else {
                format!("{adapter} collection was cancelled")
            };
            error!(source = adapter, %kind, "{reason}");
            SourceReport::failed(kind, adapter, reason)
        }
    }
}
