// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A misbehaving source must not take the rest of the cycle down with it.

use std::sync::Arc;
use std::time::Duration;

use teamwell_collector::{CollectionCycle, CycleState, SourceStatus};
use teamwell_config::model::CollectionConfig;
use teamwell_core::{FetchOutcome, SourceKind};
use teamwell_store::MemoryStore;
use teamwell_test_utils::{chat_message, host_issue, tracker_issue, MockChat, MockHost, MockTracker};

fn build(chat: &MockChat, tracker: &MockTracker, host: &MockHost) -> Arc<CollectionCycle> {
    Arc::new(CollectionCycle::new(
        Arc::new(chat.clone()),
        Arc::new(tracker.clone()),
        Arc::new(host.clone()),
        Arc::new(MemoryStore::new()),
        CollectionConfig::default(),
    ))
}

#[tokio::test]
async fn panicking_chat_source_does_not_stop_the_others() {
    let chat = MockChat::chat();
    let tracker = MockTracker::tracker();
    let host = MockHost::host();
    chat.panic_on_fetch();
    tracker.set_records(vec![tracker_issue("PROJ-7")]).await;
    host.set_records(vec![host_issue("acme/widgets", 42)]).await;
    let cycle = build(&chat, &tracker, &host);

    let report = cycle.run_cycle().await;

    let chat_report = report.source(SourceKind::Chat).unwrap();
    assert!(chat_report.is_failed());
    assert_eq!(
        chat_report.status,
        SourceStatus::Failed("mock-chat collection panicked".into())
    );
    assert_eq!(report.source(SourceKind::Tracker).unwrap().stored, 1);
    assert_eq!(report.source(SourceKind::Host).unwrap().stored, 1);

    let stats = cycle.store_stats();
    assert_eq!(stats.chat_messages, 0);
    assert_eq!(stats.total, 2);
    assert_eq!(cycle.cycles_completed(), 1);
    assert_eq!(cycle.state(), CycleState::Idle);
}

#[tokio::test]
async fn every_source_failing_still_completes_the_cycle() {
    let chat = MockChat::chat();
    let tracker = MockTracker::tracker();
    let host = MockHost::host();
    chat.push_outcome(FetchOutcome::failed("timeout")).await;
    tracker.push_outcome(FetchOutcome::failed("401")).await;
    host.push_outcome(FetchOutcome::failed("dns")).await;
    let cycle = build(&chat, &tracker, &host);

    let report = cycle.run_cycle().await;
    assert_eq!(report.failed_sources().count(), 3);
    assert_eq!(cycle.store_stats().total, 0);
    assert_eq!(cycle.last_report().unwrap().cycle, 1);
}

#[tokio::test]
async fn fallback_records_from_unconfigured_sources_are_stored() {
    let chat = MockChat::chat();
    let tracker = MockTracker::tracker();
    let host = MockHost::host();
    chat.set_configured(false);
    chat.set_records(vec![chat_message("alice.dev", "fixture message")]).await;
    let cycle = build(&chat, &tracker, &host);

    let report = cycle.run_cycle().await;
    let chat_report = report.source(SourceKind::Chat).unwrap();
    assert_eq!(chat_report.status, SourceStatus::NotConfigured);
    assert_eq!(chat_report.stored, 1);
    assert_eq!(cycle.collected_data().chat_messages[0].author_name, "alice.dev");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn overlapping_cycles_both_complete() {
    let chat = MockChat::chat();
    let tracker = MockTracker::tracker();
    let host = MockHost::host();
    chat.set_latency(Duration::from_millis(50)).await;
    chat.set_records(vec![chat_message("ada", "hello")]).await;
    let cycle = build(&chat, &tracker, &host);

    let first = tokio::spawn({
        let cycle = Arc::clone(&cycle);
        async move { cycle.run_cycle().await }
    });
    let second = tokio::spawn({
        let cycle = Arc::clone(&cycle);
        async move { cycle.run_cycle().await }
    });
    let (a, b) = (first.await.unwrap(), second.await.unwrap());

    let mut numbers = [a.cycle, b.cycle];
    numbers.sort();
    assert_eq!(numbers, [1, 2]);
    assert_eq!(cycle.cycles_completed(), 2);
    assert_eq!(cycle.store_stats().chat_messages, 1);
    assert_eq!(cycle.state(), CycleState::Idle);
}

#[test]
fn cycle_report_serializes_statuses() {
    let status = serde_json::to_value(SourceStatus::Failed("boom".into())).unwrap();
    assert_eq!(status["status"], "failed");
    assert_eq!(status["reason"], "boom");
}
