// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lock-guarded in-memory store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use teamwell_core::ChatMessage;
use tracing::{debug, info};

use crate::record::sealed::Tables;
use crate::record::StoredRecord;

/// Per-kind record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub chat_messages: usize,
    pub tracker_issues: usize,
    pub host_issues: usize,
    pub total: usize,
}

/// Keyed, last-write-wins storage for the three record kinds.
///
/// Every operation takes the single table lock once, so readers see either
/// all of a batch or none of it, and never a half-cleared store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a map half-written
    // (single inserts), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace each record by its key. Returns how many were written.
    pub fn upsert_batch<R, I>(&self, records: I) -> usize
    where
        R: StoredRecord,
        I: IntoIterator<Item = R>,
    {
        let keyed: Vec<(R::Key, R)> = records
            .into_iter()
            .map(|r| (r.store_key(), r))
            .collect();
        let written = keyed.len();

        let mut tables = self.write();
        let table = R::table_mut(&mut tables);
        table.extend(keyed);
        debug!(kind = %R::KIND, written, size = table.len(), "upserted batch");
        written
    }

    /// Records whose range timestamp `t` satisfies `start <= t <= end`,
    /// oldest first. Records without that timestamp never match.
    pub fn query_by_time_range<R: StoredRecord>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<R> {
        if start > end {
            return Vec::new();
        }
        let tables = self.read();
        let mut hits: Vec<(DateTime<Utc>, R)> = R::table(&tables)
            .values()
            .filter_map(|r| {
                let t = r.range_timestamp()?;
                (start <= t && t <= end).then(|| (t, r.clone()))
            })
            .collect();
        drop(tables);
        hits.sort_by_key(|(t, _)| *t);
        hits.into_iter().map(|(_, r)| r).collect()
    }

    /// Every stored record of kind `R`, ordered by key.
    pub fn list_all<R: StoredRecord>(&self) -> Vec<R> {
        let tables = self.read();
        let mut all: Vec<(R::Key, R)> = R::table(&tables)
            .iter()
            .map(|(k, r)| (k.clone(), r.clone()))
            .collect();
        drop(tables);
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all.into_iter().map(|(_, r)| r).collect()
    }

    pub fn get<R: StoredRecord>(&self, key: &R::Key) -> Option<R> {
        R::table(&self.read()).get(key).cloned()
    }

    /// Chat messages posted in `channel_name`, oldest first.
    pub fn messages_in_channel(&self, channel_name: &str) -> Vec<ChatMessage> {
        let tables = self.read();
        let mut messages: Vec<ChatMessage> = tables
            .chat
            .values()
            .filter(|m| m.channel_name == channel_name)
            .cloned()
            .collect();
        drop(tables);
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Empty every table under one write lock.
    pub fn clear_all(&self) {
        let mut tables = self.write();
        let removed = tables.chat.len() + tables.tracker.len() + tables.host.len();
        *tables = Tables::default();
        info!(removed, "cleared store");
    }

    pub fn stats(&self) -> StoreStats {
        let tables = self.read();
        let chat_messages = tables.chat.len();
        let tracker_issues = tables.tracker.len();
        let host_issues = tables.host.len();
        StoreStats {
            chat_messages,
            tracker_issues,
            host_issues,
            total: chat_messages + tracker_issues + host_issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamwell_core::{HostIssue, TrackerIssue};
    use teamwell_test_utils::{chat_message, host_issue, tracker_issue, ts};

    #[test]
    fn upsert_is_last_write_wins() {
        let store = MemoryStore::new();
        let mut first = tracker_issue("PROJ-1");
        first.summary = "first".into();
        first.labels.insert("old".into());
        let mut second = tracker_issue("PROJ-1");
        second.summary = "second".into();

        store.upsert_batch([first]);
        store.upsert_batch([second.clone()]);

        let all: Vec<TrackerIssue> = store.list_all();
        assert_eq!(all, vec![second]);
        assert!(all[0].labels.is_empty(), "no field-level merge");
    }

    #[test]
    fn duplicates_within_a_batch_collapse() {
        let store = MemoryStore::new();
        let written = store.upsert_batch([host_issue("a/b", 1), host_issue("a/b", 1), host_issue("a/b", 2)]);
        assert_eq!(written, 3);
        assert_eq!(store.stats().host_issues, 2);
    }

    #[test]
    fn time_range_is_inclusive_and_skips_missing() {
        let store = MemoryStore::new();
        let mut early = tracker_issue("P-1");
        early.created = Some(ts(8, 0));
        let mut edge = tracker_issue("P-2");
        edge.created = Some(ts(10, 0));
        let mut late = tracker_issue("P-3");
        late.created = Some(ts(12, 0));
        let mut undated = tracker_issue("P-4");
        undated.created = None;
        store.upsert_batch([late, undated, edge, early]);

        let hits: Vec<TrackerIssue> = store.query_by_time_range(ts(8, 0), ts(10, 0));
        let keys: Vec<_> = hits.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["P-1", "P-2"]);

        let wide: Vec<TrackerIssue> =
            store.query_by_time_range(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC);
        assert_eq!(wide.len(), 3, "undated issue never matches");
    }

    #[test]
    fn inverted_range_is_empty() {
        let store = MemoryStore::new();
        store.upsert_batch([chat_message("ada", "hi")]);
        let hits: Vec<ChatMessage> = store.query_by_time_range(ts(10, 0), ts(9, 0));
        assert!(hits.is_empty());
    }

    #[test]
    fn kinds_are_independent() {
        let store = MemoryStore::new();
        store.upsert_batch([chat_message("ada", "hi"), chat_message("bob", "hello")]);
        store.upsert_batch([tracker_issue("P-1")]);
        store.upsert_batch([host_issue("a/b", 1), host_issue("a/b", 2), host_issue("c/d", 1)]);

        assert_eq!(
            store.stats(),
            StoreStats {
                chat_messages: 2,
                tracker_issues: 1,
                host_issues: 3,
                total: 6
            }
        );
        assert!(store.get::<HostIssue>(&("c/d".into(), 1)).is_some());
        assert!(store.get::<HostIssue>(&("c/d".into(), 2)).is_none());
    }

    #[test]
    fn clear_all_empties_every_kind() {
        let store = MemoryStore::new();
        store.upsert_batch([chat_message("ada", "hi")]);
        store.upsert_batch([tracker_issue("P-1")]);
        store.upsert_batch([host_issue("a/b", 1)]);
        store.clear_all();

        assert!(store.list_all::<ChatMessage>().is_empty());
        assert!(store.list_all::<TrackerIssue>().is_empty());
        assert!(store.list_all::<HostIssue>().is_empty());
        assert_eq!(store.stats(), StoreStats::default());
    }

    #[test]
    fn messages_in_channel_filters_by_name() {
        let store = MemoryStore::new();
        let mut dev = chat_message("carol", "review please");
        dev.channel_name = "development".into();
        dev.channel_id = "C2".into();
        store.upsert_batch([chat_message("ada", "hi"), dev]);
        assert_eq!(store.messages_in_channel("development").len(), 1);
        assert!(store.messages_in_channel("random").is_empty());
    }
}
