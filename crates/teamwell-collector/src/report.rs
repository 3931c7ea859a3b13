// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! What a collection cycle or connection check observed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use teamwell_core::{FetchStatus, SourceKind, SourceStatistics};

/// How one source's sub-step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SourceStatus {
    Ok,
    NotConfigured,
    Failed(String),
}

impl From<&FetchStatus> for SourceStatus {
    fn from(status: &FetchStatus) -> Self {
        match status {
            FetchStatus::Ok => SourceStatus::Ok,
            FetchStatus::NotConfigured => SourceStatus::NotConfigured,
            FetchStatus::Failed(reason) => SourceStatus::Failed(reason.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub kind: SourceKind,
    pub adapter: String,
    pub fetched: usize,
    /// Records written to the store (zero when persistence is off or the fetch failed).
    pub stored: usize,
    pub status: SourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SourceStatistics>,
    pub elapsed_ms: u64,
}

impl SourceReport {
    pub fn failed(kind: SourceKind, adapter: &str, reason: String) -> Self {
        Self {
            kind,
            adapter: adapter.to_string(),
            fetched: 0,
            stored: 0,
            status: SourceStatus::Failed(reason),
            statistics: None,
            elapsed_ms: 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SourceStatus::Failed(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// 1-based sequence number of this cycle within the process.
    pub cycle: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
}

impl CycleReport {
    pub fn source(&self, kind: SourceKind) -> Option<&SourceReport> {
        self.sources.iter().find(|s| s.kind == kind)
    }

    pub fn total_fetched(&self) -> usize {
        self.sources.iter().map(|s| s.fetched).sum()
    }

    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| s.is_failed())
    }
}

/// Result of probing every source's credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub chat: bool,
    pub tracker: bool,
    pub host: bool,
    pub overall: bool,
}

impl ConnectionReport {
    pub fn new(chat: bool, tracker: bool, host: bool) -> Self {
        Self {
            chat,
            tracker,
            host,
            overall: chat && tracker && host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_requires_every_source() {
        assert!(ConnectionReport::new(true, true, true).overall);
        assert!(!ConnectionReport::new(true, false, true).overall);
    }

    #[test]
    fn status_serializes_with_reason() {
        let json = serde_json::to_value(SourceStatus::Failed("timeout".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "reason": "timeout"}));
        let json = serde_json::to_value(SourceStatus::NotConfigured).unwrap();
        assert_eq!(json, serde_json::json!({"status": "not_configured"}));
    }

    #[test]
    fn report_lookup_and_totals() {
        let now = Utc::now();
        let mut ok = SourceReport::failed(SourceKind::Chat, "slack", String::new());
        ok.status = SourceStatus::Ok;
        ok.fetched = 3;
        let report = CycleReport {
            cycle: 1,
            started_at: now,
            finished_at: now,
            sources: vec![ok, SourceReport::failed(SourceKind::Host, "github", "boom".into())],
        };
        assert_eq!(report.total_fetched(), 3);
        assert_eq!(report.failed_sources().count(), 1);
        assert!(report.source(SourceKind::Tracker).is_none());
    }
}
