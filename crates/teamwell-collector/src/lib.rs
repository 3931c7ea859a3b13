// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data collection orchestration for Teamwell.
//!
//! [`CollectionCycle`] polls the chat, tracker, and host sources once,
//! isolating each so a failure or panic in one never stops the others, and
//! upserts what it gets into the [`MemoryStore`](teamwell_store::MemoryStore).
//! [`CollectionScheduler`] runs that same cycle on a fixed delay until
//! cancelled. [`shutdown`] turns SIGINT/SIGTERM into a cancellation token.

pub mod cycle;
pub mod report;
pub mod scheduler;
pub mod shutdown;

pub use cycle::{CollectedData, CollectionCycle, CycleState};
pub use report::{ConnectionReport, CycleReport, SourceReport, SourceStatus};
pub use scheduler::CollectionScheduler;
