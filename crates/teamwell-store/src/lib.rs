// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory keyed store for collected records.
//!
//! One table per record kind, all behind a single lock so that
//! [`MemoryStore::clear_all`] is observed atomically. Writes are
//! last-write-wins by key with no field-level merge.

pub mod memory;
pub mod record;

pub use memory::{MemoryStore, StoreStats};
pub use record::{ChatKey, HostKey, StoredRecord};
