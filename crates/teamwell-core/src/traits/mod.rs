// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.

pub mod source;

pub use source::{ChatSource, FetchOutcome, FetchStatus, HostSource, SourceAdapter, TrackerSource};
