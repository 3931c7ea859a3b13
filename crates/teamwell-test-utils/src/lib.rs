// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Teamwell.
//!
//! - [`MockSource`]: a [`SourceAdapter`](teamwell_core::SourceAdapter) with
//!   scripted outcomes, call counting, optional latency, and a panic mode.
//! - [`builders`]: terse constructors for normalized records.

pub mod builders;
pub mod mock_source;

pub use builders::{chat_message, host_issue, ts, tracker_issue};
pub use mock_source::{MockChat, MockHost, MockSource, MockTracker};
