// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Team wellbeing classification from chat messages.
//!
//! A deterministic keyword count: no state, no I/O. See [`classify`].

pub mod classifier;
pub mod lexicon;

pub use classifier::{classify, Mood, StressLevel, WellbeingStatus};
