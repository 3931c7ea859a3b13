// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed word lists. Matching is lower-case substring containment.

pub const POSITIVE: [&str; 6] = ["happy", "great", "awesome", "good", "excited", "love"];
pub const NEGATIVE: [&str; 6] = ["sad", "bad", "tired", "upset", "angry", "hate"];
pub const STRESS: [&str; 5] = ["stress", "overwhelmed", "busy", "deadline", "pressure"];
pub const OVERLOAD: [&str; 4] = ["overloaded", "too much", "can't handle", "swamped"];

/// Marker preceding a self-reported feeling.
pub const FEEL: &str = "feel";

/// How many entries of `words` occur in `text`. Each word counts at most once.
pub fn hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}
