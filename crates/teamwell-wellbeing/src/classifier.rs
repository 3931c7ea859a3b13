// SPDX-FileCopyrightText: 2026 Teamwell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score messages and map the scores onto mood and stress levels.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use strum::{Display, EnumString};
use teamwell_core::ChatMessage;

use crate::lexicon::{self, hits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    /// Positive above 2, negative below -2.
    pub fn from_score(score: i64) -> Self {
        if score > 2 {
            Mood::Positive
        } else if score < -2 {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Low only at zero; moderate at 1 and 2; high above 2.
    pub fn from_score(score: u64) -> Self {
        if score > 2 {
            StressLevel::High
        } else if score < 1 {
            StressLevel::Low
        } else {
            StressLevel::Moderate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellbeingStatus {
    pub mood: Mood,
    pub stress: StressLevel,
    /// Authors with at least one overload mention.
    pub overloaded_members: BTreeSet<String>,
    /// Author to the word following their latest "feel".
    pub member_feelings: BTreeMap<String, String>,
    pub mood_score: i64,
    pub stress_score: u64,
    pub messages_analyzed: usize,
}

/// Classify a batch of messages.
pub fn classify(messages: &[ChatMessage]) -> WellbeingStatus {
    let mut mood_score: i64 = 0;
    let mut stress_score: u64 = 0;
    let mut overload: HashMap<&str, usize> = HashMap::new();
    let mut member_feelings = BTreeMap::new();

    for message in messages {
        let text = message.text.to_lowercase();
        let author = message.author_name.as_str();

        mood_score += hits(&text, &lexicon::POSITIVE) as i64;
        mood_score -= hits(&text, &lexicon::NEGATIVE) as i64;
        stress_score += hits(&text, &lexicon::STRESS) as u64;

        let overload_hits = hits(&text, &lexicon::OVERLOAD);
        if overload_hits > 0 {
            *overload.entry(author).or_default() += overload_hits;
        }

        if let Some(feeling) = feeling_after_marker(&text) {
            member_feelings.insert(author.to_string(), feeling.to_string());
        }
    }

    WellbeingStatus {
        mood: Mood::from_score(mood_score),
        stress: StressLevel::from_score(stress_score),
        overloaded_members: overload
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(author, _)| author.to_string())
            .collect(),
        member_feelings,
        mood_score,
        stress_score,
        messages_analyzed: messages.len(),
    }
}

/// First token after the first "feel" in already-lowercased text.
///
/// Empty when nothing follows the marker; `None` only without a marker.
fn feeling_after_marker(text: &str) -> Option<&str> {
    let start = text.find(lexicon::FEEL)? + lexicon::FEEL.len();
    Some(text[start..].split_whitespace().next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamwell_test_utils::chat_message;

    fn msgs(items: &[(&str, &str)]) -> Vec<ChatMessage> {
        items.iter().map(|(a, t)| chat_message(a, t)).collect()
    }

    #[test]
    fn empty_batch_is_neutral_and_low() {
        let status = classify(&[]);
        assert_eq!(status.mood, Mood::Neutral);
        assert_eq!(status.stress, StressLevel::Low);
        assert!(status.overloaded_members.is_empty());
        assert!(status.member_feelings.is_empty());
    }

    #[test]
    fn mood_score_of_two_is_still_neutral() {
        let status = classify(&msgs(&[
            ("ada", "I feel happy today"),
            ("ada", "I feel happy today"),
        ]));
        assert_eq!(status.mood_score, 2);
        assert_eq!(status.mood, Mood::Neutral);
    }

    #[test]
    fn mood_turns_positive_above_two() {
        let status = classify(&msgs(&[
            ("ada", "I feel happy today"),
            ("ada", "I feel happy today"),
            ("bob", "great demo"),
            ("bob", "awesome fix"),
            ("cy", "love it"),
        ]));
        assert_eq!(status.mood_score, 5);
        assert_eq!(status.mood, Mood::Positive);
    }

    #[test]
    fn mood_turns_negative_below_minus_two() {
        let status = classify(&msgs(&[("ada", "sad and tired, bad day, I hate this")]));
        assert_eq!(status.mood_score, -4);
        assert_eq!(status.mood, Mood::Negative);
    }

    #[test]
    fn one_message_can_hit_several_categories() {
        let status = classify(&msgs(&[("ada", "Great news but the deadline pressure is bad")]));
        assert_eq!(status.mood_score, 0);
        assert_eq!(status.stress_score, 2);
        assert_eq!(status.stress, StressLevel::Moderate);
    }

    #[test]
    fn three_stress_words_is_high() {
        let status = classify(&msgs(&[(
            "ada",
            "I am so stressed and overwhelmed, this deadline is brutal",
        )]));
        assert_eq!(status.stress_score, 3);
        assert_eq!(status.stress, StressLevel::High);
    }

    #[test]
    fn overwhelming_is_not_overwhelmed() {
        let status = classify(&msgs(&[(
            "ada",
            "I am so stressed, this deadline is overwhelming",
        )]));
        assert_eq!(status.stress_score, 2);
        assert_eq!(status.stress, StressLevel::Moderate);
    }

    #[test]
    fn stress_boundaries() {
        assert_eq!(StressLevel::from_score(0), StressLevel::Low);
        assert_eq!(StressLevel::from_score(1), StressLevel::Moderate);
        assert_eq!(StressLevel::from_score(2), StressLevel::Moderate);
        assert_eq!(StressLevel::from_score(3), StressLevel::High);
        assert_eq!(Mood::from_score(3), Mood::Positive);
        assert_eq!(Mood::from_score(-2), Mood::Neutral);
        assert_eq!(Mood::from_score(-3), Mood::Negative);
    }

    #[test]
    fn overloaded_authors_are_collected() {
        let status = classify(&msgs(&[
            ("alice", "I'm swamped and overloaded"),
            ("bob", "all fine here"),
            ("carol", "this is TOO MUCH"),
        ]));
        assert_eq!(
            status.overloaded_members,
            BTreeSet::from(["alice".to_string(), "carol".to_string()])
        );
    }

    #[test]
    fn feeling_is_word_after_feel() {
        let status = classify(&msgs(&[("ada", "I feel great")]));
        assert_eq!(status.member_feelings["ada"], "great");
    }

    #[test]
    fn latest_feeling_wins_per_author() {
        let status = classify(&msgs(&[
            ("ada", "I feel tired"),
            ("bob", "we feel   ready"),
            ("ada", "Now I FEEL Better!"),
        ]));
        assert_eq!(status.member_feelings["ada"], "better!");
        assert_eq!(status.member_feelings["bob"], "ready");
    }

    #[test]
    fn feel_prefix_matches_inside_words() {
        let status = classify(&msgs(&[("ada", "feeling good")]));
        assert_eq!(status.member_feelings["ada"], "ing");
    }

    #[test]
    fn trailing_feel_records_an_empty_feeling() {
        let status = classify(&msgs(&[("ada", "what do you feel")]));
        assert_eq!(status.member_feelings["ada"], "");
    }

    #[test]
    fn trailing_feel_overwrites_an_earlier_feeling() {
        let status = classify(&msgs(&[("ada", "I feel tired"), ("ada", "what do you feel")]));
        assert_eq!(status.member_feelings.len(), 1);
        assert_eq!(status.member_feelings["ada"], "");
    }

    #[test]
    fn serializes_lowercase_levels() {
        let status = classify(&msgs(&[("ada", "busy")]));
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["mood"], "neutral");
        assert_eq!(json["stress"], "moderate");
    }

    proptest::proptest! {
        #[test]
        fn classification_ignores_message_order(texts in proptest::collection::vec("[a-z ']{0,40}", 0..12)) {
            let forward: Vec<ChatMessage> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| chat_message(&format!("u{i}"), t))
                .collect();
            let mut backward = forward.clone();
            backward.reverse();
            proptest::prop_assert_eq!(classify(&forward), classify(&backward));
        }
    }
}
