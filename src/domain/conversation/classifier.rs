//! Topical support classification.
//!
//! An ordered list of (keyword set, category) rules evaluated first-match-
//! wins with case-insensitive substring tests. Crisis is always evaluated
//! first and short-circuits everything else. Some keywords overlap between
//! categories ("overwhelmed" appears under both anxiety and stress); the
//! fixed rule order makes the tie-break deterministic.

use serde::{Deserialize, Serialize};

use super::crisis;

/// Support category a user message is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportCategory {
    Crisis,
    Depression,
    Anxiety,
    Sleep,
    Stress,
    Loneliness,
    Motivation,
    Unknown,
}

/// Topical keyword rules in priority order. Crisis is handled separately
/// and always precedes these.
const RULES: [(SupportCategory, &[&str]); 6] = [
    (
        SupportCategory::Depression,
        &["sad", "depressed", "hopeless", "empty", "worthless", "no energy"],
    ),
    (
        SupportCategory::Anxiety,
        &["anxious", "worried", "panic", "overwhelmed", "nervous", "racing heart"],
    ),
    (
        SupportCategory::Sleep,
        &["can't sleep", "insomnia", "sleeping badly", "trouble sleeping"],
    ),
    (
        SupportCategory::Stress,
        &["stressed", "burned out", "overwhelmed", "too much work"],
    ),
    (
        SupportCategory::Loneliness,
        &["lonely", "alone", "isolated"],
    ),
    (
        SupportCategory::Motivation,
        &["unmotivated", "no motivation", "can't focus"],
    ),
];

/// Classifies a user message into a support category.
pub fn classify(text: &str) -> SupportCategory {
    if crisis::detect(text) {
        return SupportCategory::Crisis;
    }

    let lowered = text.to_lowercase();
    for (category, keywords) in RULES.iter() {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *category;
        }
    }
    SupportCategory::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crisis_takes_priority_over_topical_matches() {
        // "hopeless" would match depression, but the crisis phrase wins.
        let category = classify("I feel hopeless and want to end my life");
        assert_eq!(category, SupportCategory::Crisis);
    }

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify("I feel so sad lately"), SupportCategory::Depression);
        assert_eq!(classify("I'm anxious about tomorrow"), SupportCategory::Anxiety);
        assert_eq!(classify("I can't sleep at night"), SupportCategory::Sleep);
        assert_eq!(classify("work has me stressed"), SupportCategory::Stress);
        assert_eq!(classify("I feel lonely"), SupportCategory::Loneliness);
        assert_eq!(classify("I'm unmotivated"), SupportCategory::Motivation);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("I AM SO WORRIED"), SupportCategory::Anxiety);
    }

    #[test]
    fn overlapping_keyword_resolves_to_first_rule() {
        // "overwhelmed" appears under both anxiety and stress; anxiety is
        // earlier in the rule order.
        assert_eq!(classify("I'm overwhelmed"), SupportCategory::Anxiety);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(classify("what's the weather like"), SupportCategory::Unknown);
    }
}
