//! Salutation scorer: tiered greeting detection.

use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Priority tiers, scanned in this order; the first tier with any match wins
/// regardless of where its phrase appears in the text. Ordered tables, not
/// hash lookups: tier precedence is part of the rubric.
const TIERS: &[(&[&str], u8, &str)] = &[
    (
        &["excited to introduce", "feeling great"],
        5,
        "Excellent salutation found.",
    ),
    (
        &[
            "good morning",
            "good afternoon",
            "good evening",
            "hello everyone",
        ],
        4,
        "Good formal salutation found.",
    ),
    (
        &["hi", "hello", "hey"],
        2,
        "Basic salutation found. Try a more formal greeting.",
    ),
];

/// Scores the greeting at the start of an introduction.
///
/// Plain substring containment: "hi" inside "this" matches. The rubric's
/// published scores depend on this behavior, so it stays.
pub struct SalutationScorer;

impl SalutationScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SalutationScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for SalutationScorer {
    fn category(&self) -> Category {
        Category::Salutation
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        let text = ctx.transcript.to_lowercase();

        for (phrases, points, feedback) in TIERS {
            if phrases.iter().any(|p| text.contains(p)) {
                return Ok(CategoryResult::new(Category::Salutation, *points, *feedback));
            }
        }

        Ok(CategoryResult::new(
            Category::Salutation,
            0,
            "No clear salutation detected.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::NlpServices;

    fn score(transcript: &str) -> CategoryResult {
        let services = NlpServices::default_stack();
        let ctx = ScoringContext {
            transcript,
            sentences: &[],
            words: &[],
            word_count: 0,
            duration_secs: 52.0,
            services: &services,
        };
        SalutationScorer::new().score(&ctx).unwrap()
    }

    #[test]
    fn tier_one_phrase_scores_5() {
        let r = score("I am feeling great today, myself Ria.");
        assert_eq!(r.score, 5);
        assert!(r.feedback.contains("Excellent"));
    }

    #[test]
    fn tier_two_phrase_scores_4() {
        assert_eq!(score("Good morning to all my teachers.").score, 4);
        assert_eq!(score("Hello everyone, myself Muskan.").score, 4);
    }

    #[test]
    fn tier_three_phrase_scores_2() {
        let r = score("Hey, I am Arjun.");
        assert_eq!(r.score, 2);
    }

    #[test]
    fn no_salutation_scores_0() {
        let r = score("My name Arjun and I study in grade seven.");
        // "hi"/"hello"/"hey" do not occur even as substrings here
        assert_eq!(r.score, 0);
        assert!(r.feedback.contains("No clear salutation"));
    }

    #[test]
    fn tier_priority_beats_text_order() {
        // Tier-3 "hi" appears first in the text, but the tier-1 phrase wins
        let r = score("Hi all, I am excited to introduce myself.");
        assert_eq!(r.score, 5);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score("GOOD EVENING everyone!").score, 4);
    }

    #[test]
    fn substring_containment_matches_inside_words() {
        // "hi" inside "everything" - known limitation, kept on purpose
        let r = score("Everything about my school is nice.");
        assert_eq!(r.score, 2);
    }
}
