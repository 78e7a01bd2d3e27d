//! Keyword/concept scorer: trigger-word coverage of the rubric concepts.

use crate::scorer::lexicon::{Concept, GOOD_TO_HAVE, MUST_HAVE};
use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

const MUST_HAVE_POINTS: u8 = 4;
const GOOD_TO_HAVE_POINTS: u8 = 2;

/// Published ceiling for this category. The raw maximum is 28
/// (5 concepts x 4 + 4 concepts x 2), so the cap never triggers; it is kept
/// because the rubric publishes 30 as the maximum.
const SCORE_CAP: u8 = 30;

/// Detects rubric concepts via lexical trigger-word lookup.
///
/// Matching is lexical-only and authoritative. An embedding-based fallback
/// is a reserved extension point (`nlp::SemanticMatcher`) and is not
/// consulted here.
pub struct KeywordScorer;

impl KeywordScorer {
    pub fn new() -> Self {
        Self
    }

    fn found(haystack: &str, concept: &Concept) -> bool {
        concept.triggers.iter().any(|t| haystack.contains(t))
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for KeywordScorer {
    fn category(&self) -> Category {
        Category::Keywords
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        let haystack = ctx.sentences.join(" ").to_lowercase();

        let mut score: u8 = 0;
        let mut found_must = 0usize;

        for concept in MUST_HAVE {
            if Self::found(&haystack, concept) {
                score += MUST_HAVE_POINTS;
                found_must += 1;
            }
        }

        let mut found_good = 0usize;
        for concept in GOOD_TO_HAVE {
            if Self::found(&haystack, concept) {
                score += GOOD_TO_HAVE_POINTS;
                found_good += 1;
            }
        }

        let score = score.min(SCORE_CAP);
        let feedback = format!(
            "Found {}/{} Must-Haves and {}/{} Good-to-Haves.",
            found_must,
            MUST_HAVE.len(),
            found_good,
            GOOD_TO_HAVE.len()
        );

        Ok(CategoryResult::new(Category::Keywords, score, feedback))
    }
}
