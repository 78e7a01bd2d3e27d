//! Vocabulary scorer: type-token ratio of the transcript.

use super::grammar::GrammarScorer;
use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};
use std::collections::HashSet;

/// Scores vocabulary richness as distinct words over total words.
pub struct VocabularyScorer;

impl VocabularyScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VocabularyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for VocabularyScorer {
    fn category(&self) -> Category {
        Category::Vocabulary
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        if ctx.words.is_empty() {
            return Ok(CategoryResult::new(
                Category::Vocabulary,
                0,
                "No words found.",
            ));
        }

        let unique: HashSet<&str> = ctx.words.iter().map(String::as_str).collect();
        let ttr = unique.len() as f64 / ctx.words.len() as f64;

        // Same threshold table as the grammar metric
        let points = GrammarScorer::metric_to_points(ttr);

        Ok(CategoryResult::new(
            Category::Vocabulary,
            points,
            format!("TTR: {:.2} (Unique words: {})", ttr, unique.len()),
        ))
    }
}
