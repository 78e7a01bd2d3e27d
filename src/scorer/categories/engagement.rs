//! Engagement scorer: positive-polarity share of the transcript.

use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Scores how positive the introduction sounds.
pub struct EngagementScorer;

impl EngagementScorer {
    pub fn new() -> Self {
        Self
    }

    fn points_for_positivity(p: f64) -> u8 {
        if p >= 0.9 {
            15
        } else if p >= 0.7 {
            12
        } else if p >= 0.5 {
            9
        } else if p >= 0.3 {
            6
        } else {
            3
        }
    }
}

impl Default for EngagementScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for EngagementScorer {
    fn category(&self) -> Category {
        Category::Engagement
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        if ctx.word_count == 0 {
            return Ok(CategoryResult::new(Category::Engagement, 0, "No text."));
        }

        // Analyzer failures are fatal for the whole evaluation
        let polarity = ctx.services.sentiment().polarity(ctx.transcript)?;

        let points = Self::points_for_positivity(polarity.positive);

        Ok(CategoryResult::new(
            Category::Engagement,
            points,
            format!(
                "Positivity Score: {:.2} (Compound: {:.2})",
                polarity.positive, polarity.compound
            ),
        ))
    }
}
