//! Speech-rate scorer: words per minute against the ideal-pace band.

use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Scores speaking pace from word count and recording duration.
pub struct SpeechRateScorer;

impl SpeechRateScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpeechRateScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for SpeechRateScorer {
    fn category(&self) -> Category {
        Category::SpeechRate
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        if ctx.duration_secs <= 0.0 {
            return Ok(CategoryResult::new(
                Category::SpeechRate,
                0,
                "Invalid duration.",
            ));
        }
        if ctx.word_count == 0 {
            return Ok(CategoryResult::new(Category::SpeechRate, 0, "No text."));
        }

        let wpm = ctx.word_count as f64 / ctx.duration_secs * 60.0;
        let shown = wpm as u32;

        // Bucket boundaries are closed on integer WPM values: 141-160 is
        // fast, 111-140 ideal, 81-110 slow. Fractional rates fall into the
        // adjacent band so every nonnegative rate is covered.
        let (points, feedback) = if wpm > 160.0 {
            (2, format!("Too Fast ({} WPM). Aim for 111-140.", shown))
        } else if wpm > 140.0 {
            (6, format!("Fast ({} WPM). Slow down slightly.", shown))
        } else if wpm >= 111.0 {
            (10, format!("Ideal Pace ({} WPM).", shown))
        } else if wpm >= 81.0 {
            (6, format!("Slow ({} WPM). Speed up slightly.", shown))
        } else {
            (2, format!("Too Slow ({} WPM).", shown))
        };

        Ok(CategoryResult::new(Category::SpeechRate, points, feedback))
    }
}
