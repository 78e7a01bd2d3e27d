//! Grammar scorer: issue density mapped to a quality metric.

use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Scores grammar quality from the checker's issue count.
pub struct GrammarScorer;

impl GrammarScorer {
    pub fn new() -> Self {
        Self
    }

    /// 1 - min(errors per 100 words / 10, 1), clamped to [0,1].
    fn quality_metric(issue_count: usize, word_count: usize) -> f64 {
        let errors_per_100 = issue_count as f64 / word_count as f64 * 100.0;
        (1.0 - (errors_per_100 / 10.0).min(1.0)).clamp(0.0, 1.0)
    }

    /// Descending-threshold map shared with the vocabulary scorer.
    pub(crate) fn metric_to_points(metric: f64) -> u8 {
        if metric >= 0.9 {
            10
        } else if metric >= 0.7 {
            8
        } else if metric >= 0.5 {
            6
        } else if metric >= 0.3 {
            4
        } else {
            2
        }
    }
}

impl Default for GrammarScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for GrammarScorer {
    fn category(&self) -> Category {
        Category::Grammar
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        if ctx.word_count == 0 {
            return Ok(CategoryResult::new(Category::Grammar, 0, "No text."));
        }

        // Checker failures are fatal for the whole evaluation
        let issue_count = ctx.services.grammar().issue_count(ctx.transcript)?;

        let metric = Self::quality_metric(issue_count, ctx.word_count);
        let points = Self::metric_to_points(metric);

        Ok(CategoryResult::new(
            Category::Grammar,
            points,
            format!(
                "Errors found: {}. Quality Metric: {:.2}",
                issue_count, metric
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::NlpServices;

    fn score(transcript: &str, word_count: usize) -> CategoryResult {
        let services = NlpServices::default_stack();
        let ctx = ScoringContext {
            transcript,
            sentences: &[],
            words: &[],
            word_count,
            duration_secs: 52.0,
            services: &services,
        };
        GrammarScorer::new().score(&ctx).unwrap()
    }

    #[test]
    fn zero_words_scores_0() {
        let r = score("", 0);
        assert_eq!(r.score, 0);
        assert!(r.feedback.contains("No text"));
    }

    #[test]
    fn clean_text_scores_10() {
        let text = "Hello everyone. I am Muskan and I study in class eight. Thank you!";
        let r = score(text, 13);
        assert_eq!(r.score, 10, "feedback: {}", r.feedback);
    }

    #[test]
    fn metric_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(GrammarScorer::metric_to_points(0.9), 10);
        assert_eq!(GrammarScorer::metric_to_points(0.8999), 8);
        assert_eq!(GrammarScorer::metric_to_points(0.7), 8);
        assert_eq!(GrammarScorer::metric_to_points(0.6999), 6);
        assert_eq!(GrammarScorer::metric_to_points(0.5), 6);
        assert_eq!(GrammarScorer::metric_to_points(0.3), 4);
        assert_eq!(GrammarScorer::metric_to_points(0.2999), 2);
        assert_eq!(GrammarScorer::metric_to_points(0.0), 2);
        assert_eq!(GrammarScorer::metric_to_points(1.0), 10);
    }

    #[test]
    fn one_issue_per_100_words_gives_metric_point_nine() {
        // 1 issue in 100 words: errors_per_100 = 1, metric = 0.9 exactly
        let metric = GrammarScorer::quality_metric(1, 100);
        assert!((metric - 0.9).abs() < 1e-9);
        assert_eq!(GrammarScorer::metric_to_points(metric), 10);
    }

    #[test]
    fn metric_saturates_at_zero_for_dense_errors() {
        // 20 issues in 100 words saturates the min(.., 1) clamp
        let metric = GrammarScorer::quality_metric(20, 100);
        assert_eq!(metric, 0.0);
    }
}
