//! The rubric scoring engine: eight category scorers plus the aggregator.

pub mod categories;
pub mod engine;
pub mod lexicon;

pub use engine::{AggregateStats, FileReport, RubricEngine};

use crate::nlp::NlpServices;
use crate::{Category, CategoryResult, ScoreError};

/// Shared, read-only inputs for one evaluation. Built once by the engine and
/// borrowed by every scorer.
pub struct ScoringContext<'a> {
    /// Full transcript text as supplied
    pub transcript: &'a str,
    /// Sentence spans in order of appearance
    pub sentences: &'a [String],
    /// Lowercased alphabetic tokens
    pub words: &'a [String],
    /// `words.len()`, the rate denominator
    pub word_count: usize,
    /// Recording duration in seconds
    pub duration_secs: f64,
    /// Injected NLP service handles
    pub services: &'a NlpServices,
}

/// Trait for category scorers.
///
/// Scorers are independent pure computations over the shared context. A
/// scorer returns `Err` only when an NLP service it queries fails; malformed
/// input (empty text, nonpositive duration) degrades to a zero score with an
/// explanatory message instead.
pub trait CategoryScorer {
    /// Which rubric category this scorer fills
    fn category(&self) -> Category;

    /// Produce the category result for this evaluation
    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError>;
}
