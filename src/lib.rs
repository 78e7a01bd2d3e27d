//! Introscore: Rubric Scorer for Spoken Self-Introductions
//!
//! This library evaluates a self-introduction transcript against a fixed
//! eight-category rubric and produces a deterministic per-category score
//! breakdown plus an aggregate score out of 100.

pub mod config;
pub mod nlp;
pub mod reporter;
pub mod scorer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The eight rubric categories, in the fixed order they appear in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Salutation,
    Keywords,
    Flow,
    SpeechRate,
    Grammar,
    Vocabulary,
    Clarity,
    Engagement,
}

impl Category {
    /// All categories in report order. The order is part of the rubric and
    /// never changes.
    pub const ALL: [Category; 8] = [
        Category::Salutation,
        Category::Keywords,
        Category::Flow,
        Category::SpeechRate,
        Category::Grammar,
        Category::Vocabulary,
        Category::Clarity,
        Category::Engagement,
    ];

    /// Maximum points awardable in this category. The eight maxima sum to 100.
    pub fn max_score(&self) -> u8 {
        match self {
            Category::Salutation => 5,
            Category::Keywords => 30,
            Category::Flow => 5,
            Category::SpeechRate => 10,
            Category::Grammar => 10,
            Category::Vocabulary => 10,
            Category::Clarity => 15,
            Category::Engagement => 15,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Salutation => write!(f, "Salutation"),
            Category::Keywords => write!(f, "Keywords"),
            Category::Flow => write!(f, "Flow"),
            Category::SpeechRate => write!(f, "Speech Rate"),
            Category::Grammar => write!(f, "Grammar"),
            Category::Vocabulary => write!(f, "Vocabulary"),
            Category::Clarity => write!(f, "Clarity (Fillers)"),
            Category::Engagement => write!(f, "Engagement"),
        }
    }
}

/// Score and feedback for a single rubric category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Which category this result belongs to
    pub category: Category,
    /// Points awarded (0..=max)
    #[serde(rename = "scoreObtained")]
    pub score: u8,
    /// Maximum points for this category
    #[serde(rename = "maxScore")]
    pub max: u8,
    /// Human-readable rationale for the score
    pub feedback: String,
}

impl CategoryResult {
    /// The only way to build a result. Caps the score at the category
    /// maximum so a report total can never exceed 100.
    pub fn new(category: Category, score: u8, feedback: impl Into<String>) -> Self {
        let max = category.max_score();
        Self {
            category,
            score: score.min(max),
            max,
            feedback: feedback.into(),
        }
    }
}

/// Overall assessment label derived from the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Excellent,
    NeedsImprovement,
}

impl Status {
    /// "Excellent" only on a strictly-greater-than-80 total; 80 itself is
    /// still "Needs Improvement".
    pub fn from_total(total: u8) -> Self {
        if total > 80 {
            Status::Excellent
        } else {
            Status::NeedsImprovement
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Excellent => write!(f, "Excellent"),
            Status::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// The full rubric report for one evaluated transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricReport {
    /// The eight category results, always in `Category::ALL` order
    pub categories: Vec<CategoryResult>,
    /// Sum of category scores (0..=100 by construction)
    pub total: u8,
    /// Derived assessment label
    pub status: Status,
    /// Number of alphabetic tokens in the transcript
    pub word_count: usize,
    /// Recording duration used for the speech-rate calculation
    pub duration_secs: f64,
}

impl RubricReport {
    /// Words per minute for display. Truncated, matching the per-category
    /// speech-rate feedback.
    pub fn wpm(&self) -> u32 {
        if self.duration_secs <= 0.0 {
            return 0;
        }
        (self.word_count as f64 / self.duration_secs * 60.0) as u32
    }
}

/// One evaluation request: the transcript plus how long it took to say it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    /// Transcript text, arbitrary casing and punctuation
    pub transcript: String,
    /// Recording length in seconds; valid only when > 0
    #[serde(rename = "durationSeconds")]
    pub duration_secs: f64,
}

impl EvaluationRequest {
    pub fn new(transcript: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            transcript: transcript.into(),
            duration_secs,
        }
    }
}

/// Errors from the scoring engine and its NLP collaborators.
///
/// A `Service` error aborts the whole evaluation: there is no partial
/// report when a collaborator fails. Malformed-but-well-typed input never
/// errors; the affected scorers degrade to 0 with an explanatory message.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// An external NLP service failed; fatal for the evaluation
    #[error("{service} service failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },
    /// The flow computation hit an internal inconsistency; callers degrade
    /// this to a zero score rather than propagating it
    #[error("flow analysis failed: {0}")]
    Flow(String),
}
