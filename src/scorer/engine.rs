//! Rubric engine: orchestrates the eight scorers and aggregates the report.

use crate::nlp::NlpServices;
use crate::scorer::categories::{
    ClarityScorer, EngagementScorer, FlowScorer, GrammarScorer, KeywordScorer, SalutationScorer,
    SpeechRateScorer, VocabularyScorer,
};
use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{EvaluationRequest, RubricReport, ScoreError, Status};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Stateless scoring engine. Borrows the process-wide service registry;
/// every call to [`RubricEngine::evaluate`] is one independent
/// request/response cycle.
pub struct RubricEngine<'a> {
    services: &'a NlpServices,
    extra_fillers: Vec<String>,
}

impl<'a> RubricEngine<'a> {
    pub fn new(services: &'a NlpServices) -> Self {
        Self {
            services,
            extra_fillers: Vec::new(),
        }
    }

    /// Extend the clarity scorer's filler lexicon, e.g. from config.
    pub fn with_extra_fillers(mut self, fillers: Vec<String>) -> Self {
        self.extra_fillers = fillers;
        self
    }

    /// Evaluate one transcript against the full rubric.
    ///
    /// Tokenization runs once; the eight scorers then consume shared
    /// read-only borrows in the fixed category order. A service failure
    /// aborts the whole evaluation - there is no partial report.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<RubricReport, ScoreError> {
        let tokenizer = self.services.tokenizer();
        let sentences = tokenizer.sentences(&request.transcript)?;
        let words = tokenizer.words(&request.transcript)?;
        let word_count = words.len();

        let ctx = ScoringContext {
            transcript: &request.transcript,
            sentences: &sentences,
            words: &words,
            word_count,
            duration_secs: request.duration_secs,
            services: self.services,
        };

        let scorers: [&dyn CategoryScorer; 8] = [
            &SalutationScorer::new(),
            &KeywordScorer::new(),
            &FlowScorer::new(),
            &SpeechRateScorer::new(),
            &GrammarScorer::new(),
            &VocabularyScorer::new(),
            &ClarityScorer::new().with_extra_fillers(self.extra_fillers.clone()),
            &EngagementScorer::new(),
        ];

        let mut categories = Vec::with_capacity(scorers.len());
        for scorer in scorers {
            categories.push(scorer.score(&ctx)?);
        }

        // Each score is capped at its category max and the maxima sum to
        // 100, so the total needs no further clamping
        let total: u8 = categories.iter().map(|c| c.score).sum();
        let status = Status::from_total(total);

        Ok(RubricReport {
            categories,
            total,
            status,
            word_count,
            duration_secs: request.duration_secs,
        })
    }

    /// Read a transcript file and evaluate it. `.json` files carry their own
    /// duration; plain text files use `default_duration_secs`.
    pub fn evaluate_path(&self, path: &Path, default_duration_secs: f64) -> Result<FileReport> {
        let request = load_request(path, default_duration_secs)?;
        let report = self
            .evaluate(&request)
            .with_context(|| format!("Failed to evaluate {}", path.display()))?;
        Ok(FileReport {
            path: path.to_path_buf(),
            report,
        })
    }

    /// Evaluate multiple transcript files sequentially.
    pub fn evaluate_paths(
        &self,
        paths: &[PathBuf],
        default_duration_secs: f64,
    ) -> Vec<Result<FileReport>> {
        paths
            .iter()
            .map(|p| self.evaluate_path(p, default_duration_secs))
            .collect()
    }

    /// Evaluate multiple transcript files in parallel using rayon. The
    /// registry is shared read-only across workers.
    pub fn evaluate_paths_parallel(
        &self,
        paths: &[PathBuf],
        default_duration_secs: f64,
    ) -> Vec<Result<FileReport>> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|p| self.evaluate_path(p, default_duration_secs))
            .collect()
    }

    /// Aggregate stats across multiple evaluated files.
    pub fn aggregate_stats(reports: &[FileReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let total: u32 = reports.iter().map(|r| r.report.total as u32).sum();
        let average_total = (total / reports.len() as u32) as u8;
        let excellent_count = reports
            .iter()
            .filter(|r| r.report.status == Status::Excellent)
            .count();

        AggregateStats {
            files_evaluated: reports.len(),
            average_total,
            excellent_count,
        }
    }
}

/// A report tied to the transcript file it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub report: RubricReport,
}

/// Summary across a batch of evaluated transcript files
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub files_evaluated: usize,
    pub average_total: u8,
    pub excellent_count: usize,
}

/// Load an [`EvaluationRequest`] from a transcript file. JSON files must be
/// `{"transcript": "...", "durationSeconds": n}`; anything else is read as
/// plain text with the supplied default duration.
pub fn load_request(path: &Path, default_duration_secs: f64) -> Result<EvaluationRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

    if path.extension().is_some_and(|e| e == "json") {
        let request: EvaluationRequest = serde_json::from_str(&content)
            .with_context(|| format!("Invalid transcript JSON: {}", path.display()))?;
        Ok(request)
    } else {
        Ok(EvaluationRequest::new(content, default_duration_secs))
    }
}
