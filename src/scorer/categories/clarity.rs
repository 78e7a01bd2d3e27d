//! Clarity scorer: filler-word rate over whitespace tokens.

use crate::scorer::lexicon::FILLERS;
use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Scores how free of filler words the transcript is.
///
/// Tokenization is a plain whitespace split of the lowercased transcript, so
/// multi-word lexicon entries never match and punctuation stays attached to
/// tokens. The published scores depend on this policy; changing it would
/// change observable results.
pub struct ClarityScorer {
    extra_fillers: Vec<String>,
}

impl ClarityScorer {
    pub fn new() -> Self {
        Self {
            extra_fillers: Vec::new(),
        }
    }

    /// Extend the built-in lexicon, e.g. from config.
    pub fn with_extra_fillers(mut self, fillers: Vec<String>) -> Self {
        self.extra_fillers = fillers.into_iter().map(|f| f.to_lowercase()).collect();
        self
    }

    fn is_filler(&self, token: &str) -> bool {
        FILLERS.contains(&token) || self.extra_fillers.iter().any(|f| f == token)
    }
}

impl Default for ClarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for ClarityScorer {
    fn category(&self) -> Category {
        Category::Clarity
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        let lower = ctx.transcript.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(CategoryResult::new(Category::Clarity, 0, "No text."));
        }

        let filler_count = tokens.iter().filter(|t| self.is_filler(t)).count();
        let filler_rate = filler_count as f64 / tokens.len() as f64 * 100.0;

        // Lower is better; upper boundaries are inclusive
        let points = if filler_rate <= 3.0 {
            15
        } else if filler_rate <= 6.0 {
            12
        } else if filler_rate <= 9.0 {
            9
        } else if filler_rate <= 12.0 {
            6
        } else {
            3
        };

        Ok(CategoryResult::new(
            Category::Clarity,
            points,
            format!(
                "Filler Rate: {:.1}% ({} fillers found)",
                filler_rate, filler_count
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::NlpServices;

    fn score_with(scorer: ClarityScorer, transcript: &str) -> CategoryResult {
        let services = NlpServices::default_stack();
        let ctx = ScoringContext {
            transcript,
            sentences: &[],
            words: &[],
            word_count: 0,
            duration_secs: 52.0,
            services: &services,
        };
        scorer.score(&ctx).unwrap()
    }

    fn score(transcript: &str) -> CategoryResult {
        score_with(ClarityScorer::new(), transcript)
    }

    #[test]
    fn empty_text_scores_0() {
        let r = score("");
        assert_eq!(r.score, 0);
        assert!(r.feedback.contains("No text"));
    }

    #[test]
    fn filler_free_text_scores_15() {
        let r = score("My name Ria and my school near our house");
        assert_eq!(r.score, 15, "feedback: {}", r.feedback);
    }

    #[test]
    fn rate_exactly_3_percent_scores_15() {
        // 3 fillers in 100 tokens = 3.0%, inclusive top-bucket boundary
        let mut words = vec!["word"; 97];
        words.extend(["um", "uh", "ah"]);
        let r = score(&words.join(" "));
        assert_eq!(r.score, 15, "feedback: {}", r.feedback);
    }

    #[test]
    fn rate_just_above_3_percent_scores_12() {
        // 3 fillers in 99 tokens = 3.03%
        let mut words = vec!["word"; 96];
        words.extend(["um", "uh", "ah"]);
        let r = score(&words.join(" "));
        assert_eq!(r.score, 12, "feedback: {}", r.feedback);
    }

    #[test]
    fn very_high_filler_rate_scores_3() {
        let r = score("um uh like basically um uh well");
        assert_eq!(r.score, 3);
    }

    #[test]
    fn multi_word_fillers_never_match() {
        // "you know" splits into "you" and "know", neither of which is a
        // single-token lexicon entry
        let r = score("you know you know you know you know");
        assert!(r.feedback.contains("(0 fillers found)"), "feedback: {}", r.feedback);
        assert_eq!(r.score, 15);
    }

    #[test]
    fn punctuation_blocks_filler_match() {
        // "so," is not the token "so"
        let r = score("so, this is my school and this is my class today");
        assert!(r.feedback.contains("(0 fillers found)"), "feedback: {}", r.feedback);
    }

    #[test]
    fn extra_fillers_from_config_are_counted() {
        let scorer = ClarityScorer::new().with_extra_fillers(vec!["arre".to_string()]);
        let r = score_with(scorer, "arre this is my school arre my class arre");
        assert!(r.feedback.contains("(3 fillers found)"), "feedback: {}", r.feedback);
    }
}
