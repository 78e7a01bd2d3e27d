//! Flow scorer: salutation -> self-reference -> closing ordering.

use crate::scorer::{CategoryScorer, ScoringContext};
use crate::{Category, CategoryResult, ScoreError};

/// Marker candidates, scanned in list order. The first candidate present in
/// the text supplies the marker position, even when a later candidate occurs
/// earlier in the text. Ordered tables preserve that tie-break exactly.
const SALUTATION_MARKERS: &[&str] = &["hello", "hi", "good morning"];
const NAME_MARKERS: &[&str] = &["name is", "myself", "i am"];
const CLOSING_MARKERS: &[&str] = &["thank you", "thanks", "that's all"];

/// Scores the structural order of an introduction.
pub struct FlowScorer;

impl FlowScorer {
    pub fn new() -> Self {
        Self
    }

    /// Position of the first candidate found, scanning candidates in list
    /// order. `Err` signals an internal inconsistency between the two scans;
    /// the caller degrades it to a zero score.
    fn locate(text: &str, candidates: &[&str]) -> Result<Option<usize>, ScoreError> {
        for candidate in candidates {
            if text.contains(candidate) {
                return text.find(candidate).map(Some).ok_or_else(|| {
                    ScoreError::Flow(format!("marker {:?} found but not locatable", candidate))
                });
            }
        }
        Ok(None)
    }

    /// The fallible core: marker location plus the ordering decision.
    fn classify(text: &str) -> Result<(u8, &'static str), ScoreError> {
        let salutation = Self::locate(text, SALUTATION_MARKERS)?;
        let name = Self::locate(text, NAME_MARKERS)?;
        let closing = Self::locate(text, CLOSING_MARKERS)?;

        if let (Some(s), Some(n), Some(c)) = (salutation, name, closing) {
            if s < n && n < c {
                return Ok((5, "Perfect flow detected."));
            }
        }

        if salutation.is_none() {
            return Ok((0, "Flow unclear: No salutation."));
        }
        if closing.is_none() {
            return Ok((2, "Flow unclear: No closing."));
        }
        Ok((3, "Flow structure exists but order might be mixed."))
    }
}

impl Default for FlowScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer for FlowScorer {
    fn category(&self) -> Category {
        Category::Flow
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Result<CategoryResult, ScoreError> {
        let text = ctx.transcript.to_lowercase();

        // Internal faults degrade to a zero score; they never abort the
        // wider evaluation
        let (points, feedback) = match Self::classify(&text) {
            Ok(outcome) => outcome,
            Err(_) => (0, "Could not determine flow."),
        };

        Ok(CategoryResult::new(Category::Flow, points, feedback))
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
        FlowScorer::new().score(&ctx).unwrap()
    }

    #[test]
    fn perfect_order_scores_5() {
        let r = score("Hello everyone. My name is Ria. I study in class six. Thank you!");
        assert_eq!(r.score, 5);
        assert!(r.feedback.contains("Perfect flow"));
    }

    #[test]
    fn missing_salutation_scores_0() {
        let r = score("My name is Ria. Thank you!");
        assert_eq!(r.score, 0);
        assert!(r.feedback.contains("No salutation"));
    }

    #[test]
    fn missing_closing_scores_2() {
        let r = score("Hello, my name is Ria and I study in class six.");
        assert_eq!(r.score, 2);
        assert!(r.feedback.contains("No closing"));
    }

    #[test]
    fn out_of_order_scores_3() {
        // Closing phrase before the name marker
        let r = score("Hello all. Thank you for this chance. My name is Ria.");
        assert_eq!(r.score, 3);
    }

    #[test]
    fn candidate_list_order_beats_text_position() {
        // "hi" appears before "hello" in the text, but "hello" is scanned
        // first, so the salutation index points at "hello"
        let text = "hi there... hello everyone, myself dev. thank you.";
        let lower = text.to_lowercase();
        let idx = FlowScorer::locate(&lower, SALUTATION_MARKERS).unwrap();
        assert_eq!(idx, lower.find("hello"));
    }

    #[test]
    fn scenario_a_salutation_marker_is_hello() {
        // "hello" (inside "Hello everyone") resolves before "myself"
        let text = "hello everyone, myself muskan, studying in class 8th.";
        let s = FlowScorer::locate(text, SALUTATION_MARKERS).unwrap().unwrap();
        let n = FlowScorer::locate(text, NAME_MARKERS).unwrap().unwrap();
        assert!(s < n);
    }

    #[test]
    fn empty_text_scores_0() {
        let r = score("");
        assert_eq!(r.score, 0);
    }
}
