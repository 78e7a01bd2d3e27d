//! Default lexicon-based sentiment analyzer.
//!
//! Token-level polarity with a short negation window and a normalized
//! compound score, in the style of valence-lexicon analyzers.

use super::{PolarityScores, SentimentAnalyzer};
use crate::ScoreError;

const POSITIVE: &[&str] = &[
    "amazing",
    "awesome",
    "best",
    "enjoy",
    "excellent",
    "excited",
    "fantastic",
    "favorite",
    "fun",
    "glad",
    "good",
    "great",
    "happy",
    "interesting",
    "like",
    "love",
    "nice",
    "passionate",
    "proud",
    "thank",
    "thanks",
    "wonderful",
];

const NEGATIVE: &[&str] = &[
    "afraid",
    "angry",
    "bad",
    "bored",
    "boring",
    "difficult",
    "dislike",
    "fail",
    "hard",
    "hate",
    "nervous",
    "poor",
    "sad",
    "scared",
    "terrible",
    "tired",
    "worst",
    "worried",
];

const NEGATIONS: &[&str] = &["not", "no", "never", "dont", "don't", "cannot", "can't"];

/// Normalization constant for the compound score; keeps it in (-1, 1).
const COMPOUND_ALPHA: f64 = 15.0;

/// Lexicon-driven polarity scorer over whitespace tokens.
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn strip(token: &str) -> String {
        token
            .chars()
            .filter(|c| c.is_alphabetic() || *c == '\'')
            .collect::<String>()
            .to_lowercase()
    }
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoreError> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(Self::strip)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return Ok(PolarityScores {
                negative: 0.0,
                neutral: 0.0,
                positive: 0.0,
                compound: 0.0,
            });
        }

        let mut pos = 0usize;
        let mut neg = 0usize;
        let mut valence = 0.0f64;

        for (i, token) in tokens.iter().enumerate() {
            let negated = i
                .checked_sub(1)
                .map(|p| NEGATIONS.contains(&tokens[p].as_str()))
                .unwrap_or(false);

            let word_valence = if POSITIVE.contains(&token.as_str()) {
                1.0
            } else if NEGATIVE.contains(&token.as_str()) {
                -1.0
            } else {
                continue;
            };
            let word_valence = if negated { -word_valence } else { word_valence };

            if word_valence > 0.0 {
                pos += 1;
            } else {
                neg += 1;
            }
            valence += word_valence;
        }

        let total = tokens.len() as f64;
        let positive = pos as f64 / total;
        let negative = neg as f64 / total;
        let neutral = (1.0 - positive - negative).max(0.0);
        let compound = valence / (valence * valence + COMPOUND_ALPHA).sqrt();

        Ok(PolarityScores {
            negative,
            neutral,
            positive,
            compound,
        })
    }
}
