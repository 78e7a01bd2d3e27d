//! Default rule-based sentence segmenter and word tokenizer.

use super::Tokenizer;
use crate::ScoreError;

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e",
];

/// Splits sentences on terminal punctuation and extracts alphabetic tokens.
pub struct RuleTokenizer;

impl RuleTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Whether the word ending at `end` (exclusive, pointing at a '.') is a
    /// known abbreviation.
    fn ends_with_abbreviation(text: &str, end: usize) -> bool {
        let head = &text[..end];
        let word_start = head
            .rfind(|c: char| c.is_whitespace())
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = head[word_start..].to_lowercase();
        ABBREVIATIONS.contains(&word.as_str())
    }
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ScoreError> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let chars: Vec<(usize, char)> = text.char_indices().collect();

        for (pos, &(idx, c)) in chars.iter().enumerate() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            // A terminator only ends a sentence before whitespace or EOF
            let next_is_boundary = chars
                .get(pos + 1)
                .map(|&(_, n)| n.is_whitespace())
                .unwrap_or(true);
            if !next_is_boundary {
                continue;
            }
            if c == '.' && Self::ends_with_abbreviation(text, idx) {
                continue;
            }
            let end = idx + c.len_utf8();
            let span = text[start..end].trim();
            if !span.is_empty() {
                sentences.push(span.to_string());
            }
            start = end;
        }

        // Trailing text without terminal punctuation is still a sentence
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        Ok(sentences)
    }

    fn words(&self, text: &str) -> Result<Vec<String>, ScoreError> {
        Ok(text
            .split(|c: char| !c.is_alphabetic())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> RuleTokenizer {
        RuleTokenizer::new()
    }

    #[test]
    fn splits_simple_sentences() {
        let sents = tokenizer()
            .sentences("Hello everyone. I am thirteen years old. Thank you!")
            .unwrap();
        assert_eq!(
            sents,
            vec![
                "Hello everyone.",
                "I am thirteen years old.",
                "Thank you!"
            ]
        );
    }

    #[test]
    fn keeps_sentence_order() {
        let sents = tokenizer().sentences("First. Second. Third.").unwrap();
        assert_eq!(sents, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn trailing_text_without_punctuation_is_a_sentence() {
        let sents = tokenizer().sentences("Hello there. No closing dot").unwrap();
        assert_eq!(sents, vec!["Hello there.", "No closing dot"]);
    }

    #[test]
    fn abbreviation_does_not_end_sentence() {
        let sents = tokenizer()
            .sentences("I study with Mr. Sharma at school.")
            .unwrap();
        assert_eq!(sents.len(), 1);
    }

    #[test]
    fn decimal_point_does_not_end_sentence() {
        let sents = tokenizer().sentences("I scored 9.5 in the test.").unwrap();
        assert_eq!(sents.len(), 1);
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(tokenizer().sentences("").unwrap().is_empty());
        assert!(tokenizer().sentences("   ").unwrap().is_empty());
    }

    #[test]
    fn words_are_lowercased_alphabetic_runs() {
        let words = tokenizer().words("Hello, everyone! I am 13 years old.").unwrap();
        assert_eq!(words, vec!["hello", "everyone", "i", "am", "years", "old"]);
    }

    #[test]
    fn words_ignore_digits_and_punctuation() {
        let words = tokenizer().words("123 ... !!!").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn word_count_matches_scenario_denominator() {
        // 120 words at 60 seconds is the ideal-pace reference scenario
        let text = vec!["word"; 120].join(" ");
        assert_eq!(tokenizer().words(&text).unwrap().len(), 120);
    }
}
