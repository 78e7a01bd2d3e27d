//! Default heuristic grammar checker.
//!
//! A small ordered set of rules stands in for a full grammar tool. Only the
//! issue count is exposed; individual findings stay opaque.

use super::GrammarChecker;
use crate::ScoreError;
use regex::Regex;

/// Counts grammar issues with rule-based pattern matching.
pub struct HeuristicGrammarChecker {
    lowercase_i: Regex,
    article_before_vowel: Regex,
    doubled_punctuation: Regex,
    space_before_punctuation: Regex,
}

impl HeuristicGrammarChecker {
    pub fn new() -> Self {
        Self {
            lowercase_i: Regex::new(r"\bi\b").unwrap(),
            article_before_vowel: Regex::new(r"(?i)\ba\s+[aeiou]\w*").unwrap(),
            doubled_punctuation: Regex::new(r"[,.;:!?]{2,}").unwrap(),
            space_before_punctuation: Regex::new(r"\s+[,.;:!?]").unwrap(),
        }
    }

    /// Immediate duplicates like "I am am happy", compared case-insensitively
    /// with punctuation stripped.
    fn count_repeated_words(text: &str) -> usize {
        let mut count = 0;
        let mut previous: Option<String> = None;
        for token in text.split_whitespace() {
            let word: String = token
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() {
                previous = None;
                continue;
            }
            if previous.as_deref() == Some(word.as_str()) {
                count += 1;
            }
            previous = Some(word);
        }
        count
    }

    /// Sentences whose first alphabetic character is lowercase.
    fn count_lowercase_sentence_starts(text: &str) -> usize {
        let mut count = 0;
        let mut expect_start = true;
        for c in text.chars() {
            if expect_start && c.is_alphabetic() {
                if c.is_lowercase() {
                    count += 1;
                }
                expect_start = false;
            } else if matches!(c, '.' | '!' | '?') {
                expect_start = true;
            }
        }
        count
    }
}

impl Default for HeuristicGrammarChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarChecker for HeuristicGrammarChecker {
    fn issue_count(&self, text: &str) -> Result<usize, ScoreError> {
        if text.trim().is_empty() {
            return Ok(0);
        }

        let mut count = 0;
        count += Self::count_repeated_words(text);
        count += Self::count_lowercase_sentence_starts(text);
        count += self.lowercase_i.find_iter(text).count();
        count += self.article_before_vowel.find_iter(text).count();
        count += self.doubled_punctuation.find_iter(text).count();
        count += self.space_before_punctuation.find_iter(text).count();

        // Missing terminal punctuation on the final sentence
        let trimmed = text.trim_end();
        if !trimmed.ends_with(['.', '!', '?']) {
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> HeuristicGrammarChecker {
        HeuristicGrammarChecker::new()
    }

    #[test]
    fn clean_text_has_no_issues() {
        let n = checker()
            .issue_count("Hello everyone. I am Muskan. Thank you!")
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn empty_text_has_no_issues() {
        assert_eq!(checker().issue_count("").unwrap(), 0);
        assert_eq!(checker().issue_count("   ").unwrap(), 0);
    }

    #[test]
    fn detects_repeated_word() {
        let n = checker().issue_count("I am am very happy today.").unwrap();
        assert!(n >= 1, "expected repeated-word issue, got {}", n);
    }

    #[test]
    fn detects_standalone_lowercase_i() {
        let n = checker().issue_count("Today i feel great.").unwrap();
        assert!(n >= 1, "expected lowercase-i issue, got {}", n);
    }

    #[test]
    fn detects_lowercase_sentence_start() {
        let n = checker()
            .issue_count("hello everyone. My name is Ria.")
            .unwrap();
        assert!(n >= 1, "expected sentence-start issue, got {}", n);
    }

    #[test]
    fn detects_missing_terminal_punctuation() {
        let n = checker()
            .issue_count("My name is Ria and I like cricket")
            .unwrap();
        assert!(n >= 1, "expected missing-punctuation issue, got {}", n);
    }

    #[test]
    fn detects_article_before_vowel() {
        let n = checker().issue_count("I have a apple every day.").unwrap();
        assert!(n >= 1, "expected a-before-vowel issue, got {}", n);
    }

    #[test]
    fn detects_doubled_punctuation_and_stray_space() {
        let n = checker().issue_count("I like cricket ,, really !").unwrap();
        assert!(n >= 2, "expected punctuation issues, got {}", n);
    }

    #[test]
    fn issue_count_is_deterministic() {
        let text = "hello. i am am a engineer";
        let first = checker().issue_count(text).unwrap();
        let second = checker().issue_count(text).unwrap();
        assert_eq!(first, second);
    }
}
