//! NLP service traits and the process-wide service registry.
//!
//! The scoring engine never constructs these services itself: they are
//! expensive to initialize, so the caller builds one [`NlpServices`] registry
//! at startup and passes it by reference into every evaluation. The registry
//! is immutable after construction and safe to share across threads.

mod grammar;
mod sentiment;
mod tokenizer;

pub use grammar::HeuristicGrammarChecker;
pub use sentiment::LexiconSentimentAnalyzer;
pub use tokenizer::RuleTokenizer;

use crate::ScoreError;

/// Sentence segmentation and word tokenization.
pub trait Tokenizer: Send + Sync {
    /// Split text into sentences, ordered by appearance.
    fn sentences(&self, text: &str) -> Result<Vec<String>, ScoreError>;

    /// Lowercased alphabetic tokens. The word count used as the rate
    /// denominator everywhere is the length of this list.
    fn words(&self, text: &str) -> Result<Vec<String>, ScoreError>;
}

/// Grammar checking. Individual issues are opaque; only the count matters.
pub trait GrammarChecker: Send + Sync {
    fn issue_count(&self, text: &str) -> Result<usize, ScoreError>;
}

/// Polarity distribution for a span of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Fraction of the text classified negative, in [0,1]
    pub negative: f64,
    /// Fraction classified neutral, in [0,1]
    pub neutral: f64,
    /// Fraction classified positive, in [0,1]
    pub positive: f64,
    /// Normalized overall valence, in [-1,1]
    pub compound: f64,
}

/// Sentiment analysis over the whole transcript.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoreError>;
}

/// Embedding-based concept similarity.
///
/// Reserved extension point: the keyword scorer's authoritative behavior is
/// lexical trigger-word matching, and nothing queries this trait today. A
/// registry may carry an implementation so the capability can be wired in
/// later without changing the engine's signature.
pub trait SemanticMatcher: Send + Sync {
    /// Similarity between a concept description and a text span, in [0,1].
    fn similarity(&self, concept: &str, text: &str) -> Result<f64, ScoreError>;
}

/// Immutable registry of NLP services, built once per process.
pub struct NlpServices {
    tokenizer: Box<dyn Tokenizer>,
    grammar: Box<dyn GrammarChecker>,
    sentiment: Box<dyn SentimentAnalyzer>,
    semantic: Option<Box<dyn SemanticMatcher>>,
}

impl NlpServices {
    /// Build a registry from explicit service implementations.
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        grammar: Box<dyn GrammarChecker>,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            tokenizer,
            grammar,
            sentiment,
            semantic: None,
        }
    }

    /// The built-in rule-based stack used by the CLI.
    pub fn default_stack() -> Self {
        Self::new(
            Box::new(RuleTokenizer::new()),
            Box::new(HeuristicGrammarChecker::new()),
            Box::new(LexiconSentimentAnalyzer::new()),
        )
    }

    /// Attach a semantic matcher. Loaded but not consulted by any scorer.
    pub fn with_semantic(mut self, semantic: Box<dyn SemanticMatcher>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn grammar(&self) -> &dyn GrammarChecker {
        self.grammar.as_ref()
    }

    pub fn sentiment(&self) -> &dyn SentimentAnalyzer {
        self.sentiment.as_ref()
    }

    pub fn semantic(&self) -> Option<&dyn SemanticMatcher> {
        self.semantic.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_provides_all_required_services() {
        let services = NlpServices::default_stack();
        assert!(services.tokenizer().words("hello world").unwrap().len() == 2);
        assert!(services.grammar().issue_count("Hello.").is_ok());
        assert!(services.sentiment().polarity("great").is_ok());
        assert!(
            services.semantic().is_none(),
            "no semantic matcher in the default stack"
        );
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_sync<T: Sync>(_: &T) {}
        let services = NlpServices::default_stack();
        assert_sync(&services);
    }
}
