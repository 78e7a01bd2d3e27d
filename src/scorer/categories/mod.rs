//! One module per rubric category.

pub mod clarity;
pub mod engagement;
pub mod flow;
pub mod grammar;
pub mod keywords;
pub mod salutation;
pub mod speech_rate;
pub mod vocabulary;

pub use clarity::ClarityScorer;
pub use engagement::EngagementScorer;
pub use flow::FlowScorer;
pub use grammar::GrammarScorer;
pub use keywords::KeywordScorer;
pub use salutation::SalutationScorer;
pub use speech_rate::SpeechRateScorer;
pub use vocabulary::VocabularyScorer;
