pub mod bigrams;
pub mod composer;
pub mod scorer;
pub mod search;
pub mod sink;

pub use bigrams::{DEFAULT_BIGRAM_THRESHOLD, bigrams_for};
pub use composer::{KeyComposer, KeyboardLayout, NOT_A_CODE, WordComposer};
pub use scorer::ScoringWeights;
pub use search::Searcher;
pub use sink::{SuggestionCollector, WordSink};
