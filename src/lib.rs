//! # keytrie - Predictive Text Dictionary
//!
//! keytrie stores words and word pairs in an in-memory trie and answers the
//! two questions an input method asks while the user types: which words
//! could the current keystrokes mean, and which words usually follow the
//! previous one.
//!
//! ## Architecture
//!
//! - [`dict`] - Arena trie store, bigram links, word-list loading
//! - [`query`] - Fuzzy search, next-word lookup, composers and sinks
//! - [`dictionary`] - Reloadable dictionary facade and its load scheduler
//! - [`output`] - Terminal and JSON formatting for the CLI
//! - [`utils`] - Character normalization, configuration, progress
//!
//! ## Quick Start
//!
//! ```no_run
//! use keytrie::dict::WordListLoader;
//! use keytrie::dictionary::{Dictionary, ExpandableDictionary};
//! use keytrie::query::{KeyComposer, SuggestionCollector};
//!
//! let dictionary = ExpandableDictionary::new(WordListLoader::new("words.txt"));
//! dictionary.load_blocking().unwrap();
//!
//! let mut collector = SuggestionCollector::new(5);
//! dictionary.get_words(&KeyComposer::from_typed("helo"), &mut collector, None);
//!
//! for suggestion in collector.into_sorted_vec() {
//!     println!("{} {}", suggestion.word, suggestion.weight);
//! }
//! ```
//!
//! ## Matching
//!
//! Every typed position carries a primary code and optional alternates.
//! Characters are compared after [`utils::normalize`] folds case and
//! diacritics, apostrophes in stored words are stepped over, and one extra
//! pass per position tolerates a single missing keystroke.

pub mod dict;
pub mod dictionary;
pub mod output;
pub mod query;
pub mod utils;
