//! Dictionaries as seen by the input method
//!
//! [`Dictionary`] is the capability set a suggestion engine needs from a
//! word store. [`ExpandableDictionary`] implements it over an in-memory trie
//! that is (re)populated in the background by a
//! [`DictionaryLoader`](crate::dict::DictionaryLoader).

pub mod expandable;
pub mod scheduler;

pub use expandable::ExpandableDictionary;
pub use scheduler::{Admission, LoadPhase, ReloadScheduler};

use crate::query::composer::WordComposer;
use crate::query::sink::WordSink;
use anyhow::Result;

pub trait Dictionary: Send + Sync {
    /// Insert a word or raise its frequency
    fn add_word(&self, word: &str, frequency: u32) -> Result<()>;

    /// Offer fuzzy matches and completions for the typed input.
    /// Offers nothing while the dictionary is reloading.
    fn get_words(
        &self,
        composer: &dyn WordComposer,
        sink: &mut dyn WordSink,
        next_letters: Option<&mut [u32]>,
    );

    /// Offer likely successors of `previous_word`
    fn get_bigrams(&self, previous_word: &str, sink: &mut dyn WordSink);

    /// Whether `word` is stored exactly. `false` while reloading.
    fn is_valid_word(&self, word: &str) -> bool;
}
