//! Next-word continuations between terminal nodes

use crate::dict::trie::TrieStore;
use crate::dict::types::{Continuation, NodeId};

impl TrieStore {
    /// Link `word1 -> word2`, creating either word's path when missing.
    ///
    /// An existing link is incremented when `accumulate` is set and
    /// overwritten otherwise. Returns the resulting frequency, or `None`
    /// without touching the store when either word is empty.
    pub fn upsert_bigram(
        &mut self,
        word1: &str,
        word2: &str,
        frequency: u32,
        accumulate: bool,
    ) -> Option<u32> {
        if word1.is_empty() || word2.is_empty() {
            return None;
        }
        let first = self.resolve_word(word1)?;
        let second = self.resolve_word(word2)?;

        let links = &mut self.node_mut(first).continuations;
        if let Some(link) = links.iter_mut().find(|l| l.target == second) {
            link.frequency = if accumulate {
                link.frequency.saturating_add(frequency)
            } else {
                frequency
            };
            return Some(link.frequency);
        }

        links.push(Continuation {
            target: second,
            frequency,
        });
        Some(frequency)
    }

    /// Overwrite the frequency of `word1 -> word2`
    pub fn set_bigram(&mut self, word1: &str, word2: &str, frequency: u32) -> Option<u32> {
        self.upsert_bigram(word1, word2, frequency, false)
    }

    /// Add to the frequency of `word1 -> word2`
    pub fn add_bigram(&mut self, word1: &str, word2: &str, frequency: u32) -> Option<u32> {
        self.upsert_bigram(word1, word2, frequency, true)
    }

    /// Continuations stored on a word's terminal node
    pub fn continuations_of(&self, id: NodeId) -> &[Continuation] {
        &self.node(id).continuations
    }

    /// Frequency of the `word1 -> word2` link, if any
    pub fn bigram_frequency(&self, word1: &str, word2: &str) -> Option<u32> {
        let first = self.find_terminal(word1)?;
        let second = self.find_terminal(word2)?;
        self.continuations_of(first)
            .iter()
            .find(|l| l.target == second)
            .map(|l| l.frequency)
    }
}
