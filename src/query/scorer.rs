//! Scoring policy for fuzzy keystroke matches
//!
//! A candidate's weight is its stored frequency multiplied by one factor per
//! matched keystroke: `primary_key_factor` when the key actually hit matched,
//! `secondary_key_factor` when an alternate (neighbouring) key did. Skipped
//! positions and elided apostrophes leave the weight unchanged. A word that
//! ends exactly on the last keystroke gets `full_word_multiplier` on top,
//! unless a position was skipped to reach it.

use serde::{Deserialize, Serialize};

/// Configurable factors for candidate weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Factor for a match on the key that was hit
    pub primary_key_factor: u64,
    /// Factor for a match on an alternate key
    pub secondary_key_factor: u64,
    /// Bonus for a complete word matched without skipping
    pub full_word_multiplier: u64,
    /// Traversal depth limit, as a multiple of the typed length
    pub max_depth_factor: usize,
    /// Offer the literal typed word when it is in the dictionary
    pub include_typed_word: bool,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary_key_factor: 2,
            secondary_key_factor: 1,
            full_word_multiplier: 2,
            max_depth_factor: 3,
            include_typed_word: false,
        }
    }
}

impl ScoringWeights {
    /// Factor for a match on alternative `index` of a typed position
    #[inline]
    pub fn key_factor(&self, index: usize) -> u64 {
        if index == 0 {
            self.primary_key_factor
        } else {
            self.secondary_key_factor
        }
    }

    /// Deepest trie level explored for an input of `input_len` keys
    #[inline]
    pub fn max_depth(&self, input_len: usize) -> usize {
        input_len.saturating_mul(self.max_depth_factor)
    }
}
