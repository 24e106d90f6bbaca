use crate::query::bigrams::DEFAULT_BIGRAM_THRESHOLD;
use crate::query::scorer::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Index of a node in the store's arena
pub type NodeId = u32;

/// Upper bound for a word's frequency
pub const MAX_FREQUENCY: u32 = 255;

/// Longest word the loaders accept
pub const MAX_WORD_LENGTH: usize = 32;

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    /// Single-word match or completion
    Unigram,
    /// Successor of a previous word
    Bigram,
}

/// Weighted link from a terminal node to a successor word's terminal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub target: NodeId,
    pub frequency: u32,
}

/// One character position in the trie
#[derive(Debug, Clone)]
pub struct Node {
    /// Stored character, exactly as inserted
    pub code: char,
    /// Word weight, only meaningful when `terminal` is set
    pub frequency: u32,
    pub terminal: bool,
    /// Node one character up the path; `None` for roots
    pub parent: Option<NodeId>,
    /// Children in insertion order, unique per `code`
    pub children: Vec<NodeId>,
    /// Next-word links, only populated on terminal nodes
    pub continuations: Vec<Continuation>,
}

impl Node {
    pub fn new(code: char, parent: Option<NodeId>) -> Self {
        Self {
            code,
            frequency: 0,
            terminal: false,
            parent,
            children: Vec::new(),
            continuations: Vec::new(),
        }
    }

    /// Merge a new frequency into a terminal node.
    /// Never decreases and never exceeds [`MAX_FREQUENCY`].
    #[inline]
    pub fn merge_frequency(&mut self, frequency: u32) {
        self.frequency = self.frequency.max(frequency).min(MAX_FREQUENCY);
    }
}

/// Candidate produced by a search, owned form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub weight: u64,
    pub kind: WordKind,
}

/// Per-dictionary settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Weights for fuzzy search candidates
    pub scoring_weights: ScoringWeights,
    /// Minimum continuation frequency for next-word suggestions
    pub bigram_threshold: u32,
    /// Identifier passed to sinks with every candidate
    pub source_id: u32,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            scoring_weights: ScoringWeights::default(),
            bigram_threshold: DEFAULT_BIGRAM_THRESHOLD,
            source_id: 0,
        }
    }
}
