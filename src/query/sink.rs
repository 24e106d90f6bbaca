//! Receivers for search candidates

use crate::dict::types::{Suggestion, WordKind};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Receiver of candidates emitted by a search.
///
/// Returning `false` from [`offer`](WordSink::offer) stops the search that
/// is currently emitting.
pub trait WordSink {
    fn offer(&mut self, word: &[char], weight: u64, source_id: u32, kind: WordKind) -> bool;
}

/// Raw capture in emission order, duplicates included
impl WordSink for Vec<Suggestion> {
    fn offer(&mut self, word: &[char], weight: u64, _source_id: u32, kind: WordKind) -> bool {
        self.push(Suggestion {
            word: word.iter().collect(),
            weight,
            kind,
        });
        true
    }
}

/// Ranking sink: keeps the best weight per distinct word and returns the
/// top `limit` words by weight.
#[derive(Debug)]
pub struct SuggestionCollector {
    limit: usize,
    /// Stop the search after this many offers
    max_offers: Option<usize>,
    offers: usize,
    best: FxHashMap<String, (u64, WordKind)>,
}

impl SuggestionCollector {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            max_offers: None,
            offers: 0,
            best: FxHashMap::default(),
        }
    }

    /// Ask the engine to stop after `max_offers` candidates
    pub fn with_max_offers(mut self, max_offers: usize) -> Self {
        self.max_offers = Some(max_offers);
        self
    }

    /// Offers received so far
    pub fn offers(&self) -> usize {
        self.offers
    }

    /// Distinct words seen so far
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Weight of the lowest entry that would still be returned
    pub fn threshold(&self) -> u64 {
        if self.best.len() < self.limit {
            return 0;
        }
        let mut weights: Vec<u64> = self.best.values().map(|(w, _)| *w).collect();
        weights.sort_unstable_by(|a, b| b.cmp(a));
        weights.get(self.limit.saturating_sub(1)).copied().unwrap_or(0)
    }

    /// Ranked suggestions, best first. Equal weights are ordered by word.
    pub fn into_sorted_vec(self) -> Vec<Suggestion> {
        let mut entries: Vec<Suggestion> = self
            .best
            .into_iter()
            .map(|(word, (weight, kind))| Suggestion { word, weight, kind })
            .collect();
        entries.sort_by(|a, b| match b.weight.cmp(&a.weight) {
            Ordering::Equal => a.word.cmp(&b.word),
            other => other,
        });
        entries.truncate(self.limit);
        entries
    }
}

impl WordSink for SuggestionCollector {
    fn offer(&mut self, word: &[char], weight: u64, _source_id: u32, kind: WordKind) -> bool {
        self.offers += 1;
        let word: String = word.iter().collect();
        self.best
            .entry(word)
            .and_modify(|entry| {
                if weight > entry.0 {
                    *entry = (weight, kind);
                }
            })
            .or_insert((weight, kind));

        match self.max_offers {
            Some(max) => self.offers < max,
            None => true,
        }
    }
}
