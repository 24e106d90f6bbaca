//! Next-word lookup from bigram continuations

use crate::dict::trie::TrieStore;
use crate::dict::types::WordKind;
use crate::query::sink::WordSink;

/// Continuations weaker than this are not suggested
pub const DEFAULT_BIGRAM_THRESHOLD: u32 = 12;

/// Offer every successor of `previous_word` whose frequency reaches
/// `threshold`. The previous word must match a stored word exactly.
///
/// Returns `false` if the sink stopped the lookup.
pub fn bigrams_for(
    store: &TrieStore,
    previous_word: &str,
    sink: &mut dyn WordSink,
    threshold: u32,
    source_id: u32,
) -> bool {
    let Some(prev) = store.find_terminal(previous_word) else {
        return true;
    };

    for link in store.continuations_of(prev) {
        if link.frequency < threshold {
            continue;
        }
        let word: Vec<char> = store.word_at(link.target).chars().collect();
        if !sink.offer(&word, link.frequency as u64, source_id, WordKind::Bigram) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::types::Suggestion;

    fn lookup(store: &TrieStore, word: &str, threshold: u32) -> Vec<Suggestion> {
        let mut sink: Vec<Suggestion> = Vec::new();
        bigrams_for(store, word, &mut sink, threshold, 0);
        sink
    }

    #[test]
    fn test_threshold_filter() {
        let mut store = TrieStore::new();
        for word in ["and", "there", "then"] {
            store.insert_word(word, 10).unwrap();
        }
        store.set_bigram("and", "there", 5);
        store.set_bigram("and", "then", 40);

        let results = lookup(&store, "and", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "then");
        assert_eq!(results[0].weight, 40);
        assert_eq!(results[0].kind, WordKind::Bigram);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut store = TrieStore::new();
        store.add_bigram("i", "am", 20);
        store.add_bigram("i", "was", 30);
        store.add_bigram("i", "am", 20);

        let words: Vec<_> = lookup(&store, "i", 0).into_iter().map(|s| s.word).collect();
        assert_eq!(words, vec!["am", "was"]);
    }

    #[test]
    fn test_exact_match_only() {
        let mut store = TrieStore::new();
        store.add_bigram("The", "end", 50);
        assert!(lookup(&store, "the", 0).is_empty());
        assert!(lookup(&store, "Th", 0).is_empty());
        assert_eq!(lookup(&store, "The", 0).len(), 1);
    }

    #[test]
    fn test_unknown_word() {
        let store = TrieStore::new();
        assert!(lookup(&store, "nothing", 0).is_empty());
    }

    #[test]
    fn test_sink_can_stop_lookup() {
        let mut store = TrieStore::new();
        store.add_bigram("a", "b", 20);
        store.add_bigram("a", "c", 20);

        struct StopAfterOne(usize);
        impl WordSink for StopAfterOne {
            fn offer(&mut self, _: &[char], _: u64, _: u32, _: WordKind) -> bool {
                self.0 += 1;
                false
            }
        }
        let mut sink = StopAfterOne(0);
        assert!(!bigrams_for(&store, "a", &mut sink, 0, 0));
        assert_eq!(sink.0, 1);
    }
}
