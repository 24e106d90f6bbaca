//! Fuzzy prefix search over the trie
//!
//! The traversal is depth-first and matches trie characters against typed
//! positions, each of which may offer several candidate codes. Once the input
//! is exhausted every remaining path is a completion. The whole traversal
//! runs once as an exact pass and then once per typed position with that
//! trie depth treated as a missing keystroke, which recovers single-letter
//! omissions ("wrld" -> "world").
//!
//! Candidates are emitted in trie order; ranking is left to the sink.

use crate::dict::trie::TrieStore;
use crate::dict::types::{NodeId, WordKind};
use crate::query::composer::{NOT_A_CODE, WordComposer};
use crate::query::scorer::ScoringWeights;
use crate::query::sink::WordSink;
use crate::utils::normalize;

/// Characters that may be skipped when the user did not type them
/// ("wouldve" finds "would've")
const ELISION_MARKS: [char; 2] = ['\'', '\u{2019}'];

#[inline]
fn is_elision_mark(c: char) -> bool {
    ELISION_MARKS.contains(&c)
}

/// Fuzzy search driver
#[derive(Debug, Clone)]
pub struct Searcher<'w> {
    weights: &'w ScoringWeights,
    source_id: u32,
}

impl<'w> Searcher<'w> {
    pub fn new(weights: &'w ScoringWeights, source_id: u32) -> Self {
        Self { weights, source_id }
    }

    /// Emit every candidate for `composer` into `sink`.
    ///
    /// `next_letters`, when given, is a histogram indexed by character code:
    /// for each completion found by the exact pass, the slot of the character
    /// at the first completed position is incremented.
    ///
    /// Returns `false` if the sink stopped the search.
    pub fn search(
        &self,
        store: &TrieStore,
        composer: &dyn WordComposer,
        sink: &mut dyn WordSink,
        next_letters: Option<&mut [u32]>,
    ) -> bool {
        let mut traversal = self.traversal(store, composer, sink, next_letters);
        if !traversal.walk(None, 0, false, 1, 0, None) {
            return false;
        }
        for skip in 0..composer.len() {
            if !traversal.walk(None, 0, false, 1, 0, Some(skip)) {
                return false;
            }
        }
        true
    }

    /// Run a single traversal pass, with `skip_pos` as the trie depth that
    /// stands in for a missing keystroke (`None` for the exact pass)
    pub fn search_pass(
        &self,
        store: &TrieStore,
        composer: &dyn WordComposer,
        sink: &mut dyn WordSink,
        skip_pos: Option<usize>,
    ) -> bool {
        self.traversal(store, composer, sink, None)
            .walk(None, 0, false, 1, 0, skip_pos)
    }

    fn traversal<'a>(
        &self,
        store: &'a TrieStore,
        composer: &'a dyn WordComposer,
        sink: &'a mut dyn WordSink,
        next_letters: Option<&'a mut [u32]>,
    ) -> Traversal<'a>
    where
        'w: 'a,
    {
        let input_len = composer.len();
        Traversal {
            store,
            weights: self.weights,
            source_id: self.source_id,
            codes: (0..input_len)
                .map(|i| trim_codes(composer.codes_at(i)))
                .collect(),
            typed: composer.typed_word().chars().collect(),
            max_depth: self.weights.max_depth(input_len),
            word: Vec::with_capacity(input_len + 1),
            sink,
            next_letters,
        }
    }
}

/// Cut a code list at its sentinel
fn trim_codes(codes: &[i32]) -> &[i32] {
    match codes.iter().position(|&c| c == NOT_A_CODE) {
        Some(end) => &codes[..end],
        None => codes,
    }
}

struct Traversal<'a> {
    store: &'a TrieStore,
    weights: &'a ScoringWeights,
    source_id: u32,
    codes: Vec<&'a [i32]>,
    typed: Vec<char>,
    max_depth: usize,
    /// Candidate being built, `word[depth]` is the current character
    word: Vec<char>,
    sink: &'a mut dyn WordSink,
    next_letters: Option<&'a mut [u32]>,
}

impl Traversal<'_> {
    #[inline]
    fn place(&mut self, depth: usize, c: char) {
        self.word.truncate(depth);
        self.word.push(c);
    }

    #[inline]
    fn emit(&mut self, depth: usize, weight: u64) -> bool {
        self.sink
            .offer(&self.word[..=depth], weight, self.source_id, WordKind::Unigram)
    }

    fn count_next_letter(&mut self, input_index: usize) {
        let Some(histogram) = self.next_letters.as_deref_mut() else {
            return;
        };
        if let Some(&c) = self.word.get(input_index) {
            if let Some(slot) = histogram.get_mut(c as usize) {
                *slot += 1;
            }
        }
    }

    /// Visit the children of `parent` (the roots when `None`).
    /// Returns `false` once the sink asks to stop.
    fn walk(
        &mut self,
        parent: Option<NodeId>,
        depth: usize,
        mut completion: bool,
        score: u64,
        input_index: usize,
        skip_pos: Option<usize>,
    ) -> bool {
        if depth > self.max_depth {
            return true;
        }
        let input_len = self.codes.len();
        let current: &[i32] = if input_index >= input_len {
            completion = true;
            &[]
        } else {
            self.codes[input_index]
        };

        let store = self.store;
        for &id in store.children_of(parent) {
            let node = store.node(id);
            let c = node.code;
            let has_children = !node.children.is_empty();
            let freq = node.frequency as u64;

            if completion {
                self.place(depth, c);
                if node.terminal {
                    if !self.emit(depth, freq.saturating_mul(score)) {
                        return false;
                    }
                    if depth >= input_index && skip_pos.is_none() {
                        self.count_next_letter(input_index);
                    }
                }
                if has_children
                    && !self.walk(Some(id), depth + 1, true, score, input_index, skip_pos)
                {
                    return false;
                }
            } else if (is_elision_mark(c) && current.first() != Some(&(c as i32)))
                || skip_pos == Some(depth)
            {
                self.place(depth, c);
                if has_children
                    && !self.walk(Some(id), depth + 1, false, score, input_index, skip_pos)
                {
                    return false;
                }
            } else {
                // Alternates are not combined with a skipped position
                let alternatives = if skip_pos.is_some() {
                    &current[..current.len().min(1)]
                } else {
                    current
                };
                let lower = normalize(c) as i32;

                for (j, &code) in alternatives.iter().enumerate() {
                    if code != lower && code != c as i32 {
                        continue;
                    }
                    self.place(depth, c);
                    let factor = self.weights.key_factor(j);
                    let next_score = score.saturating_mul(factor);

                    if input_index + 1 == input_len {
                        if node.terminal
                            && (self.weights.include_typed_word
                                || self.word[..=depth] != self.typed[..])
                        {
                            let mut weight = freq.saturating_mul(next_score);
                            if skip_pos.is_none() {
                                weight = weight.saturating_mul(self.weights.full_word_multiplier);
                            }
                            if !self.emit(depth, weight) {
                                return false;
                            }
                        }
                        if has_children
                            && !self.walk(
                                Some(id),
                                depth + 1,
                                true,
                                next_score,
                                input_index + 1,
                                skip_pos,
                            )
                        {
                            return false;
                        }
                    } else if has_children
                        && !self.walk(
                            Some(id),
                            depth + 1,
                            false,
                            next_score,
                            input_index + 1,
                            skip_pos,
                        )
                    {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::types::Suggestion;
    use crate::query::composer::KeyComposer;
    use crate::query::sink::SuggestionCollector;

    fn store_with(words: &[(&str, u32)]) -> TrieStore {
        let mut store = TrieStore::new();
        for (word, freq) in words {
            store.insert_word(word, *freq).unwrap();
        }
        store
    }

    fn capture(store: &TrieStore, composer: &dyn WordComposer) -> Vec<Suggestion> {
        let weights = ScoringWeights::default();
        let mut sink: Vec<Suggestion> = Vec::new();
        Searcher::new(&weights, 0).search(store, composer, &mut sink, None);
        sink
    }

    fn ranked(store: &TrieStore, typed: &str) -> Vec<Suggestion> {
        let weights = ScoringWeights::default();
        let mut collector = SuggestionCollector::new(10);
        let composer = KeyComposer::from_typed(typed);
        Searcher::new(&weights, 0).search(store, &composer, &mut collector, None);
        collector.into_sorted_vec()
    }

    fn words(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    /// Composer whose code lists are padded with the sentinel
    struct PaddedComposer {
        codes: Vec<[i32; 3]>,
        typed: String,
    }

    impl WordComposer for PaddedComposer {
        fn len(&self) -> usize {
            self.codes.len()
        }
        fn codes_at(&self, index: usize) -> &[i32] {
            &self.codes[index]
        }
        fn typed_word(&self) -> &str {
            &self.typed
        }
    }

    #[test]
    fn test_prefix_completions_ranked_by_weight() {
        let store = store_with(&[("hello", 100), ("help", 50), ("helicopter", 10), ("world", 90)]);
        let results = ranked(&store, "hel");
        assert_eq!(words(&results), vec!["hello", "help", "helicopter"]);
        // three primary matches: 2 * 2 * 2
        assert_eq!(results[0].weight, 800);
        assert_eq!(results[1].weight, 400);
        assert_eq!(results[2].weight, 80);
    }

    #[test]
    fn test_full_word_bonus() {
        let store = store_with(&[("cat", 10), ("cats", 10)]);
        let composer = KeyComposer::from_typed("CAT");
        let results = capture(&store, &composer);
        let cat = results.iter().find(|s| s.word == "cat").unwrap();
        // 10 * 2^3 * full word bonus
        assert_eq!(cat.weight, 160);
        let cats = results.iter().find(|s| s.word == "cats").unwrap();
        assert_eq!(cats.weight, 80);
    }

    #[test]
    fn test_typed_word_suppressed_by_default() {
        let store = store_with(&[("cat", 10)]);
        let composer = KeyComposer::from_typed("cat");
        assert!(capture(&store, &composer).is_empty());

        let weights = ScoringWeights {
            include_typed_word: true,
            ..Default::default()
        };
        let mut sink: Vec<Suggestion> = Vec::new();
        Searcher::new(&weights, 0).search(&store, &composer, &mut sink, None);
        assert_eq!(words(&sink), vec!["cat"]);
    }

    #[test]
    fn test_primary_key_outranks_adjacent_key() {
        let store = store_with(&[("cat", 10), ("vat", 10)]);
        let mut composer = KeyComposer::new();
        composer.push('c', &['x', 'v']);
        composer.push('a', &[]);
        composer.push('t', &[]);

        let weights = ScoringWeights::default();
        let mut collector = SuggestionCollector::new(10);
        Searcher::new(&weights, 0).search(&store, &composer, &mut collector, None);
        let results = collector.into_sorted_vec();

        // "cat" is the typed word, so only the adjacent-key match shows up
        assert_eq!(words(&results), vec!["vat"]);
        assert_eq!(results[0].weight, 10 * 4 * 2);
    }

    #[test]
    fn test_primary_and_adjacent_ranking() {
        let store = store_with(&[("card", 10), ("vard", 10)]);
        let mut composer = KeyComposer::new();
        composer.push('c', &['v']);
        composer.push('a', &[]);
        composer.push('r', &[]);

        let weights = ScoringWeights::default();
        let mut collector = SuggestionCollector::new(10);
        Searcher::new(&weights, 0).search(&store, &composer, &mut collector, None);
        let results = collector.into_sorted_vec();
        assert_eq!(words(&results), vec!["card", "vard"]);
        assert_eq!(results[0].weight, 80);
        assert_eq!(results[1].weight, 40);
    }

    #[test]
    fn test_skip_position_recovers_missing_letter() {
        let store = store_with(&[("world", 50)]);
        let composer = KeyComposer::from_typed("wrld");
        let weights = ScoringWeights::default();
        let searcher = Searcher::new(&weights, 0);

        let mut exact: Vec<Suggestion> = Vec::new();
        searcher.search_pass(&store, &composer, &mut exact, None);
        assert!(exact.is_empty());

        let mut skipped: Vec<Suggestion> = Vec::new();
        searcher.search_pass(&store, &composer, &mut skipped, Some(1));
        assert_eq!(words(&skipped), vec!["world"]);
        // four primary matches, no full word bonus
        assert_eq!(skipped[0].weight, 50 * 16);

        assert_eq!(words(&ranked(&store, "wrld")), vec!["world"]);
    }

    #[test]
    fn test_apostrophe_elision() {
        let store = store_with(&[("would've", 50), ("wouldn't", 40)]);
        let results = ranked(&store, "wouldve");
        assert_eq!(words(&results), vec!["would've"]);
        assert_eq!(results[0].weight, 50 * 128 * 2);
    }

    #[test]
    fn test_typed_apostrophe_is_matched() {
        let store = store_with(&[("it's", 30)]);
        let results = ranked(&store, "it'");
        assert_eq!(words(&results), vec!["it's"]);
    }

    #[test]
    fn test_diacritics_and_case_match() {
        let store = store_with(&[("Café", 20)]);
        let results = ranked(&store, "cafe");
        assert_eq!(words(&results), vec!["Café"]);
    }

    #[test]
    fn test_sentinel_ends_code_list() {
        let store = store_with(&[("ab", 10), ("xb", 10)]);
        let composer = PaddedComposer {
            codes: vec![
                ['a' as i32, NOT_A_CODE, 'x' as i32],
                ['b' as i32, NOT_A_CODE, NOT_A_CODE],
            ],
            typed: "zz".to_string(),
        };
        let results = capture(&store, &composer);
        assert!(results.iter().all(|s| s.word != "xb"));
        assert!(results.iter().any(|s| s.word == "ab"));
    }

    #[test]
    fn test_max_depth_bounds_completions() {
        let store = store_with(&[("abc", 1), ("abcd", 1), ("abcde", 1)]);
        let composer = KeyComposer::from_typed("a");
        let weights = ScoringWeights::default();
        let mut sink: Vec<Suggestion> = Vec::new();
        Searcher::new(&weights, 0).search_pass(&store, &composer, &mut sink, None);
        assert_eq!(words(&sink), vec!["abc", "abcd"]);
    }

    #[test]
    fn test_emission_follows_trie_order() {
        let store = store_with(&[("bz", 1), ("ba", 200), ("bm", 50)]);
        let composer = KeyComposer::from_typed("b");
        let weights = ScoringWeights::default();
        let mut sink: Vec<Suggestion> = Vec::new();
        Searcher::new(&weights, 0).search_pass(&store, &composer, &mut sink, None);
        assert_eq!(words(&sink), vec!["bz", "ba", "bm"]);
    }

    #[test]
    fn test_sink_can_stop_search() {
        let store = store_with(&[("aa", 1), ("ab", 1), ("ac", 1)]);
        let composer = KeyComposer::from_typed("a");
        let weights = ScoringWeights::default();
        let mut collector = SuggestionCollector::new(10).with_max_offers(1);
        let finished =
            Searcher::new(&weights, 0).search(&store, &composer, &mut collector, None);
        assert!(!finished);
        assert_eq!(collector.offers(), 1);
    }

    #[test]
    fn test_next_letter_histogram() {
        let store = store_with(&[("hello", 10), ("help", 10), ("hex", 10), ("he", 10)]);
        let composer = KeyComposer::from_typed("he");
        let weights = ScoringWeights::default();
        let mut histogram = vec![0u32; 128];
        let mut sink: Vec<Suggestion> = Vec::new();
        Searcher::new(&weights, 0).search(&store, &composer, &mut sink, Some(&mut histogram));
        assert_eq!(histogram['l' as usize], 2);
        assert_eq!(histogram['x' as usize], 1);
        assert_eq!(histogram.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = TrieStore::new();
        assert!(ranked(&store, "anything").is_empty());
    }

    #[test]
    fn test_source_id_reaches_sink() {
        struct IdSink(Vec<u32>);
        impl WordSink for IdSink {
            fn offer(&mut self, _: &[char], _: u64, source_id: u32, _: WordKind) -> bool {
                self.0.push(source_id);
                true
            }
        }
        let store = store_with(&[("go", 1)]);
        let composer = KeyComposer::from_typed("g");
        let weights = ScoringWeights::default();
        let mut sink = IdSink(Vec::new());
        Searcher::new(&weights, 7).search(&store, &composer, &mut sink, None);
        assert!(!sink.0.is_empty());
        assert!(sink.0.iter().all(|&id| id == 7));
    }
}
