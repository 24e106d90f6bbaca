#![no_main]

use arbitrary::Arbitrary;
use keytrie::dict::{Suggestion, TrieStore, load_bytes};
use keytrie::query::{KeyComposer, ScoringWeights, Searcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput<'a> {
    word_list: &'a [u8],
    typed: &'a str,
    alternates: Vec<Vec<char>>,
}

fuzz_target!(|input: SearchInput| {
    // Arbitrary word lists and keystrokes must never panic
    let mut store = TrieStore::new();
    load_bytes(input.word_list, &mut store);

    let mut composer = KeyComposer::new();
    for (i, c) in input.typed.chars().take(16).enumerate() {
        let alternates = input.alternates.get(i).map(Vec::as_slice).unwrap_or(&[]);
        composer.push(c, alternates);
    }

    let weights = ScoringWeights::default();
    let mut histogram = vec![0u32; 256];
    let mut sink: Vec<Suggestion> = Vec::new();
    Searcher::new(&weights, 0).search(&store, &composer, &mut sink, Some(&mut histogram));

    for suggestion in &sink {
        assert!(!suggestion.word.is_empty());
    }
});
