use crate::dict::trie::TrieStore;
use ahash::AHashMap;
use serde::Serialize;

/// Summary of a store's shape
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    pub words: usize,
    pub nodes: usize,
    pub roots: usize,
    pub continuations: usize,
    /// Length of the longest stored word, in characters
    pub max_depth: usize,
    /// Word counts per first character, most common first
    pub words_by_initial: Vec<(char, usize)>,
}

impl StoreStats {
    pub fn collect(store: &TrieStore) -> Self {
        let mut stats = StoreStats {
            words: store.word_count(),
            nodes: store.node_count(),
            roots: store.roots().len(),
            ..Default::default()
        };

        let mut by_initial: AHashMap<char, usize> = AHashMap::new();
        // Parents always precede their children in the arena
        let mut depth = vec![0usize; store.node_count()];
        let mut initial = vec!['\0'; store.node_count()];

        for (id, node) in store.nodes().iter().enumerate() {
            (depth[id], initial[id]) = match node.parent {
                Some(p) => (depth[p as usize] + 1, initial[p as usize]),
                None => (1, node.code),
            };
            if node.terminal {
                stats.max_depth = stats.max_depth.max(depth[id]);
                *by_initial.entry(initial[id]).or_insert(0) += 1;
            }
            stats.continuations += node.continuations.len();
        }

        let mut sorted: Vec<_> = by_initial.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        stats.words_by_initial = sorted;
        stats
    }
}
