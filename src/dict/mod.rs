pub mod bigram;
pub mod loader;
pub mod stats;
pub mod trie;
pub mod types;

pub use loader::{DictionaryLoader, LoadReport, WordListLoader, load_bytes};
pub use stats::StoreStats;
pub use trie::TrieStore;
pub use types::*;
