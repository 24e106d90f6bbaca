//! In-memory dictionary that grows at runtime and reloads in the background

use crate::dict::loader::DictionaryLoader;
use crate::dict::stats::StoreStats;
use crate::dict::trie::TrieStore;
use crate::dict::types::DictionaryConfig;
use crate::dictionary::scheduler::{Admission, LoadGuard, LoadPhase, ReloadScheduler};
use crate::dictionary::Dictionary;
use crate::query::bigrams::bigrams_for;
use crate::query::composer::WordComposer;
use crate::query::search::Searcher;
use crate::query::sink::WordSink;
use anyhow::Result;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

struct Shared {
    store: RwLock<Arc<TrieStore>>,
    scheduler: ReloadScheduler,
    loader: Box<dyn DictionaryLoader>,
    config: DictionaryConfig,
}

impl Shared {
    fn current(&self) -> Arc<TrieStore> {
        Arc::clone(&self.store.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Build a fresh store through the loader and swap it in.
    /// Must only be called after the scheduler entered `Loading`.
    fn run_load_pass(&self) -> Result<()> {
        let _guard = LoadGuard(&self.scheduler);
        let started = Instant::now();

        let mut store = TrieStore::new();
        let result = self.loader.load(&mut store);
        let words = store.word_count();

        *self.store.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(store);

        match &result {
            Ok(()) => info!(
                words,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "dictionary loaded"
            ),
            Err(e) => warn!(error = %e, words, "dictionary load failed, keeping partial store"),
        }
        result
    }
}

/// Trie-backed dictionary with an asynchronous reload cycle.
///
/// Cloning is cheap and every clone shares the same store and scheduler.
#[derive(Clone)]
pub struct ExpandableDictionary {
    shared: Arc<Shared>,
}

impl ExpandableDictionary {
    pub fn new(loader: impl DictionaryLoader + 'static) -> Self {
        Self::with_config(loader, DictionaryConfig::default())
    }

    pub fn with_config(loader: impl DictionaryLoader + 'static, config: DictionaryConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: RwLock::new(Arc::new(TrieStore::new())),
                scheduler: ReloadScheduler::new(),
                loader: Box::new(loader),
                config,
            }),
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.shared.config
    }

    /// Start a background load unless one is already running
    pub fn load_dictionary(&self) {
        if self.shared.scheduler.try_begin() {
            self.spawn_load();
        } else {
            debug!("load already in progress, request dropped");
        }
    }

    /// Run a load pass on the calling thread. If a load is already in
    /// flight, wait for it instead.
    pub fn load_blocking(&self) -> Result<()> {
        if self.shared.scheduler.try_begin() {
            self.shared.run_load_pass()
        } else {
            self.shared.scheduler.wait_for_load();
            Ok(())
        }
    }

    fn spawn_load(&self) {
        let shared = Arc::clone(&self.shared);
        rayon::spawn(move || {
            // Errors are logged by the pass. A panic must not reach rayon,
            // which aborts the process on panics in spawned jobs.
            let pass = panic::catch_unwind(AssertUnwindSafe(|| shared.run_load_pass()));
            if let Err(payload) = pass {
                warn!(panic = panic_message(&*payload), "dictionary loader panicked");
            }
        });
    }

    /// Ask for a reload on the next query
    pub fn set_requires_reload(&self, reload: bool) {
        self.shared.scheduler.set_requires_reload(reload);
    }

    pub fn requires_reload(&self) -> bool {
        self.shared.scheduler.requires_reload()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.scheduler.phase() == LoadPhase::Loading
    }

    /// Start a pending reload if one was requested.
    /// Returns `true` while a load is in flight.
    pub fn reload_if_required(&self) -> bool {
        match self.shared.scheduler.admit() {
            Admission::Open => false,
            Admission::Busy => true,
            Admission::StartLoad => {
                self.spawn_load();
                true
            }
        }
    }

    /// Current store, or `None` while a load is in flight
    pub fn snapshot(&self) -> Option<Arc<TrieStore>> {
        if self.reload_if_required() {
            return None;
        }
        Some(self.shared.current())
    }

    /// Block until no load is running
    pub fn wait_for_dictionary_loading(&self) {
        self.shared.scheduler.wait_for_load();
    }

    /// Like [`wait_for_dictionary_loading`](Self::wait_for_dictionary_loading)
    /// with an upper bound. Returns `true` if no load is running.
    pub fn wait_for_dictionary_loading_timeout(&self, timeout: Duration) -> bool {
        self.shared.scheduler.wait_for_load_timeout(timeout)
    }

    fn with_store_mut<R>(&self, f: impl FnOnce(&mut TrieStore) -> R) -> R {
        let mut guard = self
            .shared
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(Arc::make_mut(&mut guard))
    }

    /// Overwrite the frequency of `word1 -> word2`
    pub fn set_bigram(&self, word1: &str, word2: &str, frequency: u32) -> Option<u32> {
        self.with_store_mut(|store| store.set_bigram(word1, word2, frequency))
    }

    /// Add to the frequency of `word1 -> word2`
    pub fn add_bigram(&self, word1: &str, word2: &str, frequency: u32) -> Option<u32> {
        self.with_store_mut(|store| store.add_bigram(word1, word2, frequency))
    }

    /// Frequency of `word`, `None` if unknown or while loading
    pub fn word_frequency(&self, word: &str) -> Option<u32> {
        self.snapshot()?.word_frequency(word)
    }

    /// Empty the store
    pub fn clear_dictionary(&self) {
        self.with_store_mut(TrieStore::clear);
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats::collect(&self.shared.current())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

impl Dictionary for ExpandableDictionary {
    fn add_word(&self, word: &str, frequency: u32) -> Result<()> {
        self.with_store_mut(|store| store.insert_word(word, frequency))
    }

    fn get_words(
        &self,
        composer: &dyn WordComposer,
        sink: &mut dyn WordSink,
        next_letters: Option<&mut [u32]>,
    ) {
        let Some(store) = self.snapshot() else {
            return;
        };
        let config = &self.shared.config;
        Searcher::new(&config.scoring_weights, config.source_id).search(
            &store,
            composer,
            sink,
            next_letters,
        );
    }

    fn get_bigrams(&self, previous_word: &str, sink: &mut dyn WordSink) {
        let Some(store) = self.snapshot() else {
            return;
        };
        let config = &self.shared.config;
        bigrams_for(
            &store,
            previous_word,
            sink,
            config.bigram_threshold,
            config.source_id,
        );
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.word_frequency(word).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::types::Suggestion;
    use crate::query::composer::KeyComposer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::{Receiver, Sender, channel};
    use std::sync::Mutex;

    const WAIT: Duration = Duration::from_secs(5);

    fn fixed_words(store: &mut TrieStore) -> Result<()> {
        store.insert_word("hello", 100)?;
        store.insert_word("help", 50)?;
        store.insert_word("and", 30)?;
        store.insert_word("then", 20)?;
        store.set_bigram("and", "then", 40);
        Ok(())
    }

    /// Loader that blocks until released and counts its runs
    struct GatedLoader {
        release: Mutex<Receiver<()>>,
        runs: Arc<AtomicUsize>,
    }

    impl DictionaryLoader for GatedLoader {
        fn load(&self, store: &mut TrieStore) -> Result<()> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            let _ = self.release.lock().unwrap().recv_timeout(WAIT);
            fixed_words(store)
        }
    }

    fn gated() -> (ExpandableDictionary, Sender<()>, Arc<AtomicUsize>) {
        let (tx, rx) = channel();
        let runs = Arc::new(AtomicUsize::new(0));
        let loader = GatedLoader {
            release: Mutex::new(rx),
            runs: Arc::clone(&runs),
        };
        (ExpandableDictionary::new(loader), tx, runs)
    }

    fn query(dict: &ExpandableDictionary, typed: &str) -> Vec<Suggestion> {
        let mut sink: Vec<Suggestion> = Vec::new();
        dict.get_words(&KeyComposer::from_typed(typed), &mut sink, None);
        sink
    }

    #[test]
    fn test_blocking_load() {
        let dict = ExpandableDictionary::new(fixed_words);
        dict.load_blocking().unwrap();
        assert!(!dict.is_loading());
        assert!(dict.is_valid_word("hello"));
        assert_eq!(dict.word_frequency("help"), Some(50));
        assert!(!query(&dict, "hel").is_empty());
    }

    #[test]
    fn test_queries_empty_while_loading() {
        let (dict, release, _) = gated();
        dict.load_dictionary();
        assert!(dict.is_loading());

        assert!(query(&dict, "hel").is_empty());
        assert!(!dict.is_valid_word("hello"));
        let mut bigrams: Vec<Suggestion> = Vec::new();
        dict.get_bigrams("and", &mut bigrams);
        assert!(bigrams.is_empty());

        release.send(()).unwrap();
        assert!(dict.wait_for_dictionary_loading_timeout(WAIT));
        assert!(!query(&dict, "hel").is_empty());
        dict.get_bigrams("and", &mut bigrams);
        assert_eq!(bigrams.len(), 1);
    }

    #[test]
    fn test_second_load_request_is_dropped() {
        let (dict, release, runs) = gated();
        dict.load_dictionary();
        dict.load_dictionary();
        dict.load_dictionary();

        release.send(()).unwrap();
        assert!(dict.wait_for_dictionary_loading_timeout(WAIT));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_requires_reload_triggers_on_query() {
        let (dict, release, runs) = gated();
        dict.set_requires_reload(true);
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        // The triggering query itself gets nothing
        assert!(query(&dict, "hel").is_empty());
        assert!(!dict.requires_reload());

        release.send(()).unwrap();
        assert!(dict.wait_for_dictionary_loading_timeout(WAIT));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(dict.is_valid_word("hello"));
    }

    #[test]
    fn test_reload_replaces_store() {
        let dict = ExpandableDictionary::new(fixed_words);
        dict.add_word("transient", 10).unwrap();
        assert!(dict.is_valid_word("transient"));

        dict.load_blocking().unwrap();
        assert!(!dict.is_valid_word("transient"));
        assert!(dict.is_valid_word("hello"));
    }

    #[test]
    fn test_failed_load_clears_loading() {
        let dict = ExpandableDictionary::new(|store: &mut TrieStore| -> Result<()> {
            store.insert_word("partial", 5)?;
            anyhow::bail!("backend went away")
        });
        assert!(dict.load_blocking().is_err());
        assert!(!dict.is_loading());
        assert!(dict.is_valid_word("partial"));
    }

    #[test]
    fn test_panicking_loader_clears_loading() {
        let dict = ExpandableDictionary::new(|_: &mut TrieStore| -> Result<()> {
            panic!("backend blew up")
        });
        dict.load_dictionary();
        assert!(dict.wait_for_dictionary_loading_timeout(WAIT));
        assert!(!dict.is_loading());
        assert!(!dict.is_valid_word("anything"));

        // The scheduler accepts another load afterwards
        dict.load_dictionary();
        assert!(dict.wait_for_dictionary_loading_timeout(WAIT));
        assert!(!dict.is_loading());
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*payload), "static message");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(&*payload), "owned message");
        let payload: Box<dyn Any + Send> = Box::new(7u32);
        assert_eq!(panic_message(&*payload), "unknown panic");
    }

    #[test]
    fn test_runtime_mutators() {
        let dict = ExpandableDictionary::new(|_: &mut TrieStore| -> Result<()> { Ok(()) });
        dict.add_word("good", 10).unwrap();
        dict.add_word("morning", 10).unwrap();
        assert_eq!(dict.add_bigram("good", "morning", 8), Some(8));
        assert_eq!(dict.add_bigram("good", "morning", 8), Some(16));
        assert_eq!(dict.set_bigram("good", "morning", 3), Some(3));
        assert!(dict.add_word("", 1).is_err());
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let dict = ExpandableDictionary::new(fixed_words);
        dict.load_blocking().unwrap();
        let before = dict.snapshot().unwrap();
        dict.add_word("later", 1).unwrap();

        assert!(!before.contains("later"));
        assert!(dict.snapshot().unwrap().contains("later"));
    }

    #[test]
    fn test_clear_dictionary() {
        let dict = ExpandableDictionary::new(fixed_words);
        dict.load_blocking().unwrap();
        dict.clear_dictionary();
        assert!(query(&dict, "hel").is_empty());
        assert_eq!(dict.stats().words, 0);
    }

    #[test]
    fn test_bigram_threshold_from_config() {
        let config = DictionaryConfig {
            bigram_threshold: 50,
            ..Default::default()
        };
        let dict = ExpandableDictionary::with_config(fixed_words, config);
        dict.load_blocking().unwrap();

        let mut sink: Vec<Suggestion> = Vec::new();
        dict.get_bigrams("and", &mut sink);
        assert!(sink.is_empty());
    }
}
