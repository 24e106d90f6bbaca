//! Population backends for a [`TrieStore`]
//!
//! A load pass only ever calls the store's mutators. Backends get a fresh,
//! empty store and may insert records in any order.

use crate::dict::trie::TrieStore;
use crate::dict::types::MAX_WORD_LENGTH;
use anyhow::{Context, Result};
use memchr::memchr_iter;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Something that can fill a store with words and bigrams
pub trait DictionaryLoader: Send + Sync {
    fn load(&self, store: &mut TrieStore) -> Result<()>;
}

impl<F> DictionaryLoader for F
where
    F: Fn(&mut TrieStore) -> Result<()> + Send + Sync,
{
    fn load(&self, store: &mut TrieStore) -> Result<()> {
        self(store)
    }
}

/// Counts from one word-list pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub words: usize,
    pub bigrams: usize,
    pub skipped: usize,
}

/// Plain-text word list.
///
/// One record per line, whitespace separated:
///
/// ```text
/// # comment
/// hello   120
/// hello world 7
/// ```
///
/// Two fields are a word and its frequency, three fields are a bigram with
/// an accumulated frequency. Malformed lines and words longer than
/// [`MAX_WORD_LENGTH`] are skipped.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    path: PathBuf,
}

impl WordListLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into `store`
    pub fn load_into(&self, store: &mut TrieStore) -> Result<LoadReport> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open word list {}", self.path.display()))?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(LoadReport::default());
        }
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map word list {}", self.path.display()))?;
        Ok(load_bytes(&mmap, store))
    }
}

impl DictionaryLoader for WordListLoader {
    fn load(&self, store: &mut TrieStore) -> Result<()> {
        let report = self.load_into(store)?;
        info!(
            path = %self.path.display(),
            words = report.words,
            bigrams = report.bigrams,
            skipped = report.skipped,
            "word list loaded"
        );
        Ok(())
    }
}

/// Parse newline separated records from `data` into `store`
pub fn load_bytes(data: &[u8], store: &mut TrieStore) -> LoadReport {
    let mut report = LoadReport::default();
    let mut start = 0;
    let ends = memchr_iter(b'\n', data).chain(std::iter::once(data.len()));

    for (line_no, end) in ends.enumerate() {
        if start > end {
            break;
        }
        let line = &data[start..end];
        start = end + 1;

        match parse_line(line) {
            Ok(Some(Record::Word(word, freq))) => {
                if store.insert_word(word, freq).is_ok() {
                    report.words += 1;
                } else {
                    report.skipped += 1;
                }
            }
            Ok(Some(Record::Bigram(first, second, freq))) => {
                if store.add_bigram(first, second, freq).is_some() {
                    report.bigrams += 1;
                } else {
                    report.skipped += 1;
                }
            }
            Ok(None) => {}
            Err(reason) => {
                debug!(line = line_no + 1, reason, "skipping word list line");
                report.skipped += 1;
            }
        }
    }

    report
}

enum Record<'a> {
    Word(&'a str, u32),
    Bigram(&'a str, &'a str, u32),
}

fn parse_line(line: &[u8]) -> std::result::Result<Option<Record<'_>>, &'static str> {
    let line = std::str::from_utf8(line).map_err(|_| "invalid utf-8")?;
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let (words, freq) = fields.split_at(fields.len() - 1);
    let freq: u32 = freq[0].parse().map_err(|_| "bad frequency")?;

    if words.iter().any(|w| w.chars().count() > MAX_WORD_LENGTH) {
        return Err("word too long");
    }

    match words {
        [word] => Ok(Some(Record::Word(word, freq))),
        [first, second] => Ok(Some(Record::Bigram(first, second, freq))),
        _ => Err("expected 2 or 3 fields"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_words_and_bigrams() {
        let mut store = TrieStore::new();
        let report = load_bytes(
            b"# sample\nhello 120\nworld\t80\n\nhello world 7\nhello world 3\n",
            &mut store,
        );

        assert_eq!(report.words, 2);
        assert_eq!(report.bigrams, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(store.word_frequency("hello"), Some(120));
        assert_eq!(store.bigram_frequency("hello", "world"), Some(10));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let mut store = TrieStore::new();
        let long = "x".repeat(MAX_WORD_LENGTH + 1);
        let data = format!("ok 1\nnofreq\nbad freq\na b c 4\n{} 5\n", long);
        let report = load_bytes(data.as_bytes(), &mut store);

        assert_eq!(report.words, 1);
        assert_eq!(report.skipped, 4);
        assert!(store.contains("ok"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut store = TrieStore::new();
        let report = load_bytes(b"first 1\nlast 2", &mut store);
        assert_eq!(report.words, 2);
        assert_eq!(store.word_frequency("last"), Some(2));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "café 40").unwrap();
        writeln!(file, "cafe 10").unwrap();
        file.flush().unwrap();

        let loader = WordListLoader::new(file.path());
        let mut store = TrieStore::new();
        loader.load(&mut store).unwrap();

        assert_eq!(store.word_frequency("café"), Some(40));
        assert_eq!(store.word_frequency("cafe"), Some(10));
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let mut store = TrieStore::new();
        let report = WordListLoader::new(file.path())
            .load_into(&mut store)
            .unwrap();
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut store = TrieStore::new();
        let loader = WordListLoader::new("/nonexistent/keytrie/words.txt");
        assert!(loader.load(&mut store).is_err());
    }

    #[test]
    fn test_closure_loader() {
        let loader = |store: &mut TrieStore| -> Result<()> {
            store.insert_word("closure", 9)?;
            Ok(())
        };
        let mut store = TrieStore::new();
        DictionaryLoader::load(&loader, &mut store).unwrap();
        assert!(store.contains("closure"));
    }
}
