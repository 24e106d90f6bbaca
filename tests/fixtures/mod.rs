use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_WORDS: &str = "\
# sample word list
hello 200
help 100
helicopter 20
world 200
would've 50
it's 90
café 60
the 150
then 40
there 30
and 120

and then 40
and there 5
the end 30
";

/// Word list in a fresh temp directory. Keep the `TempDir` alive while the
/// path is in use.
#[allow(dead_code)]
pub fn write_word_list(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("words.txt");
    fs::write(&path, contents).expect("write word list");
    (dir, path)
}

#[allow(dead_code)]
pub fn sample_word_list() -> (TempDir, PathBuf) {
    write_word_list(SAMPLE_WORDS)
}
