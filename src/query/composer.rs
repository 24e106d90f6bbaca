//! Keystroke input as seen by the search engine
//!
//! Each typed position carries an ordered list of candidate character codes.
//! The first code is the key that was actually hit, the rest are alternates
//! (usually the neighbouring keys). A list may be padded with
//! [`NOT_A_CODE`], which ends it.

/// Sentinel terminating a code list
pub const NOT_A_CODE: i32 = -1;

/// Source of typed positions for a search
pub trait WordComposer {
    /// Number of typed positions
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate codes for position `index`, primary first
    fn codes_at(&self, index: usize) -> &[i32];

    /// The literal typed word
    fn typed_word(&self) -> &str;
}

/// Keyboard rows in Hunspell `KEY` notation, e.g. `qwertyuiop|asdfghjkl|zxcvbnm`.
/// Keys next to each other in a row are treated as adjacent.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    rows: Vec<Vec<char>>,
}

impl KeyboardLayout {
    pub fn parse(spec: &str) -> Self {
        let rows = spec
            .split('|')
            .map(|row| row.chars().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self { rows }
    }

    pub fn qwerty() -> Self {
        Self::parse("qwertyuiop|asdfghjkl|zxcvbnm")
    }

    /// Keys directly left and right of `key`
    pub fn neighbors(&self, key: char) -> Vec<char> {
        let mut out = Vec::new();
        for row in &self.rows {
            for (idx, _) in row.iter().enumerate().filter(|(_, k)| **k == key) {
                if idx > 0 {
                    out.push(row[idx - 1]);
                }
                if let Some(&next) = row.get(idx + 1) {
                    out.push(next);
                }
            }
        }
        out.dedup();
        out
    }
}

/// In-memory composer built from typed text
#[derive(Debug, Clone, Default)]
pub struct KeyComposer {
    codes: Vec<Vec<i32>>,
    typed: String,
}

impl KeyComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One position per typed character with no alternates.
    /// The primary code is the lowercased character.
    pub fn from_typed(typed: &str) -> Self {
        let mut composer = Self::new();
        for c in typed.chars() {
            composer.push(c, &[]);
        }
        composer
    }

    /// One position per typed character, with the neighbouring keys of
    /// `layout` as alternates
    pub fn with_layout(typed: &str, layout: &KeyboardLayout) -> Self {
        let mut composer = Self::new();
        for c in typed.chars() {
            let neighbors = layout.neighbors(lowercase(c));
            composer.push(c, &neighbors);
        }
        composer
    }

    /// Append a typed position
    pub fn push(&mut self, typed: char, alternates: &[char]) {
        let primary = lowercase(typed);
        let mut codes = Vec::with_capacity(alternates.len() + 1);
        codes.push(primary as i32);
        codes.extend(
            alternates
                .iter()
                .filter(|&&alt| alt != primary)
                .map(|&alt| alt as i32),
        );
        self.codes.push(codes);
        self.typed.push(typed);
    }

    /// Drop the last typed position
    pub fn delete_last(&mut self) {
        if self.codes.pop().is_some() {
            self.typed.pop();
        }
    }
}

impl WordComposer for KeyComposer {
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

fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_neighbors() {
        let layout = KeyboardLayout::qwerty();
        assert_eq!(layout.neighbors('q'), vec!['w']);
        assert_eq!(layout.neighbors('s'), vec!['a', 'd']);
        assert_eq!(layout.neighbors('m'), vec!['n']);
        assert!(layout.neighbors('1').is_empty());
    }

    #[test]
    fn test_from_typed() {
        let composer = KeyComposer::from_typed("Hi");
        assert_eq!(composer.len(), 2);
        assert_eq!(composer.codes_at(0), &['h' as i32]);
        assert_eq!(composer.codes_at(1), &['i' as i32]);
        assert_eq!(composer.typed_word(), "Hi");
    }

    #[test]
    fn test_with_layout_adds_alternates() {
        let composer = KeyComposer::with_layout("so", &KeyboardLayout::qwerty());
        assert_eq!(
            composer.codes_at(0),
            &['s' as i32, 'a' as i32, 'd' as i32]
        );
        assert_eq!(
            composer.codes_at(1),
            &['o' as i32, 'i' as i32, 'p' as i32]
        );
    }

    #[test]
    fn test_delete_last() {
        let mut composer = KeyComposer::from_typed("abc");
        composer.delete_last();
        assert_eq!(composer.len(), 2);
        assert_eq!(composer.typed_word(), "ab");

        let mut empty = KeyComposer::new();
        empty.delete_last();
        assert!(empty.is_empty());
    }
}
