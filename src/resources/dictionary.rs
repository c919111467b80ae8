//! Word dictionary with case-insensitive membership
//!
//! Words load from a newline-separated file (trimmed, uppercased, blanks
//! skipped). When no file is available, [`Dictionary::fallback`] provides
//! the embedded list so the game stays playable.

use crate::resources::FALLBACK_WORDS;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A set of playable words, stored uppercase
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a newline-separated word file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use rackline::resources::Dictionary;
    ///
    /// let dict = Dictionary::load("data/dictionary.txt").unwrap();
    /// println!("Loaded {} words", dict.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// The embedded fallback list compiled in at build time
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS.iter().copied())
    }

    /// Build a dictionary from an iterator of words
    ///
    /// Entries are trimmed and uppercased; empty lines are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_uppercase())
                }
            })
            .collect();
        Self { words }
    }

    /// Literal membership test, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_trims_and_uppercases() {
        let dict = Dictionary::from_words(["  cat ", "Dog", "", "  "]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("CAT"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::from_words(["HELLO"]);
        assert!(dict.contains("hello"));
        assert!(dict.contains("Hello"));
        assert!(!dict.contains("HELL"));
    }

    #[test]
    fn fallback_is_playable() {
        let dict = Dictionary::fallback();
        assert!(!dict.is_empty());
        assert!(dict.contains("CAT"));
        assert!(dict.contains("HOUSE"));
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(Dictionary::load("data/no_such_file.txt").is_err());
    }
}
