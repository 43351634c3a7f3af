//! Dictionary loading and word selection
//!
//! A `Dictionary` holds raw candidate tokens exactly as loaded; validity is
//! only checked when a mystery word is drawn, so a list may carry unusable
//! entries (abbreviations, contractions) without failing at startup.

use crate::core::MysteryWord;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for an unusable dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary has no entries at all
    Empty,
    /// No entry parses as a mystery word (e.g. every word has an apostrophe)
    NoValidWord,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary is empty"),
            Self::NoValidWord => {
                write!(f, "Dictionary contains no usable word (letters a-z only)")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// An ordered, immutable list of candidate words
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    /// Load a dictionary from a file of whitespace-separated tokens
    ///
    /// No validation happens here; unusable tokens are skipped at draw time.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("words.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        let entries = content
            .split_whitespace()
            .map(ToString::to_string)
            .collect();

        Ok(Self { entries })
    }

    /// Build a dictionary from string slices
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            entries: words.iter().map(ToString::to_string).collect(),
        }
    }

    /// The default dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(super::WORDS)
    }

    /// Number of entries, including unusable ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw a mystery word uniformly at random
    ///
    /// Only entries that parse as a [`MysteryWord`] take part in the draw,
    /// so a dictionary of nothing but contractions fails cleanly instead of
    /// re-drawing forever.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if there are no entries and
    /// `DictionaryError::NoValidWord` if none of them is usable.
    pub fn pick(&self) -> Result<MysteryWord, DictionaryError> {
        self.pick_with(&mut rand::rng())
    }

    /// Draw with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Same conditions as [`Dictionary::pick`].
    pub fn pick_with<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<MysteryWord, DictionaryError> {
        if self.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let valid: Vec<MysteryWord> = self
            .entries
            .iter()
            .filter_map(|entry| MysteryWord::new(entry.as_str()).ok())
            .collect();

        valid
            .choose(rng)
            .cloned()
            .ok_or(DictionaryError::NoValidWord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_keeps_all_entries() {
        let dictionary = Dictionary::from_slice(&["cat", "don't", "dog"]);

        // Unusable entries stay in the list; they only drop out at draw time
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn pick_returns_valid_word() {
        let dictionary = Dictionary::from_slice(&["cat", "dog", "bird"]);

        for _ in 0..20 {
            let word = dictionary.pick().unwrap();
            assert!(word.text().bytes().all(|b| b.is_ascii_lowercase()));
            assert!(["cat", "dog", "bird"].contains(&word.text()));
        }
    }

    #[test]
    fn pick_skips_unusable_entries() {
        let dictionary = Dictionary::from_slice(&["don't", "cat", "o'clock"]);

        for _ in 0..20 {
            let word = dictionary.pick().unwrap();
            assert_eq!(word.text(), "cat");
        }
    }

    #[test]
    fn pick_empty_dictionary_fails() {
        let dictionary = Dictionary::from_slice(&[]);
        assert_eq!(dictionary.pick(), Err(DictionaryError::Empty));
    }

    #[test]
    fn pick_all_unusable_fails() {
        let dictionary = Dictionary::from_slice(&["don't", "o'clock", "won't"]);
        assert_eq!(dictionary.pick(), Err(DictionaryError::NoValidWord));
    }

    #[test]
    fn pick_with_is_deterministic_per_rng() {
        use rand::SeedableRng;

        let dictionary = Dictionary::from_slice(&["cat", "dog", "bird"]);
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(7);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(7);

        assert_eq!(
            dictionary.pick_with(&mut rng1),
            dictionary.pick_with(&mut rng2)
        );
    }

    #[test]
    fn embedded_dictionary_usable() {
        let dictionary = Dictionary::embedded();
        assert!(!dictionary.is_empty());

        let word = dictionary.pick().unwrap();
        assert!(!word.text().is_empty());
    }
}
