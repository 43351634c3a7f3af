//! Word lists for the mystery-word draw
//!
//! Provides the embedded default dictionary compiled into the binary and the
//! file-backed loader.

mod embedded;
mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{Dictionary, DictionaryError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // The embedded list ships only directly usable words
        for &word in WORDS {
            assert!(!word.is_empty(), "empty entry in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
