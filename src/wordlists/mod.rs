//! Word lists for secret selection
//!
//! Provides an embedded default list compiled into the binary, plus loading
//! from a plain text file with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordListError, choose_secret, load_from_file, words_from_slice, words_of_length};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_cover_wordle_length() {
        assert!(WORDS.iter().any(|w| w.len() == 5));
    }
}
