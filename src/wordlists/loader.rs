//! Word list loading utilities
//!
//! Provides functions to load word lists from files, filter them and draw a
//! secret word at random.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while preparing a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },

    #[error("no words of length {0} in the word list")]
    NoWordsOfLength(usize),
}

/// Load words from a file
///
/// Each non-blank line is trimmed and lowercased. Lines are otherwise kept as
/// they are; guesses are validated by the round drivers, not here.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and
/// `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use wordmatch::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use wordmatch::wordlists::{WORDS, words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Words with exactly `length` characters
pub fn words_of_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<&str> {
    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| w.chars().count() == length)
        .collect()
}

/// Pick a secret uniformly at random
///
/// Returns `None` for an empty list.
pub fn choose_secret<'a, S, R>(words: &'a [S], rng: &mut R) -> Option<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let secret = words.choose(rng).map(|w| w.as_ref());
    debug!(candidates = words.len(), "drew secret word");
    secret
}
