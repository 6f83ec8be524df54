//! Word representation
//!
//! A Word stores its text along with the positions of every character, so
//! letter queries are map lookups instead of scans.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// A word with per-letter position tracking
///
/// Construction accepts any string. Characters are matched literally, so
/// callers must normalize case before building a Word: `"A"` and `"a"` share
/// no letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    length: usize,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Positions are character indices, not byte offsets.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Word;
    ///
    /// let word = Word::new("apple");
    /// assert_eq!(word.len(), 5);
    /// assert_eq!(word.indices_of('p'), &[1, 2]);
    /// assert!(word.indices_of('z').is_empty());
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut length = 0;
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
            length += 1;
        }

        Self {
            text,
            length,
            char_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Distinct characters of the word
    #[must_use]
    pub fn letters(&self) -> BTreeSet<char> {
        self.char_positions.keys().copied().collect()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears, in ascending order
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn indices_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Letters present in both this word and `other`
    #[must_use]
    pub fn shared_letters_with(&self, other: &Self) -> BTreeSet<char> {
        self.char_positions
            .keys()
            .filter(|letter| other.contains(**letter))
            .copied()
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_keeps_text() {
        let word = Word::new("crane");
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_is_total() {
        let empty = Word::new("");
        assert!(empty.is_empty());
        assert!(empty.letters().is_empty());

        // Non-letters and mixed case are kept literally
        let odd = Word::new("A1 a");
        assert_eq!(odd.len(), 4);
        assert_eq!(odd.indices_of('A'), &[0]);
        assert_eq!(odd.indices_of('a'), &[3]);
        assert_eq!(odd.indices_of(' '), &[2]);
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("café");
        assert_eq!(word.len(), 4);
        assert_eq!(word.indices_of('é'), &[3]);
    }

    #[test]
    fn word_contains() {
        let word = Word::new("crane");
        assert!(word.contains('c'));
        assert!(word.contains('e'));
        assert!(!word.contains('z'));
        assert!(!word.contains('C'));
    }

    #[test]
    fn word_indices_of_duplicates() {
        let word = Word::new("speed");
        assert_eq!(word.indices_of('e'), &[2, 3]);
        assert_eq!(word.indices_of('s'), &[0]);
        assert_eq!(word.indices_of('d'), &[4]);
    }

    #[test]
    fn word_indices_of_all_same() {
        let word = Word::new("aaaaa");
        assert_eq!(word.indices_of('a'), &[0, 1, 2, 3, 4]);
        assert_eq!(word.letters().len(), 1);
    }

    #[test]
    fn hangman_guess_fills_every_position() {
        let word = Word::new("apple");
        assert_eq!(word.indices_of('p'), &[1, 2]);
    }

    #[test]
    fn letters_are_distinct_characters() {
        let word = Word::new("banana");
        let letters: Vec<char> = word.letters().into_iter().collect();
        assert_eq!(letters, vec!['a', 'b', 'n']);
    }

    #[test]
    fn membership_queries_agree() {
        let word = Word::new("mississippi");
        for ch in ['m', 'i', 's', 'p', 'x', 'M'] {
            let in_letters = word.letters().contains(&ch);
            assert_eq!(in_letters, word.contains(ch));
            assert_eq!(in_letters, !word.indices_of(ch).is_empty());
        }
    }

    #[test]
    fn positions_partition_the_word() {
        for text in ["", "a", "hello", "mississippi", "aaabb"] {
            let word = Word::new(text);
            let mut all: Vec<usize> = word
                .letters()
                .into_iter()
                .flat_map(|ch| word.indices_of(ch).to_vec())
                .collect();
            all.sort_unstable();
            let expected: Vec<usize> = (0..word.len()).collect();
            assert_eq!(all, expected, "positions of '{text}' do not partition it");
        }
    }

    #[test]
    fn indices_are_ascending() {
        let word = Word::new("abracadabra");
        for ch in word.letters() {
            let indices = word.indices_of(ch);
            assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn shared_letters() {
        let hello = Word::new("hello");
        let world = Word::new("world");
        let shared: Vec<char> = hello.shared_letters_with(&world).into_iter().collect();
        assert_eq!(shared, vec!['l', 'o']);
        assert_eq!(hello.shared_letters_with(&world), world.shared_letters_with(&hello));
    }

    #[test]
    fn shared_letters_case_sensitive() {
        let upper = Word::new("A");
        let lower = Word::new("a");
        assert!(upper.shared_letters_with(&lower).is_empty());
    }

    #[test]
    fn shared_letters_none() {
        let abc = Word::new("abc");
        let xyz = Word::new("xyz");
        assert!(abc.shared_letters_with(&xyz).is_empty());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane");
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("crane"), Word::new("crane"));
        assert_ne!(Word::new("crane"), Word::new("CRANE"));
        assert_ne!(Word::new("crane"), Word::new("slate"));
    }
}
