//! Secret word scoring
//!
//! Scores a guess against the secret of a round. Both position sets are
//! expressed in the guess's indexing.
//!
//! Greens and yellows are computed independently per letter from the raw
//! position lists. Yellows are never filtered against greens; merging the two
//! sets for display is the job of [`Feedback`].

use super::{Feedback, Word};
use std::collections::BTreeSet;
use std::fmt;

/// The target word of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(Word);

impl SecretWord {
    /// Create a secret word from a string
    pub fn new(text: impl Into<String>) -> Self {
        Self(Word::new(text))
    }

    /// The underlying word, for letter and position queries
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.text()
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Guess positions holding the same letter as the secret at that position
    #[must_use]
    pub fn greens(&self, guess: &Word) -> BTreeSet<usize> {
        greens(&self.0, guess)
    }

    /// Guess positions holding a secret letter at the wrong position
    #[must_use]
    pub fn yellows(&self, guess: &Word) -> BTreeSet<usize> {
        yellows(&self.0, guess)
    }

    /// Per-position marks for a guess, green taking precedence
    #[must_use]
    pub fn feedback(&self, guess: &Word) -> Feedback {
        Feedback::from_sets(guess.len(), &self.greens(guess), &self.yellows(guess))
    }

    /// Check whether `guess` spells the secret exactly
    #[must_use]
    pub fn is_solved_by(&self, guess: &Word) -> bool {
        guess.len() == self.len() && self.greens(guess).len() == self.len()
    }
}

impl From<Word> for SecretWord {
    fn from(word: Word) -> Self {
        Self(word)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Exact-position matches of `guess` against `secret`
///
/// # Examples
/// ```
/// use wordmatch::core::{Word, greens};
///
/// let greens = greens(&Word::new("hello"), &Word::new("world"));
/// assert_eq!(greens.into_iter().collect::<Vec<_>>(), vec![3]);
/// ```
#[must_use]
pub fn greens(secret: &Word, guess: &Word) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();

    for letter in secret.shared_letters_with(guess) {
        let in_secret = secret.indices_of(letter);
        result.extend(
            guess
                .indices_of(letter)
                .iter()
                .filter(|i| in_secret.binary_search(*i).is_ok()),
        );
    }

    result
}

/// Wrong-position matches of `guess` against `secret`
///
/// For each shared letter, only the guess positions not matching a secret
/// position are candidates, and at most as many of them are highlighted as
/// the secret has unmatched occurrences of that letter. The lowest indices
/// win.
///
/// # Examples
/// ```
/// use wordmatch::core::{Word, yellows};
///
/// // Only two of the three guessed 'b's fit in the secret
/// let yellows = yellows(&Word::new("aaabb"), &Word::new("bbbcc"));
/// assert_eq!(yellows.into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[must_use]
pub fn yellows(secret: &Word, guess: &Word) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();

    for letter in secret.shared_letters_with(guess) {
        let in_guess = guess.indices_of(letter);
        let in_secret = secret.indices_of(letter);

        let guess_only: Vec<usize> = in_guess
            .iter()
            .copied()
            .filter(|i| in_secret.binary_search(i).is_err())
            .collect();

        // |S \ G| = |S| - |G| + |G \ S|, no need to build the difference
        let guess_only_count = guess_only.len() as isize;
        let secret_only_count =
            in_secret.len() as isize - in_guess.len() as isize + guess_only_count;

        let budget = guess_only_count.min(secret_only_count).max(0) as usize;
        result.extend(guess_only.into_iter().take(budget));
    }

    result
}
