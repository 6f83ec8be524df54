//! Hangman round
//!
//! The player guesses one letter at a time. A hit reveals every position of
//! the letter at once; a miss costs one guess.

use super::{GuessError, RoundStatus, validate_guess};
use crate::core::Word;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Placeholder shown for letters not yet guessed
pub const HIDDEN: char = '_';

/// Result of a valid Hangman guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanOutcome {
    /// Positions revealed by the letter
    Hit(Vec<usize>),
    Miss,
}

/// One round of Hangman against a secret word
#[derive(Debug, Clone)]
pub struct HangmanRound {
    secret: Word,
    revealed: Vec<char>,
    guessed: FxHashSet<char>,
    guesses_left: u32,
}

impl HangmanRound {
    /// Start a round
    ///
    /// The secret is lowercased to match normalized guesses. Characters that
    /// can never be guessed (spaces, hyphens, digits) are shown from the start.
    pub fn new(secret: impl Into<String>, max_wrong_guesses: u32) -> Self {
        let secret = Word::new(secret.into().to_lowercase());
        let revealed = secret
            .text()
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { HIDDEN } else { c })
            .collect();

        debug!(length = secret.len(), max_wrong_guesses, "hangman round started");

        Self {
            secret,
            revealed,
            guessed: FxHashSet::default(),
            guesses_left: max_wrong_guesses,
        }
    }

    /// Guess a single letter
    ///
    /// `input` must already be normalized (see [`super::normalize`]).
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the round is over or the input fails
    /// validation. Rejected guesses cost nothing.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::game::{HangmanOutcome, HangmanRound};
    ///
    /// let mut round = HangmanRound::new("apple", 6);
    /// assert_eq!(round.guess("p"), Ok(HangmanOutcome::Hit(vec![1, 2])));
    /// assert_eq!(round.revealed(), "_pp__");
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<HangmanOutcome, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::RoundOver);
        }

        validate_guess(input, 1, |g| {
            g.chars().next().is_some_and(|c| self.guessed.contains(&c))
        })?;

        let Some(letter) = input.chars().next() else {
            return Err(GuessError::WrongLength {
                expected: 1,
                actual: 0,
            });
        };
        self.guessed.insert(letter);

        let positions = self.secret.indices_of(letter);
        if positions.is_empty() {
            self.guesses_left -= 1;
            debug!(%letter, guesses_left = self.guesses_left, "hangman miss");
            return Ok(HangmanOutcome::Miss);
        }

        for &i in positions {
            self.revealed[i] = letter;
        }
        debug!(%letter, hits = positions.len(), "hangman hit");
        Ok(HangmanOutcome::Hit(positions.to_vec()))
    }

    /// The secret with unguessed letters hidden
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Letters guessed so far, hits and misses, in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.text()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.revealed.iter().copied().eq(self.secret.text().chars()) {
            RoundStatus::Won
        } else if self.guesses_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_reveals_all_positions() {
        let mut round = HangmanRound::new("apple", 6);
        assert_eq!(round.guess("p"), Ok(HangmanOutcome::Hit(vec![1, 2])));
        assert_eq!(round.revealed(), "_pp__");
        assert_eq!(round.guesses_left(), 6);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn miss_costs_a_guess() {
        let mut round = HangmanRound::new("apple", 6);
        assert_eq!(round.guess("z"), Ok(HangmanOutcome::Miss));
        assert_eq!(round.guesses_left(), 5);
        assert_eq!(round.revealed(), "_____");
    }

    #[test]
    fn invalid_guesses_cost_nothing() {
        let mut round = HangmanRound::new("apple", 6);
        round.guess("z").unwrap();

        assert!(matches!(round.guess("ab"), Err(GuessError::WrongLength { .. })));
        assert_eq!(round.guess("1"), Err(GuessError::NotAlphabetic));
        assert_eq!(round.guess("z"), Err(GuessError::AlreadyGuessed("z".to_string())));
        assert_eq!(round.guesses_left(), 5);
    }

    #[test]
    fn repeated_hit_rejected() {
        let mut round = HangmanRound::new("apple", 6);
        round.guess("a").unwrap();
        assert_eq!(round.guess("a"), Err(GuessError::AlreadyGuessed("a".to_string())));
    }

    #[test]
    fn win_when_every_letter_revealed() {
        let mut round = HangmanRound::new("apple", 6);
        for letter in ["a", "p", "x", "l", "e"] {
            round.guess(letter).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.revealed(), "apple");
        assert_eq!(round.guess("q"), Err(GuessError::RoundOver));
    }

    #[test]
    fn lose_when_guesses_run_out() {
        let mut round = HangmanRound::new("kiwi", 2);
        round.guess("x").unwrap();
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.guess("y").unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.guess("k"), Err(GuessError::RoundOver));
    }

    #[test]
    fn non_letters_shown_upfront() {
        let mut round = HangmanRound::new("ice-cream", 6);
        assert_eq!(round.revealed(), "___-_____");
        for letter in ["i", "c", "e", "r", "a", "m"] {
            round.guess(letter).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn mixed_case_secret_winnable() {
        let mut round = HangmanRound::new("Apple", 6);
        for letter in ["a", "p", "l", "e"] {
            round.guess(letter).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.secret(), "apple");
    }

    #[test]
    fn guessed_letters_sorted() {
        let mut round = HangmanRound::new("apple", 6);
        for letter in ["p", "z", "a"] {
            round.guess(letter).unwrap();
        }
        assert_eq!(round.guessed_letters(), vec!['a', 'p', 'z']);
    }
}
