//! Wordle round
//!
//! Each guess is a full word of the secret's length, scored into green and
//! yellow positions. The round is won by an all-green guess.

use super::{GameConfig, GuessError, RoundStatus, validate_guess};
use crate::core::{Feedback, SecretWord, Word};
use rustc_hash::FxHashSet;
use tracing::debug;

/// One round of Wordle against a secret word
#[derive(Debug, Clone)]
pub struct WordleRound {
    secret: SecretWord,
    max_guesses: u32,
    history: Vec<(Word, Feedback)>,
    guessed: FxHashSet<String>,
}

impl WordleRound {
    /// Start a round
    ///
    /// The secret is lowercased to match normalized guesses. Guesses must
    /// match the secret's length; `config.word_length` only governs which
    /// secrets the caller draws.
    pub fn new(secret: impl Into<String>, config: GameConfig) -> Self {
        let secret = SecretWord::new(secret.into().to_lowercase());
        debug!(length = secret.len(), max_guesses = config.max_guesses, "wordle round started");

        Self {
            secret,
            max_guesses: config.max_guesses,
            history: Vec::new(),
            guessed: FxHashSet::default(),
        }
    }

    /// Score a guess
    ///
    /// `input` must already be normalized (see [`super::normalize`]).
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the round is over or the guess fails
    /// validation. Rejected guesses cost nothing.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Mark;
    /// use wordmatch::game::{GameConfig, WordleRound};
    ///
    /// let mut round = WordleRound::new("hello", GameConfig::default());
    /// let feedback = round.guess("world").unwrap();
    /// assert_eq!(feedback.marks()[3], Mark::Green);
    /// assert_eq!(feedback.marks()[1], Mark::Yellow);
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<Feedback, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::RoundOver);
        }

        validate_guess(input, self.secret.len(), |g| self.guessed.contains(g))?;

        let guess = Word::new(input);
        let feedback = self.secret.feedback(&guess);
        debug!(guess = %guess, feedback = %feedback, "wordle guess scored");

        self.guessed.insert(input.to_string());
        self.history.push((guess, feedback.clone()));
        Ok(feedback)
    }

    /// Guesses made so far with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.max_guesses
            .saturating_sub(u32::try_from(self.history.len()).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        let solved = self
            .history
            .last()
            .is_some_and(|(guess, _)| self.secret.is_solved_by(guess));

        if solved {
            RoundStatus::Won
        } else if self.guesses_left() == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }
}
