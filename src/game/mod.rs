//! Round drivers for Hangman and Wordle
//!
//! Pure state machines: they hold no I/O and draw no random numbers. The
//! console loops in [`crate::commands`] feed them validated input.

mod config;
mod hangman;
mod validation;
mod wordle;

pub use config::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig};
pub use hangman::{HIDDEN, HangmanOutcome, HangmanRound};
pub use validation::{GuessError, normalize, validate_guess};
pub use wordle::WordleRound;

/// Progress of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
