//! Round configuration

/// Guesses allowed per round unless overridden
pub const DEFAULT_MAX_GUESSES: u32 = 6;

/// Wordle word length unless overridden
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Limits for a round, passed explicitly to the drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed in Hangman, total guesses in Wordle
    pub max_guesses: u32,
    /// Length of Wordle secrets and guesses
    pub word_length: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: u32, word_length: usize) -> Self {
        Self {
            max_guesses,
            word_length,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH)
    }
}
