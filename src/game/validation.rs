//! Guess validation
//!
//! Three independent checks, reported in a fixed order: length first, then
//! alphabetic, then repeated guess. Only the first failure is returned.

use thiserror::Error;

/// Reasons a guess is rejected before scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Your guess must be exactly {expected} {}, not {actual}!", characters(.expected))]
    WrongLength { expected: usize, actual: usize },

    #[error("You can only guess letters!")]
    NotAlphabetic,

    #[error("You already guessed \"{0}\"!")]
    AlreadyGuessed(String),

    #[error("The round is already over!")]
    RoundOver,
}

fn characters(count: &usize) -> &'static str {
    if *count == 1 { "character" } else { "characters" }
}

/// Trim surrounding whitespace and lowercase raw input
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validate a normalized guess
///
/// `already_guessed` is asked only once the first two checks pass.
///
/// # Errors
///
/// Returns the first failing check as a `GuessError`.
///
/// # Examples
/// ```
/// use wordmatch::game::{GuessError, validate_guess};
///
/// assert_eq!(validate_guess("a", 1, |_| false), Ok(()));
/// assert_eq!(
///     validate_guess("ab", 1, |_| true),
///     Err(GuessError::WrongLength { expected: 1, actual: 2 })
/// );
/// ```
pub fn validate_guess<F>(guess: &str, expected_len: usize, already_guessed: F) -> Result<(), GuessError>
where
    F: FnOnce(&str) -> bool,
{
    let actual = guess.chars().count();
    if actual != expected_len {
        return Err(GuessError::WrongLength {
            expected: expected_len,
            actual,
        });
    }

    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::NotAlphabetic);
    }

    if already_guessed(guess) {
        return Err(GuessError::AlreadyGuessed(guess.to_string()));
    }

    Ok(())
}
