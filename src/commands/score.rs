//! Score command
//!
//! Scores one guess against one secret and reports every intermediate set.

use crate::core::{Feedback, SecretWord, Word};
use crate::game::normalize;
use std::collections::BTreeSet;

/// Result of scoring a guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub secret: SecretWord,
    pub guess: Word,
    pub shared: BTreeSet<char>,
    pub greens: BTreeSet<usize>,
    pub yellows: BTreeSet<usize>,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Both words are normalized first, since matching is case-sensitive.
///
/// # Examples
/// ```
/// use wordmatch::commands::score_guess;
///
/// let result = score_guess("aaabb", "BBBCC");
/// assert!(result.greens.is_empty());
/// assert_eq!(result.yellows.into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[must_use]
pub fn score_guess(secret: &str, guess: &str) -> ScoreResult {
    let secret = SecretWord::new(normalize(secret));
    let guess = Word::new(normalize(guess));

    let shared = secret.word().shared_letters_with(&guess);
    let greens = secret.greens(&guess);
    let yellows = secret.yellows(&guess);
    let feedback = Feedback::from_sets(guess.len(), &greens, &yellows);

    ScoreResult {
        secret,
        guess,
        shared,
        greens,
        yellows,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        let result = score_guess("hello", "world");
        assert_eq!(result.shared, BTreeSet::from(['l', 'o']));
        assert_eq!(result.greens, BTreeSet::from([3]));
        assert_eq!(result.yellows, BTreeSet::from([1]));
        assert_eq!(result.feedback.to_emoji(), "⬜🟨⬜🟩⬜");
    }

    #[test]
    fn input_is_normalized() {
        let result = score_guess(" Crane ", "CRANE\n");
        assert!(result.feedback.is_solved());
        assert_eq!(result.guess.text(), "crane");
    }

    #[test]
    fn disjoint_words() {
        let result = score_guess("abc", "xyz");
        assert!(result.shared.is_empty());
        assert!(result.greens.is_empty());
        assert!(result.yellows.is_empty());
    }
}
