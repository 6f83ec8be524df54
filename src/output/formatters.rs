//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;
use std::collections::BTreeSet;

/// Render a guess with one colored tile per letter
///
/// Letters beyond the feedback length are left unstyled.
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let tile = format!(" {} ", ch.to_uppercase());
            match feedback.marks().get(i) {
                Some(Mark::Green) => tile.black().on_green().bold().to_string(),
                Some(Mark::Yellow) => tile.black().on_yellow().bold().to_string(),
                Some(Mark::Gray) => tile.white().on_bright_black().to_string(),
                None => tile,
            }
        })
        .collect()
}

/// "(N guesses remaining.)", singular for one
#[must_use]
pub fn guesses_remaining(count: u32) -> String {
    let noun = if count == 1 { "guess" } else { "guesses" };
    format!("({count} {noun} remaining.)")
}

/// Format a position set like "{0, 1}"
#[must_use]
pub fn format_indices(indices: &BTreeSet<usize>) -> String {
    let inner: Vec<String> = indices.iter().map(ToString::to_string).collect();
    format!("{{{}}}", inner.join(", "))
}

/// Format a letter set like "{l, o}"
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    let inner: Vec<String> = letters.iter().map(ToString::to_string).collect();
    format!("{{{}}}", inner.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_singular_and_plural() {
        assert_eq!(guesses_remaining(6), "(6 guesses remaining.)");
        assert_eq!(guesses_remaining(1), "(1 guess remaining.)");
        assert_eq!(guesses_remaining(0), "(0 guesses remaining.)");
    }

    #[test]
    fn index_sets() {
        assert_eq!(format_indices(&BTreeSet::new()), "{}");
        assert_eq!(format_indices(&BTreeSet::from([0, 1])), "{0, 1}");
    }

    #[test]
    fn letter_sets() {
        assert_eq!(format_letters(&BTreeSet::from(['o', 'l'])), "{l, o}");
    }

    #[test]
    fn colorized_guess_keeps_letters() {
        let guess = Word::new("world");
        let feedback = crate::core::SecretWord::new("hello").feedback(&guess);

        colored::control::set_override(false);
        let rendered = colorize_guess(&guess, &feedback);
        colored::control::unset_override();

        assert_eq!(rendered, " W  O  R  L  D ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
