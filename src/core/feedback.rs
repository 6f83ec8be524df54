//! Per-position guess feedback
//!
//! Merges the green and yellow position sets into one mark per guess
//! position. A position present in both sets is shown green.

use std::collections::BTreeSet;
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the secret (or no supply left)
    Gray,
    /// Letter in the secret at another position
    Yellow,
    /// Letter at the correct position
    Green,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

/// Colored feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// Build feedback for a guess of `len` characters
    ///
    /// Indices outside `0..len` are ignored.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use wordmatch::core::{Feedback, Mark};
    ///
    /// let greens = BTreeSet::from([3]);
    /// let yellows = BTreeSet::from([1]);
    /// let feedback = Feedback::from_sets(5, &greens, &yellows);
    /// assert_eq!(feedback.marks()[1], Mark::Yellow);
    /// assert_eq!(feedback.to_emoji(), "⬜🟨⬜🟩⬜");
    /// ```
    #[must_use]
    pub fn from_sets(len: usize, greens: &BTreeSet<usize>, yellows: &BTreeSet<usize>) -> Self {
        let marks = (0..len)
            .map(|i| {
                if greens.contains(&i) {
                    Mark::Green
                } else if yellows.contains(&i) {
                    Mark::Yellow
                } else {
                    Mark::Gray
                }
            })
            .collect();

        Self { marks }
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Green).count()
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Check if every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Green)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_gray() {
        let feedback = Feedback::from_sets(5, &BTreeSet::new(), &BTreeSet::new());
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜");
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn all_green_is_solved() {
        let greens: BTreeSet<usize> = (0..5).collect();
        let feedback = Feedback::from_sets(5, &greens, &BTreeSet::new());
        assert!(feedback.is_solved());
        assert_eq!(feedback.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn green_overrides_yellow() {
        let both = BTreeSet::from([2]);
        let feedback = Feedback::from_sets(3, &both, &both);
        assert_eq!(feedback.marks(), &[Mark::Gray, Mark::Gray, Mark::Green]);
        assert_eq!(feedback.count_yellows(), 0);
    }

    #[test]
    fn out_of_range_indices_ignored() {
        let feedback = Feedback::from_sets(2, &BTreeSet::from([7]), &BTreeSet::from([1, 9]));
        assert_eq!(feedback.marks(), &[Mark::Gray, Mark::Yellow]);
    }

    #[test]
    fn empty_guess_never_solved() {
        let feedback = Feedback::from_sets(0, &BTreeSet::new(), &BTreeSet::new());
        assert!(!feedback.is_solved());
        assert_eq!(feedback.to_emoji(), "");
    }
}
