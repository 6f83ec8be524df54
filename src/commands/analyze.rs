//! Guess analysis command
//!
//! Scores one guess against every word of the same length in the list, as if
//! each were the secret, and summarizes how informative the guess is.

use crate::core::{SecretWord, Word};
use crate::game::normalize;
use crate::wordlists::{WordListError, words_of_length};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: String,
    /// Same-length words the guess was scored against
    pub candidates: usize,
    /// Candidates the guess solves outright
    pub solved: usize,
    /// Candidates sharing no letter with the guess
    pub disjoint: usize,
    pub average_greens: f64,
    pub average_yellows: f64,
    /// (greens, yellows) -> number of candidates
    pub distribution: BTreeMap<(usize, usize), usize>,
}

/// Analyze a guess against a word list
///
/// # Errors
///
/// Returns `WordListError::NoWordsOfLength` if no word in the list has the
/// guess's length.
///
/// # Examples
/// ```
/// use wordmatch::commands::analyze_guess;
///
/// let result = analyze_guess("crane", &["crane", "slate", "kiwi"]).unwrap();
/// assert_eq!(result.candidates, 2);
/// assert_eq!(result.solved, 1);
/// ```
pub fn analyze_guess<S: AsRef<str>>(
    guess: &str,
    words: &[S],
) -> Result<AnalysisResult, WordListError> {
    let guess_word = Word::new(normalize(guess));
    let candidates = words_of_length(words, guess_word.len());
    if candidates.is_empty() {
        return Err(WordListError::NoWordsOfLength(guess_word.len()));
    }

    let pb = ProgressBar::new(candidates.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    // (greens, yellows, solved, disjoint) per candidate secret
    let scores: Vec<(usize, usize, bool, bool)> = candidates
        .par_iter()
        .map(|&text| {
            let secret = SecretWord::new(text);
            let greens = secret.greens(&guess_word);
            let yellows = secret.yellows(&guess_word);
            let disjoint = secret.word().shared_letters_with(&guess_word).is_empty();
            pb.inc(1);
            (
                greens.len(),
                yellows.len(),
                secret.is_solved_by(&guess_word),
                disjoint,
            )
        })
        .collect();
    pb.finish_and_clear();

    let mut distribution = BTreeMap::new();
    let (mut total_greens, mut total_yellows, mut solved, mut disjoint) = (0, 0, 0, 0);
    for &(greens, yellows, is_solved, is_disjoint) in &scores {
        *distribution.entry((greens, yellows)).or_insert(0) += 1;
        total_greens += greens;
        total_yellows += yellows;
        solved += usize::from(is_solved);
        disjoint += usize::from(is_disjoint);
    }

    let count = scores.len();
    debug!(guess = %guess_word, candidates = count, "analysis complete");

    Ok(AnalysisResult {
        guess: guess_word.text().to_string(),
        candidates: count,
        solved,
        disjoint,
        average_greens: total_greens as f64 / count as f64,
        average_yellows: total_yellows as f64 / count as f64,
        distribution,
    })
}
