//! Wordle console mode
//!
//! Secrets are drawn from the words of the configured length. Each guess is
//! echoed back as a row of colored tiles.

use super::{FAREWELL, read_line, wants_another_round};
use crate::game::{GameConfig, RoundStatus, WordleRound, normalize};
use crate::output::formatters::{colorize_guess, guesses_remaining};
use crate::wordlists::{WordListError, choose_secret, words_of_length};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Run Wordle rounds over the given input and output
///
/// # Errors
///
/// Returns an error if the word list has no words of `config.word_length`
/// or reading input / writing output fails.
pub fn run_wordle<S, R, I, O>(
    words: &[S],
    config: GameConfig,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let same_length = words_of_length(words, config.word_length);
    let total = same_length.len();

    // Guesses must be ASCII letters, so any other secret could never be solved
    let candidates: Vec<&str> = same_length
        .into_iter()
        .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect();
    if candidates.len() < total {
        warn!(skipped = total - candidates.len(), "skipping unguessable wordle secrets");
    }
    if candidates.is_empty() {
        return Err(WordListError::NoWordsOfLength(config.word_length).into());
    }
    info!(candidates = candidates.len(), length = config.word_length, "wordle session started");

    loop {
        let secret = choose_secret(&candidates, rng).context("word list is empty")?;
        let mut round = WordleRound::new(secret, config);

        writeln!(
            output,
            "Guess the {}-letter word. {}",
            round.secret().len(),
            guesses_remaining(round.guesses_left())
        )?;

        if !play_round(&mut round, input, output)? {
            break;
        }

        match round.status() {
            RoundStatus::Won => {
                let turns = round.history().len();
                let noun = if turns == 1 { "guess" } else { "guesses" };
                writeln!(
                    output,
                    "{}",
                    format!("Solved in {turns} {noun}!").green().bold()
                )?;
                for (_, feedback) in round.history() {
                    writeln!(output, "{}", feedback.to_emoji())?;
                }
            }
            _ => {
                writeln!(
                    output,
                    "The word was \"{}.\" Better luck next time!",
                    round.secret()
                )?;
            }
        }
        info!(status = ?round.status(), guesses = round.history().len(), "wordle round finished");

        if !wants_another_round(input, output)? {
            break;
        }
    }

    writeln!(output, "{FAREWELL}")?;
    Ok(())
}

/// Drive one round to completion; `false` if input ran out first
fn play_round<I: BufRead, O: Write>(
    round: &mut WordleRound,
    input: &mut I,
    output: &mut O,
) -> Result<bool> {
    while !round.status().is_over() {
        output.flush()?;

        let Some(line) = read_line(input).context("failed to read guess")? else {
            return Ok(false);
        };

        match round.guess(&normalize(&line)) {
            Ok(feedback) => {
                if let Some((guess, _)) = round.history().last() {
                    writeln!(
                        output,
                        "{}  {}",
                        colorize_guess(guess, &feedback),
                        guesses_remaining(round.guesses_left())
                    )?;
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    Ok(true)
}
