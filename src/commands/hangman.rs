//! Hangman console mode
//!
//! Plays rounds until the player declines another one or input runs out.

use super::{FAREWELL, read_line, wants_another_round};
use crate::game::{GameConfig, HangmanRound, RoundStatus, normalize};
use crate::output::formatters::guesses_remaining;
use crate::wordlists::choose_secret;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// Run Hangman rounds over the given input and output
///
/// `config.max_guesses` is the number of wrong letters allowed per round.
///
/// # Errors
///
/// Returns an error if the word list is empty or reading input / writing
/// output fails.
pub fn run_hangman<S, R, I, O>(
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
    loop {
        let secret = choose_secret(words, rng).context("word list is empty")?;
        let mut round = HangmanRound::new(secret, config.max_guesses);

        if !play_round(&mut round, input, output)? {
            break;
        }

        match round.status() {
            RoundStatus::Won => {
                writeln!(output, "{}", round.revealed())?;
                writeln!(output, "{}", "Congrats. You got it!".green().bold())?;
            }
            _ => {
                writeln!(
                    output,
                    "The word was \"{}.\" Better luck next time!",
                    round.secret()
                )?;
            }
        }
        info!(status = ?round.status(), guesses_left = round.guesses_left(), "hangman round finished");

        if !wants_another_round(input, output)? {
            break;
        }
    }

    writeln!(output, "{FAREWELL}")?;
    Ok(())
}

/// Drive one round to completion; `false` if input ran out first
fn play_round<I: BufRead, O: Write>(
    round: &mut HangmanRound,
    input: &mut I,
    output: &mut O,
) -> Result<bool> {
    while !round.status().is_over() {
        writeln!(
            output,
            "{}  {}",
            round.revealed(),
            guesses_remaining(round.guesses_left())
        )?;
        output.flush()?;

        loop {
            let Some(line) = read_line(input).context("failed to read guess")? else {
                return Ok(false);
            };

            match round.guess(&normalize(&line)) {
                Ok(_) => break,
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }

    Ok(true)
}
