//! wordmatch - CLI
//!
//! Hangman and Wordle in the terminal, plus tools to inspect how a guess is
//! scored.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordmatch::{
    commands::{analyze_guess, run_hangman, run_wordle, score_guess},
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig},
    logging,
    output::{print_analysis_result, print_score_result},
    wordlists::{WORDS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordmatch",
    about = "Hangman and Wordle built on a letter-position matching engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Hangman (default)
    Hangman {
        /// Wrong guesses allowed per round
        #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: u32,
    },

    /// Play Wordle
    Wordle {
        /// Guesses allowed per round
        #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: u32,

        /// Length of the secret word
        #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,
    },

    /// Score a guess against a secret and show the green and yellow positions
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Score a guess against every same-length word in the list
    Analyze {
        /// Word to analyze
        guess: String,
    },
}

/// Load the word list from the -w flag, or fall back to the embedded one
fn load_words(wordlist: Option<&str>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => load_from_file(path).with_context(|| format!("cannot use word list {path}")),
        None => Ok(words_from_slice(WORDS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let command = cli.command.unwrap_or(Commands::Hangman {
        max_guesses: DEFAULT_MAX_GUESSES,
    });

    match command {
        Commands::Hangman { max_guesses } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let config = GameConfig::new(max_guesses, DEFAULT_WORD_LENGTH);
            run_hangman(
                &words,
                config,
                &mut rand::rng(),
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
        }
        Commands::Wordle {
            max_guesses,
            length,
        } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let config = GameConfig::new(max_guesses, length);
            run_wordle(
                &words,
                config,
                &mut rand::rng(),
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
        }
        Commands::Score { secret, guess } => {
            print_score_result(&score_guess(&secret, &guess));
            Ok(())
        }
        Commands::Analyze { guess } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let result = analyze_guess(&guess, &words)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
