//! Command implementations

pub mod analyze;
pub mod hangman;
pub mod score;
pub mod wordle;

pub use analyze::{AnalysisResult, analyze_guess};
pub use hangman::run_hangman;
pub use score::{ScoreResult, score_guess};
pub use wordle::run_wordle;

use std::io::{self, BufRead, Write};

/// Closing line printed when a session ends
pub const FAREWELL: &str = "Thanks for playing. See you next time!";

/// Read one line of user input, trimmed
///
/// Returns `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask whether to start another round; only "yes" continues
fn wants_another_round<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<bool> {
    writeln!(output, "Want to play again? (Type \"yes\" if you do.):")?;
    output.flush()?;

    Ok(read_line(input)?.is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
}
