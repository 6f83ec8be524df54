//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar, format_indices, format_letters};
use crate::commands::{AnalysisResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colorize_guess(&result.guess, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());

    println!("   Shared letters:  {}", format_letters(&result.shared));
    println!("   Greens:          {}", format_indices(&result.greens).green());
    println!("   Yellows:         {}", format_indices(&result.yellows).yellow());
}

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.candidates);
    println!(
        "   Avg greens:   {}",
        format!("{:.2}", result.average_greens).green()
    );
    println!(
        "   Avg yellows:  {}",
        format!("{:.2}", result.average_yellows).yellow()
    );
    println!("   Solved:       {}", result.solved);
    println!("   No overlap:   {}", result.disjoint);

    println!("\n📈 {}", "Distribution (greens, yellows):".bright_cyan().bold());
    for (&(greens, yellows), &count) in &result.distribution {
        let pct = (count as f64 / result.candidates as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   ({greens}, {yellows}): {} {count:4} ({pct:5.1}%)",
            bar.green()
        );
    }
}
