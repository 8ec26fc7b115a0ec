//! Display functions for game output

use colored::Colorize;

use super::formatters::{evaluation_to_emoji, evaluation_to_tiles};
use crate::core::Evaluation;
use crate::dictionary::WordEntry;
use crate::game::{Outcome, Round};

/// Print the feedback row for one guess
pub fn print_guess_feedback(turn: usize, evaluation: &Evaluation) {
    println!(
        "  {}. {}",
        turn.to_string().bright_black(),
        evaluation_to_tiles(evaluation)
    );
}

/// Print the end-of-round banner with the answer's dictionary data
///
/// Prints nothing while the round is still in progress.
pub fn print_round_banner(round: &Round) {
    let Some(outcome) = round.outcome() else {
        return;
    };

    let answer = round.answer();
    let guess_count = round.guesses().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match outcome {
        Outcome::Won => {
            let performance = match guess_count {
                1 => "🏆 Perfect!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                5 => "👍 Solved!",
                _ => "✓ Just in time!",
            };
            println!(
                "  {} Congratulations! Got it in {} {}.",
                performance.bright_yellow().bold(),
                guess_count.to_string().bright_cyan().bold(),
                if guess_count == 1 { "guess" } else { "guesses" }
            );
        }
        Outcome::Lost => {
            println!(
                "  Sorry, the correct answer is {}.",
                answer.word().text().bright_yellow().bold()
            );
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  {} ({}) means \"{}\" ({})",
        answer.word().text().bright_white().bold(),
        answer.original().bright_white(),
        answer.meaning(),
        answer.part()
    );
    if !answer.pronunciation().is_empty() {
        println!("  Pronounced: {}", answer.pronunciation().bright_black());
    }

    println!("\n  Result:");
    for (i, evaluation) in round.evaluations().iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            evaluation_to_emoji(evaluation)
        );
    }
    println!();
}

/// Print a word's dictionary entry
pub fn print_entry(entry: &WordEntry) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({})",
        entry.word().text().bright_yellow().bold(),
        entry.original().bright_white()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Meaning:       {}", entry.meaning());
    println!("   Part:          {}", entry.part());
    if !entry.pronunciation().is_empty() {
        println!("   Pronounced:    {}", entry.pronunciation());
    }
    println!();
}

/// Print the hint line for the current answer
pub fn print_hint(entry: &WordEntry) {
    println!(
        "\n💡 {} {} ({})\n",
        "Hint:".bright_cyan().bold(),
        entry.meaning(),
        entry.part()
    );
}
