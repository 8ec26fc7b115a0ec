//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use std::io::{self, Write};

use rand::Rng;

use crate::core::MAX_GUESSES;
use crate::dictionary::Dictionary;
use crate::game::Round;
use crate::output::display::{print_guess_feedback, print_hint, print_round_banner};

/// Run the simple line-based game mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary has no playable words.
pub fn run_simple<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Verbula - A Latin Word Game                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter Latin word. You have {MAX_GUESSES} tries.");
    println!("Macrons are fine: \"mōtum\" and \"motum\" are the same guess.\n");
    println!("Commands: 'hint' for the meaning, 'new' for a new word, 'quit' to exit\n");

    let mut round = Round::start(dictionary, rng).map_err(|e| e.to_string())?;

    loop {
        let turn = round.guesses().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Vale!\n");
                return Ok(());
            }
            "new" | "n" => {
                round = Round::start(dictionary, rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New word drawn!\n");
                continue;
            }
            "hint" | "h" => {
                print_hint(round.answer());
                continue;
            }
            _ => {}
        }

        match round.submit(&input) {
            Ok(evaluation) => {
                print_guess_feedback(turn, &evaluation);
                println!();
            }
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        }

        if round.is_over() {
            print_round_banner(&round);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    round = Round::start(dictionary, rng).map_err(|e| e.to_string())?;
                    println!("\n🔄 New word drawn!\n");
                }
                _ => {
                    println!("\n👋 Vale!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
