//! Verbula - CLI
//!
//! Latin word-guessing game with TUI and CLI modes. The answer pool and
//! its definitions are compiled in, so the binary is self-contained.

use anyhow::Result;
use clap::{Parser, Subcommand};
use verbula::{
    commands::{define_word, run_simple},
    dictionary::Dictionary,
    interactive::{App, run_tui},
    output::print_entry,
};

#[derive(Parser)]
#[command(
    name = "verbula",
    about = "Guess the five-letter Latin word and grow your vocabulary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (same game without the TUI)
    Simple,

    /// Look up a word in the built-in dictionary
    Define {
        /// Word to look up, with or without macrons
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = Dictionary::embedded();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary),
        Commands::Simple => run_simple_command(&dictionary),
        Commands::Define { word } => run_define_command(&dictionary, &word),
    }
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    let app = App::new(dictionary)?;
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary) -> Result<()> {
    run_simple(dictionary, &mut rand::rng()).map_err(|e| anyhow::anyhow!(e))
}

fn run_define_command(dictionary: &Dictionary, word: &str) -> Result<()> {
    let entry = define_word(dictionary, word).map_err(|e| anyhow::anyhow!(e))?;
    print_entry(entry);
    Ok(())
}
