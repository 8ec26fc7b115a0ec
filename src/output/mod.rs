//! Terminal output formatting
//!
//! Display utilities for game results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_entry, print_guess_feedback, print_hint, print_round_banner};
