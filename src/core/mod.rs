//! Core game types
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear rules.

mod evaluation;
mod normalize;
mod word;

pub use evaluation::{Evaluation, LetterScore, LetterStatus};
pub use normalize::normalize;
pub use word::{Word, WordError};

/// Length of every answer and guess, in letters.
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per round.
pub const MAX_GUESSES: usize = 6;
