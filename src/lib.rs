//! Verbula
//!
//! A Latin word-guessing game: guess the five-letter word, learn the
//! vocabulary. Answers are drawn from a built-in Latin dictionary with
//! meanings, parts of speech, and pronunciation guides.
//!
//! # Quick Start
//!
//! ```rust
//! use verbula::core::{Evaluation, Word};
//!
//! // Words normalize on construction: macrons fold away, case is fixed
//! let guess = Word::new("cānis").unwrap();
//! let answer = Word::new("terra").unwrap();
//! assert_eq!(guess.text(), "CANIS");
//!
//! // Score a guess against an answer
//! let evaluation = Evaluation::score(&guess, &answer);
//! assert!(!evaluation.is_win());
//! ```

// Core domain types
pub mod core;

// Embedded Latin dictionary
pub mod dictionary;

// Round state and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
