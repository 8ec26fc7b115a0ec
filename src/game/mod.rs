//! Game state machine
//!
//! A `Round` is one play-through: it owns the secret answer, the guess
//! history, and the outcome. Submitting guesses drives it from in-progress
//! to won or lost; starting a new round is the only way to change answers.

mod round;

pub use round::{Outcome, Round, SubmitError};
