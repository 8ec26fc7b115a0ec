//! Round state and guess submission
//!
//! The round is an explicitly owned value: every operation happens through
//! `&mut Round`, and replacing the answer means constructing a new round.
//! There is no module-level current answer anywhere.

use std::fmt;

use rand::Rng;

use crate::core::{Evaluation, MAX_GUESSES, Word, WordError};
use crate::dictionary::{Dictionary, DictionaryError, WordEntry};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Error type for rejected guess submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The round already ended; only a new round accepts guesses
    RoundOver,
    /// The input did not normalize into a playable word
    Word(WordError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundOver => write!(f, "Round is over, start a new one to keep playing"),
            Self::Word(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<WordError> for SubmitError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}

/// One play-through from answer selection to win or loss
///
/// Guess history is append-only and never truncated; the outcome, once
/// set, is never overwritten within the same round.
#[derive(Debug, Clone)]
pub struct Round {
    answer: WordEntry,
    guesses: Vec<Word>,
    outcome: Option<Outcome>,
}

impl Round {
    /// Start a round with an answer drawn uniformly from the dictionary
    ///
    /// This is also how a round is reset: drop the old value and start
    /// another, which draws a fresh answer and clears all history.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the dictionary has no words.
    pub fn start<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Result<Self, DictionaryError> {
        let answer = dictionary.sample(rng)?.clone();
        Ok(Self::with_answer(answer))
    }

    /// Start a round against a fixed answer
    #[must_use]
    pub const fn with_answer(answer: WordEntry) -> Self {
        Self {
            answer,
            guesses: Vec::new(),
            outcome: None,
        }
    }

    /// The dictionary entry for the current answer
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &WordEntry {
        &self.answer
    }

    /// Submitted guesses in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Score every submitted guess against the answer, in submission order
    #[must_use]
    pub fn evaluations(&self) -> Vec<Evaluation> {
        self.guesses
            .iter()
            .map(|guess| Evaluation::score(guess, self.answer.word()))
            .collect()
    }

    /// How the round ended, or `None` while in progress
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check whether the round has ended
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Guesses still available this round
    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Submit one guess
    ///
    /// Normalizes the raw input, scores it against the answer, appends it
    /// to the history (winning and losing guesses included), then decides
    /// the outcome: won if every letter is correct, lost if the attempt
    /// ceiling is reached, in progress otherwise.
    ///
    /// # Errors
    /// - `SubmitError::RoundOver` if the round already ended
    /// - `SubmitError::Word` if the input is not a five-letter word;
    ///   the round state is unchanged in both cases
    pub fn submit(&mut self, raw_input: &str) -> Result<Evaluation, SubmitError> {
        if self.is_over() {
            return Err(SubmitError::RoundOver);
        }

        let guess = Word::new(raw_input)?;
        let evaluation = Evaluation::score(&guess, self.answer.word());
        self.guesses.push(guess);

        if evaluation.is_win() {
            self.outcome = Some(Outcome::Won);
        } else if self.guesses.len() >= MAX_GUESSES {
            self.outcome = Some(Outcome::Lost);
        }

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(
            Word::new(word).unwrap(),
            word.to_lowercase(),
            "a word",
            "noun",
            "",
        )
    }

    fn test_dictionary() -> Dictionary {
        Dictionary::from_rows(&[
            ("TERRA", "terra", "earth, land", "noun", ""),
            ("CANIS", "canis", "dog", "noun", ""),
            ("PANIS", "pānis", "bread", "noun", ""),
        ])
    }

    #[test]
    fn start_draws_answer_from_dictionary() {
        let dict = test_dictionary();
        let mut rng = StdRng::seed_from_u64(7);
        let round = Round::start(&dict, &mut rng).unwrap();

        assert!(dict.lookup(round.answer().word()).is_some());
        assert!(round.guesses().is_empty());
        assert!(round.outcome().is_none());
        assert_eq!(round.guesses_remaining(), MAX_GUESSES);
    }

    #[test]
    fn start_draws_exactly_once() {
        let dict = test_dictionary();

        let mut direct_rng = StdRng::seed_from_u64(3);
        let direct = dict.sample(&mut direct_rng).unwrap().clone();

        let mut round_rng = StdRng::seed_from_u64(3);
        let round = Round::start(&dict, &mut round_rng).unwrap();

        // Same draw, and both rngs end up in the same position
        assert_eq!(round.answer(), &direct);
        assert_eq!(direct_rng.random::<u64>(), round_rng.random::<u64>());
    }

    #[test]
    fn start_fails_on_empty_dictionary() {
        let dict = Dictionary::from_rows(&[]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Round::start(&dict, &mut rng),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn correct_guess_wins() {
        let mut round = Round::with_answer(entry("terra"));
        let evaluation = round.submit("terra").unwrap();

        assert!(evaluation.is_win());
        assert_eq!(round.outcome(), Some(Outcome::Won));
        assert!(round.is_over());
        assert_eq!(round.guesses().len(), 1);
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let mut round = Round::with_answer(entry("terra"));
        let evaluation = round.submit("canis").unwrap();

        assert!(!evaluation.is_win());
        assert!(round.outcome().is_none());
        assert_eq!(round.guesses_remaining(), MAX_GUESSES - 1);
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut round = Round::with_answer(entry("terra"));

        for _ in 0..MAX_GUESSES - 1 {
            round.submit("canis").unwrap();
            assert!(round.outcome().is_none());
        }

        round.submit("canis").unwrap();
        assert_eq!(round.outcome(), Some(Outcome::Lost));
        assert_eq!(round.guesses_remaining(), 0);
    }

    #[test]
    fn win_on_last_attempt_beats_loss() {
        let mut round = Round::with_answer(entry("terra"));

        for _ in 0..MAX_GUESSES - 1 {
            round.submit("canis").unwrap();
        }
        assert!(round.outcome().is_none());

        round.submit("terra").unwrap();
        assert_eq!(round.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn submit_after_win_is_rejected() {
        let mut round = Round::with_answer(entry("terra"));
        round.submit("terra").unwrap();

        assert_eq!(round.submit("canis"), Err(SubmitError::RoundOver));
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn submit_after_loss_is_rejected() {
        let mut round = Round::with_answer(entry("terra"));
        for _ in 0..MAX_GUESSES {
            round.submit("canis").unwrap();
        }

        assert_eq!(round.submit("terra"), Err(SubmitError::RoundOver));
        assert_eq!(round.guesses().len(), MAX_GUESSES);
        assert_eq!(round.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn invalid_input_leaves_round_unchanged() {
        let mut round = Round::with_answer(entry("terra"));

        let result = round.submit("rex");
        assert!(matches!(
            result,
            Err(SubmitError::Word(WordError::InvalidLength(3)))
        ));
        assert!(round.guesses().is_empty());
        assert!(round.outcome().is_none());
    }

    #[test]
    fn guesses_are_normalized_before_recording() {
        let mut round = Round::with_answer(entry("motum"));
        round.submit("mōtum").unwrap();

        assert_eq!(round.guesses()[0].text(), "MOTUM");
        assert_eq!(round.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn history_is_append_only_and_ordered() {
        let mut round = Round::with_answer(entry("terra"));
        round.submit("canis").unwrap();
        round.submit("panis").unwrap();
        round.submit("herba").unwrap();

        let texts: Vec<&str> = round.guesses().iter().map(Word::text).collect();
        assert_eq!(texts, ["CANIS", "PANIS", "HERBA"]);
    }

    #[test]
    fn evaluations_match_history() {
        let mut round = Round::with_answer(entry("terra"));
        round.submit("canis").unwrap();
        round.submit("terra").unwrap();

        let evaluations = round.evaluations();
        assert_eq!(evaluations.len(), 2);
        assert!(!evaluations[0].is_win());
        assert!(evaluations[1].is_win());

        // First guess: C-A-N-I-S vs T-E-R-R-A, only the A is present
        assert_eq!(evaluations[0].scores()[1].status, LetterStatus::Misplaced);
        assert_eq!(evaluations[0].scores()[0].status, LetterStatus::Incorrect);
    }

    #[test]
    fn starting_again_resets_everything() {
        let dict = test_dictionary();
        let mut rng = StdRng::seed_from_u64(11);

        let mut round = Round::start(&dict, &mut rng).unwrap();
        round.submit("canis").unwrap();
        round.submit("panis").unwrap();

        let fresh = Round::start(&dict, &mut rng).unwrap();
        assert!(fresh.guesses().is_empty());
        assert!(fresh.outcome().is_none());
        assert!(dict.lookup(fresh.answer().word()).is_some());
    }
}
