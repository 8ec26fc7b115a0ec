//! Guess evaluation
//!
//! Scores a guess against the answer, classifying every letter as correct,
//! misplaced, or incorrect. Duplicate letters are handled with an
//! availability table: a letter can only be marked misplaced as many times
//! as the answer still has unconsumed occurrences of it.

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Right letter in the right position
    Correct,
    /// Letter occurs elsewhere in the answer
    Misplaced,
    /// Letter not matchable anywhere in the remaining answer
    Incorrect,
}

/// One letter of a guess together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterScore {
    pub letter: char,
    pub status: LetterStatus,
}

/// Per-letter feedback for one guess, in guess order
///
/// Always exactly `WORD_LENGTH` entries; both inputs are `Word`s, so a
/// length mismatch between guess and answer cannot occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    scores: [LetterScore; WORD_LENGTH],
}

impl Evaluation {
    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume each matched
    ///    letter from an availability table built from the answer
    /// 2. Second pass, left to right: mark a letter misplaced only while
    ///    the table still has a positive count for it, otherwise incorrect
    ///
    /// The pass order is what makes duplicates come out right: exact
    /// matches always win over misplaced ones, and when the guess repeats
    /// a letter more often than the answer contains it, the earlier
    /// positions take the misplaced slots.
    ///
    /// # Examples
    /// ```
    /// use verbula::core::{Evaluation, LetterStatus, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let eval = Evaluation::score(&guess, &answer);
    ///
    /// // S(misplaced) P(incorrect) E(misplaced) E(misplaced) D(incorrect)
    /// assert_eq!(eval.scores()[0].status, LetterStatus::Misplaced);
    /// assert_eq!(eval.scores()[1].status, LetterStatus::Incorrect);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut statuses = [LetterStatus::Incorrect; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], answer[i], and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == answer.chars()[i] {
                statuses[i] = LetterStatus::Correct;

                // Consume from the availability table
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while availability lasts
        // Allow: index needed to access guess[i] and check/set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] != LetterStatus::Correct {
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter)
                    && *count > 0
                {
                    statuses[i] = LetterStatus::Misplaced;
                    *count -= 1;
                }
            }
        }

        let scores = std::array::from_fn(|i| LetterScore {
            letter: char::from(guess.chars()[i]),
            status: statuses[i],
        });

        Self { scores }
    }

    /// Per-letter scores in guess order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.scores
    }

    /// Check whether every letter is in the right position
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores
            .iter()
            .all(|score| score.status == LetterStatus::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Correct, Incorrect, Misplaced};

    fn statuses(guess: &str, answer: &str) -> [LetterStatus; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        let eval = Evaluation::score(&guess, &answer);
        std::array::from_fn(|i| eval.scores()[i].status)
    }

    #[test]
    fn perfect_guess_is_all_correct() {
        for word in ["terra", "posse", "velle", "equus"] {
            assert_eq!(statuses(word, word), [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn perfect_guess_is_win() {
        let word = Word::new("terra").unwrap();
        assert!(Evaluation::score(&word, &word).is_win());
    }

    #[test]
    fn disjoint_guess_is_all_incorrect() {
        // BRUMA and VIDET share no letters
        assert_eq!(statuses("bruma", "videt"), [Incorrect; WORD_LENGTH]);
    }

    #[test]
    fn unique_answer_letters_simple_statuses() {
        // LEARN has no repeated letters: correct iff same position,
        // misplaced iff present elsewhere
        assert_eq!(
            statuses("whale", "learn"),
            [Incorrect, Incorrect, Correct, Misplaced, Misplaced]
        );
    }

    #[test]
    fn unique_letters_reduce_to_containment_rule() {
        // With no repeated letters on either side, duplicate accounting
        // never kicks in: position match gives correct, containment gives
        // misplaced, anything else incorrect
        for (guess, answer) in [
            ("canis", "panis"),
            ("herba", "locus"),
            ("whale", "learn"),
            ("pugna", "manus"),
        ] {
            let g = Word::new(guess).unwrap();
            let a = Word::new(answer).unwrap();
            let eval = Evaluation::score(&g, &a);

            for (i, score) in eval.scores().iter().enumerate() {
                let expected = if g.chars()[i] == a.chars()[i] {
                    Correct
                } else if a.chars().contains(&g.chars()[i]) {
                    Misplaced
                } else {
                    Incorrect
                };
                assert_eq!(score.status, expected, "{guess} vs {answer} at {i}");
            }
        }
    }

    #[test]
    fn misplaced_never_exceeds_remaining_answer_count() {
        // Each letter can be misplaced at most as many times as the answer
        // contains it, minus the occurrences consumed by exact matches
        for (guess, answer) in [
            ("llama", "learn"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("eeeee", "speed"),
            ("posse", "sella"),
        ] {
            let g = Word::new(guess).unwrap();
            let a = Word::new(answer).unwrap();
            let eval = Evaluation::score(&g, &a);

            for letter in b'A'..=b'Z' {
                let in_answer = a.chars().iter().filter(|&&c| c == letter).count();
                let cells = eval.scores().iter().zip(g.chars());
                let correct = cells
                    .clone()
                    .filter(|&(s, &c)| c == letter && s.status == Correct)
                    .count();
                let misplaced = cells
                    .filter(|&(s, &c)| c == letter && s.status == Misplaced)
                    .count();
                assert!(
                    misplaced <= in_answer - correct,
                    "{guess} vs {answer}: letter {} misplaced {misplaced} times, \
                     only {in_answer} in answer with {correct} exact",
                    char::from(letter)
                );
            }
        }
    }

    #[test]
    fn duplicate_guess_letters_single_answer_letter() {
        // LEARN contains one L and one A, each consumed by an exact match
        // (positions 0 and 2); the second L and the trailing A find no
        // availability left
        assert_eq!(
            statuses("llama", "learn"),
            [Correct, Incorrect, Correct, Incorrect, Incorrect]
        );
    }

    #[test]
    fn duplicate_letters_both_misplaced() {
        // ERASE has two Es, so both Es in SPEED can be misplaced
        assert_eq!(
            statuses("speed", "erase"),
            [Misplaced, Incorrect, Misplaced, Misplaced, Incorrect]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_misplaced() {
        // FLOOR's second O sits where ROBOT's second O is: that O is
        // correct, the first O is misplaced
        assert_eq!(
            statuses("robot", "floor"),
            [Misplaced, Misplaced, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn repeated_guess_letter_consumed_by_exact_matches() {
        // SPEED has two Es, both matched in place by an all-E guess;
        // the remaining Es have no availability left
        assert_eq!(
            statuses("eeeee", "speed"),
            [Incorrect, Incorrect, Correct, Correct, Incorrect]
        );
    }

    #[test]
    fn win_requires_every_position() {
        let guess = Word::new("latus").unwrap();
        let answer = Word::new("lotus").unwrap();
        let eval = Evaluation::score(&guess, &answer);
        assert!(!eval.is_win());
    }

    #[test]
    fn scores_preserve_guess_letters() {
        let guess = Word::new("herba").unwrap();
        let answer = Word::new("terra").unwrap();
        let eval = Evaluation::score(&guess, &answer);
        let letters: String = eval.scores().iter().map(|s| s.letter).collect();
        assert_eq!(letters, "HERBA");
    }
}
