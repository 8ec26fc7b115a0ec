//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Evaluation, LetterStatus};

/// Format an evaluation as an emoji result row
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .scores()
        .iter()
        .map(|score| match score.status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Misplaced => '🟨',
            LetterStatus::Incorrect => '⬛',
        })
        .collect()
}

/// Format an evaluation as colored letter tiles
#[must_use]
pub fn evaluation_to_tiles(evaluation: &Evaluation) -> String {
    evaluation
        .scores()
        .iter()
        .map(|score| {
            let cell = format!(" {} ", score.letter);
            let styled = match score.status {
                LetterStatus::Correct => cell.black().on_green().bold(),
                LetterStatus::Misplaced => cell.black().on_yellow().bold(),
                LetterStatus::Incorrect => cell.white().on_bright_black(),
            };
            styled.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn evaluation(guess: &str, answer: &str) -> Evaluation {
        Evaluation::score(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn emoji_perfect_guess() {
        let eval = evaluation("terra", "terra");
        assert_eq!(evaluation_to_emoji(&eval), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_disjoint_guess() {
        let eval = evaluation("bruma", "videt");
        assert_eq!(evaluation_to_emoji(&eval), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn emoji_mixed_guess() {
        // W(incorrect) H(incorrect) A(correct) L(misplaced) E(misplaced)
        let eval = evaluation("whale", "learn");
        assert_eq!(evaluation_to_emoji(&eval), "⬛⬛🟩🟨🟨");
    }
}
