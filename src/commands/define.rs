//! Word lookup command
//!
//! Looks up one word in the dictionary and returns its entry.

use crate::core::Word;
use crate::dictionary::{Dictionary, WordEntry};

/// Look up a word's dictionary entry
///
/// Accepts any spelling the normalizer accepts, so "mōtum", "motum", and
/// "MOTUM" all find the same entry.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not a five-letter word
/// - The word is not in the dictionary
pub fn define_word<'a>(dictionary: &'a Dictionary, word: &str) -> Result<&'a WordEntry, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    dictionary
        .lookup(&word_obj)
        .ok_or_else(|| format!("'{}' is not in the dictionary", word_obj.text()))
}
