//! Guessable word representation
//!
//! A Word stores a five-letter word in canonical uppercase form, with the
//! letter bytes available for position-by-position comparison.

use rustc_hash::FxHashMap;
use std::fmt;

use super::{WORD_LENGTH, normalize};

/// A five-letter word in canonical form
///
/// Construction normalizes the input (diacritics folded, uppercased,
/// trimmed), so two spellings of the same word compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw text
    ///
    /// The input is normalized first, so "mōtum", "motum", and " MOTUM "
    /// all produce the same Word.
    ///
    /// # Errors
    /// Returns `WordError` if, after normalization:
    /// - Length is not exactly 5 letters
    /// - Any character is outside ASCII
    /// - Any character is not a letter
    ///
    /// # Examples
    /// ```
    /// use verbula::core::Word;
    ///
    /// let word = Word::new("terra").unwrap();
    /// assert_eq!(word.text(), "TERRA");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("terr4").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = normalize(&text.into());

        let char_count = text.chars().count();
        if char_count != WORD_LENGTH {
            return Err(WordError::InvalidLength(char_count));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice (always uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used for evaluation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
