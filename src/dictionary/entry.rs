//! Dictionary records and word selection
//!
//! A `Dictionary` holds every playable word with its learner-facing
//! metadata and hands out uniformly random answers for new rounds.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

use crate::core::Word;

/// A dictionary record: the guessable word plus its metadata
///
/// `word` is the canonical uppercase form used for matching; `original`
/// keeps the macron-bearing source spelling for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    original: String,
    meaning: String,
    part: String,
    pronunciation: String,
}

impl WordEntry {
    /// Create an entry from its parts
    #[must_use]
    pub fn new(
        word: Word,
        original: impl Into<String>,
        meaning: impl Into<String>,
        part: impl Into<String>,
        pronunciation: impl Into<String>,
    ) -> Self {
        Self {
            word,
            original: original.into(),
            meaning: meaning.into(),
            part: part.into(),
            pronunciation: pronunciation.into(),
        }
    }

    /// The canonical guessable word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The diacritic-bearing source spelling
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// English meaning; never empty (defaulted at build time)
    #[inline]
    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// Part of speech; never empty (defaulted at build time)
    #[inline]
    #[must_use]
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Pronunciation guide; may be empty
    #[inline]
    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }
}

/// Error type for dictionary failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No playable words to draw from
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no playable words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// The playable word collection
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
}

impl Dictionary {
    /// Build the dictionary from the embedded entry table
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_rows(super::ENTRIES)
    }

    /// Build a dictionary from raw rows, skipping any invalid entries
    ///
    /// Row layout is (word, original, meaning, part, pronunciation).
    #[must_use]
    pub fn from_rows(rows: &[(&str, &str, &str, &str, &str)]) -> Self {
        let entries = rows
            .iter()
            .filter_map(|&(word, original, meaning, part, pronunciation)| {
                let word = Word::new(word).ok()?;
                Some(WordEntry::new(word, original, meaning, part, pronunciation))
            })
            .collect();

        Self { entries }
    }

    /// Number of playable words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary has no playable words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a word
    #[must_use]
    pub fn lookup(&self, word: &Word) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.word() == word)
    }

    /// Draw one entry uniformly at random
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if there are no entries to draw
    /// from. The embedded dictionary is never empty (the build aborts
    /// otherwise), so this only fires for hand-built dictionaries.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<&WordEntry, DictionaryError> {
        self.entries.choose(rng).ok_or(DictionaryError::Empty)
    }
}
