//! Latin word dictionary
//!
//! Provides the embedded five-letter word table compiled into the binary
//! and the `Dictionary` type that samples answers and looks up metadata.

mod embedded;
mod entry;

pub use embedded::{ENTRIES, ENTRIES_COUNT};
pub use entry::{Dictionary, DictionaryError, WordEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, Word};

    #[test]
    fn entries_count_matches_const() {
        assert_eq!(ENTRIES.len(), ENTRIES_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(ENTRIES_COUNT, 106, "Expected 106 playable words");
    }

    #[test]
    fn entries_are_valid_words() {
        // All keys should be five uppercase ASCII letters
        for &(word, _, _, _, _) in ENTRIES {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn entries_have_defaulted_metadata() {
        // The build step substitutes placeholders, so these are never empty
        for &(word, original, meaning, part, _) in ENTRIES {
            assert!(!original.is_empty(), "Entry '{word}' has no original form");
            assert!(!meaning.is_empty(), "Entry '{word}' has no meaning");
            assert!(!part.is_empty(), "Entry '{word}' has no part of speech");
        }
    }

    #[test]
    fn entries_are_sorted_and_unique() {
        for pair in ENTRIES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "Entries '{}' and '{}' out of order",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn embedded_dictionary_loads_every_entry() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.len(), ENTRIES_COUNT);
    }

    #[test]
    fn embedded_dictionary_has_known_words() {
        let dict = Dictionary::embedded();

        let terra = dict.lookup(&Word::new("terra").unwrap()).unwrap();
        assert_eq!(terra.meaning(), "earth, land");

        let motum = dict.lookup(&Word::new("mōtum").unwrap()).unwrap();
        assert_eq!(motum.original(), "mōtum");
    }

    #[test]
    fn colliding_headwords_resolve_to_last_source_entry() {
        // "malum" (evil) and "mālum" (apple) both fold to MALUM; the
        // source iterates in sorted order, so the macron form wins
        let dict = Dictionary::embedded();
        let malum = dict.lookup(&Word::new("malum").unwrap()).unwrap();
        assert_eq!(malum.original(), "mālum");
        assert_eq!(malum.meaning(), "apple");
    }

    #[test]
    fn pronunciation_falls_back_to_ipa() {
        let dict = Dictionary::embedded();
        let umbra = dict.lookup(&Word::new("umbra").unwrap()).unwrap();
        assert!(!umbra.pronunciation().is_empty());
    }
}
