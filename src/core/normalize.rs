//! Input normalization for diacritic-insensitive comparison
//!
//! Learners type macron-bearing forms ("mōtum") while dictionary keys and
//! answers are plain uppercase ASCII. Folding both sides the same way makes
//! them compare equal.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw input into the canonical comparison form.
///
/// Decomposes to NFD, strips combining diacritical marks, uppercases,
/// and trims surrounding whitespace. Applying it twice gives the same
/// result as applying it once.
///
/// # Examples
/// ```
/// use verbula::core::normalize;
///
/// assert_eq!(normalize("mōtum"), "MOTUM");
/// assert_eq!(normalize("  terra "), "TERRA");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_uppercase()
        .trim()
        .to_string()
}
