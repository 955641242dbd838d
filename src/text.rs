//! Accent and case folding for answer comparison.
//!
//! Only used to compare typed answers against canonical names, never for display.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold diacritics and case: decompose (NFD), drop combining marks, recompose (NFC), lowercase.
///
/// "México" becomes "mexico" and "Côte d'Ivoire" becomes "cote d'ivoire".
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.nfc().collect::<String>().to_lowercase()
}

/// Exact match after normalizing both sides. No partial credit.
pub fn answers_match(typed: &str, correct: &str) -> bool {
    normalize(typed) == normalize(correct)
}
