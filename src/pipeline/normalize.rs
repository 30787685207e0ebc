//! Text normalization for keyword matching.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, decompose (NFD) and drop combining marks.
///
/// "Déçu, PROBLÈME" becomes "decu, probleme". Only used for matching;
/// display text always comes from the original string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Substring containment of any keyword. Both sides must already be normalized.
pub fn contains_any(normalized_text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && normalized_text.contains(k.as_str()))
}
