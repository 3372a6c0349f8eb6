//! Pure text analysis functions.

use std::collections::HashMap;

/// Zero-based index of the "15th character".
pub const CHAR_INDEX: usize = 14;

/// Distance between collected characters.
pub const CHAR_STRIDE: usize = 15;

/// Character at index 14, or `None` when the text is shorter than 15 chars.
///
/// Walks at most fifteen chars regardless of the text length.
pub fn fifteenth_char(text: &str) -> Option<char> {
    text.chars().nth(CHAR_INDEX)
}

/// Characters at indices 14, 29, 44, ... in ascending order.
pub fn every_fifteenth_char(text: &str) -> Vec<char> {
    text.chars().skip(CHAR_INDEX).step_by(CHAR_STRIDE).collect()
}

/// Case-insensitive occurrence count of whitespace-separated tokens.
///
/// Tokens keep any punctuation or markup attached to them (`<p>` is a word).
pub fn word_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    counts
}
