//! Text normalization shared by the lexical index, caches and scorers.

use unicode_segmentation::UnicodeSegmentation;

/// Trim, lowercase, and collapse internal whitespace. Used as the cache key basis.
pub fn normalize_query(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased word tokens on Unicode word boundaries.
///
/// Punctuation is dropped. Han ideographs come out as single-character tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_lowercase).collect()
}
