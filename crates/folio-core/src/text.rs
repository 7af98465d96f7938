//! Text processing utilities for tokenization and ranking

/// Simple word-based tokenizer splitting on non-alphanumeric characters
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize a reference document for recommendation scoring.
///
/// The raw text is split on whitespace and words of length <= 2 are
/// discarded before normalization. A surviving word may still expand to
/// several terms ("state-of-the-art" contributes four), and repeated words
/// contribute once per occurrence. The list is deliberately not
/// deduplicated: a word repeated in the reference accumulates its weight
/// once per occurrence.
pub fn reference_terms(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .flat_map(tokenize)
        .collect()
}
