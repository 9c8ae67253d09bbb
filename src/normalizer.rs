//! Text normalization for sentiment scoring

/// Lower-case the input and strip every character that is not a lower-case
/// Latin letter or whitespace. Digits, punctuation, and non-Latin letters are
/// all removed. Total and side-effect free; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}
