//! Sentiment analysis behind a narrow, swappable seam.
//!
//! The scorer only ever sees [`SentimentAnalyzer`], so the lexicon heuristic
//! can be replaced without touching the scoring or tier logic.

mod default_words;
mod lexicon;

pub use lexicon::{Lexicon, LexiconAnalyzer, LexiconError};

/// A sentiment capability: text in, compound polarity in [-1, 1] out.
///
/// Implementations must be deterministic (identical text always yields the
/// identical compound value) and hold no mutable state, so a scorer can be
/// shared across threads.
pub trait SentimentAnalyzer: Send + Sync {
    /// Compound sentiment polarity of the text, in [-1, 1].
    /// Empty or all-neutral text yields 0.
    fn compound(&self, text: &str) -> f64;
}
