//! Feedscore: sentiment-based quality analyzer for student feedback
//!
//! This library scores free-text feedback on a 0-100 quality scale derived
//! from lexicon-based sentiment polarity, and buckets the score into one of
//! four tiers (Poor, Average, Good, Excellent).

pub mod config;
pub mod normalizer;
pub mod reporter;
pub mod scorer;
pub mod sentiment;

use serde::{Deserialize, Serialize};

/// The main result of analyzing one piece of feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The feedback text as submitted
    pub text: String,
    /// Quality score (0-100) with tier
    pub score: QualityScore,
    /// Compound sentiment polarity in [-1, 1] that the score was derived from
    pub compound: f64,
}

/// Quality score with tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Quality percentage (0-100, two decimal places)
    pub percent: f64,
    /// Tier label (Poor-Excellent)
    pub tier: Tier,
}

impl QualityScore {
    pub fn new(percent: f64) -> Self {
        let tier = TierThresholds::default().classify(percent);
        Self { percent, tier }
    }
}

/// Quality tier label, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Poor => write!(f, "Poor"),
            Tier::Average => write!(f, "Average"),
            Tier::Good => write!(f, "Good"),
            Tier::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Percentage cut-offs between tiers. Lower bounds are inclusive, so a score
/// sitting exactly on a cut-off lands in the higher tier.
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    /// Minimum percent for Excellent
    pub excellent: f64,
    /// Minimum percent for Good
    pub good: f64,
    /// Minimum percent for Average
    pub average: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 80.0,
            good: 60.0,
            average: 40.0,
        }
    }
}

impl TierThresholds {
    /// Classify a quality percentage into its tier
    pub fn classify(&self, percent: f64) -> Tier {
        if percent >= self.excellent {
            Tier::Excellent
        } else if percent >= self.good {
            Tier::Good
        } else if percent >= self.average {
            Tier::Average
        } else {
            Tier::Poor
        }
    }
}

/// Public API: score a single piece of feedback with the built-in lexicon and
/// default tier cut-offs. Used by programmatic consumers that don't need a
/// configured [`scorer::QualityScorer`].
pub fn analyze(text: &str) -> AnalysisResult {
    scorer::QualityScorer::new().analyze(text)
}
