//! Score calculation for feedback quality

use crate::normalizer::normalize;
use crate::sentiment::{LexiconAnalyzer, SentimentAnalyzer};
use crate::{AnalysisResult, QualityScore, Tier, TierThresholds};

/// Scorer for feedback quality: normalize, compute compound polarity,
/// rescale [-1, 1] to a percentage, classify into a tier.
///
/// Holds no mutable state, so one scorer can serve any number of calls.
pub struct QualityScorer {
    analyzer: Box<dyn SentimentAnalyzer>,
    thresholds: TierThresholds,
}

impl QualityScorer {
    /// Create a scorer with the built-in lexicon and default tier cut-offs
    pub fn new() -> Self {
        Self {
            analyzer: Box::new(LexiconAnalyzer::new()),
            thresholds: TierThresholds::default(),
        }
    }

    /// Create a scorer over a specific sentiment capability
    pub fn with_analyzer(analyzer: Box<dyn SentimentAnalyzer>) -> Self {
        Self {
            analyzer,
            thresholds: TierThresholds::default(),
        }
    }

    /// Override the tier cut-offs
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Score one piece of feedback. Total: blank input is not rejected here
    /// (that is the calling layer's job) and scores a neutral 50.00.
    pub fn score(&self, text: &str) -> QualityScore {
        self.analyze(text).score
    }

    /// Score one piece of feedback, keeping the intermediate compound value
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let cleaned = normalize(text);
        let compound = self.analyzer.compound(&cleaned).clamp(-1.0, 1.0);
        let percent = round2((compound + 1.0) * 50.0);
        AnalysisResult {
            text: text.to_string(),
            score: QualityScore {
                percent,
                tier: self.thresholds.classify(percent),
            },
            compound,
        }
    }

    /// Aggregate a batch of results into a summary scored with this scorer's
    /// tier cut-offs
    pub fn summarize(&self, results: &[AnalysisResult]) -> Summary {
        let entries = results.len();
        let average = if entries == 0 {
            0.0
        } else {
            round2(results.iter().map(|r| r.score.percent).sum::<f64>() / entries as f64)
        };
        Summary {
            entries,
            average_percent: average,
            average_tier: self.thresholds.classify(average),
        }
    }

    /// One-line description of a tier
    pub fn tier_description(tier: Tier) -> &'static str {
        match tier {
            Tier::Excellent => "Excellent - Strongly positive feedback",
            Tier::Good => "Good - Positive overall with minor reservations",
            Tier::Average => "Average - Mixed or neutral feedback",
            Tier::Poor => "Poor - Predominantly negative feedback",
        }
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate over a batch of analyzed entries
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of entries analyzed
    pub entries: usize,
    /// Mean quality percentage (two decimal places)
    pub average_percent: f64,
    /// Tier of the mean percentage
    pub average_tier: Tier,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
