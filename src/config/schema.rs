//! Config schema and deserialization

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::TierThresholds;

/// Tier cut-off overrides for .feedscorerc.json. Each value is the inclusive
/// minimum percentage for that tier; anything below `average` is Poor.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    #[serde(default = "default_excellent")]
    pub excellent: f64,
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_average")]
    pub average: f64,
}

fn default_excellent() -> f64 {
    80.0
}

fn default_good() -> f64 {
    60.0
}

fn default_average() -> f64 {
    40.0
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            good: default_good(),
            average: default_average(),
        }
    }
}

impl TierConfig {
    /// Validate and convert into scorer thresholds
    pub fn to_thresholds(&self) -> Result<TierThresholds> {
        let Self {
            excellent,
            good,
            average,
        } = *self;
        for (name, value) in [
            ("excellent", excellent),
            ("good", good),
            ("average", average),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                anyhow::bail!("tier cut-off '{}' must be within 0-100, got {}", name, value);
            }
        }
        if !(average < good && good < excellent) {
            anyhow::bail!(
                "tier cut-offs must be ordered average < good < excellent, got {} / {} / {}",
                average,
                good,
                excellent
            );
        }
        Ok(TierThresholds {
            excellent,
            good,
            average,
        })
    }
}

/// Root config structure for .feedscorerc.json
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Tier cut-off overrides
    #[serde(default)]
    pub tiers: TierConfig,

    /// Path to an extra word-to-valence JSON lexicon, merged over the
    /// built-in table. Relative paths resolve against the config file's
    /// directory (made absolute during load).
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// Minimum quality percentage (exit 1 if below)
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<f64>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }
}
