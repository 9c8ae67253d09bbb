//! Configuration loading for Feedscore

mod schema;

pub use schema::{Config, TierConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".feedscorerc.json";

/// Find and load the config file. Searches the working directory and its
/// parents; a missing config is not an error and yields the defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn load_config_file(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    // Lexicon paths are relative to the config file, not the working
    // directory the tool happens to run in.
    if let Some(lexicon) = config.lexicon.take() {
        let resolved = if lexicon.is_absolute() {
            lexicon
        } else {
            config_path
                .parent()
                .unwrap_or(Path::new("."))
                .join(lexicon)
        };
        config.lexicon = Some(resolved);
    }

    Ok(config)
}

/// Search for .feedscorerc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}
