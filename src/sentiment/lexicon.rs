//! Lexicon-based sentiment heuristic.
//!
//! Words carry a valence on a roughly [-4, 4] scale. A text's compound
//! polarity is the valence sum squashed into [-1, 1] with the usual
//! `sum / sqrt(sum^2 + alpha)` normalization. Two surface heuristics apply
//! before summing: booster words nudge the following sentiment word's
//! valence, and a negator shortly before a sentiment word flips and damps it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::SentimentAnalyzer;

/// Valence adjustment contributed by a booster to the word that follows
const BOOSTER_STEP: f64 = 0.293;
/// Flip-and-damp factor applied to a negated sentiment word
const NEGATION_DAMP: f64 = -0.74;
/// Normalization constant for squashing summed valence into [-1, 1]
const NORMALIZE_ALPHA: f64 = 15.0;
/// How many tokens back a negator still applies
const NEGATION_WINDOW: usize = 3;

/// Valence magnitude cap for lexicon entries
const MAX_VALENCE: f64 = 4.0;

/// Negators in normalized form (normalization strips apostrophes,
/// so "don't" arrives as "dont").
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "none", "neither", "nobody", "nowhere",
    "cannot", "cant", "dont", "didnt", "doesnt", "isnt", "wasnt", "werent",
    "wont", "couldnt", "shouldnt", "wouldnt", "aint",
];

/// Intensity-raising boosters
const BOOSTERS_UP: &[&str] = &[
    "very", "really", "extremely", "incredibly", "absolutely", "so", "super",
    "totally", "highly", "especially", "particularly", "truly",
];

/// Intensity-lowering boosters
const BOOSTERS_DOWN: &[&str] = &[
    "slightly", "somewhat", "barely", "hardly", "marginally", "kinda",
    "sorta", "almost",
];

/// Errors loading a user-supplied lexicon file
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in lexicon file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("non-finite valence for word {word:?} in {path}")]
    NonFiniteValence { word: String, path: PathBuf },
}

/// A word-to-valence table. Lookups are case-insensitive; keys are stored
/// lower-cased and valences clamped to [-4, 4].
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Insert a word with its valence. Positive valence means positive
    /// sentiment. Existing entries are overwritten.
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-MAX_VALENCE, MAX_VALENCE));
    }

    /// Get the valence for a word, or `None` if it carries no sentiment
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is in the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merge another lexicon into this one. The other lexicon's entries win
    /// on conflict, so a user table can re-weight built-in words.
    pub fn merge(&mut self, other: &Lexicon) {
        for (word, valence) in &other.words {
            self.words.insert(word.clone(), *valence);
        }
    }

    /// Load a lexicon from a JSON file mapping words to valences, e.g.
    /// `{"inspiring": 2.4, "chaotic": -1.9}`.
    pub fn from_file(path: &Path) -> Result<Lexicon, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: HashMap<String, f64> =
            serde_json::from_str(&content).map_err(|source| LexiconError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut lexicon = Lexicon::new();
        for (word, valence) in raw {
            if !valence.is_finite() {
                return Err(LexiconError::NonFiniteValence {
                    word,
                    path: path.to_path_buf(),
                });
            }
            lexicon.insert(&word, valence);
        }
        Ok(lexicon)
    }
}

impl Default for Lexicon {
    /// The built-in lexicon (see `default_words.rs`)
    fn default() -> Self {
        super::default_words::builtin()
    }
}

/// Lexicon-based [`SentimentAnalyzer`]
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    /// Create an analyzer backed by the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::default(),
        }
    }

    /// Create an analyzer backed by a specific lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token)
    }

    /// Booster adjustment for the token, if any: positive raises intensity,
    /// negative lowers it.
    fn booster_step(token: &str) -> Option<f64> {
        if BOOSTERS_UP.contains(&token) {
            Some(BOOSTER_STEP)
        } else if BOOSTERS_DOWN.contains(&token) {
            Some(-BOOSTER_STEP)
        } else {
            None
        }
    }

    /// Valence of one matched token given its predecessors
    fn token_valence(&self, tokens: &[String], idx: usize, base: f64) -> f64 {
        let mut valence = base;

        // Booster directly before the sentiment word shifts its intensity
        // toward or away from zero, in the direction of its sign.
        if idx > 0 {
            if let Some(step) = Self::booster_step(&tokens[idx - 1]) {
                valence += step * base.signum();
            }
        }

        // A negator within the preceding window flips and damps.
        let window_start = idx.saturating_sub(NEGATION_WINDOW);
        if tokens[window_start..idx]
            .iter()
            .any(|t| Self::is_negator(t))
        {
            valence *= NEGATION_DAMP;
        }

        valence
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut sum = 0.0;
        for (idx, token) in tokens.iter().enumerate() {
            if let Some(base) = self.lexicon.valence(token) {
                sum += self.token_valence(&tokens, idx, base);
            }
        }

        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.len(), 0);
        assert_eq!(lexicon.valence("anything"), None);
    }

    #[test]
    fn test_insert_and_lookup_case_insensitive() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("Inspiring", 2.4);
        assert_eq!(lexicon.valence("inspiring"), Some(2.4));
        assert_eq!(lexicon.valence("INSPIRING"), Some(2.4));
        assert!(lexicon.contains("inspiring"));
    }

    #[test]
    fn test_valence_clamped() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("over", 9.0);
        lexicon.insert("under", -9.0);
        assert_eq!(lexicon.valence("over"), Some(4.0));
        assert_eq!(lexicon.valence("under"), Some(-4.0));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Lexicon::new();
        base.insert("shared", 1.0);
        base.insert("kept", 2.0);

        let mut extra = Lexicon::new();
        extra.insert("shared", -1.0);
        extra.insert("added", 0.5);

        base.merge(&extra);
        assert_eq!(base.valence("shared"), Some(-1.0));
        assert_eq!(base.valence("kept"), Some(2.0));
        assert_eq!(base.valence("added"), Some(0.5));
    }

    #[test]
    fn test_builtin_lexicon_has_words() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.is_empty());
        assert!(lexicon.valence("excellent").unwrap() > 0.0);
        assert!(lexicon.valence("terrible").unwrap() < 0.0);
    }

    #[test]
    fn test_compound_empty_text_is_zero() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.compound(""), 0.0);
    }

    #[test]
    fn test_compound_neutral_text_is_zero() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.compound("the lecture covered chapter three"), 0.0);
    }

    #[test]
    fn test_compound_positive_text() {
        let analyzer = LexiconAnalyzer::new();
        let c = analyzer.compound("the lecture was excellent and helpful");
        assert!(c > 0.3, "compound was {c}");
        assert!(c <= 1.0);
    }

    #[test]
    fn test_compound_negative_text() {
        let analyzer = LexiconAnalyzer::new();
        let c = analyzer.compound("a terrible and frustrating experience");
        assert!(c < -0.3, "compound was {c}");
        assert!(c >= -1.0);
    }

    #[test]
    fn test_booster_raises_intensity() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.compound("the course was good");
        let boosted = analyzer.compound("the course was very good");
        assert!(boosted > plain, "boosted {boosted} <= plain {plain}");
    }

    #[test]
    fn test_dampener_lowers_intensity() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.compound("the course was good");
        let damped = analyzer.compound("the course was somewhat good");
        assert!(damped < plain, "damped {damped} >= plain {plain}");
    }

    #[test]
    fn test_negation_flips_sentiment() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.compound("the material was helpful");
        let negated = analyzer.compound("the material was not helpful");
        assert!(plain > 0.0);
        assert!(negated < 0.0, "negated was {negated}");
    }

    #[test]
    fn test_negation_window_is_limited() {
        let analyzer = LexiconAnalyzer::new();
        // "not" is four tokens before "good" and no longer applies
        let c = analyzer.compound("not that it matters much good");
        assert!(c > 0.0, "compound was {c}");
    }

    #[test]
    fn test_compound_deterministic() {
        let analyzer = LexiconAnalyzer::new();
        let text = "it was okay nothing special";
        assert_eq!(analyzer.compound(text), analyzer.compound(text));
    }

    #[test]
    fn test_lexicon_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"{"chaotic": -1.9, "inspiring": 2.4}"#).unwrap();

        let lexicon = Lexicon::from_file(&path).unwrap();
        assert_eq!(lexicon.valence("chaotic"), Some(-1.9));
        assert_eq!(lexicon.valence("inspiring"), Some(2.4));
    }

    #[test]
    fn test_lexicon_from_file_missing() {
        let err = Lexicon::from_file(Path::new("no-such-lexicon.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Read { .. }));
    }

    #[test]
    fn test_lexicon_from_file_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Lexicon::from_file(&path).unwrap_err();
        assert!(matches!(err, LexiconError::Parse { .. }));
    }
}
