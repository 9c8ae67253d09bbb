//! Built-in valence table for the lexicon analyzer.
//!
//! Valences sit on the same roughly [-4, 4] scale the normalization constant
//! expects. Word choice leans toward the vocabulary of course and teaching
//! feedback.

use super::lexicon::Lexicon;

/// Build the built-in lexicon
pub(super) fn builtin() -> Lexicon {
    let mut lexicon = Lexicon::new();

    // Strongly positive
    for word in [
        "excellent",
        "wonderful",
        "amazing",
        "fantastic",
        "brilliant",
        "outstanding",
        "perfect",
        "exceptional",
        "superb",
        "magnificent",
        "awesome",
        "best",
        "love",
        "loved",
    ] {
        lexicon.insert(word, 3.0);
    }

    // Moderately positive
    for word in [
        "good",
        "great",
        "nice",
        "pleasant",
        "lovely",
        "delightful",
        "happy",
        "glad",
        "pleased",
        "satisfied",
        "exciting",
        "interesting",
        "impressive",
        "remarkable",
        "valuable",
        "useful",
        "helpful",
        "enjoyable",
        "enjoyed",
        "engaging",
        "interactive",
        "supportive",
        "friendly",
        "organized",
        "effective",
        "informative",
        "insightful",
        "enlightening",
        "recommend",
        "recommended",
    ] {
        lexicon.insert(word, 1.8);
    }

    // Mildly positive
    for word in [
        "okay",
        "fine",
        "decent",
        "adequate",
        "acceptable",
        "reasonable",
        "positive",
        "favorable",
        "promising",
        "special",
        "like",
        "liked",
        "learned",
        "understand",
        "understood",
    ] {
        lexicon.insert(word, 0.9);
    }

    // Strongly negative
    for word in [
        "terrible",
        "awful",
        "horrible",
        "dreadful",
        "atrocious",
        "abysmal",
        "disastrous",
        "appalling",
        "worst",
        "hate",
        "hated",
    ] {
        lexicon.insert(word, -3.0);
    }

    // Moderately negative
    for word in [
        "bad",
        "poor",
        "disappointing",
        "disappointed",
        "frustrating",
        "frustrated",
        "annoying",
        "unpleasant",
        "problematic",
        "useless",
        "waste",
        "wasted",
        "boring",
        "confusing",
        "unclear",
        "unhelpful",
        "disorganized",
        "difficult",
        "stressful",
    ] {
        lexicon.insert(word, -1.8);
    }

    // Mildly negative
    for word in [
        "mediocre",
        "subpar",
        "lacking",
        "underwhelming",
        "tedious",
        "dull",
        "unremarkable",
        "forgettable",
        "slow",
        "confused",
        "lost",
        "unsure",
        "struggling",
        "struggled",
    ] {
        lexicon.insert(word, -0.9);
    }

    lexicon
}
