//! Lexical passive-voice detection.
//!
//! A sentence is flagged when a "to be" form is directly followed by a
//! word shaped like a past participle. This is a token-pair pattern,
//! not a parse, so false positives and negatives are expected; the
//! adjective exclusion list below is the only precision lever.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::{round_to_tenths, sentences};

/// "To be" forms that can head a passive construction.
static COPULA_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["is", "are", "was", "were", "been", "being", "be", "am"]
        .into_iter()
        .collect()
});

/// Predicate adjectives that match the participle shape but almost
/// never mark passive voice ("she was tired").
static ADJECTIVE_EXCLUSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tired",
        "excited",
        "interested",
        "bored",
        "worried",
        "surprised",
        "confused",
        "amazed",
        "frustrated",
        "pleased",
        "concerned",
        "relaxed",
    ]
    .into_iter()
    .collect()
});

const PARTICIPLE_ENDINGS: &[&str] = &["ed", "en", "n", "t"];

/// Percentage of sentences written in passive voice, to one decimal
/// place. Blank text and text with no sentences yield 0.
pub fn passive_percentage(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let sentences = sentences::split(text);
    if sentences.is_empty() {
        return 0.0;
    }

    let passive = sentences
        .iter()
        .filter(|sentence| is_passive(sentence))
        .count();

    round_to_tenths(passive as f64 / sentences.len() as f64 * 100.0)
}

/// Whether a single sentence matches the copula + participle pattern.
/// A sentence counts once no matter how many pairs qualify.
pub fn is_passive(sentence: &str) -> bool {
    let words: Vec<String> = sentence
        .to_lowercase()
        .split_whitespace()
        .map(strip_non_letters)
        .collect();

    words
        .windows(2)
        .any(|pair| COPULA_VERBS.contains(pair[0].as_str()) && looks_like_participle(&pair[1]))
}

fn looks_like_participle(word: &str) -> bool {
    word.len() > 3
        && PARTICIPLE_ENDINGS
            .iter()
            .any(|ending| word.ends_with(ending))
        && !ADJECTIVE_EXCLUSIONS.contains(word)
}

fn strip_non_letters(token: &str) -> String {
    token.chars().filter(|ch| ch.is_ascii_alphabetic()).collect()
}
