//! Flesch Reading Ease scoring.

use crate::core::ReadabilityMetrics;

use super::{passive, round_to_tenths, sentences, syllables};

/// Compute both readability metrics for one text snapshot.
pub fn compute_readability(text: &str) -> ReadabilityMetrics {
    ReadabilityMetrics {
        flesch_score: flesch_score(text),
        passive_pct: passive::passive_percentage(text),
    }
}

/// Flesch Reading Ease on a 0-100 scale, one decimal place.
///
/// Degenerate input (blank text, no sentences, no words) scores 0.
/// The score is rounded to one decimal and then clamped; keeping that
/// order makes fresh scores comparable with ones computed and stored
/// earlier.
pub fn flesch_score(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let sentence_count = sentences::split(text).len();
    if sentence_count == 0 {
        return 0.0;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let syllable_count: usize = words.iter().map(|word| syllables::count(word)).sum();

    let avg_sentence_length = words.len() as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    round_to_tenths(score).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_hits_the_ceiling() {
        // One sentence, two one-syllable words:
        // 206.835 - 1.015 * 2 - 84.6 * 1 = 120.205, clamped to 100.
        assert_eq!(flesch_score("Go on."), 100.0);
    }

    #[test]
    fn test_dense_text_hits_the_floor() {
        // One sentence of long polysyllabic words drives the raw score
        // below zero.
        let text = "Incomprehensibility characterizes multidimensional organizational bureaucracies.";
        assert_eq!(flesch_score(text), 0.0);
    }

    #[test]
    fn test_mid_range_score() {
        // 2 sentences, 10 words, 20 estimated syllables:
        // 206.835 - 1.015 * 5 - 84.6 * 2 = 32.56, rounds to 32.6.
        let text = "The committee discussed the proposal. Nobody agreed with the conclusion.";
        assert_eq!(flesch_score(text), 32.6);
    }

    #[test]
    fn test_degenerate_input_scores_zero() {
        assert_eq!(flesch_score(""), 0.0);
        assert_eq!(flesch_score("   \n\t"), 0.0);
        assert_eq!(flesch_score("..."), 0.0);
    }

    #[test]
    fn test_compute_readability_bundles_both_metrics() {
        let metrics = compute_readability("The cake was eaten. I like cake.");
        assert!(metrics.flesch_score > 0.0);
        assert_eq!(metrics.passive_pct, 50.0);
    }

    #[test]
    fn test_compute_readability_on_empty_text() {
        let metrics = compute_readability("");
        assert_eq!(metrics.flesch_score, 0.0);
        assert_eq!(metrics.passive_pct, 0.0);
    }
}
