use pretty_assertions::assert_eq;
use prosemap::{compute_readability, flesch_score};

#[test]
fn test_trivial_sentence_clamps_to_ceiling() {
    // 1 sentence, 2 words, 1 syllable each:
    // 206.835 - 1.015 * 2 - 84.6 * 1 = 120.205, clamped to 100.
    assert_eq!(flesch_score("Go on."), 100.0);
}

#[test]
fn test_empty_text_yields_zero_metrics() {
    let metrics = compute_readability("");
    assert_eq!(metrics.flesch_score, 0.0);
    assert_eq!(metrics.passive_pct, 0.0);
}

#[test]
fn test_whitespace_only_text_yields_zero_metrics() {
    let metrics = compute_readability(" \n\t  ");
    assert_eq!(metrics.flesch_score, 0.0);
    assert_eq!(metrics.passive_pct, 0.0);
}

#[test]
fn test_terminators_only_yields_zero_metrics() {
    let metrics = compute_readability("?!...");
    assert_eq!(metrics.flesch_score, 0.0);
    assert_eq!(metrics.passive_pct, 0.0);
}

#[test]
fn test_score_is_deterministic_across_calls() {
    let text = "The quick brown fox jumps over the lazy dog. It barely noticed.";
    assert_eq!(flesch_score(text), flesch_score(text));
    assert_eq!(compute_readability(text), compute_readability(text));
}

#[test]
fn test_unterminated_text_counts_as_one_sentence() {
    // 1 sentence, 8 words, 11 estimated syllables:
    // 206.835 - 1.015 * 8 - 84.6 * 1.375 = 82.39, rounds to 82.4.
    let text = "The author wrote the report without much care";
    assert_eq!(flesch_score(text), 82.4);
}

#[test]
fn test_longer_sentences_score_lower() {
    let short = "We met. We spoke. We left.";
    let long = "We convened at the appointed location and subsequently \
                engaged in considerable conversation before departing.";
    assert!(flesch_score(short) > flesch_score(long));
}
