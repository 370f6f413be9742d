//! Sentence segmentation over plain text.

/// Split text into sentence candidates on runs of `.`, `!`, and `?`.
///
/// Segments that are empty or all-whitespace after trimming are
/// dropped; the returned slices themselves are untrimmed. There is no
/// special-casing of abbreviations, decimal numbers, or ellipses, so
/// "Mr. Smith" and "3.14" each split at the period. Both the
/// readability score and the passive detector tolerate the resulting
/// over- and under-segmentation.
pub fn split(text: &str) -> Vec<&str> {
    text.split(is_terminator)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
