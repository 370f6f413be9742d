//! Heuristic syllable estimation for readability scoring.

/// Estimate the syllable count of a single word.
///
/// The word is lowercased and stripped to ASCII letters, then
/// syllables are counted as maximal runs of vowels (`y` counts as a
/// vowel), with one subtracted for a trailing silent `e` when more
/// than one run was found. Every word yields at least one syllable,
/// including words that normalize to nothing.
pub fn count(word: &str) -> usize {
    let normalized: String = word
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .collect();

    if normalized.is_empty() {
        return 1;
    }

    let mut syllables = 0;
    let mut previous_was_vowel = false;
    for ch in normalized.chars() {
        let vowel = is_vowel(ch);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    if normalized.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
