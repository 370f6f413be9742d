//! Projection of matcher findings into markup coordinates.

use crate::core::{RawMatch, Suggestion, SuggestionKind};

use super::projection::OffsetMapping;

/// Convert raw matcher findings into classified suggestions positioned
/// in markup coordinates.
///
/// Input order is preserved, so the output stays in ascending
/// plain-text offset order as delivered by the matcher. Offsets with
/// no recorded correspondence pass through unchanged per the mapping's
/// fallback policy — in particular a match ending exactly at the end
/// of the text keeps its plain-text end offset.
///
/// The result is the complete, authoritative suggestion set for the
/// text that produced `mapping`. Consumers persisting suggestions
/// replace any prior set for the same document wholesale; merging
/// leaves stale entries overlapping fresh ones.
pub fn project_suggestions(matches: &[RawMatch], mapping: &OffsetMapping) -> Vec<Suggestion> {
    matches
        .iter()
        .map(|raw| project_match(raw, mapping))
        .collect()
}

fn project_match(raw: &RawMatch, mapping: &OffsetMapping) -> Suggestion {
    Suggestion {
        start: mapping.map_text_to_markup(raw.offset),
        end: mapping.map_text_to_markup(raw.offset + raw.length),
        kind: SuggestionKind::from_category(&raw.category),
        message: raw.message.clone(),
        replacements: raw.replacements.clone(),
    }
}
