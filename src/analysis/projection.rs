//! Plain-text projection of markup documents.
//!
//! The external grammar matcher only ever sees plain text, so every
//! offset it reports has to be translated back into the tag-annotated
//! document before it can drive highlighting. This module builds the
//! projection and the offset correspondence in a single scan, which
//! guarantees the two can never disagree about what the matcher saw.

/// Bidirectional correspondence between markup character positions and
/// plain-text character positions, covering only positions outside
/// tags.
///
/// Backed by two dense index arrays rather than hash maps: positions
/// are contiguous integers, so indexed lookup is O(1) and the layout
/// stays cache-friendly. The plain-text side is contiguous `0..N-1`
/// by construction and strictly increasing on the markup side.
///
/// A mapping is only valid for the exact markup string it was built
/// from. It carries no version marker, so callers rebuild it on every
/// new snapshot instead of caching it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetMapping {
    text_to_markup: Vec<usize>,
    markup_to_text: Vec<Option<usize>>,
}

impl OffsetMapping {
    /// Number of plain-text characters covered by the mapping.
    pub fn text_len(&self) -> usize {
        self.text_to_markup.len()
    }

    /// Number of markup characters scanned to build the mapping.
    pub fn markup_len(&self) -> usize {
        self.markup_to_text.len()
    }

    /// Translate a plain-text position into a markup position.
    ///
    /// Fails soft: a position with no recorded correspondence (which
    /// includes one-past-the-end of the plain text) comes back
    /// unchanged. Suggestion highlighting must degrade, not crash, so
    /// callers treat out-of-range results as approximate rather than
    /// erroring.
    pub fn map_text_to_markup(&self, offset: usize) -> usize {
        self.text_to_markup.get(offset).copied().unwrap_or(offset)
    }

    /// Translate a markup position into a plain-text position.
    ///
    /// Positions inside tags have no correspondence and fail soft the
    /// same way as [`map_text_to_markup`](Self::map_text_to_markup).
    pub fn map_markup_to_text(&self, offset: usize) -> usize {
        self.markup_to_text
            .get(offset)
            .copied()
            .flatten()
            .unwrap_or(offset)
    }
}

/// A markup document's plain-text projection together with the offset
/// mapping tying the two coordinate spaces together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextProjection {
    pub plain_text: String,
    pub mapping: OffsetMapping,
}

/// Strip tags from a markup string, recording for every emitted
/// character where in the markup it came from.
///
/// The scan tracks a single `in_tag` flag. `<` outside a tag enters
/// tag mode and `>` inside one exits it; both delimiters are excluded
/// from the plain text. There is no nested-tag detection: a second
/// `<` inside an open tag is absorbed as tag content, and a tag that
/// never closes swallows the remainder of the input. Malformed markup
/// is therefore lossy but never an error.
///
/// All indexing is by character (code point), not byte, matching how
/// the matcher counts offsets.
pub fn project(markup: &str) -> TextProjection {
    let mut plain_text = String::new();
    let mut text_to_markup = Vec::new();
    let mut markup_to_text = Vec::new();
    let mut in_tag = false;

    for (markup_pos, ch) in markup.chars().enumerate() {
        if ch == '<' {
            in_tag = true;
        } else if ch == '>' && in_tag {
            in_tag = false;
            markup_to_text.push(None);
            continue;
        }

        if in_tag {
            markup_to_text.push(None);
        } else {
            markup_to_text.push(Some(text_to_markup.len()));
            text_to_markup.push(markup_pos);
            plain_text.push(ch);
        }
    }

    TextProjection {
        plain_text,
        mapping: OffsetMapping {
            text_to_markup,
            markup_to_text,
        },
    }
}
