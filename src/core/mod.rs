pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One finding from the external grammar matcher, in plain-text
/// character coordinates.
///
/// Records arrive already parsed and shape-checked by the boundary
/// layer; the analysis pipeline treats them as well-formed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawMatch {
    pub offset: usize,
    pub length: usize,
    pub message: String,
    pub replacements: Vec<String>,
    pub category: String,
}

/// Classification of a suggestion, derived from the matcher's rule
/// category identifier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Grammar,
    Spelling,
    Style,
    Punctuation,
}

impl SuggestionKind {
    /// Classify a matcher category identifier.
    ///
    /// Unknown categories fall back to `Grammar` rather than failing,
    /// so new matcher rule categories degrade to a generic label.
    pub fn from_category(category: &str) -> Self {
        match category {
            "TYPOS" | "TYPO" => SuggestionKind::Spelling,
            "GRAMMAR" => SuggestionKind::Grammar,
            "STYLE" | "REDUNDANCY" | "WORDINESS" => SuggestionKind::Style,
            "PUNCTUATION" => SuggestionKind::Punctuation,
            _ => SuggestionKind::Grammar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Grammar => "grammar",
            SuggestionKind::Spelling => "spelling",
            SuggestionKind::Style => "style",
            SuggestionKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified finding positioned in markup coordinates.
///
/// `start..end` is a half-open character range into the original
/// markup string, not its plain-text projection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    pub replacements: Vec<String>,
}

/// Readability metrics for one text snapshot.
///
/// Both values are on a 0-100 scale, rounded to one decimal place.
/// Computed fresh per call; no incremental state is kept between
/// snapshots.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ReadabilityMetrics {
    pub flesch_score: f64,
    pub passive_pct: f64,
}

/// Aggregate counts for one analyzed document.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub markup_chars: usize,
    pub text_chars: usize,
    pub words: usize,
    pub sentences: usize,
    pub suggestions: usize,
}

/// Full analysis output for one document.
///
/// `readability` is absent when the plain text was too short to score
/// meaningfully. The suggestion list is the complete set for this
/// snapshot; consumers replace any previously stored set wholesale.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityMetrics>,
    pub suggestions: Vec<Suggestion>,
}
