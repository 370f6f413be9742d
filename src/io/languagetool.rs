//! Wire format of the external grammar-matching service.
//!
//! Mirrors the LanguageTool v2 `check` exchange. The HTTP call itself
//! belongs to the owning service layer; this module gives that layer
//! typed request/response shapes and flattens responses into
//! [`RawMatch`] records for the analysis pipeline. Unknown response
//! fields are ignored rather than rejected.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::{Error, Result};
use crate::core::RawMatch;

/// Request body for the matcher's check endpoint: the plain-text
/// projection of a document plus a language tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckRequest {
    pub text: String,
    pub language: String,
}

impl CheckRequest {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}

/// Top-level matcher response.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// One finding as the matcher reports it.
#[derive(Clone, Debug, Deserialize)]
pub struct Match {
    pub message: String,
    #[serde(rename = "shortMessage", default)]
    pub short_message: String,
    pub offset: usize,
    pub length: usize,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
    pub rule: Rule,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Replacement {
    pub value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Rule {
    pub id: String,
    pub category: Category,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<Match> for RawMatch {
    fn from(m: Match) -> Self {
        RawMatch {
            offset: m.offset,
            length: m.length,
            message: m.message,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            category: m.rule.category.id,
        }
    }
}

/// Parse a serialized matcher response into raw matches, preserving
/// the matcher's ordering.
pub fn parse_matches(json: &str) -> Result<Vec<RawMatch>> {
    let response: CheckResponse = serde_json::from_str(json)?;
    Ok(response.matches.into_iter().map(RawMatch::from).collect())
}

/// Read and parse a matcher response stored on disk.
pub fn read_matches_file(path: &Path) -> Result<Vec<RawMatch>> {
    let contents = std::fs::read_to_string(path)?;
    parse_matches(&contents).map_err(|e| Error::invalid_matches(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const RESPONSE: &str = indoc! {r#"
        {
          "software": {"name": "LanguageTool", "version": "6.3"},
          "matches": [
            {
              "message": "Possible spelling mistake found.",
              "shortMessage": "Spelling mistake",
              "offset": 0,
              "length": 3,
              "replacements": [{"value": "The"}, {"value": "Ten"}],
              "rule": {
                "id": "MORFOLOGIK_RULE_EN_US",
                "category": {"id": "TYPOS", "name": "Possible Typo"}
              }
            },
            {
              "message": "Consider a shorter phrasing.",
              "offset": 8,
              "length": 11,
              "replacements": [],
              "rule": {
                "id": "WORDINESS_RULE",
                "category": {"id": "WORDINESS", "name": "Wordiness"}
              }
            }
          ]
        }
    "#};

    #[test]
    fn test_parse_matches_flattens_the_response() {
        let matches = parse_matches(RESPONSE).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].offset, 0);
        assert_eq!(matches[0].length, 3);
        assert_eq!(matches[0].category, "TYPOS");
        assert_eq!(matches[0].replacements, vec!["The", "Ten"]);
        assert_eq!(matches[1].category, "WORDINESS");
        assert!(matches[1].replacements.is_empty());
    }

    #[test]
    fn test_parse_matches_tolerates_missing_optional_fields() {
        // No shortMessage, no replacements, unknown extra fields.
        let json = r#"{"matches": [{"message": "m", "offset": 1, "length": 2,
            "rule": {"id": "X", "category": {"id": "GRAMMAR"}}, "context": {}}]}"#;

        let matches = parse_matches(json).unwrap();
        assert_eq!(matches[0].offset, 1);
        assert_eq!(matches[0].category, "GRAMMAR");
    }

    #[test]
    fn test_empty_response_yields_no_matches() {
        assert!(parse_matches("{}").unwrap().is_empty());
        assert!(parse_matches(r#"{"matches": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_response_is_a_json_error() {
        assert!(parse_matches("not json").is_err());
        assert!(parse_matches(r#"{"matches": [{"offset": 1}]}"#).is_err());
    }

    #[test]
    fn test_check_request_round_trips() {
        let request = CheckRequest::new("Hello world", "en-US");
        let json = serde_json::to_string(&request).unwrap();
        let back: CheckRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
