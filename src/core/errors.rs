//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for prosemap operations
///
/// The analysis pipeline itself is total and never constructs these:
/// malformed markup, degenerate text, and unmapped offsets all have
/// defined results. Errors only arise at the I/O and configuration
/// boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A matcher response that could not be interpreted
    #[error("Invalid matches file {path}: {message}")]
    InvalidMatches { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-matches error with path context
    pub fn invalid_matches(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidMatches {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the prosemap error type
pub type Result<T> = std::result::Result<T, Error>;
