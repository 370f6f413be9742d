use anyhow::{Context, Result};
use std::path::Path;

use crate::analysis::projection;
use crate::config;
use crate::io::{self, languagetool::CheckRequest};

/// Print a document's plain-text projection, or a ready-to-send
/// matcher request body when `as_request` is set.
///
/// This is the exact text the analysis pipeline maps offsets against,
/// so piping it to the matcher keeps response offsets consistent with
/// what `analyze --matches` expects.
pub fn extract_text(path: &Path, as_request: bool, language: Option<String>) -> Result<()> {
    let markup = io::read_file(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    let projection = projection::project(&markup);

    if as_request {
        let language = language.unwrap_or_else(config::get_language);
        let request = CheckRequest::new(projection.plain_text, language);
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!("{}", projection.plain_text);
    }

    Ok(())
}
