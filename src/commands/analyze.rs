use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::analysis::{projection, readability, sentences, suggestions};
use crate::cli;
use crate::config;
use crate::core::{DocumentReport, RawMatch, ReportSummary};
use crate::io::{self, languagetool, output};

/// Validated inputs for the analyze command.
pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub matches_file: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Analyze every requested document and write the reports.
///
/// Documents are independent, and the whole pipeline is pure, so they
/// are analyzed in parallel. Report writing stays sequential to keep
/// output ordering stable.
pub fn analyze_documents(config: AnalyzeConfig) -> Result<()> {
    let raw_matches = match &config.matches_file {
        Some(path) => {
            // A matcher response carries offsets for exactly one text
            // snapshot; applying it to several documents would place
            // every suggestion in the wrong ones.
            if config.paths.len() > 1 {
                anyhow::bail!("--matches requires a single document path");
            }
            Some(
                languagetool::read_matches_file(path)
                    .with_context(|| format!("Failed to load matches from {}", path.display()))?,
            )
        }
        None => None,
    };

    let min_readability_chars = config::get_min_readability_chars();

    let mut reports: Vec<(usize, DocumentReport)> = config
        .paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            analyze_path(path, raw_matches.as_deref(), min_readability_chars)
                .map(|report| (index, report))
        })
        .collect::<Result<Vec<_>>>()?;
    reports.sort_by_key(|(index, _)| *index);

    let format = resolve_format(config.format);
    let mut writer = output::create_writer(config.output.as_deref(), format)?;
    for (_, report) in &reports {
        writer.write_report(report)?;
    }

    Ok(())
}

/// Analyze one document from disk.
pub fn analyze_path(
    path: &Path,
    raw_matches: Option<&[RawMatch]>,
    min_readability_chars: usize,
) -> Result<DocumentReport> {
    let markup = io::read_file(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    Ok(build_report(
        path,
        &markup,
        raw_matches.unwrap_or(&[]),
        min_readability_chars,
    ))
}

/// Run the full analysis pipeline over one markup snapshot.
///
/// The projection, metrics, and suggestion set are all derived from
/// this snapshot alone; nothing is carried over from earlier calls.
pub fn build_report(
    path: &Path,
    markup: &str,
    raw_matches: &[RawMatch],
    min_readability_chars: usize,
) -> DocumentReport {
    let projection = projection::project(markup);
    let plain_text = &projection.plain_text;
    let text_chars = plain_text.chars().count();

    let readability = if text_chars >= min_readability_chars {
        Some(readability::compute_readability(plain_text))
    } else {
        log::debug!(
            "{}: {} chars of text, below the readability threshold of {}",
            path.display(),
            text_chars,
            min_readability_chars
        );
        None
    };

    let suggestions = suggestions::project_suggestions(raw_matches, &projection.mapping);

    DocumentReport {
        path: path.to_path_buf(),
        generated_at: chrono::Utc::now(),
        summary: ReportSummary {
            markup_chars: markup.chars().count(),
            text_chars,
            words: plain_text.split_whitespace().count(),
            sentences: sentences::split(plain_text).len(),
            suggestions: suggestions.len(),
        },
        readability,
        suggestions,
    }
}

/// Pick the output format: explicit flag, then configured default,
/// then terminal.
fn resolve_format(flag: Option<cli::OutputFormat>) -> output::OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }

    match config::get_default_format().as_deref() {
        Some("json") => output::OutputFormat::Json,
        Some("markdown") => output::OutputFormat::Markdown,
        Some("terminal") | None => output::OutputFormat::Terminal,
        Some(other) => {
            log::warn!("Unknown default_format '{}', using terminal", other);
            output::OutputFormat::Terminal
        }
    }
}
