// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    DocumentReport, RawMatch, ReadabilityMetrics, ReportSummary, Suggestion, SuggestionKind,
};

pub use crate::analysis::{
    compute_readability, flesch_score, passive_percentage, project, project_suggestions,
    OffsetMapping, TextProjection,
};

pub use crate::analysis::{sentences, syllables};

pub use crate::io::languagetool::{parse_matches, CheckRequest, CheckResponse};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::commands::analyze::build_report;
