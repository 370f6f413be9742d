use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prosemap")]
#[command(about = "Prose readability and grammar suggestion analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze markup documents for readability and grammar suggestions
    Analyze {
        /// Markup documents to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Saved grammar matcher response (JSON) to project onto the
        /// document; only valid with a single path
        #[arg(long = "matches")]
        matches_file: Option<PathBuf>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the plain-text projection the grammar matcher would see
    Extract {
        /// Markup document to project
        path: PathBuf,

        /// Emit a ready-to-send matcher request body instead of bare text
        #[arg(long)]
        request: bool,

        /// Language tag for the request body (defaults to the configured language)
        #[arg(long)]
        language: Option<String>,
    },

    /// Initialize a prosemap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Terminal,
    /// Machine-readable report
    Json,
    /// Markdown report
    Markdown,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
        }
    }
}
