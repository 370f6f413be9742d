use anyhow::Result;
use clap::Parser;
use prosemap::cli::{Cli, Commands};
use prosemap::commands;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            paths,
            matches_file,
            format,
            output,
        } => commands::analyze::analyze_documents(commands::analyze::AnalyzeConfig {
            paths,
            matches_file,
            format,
            output,
        }),
        Commands::Extract {
            path,
            request,
            language,
        } => commands::extract::extract_text(&path, request, language),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
