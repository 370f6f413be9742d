use crate::core::{DocumentReport, Suggestion, SuggestionKind};
use anyhow::Context;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DocumentReport) -> anyhow::Result<()>;
}

/// Flesch band label, matching the bands the editor's readability
/// meter displays.
pub fn readability_level(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy"
    } else if score >= 80.0 {
        "Easy"
    } else if score >= 70.0 {
        "Fairly Easy"
    } else if score >= 60.0 {
        "Standard"
    } else if score >= 50.0 {
        "Fairly Difficult"
    } else if score >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}

/// Passive-voice band label.
pub fn passive_level(pct: f64) -> &'static str {
    if pct <= 10.0 {
        "Excellent"
    } else if pct <= 20.0 {
        "Good"
    } else if pct <= 30.0 {
        "Fair"
    } else {
        "High"
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_readability(report)?;
        self.write_suggestions(&report.suggestions)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Prosemap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Document: {}", report.path.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Markup Characters | {} |",
            report.summary.markup_chars
        )?;
        writeln!(
            self.writer,
            "| Text Characters | {} |",
            report.summary.text_chars
        )?;
        writeln!(self.writer, "| Words | {} |", report.summary.words)?;
        writeln!(self.writer, "| Sentences | {} |", report.summary.sentences)?;
        writeln!(
            self.writer,
            "| Suggestions | {} |",
            report.summary.suggestions
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_readability(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Readability")?;
        writeln!(self.writer)?;

        match &report.readability {
            Some(metrics) => {
                writeln!(self.writer, "| Metric | Value | Rating |")?;
                writeln!(self.writer, "|--------|-------|--------|")?;
                writeln!(
                    self.writer,
                    "| Flesch Reading Ease | {:.1} | {} |",
                    metrics.flesch_score,
                    readability_level(metrics.flesch_score)
                )?;
                writeln!(
                    self.writer,
                    "| Passive Voice | {:.1}% | {} |",
                    metrics.passive_pct,
                    passive_level(metrics.passive_pct)
                )?;
            }
            None => {
                writeln!(self.writer, "Not scored: text is too short.")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_suggestions(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Suggestions")?;
        writeln!(self.writer)?;

        if suggestions.is_empty() {
            writeln!(self.writer, "No suggestions.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Range | Type | Message | Replacements |")?;
        writeln!(self.writer, "|-------|------|---------|--------------|")?;
        for suggestion in suggestions {
            writeln!(
                self.writer,
                "| {}..{} | {} | {} | {} |",
                suggestion.start,
                suggestion.end,
                suggestion.kind,
                suggestion.message,
                suggestion.replacements.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DocumentReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Document: {}", report.path.display()).bold()
        )?;
        writeln!(
            self.writer,
            "  {} words, {} sentences",
            report.summary.words, report.summary.sentences
        )?;

        match &report.readability {
            Some(metrics) => {
                let score_label = format!(
                    "{:.1} ({})",
                    metrics.flesch_score,
                    readability_level(metrics.flesch_score)
                );
                let passive_label = format!(
                    "{:.1}% ({})",
                    metrics.passive_pct,
                    passive_level(metrics.passive_pct)
                );
                writeln!(
                    self.writer,
                    "  Flesch Reading Ease: {}",
                    colorize_flesch(metrics.flesch_score, &score_label)
                )?;
                writeln!(
                    self.writer,
                    "  Passive Voice: {}",
                    colorize_passive(metrics.passive_pct, &passive_label)
                )?;
            }
            None => {
                writeln!(
                    self.writer,
                    "  Readability: {}",
                    "not scored (text too short)".dimmed()
                )?;
            }
        }

        if report.suggestions.is_empty() {
            writeln!(self.writer, "  {}", "No suggestions".green())?;
        } else {
            writeln!(
                self.writer,
                "  {} suggestion(s):",
                report.suggestions.len()
            )?;
            for suggestion in &report.suggestions {
                self.write_suggestion(suggestion)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_suggestion(&mut self, suggestion: &Suggestion) -> anyhow::Result<()> {
        let label = format!("[{}]", suggestion.kind);
        let label = match suggestion.kind {
            SuggestionKind::Spelling => label.red(),
            SuggestionKind::Grammar => label.yellow(),
            SuggestionKind::Style => label.blue(),
            SuggestionKind::Punctuation => label.cyan(),
        };

        write!(
            self.writer,
            "    {} {}..{} {}",
            label, suggestion.start, suggestion.end, suggestion.message
        )?;
        if !suggestion.replacements.is_empty() {
            write!(
                self.writer,
                " {}",
                format!("(try: {})", suggestion.replacements.join(", ")).dimmed()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn colorize_flesch(score: f64, label: &str) -> ColoredString {
    if score >= 80.0 {
        label.green()
    } else if score >= 60.0 {
        label.blue()
    } else if score >= 50.0 {
        label.yellow()
    } else {
        label.red()
    }
}

fn colorize_passive(pct: f64, label: &str) -> ColoredString {
    if pct <= 10.0 {
        label.green()
    } else if pct <= 20.0 {
        label.blue()
    } else if pct <= 30.0 {
        label.yellow()
    } else {
        label.red()
    }
}

/// Build a writer for the chosen format, targeting either a file or
/// stdout.
pub fn create_writer(
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(boxed_writer(format, file))
        }
        None => Ok(boxed_writer(format, std::io::stdout())),
    }
}

fn boxed_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
