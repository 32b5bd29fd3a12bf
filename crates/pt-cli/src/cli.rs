//! CLI surface and dispatch
//!
//! Parses arguments, sets up logging, runs the triage pipeline, and writes
//! the report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use pt_core::{CommentParser, ParserConfig, ReportData, Severity, TextReport};

/// pr-triage - PR review comment triage
#[derive(Debug, Parser)]
#[command(name = "pr-triage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON file of PR review comments
    pub input: PathBuf,

    /// Keep only comments whose reviewer login contains this substring
    pub reviewer: Option<String>,

    /// Keep only comments at or above this severity
    #[arg(long, short, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Report format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Report format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// Pretty-printed JSON report
    Json,
    /// Compact JSON report
    JsonCompact,
}

/// Severity threshold options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    /// Critical comments only
    Critical,
    /// Critical and high
    High,
    /// Critical, high, and medium
    Medium,
    /// All severities
    Unknown,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::High => Severity::High,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::Unknown => Severity::Unknown,
        }
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    execute(cli)
}

/// Map argument errors onto the exit-code contract
///
/// Help and version requests exit 0. Every argument error prints clap's
/// usage message and exits 1, with an invocation example added when the
/// input path is missing.
fn handle_parse_error(err: clap::Error) -> Result<()> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(())
        }
        kind => {
            err.print()?;
            if kind == ErrorKind::MissingRequiredArgument {
                eprintln!("\nExample: pr-triage /tmp/pr_comments.json gemini");
            }
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the triage pipeline and write the report
fn execute(cli: Cli) -> Result<()> {
    use colored::Colorize;

    info!("Reading review comments from {}", cli.input.display());

    let parser = CommentParser::with_config(ParserConfig {
        reviewer_filter: cli.reviewer,
        min_severity: cli.severity.map(Severity::from),
    });
    let comments = parser.parse_file(&cli.input)?;

    let report = match cli.format {
        ReportFormat::Text => TextReport::new().render(&comments),
        ReportFormat::Json => {
            let mut json = ReportData::from_comments(comments).to_json_pretty()?;
            json.push('\n');
            json
        }
        ReportFormat::JsonCompact => {
            let mut json = ReportData::from_comments(comments).to_json()?;
            json.push('\n');
            json
        }
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &report)
                .context(format!("Failed to write to {}", path.display()))?;
            eprintln!("{} Wrote report to {}", "✓".green(), path.display());
        }
        None => {
            std::io::stdout()
                .write_all(report.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["pr-triage", "comments.json", "gemini"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("comments.json"));
        assert_eq!(cli.reviewer.as_deref(), Some("gemini"));
        assert!(matches!(cli.format, ReportFormat::Text));
        assert!(cli.severity.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = Cli::try_parse_from(["pr-triage"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_severity_arg_mapping() {
        assert_eq!(Severity::from(SeverityArg::Critical), Severity::Critical);
        assert_eq!(Severity::from(SeverityArg::High), Severity::High);
        assert_eq!(Severity::from(SeverityArg::Medium), Severity::Medium);
        assert_eq!(Severity::from(SeverityArg::Unknown), Severity::Unknown);
    }

    #[test]
    fn test_format_values() {
        // Test that all enum values can be parsed
        assert!(ReportFormat::from_str("text", true).is_ok());
        assert!(ReportFormat::from_str("json", true).is_ok());
        assert!(ReportFormat::from_str("json-compact", true).is_ok());
        assert!(ReportFormat::from_str("yaml", true).is_err());
    }
}
