//! CLI argument definitions for FairLens.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fairlens",
    version,
    about = "FairLens - Profile tabular datasets for demographic and fairness bias",
    long_about = "Profile a tabular dataset for demographic/fairness bias.\n\n\
                  Infers column types and sensitivity, measures representation skew,\n\
                  detects proxy correlations with sensitive attributes, computes\n\
                  fairness metrics, and suggests mitigations with simulated impact."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a CSV dataset for bias and print a report.
    Analyze(AnalyzeArgs),

    /// Ask the scripted assistant about an analysis.
    Ask(AskArgs),

    /// List the built-in sensitive-attribute name patterns.
    Patterns,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a header-first CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Sensitive columns to audit (comma separated or repeated).
    #[arg(
        long = "sensitive",
        value_name = "COLUMNS",
        value_delimiter = ',',
        required = true
    )]
    pub sensitive: Vec<String>,

    /// Target/outcome column for class-imbalance metrics.
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: Option<String>,

    /// Emit the full analysis result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Simulate applying recommendation N (1-based) and report the new score.
    #[arg(long = "simulate", value_name = "N")]
    pub simulate: Option<usize>,

    /// Label recorded with this run in the session history.
    #[arg(long = "label", value_name = "TEXT")]
    pub label: Option<String>,
}

#[derive(Parser)]
pub struct AskArgs {
    /// Question for the assistant.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// CSV file to analyze before answering; without it the assistant
    /// has no results to draw on.
    #[arg(long = "input", value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Sensitive columns for the backing analysis.
    #[arg(long = "sensitive", value_name = "COLUMNS", value_delimiter = ',')]
    pub sensitive: Vec<String>,

    /// Target/outcome column for the backing analysis.
    #[arg(long = "target", value_name = "COLUMN")]
    pub target: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
