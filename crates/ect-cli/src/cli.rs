//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ect",
    version,
    about = "Earnings-call transcript segmentation and signal extraction",
    long_about = "Segment earnings-call transcripts into speaker turns, split prepared\n\
                  remarks from Q&A, and derive clinical/regulatory signal features,\n\
                  hedging rates, and header metadata as Parquet tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Derive segments and event features from an events file.
    Features(FeaturesArgs),

    /// Scan a single text for signal patterns and lexicon hits.
    Signals(SignalsArgs),
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// Events file: a JSON array of event objects, or JSONL with one event
    /// per line. Each event carries at least a "ticker"; "transcript" and
    /// pre-segmented "segments" are optional.
    #[arg(value_name = "EVENTS_FILE")]
    pub events_file: PathBuf,

    /// Output directory for Parquet files (default: data_processed).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "data_processed")]
    pub output_dir: PathBuf,

    /// Which section to scan for signal patterns.
    #[arg(long = "text-column", value_enum, default_value = "qa-text")]
    pub text_column: TextColumnArg,

    /// Parse and derive features without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SignalsArgs {
    /// Text to scan. Reads stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TextColumnArg {
    QaText,
    PreparedText,
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
