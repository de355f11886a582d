//! CLI argument definitions for the mailing-label workflow.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cardlabels",
    version,
    about = "Mailing-label workflow - turn a mailing-list export into print-ready labels",
    long_about = "Turn a mailing-list CSV export into a print-ready label CSV.\n\n\
                  Applies per-country address templates and writes the fixed\n\
                  Prefix,FirstName,LastName,Country,Line1..Line5 schema for mail merge."
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
    /// Download the mailing-list CSV from the configured sheet.
    Download(DownloadArgs),

    /// Build the processed labels CSV for mail merge.
    BuildLabels(BuildLabelsArgs),
}

#[derive(Parser)]
pub struct DownloadArgs {
    /// Target year.
    #[arg(long = "year")]
    pub year: i32,

    /// Sheet URL (defaults to SHEET_URL from the environment / .env).
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Output file or directory (defaults to <raw data dir>/<year>/).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BuildLabelsArgs {
    /// Year, used to infer default input and output paths.
    #[arg(long = "year")]
    pub year: Option<i32>,

    /// Input raw CSV path (defaults to <raw data dir>/<year>/mailing_list.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file or directory (defaults to <processed data dir>/<year>/).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Preview the first output lines on stdout without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
