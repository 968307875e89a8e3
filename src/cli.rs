//! CLI argument parsing for ctstat

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for duration reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text blocks (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "ctstat")]
#[command(version)]
#[command(about = "Mean test-case durations from CTest log files", long_about = None)]
pub struct Cli {
    /// Directory containing log files to report on (non-recursive)
    #[arg(value_name = "DIRECTORY", default_value = "./log")]
    pub directory: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Sort file names before processing (directory order is otherwise
    /// platform-defined)
    #[arg(long = "sorted")]
    pub sorted: bool,

    /// Print debug diagnostics to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
