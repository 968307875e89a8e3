//! Per-file aggregation and report generation
//!
//! One linear pass over each log file: scan every line, collect duration
//! samples for matching lines, then emit the per-case mean block. Fully
//! synchronous; each file's result is independent and discarded once its
//! report has been written.

use crate::cli::OutputFormat;
use crate::csv_output::CsvStatsOutput;
use crate::json_output::{JsonCaseStat, JsonFileReport};
use crate::pattern;
use crate::stats::{format_mean, mean_of, AggregationResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while aggregating or reporting log files
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("{}: log content is not valid UTF-8", .0.display())]
    Decode(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Scan one log file and group duration samples by test-case name.
///
/// The whole file is read and decoded before any line is scanned; a
/// failure produces no partial result. Lines that do not match the
/// recognized pattern are skipped silently.
pub fn aggregate(path: &Path) -> Result<AggregationResult> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(ReportError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text =
        String::from_utf8(bytes).map_err(|_| ReportError::Decode(path.to_path_buf()))?;

    let mut result = AggregationResult::new();
    for line in text.lines() {
        if let Some(sample) = pattern::match_line(line) {
            result.record(&sample.test_case, sample.duration_secs);
        }
    }

    debug!(
        file = %path.display(),
        cases = result.len(),
        "aggregated log file"
    );
    Ok(result)
}

/// Write the text report block for a single log file.
///
/// One header line carrying the path exactly as passed in, one line per
/// test case in first-seen order (`<name> <mean> sec`), then a trailing
/// blank line.
pub fn report_to(path: &Path, out: &mut impl Write) -> Result<()> {
    let result = aggregate(path)?;
    writeln!(out, "{}", path.display())?;
    for (name, durations) in result.iter() {
        writeln!(out, "{} {} sec", name, format_mean(mean_of(durations)))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Build the machine-readable report for a single log file
fn file_report(path: &Path) -> Result<JsonFileReport> {
    let result = aggregate(path)?;
    let cases = result
        .iter()
        .map(|(name, durations)| JsonCaseStat {
            name: name.to_string(),
            samples: durations.len(),
            mean_secs: mean_of(durations),
        })
        .collect();
    Ok(JsonFileReport {
        file: path.display().to_string(),
        cases,
    })
}

/// List the entries directly inside a log directory (non-recursive), in
/// platform order, or lexicographic path order when `sorted` is set.
fn list_entries(directory: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    if !directory.exists() {
        return Err(ReportError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(directory)? {
        entries.push(entry?.path());
    }
    if sorted {
        entries.sort();
    }
    Ok(entries)
}

/// Report every file directly inside `directory` in the requested format,
/// halting on the first error.
pub fn run(
    directory: &Path,
    format: OutputFormat,
    sorted: bool,
    out: &mut impl Write,
) -> Result<()> {
    let entries = list_entries(directory, sorted)?;
    debug!(
        directory = %directory.display(),
        files = entries.len(),
        "reporting log directory"
    );

    match format {
        OutputFormat::Text => {
            for path in &entries {
                report_to(path, out)?;
            }
        }
        OutputFormat::Json => {
            let mut reports = Vec::with_capacity(entries.len());
            for path in &entries {
                reports.push(file_report(path)?);
            }
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut csv = CsvStatsOutput::new();
            for path in &entries {
                let result = aggregate(path)?;
                csv.add_file(path, &result);
            }
            out.write_all(csv.to_csv().as_bytes())?;
        }
    }
    Ok(())
}
