//! JSON output format for duration reports

use serde::{Deserialize, Serialize};

/// Mean duration statistics for one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCaseStat {
    /// Test-case name as it appeared in the log
    pub name: String,
    /// Number of duration samples observed
    pub samples: usize,
    /// Arithmetic mean duration in seconds, full f64 precision
    pub mean_secs: f64,
}

/// Report for a single log file, cases in first-seen order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFileReport {
    /// File path exactly as processed
    pub file: String,
    pub cases: Vec<JsonCaseStat>,
}
