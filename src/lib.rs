//! ctstat - mean test-case durations from CTest log files
//!
//! This library scans directories of CTest-style text logs, extracts
//! (test case, duration) samples from passed-test lines, and reports the
//! arithmetic mean duration per test case per file.

pub mod cli;
pub mod csv_output;
pub mod json_output;
pub mod pattern;
pub mod report;
pub mod stats;
