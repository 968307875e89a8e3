//! Recognized line pattern for passed-test durations
//!
//! CTest prints one line per finished test of the shape
//! `Test #<n>: <case> .......... Passed <seconds> sec`. This module
//! extracts the test-case name and duration from such lines; everything
//! else in the log is ignored.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern for a passed test line. `test_case` is restricted to
/// alphanumerics, underscore, and hyphen; `duration` must carry a
/// fractional part.
const LINE_PATTERN: &str =
    r"Test #\d+: (?P<test_case>[0-9a-zA-Z_-]+).*?Passed\s+(?P<duration>\d+\.\d+)";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("line pattern is a valid regex"))
}

/// A (test case, duration) pair extracted from one log line
#[derive(Debug, Clone, PartialEq)]
pub struct TestDurationSample {
    pub test_case: String,
    pub duration_secs: f64,
}

/// Match a single log line against the recognized pattern.
///
/// The pattern is searched anywhere in the line, not anchored. Returns
/// `None` for any line that does not match; a non-matching line is not
/// an error. Durations that do not parse to a finite number (e.g. a
/// digit run overflowing f64 to infinity) are treated as non-matching.
pub fn match_line(line: &str) -> Option<TestDurationSample> {
    let caps = line_regex().captures(line)?;
    let test_case = caps.name("test_case")?.as_str().to_string();
    let duration_secs: f64 = caps.name("duration")?.as_str().parse().ok()?;
    if !duration_secs.is_finite() {
        return None;
    }
    Some(TestDurationSample {
        test_case,
        duration_secs,
    })
}
