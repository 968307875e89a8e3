//! Per-file duration aggregation and mean statistics

use std::collections::HashMap;

/// Duration samples grouped by test-case name, first-seen order preserved.
///
/// One instance covers exactly one log file: created empty, populated by
/// a single in-order scan of the file, consumed once at report time.
/// Results are never merged across files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    order: Vec<String>,
    samples: HashMap<String, Vec<f64>>,
}

impl AggregationResult {
    /// Create an empty aggregation result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one duration sample for a test case, inserting the case in
    /// the reporting order on first sight.
    pub fn record(&mut self, test_case: &str, duration_secs: f64) {
        match self.samples.get_mut(test_case) {
            Some(durations) => durations.push(duration_secs),
            None => {
                self.order.push(test_case.to_string());
                self.samples
                    .insert(test_case.to_string(), vec![duration_secs]);
            }
        }
    }

    /// Number of distinct test cases seen
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Durations recorded for a test case, in scan order
    pub fn durations(&self, test_case: &str) -> Option<&[f64]> {
        self.samples.get(test_case).map(Vec::as_slice)
    }

    /// Mean duration for a test case, `None` if the case was never seen
    pub fn mean(&self, test_case: &str) -> Option<f64> {
        self.samples.get(test_case).map(|d| mean_of(d))
    }

    /// Iterate `(name, durations)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.samples[name].as_slice()))
    }
}

/// Arithmetic mean of a duration slice, 0.0 for an empty slice
pub fn mean_of(durations: &[f64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    durations.iter().sum::<f64>() / durations.len() as f64
}

/// Render a mean duration with 4 significant digits.
///
/// Trailing zeros are trimmed but at least one fractional digit is kept
/// (`2.0`, `0.034`, `1.235`). Magnitudes outside `[1e-4, 1e4)` fall back
/// to scientific notation. Only the underlying mean value is a contract;
/// this rendering matches conventional test-report readability.
pub fn format_mean(value: f64) -> String {
    format_significant(value, 4)
}

fn format_significant(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= digits {
        return format!("{:.*e}", (digits - 1) as usize, value);
    }
    let decimals = (digits - 1 - exponent).max(1) as usize;
    trim_fraction(format!("{:.*}", decimals, value))
}

fn trim_fraction(mut rendered: String) -> String {
    if !rendered.contains('.') {
        return rendered;
    }
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.push('0');
    }
    rendered
}
