//! CSV output format for duration reports

use crate::stats::{mean_of, AggregationResult};
use std::path::Path;

/// CSV statistics output formatter
#[derive(Debug, Default)]
pub struct CsvStatsOutput {
    rows: Vec<CsvRow>,
}

#[derive(Debug, Clone)]
struct CsvRow {
    file: String,
    test_case: String,
    samples: usize,
    mean_secs: f64,
}

impl CsvStatsOutput {
    /// Create a new CSV stats output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row per test case from a file's aggregation result,
    /// keeping first-seen case order.
    pub fn add_file(&mut self, path: &Path, result: &AggregationResult) {
        for (name, durations) in result.iter() {
            self.rows.push(CsvRow {
                file: path.display().to_string(),
                test_case: name.to_string(),
                samples: durations.len(),
                mean_secs: mean_of(durations),
            });
        }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("file,test_case,samples,mean_secs\n");

        for row in &self.rows {
            output.push_str(&Self::escape_field(&row.file));
            output.push(',');
            output.push_str(&Self::escape_field(&row.test_case));
            output.push(',');
            output.push_str(&row.samples.to_string());
            output.push(',');
            output.push_str(&row.mean_secs.to_string());
            output.push('\n');
        }

        output
    }
}
