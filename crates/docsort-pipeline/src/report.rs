//! Run report for a batch

use crate::parser::LineOutcome;
use serde::Serialize;

/// A table that could not be exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedTable {
    /// Table name
    pub table: String,
    /// Error message
    pub reason: String,
}

/// Counters and export results collected during one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Non-empty data lines considered (header excluded)
    pub lines_read: usize,

    /// Records emitted
    pub records: usize,

    /// Lines skipped for having too few fields
    pub malformed: usize,

    /// Lines skipped for a repeated identity key
    pub duplicates: usize,

    /// Emitted records that resolved to the sentinel code
    pub uncategorized: usize,

    /// Locations of the tables written, in export order
    pub tables_written: Vec<String>,

    /// Tables whose export failed
    pub tables_failed: Vec<FailedTable>,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one parsed line
    pub fn record_outcome(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Record(record) => {
                self.records += 1;
                if record.is_uncategorized() {
                    self.uncategorized += 1;
                }
            }
            LineOutcome::Malformed { .. } => self.malformed += 1,
            LineOutcome::Duplicate(_) => self.duplicates += 1,
        }
    }

    /// Record a successful export
    pub fn record_written(&mut self, location: impl Into<String>) {
        self.tables_written.push(location.into());
    }

    /// Record a failed export
    pub fn record_failed(&mut self, table: impl Into<String>, reason: impl Into<String>) {
        self.tables_failed.push(FailedTable {
            table: table.into(),
            reason: reason.into(),
        });
    }

    /// Whether every export succeeded
    pub fn success(&self) -> bool {
        self.tables_failed.is_empty()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Run Summary".to_string(),
            "===========".to_string(),
            format!("Lines read: {}", self.lines_read),
            format!("Records: {}", self.records),
            format!("Uncategorized: {}", self.uncategorized),
            format!("Malformed: {}", self.malformed),
            format!("Duplicates: {}", self.duplicates),
            format!("Tables written: {}", self.tables_written.len()),
        ];

        if !self.tables_failed.is_empty() {
            lines.push(format!("Tables failed: {}", self.tables_failed.len()));
            for failed in &self.tables_failed {
                lines.push(format!("  {}: {}", failed.table, failed.reason));
            }
        }

        lines.join("\n")
    }
}
