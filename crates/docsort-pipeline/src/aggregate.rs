//! Grouping records into output tables

use docsort_domain::{DocumentRecord, OutputTable};
use std::collections::HashMap;

/// Records grouped by project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// One table per project code, in order of first appearance
    pub projects: Vec<OutputTable>,

    /// Records whose code is the sentinel
    pub uncategorized: OutputTable,
}

impl Aggregation {
    /// Every record: project tables in order, then uncategorized
    pub fn merged(&self, name: &str) -> OutputTable {
        let mut merged = OutputTable::new(name);
        for table in &self.projects {
            merged.records.extend(table.records.iter().cloned());
        }
        merged
            .records
            .extend(self.uncategorized.records.iter().cloned());
        merged
    }

    /// Total number of records across all tables
    pub fn total_records(&self) -> usize {
        self.projects.iter().map(OutputTable::len).sum::<usize>() + self.uncategorized.len()
    }

    /// Table for one project code
    pub fn project(&self, code: &str) -> Option<&OutputTable> {
        self.projects.iter().find(|t| t.name == code)
    }
}

/// Group records by project code
///
/// Project tables are named after the code and keep insertion order. A
/// sentinel-coded record always goes to the uncategorized table.
pub fn aggregate<I>(records: I, uncategorized_table: &str) -> Aggregation
where
    I: IntoIterator<Item = DocumentRecord>,
{
    let mut projects: Vec<OutputTable> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut uncategorized = OutputTable::new(uncategorized_table);

    for record in records {
        if record.is_uncategorized() {
            uncategorized.records.push(record);
            continue;
        }
        let slot = *index.entry(record.project_code.clone()).or_insert_with(|| {
            projects.push(OutputTable::new(record.project_code.as_str()));
            projects.len() - 1
        });
        projects[slot].records.push(record);
    }

    Aggregation {
        projects,
        uncategorized,
    }
}
