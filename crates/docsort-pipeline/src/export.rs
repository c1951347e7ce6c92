//! CSV export of output tables

use crate::aggregate::Aggregation;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::report::RunReport;
use docsort_domain::record::columns;
use docsort_domain::traits::TableWriter;
use docsort_domain::OutputTable;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Writes each table to `<dir>/<name>.csv`
///
/// Existing files are overwritten. The header row is always written, so an
/// empty table produces a header-only file.
#[derive(Debug, Clone)]
pub struct CsvDirectoryWriter {
    dir: PathBuf,
}

impl CsvDirectoryWriter {
    /// Writer for an existing directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the directory (and parents) if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a table with this name is written to
    pub fn path_for(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", table))
    }
}

impl TableWriter for CsvDirectoryWriter {
    type Error = PipelineError;

    fn write_table(&mut self, table: &OutputTable, with_extraction: bool) -> Result<String> {
        let path = self.path_for(&table.name);
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(columns(with_extraction))?;
        for record in &table.records {
            writer.write_record(record.to_row(with_extraction))?;
        }
        writer.flush()?;

        Ok(path.display().to_string())
    }
}

/// Export every table of an aggregation
///
/// Order: project tables, the uncategorized table (only when it has rows),
/// then the merged table (always). A failure is logged and recorded in the
/// report; the remaining tables are still attempted.
pub fn export_all<W>(
    writer: &mut W,
    aggregation: &Aggregation,
    config: &PipelineConfig,
    report: &mut RunReport,
) where
    W: TableWriter,
    W::Error: Display,
{
    let with_extraction = config.extract_references;

    let mut export = |table: &OutputTable| match writer.write_table(table, with_extraction) {
        Ok(location) => {
            info!("Created {} ({} records)", location, table.len());
            report.record_written(location);
        }
        Err(e) => {
            error!("Failed to export table {}: {}", table.name, e);
            report.record_failed(table.name.as_str(), e.to_string());
        }
    };

    for table in &aggregation.projects {
        export(table);
    }
    if !aggregation.uncategorized.is_empty() {
        export(&aggregation.uncategorized);
    }
    export(&aggregation.merged(&config.merged_table));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use docsort_domain::{DocumentRecord, ProjectEntry, ProjectMatch};

    /// Writer that fails for one table name and remembers the rest
    struct FlakyWriter {
        fail_on: String,
        written: Vec<(String, usize)>,
    }

    impl TableWriter for FlakyWriter {
        type Error = String;

        fn write_table(&mut self, table: &OutputTable, _with_extraction: bool) -> std::result::Result<String, String> {
            if table.name == self.fail_on {
                return Err("disk full".to_string());
            }
            self.written.push((table.name.clone(), table.len()));
            Ok(table.name.clone())
        }
    }

    fn record(file: &str, code: &str) -> DocumentRecord {
        let project = ProjectEntry::new(code, "Name", Vec::<String>::new()).to_match();
        DocumentRecord::new(file, "D", "2024-01-01", project)
    }

    #[test]
    fn test_failure_is_isolated() {
        let agg = aggregate(
            vec![record("1", "PD002"), record("2", "PD031")],
            "UNCATEGORIZED",
        );
        let mut writer = FlakyWriter {
            fail_on: "PD002".to_string(),
            written: Vec::new(),
        };
        let mut report = RunReport::new();

        export_all(&mut writer, &agg, &PipelineConfig::default(), &mut report);

        assert_eq!(
            writer.written,
            vec![("PD031".to_string(), 1), ("MERGED".to_string(), 2)]
        );
        assert!(!report.success());
        assert_eq!(report.tables_failed[0].table, "PD002");
        assert_eq!(report.tables_written.len(), 2);
    }

    #[test]
    fn test_uncategorized_written_only_when_present() {
        let mut writer = FlakyWriter {
            fail_on: String::new(),
            written: Vec::new(),
        };
        let mut report = RunReport::new();
        let agg = aggregate(vec![record("1", "PD002")], "UNCATEGORIZED");
        export_all(&mut writer, &agg, &PipelineConfig::default(), &mut report);
        assert!(writer.written.iter().all(|(name, _)| name != "UNCATEGORIZED"));

        writer.written.clear();
        let uncat = DocumentRecord::new("2", "D", "2024-01-01", ProjectMatch::uncategorized());
        let agg = aggregate(vec![uncat], "UNCATEGORIZED");
        export_all(&mut writer, &agg, &PipelineConfig::default(), &mut report);
        assert_eq!(
            writer.written,
            vec![("UNCATEGORIZED".to_string(), 1), ("MERGED".to_string(), 1)]
        );
    }

    #[test]
    fn test_csv_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvDirectoryWriter::create(dir.path().join("out")).unwrap();

        let mut table = OutputTable::new("PD031");
        table.records.push(record("a, b.pdf", "PD031"));
        let location = writer.write_table(&table, false).unwrap();

        let contents = std::fs::read_to_string(&location).unwrap();
        assert_eq!(
            contents,
            "File_Name,Document_ID,Created_Date,Last_Modified,Project_Code,Project_Name\n\
             \"a, b.pdf\",D,2024-01-01,2024-01-01,PD031,Name\n"
        );
    }

    #[test]
    fn test_extraction_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvDirectoryWriter::new(dir.path());

        let mut r = record("a.pdf", "PD031");
        r.reference_number = Some("04PD-2024".to_string());
        let mut table = OutputTable::new("PD031");
        table.records.push(r);
        writer.write_table(&table, true).unwrap();

        let contents = std::fs::read_to_string(writer.path_for("PD031")).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().ends_with("Project_Name,Document_Type,Reference_Number"));
        assert!(lines.next().unwrap().ends_with("PD031,Name,,04PD-2024"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvDirectoryWriter::new(dir.path().join("missing"));
        assert!(writer.write_table(&OutputTable::new("X"), false).is_err());
    }
}
