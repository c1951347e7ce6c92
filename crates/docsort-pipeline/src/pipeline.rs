//! Batch processing of a line file into output tables

use crate::aggregate::{aggregate, Aggregation};
use crate::config::PipelineConfig;
use crate::dedup::SeenKeys;
use crate::error::{PipelineError, Result};
use crate::export::{export_all, CsvDirectoryWriter};
use crate::parser::{LineOutcome, RecordParser};
use crate::report::RunReport;
use chrono::NaiveDate;
use docsort_domain::traits::TableWriter;
use docsort_domain::{DocumentRecord, Taxonomy};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Parses, groups and exports a batch of lines
///
/// # Examples
///
/// ```no_run
/// use docsort_domain::builtin;
/// use docsort_pipeline::{Pipeline, PipelineConfig};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = Pipeline::new(Arc::new(builtin::taxonomy()), PipelineConfig::default())?;
/// let report = pipeline.process_file(Path::new("listing.txt"))?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    parser: RecordParser,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline
    ///
    /// # Errors
    /// Fails on an invalid configuration, a project code that would collide
    /// with another output table, or an uncompilable reference pattern.
    pub fn new(taxonomy: Arc<Taxonomy>, config: PipelineConfig) -> Result<Self> {
        config.validate().map_err(PipelineError::Config)?;
        config
            .validate_project_codes(&taxonomy)
            .map_err(PipelineError::Config)?;
        let parser = RecordParser::new(taxonomy, &config)?;
        Ok(Self { parser, config })
    }

    /// Stamp records with a fixed date instead of today
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.parser = self.parser.with_date(date);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The line parser
    pub fn parser(&self) -> &RecordParser {
        &self.parser
    }

    /// Parse lines into records
    ///
    /// Whitespace-only lines are dropped. With `skip_header`, the first
    /// remaining line is dropped too.
    pub fn parse_all<I, S>(&self, lines: I, seen: &SeenKeys) -> (Vec<DocumentRecord>, RunReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = RunReport::new();
        let mut records = Vec::new();
        let mut header_pending = self.config.skip_header;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if header_pending {
                debug!("Skipping header: {}", line);
                header_pending = false;
                continue;
            }

            let outcome = self.parser.parse(line, seen);
            report.record_outcome(&outcome);
            if let LineOutcome::Record(record) = outcome {
                records.push(record);
            }
        }

        (records, report)
    }

    /// Group parsed records into tables
    pub fn aggregate(&self, records: Vec<DocumentRecord>) -> Aggregation {
        aggregate(records, &self.config.uncategorized_table)
    }

    /// Run a batch against any table writer
    ///
    /// Uses a fresh seen-key set, so repeated calls on the same input
    /// produce the same tables.
    pub fn process_lines<I, S, W>(&self, lines: I, writer: &mut W) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: TableWriter,
        W::Error: Display,
    {
        let seen = SeenKeys::new();
        let (records, mut report) = self.parse_all(lines, &seen);
        let aggregation = self.aggregate(records);

        info!(
            "Parsed {} records into {} project tables ({} uncategorized)",
            report.records,
            aggregation.projects.len(),
            aggregation.uncategorized.len()
        );

        export_all(writer, &aggregation, &self.config, &mut report);

        info!(
            "Run finished: {} written, {} failed",
            report.tables_written.len(),
            report.tables_failed.len()
        );
        report
    }

    /// Run a batch from a file into `output_dir` as CSV
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Fails only when the input cannot be read or the output directory cannot
    /// be created. Export failures of individual tables are in the report.
    pub fn process_file(&self, input: &Path) -> Result<RunReport> {
        let bytes = std::fs::read(input).map_err(|source| PipelineError::Input {
            path: input.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);
        info!("Processing {}", input.display());

        let mut writer = CsvDirectoryWriter::create(&self.config.output_dir)?;
        Ok(self.process_lines(contents.lines(), &mut writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_domain::{builtin, ProjectEntry};

    fn pipeline(config: PipelineConfig) -> Pipeline {
        Pipeline::new(Arc::new(builtin::taxonomy()), config)
            .unwrap()
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = PipelineConfig::default();
        config.min_fields = 0;
        let result = Pipeline::new(Arc::new(builtin::taxonomy()), config);
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_project_code_clashing_with_table_name_rejected() {
        let taxonomy = Taxonomy::builder()
            .project(ProjectEntry::new("Merged", "Merged Works", Vec::<String>::new()))
            .project(ProjectEntry::new("PD1", "First", Vec::<String>::new()))
            .build()
            .unwrap();

        let result = Pipeline::new(Arc::new(taxonomy), PipelineConfig::default());
        assert!(matches!(result, Err(PipelineError::Config(msg)) if msg.contains("merged_table")));
    }

    #[test]
    fn test_project_code_with_path_separator_rejected() {
        let taxonomy = Taxonomy::builder()
            .project(ProjectEntry::new("PD/1", "Nested", Vec::<String>::new()))
            .build()
            .unwrap();

        let result = Pipeline::new(Arc::new(taxonomy), PipelineConfig::default());
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_header_and_blank_lines_skipped() {
        let p = pipeline(PipelineConfig::default());
        let lines = [
            "",
            "File\tDoc\tA\tB",
            "   ",
            "a.pdf\tD1\tSHA\tx",
            "b.pdf\tD2\tTIARA\tx",
        ];
        let (records, report) = p.parse_all(lines, &SeenKeys::new());

        assert_eq!(records.len(), 2);
        assert_eq!(report.lines_read, 2);
    }

    #[test]
    fn test_header_kept_when_disabled() {
        let mut config = PipelineConfig::default();
        config.skip_header = false;
        let p = pipeline(config);
        let (records, _) = p.parse_all(["File\tDoc\tA\tB"], &SeenKeys::new());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_counts_in_report() {
        let p = pipeline(PipelineConfig::default());
        let lines = [
            "header",
            "a.pdf\tD1\tSHA\tx",
            "short\tline",
            "a.pdf\tD1\tagain\tx",
            "c.pdf\tD3\tnothing\there",
        ];
        let (_, report) = p.parse_all(lines, &SeenKeys::new());

        assert_eq!(report.lines_read, 4);
        assert_eq!(report.records, 2);
        assert_eq!(report.malformed, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.uncategorized, 1);
    }

    #[test]
    fn test_missing_input_file() {
        let p = pipeline(PipelineConfig::default());
        let result = p.process_file(Path::new("/no/such/listing.txt"));
        assert!(matches!(result, Err(PipelineError::Input { .. })));
    }
}
