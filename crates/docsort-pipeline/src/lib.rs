//! docsort Pipeline
//!
//! Turns a file listing into grouped output tables, and searches record
//! sources with the same classifier.
//!
//! # Overview
//!
//! A batch run goes line by line:
//!
//! 1. **Parse**: split into fields, reject short lines, skip repeated
//!    identity keys ([`RecordParser`], [`SeenKeys`])
//! 2. **Classify**: resolve the project over the whole line, plus document
//!    type and reference number when the detailed columns are on
//! 3. **Aggregate**: one table per project in order of first appearance, an
//!    uncategorized table, and a merged table ([`aggregate`])
//! 4. **Export**: one CSV per table; a failed table does not stop the others
//!    ([`CsvDirectoryWriter`], [`export_all`])
//!
//! Counters and export results end up in a [`RunReport`].
//!
//! # Configuration
//!
//! ```toml
//! output_dir = "output"
//! skip_header = true
//! min_fields = 4
//! extract_references = false
//! uncategorized_table = "UNCATEGORIZED"
//! merged_table = "MERGED"
//! ```
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use docsort_domain::builtin;
//! use docsort_pipeline::{Pipeline, PipelineConfig, SeenKeys};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(Arc::new(builtin::taxonomy()), PipelineConfig::default())?
//!     .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let lines = ["File\tDoc\tA\tB", "LOA-DHA-ASTECO-ABS-DHSB-04PD-2024\tDOC123\tx\ty"];
//! let (records, report) = pipeline.parse_all(lines, &SeenKeys::new());
//!
//! assert_eq!(records[0].project_code, "DHSB");
//! assert_eq!(report.records, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod config;
mod dedup;
mod error;
mod export;
mod parser;
mod pipeline;
mod report;
mod search;

pub use aggregate::{aggregate, Aggregation};
pub use config::PipelineConfig;
pub use dedup::SeenKeys;
pub use error::{PipelineError, Result};
pub use export::{export_all, CsvDirectoryWriter};
pub use parser::{tokenize, LineOutcome, RecordParser, DATE_FORMAT};
pub use pipeline::Pipeline;
pub use report::{FailedTable, RunReport};
pub use search::{
    JsonFileSource, SearchCriteria, SearchOutcome, Searcher, VecSource, BODY_EXCERPT_CHARS,
    DEFAULT_MAX_RESULTS,
};
