//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::NaiveDate;
use docsort_domain::Taxonomy;
use docsort_pipeline::{Pipeline, PipelineConfig, DATE_FORMAT};
use std::sync::Arc;
use tracing::info;

/// Apply command-line overrides to the configured pipeline settings.
pub fn effective_config(args: &ProcessArgs, base: &PipelineConfig) -> PipelineConfig {
    let mut config = base.clone();
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.extract {
        config.extract_references = true;
    }
    if args.no_header {
        config.skip_header = false;
    }
    config
}

/// Execute the process command.
///
/// Fails with [`CliError::PartialExport`] after printing the report when any
/// table could not be written.
pub fn execute_process(
    args: ProcessArgs,
    config: PipelineConfig,
    taxonomy: Arc<Taxonomy>,
    formatter: &Formatter,
) -> Result<()> {
    let mut pipeline = Pipeline::new(taxonomy, config)?;

    if let Some(date) = &args.date {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| CliError::InvalidInput(format!("Invalid date '{}': {}", date, e)))?;
        pipeline = pipeline.with_date(date);
    }

    let report = pipeline.process_file(&args.input)?;
    info!("{}", report.summary());

    println!("{}", formatter.format_report(&report)?);

    if !report.success() {
        return Err(CliError::PartialExport(report.tables_failed.len()));
    }
    Ok(())
}
