//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use docsort_domain::ReferenceCategory;
use docsort_pipeline::DEFAULT_MAX_RESULTS;
use std::path::PathBuf;

/// docsort - Sort document listings into per-project tables.
#[derive(Debug, Parser)]
#[command(name = "docsort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCSORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Taxonomy file (TOML) replacing the built-in taxonomy
    #[arg(short, long, global = true, env = "DOCSORT_TAXONOMY")]
    pub taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes and paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a listing file and write per-project CSV tables
    Process(ProcessArgs),

    /// Show the project, document type and references of a text
    Classify(ClassifyArgs),

    /// Extract reference numbers from a text
    Extract(ExtractArgs),

    /// Search a JSON file of items
    Search(SearchArgs),

    /// Inspect the active taxonomy
    Taxonomy(TaxonomyArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Listing file, one document per line
    pub input: PathBuf,

    /// Output directory (overrides the configuration)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Add Document_Type and Reference_Number columns
    #[arg(short, long)]
    pub extract: bool,

    /// Treat the first line as data
    #[arg(long)]
    pub no_header: bool,

    /// Processing date for the date columns (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text to search for references
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Only apply one pattern category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// JSON file holding an array of items
    #[arg(short, long)]
    pub items: PathBuf,

    /// Search query text
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Only items whose subject mentions this project code
    #[arg(short, long)]
    pub project: Option<String>,

    /// Only items whose subject has this document type
    #[arg(short, long)]
    pub doc_type: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,
}

/// Arguments for the taxonomy command.
#[derive(Debug, Parser)]
pub struct TaxonomyArgs {
    /// Which table to show
    #[arg(value_enum, default_value = "projects")]
    pub view: TaxonomyView,
}

/// Taxonomy tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TaxonomyView {
    /// Projects and aliases
    Projects,
    /// Departments
    Departments,
    /// Document types and prefixes
    Types,
    /// Reference patterns
    Patterns,
    /// The whole taxonomy as TOML
    Dump,
}

/// Reference category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// e.g. 340PD-2017
    Standard,
    /// e.g. STRED-...-21PD-2023
    DepartmentProject,
    /// e.g. LOA-...-04PD-2024
    LetterReferences,
    /// References embedded in prose
    SpecialFormats,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CategoryArg> for ReferenceCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Standard => ReferenceCategory::Standard,
            CategoryArg::DepartmentProject => ReferenceCategory::DepartmentProject,
            CategoryArg::LetterReferences => ReferenceCategory::LetterReferences,
            CategoryArg::SpecialFormats => ReferenceCategory::SpecialFormats,
        }
    }
}
