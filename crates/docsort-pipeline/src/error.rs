//! Error types for the Pipeline

use docsort_classifier::ClassifierError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the pipeline
///
/// Per-line problems (malformed or duplicate lines) are not errors; they are
/// counted in the run report. These variants cover the failures that stop a
/// step outright.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input file could not be read
    #[error("Failed to read input '{}': {source}", path.display())]
    Input {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Other I/O error (output directory, item files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An item source file could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classifier construction failed
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
