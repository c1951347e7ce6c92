//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the classification core and
//! its collaborators. Implementations live in other crates (or in tests).

use crate::record::OutputTable;
use crate::source::{ClassifiedItem, SourceItem};

/// Supplier of raw items to classify
///
/// Implemented by the pipeline crate (JSON file, in-memory) or by whatever
/// talks to a message store.
pub trait RecordSource {
    /// Error type for source operations
    type Error;

    /// Fetch every available item
    fn fetch(&mut self) -> Result<Vec<SourceItem>, Self::Error>;
}

/// Optional generative-analysis service
///
/// The response is treated as opaque text and never parsed back into
/// structured fields.
pub trait AnalysisProvider {
    /// Error type for analysis operations
    type Error;

    /// Summarize a classified result set for the given query
    fn analyze(&self, query: &str, items: &[ClassifiedItem]) -> Result<String, Self::Error>;
}

/// Destination for output tables
///
/// Each call is independent: a failed write must not affect later calls.
pub trait TableWriter {
    /// Error type for write operations
    type Error;

    /// Write one table, returning a description of where it went
    fn write_table(&mut self, table: &OutputTable, with_extraction: bool)
        -> Result<String, Self::Error>;
}
