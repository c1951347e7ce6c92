//! docsort Domain Layer
//!
//! This crate contains the taxonomy and record model for docsort. It has ZERO
//! runtime dependencies and defines the value objects and trait interfaces
//! that the classifier, pipeline and CLI crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Taxonomy**: Ordered, immutable tables of projects, departments,
//!   document types and reference patterns
//! - **Alias**: An alternate string identifying a project besides its code
//! - **DocumentRecord**: One classified input line, always carrying a project code
//! - **Sentinel code**: `UNCAT`, assigned when nothing in the taxonomy matches
//! - **Identity key**: File identifier + document identifier, used for dedup
//!
//! ## Ordering
//!
//! Declaration order inside every taxonomy table is load-bearing: the
//! classifier scans entries in that order and the first hit wins. All tables
//! are therefore `Vec`s, never maps.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtin;
pub mod department;
pub mod document_type;
pub mod project;
pub mod record;
pub mod reference;
pub mod source;
pub mod taxonomy;
pub mod traits;

// Re-exports for convenience
pub use department::DepartmentEntry;
pub use document_type::DocumentTypeEntry;
pub use project::{ProjectEntry, ProjectMatch, UNCATEGORIZED_CODE, UNCATEGORIZED_NAME};
pub use record::{DocumentRecord, IdentityKey, OutputTable};
pub use reference::{ReferenceCategory, ReferencePatternCategory};
pub use source::{ClassifiedItem, SearchHit, SourceItem};
pub use taxonomy::{Taxonomy, TaxonomyBuilder};
