//! docsort Classifier
//!
//! Resolves free text against the taxonomy and pulls structured reference
//! identifiers out of it.
//!
//! # Overview
//!
//! - [`EntityClassifier`] assigns a project code and a document type to a
//!   text using first-match-wins substring scans in taxonomy order.
//! - [`ReferenceExtractor`] applies the compiled reference pattern categories
//!   and returns every match with its capture groups.
//! - [`TaxonomyFile`] loads a taxonomy from TOML, preserving declaration order.
//!
//! # Example Usage
//!
//! ```
//! use docsort_classifier::{EntityClassifier, ReferenceExtractor};
//! use docsort_domain::{builtin, ReferenceCategory};
//! use std::sync::Arc;
//!
//! let taxonomy = Arc::new(builtin::taxonomy());
//! let classifier = EntityClassifier::new(Arc::clone(&taxonomy));
//!
//! let project = classifier.identify_project("Some random text with SHA and P220");
//! assert_eq!(project.code, "PD031");
//!
//! let extractor = ReferenceExtractor::new(&taxonomy)?;
//! let refs = extractor.extract("LOA-DHA-ASTECO-ABS-DHSB-04PD-2024", Some(ReferenceCategory::LetterReferences));
//! assert_eq!(refs[0].matched, "LOA-DHA-ASTECO-ABS-DHSB-04PD-2024");
//! # Ok::<(), docsort_classifier::ClassifierError>(())
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod references;


pub use classifier::{Classification, EntityClassifier};
pub use config::{
    DepartmentDef, DocumentTypeDef, PatternCategoryDef, ProjectDef, TaxonomyFile,
};
pub use error::ClassifierError;
pub use references::{ReferenceExtractor, ReferenceMatch};
