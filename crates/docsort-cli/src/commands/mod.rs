//! Command implementations.

pub mod classify;
pub mod extract;
pub mod process;
pub mod search;
pub mod taxonomy;

pub use self::classify::execute_classify;
pub use self::extract::execute_extract;
pub use self::process::execute_process;
pub use self::search::execute_search;
pub use self::taxonomy::execute_taxonomy;

use crate::error::Result;
use docsort_classifier::TaxonomyFile;
use docsort_domain::{builtin, Taxonomy};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Load the taxonomy file if one is given, else the built-in taxonomy.
pub fn load_taxonomy(path: Option<&Path>) -> Result<Arc<Taxonomy>> {
    let taxonomy = match path {
        Some(path) => TaxonomyFile::load(path)?.into_taxonomy()?,
        None => {
            debug!("Using built-in taxonomy");
            builtin::taxonomy()
        }
    };
    Ok(Arc::new(taxonomy))
}
