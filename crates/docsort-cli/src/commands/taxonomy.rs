//! Taxonomy command implementation.

use crate::cli::{TaxonomyArgs, TaxonomyView};
use crate::error::Result;
use crate::output::Formatter;
use docsort_classifier::TaxonomyFile;
use docsort_domain::Taxonomy;

/// Execute the taxonomy command.
pub fn execute_taxonomy(args: TaxonomyArgs, taxonomy: &Taxonomy, formatter: &Formatter) -> Result<()> {
    let output = match args.view {
        TaxonomyView::Projects => formatter.format_projects(taxonomy.projects())?,
        TaxonomyView::Departments => formatter.format_departments(taxonomy.departments())?,
        TaxonomyView::Types => formatter.format_document_types(taxonomy.document_types())?,
        TaxonomyView::Patterns => formatter.format_patterns(taxonomy.reference_patterns())?,
        // Always TOML so the output can be edited and passed back with --taxonomy
        TaxonomyView::Dump => TaxonomyFile::from_taxonomy(taxonomy).to_toml()?,
    };

    println!("{}", output);
    Ok(())
}
