//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use docsort_classifier::ReferenceExtractor;
use docsort_domain::Taxonomy;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, taxonomy: &Taxonomy, formatter: &Formatter) -> Result<()> {
    let text = args.text.join(" ");
    let extractor = ReferenceExtractor::new(taxonomy)?;

    let references = extractor.extract(&text, args.category.map(Into::into));

    println!("{}", formatter.format_references(&references)?);
    Ok(())
}
