//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use docsort_classifier::{EntityClassifier, ReferenceExtractor};
use docsort_domain::Taxonomy;
use std::sync::Arc;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, taxonomy: Arc<Taxonomy>, formatter: &Formatter) -> Result<()> {
    let text = args.text.join(" ");

    let extractor = ReferenceExtractor::new(&taxonomy)?;
    let classifier = EntityClassifier::new(taxonomy);

    let classification = classifier.classify(&text);
    let references = extractor.extract(&text, None);

    println!("{}", formatter.format_classification(&classification, &references)?);
    Ok(())
}
