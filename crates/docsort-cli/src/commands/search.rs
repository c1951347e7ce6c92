//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docsort_domain::Taxonomy;
use docsort_pipeline::{JsonFileSource, SearchCriteria, Searcher};
use std::sync::Arc;

/// Build search criteria from the command arguments.
pub fn criteria(args: &SearchArgs) -> Result<SearchCriteria> {
    if args.max_results == 0 {
        return Err(CliError::InvalidInput(
            "max-results must be greater than 0".to_string(),
        ));
    }

    let mut criteria = SearchCriteria::from_query(&args.query.join(" ")).with_max_results(args.max_results);
    if let Some(project) = &args.project {
        criteria = criteria.with_project(project.as_str());
    }
    if let Some(doc_type) = &args.doc_type {
        criteria = criteria.with_document_type(doc_type.as_str());
    }
    Ok(criteria)
}

/// Execute the search command.
///
/// No analysis provider is wired into the binary.
pub fn execute_search(args: SearchArgs, taxonomy: Arc<Taxonomy>, formatter: &Formatter) -> Result<()> {
    let criteria = criteria(&args)?;

    if let Some(project) = &criteria.project_code {
        if !taxonomy.projects().iter().any(|p| p.code.eq_ignore_ascii_case(project)) {
            println!("{}", formatter.warning(&format!("Unknown project code '{}'", project)));
        }
    }

    let searcher = Searcher::new(taxonomy)?;
    let mut source = JsonFileSource::new(&args.items);
    let outcome = searcher.search(&mut source, &criteria);

    println!("{}", formatter.format_search(&outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(query: &[&str]) -> SearchArgs {
        SearchArgs {
            items: PathBuf::from("items.json"),
            query: query.iter().map(|s| s.to_string()).collect(),
            project: Some("PD031".to_string()),
            doc_type: None,
            max_results: 5,
        }
    }

    #[test]
    fn test_criteria_from_args() {
        let c = criteria(&args(&["tower", "handover"])).unwrap();
        assert_eq!(c.keywords, vec!["tower", "handover"]);
        assert_eq!(c.project_code.as_deref(), Some("PD031"));
        assert_eq!(c.max_results, 5);
    }

    #[test]
    fn test_zero_results_rejected() {
        let mut a = args(&["x"]);
        a.max_results = 0;
        assert!(matches!(criteria(&a), Err(CliError::InvalidInput(_))));
    }
}
