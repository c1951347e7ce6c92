//! Keyword search over a record source
//!
//! Items come from a [`RecordSource`], are filtered by keyword, optional
//! project and optional document type, then classified. An optional
//! [`AnalysisProvider`] may append an opaque summary record.

use crate::error::{PipelineError, Result};
use docsort_classifier::{EntityClassifier, ReferenceExtractor};
use docsort_domain::traits::{AnalysisProvider, RecordSource};
use docsort_domain::{ClassifiedItem, SearchHit, SourceItem, Taxonomy};
use serde::Deserialize;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Characters of body text kept on a classified item
pub const BODY_EXCERPT_CHARS: usize = 500;

/// Default cap on search results
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// What to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Lowercase keywords; an item matches when any one occurs
    pub keywords: Vec<String>,

    /// Only items whose subject mentions this project
    pub project_code: Option<String>,

    /// Only items whose subject has this document type
    pub document_type: Option<String>,

    /// Maximum number of matching items considered
    pub max_results: usize,
}

impl SearchCriteria {
    /// Derive keywords from a free-text query
    ///
    /// Words longer than three characters become keywords. When there are
    /// none, the whole query is the single keyword.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().to_lowercase();
        let mut keywords: Vec<String> = query
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .map(str::to_string)
            .collect();
        if keywords.is_empty() && !query.is_empty() {
            keywords.push(query);
        }

        Self {
            keywords,
            project_code: None,
            document_type: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Restrict to a project
    pub fn with_project(mut self, code: impl Into<String>) -> Self {
        self.project_code = Some(code.into());
        self
    }

    /// Restrict to a document type
    pub fn with_document_type(mut self, name: impl Into<String>) -> Self {
        self.document_type = Some(name.into());
        self
    }

    /// Change the result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    fn matches_keywords(&self, item: &SourceItem) -> bool {
        let subject = item.subject.to_lowercase();
        let body = item.body_text().to_lowercase();
        self.keywords
            .iter()
            .any(|k| subject.contains(k.as_str()) || body.contains(k.as_str()))
    }
}

/// Result of a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Classified items, then the analysis record if one was produced
    pub hits: Vec<SearchHit>,

    /// The record source failed; `hits` is empty
    pub source_failed: bool,

    /// The analysis provider failed; `hits` holds the items only
    pub analysis_failed: bool,
}

impl SearchOutcome {
    /// Classified items only
    pub fn items(&self) -> impl Iterator<Item = &ClassifiedItem> {
        self.hits.iter().filter_map(SearchHit::as_item)
    }

    /// Analysis text, if present
    pub fn analysis(&self) -> Option<&str> {
        self.hits.iter().find_map(|hit| match hit {
            SearchHit::Analysis(text) => Some(text.as_str()),
            SearchHit::Item(_) => None,
        })
    }
}

/// Runs searches against a taxonomy
pub struct Searcher {
    classifier: EntityClassifier,
    extractor: ReferenceExtractor,
}

impl Searcher {
    /// Create a searcher; compiles the reference patterns
    pub fn new(taxonomy: Arc<Taxonomy>) -> Result<Self> {
        let extractor = ReferenceExtractor::new(&taxonomy)?;
        Ok(Self {
            classifier: EntityClassifier::new(taxonomy),
            extractor,
        })
    }

    /// Classify a single item
    ///
    /// The project is resolved over subject and body, the document type and
    /// reference over the subject alone.
    pub fn classify_item(&self, item: &SourceItem) -> ClassifiedItem {
        let project = self
            .classifier
            .identify_project(&format!("{} {}", item.subject, item.body_text()));

        ClassifiedItem {
            subject: item.subject.clone(),
            sender: item.sender.clone(),
            received: item.received.clone(),
            body_excerpt: item.body_text().chars().take(BODY_EXCERPT_CHARS).collect(),
            project_code: project.code,
            project_name: project.name,
            document_type: self
                .classifier
                .identify_document_type(&item.subject)
                .map(str::to_string),
            reference_number: self.extractor.first_reference(&item.subject),
        }
    }

    fn passes_filters(&self, criteria: &SearchCriteria, item: &SourceItem) -> bool {
        if !criteria.matches_keywords(item) {
            return false;
        }
        if let Some(code) = &criteria.project_code {
            if !self.classifier.mentions_project(code, &item.subject) {
                return false;
            }
        }
        if let Some(wanted) = &criteria.document_type {
            if self.classifier.identify_document_type(&item.subject) != Some(wanted.as_str()) {
                return false;
            }
        }
        true
    }

    /// Search a source
    ///
    /// Results are capped at `max_results`, then deduplicated by subject
    /// keeping the first. A failing source yields an empty outcome with
    /// `source_failed` set.
    pub fn search<S>(&self, source: &mut S, criteria: &SearchCriteria) -> SearchOutcome
    where
        S: RecordSource,
        S::Error: Display,
    {
        let items = match source.fetch() {
            Ok(items) => items,
            Err(e) => {
                warn!("Record source failed: {}", e);
                return SearchOutcome {
                    source_failed: true,
                    ..SearchOutcome::default()
                };
            }
        };
        debug!("Fetched {} items", items.len());

        let mut subjects = HashSet::new();
        let hits: Vec<SearchHit> = items
            .iter()
            .filter(|item| self.passes_filters(criteria, item))
            .take(criteria.max_results)
            .filter(|item| subjects.insert(item.subject.clone()))
            .map(|item| SearchHit::Item(self.classify_item(item)))
            .collect();

        info!("Search matched {} items", hits.len());

        SearchOutcome {
            hits,
            ..SearchOutcome::default()
        }
    }

    /// Search a source and append an analysis record
    ///
    /// A failing provider leaves the items untouched and sets
    /// `analysis_failed`. No analysis is requested when the source failed.
    pub fn search_with_analysis<S, A>(
        &self,
        source: &mut S,
        criteria: &SearchCriteria,
        query: &str,
        provider: &A,
    ) -> SearchOutcome
    where
        S: RecordSource,
        S::Error: Display,
        A: AnalysisProvider,
        A::Error: Display,
    {
        let mut outcome = self.search(source, criteria);
        if outcome.source_failed {
            return outcome;
        }

        let items: Vec<ClassifiedItem> = outcome.items().cloned().collect();
        match provider.analyze(query, &items) {
            Ok(text) => outcome.hits.push(SearchHit::Analysis(text)),
            Err(e) => {
                warn!("Analysis failed: {}", e);
                outcome.analysis_failed = true;
            }
        }
        outcome
    }
}

/// In-memory record source
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    items: Vec<SourceItem>,
}

impl VecSource {
    /// Wrap a list of items
    pub fn new(items: Vec<SourceItem>) -> Self {
        Self { items }
    }
}

impl RecordSource for VecSource {
    type Error = Infallible;

    fn fetch(&mut self) -> std::result::Result<Vec<SourceItem>, Infallible> {
        Ok(self.items.clone())
    }
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    subject: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    received: Option<String>,
}

impl From<ItemRecord> for SourceItem {
    fn from(record: ItemRecord) -> Self {
        SourceItem {
            subject: record.subject,
            body: record.body,
            sender: record.sender,
            received: record.received,
        }
    }
}

/// Record source reading a JSON array of items from a file
///
/// Each element is `{"subject": ..., "body"?: ..., "sender"?: ..., "received"?: ...}`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source backed by a file path (read on each fetch)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse items from a JSON string
    pub fn parse(json: &str) -> Result<Vec<SourceItem>> {
        let records: Vec<ItemRecord> = serde_json::from_str(json)?;
        Ok(records.into_iter().map(SourceItem::from).collect())
    }
}

impl RecordSource for JsonFileSource {
    type Error = PipelineError;

    fn fetch(&mut self) -> Result<Vec<SourceItem>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Self::parse(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_domain::builtin;
    use std::io::Write;

    fn searcher() -> Searcher {
        Searcher::new(Arc::new(builtin::taxonomy())).unwrap()
    }

    fn items() -> Vec<SourceItem> {
        vec![
            SourceItem::new("LOA SHA handover schedule")
                .with_body("Please find the handover dates")
                .with_sender("pm@example.com"),
            SourceItem::new("Invoice for DTT cladding").with_body("handover of invoices"),
            SourceItem::new("LOA SHA handover schedule").with_body("duplicate subject"),
            SourceItem::new("Lunch menu").with_body("nothing relevant"),
        ]
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        type Error = String;

        fn fetch(&mut self) -> std::result::Result<Vec<SourceItem>, String> {
            Err("store offline".to_string())
        }
    }

    struct FixedAnalysis(std::result::Result<String, String>);

    impl AnalysisProvider for FixedAnalysis {
        type Error = String;

        fn analyze(&self, _query: &str, _items: &[ClassifiedItem]) -> std::result::Result<String, String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_from_query_keywords() {
        let criteria = SearchCriteria::from_query("Handover of the SHA tower");
        assert_eq!(criteria.keywords, vec!["handover", "tower"]);
        assert_eq!(criteria.max_results, DEFAULT_MAX_RESULTS);

        let short = SearchCriteria::from_query("SHA");
        assert_eq!(short.keywords, vec!["sha"]);
    }

    #[test]
    fn test_keyword_search_dedups_by_subject() {
        let mut source = VecSource::new(items());
        let outcome = searcher().search(&mut source, &SearchCriteria::from_query("handover"));

        let subjects: Vec<_> = outcome.items().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["LOA SHA handover schedule", "Invoice for DTT cladding"]);
        assert!(!outcome.source_failed);
    }

    #[test]
    fn test_classification_of_items() {
        let mut source = VecSource::new(items());
        let outcome = searcher().search(&mut source, &SearchCriteria::from_query("handover"));
        let first = outcome.items().next().unwrap();

        assert_eq!(first.project_code, "PD031");
        assert_eq!(first.document_type.as_deref(), Some("Letter"));
        assert_eq!(first.sender.as_deref(), Some("pm@example.com"));
    }

    #[test]
    fn test_project_filter_uses_subject() {
        let mut source = VecSource::new(items());
        let criteria = SearchCriteria::from_query("handover").with_project("PD015");
        let outcome = searcher().search(&mut source, &criteria);

        let subjects: Vec<_> = outcome.items().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Invoice for DTT cladding"]);
    }

    #[test]
    fn test_document_type_filter() {
        let mut source = VecSource::new(items());
        let criteria = SearchCriteria::from_query("handover").with_document_type("Letter");
        let outcome = searcher().search(&mut source, &criteria);
        assert_eq!(outcome.items().count(), 1);
    }

    #[test]
    fn test_cap_applies_before_dedup() {
        let mut source = VecSource::new(vec![
            SourceItem::new("Same subject handover"),
            SourceItem::new("Same subject handover"),
            SourceItem::new("Other handover"),
        ]);
        let criteria = SearchCriteria::from_query("handover").with_max_results(2);
        let outcome = searcher().search(&mut source, &criteria);
        assert_eq!(outcome.items().count(), 1);
    }

    #[test]
    fn test_body_excerpt_truncated() {
        let item = SourceItem::new("x").with_body("é".repeat(600));
        let classified = searcher().classify_item(&item);
        assert_eq!(classified.body_excerpt.chars().count(), BODY_EXCERPT_CHARS);
    }

    #[test]
    fn test_source_failure() {
        let outcome = searcher().search(&mut FailingSource, &SearchCriteria::from_query("anything"));
        assert!(outcome.source_failed);
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn test_analysis_appended_last() {
        let mut source = VecSource::new(items());
        let provider = FixedAnalysis(Ok("two handovers".to_string()));
        let outcome = searcher().search_with_analysis(
            &mut source,
            &SearchCriteria::from_query("handover"),
            "handover",
            &provider,
        );

        assert!(outcome.hits.last().unwrap().is_analysis());
        assert_eq!(outcome.analysis(), Some("two handovers"));
        assert_eq!(outcome.items().count(), 2);
    }

    #[test]
    fn test_analysis_failure_passes_through() {
        let mut source = VecSource::new(items());
        let provider = FixedAnalysis(Err("quota".to_string()));
        let outcome = searcher().search_with_analysis(
            &mut source,
            &SearchCriteria::from_query("handover"),
            "handover",
            &provider,
        );

        assert!(outcome.analysis_failed);
        assert_eq!(outcome.analysis(), None);
        assert_eq!(outcome.items().count(), 2);
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"subject": "MOU for SHA", "sender": "a@b.c"}, {"subject": "plain"}]"#)
            .unwrap();

        let items = JsonFileSource::new(file.path()).fetch().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].sender.as_deref(), Some("a@b.c"));
        assert_eq!(items[1].body, None);
    }

    #[test]
    fn test_json_source_bad_input() {
        assert!(matches!(
            JsonFileSource::parse("{not json"),
            Err(PipelineError::Json(_))
        ));
    }
}
