//! Line parsing into classified records

use crate::config::PipelineConfig;
use crate::dedup::SeenKeys;
use crate::error::{PipelineError, Result};
use chrono::{Local, NaiveDate};
use docsort_classifier::{EntityClassifier, ReferenceExtractor};
use docsort_domain::{DocumentRecord, IdentityKey, Taxonomy};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{trace, warn};

/// Format of the created and last-modified columns
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What became of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A new classified record
    Record(DocumentRecord),

    /// Too few fields; skipped
    Malformed {
        /// Number of fields found
        fields: usize,
    },

    /// Identity key already seen in this run; skipped
    Duplicate(IdentityKey),
}

impl LineOutcome {
    /// The record, if the line produced one
    pub fn into_record(self) -> Option<DocumentRecord> {
        match self {
            LineOutcome::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Field separators: a run of tabs, or two or more whitespace characters
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+|\s{2,}").expect("valid separator regex"));

/// Split a line into fields
///
/// Single spaces stay inside a field. Fields are trimmed and empty fields
/// dropped.
pub fn tokenize(line: &str) -> Vec<&str> {
    SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Turns raw lines into [`DocumentRecord`]s
///
/// The parser itself holds no per-run state; duplicates are tracked in the
/// [`SeenKeys`] passed to each call.
pub struct RecordParser {
    classifier: EntityClassifier,
    extractor: Option<ReferenceExtractor>,
    min_fields: usize,
    date: String,
}

impl RecordParser {
    /// Create a parser stamping records with today's local date
    ///
    /// Reference patterns are compiled only when the configuration asks for
    /// the extraction columns.
    ///
    /// # Errors
    /// Fails on an invalid configuration or an uncompilable reference pattern.
    pub fn new(taxonomy: Arc<Taxonomy>, config: &PipelineConfig) -> Result<Self> {
        config.validate().map_err(PipelineError::Config)?;
        let extractor = if config.extract_references {
            Some(ReferenceExtractor::new(&taxonomy)?)
        } else {
            None
        };

        Ok(Self {
            classifier: EntityClassifier::new(taxonomy),
            extractor,
            min_fields: config.min_fields,
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
        })
    }

    /// Use a fixed processing date (reproducible runs)
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date.format(DATE_FORMAT).to_string();
        self
    }

    /// The date written to the date columns
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether records carry document type and reference number
    pub fn extracts_references(&self) -> bool {
        self.extractor.is_some()
    }

    /// The classifier used for project resolution
    pub fn classifier(&self) -> &EntityClassifier {
        &self.classifier
    }

    /// Parse one line
    ///
    /// The first field is the file identifier, the second the document
    /// identifier. The project is resolved against the whole line, not just a
    /// field. Malformed lines are logged and reported, never an error.
    pub fn parse(&self, line: &str, seen: &SeenKeys) -> LineOutcome {
        let fields = tokenize(line);
        let (file_id, document_id) = match fields.as_slice() {
            [file_id, document_id, ..] if fields.len() >= self.min_fields => (*file_id, *document_id),
            _ => {
                warn!(
                    "Skipping malformed line ({} of {} fields): {}",
                    fields.len(),
                    self.min_fields,
                    line
                );
                return LineOutcome::Malformed {
                    fields: fields.len(),
                };
            }
        };

        let key = IdentityKey::new(file_id, document_id);
        if seen.contains(&key) {
            trace!("Duplicate {}", key);
            return LineOutcome::Duplicate(key);
        }

        let project = self.classifier.identify_project(line);
        let mut record = DocumentRecord::new(file_id, document_id, self.date.as_str(), project);

        if let Some(extractor) = &self.extractor {
            record.document_type = self
                .classifier
                .identify_document_type(line)
                .map(str::to_string);
            record.reference_number = extractor.first_reference(line);
        }

        // Another caller may have claimed the key since the check above
        if !seen.claim(&key) {
            return LineOutcome::Duplicate(key);
        }

        LineOutcome::Record(record)
    }

    /// Parse one line, discarding the reason for a skip
    pub fn parse_line(&self, line: &str, seen: &SeenKeys) -> Option<DocumentRecord> {
        self.parse(line, seen).into_record()
    }
}
