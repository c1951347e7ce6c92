//! Record module - classified input lines and output tables

use crate::project::{ProjectMatch, UNCATEGORIZED_CODE};
use std::fmt;

/// Column headers for the base record fields, in output order
pub const BASE_COLUMNS: [&str; 6] = [
    "File_Name",
    "Document_ID",
    "Created_Date",
    "Last_Modified",
    "Project_Code",
    "Project_Name",
];

/// Column headers appended when reference extraction is requested
pub const EXTRACTION_COLUMNS: [&str; 2] = ["Document_Type", "Reference_Number"];

/// Composite identity of a record, used for duplicate suppression
///
/// Rendered as `<file>_<document>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Build the key from a file identifier and a document identifier
    pub fn new(file_id: &str, document_id: &str) -> Self {
        Self(format!("{}_{}", file_id, document_id))
    }

    /// Get the key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One classified document
///
/// A record always carries a project code; misses resolve to `UNCAT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// File or subject identifier (first token of the line)
    pub file_name: String,

    /// Document identifier (second token of the line)
    pub document_id: String,

    /// Creation date (`YYYY-MM-DD`)
    pub created_date: String,

    /// Last-modified date (`YYYY-MM-DD`)
    pub last_modified: String,

    /// Resolved project code
    pub project_code: String,

    /// Resolved project name
    pub project_name: String,

    /// Resolved document type, when extraction was requested
    pub document_type: Option<String>,

    /// First extracted reference, when extraction was requested
    pub reference_number: Option<String>,
}

impl DocumentRecord {
    /// Create a record with the base fields set
    pub fn new(
        file_name: impl Into<String>,
        document_id: impl Into<String>,
        date: impl Into<String>,
        project: ProjectMatch,
    ) -> Self {
        let date = date.into();
        Self {
            file_name: file_name.into(),
            document_id: document_id.into(),
            created_date: date.clone(),
            last_modified: date,
            project_code: project.code,
            project_name: project.name,
            document_type: None,
            reference_number: None,
        }
    }

    /// The identity key used for deduplication
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(&self.file_name, &self.document_id)
    }

    /// Whether the record fell through to the sentinel code
    pub fn is_uncategorized(&self) -> bool {
        self.project_code == UNCATEGORIZED_CODE
    }

    /// Field values in column order
    ///
    /// With `with_extraction`, the document type and reference columns are
    /// appended (empty when unresolved).
    pub fn to_row(&self, with_extraction: bool) -> Vec<&str> {
        let mut row = vec![
            self.file_name.as_str(),
            self.document_id.as_str(),
            self.created_date.as_str(),
            self.last_modified.as_str(),
            self.project_code.as_str(),
            self.project_name.as_str(),
        ];
        if with_extraction {
            row.push(self.document_type.as_deref().unwrap_or(""));
            row.push(self.reference_number.as_deref().unwrap_or(""));
        }
        row
    }
}

/// Column headers for a table
pub fn columns(with_extraction: bool) -> Vec<&'static str> {
    let mut cols = BASE_COLUMNS.to_vec();
    if with_extraction {
        cols.extend_from_slice(&EXTRACTION_COLUMNS);
    }
    cols
}

/// A named collection of records destined for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    /// Table name (project code, or the uncategorized/merged name)
    pub name: String,

    /// Records in insertion order
    pub records: Vec<DocumentRecord>,
}

impl OutputTable {
    /// Create an empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
