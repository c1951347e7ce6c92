//! Configuration for the Pipeline

use docsort_domain::Taxonomy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory the output tables are written to (created if missing)
    pub output_dir: PathBuf,

    /// Skip the first non-empty input line as a header
    pub skip_header: bool,

    /// Minimum number of fields for a line to be a record
    pub min_fields: usize,

    /// Add the Document_Type and Reference_Number columns
    pub extract_references: bool,

    /// Name of the table holding uncategorized records
    pub uncategorized_table: String,

    /// Name of the table holding every record
    pub merged_table: String,
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // File and document identifiers are required
        if self.min_fields < 2 {
            return Err("min_fields must be at least 2".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir cannot be empty".to_string());
        }
        for (key, name) in [
            ("uncategorized_table", &self.uncategorized_table),
            ("merged_table", &self.merged_table),
        ] {
            if name.trim().is_empty() {
                return Err(format!("{} cannot be empty", key));
            }
            if name.contains(['/', '\\']) {
                return Err(format!("{} cannot contain path separators", key));
            }
        }
        if self.uncategorized_table == self.merged_table {
            return Err("uncategorized_table and merged_table must differ".to_string());
        }
        Ok(())
    }

    /// Check that every project table gets a file of its own
    ///
    /// Project tables are named after their code, so a code may not contain
    /// a path separator or equal (ignoring case) one of the fixed table names.
    pub fn validate_project_codes(&self, taxonomy: &Taxonomy) -> Result<(), String> {
        for project in taxonomy.projects() {
            let code = project.code.as_str();
            if code.contains(['/', '\\']) {
                return Err(format!("Project code '{}' cannot contain path separators", code));
            }
            for (key, name) in [
                ("uncategorized_table", &self.uncategorized_table),
                ("merged_table", &self.merged_table),
            ] {
                if code.eq_ignore_ascii_case(name) {
                    return Err(format!("Project code '{}' clashes with {} '{}'", code, key, name));
                }
            }
        }
        Ok(())
    }

    /// Detailed preset: adds document type and reference number columns
    pub fn detailed() -> Self {
        Self {
            extract_references: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Base six-column output into `./output`
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            skip_header: true,
            min_fields: 4,
            extract_references: false,
            uncategorized_table: "UNCATEGORIZED".to_string(),
            merged_table: "MERGED".to_string(),
        }
    }
}
