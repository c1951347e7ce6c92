//! Taxonomy store - ordered, immutable classification tables

use crate::department::DepartmentEntry;
use crate::document_type::DocumentTypeEntry;
use crate::project::{ProjectEntry, UNCATEGORIZED_CODE};
use crate::reference::{ReferenceCategory, ReferencePatternCategory};
use std::collections::HashSet;

/// The full set of classification tables
///
/// Built once (from the built-in data or a taxonomy file) and shared by
/// reference afterwards. There is no mutation API, so a `Taxonomy` behind an
/// `Arc` is safe for unsynchronized concurrent reads.
///
/// Iteration order of every table is the authored order and is the
/// tie-break order used by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    projects: Vec<ProjectEntry>,
    document_types: Vec<DocumentTypeEntry>,
    departments: Vec<DepartmentEntry>,
    reference_patterns: Vec<ReferencePatternCategory>,
}

impl Taxonomy {
    /// Start building a taxonomy
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// Projects in declared order
    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// Look up a project by code (exact, case-sensitive)
    pub fn project(&self, code: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.code == code)
    }

    /// Document types in declared order
    pub fn document_types(&self) -> &[DocumentTypeEntry] {
        &self.document_types
    }

    /// Look up a document type by name
    pub fn document_type(&self, name: &str) -> Option<&DocumentTypeEntry> {
        self.document_types.iter().find(|t| t.name == name)
    }

    /// Departments in declared order
    pub fn departments(&self) -> &[DepartmentEntry] {
        &self.departments
    }

    /// Look up a department by code
    pub fn department(&self, code: &str) -> Option<&DepartmentEntry> {
        self.departments.iter().find(|d| d.code == code)
    }

    /// Reference pattern categories in declared order
    pub fn reference_patterns(&self) -> &[ReferencePatternCategory] {
        &self.reference_patterns
    }

    /// Look up the patterns for one category
    pub fn reference_category(&self, category: ReferenceCategory) -> Option<&ReferencePatternCategory> {
        self.reference_patterns.iter().find(|c| c.category == category)
    }
}

/// Builder that validates a taxonomy before it becomes immutable
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    projects: Vec<ProjectEntry>,
    document_types: Vec<DocumentTypeEntry>,
    departments: Vec<DepartmentEntry>,
    reference_patterns: Vec<ReferencePatternCategory>,
}

impl TaxonomyBuilder {
    /// Append a project (order of calls is classification order)
    pub fn project(mut self, entry: ProjectEntry) -> Self {
        self.projects.push(entry);
        self
    }

    /// Append a document type
    pub fn document_type(mut self, entry: DocumentTypeEntry) -> Self {
        self.document_types.push(entry);
        self
    }

    /// Append a department
    pub fn department(mut self, entry: DepartmentEntry) -> Self {
        self.departments.push(entry);
        self
    }

    /// Append a reference pattern category
    pub fn reference_patterns(mut self, entry: ReferencePatternCategory) -> Self {
        self.reference_patterns.push(entry);
        self
    }

    /// Validate and freeze the taxonomy
    ///
    /// # Errors
    /// Returns an error when a code or name is empty or duplicated, when a
    /// project uses the reserved `UNCAT` code, or when a pattern category is
    /// declared twice.
    pub fn build(self) -> Result<Taxonomy, String> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.code.trim().is_empty() {
                return Err("Project code cannot be empty".to_string());
            }
            if project.code.eq_ignore_ascii_case(UNCATEGORIZED_CODE) {
                return Err(format!("Project code '{}' is reserved", project.code));
            }
            if !seen.insert(project.code.as_str()) {
                return Err(format!("Duplicate project code '{}'", project.code));
            }
        }

        let mut seen = HashSet::new();
        for doc_type in &self.document_types {
            if doc_type.name.trim().is_empty() {
                return Err("Document type name cannot be empty".to_string());
            }
            if !seen.insert(doc_type.name.as_str()) {
                return Err(format!("Duplicate document type '{}'", doc_type.name));
            }
        }

        let mut seen = HashSet::new();
        for department in &self.departments {
            if department.code.trim().is_empty() {
                return Err("Department code cannot be empty".to_string());
            }
            if !seen.insert(department.code.as_str()) {
                return Err(format!("Duplicate department code '{}'", department.code));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.reference_patterns {
            if !seen.insert(category.category) {
                return Err(format!(
                    "Duplicate reference pattern category '{}'",
                    category.category
                ));
            }
        }

        Ok(Taxonomy {
            projects: self.projects,
            document_types: self.document_types,
            departments: self.departments,
            reference_patterns: self.reference_patterns,
        })
    }
}
