//! Taxonomy files
//!
//! A taxonomy file is TOML made of arrays of tables. Array order is
//! classification order, so the file is read into `Vec`s and handed to the
//! domain builder unchanged.
//!
//! ```toml
//! [[projects]]
//! code = "PD031"
//! name = "Seven Hotel & Apartments The Palm"
//! aliases = ["SHA", "SEVEN HOTEL"]
//!
//! [[reference_patterns]]
//! category = "letter_references"
//! patterns = ['LOA[-_]([A-Z]+)[-_](\d+)PD[-_](\d{4})']
//! ```

use crate::error::ClassifierError;
use docsort_domain::{
    DepartmentEntry, DocumentTypeEntry, ProjectEntry, ReferenceCategory, ReferencePatternCategory,
    Taxonomy,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A project as written in a taxonomy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDef {
    /// Canonical code
    pub code: String,
    /// Display name
    pub name: String,
    /// Alternate identifiers
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A document type as written in a taxonomy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeDef {
    /// Type name
    pub name: String,
    /// Prefix strings used for matching
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Keywords (stored, not used for matching)
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A department as written in a taxonomy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDef {
    /// Department code
    pub code: String,
    /// Display name
    pub name: String,
    /// Alternate identifiers
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A reference pattern category as written in a taxonomy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCategoryDef {
    /// Category name, e.g. `letter_references`
    pub category: String,
    /// Regular expressions in match order
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// On-disk taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyFile {
    /// Projects in classification order
    #[serde(default)]
    pub projects: Vec<ProjectDef>,

    /// Document types in classification order
    #[serde(default)]
    pub document_types: Vec<DocumentTypeDef>,

    /// Departments
    #[serde(default)]
    pub departments: Vec<DepartmentDef>,

    /// Reference pattern categories
    #[serde(default)]
    pub reference_patterns: Vec<PatternCategoryDef>,
}

impl TaxonomyFile {
    /// Read and parse a taxonomy file
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path)?;
        let file = Self::from_toml(&contents)?;
        info!(
            "Loaded taxonomy from {} ({} projects)",
            path.display(),
            file.projects.len()
        );
        Ok(file)
    }

    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate and freeze into a [`Taxonomy`]
    pub fn into_taxonomy(self) -> Result<Taxonomy, ClassifierError> {
        let mut builder = Taxonomy::builder();

        for p in self.projects {
            builder = builder.project(ProjectEntry::new(p.code, p.name, p.aliases));
        }
        for t in self.document_types {
            builder = builder.document_type(DocumentTypeEntry::new(t.name, t.prefixes, t.keywords));
        }
        for d in self.departments {
            builder = builder.department(DepartmentEntry::new(d.code, d.name, d.aliases));
        }
        for c in self.reference_patterns {
            let category = ReferenceCategory::parse(&c.category).ok_or_else(|| {
                ClassifierError::InvalidTaxonomy(format!(
                    "unknown reference category '{}'",
                    c.category
                ))
            })?;
            builder = builder.reference_patterns(ReferencePatternCategory::new(category, c.patterns));
        }

        builder.build().map_err(ClassifierError::InvalidTaxonomy)
    }

    /// Snapshot a [`Taxonomy`] into its file form
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        Self {
            projects: taxonomy
                .projects()
                .iter()
                .map(|p| ProjectDef {
                    code: p.code.clone(),
                    name: p.name.clone(),
                    aliases: p.aliases.clone(),
                })
                .collect(),
            document_types: taxonomy
                .document_types()
                .iter()
                .map(|t| DocumentTypeDef {
                    name: t.name.clone(),
                    prefixes: t.prefixes.clone(),
                    keywords: t.keywords.clone(),
                })
                .collect(),
            departments: taxonomy
                .departments()
                .iter()
                .map(|d| DepartmentDef {
                    code: d.code.clone(),
                    name: d.name.clone(),
                    aliases: d.aliases.clone(),
                })
                .collect(),
            reference_patterns: taxonomy
                .reference_patterns()
                .iter()
                .map(|c| PatternCategoryDef {
                    category: c.category.as_str().to_string(),
                    patterns: c.patterns.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_domain::builtin;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[projects]]
code = "PD900"
name = "Zulu Tower"
aliases = ["ZULU"]

[[projects]]
code = "PD100"
name = "Alpha Park"
aliases = ["ALPHA", "ZULU"]

[[document_types]]
name = "Letter"
prefixes = ["LTR"]

[[reference_patterns]]
category = "standard"
patterns = ['(\d+)PD[-_](\d{4})']
"#;

    #[test]
    fn test_parse_preserves_order() {
        let taxonomy = TaxonomyFile::from_toml(SAMPLE).unwrap().into_taxonomy().unwrap();
        let codes: Vec<_> = taxonomy.projects().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["PD900", "PD100"]);
        assert!(taxonomy.document_types()[0].keywords.is_empty());
        assert!(taxonomy.departments().is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml_str = r#"
[[reference_patterns]]
category = "nonsense"
patterns = []
"#;
        let result = TaxonomyFile::from_toml(toml_str).unwrap().into_taxonomy();
        assert!(matches!(result, Err(ClassifierError::InvalidTaxonomy(_))));
    }

    #[test]
    fn test_reserved_code_rejected() {
        let toml_str = r#"
[[projects]]
code = "UNCAT"
name = "Nope"
"#;
        let result = TaxonomyFile::from_toml(toml_str).unwrap().into_taxonomy();
        assert!(matches!(result, Err(ClassifierError::InvalidTaxonomy(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TaxonomyFile::from_toml("[[projects]\ncode ="),
            Err(ClassifierError::TomlParse(_))
        ));
    }

    #[test]
    fn test_builtin_survives_toml() {
        let original = builtin::taxonomy();
        let toml_str = TaxonomyFile::from_taxonomy(&original).to_toml().unwrap();
        let reloaded = TaxonomyFile::from_toml(&toml_str).unwrap().into_taxonomy().unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loaded = TaxonomyFile::load(file.path()).unwrap();
        assert_eq!(loaded.projects.len(), 2);
        assert_eq!(loaded.reference_patterns[0].category, "standard");
    }

    #[test]
    fn test_load_missing_file() {
        let result = TaxonomyFile::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ClassifierError::Io(_))));
    }
}
