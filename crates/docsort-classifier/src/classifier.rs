//! Project and document-type resolution

use docsort_domain::{ProjectMatch, Taxonomy};
use std::sync::Arc;
use tracing::trace;

/// Result of classifying one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Resolved project (sentinel on a miss)
    pub project: ProjectMatch,

    /// Resolved document type, if any prefix matched
    pub document_type: Option<String>,
}

/// Resolves texts to projects and document types
///
/// Matching is exact substring containment after uppercasing both sides.
/// Entries are scanned in taxonomy order and the first hit wins, even when
/// a later alias would be a longer or more specific match.
#[derive(Debug, Clone)]
pub struct EntityClassifier {
    taxonomy: Arc<Taxonomy>,
    // Uppercased copies, index-aligned with the taxonomy tables
    codes: Vec<String>,
    aliases: Vec<Vec<String>>,
    prefixes: Vec<Vec<String>>,
}

impl EntityClassifier {
    /// Create a classifier over a taxonomy snapshot
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        let codes = taxonomy
            .projects()
            .iter()
            .map(|p| p.code.to_uppercase())
            .collect();
        let aliases = taxonomy
            .projects()
            .iter()
            .map(|p| p.aliases.iter().map(|a| a.to_uppercase()).collect())
            .collect();
        let prefixes = taxonomy
            .document_types()
            .iter()
            .map(|t| t.prefixes.iter().map(|p| p.to_uppercase()).collect())
            .collect();

        Self {
            taxonomy,
            codes,
            aliases,
            prefixes,
        }
    }

    /// The taxonomy this classifier reads from
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Resolve the project a text refers to
    ///
    /// Phase 1 looks for any project code, phase 2 for any alias. Returns the
    /// `UNCAT` sentinel when neither phase hits.
    pub fn identify_project(&self, text: &str) -> ProjectMatch {
        let text = text.to_uppercase();
        let projects = self.taxonomy.projects();

        for (idx, code) in self.codes.iter().enumerate() {
            if text.contains(code.as_str()) {
                trace!("Project {} matched by code", projects[idx].code);
                return projects[idx].to_match();
            }
        }

        for (idx, aliases) in self.aliases.iter().enumerate() {
            if let Some(alias) = aliases.iter().find(|a| text.contains(a.as_str())) {
                trace!("Project {} matched by alias '{}'", projects[idx].code, alias);
                return projects[idx].to_match();
            }
        }

        ProjectMatch::uncategorized()
    }

    /// Resolve the document type of a text from its prefixes
    ///
    /// Keyword lists are not consulted. `None` means "no type", not an error.
    pub fn identify_document_type(&self, text: &str) -> Option<&str> {
        let text = text.to_uppercase();
        self.prefixes
            .iter()
            .position(|prefixes| prefixes.iter().any(|p| text.contains(p.as_str())))
            .map(|idx| self.taxonomy.document_types()[idx].name.as_str())
    }

    /// Resolve both project and document type
    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            project: self.identify_project(text),
            document_type: self.identify_document_type(text).map(str::to_string),
        }
    }

    /// Whether a text mentions a given project by code or alias
    ///
    /// Unknown codes never match.
    pub fn mentions_project(&self, code: &str, text: &str) -> bool {
        let Some(idx) = self
            .taxonomy
            .projects()
            .iter()
            .position(|p| p.code.eq_ignore_ascii_case(code))
        else {
            return false;
        };

        let text = text.to_uppercase();
        text.contains(self.codes[idx].as_str())
            || self.aliases[idx].iter().any(|a| text.contains(a.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_domain::{DocumentTypeEntry, ProjectEntry};

    fn classifier() -> EntityClassifier {
        let taxonomy = Taxonomy::builder()
            .project(ProjectEntry::new("PD002", "Anantara Palm", ["TIARA", "PALM"]))
            .project(ProjectEntry::new("PD015", "Dubai Tiara Towers", ["TIARA", "DTT"]))
            .project(ProjectEntry::new("PD031", "Seven Hotel", ["SHA", "SEVEN HOTEL"]))
            .document_type(DocumentTypeEntry::new("Letter", ["LOA", "LTR"], ["Letter"]))
            .document_type(DocumentTypeEntry::new("Agreement", ["MOU"], ["Contract"]))
            .build()
            .unwrap();
        EntityClassifier::new(Arc::new(taxonomy))
    }

    #[test]
    fn test_code_beats_alias() {
        let c = classifier();
        // "TIARA" would resolve to PD002, but a code anywhere wins first
        let m = c.identify_project("Tiara handover for pd031");
        assert_eq!(m.code, "PD031");
    }

    #[test]
    fn test_alias_collision_first_declared_wins() {
        let c = classifier();
        assert_eq!(c.identify_project("tiara towers").code, "PD002");
    }

    #[test]
    fn test_earlier_short_alias_beats_later_long_alias() {
        let c = classifier();
        // PD002's "PALM" comes before PD031 in store order
        assert_eq!(c.identify_project("SEVEN HOTEL near the palm").code, "PD002");
    }

    #[test]
    fn test_miss_is_uncategorized() {
        let c = classifier();
        let m = c.identify_project("nothing to see");
        assert!(m.is_uncategorized());
        assert_eq!(m.name, "Uncategorized");
    }

    #[test]
    fn test_document_type_prefix_only() {
        let c = classifier();
        assert_eq!(c.identify_document_type("loa-123"), Some("Letter"));
        assert_eq!(c.identify_document_type("signed MOU"), Some("Agreement"));
        // Keywords are not consulted
        assert_eq!(c.identify_document_type("a Contract"), None);
    }

    #[test]
    fn test_classify_combines_both() {
        let c = classifier();
        let result = c.classify("LTR about SHA");
        assert_eq!(result.project.code, "PD031");
        assert_eq!(result.document_type.as_deref(), Some("Letter"));
    }

    #[test]
    fn test_mentions_project() {
        let c = classifier();
        assert!(c.mentions_project("PD015", "dtt site visit"));
        assert!(c.mentions_project("pd015", "PD015 minutes"));
        assert!(!c.mentions_project("PD015", "seven hotel"));
        assert!(!c.mentions_project("NOPE", "anything"));
    }
}
