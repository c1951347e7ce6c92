//! Reference-number extraction

use crate::error::ClassifierError;
use docsort_domain::{ReferenceCategory, Taxonomy};
use regex::Regex;
use tracing::debug;

/// One reference found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Category whose grammar produced the match
    pub category: ReferenceCategory,

    /// Index of the pattern within its category
    pub pattern_index: usize,

    /// Full matched text
    pub matched: String,

    /// Byte offset of the match start
    pub start: usize,

    /// Byte offset just past the match end
    pub end: usize,

    /// Capture groups in order; `None` for groups that did not participate
    pub groups: Vec<Option<String>>,
}

struct CompiledCategory {
    category: ReferenceCategory,
    patterns: Vec<Regex>,
}

/// Applies the taxonomy's reference pattern categories to text
///
/// Patterns are compiled once. Matching uses search semantics (a match may
/// start anywhere) and is case-sensitive, as the patterns are authored.
pub struct ReferenceExtractor {
    categories: Vec<CompiledCategory>,
}

impl ReferenceExtractor {
    /// Compile every pattern in the taxonomy
    ///
    /// # Errors
    /// Returns [`ClassifierError::InvalidPattern`] for the first pattern that
    /// fails to compile.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, ClassifierError> {
        let mut categories = Vec::with_capacity(taxonomy.reference_patterns().len());
        for category in taxonomy.reference_patterns() {
            let patterns = category
                .patterns
                .iter()
                .map(|source| {
                    Regex::new(source).map_err(|e| ClassifierError::InvalidPattern {
                        category: category.category.to_string(),
                        source: e,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            categories.push(CompiledCategory {
                category: category.category,
                patterns,
            });
        }

        debug!(
            "Compiled {} reference patterns in {} categories",
            categories.iter().map(|c| c.patterns.len()).sum::<usize>(),
            categories.len()
        );

        Ok(Self { categories })
    }

    /// Extract references from a text
    ///
    /// With `Some(category)` only that category is applied; with `None` every
    /// category is applied in taxonomy order. Within a category, patterns run
    /// in declared order and each contributes its non-overlapping matches in
    /// order of appearance. An empty result means "no reference found".
    pub fn extract(&self, text: &str, category: Option<ReferenceCategory>) -> Vec<ReferenceMatch> {
        let mut found = Vec::new();
        for compiled in &self.categories {
            if category.is_some_and(|c| c != compiled.category) {
                continue;
            }
            for (pattern_index, regex) in compiled.patterns.iter().enumerate() {
                for caps in regex.captures_iter(text) {
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    found.push(ReferenceMatch {
                        category: compiled.category,
                        pattern_index,
                        matched: whole.as_str().to_string(),
                        start: whole.start(),
                        end: whole.end(),
                        groups: caps
                            .iter()
                            .skip(1)
                            .map(|g| g.map(|m| m.as_str().to_string()))
                            .collect(),
                    });
                }
            }
        }
        found
    }

    /// The first reference across all categories, if any
    ///
    /// Categories are scanned in declared order, so a standard reference
    /// inside a longer letter reference wins over the letter reference.
    pub fn first_reference(&self, text: &str) -> Option<String> {
        self.extract(text, None).into_iter().next().map(|m| m.matched)
    }

    /// Categories this extractor knows, in order
    pub fn categories(&self) -> impl Iterator<Item = ReferenceCategory> + '_ {
        self.categories.iter().map(|c| c.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsort_domain::builtin;

    fn extractor() -> ReferenceExtractor {
        ReferenceExtractor::new(&builtin::taxonomy()).unwrap()
    }

    #[test]
    fn test_letter_reference_spans_whole_string() {
        let text = "LOA-DHA-ASTECO-ABS-DHSB-04PD-2024";
        let refs = extractor().extract(text, Some(ReferenceCategory::LetterReferences));
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].matched, text);
        assert_eq!(refs[0].start, 0);
        assert_eq!(refs[0].end, text.len());
        assert_eq!(
            refs[0].groups,
            vec![
                Some("DHA-ASTECO-ABS-DHSB".to_string()),
                Some("04".to_string()),
                Some("2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_ltr_reference() {
        let refs = extractor().extract("see LTR-DEPT-001-2024 attached", Some(ReferenceCategory::LetterReferences));
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].matched, "LTR-DEPT-001-2024");
        assert_eq!(refs[0].pattern_index, 1);
    }

    #[test]
    fn test_standard_matches_in_order_of_appearance() {
        let refs = extractor().extract("340PD-2017 and 12PD_2020", Some(ReferenceCategory::Standard));
        let first_pattern: Vec<_> = refs
            .iter()
            .filter(|r| r.pattern_index == 0)
            .map(|r| r.matched.as_str())
            .collect();
        assert_eq!(first_pattern, vec!["340PD-2017", "12PD_2020"]);
        assert_eq!(refs[0].groups[0].as_deref(), Some("340"));
        assert_eq!(refs[0].groups[1].as_deref(), Some("2017"));
    }

    #[test]
    fn test_slash_reference() {
        let refs = extractor().extract("ST/AS/0426-2013", Some(ReferenceCategory::Standard));
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].groups[2].as_deref(), Some("0426"));
    }

    #[test]
    fn test_department_project_examples() {
        let e = extractor();
        for text in [
            "STRED-NKHL-GBS-SHA-305PWB-21PD-2023",
            "STOAM-SI_ABS_OR-01PD-20",
            "STL-EME_ABS_OHA-340PD-2017",
        ] {
            let refs = e.extract(text, Some(ReferenceCategory::DepartmentProject));
            assert_eq!(refs.len(), 1, "{}", text);
            assert_eq!(refs[0].matched, text);
        }
    }

    #[test]
    fn test_special_format_captures_embedded_reference() {
        let refs = extractor().extract(
            "Re: terminated letter ref. no. STRED/X 305PD-2022 dated",
            Some(ReferenceCategory::SpecialFormats),
        );
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].groups[0].as_deref(), Some("305PD-2022"));
    }

    #[test]
    fn test_categories_are_independent() {
        let refs = extractor().extract("LOA-DHA-ASTECO-ABS-DHSB-04PD-2024", None);
        assert!(refs.iter().any(|r| r.category == ReferenceCategory::Standard));
        assert!(refs.iter().any(|r| r.category == ReferenceCategory::LetterReferences));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(extractor().extract("nothing here", None).is_empty());
        assert_eq!(extractor().first_reference("nothing here"), None);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        use docsort_domain::ReferencePatternCategory;
        let taxonomy = Taxonomy::builder()
            .reference_patterns(ReferencePatternCategory::new(ReferenceCategory::Standard, ["(unclosed"]))
            .build()
            .unwrap();
        let result = ReferenceExtractor::new(&taxonomy);
        assert!(matches!(result, Err(ClassifierError::InvalidPattern { .. })));
    }
}
