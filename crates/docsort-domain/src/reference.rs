//! Reference module - named groups of reference-number grammars

/// Reference pattern category
///
/// Each category encodes a structurally different reference grammar:
/// - Standard: bare numeric-coded references (`340PD-2017`)
/// - DepartmentProject: department-qualified compound references
/// - LetterReferences: letter-type-qualified references (`LOA-...`, `LTR-...`)
/// - SpecialFormats: references embedded after marker phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCategory {
    /// Bare numeric-coded references
    Standard,

    /// Department-qualified compound references
    DepartmentProject,

    /// Letter-type-qualified references
    LetterReferences,

    /// Free-text references after marker phrases
    SpecialFormats,
}

impl ReferenceCategory {
    /// All categories in their canonical order
    pub const ALL: [ReferenceCategory; 4] = [
        ReferenceCategory::Standard,
        ReferenceCategory::DepartmentProject,
        ReferenceCategory::LetterReferences,
        ReferenceCategory::SpecialFormats,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceCategory::Standard => "standard",
            ReferenceCategory::DepartmentProject => "department_project",
            ReferenceCategory::LetterReferences => "letter_references",
            ReferenceCategory::SpecialFormats => "special_formats",
        }
    }

    /// Parse a category from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ReferenceCategory::Standard),
            "department_project" => Some(ReferenceCategory::DepartmentProject),
            "letter_references" => Some(ReferenceCategory::LetterReferences),
            "special_formats" => Some(ReferenceCategory::SpecialFormats),
            _ => None,
        }
    }
}

impl std::str::FromStr for ReferenceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid reference category: {}", s))
    }
}

impl std::fmt::Display for ReferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category together with its regular-expression sources
///
/// Patterns are kept as source strings here; compilation belongs to the
/// classifier crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePatternCategory {
    /// Category identity
    pub category: ReferenceCategory,

    /// Regex sources, in declared order
    pub patterns: Vec<String>,
}

impl ReferencePatternCategory {
    /// Create a new pattern category
    pub fn new<I, S>(category: ReferenceCategory, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_round_trip() {
        for category in ReferenceCategory::ALL {
            assert_eq!(ReferenceCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            "LETTER_REFERENCES".parse::<ReferenceCategory>(),
            Ok(ReferenceCategory::LetterReferences)
        );
        assert!("letters".parse::<ReferenceCategory>().is_err());
    }
}
