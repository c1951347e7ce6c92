//! Document type module

/// A document type category (e.g. "Letter", "Agreement")
///
/// Only `prefixes` take part in matching. `keywords` are carried as
/// reference data and are not consulted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypeEntry {
    /// Category name
    pub name: String,

    /// Prefix tokens, in declared order
    pub prefixes: Vec<String>,

    /// Keyword tokens, in declared order
    pub keywords: Vec<String>,
}

impl DocumentTypeEntry {
    /// Create a new document type entry
    pub fn new<P, K, S, T>(name: impl Into<String>, prefixes: P, keywords: K) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        K: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}
