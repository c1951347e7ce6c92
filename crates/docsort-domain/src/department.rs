//! Department module (reference data, not used by classification)

/// A department or entity in the organisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentEntry {
    /// Department code (e.g. `STRED`)
    pub code: String,

    /// Canonical name
    pub name: String,

    /// Alternate identifiers, in declared order
    pub aliases: Vec<String>,
}

impl DepartmentEntry {
    /// Create a new department entry
    pub fn new<I, S>(code: impl Into<String>, name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}
