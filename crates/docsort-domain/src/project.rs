//! Project module - the primary classification target

/// Reserved project code assigned when nothing in the taxonomy matches
pub const UNCATEGORIZED_CODE: &str = "UNCAT";

/// Display name paired with [`UNCATEGORIZED_CODE`]
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// A project in the taxonomy
///
/// The code is canonical and unique within a taxonomy. Aliases are free-form
/// and matched case-insensitively; they may overlap with another project's
/// aliases, in which case the project declared first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Canonical project code (e.g. `PD031`)
    pub code: String,

    /// Human-readable project name
    pub name: String,

    /// Alternate identifiers, in declared order
    pub aliases: Vec<String>,
}

impl ProjectEntry {
    /// Create a new project entry
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

    /// The project this entry resolves to
    pub fn to_match(&self) -> ProjectMatch {
        ProjectMatch {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

/// Result of resolving a text against the project table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectMatch {
    /// Resolved project code, `UNCAT` on a miss
    pub code: String,

    /// Resolved project name, `Uncategorized` on a miss
    pub name: String,
}

impl ProjectMatch {
    /// The sentinel match used when no project is found
    pub fn uncategorized() -> Self {
        Self {
            code: UNCATEGORIZED_CODE.to_string(),
            name: UNCATEGORIZED_NAME.to_string(),
        }
    }

    /// Whether this is the sentinel match
    pub fn is_uncategorized(&self) -> bool {
        self.code == UNCATEGORIZED_CODE
    }
}
