//! Error types for the Classifier

use thiserror::Error;

/// Errors that can occur while preparing the classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A reference pattern failed to compile
    #[error("Invalid pattern in category '{category}': {source}")]
    InvalidPattern {
        /// Category the pattern belongs to
        category: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The taxonomy violates a structural rule
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// I/O error while reading a taxonomy file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
