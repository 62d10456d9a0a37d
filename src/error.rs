//! Error types for rapid-hearst.

use thiserror::Error;

/// Result type for rapid-hearst operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rapid-hearst operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A built-in surface pattern failed to compile. Only possible at
    /// catalog-build time; an invalid built-in pattern is a programming
    /// error, not a runtime condition.
    #[error("Pattern {id} failed to compile: {source}")]
    PatternCompile {
        /// Identifier of the offending pattern row.
        id: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// The POS tagger collaborator reported a failure.
    #[error("Tagging failed: {0}")]
    Tagging(String),

    /// An extractor spec failed validation.
    #[error("Invalid extractor spec: {0}")]
    Spec(String),
}

impl Error {
    /// Create a tagging error.
    pub fn tagging(msg: impl Into<String>) -> Self {
        Error::Tagging(msg.into())
    }

    /// Create a spec error.
    pub fn spec(msg: impl Into<String>) -> Self {
        Error::Spec(msg.into())
    }
}
