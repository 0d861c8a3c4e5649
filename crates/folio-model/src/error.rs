//! Error types for model operations.

use thiserror::Error;

use crate::tags::TagParseError;

/// Errors raised while addressing or converting model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A field name did not match any field of the draft kind.
    #[error("Unknown {kind} field: {name}")]
    UnknownField {
        /// Draft kind label (e.g. "blog post").
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// The tags string could not be turned into a token list.
    #[error("Invalid tags: {0}")]
    Tags(#[from] TagParseError),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
