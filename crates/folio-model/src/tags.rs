//! Comma-separated tag parsing.
//!
//! Blog and project drafts hold their tags as a single comma-joined string
//! while the persistence API expects a list of trimmed tokens.

use thiserror::Error;

/// Reasons a tags string fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagParseError {
    /// The whole string is empty or whitespace.
    #[error("no tags given")]
    Empty,

    /// A token between commas is empty or whitespace (0-based position).
    #[error("tag {position} is empty")]
    BlankToken {
        /// Index of the offending token.
        position: usize,
    },
}

/// Parse a comma-separated list of non-empty tokens.
///
/// Tokens are trimmed. A leading, trailing or doubled comma yields an empty
/// token and is rejected.
///
/// ```
/// use folio_model::{TagParseError, parse_tags};
///
/// assert_eq!(parse_tags("a, b,c").unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(parse_tags("a,,c"), Err(TagParseError::BlankToken { position: 1 }));
/// ```
pub fn parse_tags(raw: &str) -> Result<Vec<String>, TagParseError> {
    if raw.trim().is_empty() {
        return Err(TagParseError::Empty);
    }

    raw.split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            if token.is_empty() {
                Err(TagParseError::BlankToken { position })
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

/// Join a tag list back into the comma-separated draft form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
