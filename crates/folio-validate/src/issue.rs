//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Issues are shown
//! inline next to the offending control, never as notifications.

use serde::Serialize;

/// Validation issue for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
    /// Required field is empty or whitespace-only.
    Required { field: &'static str },
    /// Text exceeds its maximum length (in characters).
    TooLong {
        field: &'static str,
        max_allowed: usize,
        found: usize,
    },
    /// Comma-separated tag list has an empty token.
    MalformedTags { field: &'static str, position: usize },
    /// Tag list holds more entries than allowed.
    TooManyTags {
        field: &'static str,
        max_allowed: usize,
        found: usize,
    },
    /// Tag list holds an empty entry.
    BlankTag { field: &'static str, position: usize },
}

impl Issue {
    /// Field this issue belongs to.
    pub fn field(&self) -> &'static str {
        match *self {
            Issue::Required { field }
            | Issue::TooLong { field, .. }
            | Issue::MalformedTags { field, .. }
            | Issue::TooManyTags { field, .. }
            | Issue::BlankTag { field, .. } => field,
        }
    }

    /// Short label for the kind of rule that failed.
    pub fn label(&self) -> &'static str {
        match self {
            Issue::Required { .. } => "Required",
            Issue::TooLong { .. } => "Too long",
            Issue::MalformedTags { .. } => "Malformed tags",
            Issue::TooManyTags { .. } => "Too many tags",
            Issue::BlankTag { .. } => "Blank tag",
        }
    }

    /// Helper text shown under the offending control.
    pub fn message(&self) -> String {
        match self {
            Issue::Required { .. } => "Required.".to_string(),
            Issue::TooLong {
                max_allowed, found, ..
            } => format!(
                "Must be at most {} characters ({} entered).",
                max_allowed, found
            ),
            Issue::MalformedTags { .. } => "Must be a comma separated list.".to_string(),
            Issue::TooManyTags { max_allowed, .. } => {
                format!("No more than {} tags allowed.", max_allowed)
            }
            Issue::BlankTag { position, .. } => {
                format!("Tag {} is empty.", position + 1)
            }
        }
    }
}
