//! Required field checks.
//!
//! A required field must contain at least one non-whitespace character.

use crate::issue::Issue;

/// Check that each `(field, value)` pair is non-blank.
pub fn check(fields: &[(&'static str, &str)]) -> Vec<Issue> {
    fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|&(field, _)| Issue::Required { field })
        .collect()
}

/// Whether a value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
