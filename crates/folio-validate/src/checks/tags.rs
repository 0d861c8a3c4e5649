//! Tag checks.
//!
//! Blog and project drafts carry tags as a comma-separated string; profiles
//! carry an explicit list edited through the tag buffer.

use folio_model::{TagParseError, parse_tags};

use crate::issue::Issue;

/// Check that a comma-separated tags string has no empty token.
///
/// Blank input is left to the required check.
pub fn check_list(field: &'static str, raw: &str) -> Option<Issue> {
    match parse_tags(raw) {
        Ok(_) | Err(TagParseError::Empty) => None,
        Err(TagParseError::BlankToken { position }) => {
            Some(Issue::MalformedTags { field, position })
        }
    }
}

/// Check an explicit tag list against a capacity and for blank entries.
pub fn check_buffer(field: &'static str, tags: &[String], max_allowed: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if tags.len() > max_allowed {
        issues.push(Issue::TooManyTags {
            field,
            max_allowed,
            found: tags.len(),
        });
    }

    issues.extend(
        tags.iter()
            .enumerate()
            .filter(|(_, tag)| tag.trim().is_empty())
            .map(|(position, _)| Issue::BlankTag { field, position }),
    );

    issues
}
