//! Text length checks.
//!
//! Lengths are counted in characters, not bytes.

use crate::issue::Issue;

/// Maximum title length for blog posts, projects and profiles.
pub const MAX_TITLE_LENGTH: usize = 60;

/// Check that `value` holds at most `max_allowed` characters.
pub fn check(field: &'static str, value: &str, max_allowed: usize) -> Option<Issue> {
    let found = value.chars().count();
    (found > max_allowed).then_some(Issue::TooLong {
        field,
        max_allowed,
        found,
    })
}
