//! Kind-specific rule sets.
//!
//! Every rule set validates the whole draft, whichever editing step is
//! currently visible.

pub mod length;
pub mod required;
pub mod tags;

use folio_model::{BlogDraft, MAX_PROFILE_TAGS, ProfileDraft, ProjectDraft};

use crate::issue::Issue;
use crate::result::ValidationResult;

use length::MAX_TITLE_LENGTH;

/// Blog post rules: title, description, tags and text are required.
pub fn blog(draft: &BlogDraft) -> ValidationResult {
    let checked = ["title", "description", "tags", "text"];
    let mut issues = required::check(&[
        ("title", draft.title.as_str()),
        ("description", draft.description.as_str()),
        ("tags", draft.tags.as_str()),
        ("text", draft.text.as_str()),
    ]);
    title_and_tags(&mut issues, &draft.title, &draft.tags);
    ValidationResult::new(&checked, sorted(&checked, issues))
}

/// Project rules: title, description and tags are required.
pub fn project(draft: &ProjectDraft) -> ValidationResult {
    let checked = ["title", "description", "tags"];
    let mut issues = required::check(&[
        ("title", draft.title.as_str()),
        ("description", draft.description.as_str()),
        ("tags", draft.tags.as_str()),
    ]);
    title_and_tags(&mut issues, &draft.title, &draft.tags);
    ValidationResult::new(&checked, sorted(&checked, issues))
}

/// Profile rules: nothing is required, but the title is length-limited and
/// the tag list is capped with no blank entries.
pub fn profile(draft: &ProfileDraft) -> ValidationResult {
    let checked = ["title", "tags"];
    let mut issues = Vec::new();
    issues.extend(length::check("title", &draft.title, MAX_TITLE_LENGTH));
    issues.extend(tags::check_buffer("tags", &draft.tags, MAX_PROFILE_TAGS));
    ValidationResult::new(&checked, issues)
}

/// Secondary title/tag rules, skipped for fields already flagged as missing.
fn title_and_tags(issues: &mut Vec<Issue>, title: &str, tags_raw: &str) {
    if !required::is_blank(title) {
        issues.extend(length::check("title", title, MAX_TITLE_LENGTH));
    }
    if !required::is_blank(tags_raw) {
        issues.extend(tags::check_list("tags", tags_raw));
    }
}

/// Order issues by the position of their field in the check list.
fn sorted(checked: &[&'static str], mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by_key(|issue| {
        checked
            .iter()
            .position(|field| *field == issue.field())
            .unwrap_or(checked.len())
    });
    issues
}
