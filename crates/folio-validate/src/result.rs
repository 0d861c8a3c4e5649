//! Validation result with itemized per-field outcomes.

use serde::Serialize;

use crate::issue::Issue;

/// Outcome of the rules checked for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub field: &'static str,
    pub valid: bool,
}

/// Result of validating a draft.
///
/// Outcomes are ordered as the fields were checked. A field absent from the
/// result counts as valid, which is also what [`ValidationResult::default`]
/// reports for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    outcomes: Vec<FieldOutcome>,
    issues: Vec<Issue>,
}

impl ValidationResult {
    /// Build a result from the checked fields and the issues found.
    pub fn new(checked: &[&'static str], issues: Vec<Issue>) -> Self {
        let outcomes = checked
            .iter()
            .map(|&field| FieldOutcome {
                field,
                valid: !issues.iter().any(|issue| issue.field() == field),
            })
            .collect();
        Self { outcomes, issues }
    }

    /// Whether every rule passed.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Per-field outcomes in check order.
    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// All issues found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether a field failed any rule. Unknown fields are valid.
    pub fn is_invalid(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field() == field)
    }

    /// Names of the fields that failed, in check order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.valid)
            .map(|outcome| outcome.field)
    }

    /// Issues recorded for one field.
    pub fn issues_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |issue| issue.field() == field)
    }

    /// Combined helper text for a field, if it failed.
    pub fn helper_text(&self, field: &str) -> Option<String> {
        let messages: Vec<String> = self.issues_for(field).map(Issue::message).collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(" "))
        }
    }
}
