//! Field-level validation for Folio Studio drafts.
//!
//! Validation is pure and deterministic: the same draft always yields the
//! same [`ValidationResult`]. Each draft kind has its own rule set, reached
//! through the [`Validatable`] capability:
//!
//! - **Required**: title, description, tags (and text for blog posts) must
//!   contain non-whitespace characters
//! - **Length**: titles hold at most 60 characters
//! - **Tags**: comma-separated lists may not contain empty tokens; profile
//!   tag lists hold at most 6 non-blank entries
//!
//! # Example
//!
//! ```
//! use folio_model::BlogDraft;
//! use folio_validate::Validatable;
//!
//! let draft = BlogDraft {
//!     title: String::new(),
//!     description: "x".to_string(),
//!     tags: "a,b".to_string(),
//!     text: "y".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = draft.validate();
//! assert!(!result.is_valid());
//! assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["title"]);
//! ```

pub mod checks;
mod issue;
mod result;

use folio_model::{BlogDraft, Draft, ProfileDraft, ProjectDraft};

pub use checks::length::MAX_TITLE_LENGTH;
pub use issue::Issue;
pub use result::{FieldOutcome, ValidationResult};

/// Capability implemented by every draft kind that can be validated.
pub trait Validatable {
    /// Run this kind's rule set over the whole draft.
    fn validate(&self) -> ValidationResult;
}

impl Validatable for BlogDraft {
    fn validate(&self) -> ValidationResult {
        checks::blog(self)
    }
}

impl Validatable for ProjectDraft {
    fn validate(&self) -> ValidationResult {
        checks::project(self)
    }
}

impl Validatable for ProfileDraft {
    fn validate(&self) -> ValidationResult {
        checks::profile(self)
    }
}

impl Validatable for Draft {
    fn validate(&self) -> ValidationResult {
        match self {
            Draft::Blog(draft) => draft.validate(),
            Draft::Project(draft) => draft.validate(),
            Draft::Profile(draft) => draft.validate(),
        }
    }
}

/// Validate any draft.
pub fn validate<T: Validatable + ?Sized>(draft: &T) -> ValidationResult {
    draft.validate()
}
