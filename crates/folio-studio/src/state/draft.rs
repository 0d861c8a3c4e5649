//! Draft state controller.
//!
//! Owns one in-progress draft plus the invalid markers from the last
//! validation. Field edits never validate; markers change only through
//! [`DraftController::apply_validation`] and [`DraftController::clear_invalid`].

use tracing::trace;

use folio_model::DraftFields;
use folio_validate::{Validatable, ValidationResult};

use crate::error::Result;

/// In-progress draft with per-field invalid markers.
#[derive(Debug, Clone)]
pub struct DraftController<D: DraftFields> {
    /// State restored by [`reset`](Self::reset).
    seed: D,
    draft: D,
    validation: ValidationResult,
}

impl<D: DraftFields> Default for DraftController<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: DraftFields> DraftController<D> {
    /// Create a controller seeded with `seed`.
    pub fn new(seed: D) -> Self {
        Self {
            draft: seed.clone(),
            seed,
            validation: ValidationResult::default(),
        }
    }

    /// Current draft.
    #[inline]
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Replace one field. Other fields and the invalid markers are untouched.
    pub fn set_field(&mut self, field: D::Field, value: impl Into<String>) {
        trace!(kind = D::KIND.label(), field = D::field_name(field), "field edited");
        self.draft.set(field, value.into());
    }

    /// Replace one field addressed by name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = D::field_by_name(name)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Apply an edit that is not a single text field (e.g. a tag list).
    pub fn edit(&mut self, edit: impl FnOnce(&mut D)) {
        edit(&mut self.draft);
    }

    /// Restore the seed and clear every invalid marker.
    pub fn reset(&mut self) {
        self.draft = self.seed.clone();
        self.validation = ValidationResult::default();
    }

    /// Replace the seed and reset to it.
    pub fn reseed(&mut self, seed: D) {
        self.seed = seed;
        self.reset();
    }

    /// Whether the draft differs from its seed.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.seed
    }

    /// Whether the last validation flagged `field`.
    pub fn is_invalid(&self, field: D::Field) -> bool {
        self.validation.is_invalid(D::field_name(field))
    }

    /// Helper text for a flagged field.
    pub fn helper_text(&self, field: D::Field) -> Option<String> {
        self.validation.helper_text(D::field_name(field))
    }

    /// Last validation result stored in the controller.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn apply_validation(&mut self, result: ValidationResult) {
        self.validation = result;
    }

    pub fn clear_invalid(&mut self) {
        self.validation = ValidationResult::default();
    }
}

impl<D: DraftFields + Validatable> DraftController<D> {
    /// Validate the whole draft without touching the markers.
    pub fn check(&self) -> ValidationResult {
        self.draft.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlogDraft, BlogField, ModelError};

    #[test]
    fn test_set_field_does_not_validate() {
        let mut controller = DraftController::<BlogDraft>::default();
        controller.set_field(BlogField::Title, "");
        assert!(!controller.is_invalid(BlogField::Title));
        assert!(controller.validation().is_valid());
    }

    #[test]
    fn test_set_field_leaves_other_fields() {
        let mut controller = DraftController::<BlogDraft>::default();
        controller.set_field(BlogField::Text, "Body");
        controller.set_field(BlogField::Title, "Post");
        assert_eq!(controller.draft().text, "Body");
        assert_eq!(controller.draft().title, "Post");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = DraftController::<BlogDraft>::default();
        controller.set_field(BlogField::Title, "Post");
        let result = controller.check();
        controller.apply_validation(result);
        assert!(controller.is_invalid(BlogField::Description));

        controller.reset();
        let once = controller.clone();
        controller.reset();

        assert_eq!(controller.draft(), once.draft());
        assert_eq!(controller.validation(), once.validation());
        assert_eq!(controller.draft(), &BlogDraft::default());
        assert!(!controller.is_invalid(BlogField::Description));
    }

    #[test]
    fn test_reset_restores_seed() {
        let seed = BlogDraft {
            title: "Seed".into(),
            ..Default::default()
        };
        let mut controller = DraftController::new(seed.clone());
        controller.set_field(BlogField::Title, "Changed");
        assert!(controller.is_dirty());

        controller.reset();
        assert_eq!(controller.draft(), &seed);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn test_set_field_by_name() {
        let mut controller = DraftController::<BlogDraft>::default();
        controller.set_field_by_name("tags", "a,b").unwrap();
        assert_eq!(controller.draft().tags, "a,b");

        let err = controller.set_field_by_name("github", "x").unwrap_err();
        assert!(matches!(
            err,
            crate::StudioError::Draft(ModelError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_helper_text_follows_markers() {
        let mut controller = DraftController::<BlogDraft>::default();
        controller.apply_validation(controller.check());
        assert_eq!(
            controller.helper_text(BlogField::Title).as_deref(),
            Some("Required.")
        );
        controller.clear_invalid();
        assert_eq!(controller.helper_text(BlogField::Title), None);
    }
}
