//! Behavioural tests for the draft rule sets.

use folio_model::{BlogDraft, Draft, ProfileDraft, parse_tags};
use folio_validate::{Issue, Validatable, validate};
use proptest::prelude::*;

fn blog(title: &str, description: &str, tags: &str, text: &str) -> BlogDraft {
    BlogDraft {
        title: title.to_string(),
        description: description.to_string(),
        image: String::new(),
        tags: tags.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn test_missing_title_flags_only_title() {
    let result = blog("", "x", "a,b", "y").validate();
    assert!(!result.is_valid());
    assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["title"]);
    assert!(!result.is_invalid("description"));
    assert!(!result.is_invalid("image"));
}

#[test]
fn test_whitespace_counts_as_missing() {
    let result = blog("   ", "\t", "a", "y").validate();
    assert_eq!(
        result.invalid_fields().collect::<Vec<_>>(),
        vec!["title", "description"]
    );
}

#[test]
fn test_valid_draft_has_no_invalid_fields() {
    let result = blog("Post", "Desc", "a,b,c", "Body").validate();
    assert!(result.is_valid());
    assert!(result.issues().is_empty());
    assert!(result.outcomes().iter().all(|outcome| outcome.valid));
}

#[test]
fn test_title_length_boundary() {
    assert!(blog(&"t".repeat(60), "d", "a", "b").validate().is_valid());

    let result = blog(&"t".repeat(61), "d", "a", "b").validate();
    assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["title"]);
}

#[test]
fn test_malformed_tags() {
    assert!(blog("t", "d", "a,,c", "b").validate().is_invalid("tags"));
    assert!(blog("t", "d", "a,b,", "b").validate().is_invalid("tags"));
    assert!(!blog("t", "d", "a,b,c", "b").validate().is_invalid("tags"));
}

#[test]
fn test_tagged_draft_dispatches_to_kind_rules() {
    let profile = Draft::Profile(ProfileDraft::default());
    assert!(validate(&profile).is_valid());

    let empty_blog = Draft::Blog(BlogDraft::default());
    assert_eq!(
        validate(&empty_blog).invalid_fields().collect::<Vec<_>>(),
        vec!["title", "description", "tags", "text"]
    );
}

#[test]
fn test_helper_texts() {
    let result = blog(&"t".repeat(61), "", "a,,b", "b").validate();
    insta::assert_snapshot!(
        result.helper_text("title").unwrap_or_default(),
        @"Must be at most 60 characters (61 entered)."
    );
    insta::assert_snapshot!(result.helper_text("description").unwrap_or_default(), @"Required.");
    insta::assert_snapshot!(
        result.helper_text("tags").unwrap_or_default(),
        @"Must be a comma separated list."
    );
}

#[test]
fn test_issue_labels() {
    let issue = Issue::MalformedTags {
        field: "tags",
        position: 0,
    };
    assert_eq!(issue.label(), "Malformed tags");
    assert_eq!(issue.field(), "tags");
}

proptest! {
    #[test]
    fn prop_titles_up_to_limit_pass(title in "[a-zA-Z0-9]{1,60}") {
        prop_assert!(blog(&title, "d", "a", "b").validate().is_valid());
    }

    #[test]
    fn prop_titles_over_limit_fail(title in "[a-z]{61,120}") {
        let result = blog(&title, "d", "a", "b").validate();
        prop_assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn prop_exactly_missing_fields_flagged(mask in 0u8..16) {
        let pick = |bit: u8, value: &str| if mask & (1u8 << bit) != 0 { String::new() } else { value.to_string() };
        let draft = blog(&pick(0, "Post"), &pick(1, "Desc"), &pick(2, "a,b"), &pick(3, "Body"));

        let expected: Vec<&str> = ["title", "description", "tags", "text"]
            .into_iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1u8 << bit) != 0)
            .map(|(_, field)| field)
            .collect();

        let result = draft.validate();
        prop_assert_eq!(result.is_valid(), expected.is_empty());
        prop_assert_eq!(result.invalid_fields().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_well_formed_tag_lists_pass(tokens in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let raw = tokens.join(",");
        prop_assert!(blog("t", "d", &raw, "b").validate().is_valid());
        prop_assert_eq!(parse_tags(&raw).unwrap(), tokens);
    }

    #[test]
    fn prop_validation_is_deterministic(title in ".{0,80}", tags in "[a-z,]{0,12}") {
        let draft = blog(&title, "d", &tags, "b");
        prop_assert_eq!(draft.validate(), draft.validate());
    }
}
