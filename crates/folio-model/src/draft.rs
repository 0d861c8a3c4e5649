//! Draft shapes held by editing surfaces.
//!
//! Each draft kind has a typed field enum so hosts address fields without
//! stringly-typed lookups. Names are still available for hosts that bind
//! controls by name (see [`DraftFields::field_by_name`]).

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Profile, Project};
use crate::error::{ModelError, Result};
use crate::tags::join_tags;

/// Maximum number of tags a profile may carry.
pub const MAX_PROFILE_TAGS: usize = 6;

/// Field access shared by every draft kind.
pub trait DraftFields: Clone + Default + PartialEq + fmt::Debug {
    /// Typed field identifier.
    type Field: Copy + Eq + Hash + fmt::Debug + 'static;

    /// Entity kind this draft produces.
    const KIND: EntityKind;

    /// All editable fields in display order.
    fn fields() -> &'static [Self::Field];

    /// Stable name of a field (matches the wire name).
    fn field_name(field: Self::Field) -> &'static str;

    /// Current value of a field.
    fn get(&self, field: Self::Field) -> &str;

    /// Replace the value of a field.
    fn set(&mut self, field: Self::Field, value: String);

    /// Resolve a field from its name.
    fn field_by_name(name: &str) -> Result<Self::Field> {
        Self::fields()
            .iter()
            .copied()
            .find(|field| Self::field_name(*field) == name)
            .ok_or_else(|| ModelError::UnknownField {
                kind: Self::KIND.label(),
                name: name.to_string(),
            })
    }
}

// =============================================================================
// BLOG
// =============================================================================

/// Draft of a new blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    /// Selected image file name.
    pub image: String,
    /// Comma-joined tags.
    pub tags: String,
    /// Markdown body.
    pub text: String,
}

/// Editable blog draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogField {
    Title,
    Description,
    Image,
    Tags,
    Text,
}

impl DraftFields for BlogDraft {
    type Field = BlogField;

    const KIND: EntityKind = EntityKind::BlogPost;

    fn fields() -> &'static [BlogField] {
        &[
            BlogField::Title,
            BlogField::Description,
            BlogField::Image,
            BlogField::Tags,
            BlogField::Text,
        ]
    }

    fn field_name(field: BlogField) -> &'static str {
        match field {
            BlogField::Title => "title",
            BlogField::Description => "description",
            BlogField::Image => "image",
            BlogField::Tags => "tags",
            BlogField::Text => "text",
        }
    }

    fn get(&self, field: BlogField) -> &str {
        match field {
            BlogField::Title => &self.title,
            BlogField::Description => &self.description,
            BlogField::Image => &self.image,
            BlogField::Tags => &self.tags,
            BlogField::Text => &self.text,
        }
    }

    fn set(&mut self, field: BlogField, value: String) {
        match field {
            BlogField::Title => self.title = value,
            BlogField::Description => self.description = value,
            BlogField::Image => self.image = value,
            BlogField::Tags => self.tags = value,
            BlogField::Text => self.text = value,
        }
    }
}

// =============================================================================
// PROJECT
// =============================================================================

/// Draft of a new or edited project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    /// Identifier of the project being edited; `None` when creating.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Comma-joined tags.
    pub tags: String,
    pub github: String,
    pub url: String,
}

/// Editable project draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Title,
    Description,
    Image,
    Tags,
    Github,
    Url,
}

impl DraftFields for ProjectDraft {
    type Field = ProjectField;

    const KIND: EntityKind = EntityKind::Project;

    fn fields() -> &'static [ProjectField] {
        &[
            ProjectField::Title,
            ProjectField::Description,
            ProjectField::Image,
            ProjectField::Tags,
            ProjectField::Github,
            ProjectField::Url,
        ]
    }

    fn field_name(field: ProjectField) -> &'static str {
        match field {
            ProjectField::Title => "title",
            ProjectField::Description => "description",
            ProjectField::Image => "image",
            ProjectField::Tags => "tags",
            ProjectField::Github => "github",
            ProjectField::Url => "url",
        }
    }

    fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Title => &self.title,
            ProjectField::Description => &self.description,
            ProjectField::Image => &self.image,
            ProjectField::Tags => &self.tags,
            ProjectField::Github => &self.github,
            ProjectField::Url => &self.url,
        }
    }

    fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Title => self.title = value,
            ProjectField::Description => self.description = value,
            ProjectField::Image => self.image = value,
            ProjectField::Tags => self.tags = value,
            ProjectField::Github => self.github = value,
            ProjectField::Url => self.url = value,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            tags: join_tags(&project.tags),
            github: project.github.clone(),
            url: project.url.clone(),
        }
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Draft of a user's profile during in-place editing.
///
/// Tags are edited through a separate tag buffer and copied in at commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub title: String,
    pub company: String,
    pub email: String,
    pub summary: String,
    pub github: String,
    pub linkedin: String,
    pub tags: Vec<String>,
}

/// Editable profile text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Title,
    Company,
    Email,
    Summary,
    Github,
    Linkedin,
}

impl DraftFields for ProfileDraft {
    type Field = ProfileField;

    const KIND: EntityKind = EntityKind::Profile;

    fn fields() -> &'static [ProfileField] {
        &[
            ProfileField::Title,
            ProfileField::Company,
            ProfileField::Email,
            ProfileField::Summary,
            ProfileField::Github,
            ProfileField::Linkedin,
        ]
    }

    fn field_name(field: ProfileField) -> &'static str {
        match field {
            ProfileField::Title => "title",
            ProfileField::Company => "company",
            ProfileField::Email => "email",
            ProfileField::Summary => "summary",
            ProfileField::Github => "github",
            ProfileField::Linkedin => "linkedin",
        }
    }

    fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Title => &self.title,
            ProfileField::Company => &self.company,
            ProfileField::Email => &self.email,
            ProfileField::Summary => &self.summary,
            ProfileField::Github => &self.github,
            ProfileField::Linkedin => &self.linkedin,
        }
    }

    fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Title => self.title = value,
            ProfileField::Company => self.company = value,
            ProfileField::Email => self.email = value,
            ProfileField::Summary => self.summary = value,
            ProfileField::Github => self.github = value,
            ProfileField::Linkedin => self.linkedin = value,
        }
    }
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            title: profile.title.clone(),
            company: profile.company.clone(),
            email: profile.email.clone(),
            summary: profile.summary.clone(),
            github: profile.github.clone(),
            linkedin: profile.linkedin.clone(),
            tags: profile.tags.clone(),
        }
    }
}

// =============================================================================
// TAGGED DRAFT
// =============================================================================

/// Any draft, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "draft", rename_all = "camelCase")]
pub enum Draft {
    Blog(BlogDraft),
    Project(ProjectDraft),
    Profile(ProfileDraft),
}

impl Draft {
    /// Entity kind this draft produces.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Blog(_) => EntityKind::BlogPost,
            Self::Project(_) => EntityKind::Project,
            Self::Profile(_) => EntityKind::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_blog_field() {
        let mut draft = BlogDraft::default();
        draft.set(BlogField::Title, "Hello".to_string());
        assert_eq!(draft.get(BlogField::Title), "Hello");
        assert_eq!(draft.title, "Hello");
    }

    #[test]
    fn test_field_by_name() {
        assert_eq!(BlogDraft::field_by_name("text"), Ok(BlogField::Text));
        assert_eq!(
            ProfileDraft::field_by_name("linkedin"),
            Ok(ProfileField::Linkedin)
        );
    }

    #[test]
    fn test_field_by_name_unknown() {
        let err = ProjectDraft::field_by_name("text").unwrap_err();
        assert_eq!(err.to_string(), "Unknown project field: text");
    }

    #[test]
    fn test_project_draft_seeded_from_project() {
        let project = Project {
            id: "p1".to_string(),
            owner_id: "u1".to_string(),
            title: "Folio".to_string(),
            description: "Showcase".to_string(),
            image: String::new(),
            tags: vec!["rust".to_string(), "web".to_string()],
            github: String::new(),
            url: String::new(),
            created_at: None,
        };
        let draft = ProjectDraft::from(&project);
        assert_eq!(draft.id.as_deref(), Some("p1"));
        assert_eq!(draft.tags, "rust,web");
    }

    #[test]
    fn test_profile_draft_seeded_from_profile() {
        let profile = Profile {
            title: "Engineer".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
            ..Default::default()
        };
        let draft = ProfileDraft::from(&profile);
        assert_eq!(draft.title, "Engineer");
        assert_eq!(draft.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_draft_kind() {
        assert_eq!(
            Draft::Blog(BlogDraft::default()).kind(),
            EntityKind::BlogPost
        );
        assert_eq!(
            Draft::Profile(ProfileDraft::default()).kind(),
            EntityKind::Profile
        );
    }
}
