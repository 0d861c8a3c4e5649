//! Canonical entities as confirmed by the server.
//!
//! Field names are camelCase on the wire to match the web API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// A published blog post.
    BlogPost,
    /// A showcased project.
    Project,
    /// A user's profile ("Space" owner).
    Profile,
}

impl EntityKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BlogPost => "blog post",
            Self::Project => "project",
            Self::Profile => "profile",
        }
    }

    /// Collection path segment used by the web API.
    ///
    /// Profiles are addressed by the user resource itself and have none.
    pub fn collection(&self) -> Option<&'static str> {
        match self {
            Self::BlogPost => Some("blogs"),
            Self::Project => Some("projects"),
            Self::Profile => None,
        }
    }
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub summary: String,
    pub github: String,
    pub linkedin: String,
    pub profile_image: String,
    pub tags: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Any canonical entity, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entity", rename_all = "camelCase")]
pub enum Entity {
    BlogPost(BlogPost),
    Project(Project),
    Profile(Profile),
}

impl Entity {
    /// Kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::BlogPost(_) => EntityKind::BlogPost,
            Self::Project(_) => EntityKind::Project,
            Self::Profile(_) => EntityKind::Profile,
        }
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::BlogPost(post) => &post.id,
            Self::Project(project) => &project.id,
            Self::Profile(profile) => &profile.id,
        }
    }

    /// Display title (profiles use the user's name).
    pub fn title(&self) -> &str {
        match self {
            Self::BlogPost(post) => &post.title,
            Self::Project(project) => &project.title,
            Self::Profile(profile) => &profile.name,
        }
    }
}

impl From<BlogPost> for Entity {
    fn from(post: BlogPost) -> Self {
        Self::BlogPost(post)
    }
}

impl From<Project> for Entity {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}

impl From<Profile> for Entity {
    fn from(profile: Profile) -> Self {
        Self::Profile(profile)
    }
}
