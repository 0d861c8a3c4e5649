//! Wire payloads sent to the persistence API.
//!
//! Payloads differ from drafts only in how tags travel: always as a list of
//! trimmed strings, never as the comma-joined editing form.

use serde::{Deserialize, Serialize};

use crate::draft::{BlogDraft, ProfileDraft, ProjectDraft};
use crate::entity::EntityKind;
use crate::error::Result;
use crate::tags::parse_tags;

/// Create payload for a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub text: String,
}

/// Create or update payload for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: String,
    pub url: String,
}

/// Update payload for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub title: String,
    pub company: String,
    pub email: String,
    pub summary: String,
    pub github: String,
    pub linkedin: String,
    pub tags: Vec<String>,
}

/// Any payload, tagged by the entity kind it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Blog(BlogPayload),
    Project(ProjectPayload),
    Profile(ProfilePayload),
}

impl Payload {
    /// Entity kind written by this payload.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Blog(_) => EntityKind::BlogPost,
            Self::Project(_) => EntityKind::Project,
            Self::Profile(_) => EntityKind::Profile,
        }
    }
}

impl BlogDraft {
    /// Transform into the wire shape.
    ///
    /// Fails only when the tags string does not parse; a validated draft
    /// always converts.
    pub fn to_payload(&self) -> Result<BlogPayload> {
        Ok(BlogPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: parse_tags(&self.tags)?,
            text: self.text.clone(),
        })
    }
}

impl ProjectDraft {
    /// Transform into the wire shape.
    pub fn to_payload(&self) -> Result<ProjectPayload> {
        Ok(ProjectPayload {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: parse_tags(&self.tags)?,
            github: self.github.clone(),
            url: self.url.clone(),
        })
    }
}

impl ProfileDraft {
    /// Transform into the wire shape, trimming each tag.
    pub fn to_payload(&self) -> ProfilePayload {
        ProfilePayload {
            title: self.title.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            summary: self.summary.clone(),
            github: self.github.clone(),
            linkedin: self.linkedin.clone(),
            tags: self.tags.iter().map(|tag| tag.trim().to_string()).collect(),
        }
    }
}
