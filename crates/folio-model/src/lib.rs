//! Data model types for Folio Studio.
//!
//! This crate provides the shapes shared by every editing surface:
//! - **Entities**: canonical, server-confirmed blog posts, projects and profiles
//! - **Drafts**: uncommitted, locally-held copies being created or edited
//! - **Payloads**: the wire shape sent to the persistence API
//!
//! # Module Organization
//!
//! - [`entity`]: Canonical entities and the [`EntityKind`] discriminant
//! - [`draft`]: Draft shapes and their typed field enums
//! - [`payload`]: Wire payloads (tags as trimmed token lists)
//! - [`tags`]: Comma-separated tag parsing shared by validation and payloads

pub mod draft;
pub mod entity;
pub mod error;
pub mod payload;
pub mod tags;

pub use draft::{
    BlogDraft, BlogField, Draft, DraftFields, MAX_PROFILE_TAGS, ProfileDraft, ProfileField,
    ProjectDraft, ProjectField,
};
pub use entity::{BlogPost, Entity, EntityKind, Profile, Project};
pub use error::{ModelError, Result};
pub use payload::{BlogPayload, Payload, ProfilePayload, ProjectPayload};
pub use tags::{TagParseError, join_tags, parse_tags};
