//! The persistence seam.
//!
//! Editors never talk to the network directly; they hand payloads to a
//! [`Persistence`] implementation and receive the canonical entity back.

use async_trait::async_trait;
use folio_model::{Entity, Payload, Project};

use crate::error::Result;

/// Remote create/update operations consumed by the editing core.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Create a new entity owned by `owner_id`.
    async fn create_entity(&self, payload: &Payload, owner_id: &str) -> Result<Entity>;

    /// Update an existing entity owned by `owner_id`.
    async fn update_entity(&self, payload: &Payload, owner_id: &str) -> Result<Entity>;

    /// List the projects owned by `owner_id`.
    async fn fetch_projects(&self, owner_id: &str) -> Result<Vec<Project>>;

    /// Create or update depending on the payload.
    ///
    /// Blog posts are always created, profiles always updated, and projects
    /// updated only when they carry an id.
    async fn save(&self, payload: &Payload, owner_id: &str) -> Result<Entity> {
        if is_update(payload) {
            self.update_entity(payload, owner_id).await
        } else {
            self.create_entity(payload, owner_id).await
        }
    }
}

/// Whether a payload targets an existing entity.
pub fn is_update(payload: &Payload) -> bool {
    match payload {
        Payload::Blog(_) => false,
        Payload::Project(project) => project.id.is_some(),
        Payload::Profile(_) => true,
    }
}
