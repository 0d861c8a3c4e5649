//! Application store seam.
//!
//! The store is the only state shared between surfaces. Editors receive it as
//! an injected collaborator and only ever write canonical, server-confirmed
//! entities into it.

use tracing::debug;

use folio_model::{BlogPost, Entity, Profile, Project};

/// Application-wide collections updated after successful writes.
pub trait AppStore {
    /// Append an entity to its collection, or replace the one with the same id.
    fn merge_entity(&mut self, entity: Entity);

    /// Replace the signed-in user's profile.
    fn set_current_user(&mut self, profile: Profile);

    /// Replace the loaded project list.
    fn set_projects(&mut self, projects: Vec<Project>);
}

/// Store held in memory, used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    current_user: Option<Profile>,
    blog_posts: Vec<BlogPost>,
    projects: Vec<Project>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a signed-in user.
    pub fn with_user(profile: Profile) -> Self {
        Self {
            current_user: Some(profile),
            ..Self::default()
        }
    }

    pub fn current_user(&self) -> Option<&Profile> {
        self.current_user.as_ref()
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

impl AppStore for InMemoryStore {
    fn merge_entity(&mut self, entity: Entity) {
        debug!(kind = entity.kind().label(), id = entity.id(), "merging entity");
        match entity {
            Entity::BlogPost(post) => upsert(&mut self.blog_posts, post, |p| p.id.as_str()),
            Entity::Project(project) => upsert(&mut self.projects, project, |p| p.id.as_str()),
            Entity::Profile(profile) => self.set_current_user(profile),
        }
    }

    fn set_current_user(&mut self, profile: Profile) {
        self.current_user = Some(profile);
    }

    fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &str) {
    match items.iter().position(|existing| id(existing) == id(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
