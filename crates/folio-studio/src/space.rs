//! The "Space" view: a user's profile overview and project list.
//!
//! Mounting binds the overview card's style to the scroll region and, for
//! the owner, prepares the profile edit session and the project editor.
//! Dropping the view detaches it from the region.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info};

use folio_client::Persistence;
use folio_model::{Profile, Project, ProjectDraft};

use crate::editor::ProjectEditor;
use crate::error::Result;
use crate::profile::ProfileEditSession;
use crate::scroll::{CardStyle, ScrollGeometry, ScrollRegion, ScrollSubscription};
use crate::store::AppStore;

/// A mounted Space view.
#[derive(Debug)]
pub struct SpaceView {
    user: Profile,
    card_style: Rc<Cell<CardStyle>>,
    /// Present only when the viewer owns the Space.
    session: Option<ProfileEditSession>,
    project_editor: Option<ProjectEditor>,
    _scroll: ScrollSubscription,
}

impl SpaceView {
    /// Mount the view for `user` on `region`.
    pub fn mount(region: &ScrollRegion, user: Profile, read_only: bool) -> Self {
        let card_style = Rc::new(Cell::new(CardStyle::Neutral));
        let target = Rc::clone(&card_style);
        let scroll = region.attach(move |geometry: ScrollGeometry| {
            target.set(CardStyle::from_geometry(geometry));
        });

        debug!(user = %user.id, read_only, "space mounted");
        let (session, project_editor) = if read_only {
            (None, None)
        } else {
            (
                Some(ProfileEditSession::new(user.clone())),
                Some(ProjectEditor::new(user.id.clone())),
            )
        };

        Self {
            user,
            card_style,
            session,
            project_editor,
            _scroll: scroll,
        }
    }

    pub fn user(&self) -> &Profile {
        &self.user
    }

    pub fn is_read_only(&self) -> bool {
        self.session.is_none()
    }

    /// Current style of the overview card.
    pub fn card_style(&self) -> CardStyle {
        self.card_style.get()
    }

    pub fn profile_session(&self) -> Option<&ProfileEditSession> {
        self.session.as_ref()
    }

    pub fn profile_session_mut(&mut self) -> Option<&mut ProfileEditSession> {
        self.session.as_mut()
    }

    pub fn project_editor_mut(&mut self) -> Option<&mut ProjectEditor> {
        self.project_editor.as_mut()
    }

    /// Open the project editor empty. No-op for read-only views.
    pub fn add_project(&mut self) {
        if let Some(editor) = &mut self.project_editor {
            editor.open();
        }
    }

    /// Open the project editor on an existing project.
    pub fn edit_project(&mut self, project: &Project) {
        if let Some(editor) = &mut self.project_editor {
            editor.open_with(ProjectDraft::from(project));
        }
    }

    /// Fetch the user's projects into the store. Returns how many were loaded.
    pub async fn load_projects(
        &self,
        persistence: &dyn Persistence,
        store: &mut dyn AppStore,
    ) -> Result<usize> {
        let projects = persistence.fetch_projects(&self.user.id).await?;
        let count = projects.len();
        info!(user = %self.user.id, count, "projects loaded");
        store.set_projects(projects);
        Ok(count)
    }

    /// Detach from the scroll region.
    pub fn unmount(self) {
        debug!(user = %self.user.id, "space unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Profile {
        Profile {
            id: "u1".into(),
            name: "Ada".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_follows_scroll() {
        let region = ScrollRegion::new();
        let view = SpaceView::mount(&region, user(), true);
        assert_eq!(view.card_style(), CardStyle::Neutral);

        region.dispatch(ScrollGeometry {
            reference_bottom: 300.0,
            boundary_top: 150.0,
        });
        assert_eq!(view.card_style(), CardStyle::Shadowed { alpha: 0.5 });

        region.dispatch(ScrollGeometry {
            reference_bottom: 300.0,
            boundary_top: 500.0,
        });
        assert_eq!(view.card_style(), CardStyle::Neutral);
    }

    #[test]
    fn test_unmount_detaches_listener() {
        let region = ScrollRegion::new();
        let view = SpaceView::mount(&region, user(), false);
        assert_eq!(region.listener_count(), 1);
        view.unmount();
        assert_eq!(region.listener_count(), 0);
    }

    #[test]
    fn test_read_only_view_has_no_editors() {
        let region = ScrollRegion::new();
        let mut view = SpaceView::mount(&region, user(), true);
        assert!(view.is_read_only());
        view.add_project();
        assert!(view.project_editor_mut().is_none());
        assert!(view.profile_session_mut().is_none());
    }

    #[test]
    fn test_owner_can_open_project_editor() {
        let region = ScrollRegion::new();
        let mut view = SpaceView::mount(&region, user(), false);
        view.add_project();
        let editor = view.project_editor_mut().unwrap();
        assert!(editor.is_open());
        assert_eq!(editor.owner_id(), "u1");
    }
}
