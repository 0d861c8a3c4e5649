//! In-place profile editing.
//!
//! Editing mode copies the committed profile into a draft and its tags into a
//! [`TagBuffer`]. Commit sends the draft with the buffer as its tags; cancel
//! throws both away. Outside editing mode the committed profile is shown
//! unchanged.

use tracing::{debug, info, warn};

use folio_client::{ClientError, Persistence};
use folio_model::{Entity, MAX_PROFILE_TAGS, Payload, Profile, ProfileDraft, ProfileField};
use folio_validate::ValidationResult;

use crate::editor::{IgnoreReason, Ticket};
use crate::notification::Notification;
use crate::state::DraftController;
use crate::store::AppStore;

/// Notification text shown after a successful profile commit.
pub const PROFILE_UPDATED: &str = "Profile Updated";

// =============================================================================
// TAG BUFFER
// =============================================================================

/// Working copy of a profile's tags, capped at [`MAX_PROFILE_TAGS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuffer {
    tags: Vec<String>,
}

impl TagBuffer {
    /// Buffer seeded from committed tags. Extra tags beyond the cap are kept
    /// so nothing is silently lost; the buffer then only accepts removals.
    pub fn from_tags(tags: &[String]) -> Self {
        Self {
            tags: tags.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_PROFILE_TAGS
    }

    /// Append a tag. Blank values and a full buffer are no-ops.
    /// Duplicates are allowed. Returns whether the tag was added.
    pub fn push(&mut self, value: &str) -> bool {
        if value.trim().is_empty() || self.is_full() {
            return false;
        }
        self.tags.push(value.to_string());
        true
    }

    /// Remove every occurrence of `value`. Returns how many were removed.
    pub fn remove_all(&mut self, value: &str) -> usize {
        let before = self.tags.len();
        self.tags.retain(|tag| tag != value);
        before - self.tags.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Draft and tag buffer that exist only while editing.
#[derive(Debug, Clone)]
struct Editing {
    controller: DraftController<ProfileDraft>,
    buffer: TagBuffer,
}

/// A profile commit waiting for its persistence call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    pub ticket: Ticket,
    pub payload: Payload,
}

/// Result of [`ProfileEditSession::begin_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginCommit {
    Ignored(IgnoreReason),
    Invalid(ValidationResult),
    Pending(PendingCommit),
}

/// Final result of a profile commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Ignored(IgnoreReason),
    Invalid(ValidationResult),
    /// Saved; the store holds the new profile and editing mode ended.
    Committed {
        profile: Profile,
        notification: Notification,
    },
    /// Saving failed; draft and buffer are kept.
    Failed {
        error: ClientError,
        notification: Notification,
    },
    /// Editing was cancelled before the response arrived.
    Stale,
}

/// In-place edit session over the signed-in user's profile.
#[derive(Debug, Clone)]
pub struct ProfileEditSession {
    committed: Profile,
    editing: Option<Editing>,
    in_flight: Option<Ticket>,
    issued: u64,
    /// Serial of the newest ticket whose profile reached the store.
    settled: u64,
}

impl ProfileEditSession {
    pub fn new(committed: Profile) -> Self {
        Self {
            committed,
            editing: None,
            in_flight: None,
            issued: 0,
            settled: 0,
        }
    }

    /// Last profile confirmed by the server.
    pub fn committed(&self) -> &Profile {
        &self.committed
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[inline]
    pub fn is_committing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current draft while editing.
    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.editing.as_ref().map(|editing| editing.controller.draft())
    }

    /// Current tag buffer while editing.
    pub fn buffer(&self) -> Option<&TagBuffer> {
        self.editing.as_ref().map(|editing| &editing.buffer)
    }

    /// Enter editing mode. No-op when already editing.
    pub fn start_editing(&mut self) {
        if self.editing.is_some() {
            return;
        }
        debug!(user = %self.committed.id, "profile editing started");
        self.editing = Some(Editing {
            controller: DraftController::new(ProfileDraft::from(&self.committed)),
            buffer: TagBuffer::from_tags(&self.committed.tags),
        });
    }

    /// Leave editing mode, discarding the draft and buffer.
    pub fn cancel(&mut self) {
        if self.editing.take().is_some() {
            debug!(user = %self.committed.id, "profile editing cancelled");
        }
        self.in_flight = None;
    }

    /// The "Edit Profile Details" toggle.
    pub fn toggle_editing(&mut self) {
        if self.is_editing() {
            self.cancel();
        } else {
            self.start_editing();
        }
    }

    /// Tags to display: the buffer while editing, committed tags otherwise.
    pub fn displayed_tags(&self) -> &[String] {
        match &self.editing {
            Some(editing) => editing.buffer.as_slice(),
            None => &self.committed.tags,
        }
    }

    /// Edit a text field. No-op outside editing mode.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(editing) = &mut self.editing {
            editing.controller.set_field(field, value);
        }
    }

    /// Edit a text field addressed by name. No-op outside editing mode.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> crate::Result<()> {
        match &mut self.editing {
            Some(editing) => editing.controller.set_field_by_name(name, value),
            None => Ok(()),
        }
    }

    /// Append a tag to the buffer. Returns whether it was added.
    pub fn add_tag(&mut self, value: &str) -> bool {
        let Some(editing) = &mut self.editing else {
            return false;
        };
        let added = editing.buffer.push(value);
        if !added {
            debug!(tag = value, len = editing.buffer.len(), "tag not added");
        }
        added
    }

    /// Remove every occurrence of a tag from the buffer.
    pub fn remove_tag(&mut self, value: &str) -> usize {
        self.editing
            .as_mut()
            .map_or(0, |editing| editing.buffer.remove_all(value))
    }

    pub fn is_invalid(&self, field: ProfileField) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|editing| editing.controller.is_invalid(field))
    }

    pub fn helper_text(&self, field: ProfileField) -> Option<String> {
        self.editing
            .as_ref()
            .and_then(|editing| editing.controller.helper_text(field))
    }

    /// Validation markers for the tag buffer, which has no text field.
    pub fn tags_helper_text(&self) -> Option<String> {
        self.editing
            .as_ref()
            .and_then(|editing| editing.controller.validation().helper_text("tags"))
    }

    // =========================================================================
    // COMMIT
    // =========================================================================

    /// Validate the draft with the buffer as its tags and reserve the
    /// in-flight slot.
    pub fn begin_commit(&mut self) -> BeginCommit {
        if self.in_flight.is_some() {
            return BeginCommit::Ignored(IgnoreReason::InFlight);
        }
        let Some(editing) = &mut self.editing else {
            return BeginCommit::Ignored(IgnoreReason::Closed);
        };

        let tags = editing.buffer.as_slice().to_vec();
        editing.controller.edit(|draft| draft.tags = tags);

        let result = editing.controller.check();
        if !result.is_valid() {
            editing.controller.apply_validation(result.clone());
            return BeginCommit::Invalid(result);
        }
        editing.controller.clear_invalid();

        let payload = Payload::Profile(editing.controller.draft().to_payload());
        self.issued += 1;
        let ticket = Ticket::issue(self.issued);
        self.in_flight = Some(ticket);
        BeginCommit::Pending(PendingCommit { ticket, payload })
    }

    /// Apply the persistence response for `ticket`.
    pub fn complete_commit(
        &mut self,
        ticket: Ticket,
        response: folio_client::Result<Entity>,
        store: &mut dyn AppStore,
    ) -> CommitOutcome {
        let live = self.in_flight == Some(ticket);
        if live {
            self.in_flight = None;
        }

        let response = response.and_then(|entity| match entity {
            Entity::Profile(profile) => Ok(profile),
            other => Err(ClientError::Decode(format!(
                "expected a profile, got a {}",
                other.kind().label()
            ))),
        });

        match response {
            Ok(profile) if !live => {
                if ticket.serial() > self.settled {
                    info!(user = %profile.id, "late profile update applied to store");
                    self.settled = ticket.serial();
                    store.set_current_user(profile);
                } else {
                    debug!(user = %profile.id, ?ticket, "late profile update superseded, dropped");
                }
                CommitOutcome::Stale
            }
            Ok(profile) => {
                info!(user = %profile.id, "profile updated");
                self.settled = ticket.serial();
                store.set_current_user(profile.clone());
                self.committed = profile.clone();
                self.editing = None;
                CommitOutcome::Committed {
                    profile,
                    notification: Notification::success(PROFILE_UPDATED),
                }
            }
            Err(error) if !live => {
                warn!(%error, "late profile update failed");
                CommitOutcome::Stale
            }
            Err(error) => {
                warn!(%error, "profile update failed");
                let notification = Notification::error(error.user_message());
                CommitOutcome::Failed {
                    error,
                    notification,
                }
            }
        }
    }

    /// Run a whole commit against `persistence`.
    pub async fn commit(
        &mut self,
        persistence: &dyn Persistence,
        store: &mut dyn AppStore,
    ) -> CommitOutcome {
        let pending = match self.begin_commit() {
            BeginCommit::Ignored(reason) => return CommitOutcome::Ignored(reason),
            BeginCommit::Invalid(result) => return CommitOutcome::Invalid(result),
            BeginCommit::Pending(pending) => pending,
        };
        let response = persistence.save(&pending.payload, &self.committed.id).await;
        self.complete_commit(pending.ticket, response, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn profile(tags: &[&str]) -> Profile {
        Profile {
            id: "u1".into(),
            name: "Ada".into(),
            title: "Engineer".into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            ..Default::default()
        }
    }

    fn pending(begin: BeginCommit) -> PendingCommit {
        match begin {
            BeginCommit::Pending(pending) => pending,
            other => panic!("expected a pending commit, got {other:?}"),
        }
    }

    #[test]
    fn test_buffer_caps_at_six() {
        let mut buffer = TagBuffer::default();
        for tag in ["a", "b", "c", "d", "e", "f"] {
            assert!(buffer.push(tag));
        }
        assert!(buffer.is_full());
        assert!(!buffer.push("g"));
        assert_eq!(buffer.len(), 6);
    }

    #[test]
    fn test_buffer_rejects_blank_and_allows_duplicates() {
        let mut buffer = TagBuffer::default();
        assert!(!buffer.push("  "));
        assert!(buffer.push("rust"));
        assert!(buffer.push("rust"));
        assert_eq!(buffer.remove_all("rust"), 2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_displayed_tags_follow_mode() {
        let mut session = ProfileEditSession::new(profile(&["x", "y"]));
        assert_eq!(session.displayed_tags(), ["x", "y"]);

        session.start_editing();
        session.add_tag("z");
        assert_eq!(session.displayed_tags(), ["x", "y", "z"]);
        assert_eq!(session.committed().tags, vec!["x", "y"]);

        session.cancel();
        assert_eq!(session.displayed_tags(), ["x", "y"]);
        assert!(session.buffer().is_none());
    }

    #[test]
    fn test_edits_outside_editing_mode_are_no_ops() {
        let mut session = ProfileEditSession::new(profile(&[]));
        session.set_field(ProfileField::Title, "Changed");
        assert!(!session.add_tag("x"));
        assert_eq!(session.remove_tag("x"), 0);
        assert!(session.draft().is_none());
        assert_eq!(
            session.begin_commit(),
            BeginCommit::Ignored(IgnoreReason::Closed)
        );
    }

    #[test]
    fn test_toggle_editing() {
        let mut session = ProfileEditSession::new(profile(&["x"]));
        session.toggle_editing();
        assert!(session.is_editing());
        session.set_field(ProfileField::Company, "Folio");
        session.toggle_editing();
        assert!(!session.is_editing());
        assert!(session.committed().company.is_empty());
    }

    #[test]
    fn test_commit_replaces_profile() {
        let mut session = ProfileEditSession::new(profile(&["x", "y"]));
        session.start_editing();
        session.add_tag("z");
        session.remove_tag("x");
        session.set_field(ProfileField::Title, "Staff Engineer");

        let commit = pending(session.begin_commit());
        let Payload::Profile(body) = &commit.payload else {
            panic!("expected a profile payload");
        };
        assert_eq!(body.tags, vec!["y", "z"]);
        assert_eq!(body.title, "Staff Engineer");
        assert_eq!(session.begin_commit(), BeginCommit::Ignored(IgnoreReason::InFlight));

        let saved = Profile {
            title: "Staff Engineer".into(),
            tags: vec!["y".into(), "z".into()],
            ..profile(&[])
        };
        let mut store = InMemoryStore::new();
        let outcome = session.complete_commit(commit.ticket, Ok(saved.clone().into()), &mut store);

        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                profile: saved.clone(),
                notification: Notification::success(PROFILE_UPDATED),
            }
        );
        assert_eq!(store.current_user(), Some(&saved));
        assert!(!session.is_editing());
        assert_eq!(session.displayed_tags(), ["y", "z"]);
    }

    #[test]
    fn test_invalid_title_blocks_commit() {
        let mut session = ProfileEditSession::new(profile(&[]));
        session.start_editing();
        session.set_field(ProfileField::Title, "t".repeat(61));

        assert!(matches!(session.begin_commit(), BeginCommit::Invalid(_)));
        assert!(session.is_invalid(ProfileField::Title));
        assert!(!session.is_committing());
    }

    #[test]
    fn test_failed_commit_keeps_buffer() {
        let mut session = ProfileEditSession::new(profile(&["x"]));
        session.start_editing();
        session.add_tag("y");
        let commit = pending(session.begin_commit());

        let mut store = InMemoryStore::new();
        let outcome = session.complete_commit(
            commit.ticket,
            Err(ClientError::Server {
                status: 500,
                message: "down".into(),
            }),
            &mut store,
        );

        assert!(matches!(outcome, CommitOutcome::Failed { .. }));
        assert!(session.is_editing());
        assert_eq!(session.displayed_tags(), ["x", "y"]);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_cancel_while_committing_makes_response_stale() {
        let mut session = ProfileEditSession::new(profile(&["x"]));
        session.start_editing();
        let commit = pending(session.begin_commit());
        session.cancel();

        let mut store = InMemoryStore::new();
        let saved = profile(&["x"]);
        let outcome = session.complete_commit(commit.ticket, Ok(saved.clone().into()), &mut store);
        assert_eq!(outcome, CommitOutcome::Stale);
        assert_eq!(store.current_user(), Some(&saved));
        assert!(!session.is_editing());
    }

    #[test]
    fn test_superseded_late_commit_keeps_newer_profile() {
        let mut session = ProfileEditSession::new(profile(&["x"]));
        let mut store = InMemoryStore::new();

        session.start_editing();
        session.add_tag("old");
        let old = pending(session.begin_commit());
        session.cancel();

        session.start_editing();
        session.add_tag("new");
        let new = pending(session.begin_commit());
        let outcome =
            session.complete_commit(new.ticket, Ok(profile(&["x", "new"]).into()), &mut store);
        assert!(matches!(outcome, CommitOutcome::Committed { .. }));

        let outcome =
            session.complete_commit(old.ticket, Ok(profile(&["x", "old"]).into()), &mut store);
        assert_eq!(outcome, CommitOutcome::Stale);
        assert_eq!(session.committed().tags, vec!["x", "new"]);
        assert_eq!(session.displayed_tags(), ["x", "new"]);
        assert_eq!(store.current_user(), Some(&profile(&["x", "new"])));
    }

    #[test]
    fn test_late_commit_never_replaces_committed_profile() {
        let mut session = ProfileEditSession::new(profile(&["x"]));
        session.start_editing();
        session.add_tag("late");
        let commit = pending(session.begin_commit());
        session.cancel();

        let mut store = InMemoryStore::new();
        session.complete_commit(commit.ticket, Ok(profile(&["x", "late"]).into()), &mut store);
        assert_eq!(session.committed().tags, vec!["x"]);
        assert_eq!(session.displayed_tags(), ["x"]);
    }
}
