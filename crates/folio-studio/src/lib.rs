//! Editing and submission engine for Folio Studio.
//!
//! This crate holds the interactive core shared by the profile editor and the
//! blog/project creation surfaces. Rendering is left to the host; everything
//! here is plain state driven by method calls, plus one async boundary for
//! the persistence call.
//!
//! # Architecture
//!
//! - **State**: [`DraftController`] (draft + invalid markers) and
//!   [`StepWorkflow`] (which page is visible)
//! - **Editors**: [`Editor`] coordinates validate -> persist -> merge -> reset
//!   with an in-flight guard
//! - **Profile**: [`ProfileEditSession`] edits a profile in place with a
//!   [`TagBuffer`]
//! - **Space**: [`SpaceView`] binds [`CardStyle`] to a [`ScrollRegion`]
//! - **Store**: [`AppStore`] receives canonical entities after writes
//! - **Notifications**: [`NotificationCenter`] hides messages after the
//!   configured delay

pub mod editor;
pub mod error;
pub mod notification;
pub mod profile;
pub mod scroll;
pub mod settings;
pub mod space;
pub mod state;
pub mod store;

pub use editor::{
    BeginSubmit, BlogEditor, Editor, IgnoreReason, PendingSubmission, ProjectEditor, SubmitOutcome,
    Submittable, Ticket,
};
pub use error::{ErrorCategory, Result, StudioError};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use profile::{
    BeginCommit, CommitOutcome, PROFILE_UPDATED, PendingCommit, ProfileEditSession, TagBuffer,
};
pub use scroll::{CardStyle, ScrollGeometry, ScrollRegion, ScrollSubscription, intensity};
pub use settings::{DEFAULT_AUTO_HIDE_MS, NotificationSettings, StudioSettings};
pub use space::SpaceView;
pub use state::{DraftController, Step, StepButton, StepWorkflow, Transition};
pub use store::{AppStore, InMemoryStore};
