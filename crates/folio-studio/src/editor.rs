//! Submission coordinator for the blog and project editors.
//!
//! A submit runs validate -> persist -> merge -> reset -> close. The steps are
//! split into [`Editor::begin_submit`] and [`Editor::complete`] so a host can
//! drive the persistence call itself; [`Editor::submit`] runs both around a
//! [`Persistence`] call.
//!
//! # In-flight guard
//!
//! `begin_submit` hands out a [`Ticket`] and refuses further submissions
//! until that ticket is completed. Closing the editor while a ticket is out
//! abandons it: the late response never touches the draft, and a late success
//! is merged into the store only when no newer ticket has settled since.

use tracing::{debug, info, warn};

use folio_client::{ClientError, Persistence};
use folio_model::{BlogDraft, DraftFields, Entity, Payload, ProjectDraft};
use folio_validate::{Validatable, ValidationResult};

use crate::error::Result;
use crate::notification::Notification;
use crate::state::{DraftController, Step, StepButton, StepWorkflow};
use crate::store::AppStore;

/// A draft kind an [`Editor`] can submit.
pub trait Submittable: DraftFields + Validatable {
    /// Pages of the editing surface, in order.
    const STEPS: &'static [Step];

    /// Convert a validated draft into its wire payload.
    fn to_wire(&self) -> folio_model::Result<Payload>;

    /// Notification text shown after a successful submit.
    fn success_message(&self) -> &'static str;
}

impl Submittable for BlogDraft {
    const STEPS: &'static [Step] = Step::all();

    fn to_wire(&self) -> folio_model::Result<Payload> {
        self.to_payload().map(Payload::Blog)
    }

    fn success_message(&self) -> &'static str {
        "Blog Post Created"
    }
}

impl Submittable for ProjectDraft {
    const STEPS: &'static [Step] = &[Step::General];

    fn to_wire(&self) -> folio_model::Result<Payload> {
        self.to_payload().map(Payload::Project)
    }

    fn success_message(&self) -> &'static str {
        if self.id.is_some() {
            "Project Updated"
        } else {
            "Project Added"
        }
    }
}

/// Handle identifying one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn issue(serial: u64) -> Self {
        Self(serial)
    }

    pub(crate) fn serial(self) -> u64 {
        self.0
    }
}

/// Why a submit request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The editor is not open.
    Closed,
    /// A previous submission has not completed.
    InFlight,
    /// Submission is only offered on the last step.
    NotOnFinalStep,
}

/// A validated submission waiting for its persistence call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: Ticket,
    pub payload: Payload,
}

/// Result of [`Editor::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSubmit {
    Ignored(IgnoreReason),
    /// Validation failed; markers were stored on the draft.
    Invalid(ValidationResult),
    Pending(PendingSubmission),
}

/// Final result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    Invalid(ValidationResult),
    /// Persisted and merged; the draft was reset and the editor closed.
    Committed {
        entity: Entity,
        notification: Notification,
    },
    /// Persistence failed; the draft is kept for a manual retry.
    Failed {
        error: ClientError,
        notification: Notification,
    },
    /// The editor was closed before the response arrived.
    Stale,
}

/// Editing surface for one draft kind.
#[derive(Debug, Clone)]
pub struct Editor<D: Submittable> {
    owner_id: String,
    controller: DraftController<D>,
    workflow: StepWorkflow,
    open: bool,
    in_flight: Option<Ticket>,
    issued: u64,
    /// Serial of the newest ticket whose entity reached the store.
    settled: u64,
}

/// Multi-step blog post creation surface.
pub type BlogEditor = Editor<BlogDraft>;

/// Single-step project creation and edit surface.
pub type ProjectEditor = Editor<ProjectDraft>;

impl<D: Submittable> Editor<D> {
    /// Create a closed editor writing on behalf of `owner_id`.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            controller: DraftController::default(),
            workflow: StepWorkflow::new(D::STEPS),
            open: false,
            in_flight: None,
            issued: 0,
            settled: 0,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Open with an empty draft.
    pub fn open(&mut self) {
        self.open_with(D::default());
    }

    /// Open seeded with an existing draft (e.g. a project being edited).
    /// No-op when already open.
    pub fn open_with(&mut self, seed: D) {
        if self.open {
            return;
        }
        debug!(kind = D::KIND.label(), "editor opened");
        self.controller.reseed(seed);
        self.workflow.reset();
        self.open = true;
    }

    /// Close, discarding the draft. An in-flight submission becomes stale.
    pub fn close(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!(kind = D::KIND.label(), ?ticket, "closing with a submission in flight");
        }
        self.controller.reset();
        self.workflow.reset();
        self.open = false;
    }

    // =========================================================================
    // DRAFT
    // =========================================================================

    pub fn draft(&self) -> &D {
        self.controller.draft()
    }

    pub fn controller(&self) -> &DraftController<D> {
        &self.controller
    }

    pub fn set_field(&mut self, field: D::Field, value: impl Into<String>) {
        self.controller.set_field(field, value);
    }

    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.controller.set_field_by_name(name, value)
    }

    pub fn is_invalid(&self, field: D::Field) -> bool {
        self.controller.is_invalid(field)
    }

    pub fn helper_text(&self, field: D::Field) -> Option<String> {
        self.controller.helper_text(field)
    }

    // =========================================================================
    // STEPS
    // =========================================================================

    pub fn workflow(&self) -> &StepWorkflow {
        &self.workflow
    }

    pub fn step(&self) -> Step {
        self.workflow.current()
    }

    pub fn next_step(&mut self) -> bool {
        self.workflow.next()
    }

    pub fn previous_step(&mut self) -> bool {
        self.workflow.previous()
    }

    pub fn step_button(&self) -> Option<StepButton> {
        self.workflow.step_button()
    }

    /// Apply the step button's transition, if there is one.
    pub fn press_step_button(&mut self) -> bool {
        match self.workflow.step_button() {
            Some(button) => self.workflow.apply(button.transition),
            None => false,
        }
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Validate the whole draft and, when valid, reserve the in-flight slot.
    pub fn begin_submit(&mut self) -> Result<BeginSubmit> {
        if !self.open {
            return Ok(BeginSubmit::Ignored(IgnoreReason::Closed));
        }
        if self.in_flight.is_some() {
            debug!(kind = D::KIND.label(), "submit ignored, already in flight");
            return Ok(BeginSubmit::Ignored(IgnoreReason::InFlight));
        }
        if !self.workflow.can_submit() {
            return Ok(BeginSubmit::Ignored(IgnoreReason::NotOnFinalStep));
        }

        let result = self.controller.check();
        if !result.is_valid() {
            debug!(
                kind = D::KIND.label(),
                invalid = ?result.invalid_fields().collect::<Vec<_>>(),
                "submit rejected by validation"
            );
            self.controller.apply_validation(result.clone());
            return Ok(BeginSubmit::Invalid(result));
        }

        self.controller.clear_invalid();
        let payload = self.controller.draft().to_wire()?;

        self.issued += 1;
        let ticket = Ticket::issue(self.issued);
        self.in_flight = Some(ticket);
        Ok(BeginSubmit::Pending(PendingSubmission { ticket, payload }))
    }

    /// Apply the persistence response for `ticket`.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        response: folio_client::Result<Entity>,
        store: &mut dyn AppStore,
    ) -> SubmitOutcome {
        if self.in_flight != Some(ticket) {
            match response {
                Ok(entity) if ticket.serial() > self.settled => {
                    info!(kind = D::KIND.label(), id = entity.id(), "late submission merged");
                    self.settled = ticket.serial();
                    store.merge_entity(entity);
                }
                Ok(entity) => {
                    debug!(
                        kind = D::KIND.label(),
                        id = entity.id(),
                        ?ticket,
                        settled = self.settled,
                        "late submission superseded, dropped"
                    );
                }
                Err(error) => {
                    warn!(kind = D::KIND.label(), %error, "late submission failed");
                }
            }
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;

        match response {
            Ok(entity) => {
                info!(kind = D::KIND.label(), id = entity.id(), "submission committed");
                let notification = Notification::success(self.draft().success_message());
                self.settled = ticket.serial();
                store.merge_entity(entity.clone());
                self.controller.reset();
                self.workflow.reset();
                self.open = false;
                SubmitOutcome::Committed {
                    entity,
                    notification,
                }
            }
            Err(error) => {
                warn!(kind = D::KIND.label(), %error, "submission failed");
                let notification = Notification::error(error.user_message());
                SubmitOutcome::Failed {
                    error,
                    notification,
                }
            }
        }
    }

    /// Run a whole submission against `persistence`.
    pub async fn submit(
        &mut self,
        persistence: &dyn Persistence,
        store: &mut dyn AppStore,
    ) -> Result<SubmitOutcome> {
        let pending = match self.begin_submit()? {
            BeginSubmit::Ignored(reason) => return Ok(SubmitOutcome::Ignored(reason)),
            BeginSubmit::Invalid(result) => return Ok(SubmitOutcome::Invalid(result)),
            BeginSubmit::Pending(pending) => pending,
        };
        let response = persistence.save(&pending.payload, &self.owner_id).await;
        Ok(self.complete(pending.ticket, response, store))
    }
}
