//! Editor state shared by every surface.
//!
//! - **DraftController**: the in-progress draft and its invalid markers
//! - **StepWorkflow**: the page a multi-step surface is on

mod draft;
mod workflow;

pub use draft::DraftController;
pub use workflow::{Step, StepButton, StepWorkflow, Transition};
