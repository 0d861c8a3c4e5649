//! Step workflow for multi-page editors.
//!
//! Steps move along an explicit transition table. A workflow is built over
//! the subset of steps a surface shows; transitions into a step the surface
//! does not show are rejected.

use tracing::debug;

/// One page of an editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Title, description, image and tags.
    #[default]
    General,
    /// Body text.
    Content,
}

impl Step {
    /// Get the display name for this step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Content => "Content",
        }
    }

    /// Get all steps in display order.
    pub const fn all() -> &'static [Step] {
        &[Self::General, Self::Content]
    }
}

/// Movement between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Next,
    Previous,
}

impl Transition {
    /// Label of the button that triggers this transition.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Previous => "Previous",
        }
    }
}

/// Allowed `(from, transition, to)` moves.
const TRANSITIONS: &[(Step, Transition, Step)] = &[
    (Step::General, Transition::Next, Step::Content),
    (Step::Content, Transition::Previous, Step::General),
];

/// The single step-toggle button a surface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepButton {
    pub label: &'static str,
    pub transition: Transition,
}

/// Current position within a surface's steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWorkflow {
    steps: &'static [Step],
    current: Step,
}

impl StepWorkflow {
    /// Create a workflow over `steps`, starting at the first one.
    ///
    /// An empty slice behaves like a single [`Step::General`] page.
    pub fn new(steps: &'static [Step]) -> Self {
        let current = steps.first().copied().unwrap_or_default();
        Self { steps, current }
    }

    #[inline]
    pub fn current(&self) -> Step {
        self.current
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Target of `transition` from the current step, if allowed.
    fn target(&self, transition: Transition) -> Option<Step> {
        TRANSITIONS
            .iter()
            .find(|&&(from, via, _)| from == self.current && via == transition)
            .map(|&(_, _, to)| to)
            .filter(|to| self.steps.contains(to))
    }

    /// Apply a transition. Returns whether the step changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match self.target(transition) {
            Some(to) => {
                debug!(from = self.current.name(), to = to.name(), "step transition");
                self.current = to;
                true
            }
            None => false,
        }
    }

    /// Move forward one step; no-op on the last step.
    pub fn next(&mut self) -> bool {
        self.apply(Transition::Next)
    }

    /// Move back one step; no-op on the first step.
    pub fn previous(&mut self) -> bool {
        self.apply(Transition::Previous)
    }

    pub fn has_next(&self) -> bool {
        self.target(Transition::Next).is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.target(Transition::Previous).is_some()
    }

    /// Whether the current step is the last one.
    pub fn is_terminal(&self) -> bool {
        self.steps.last().is_none_or(|&last| last == self.current)
    }

    /// Submission is offered only on the last step.
    pub fn can_submit(&self) -> bool {
        self.is_terminal()
    }

    /// The toggle button: "Next" before the last step, "Previous" on it.
    /// Single-step surfaces have none.
    pub fn step_button(&self) -> Option<StepButton> {
        let transition = if self.is_terminal() {
            Transition::Previous
        } else {
            Transition::Next
        };
        self.target(transition).map(|_| StepButton {
            label: transition.label(),
            transition,
        })
    }

    /// Return to the first step.
    pub fn reset(&mut self) {
        self.current = self.steps.first().copied().unwrap_or_default();
    }
}
