//! Step descriptor models.
//!
//! This module defines the structures for the ordered step list supplied
//! by the owning host. A step's position in the list is its only identity.

use serde::{Deserialize, Serialize};

/// A single entry in the stepper sequence.
///
/// Each step carries a display label and four status flags. The flags are
/// assumed to be mutually exclusive per step, but this is not enforced:
/// conflicting flags are resolved for display by [`Step::state`] and never
/// cause a failure.
///
/// All flags default to `false` when deserialized, so step list files only
/// need to name the flags they set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Text shown for the step.
    pub label: String,

    /// Step is fully done.
    #[serde(default)]
    pub completed: bool,

    /// Step is currently running.
    #[serde(default)]
    pub in_processing: bool,

    /// Step has failed.
    #[serde(default)]
    pub error: bool,

    /// Step is the currently selected one (distinct from `in_processing`).
    #[serde(default)]
    pub active: bool,
}

impl Step {
    /// Create a step with the given label and all flags cleared.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: false,
            in_processing: false,
            error: false,
            active: false,
        }
    }

    /// Set the `completed` flag.
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the `in_processing` flag.
    #[must_use]
    pub fn in_processing(mut self, in_processing: bool) -> Self {
        self.in_processing = in_processing;
        self
    }

    /// Set the `error` flag.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set the `active` flag.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Resolve the step's flags to a single display state.
    ///
    /// Flags are assumed mutually exclusive; when they are not, the first
    /// match in the order `error`, `completed`, `in_processing`, `active`
    /// wins, so malformed input still renders deterministically.
    pub fn state(&self) -> StepState {
        if self.error {
            StepState::Error
        } else if self.completed {
            StepState::Completed
        } else if self.in_processing {
            StepState::InProcessing
        } else if self.active {
            StepState::Active
        } else {
            StepState::Idle
        }
    }
}

/// The resolved display state of a step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepState {
    /// Step is fully done.
    Completed,

    /// Step is currently running.
    InProcessing,

    /// Step has failed.
    Error,

    /// Step is the currently selected one.
    Active,

    /// No flag is set.
    Idle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_has_no_flags_set() {
        let step = Step::new("Checkout");
        assert_eq!(step.label, "Checkout");
        assert_eq!(step.state(), StepState::Idle);
    }

    #[test]
    fn state_resolves_each_flag() {
        assert_eq!(Step::new("a").completed(true).state(), StepState::Completed);
        assert_eq!(
            Step::new("b").in_processing(true).state(),
            StepState::InProcessing
        );
        assert_eq!(Step::new("c").error(true).state(), StepState::Error);
        assert_eq!(Step::new("d").active(true).state(), StepState::Active);
    }

    #[test]
    fn conflicting_flags_resolve_with_fixed_precedence() {
        // error beats everything
        let step = Step::new("x")
            .completed(true)
            .in_processing(true)
            .error(true)
            .active(true);
        assert_eq!(step.state(), StepState::Error);

        // completed beats in_processing and active
        let step = Step::new("y").completed(true).in_processing(true).active(true);
        assert_eq!(step.state(), StepState::Completed);

        // in_processing beats active
        let step = Step::new("z").in_processing(true).active(true);
        assert_eq!(step.state(), StepState::InProcessing);
    }
}
