//! Host-UI communication protocol.
//!
//! This module defines the message types for asynchronous communication
//! between the UI (the stepper view) and the host that owns the step list.
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: updates pushed from the host to the UI
//! - `Event`: user interactions reported by the UI to the host
//!
//! The UI never mutates the step list itself. It reports an activation via
//! [`Event::StepChanged`] and waits for the host to re-supply the list with
//! [`Op::SetSteps`].

use serde::{Deserialize, Serialize};

use crate::step_models::Step;

/// Operations sent from the host to the UI.
///
/// Uses tagged enum serialization:
/// ```json
/// {
///   "type": "setSteps",
///   "payload": {
///     "steps": [{ "label": "Build", "inProcessing": true }]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Replace the displayed step list.
    ///
    /// The whole list is re-supplied; the UI holds no step state of its own.
    SetSteps {
        /// The new step list, in display order.
        steps: Vec<Step>,
    },

    /// Switch between horizontal and vertical layout.
    SetOrientation {
        /// `true` selects vertical layout.
        vertical: bool,
    },

    /// Shut down the UI gracefully.
    Shutdown,
}

/// Events sent from the UI to the host.
///
/// Uses tagged enum serialization:
/// ```json
/// {
///   "type": "stepChanged",
///   "payload": {
///     "index": 1,
///     "step": { "label": "Build", "active": true }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A step marker was activated.
    ///
    /// Emitted exactly once per activation, synchronously, regardless of the
    /// target step's own flags. `step` is the step data as currently
    /// supplied, verbatim: label plus all four flags.
    StepChanged {
        /// Zero-based position of the activated step.
        index: usize,
        /// The activated step, unmodified.
        step: Step,
    },
}
