//! Event handling utilities for the stepper view.
//!
//! This module provides functions for handling different types of events:
//! - Keyboard events (selection movement, activation, quit)
//! - Mouse events (marker clicks)
//! - Operations pushed by the owning host

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use sk_protocol::{Event, Op, Step};
use tokio::sync::mpsc::UnboundedSender;

use crate::widgets::Stepper;

/// Outcome of handling one user input event.
#[derive(Debug, Default)]
pub struct InputOutcome {
    /// The view should exit.
    pub should_exit: bool,
    /// The event emitted to the host, if the input activated a marker.
    pub emitted: Option<Event>,
}

/// Handle an operation pushed by the host.
///
/// Returns `true` if the view should exit, `false` otherwise.
pub fn handle_op(op: Op, steps: &mut Vec<Step>, vertical: &mut bool, selected: &mut usize) -> bool {
    match op {
        Op::SetSteps { steps: new_steps } => {
            *steps = new_steps;
            *selected = (*selected).min(steps.len().saturating_sub(1));
            false
        }
        Op::SetOrientation { vertical: new_vertical } => {
            *vertical = new_vertical;
            false
        }
        Op::Shutdown => true,
    }
}

/// Handle a keyboard event from the user.
pub fn handle_keyboard_event(
    key_event: KeyEvent,
    steps: &[Step],
    selected: &mut usize,
    vertical: &mut bool,
    event_tx: &UnboundedSender<Event>,
) -> InputOutcome {
    let mut outcome = InputOutcome::default();
    if key_event.kind != KeyEventKind::Press {
        return outcome;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            outcome.should_exit = true;
        }
        KeyCode::Left | KeyCode::Up => {
            *selected = selected.saturating_sub(1);
        }
        KeyCode::Right | KeyCode::Down => {
            if *selected < steps.len().saturating_sub(1) {
                *selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            outcome.emitted = emit_step_changed(*selected, steps, event_tx);
        }
        KeyCode::Char('o') => {
            *vertical = !*vertical;
        }
        _ => {}
    }

    outcome
}

/// Handle a mouse event from the user.
///
/// A left-button press over a marker activates that step: the selection
/// follows the click and exactly one `StepChanged` event is emitted.
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    steps: &[Step],
    vertical: bool,
    stepper_area: Rect,
    selected: &mut usize,
    event_tx: &UnboundedSender<Event>,
) -> InputOutcome {
    let mut outcome = InputOutcome::default();
    if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
        return outcome;
    }

    let stepper = Stepper::new(steps).vertical(vertical);
    if let Some(index) = stepper.hit_test(stepper_area, mouse_event.column, mouse_event.row) {
        *selected = index;
        outcome.emitted = emit_step_changed(index, steps, event_tx);
    }

    outcome
}

/// Emit a `StepChanged` event for the step at `index`.
///
/// The payload carries the step data verbatim: label plus all four flags.
/// Emission is never gated by the target step's own flags, and activating
/// the same index again re-emits. Out-of-range indices (an empty list) emit
/// nothing.
pub fn emit_step_changed(
    index: usize,
    steps: &[Step],
    event_tx: &UnboundedSender<Event>,
) -> Option<Event> {
    steps.get(index).map(|step| {
        tracing::info!(index, label = %step.label, "step activated");
        let event = Event::StepChanged {
            index,
            step: step.clone(),
        };
        let _ = event_tx.send(event.clone());
        event
    })
}
