//! The owning parent of the step list.
//!
//! The stepper view never mutates step data. It reports activations as
//! [`Event::StepChanged`]; the manager applies the navigation to its
//! canonical list and re-supplies the whole list via [`Op::SetSteps`].

use sk_protocol::{Event, Op, Step};

/// Owns the canonical step list and reacts to UI events.
///
/// Navigation semantics: activating step `i` marks every earlier step
/// completed, makes step `i` the sole active step with its transient flags
/// cleared, and resets every later step to idle.
pub struct StepListManager {
    /// The canonical step list, in display order.
    steps: Vec<Step>,
}

impl StepListManager {
    /// Create a manager owning the given step list.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The current canonical step list.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Handle an event reported by the UI.
    ///
    /// Returns the operation to push back to the UI, if any. Out-of-range
    /// indices are ignored.
    pub fn handle_event(&mut self, event: &Event) -> Option<Op> {
        match event {
            Event::StepChanged { index, step } => {
                if *index >= self.steps.len() {
                    tracing::warn!(index, "ignoring activation of unknown step");
                    return None;
                }

                tracing::info!(index, label = %step.label, "navigating to step");
                for (i, s) in self.steps.iter_mut().enumerate() {
                    s.completed = i < *index;
                    s.in_processing = false;
                    s.error = false;
                    s.active = i == *index;
                }

                Some(Op::SetSteps {
                    steps: self.steps.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_labels(labels: &[&str]) -> StepListManager {
        StepListManager::new(labels.iter().map(|label| Step::new(*label)).collect())
    }

    fn step_changed(index: usize, step: Step) -> Event {
        Event::StepChanged { index, step }
    }

    #[test]
    fn test_navigation_completes_earlier_steps() {
        let mut manager = manager_with_labels(&["one", "two", "three", "four"]);

        let op = manager.handle_event(&step_changed(2, Step::new("three")));

        let Some(Op::SetSteps { steps }) = op else {
            panic!("expected SetSteps op");
        };
        assert_eq!(steps.len(), 4);
        assert!(steps[0].completed && !steps[0].active);
        assert!(steps[1].completed && !steps[1].active);
        assert!(!steps[2].completed && steps[2].active);
        assert_eq!(steps[3], Step::new("four"));
    }

    #[test]
    fn test_navigation_clears_transient_flags() {
        let mut manager = StepListManager::new(vec![
            Step::new("one").error(true),
            Step::new("two").in_processing(true),
        ]);

        let op = manager.handle_event(&step_changed(1, Step::new("two").in_processing(true)));

        let Some(Op::SetSteps { steps }) = op else {
            panic!("expected SetSteps op");
        };
        assert_eq!(steps[0], Step::new("one").completed(true));
        assert_eq!(steps[1], Step::new("two").active(true));
    }

    #[test]
    fn test_navigating_backwards_resets_later_steps() {
        let mut manager = manager_with_labels(&["one", "two", "three"]);

        manager.handle_event(&step_changed(2, Step::new("three")));
        let op = manager.handle_event(&step_changed(0, Step::new("one")));

        let Some(Op::SetSteps { steps }) = op else {
            panic!("expected SetSteps op");
        };
        assert_eq!(steps[0], Step::new("one").active(true));
        assert_eq!(steps[1], Step::new("two"));
        assert_eq!(steps[2], Step::new("three"));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut manager = manager_with_labels(&["one", "two"]);

        let op = manager.handle_event(&step_changed(5, Step::new("ghost")));

        assert!(op.is_none());
        assert_eq!(manager.steps(), &[Step::new("one"), Step::new("two")]);
    }
}
