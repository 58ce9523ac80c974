//! Divider styles derived from adjacent step pairs.
//!
//! A divider is the connector rendered between two consecutive steps. Its
//! style is computed from the pair it joins, never stored: the step list is
//! the single source of truth and dividers are re-derived on every render.

use serde::{Deserialize, Serialize};

use crate::step_models::Step;

/// Visual style of the divider between two consecutive steps.
///
/// Serialized in kebab-case (`default` / `in-progress` / `completed`),
/// the widget's style-class vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DividerStyle {
    /// Neither side of the gap indicates a completed transition.
    Default,

    /// The boundary between the last completed step and the next
    /// not-yet-completed step.
    InProgress,

    /// Both sides of the gap are completed.
    Completed,
}

impl DividerStyle {
    /// Derive the style of the divider joining `left` and `right`.
    ///
    /// Only the `completed` flags participate; `in_processing`, `error`,
    /// and `active` never influence divider styling.
    pub fn between(left: &Step, right: &Step) -> Self {
        match (left.completed, right.completed) {
            (true, true) => Self::Completed,
            (true, false) => Self::InProgress,
            _ => Self::Default,
        }
    }
}

/// Derive the styles of all dividers for an ordered step list.
///
/// Returns one style per gap: N steps yield N-1 styles, in order. Empty
/// and single-step lists have no gaps.
pub fn divider_styles(steps: &[Step]) -> Vec<DividerStyle> {
    steps
        .windows(2)
        .map(|pair| DividerStyle::between(&pair[0], &pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_completed_steps_yield_default_dividers() {
        let steps = vec![
            Step::new("one").active(true),
            Step::new("two"),
            Step::new("three"),
        ];
        assert_eq!(
            divider_styles(&steps),
            vec![DividerStyle::Default, DividerStyle::Default]
        );
    }

    #[test]
    fn completion_boundary_yields_in_progress_divider() {
        let steps = vec![
            Step::new("one").completed(true),
            Step::new("two").active(true),
            Step::new("three"),
        ];
        assert_eq!(
            divider_styles(&steps),
            vec![DividerStyle::InProgress, DividerStyle::Default]
        );
    }

    #[test]
    fn consecutive_completed_steps_yield_completed_dividers() {
        let steps = vec![
            Step::new("one").completed(true),
            Step::new("two").completed(true),
            Step::new("three").active(true),
        ];
        assert_eq!(
            divider_styles(&steps),
            vec![DividerStyle::Completed, DividerStyle::InProgress]
        );
    }

    #[test]
    fn transient_flags_do_not_influence_derivation() {
        let steps = vec![
            Step::new("one").in_processing(true),
            Step::new("two").error(true),
        ];
        assert_eq!(divider_styles(&steps), vec![DividerStyle::Default]);

        // A completed right side alone is still a default divider.
        let steps = vec![Step::new("one"), Step::new("two").completed(true)];
        assert_eq!(divider_styles(&steps), vec![DividerStyle::Default]);
    }

    #[test]
    fn short_lists_have_no_dividers() {
        assert!(divider_styles(&[]).is_empty());
        assert!(divider_styles(&[Step::new("only")]).is_empty());
    }
}
