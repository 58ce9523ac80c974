//! TUI widgets module.
//!
//! This module contains the stepper widget and its render plan types.

pub mod stepper;

pub use stepper::{EdgeDecoration, Stepper, StepperElement};
