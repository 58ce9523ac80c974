//! Step list ownership and navigation.

pub mod manager;

pub use manager::StepListManager;
