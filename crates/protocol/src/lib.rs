//! # sk-protocol
//!
//! Core data models for stepper-kit.
//!
//! This crate defines all shared data structures used for:
//! - Step descriptors supplied by the owning host
//! - Divider style derivation between consecutive steps
//! - Channel communication between the host and the UI
//!
//! ## Modules
//!
//! - [`step_models`]: Step descriptors and status resolution
//! - [`divider_models`]: Divider styles derived from adjacent step pairs
//! - [`ipc`]: Operations and Events for Host-UI communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde
//! - Steps carry no identity beyond their list position
//! - Independent compilation: no dependencies on other stepper-kit crates

pub mod divider_models;
pub mod ipc;
pub mod step_models;

// Re-export all public types for convenience
pub use divider_models::*;
pub use ipc::*;
pub use step_models::*;
