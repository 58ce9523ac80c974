//! Step list file loading.

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_steps;
