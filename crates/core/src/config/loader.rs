//! Step list file parsing.
//!
//! Step lists are ordinary YAML or JSON arrays of step objects. Flags not
//! named in the file default to `false`, so a minimal file is just labels:
//!
//! ```yaml
//! - label: "Checkout"
//!   completed: true
//! - label: "Build"
//!   inProcessing: true
//! - label: "Deploy"
//! ```

use std::fs;
use std::path::Path;

use sk_protocol::Step;

use crate::config::error::{ConfigError, ConfigResult};

/// Load an ordered step list from a YAML or JSON file.
///
/// The format is selected by file extension: `.yaml`/`.yml` or `.json`.
/// Any other extension is [`ConfigError::UnsupportedFormat`]. An empty
/// list is valid and renders as an empty stepper.
pub fn load_steps(path: impl AsRef<Path>) -> ConfigResult<Vec<Step>> {
    let path = path.as_ref();

    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Format::Yaml,
        Some("json") => Format::Json,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let steps = match format {
        Format::Yaml => {
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?
        }
        Format::Json => {
            serde_json::from_str(&raw).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    tracing::debug!(path = %path.display(), "loaded step list");
    Ok(steps)
}

enum Format {
    Yaml,
    Json,
}
