//! Loading evaluation specs from YAML files

use super::schema::EvalSpec;
use super::validate::validate_spec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load an evaluation spec from a YAML configuration file
///
/// Reads the file, parses it, and validates the result, so a spec coming
/// out of this function is always usable as-is.
///
/// # Example
///
/// ```no_run
/// use equidad::config::load_spec;
///
/// let spec = load_spec("eval.yaml")?;
/// # Ok::<(), equidad::Error>(())
/// ```
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<EvalSpec> {
    let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    let spec: EvalSpec = serde_yaml::from_str(&yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {}", e)))?;

    validate_spec(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {}", e)))?;

    Ok(spec)
}
