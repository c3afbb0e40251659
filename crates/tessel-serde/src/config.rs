//! Engine configuration documents.

use crate::error::SerdeError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parses a configuration from JSON. Missing fields take their defaults.
pub fn load_config<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerdeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads and parses a configuration file.
pub fn load_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, SerdeError> {
    let bytes = std::fs::read(path.as_ref())?;
    load_config(&bytes)
}
