//! JSON grid-state files.
//!
//! Same fields as the binary form, with color keys written as strings
//! (`{"0": "#ffffff"}`). Useful for inspecting or hand-editing a saved grid.

use crate::error::SerdeError;
use crate::format::GridFormat;
use crate::snapshot::GridState;

/// Grid states as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonFormat {
    /// Compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl GridFormat for JsonFormat {
    fn serialize(&self, state: &GridState) -> Result<Vec<u8>, SerdeError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(state)?
        } else {
            serde_json::to_vec(state)?
        };
        Ok(bytes)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<GridState, SerdeError> {
        let state: GridState = serde_json::from_slice(bytes)?;
        state.checked()
    }

    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
