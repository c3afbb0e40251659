//! Binary grid-state files (`.gridstate`).
//!
//! A saved grid is one bincode value in the standard config: dimensions,
//! generation, row-major cells, then the color table. The whole input must be
//! consumed; trailing bytes mean the file is not a single grid state.

use crate::error::SerdeError;
use crate::format::GridFormat;
use crate::snapshot::GridState;
use bincode::config::{Configuration, standard};

fn config() -> Configuration {
    standard()
}

/// Grid states as bincode, the default for saved grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeFormat;

impl BincodeFormat {
    /// Creates the format.
    pub fn new() -> Self {
        Self
    }
}

impl GridFormat for BincodeFormat {
    fn serialize(&self, state: &GridState) -> Result<Vec<u8>, SerdeError> {
        Ok(bincode::serde::encode_to_vec(state, config())?)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<GridState, SerdeError> {
        let (state, read): (GridState, usize) = bincode::serde::decode_from_slice(bytes, config())?;
        if read != bytes.len() {
            return Err(SerdeError::Schema(format!(
                "{} trailing byte(s) after grid state",
                bytes.len() - read
            )));
        }
        state.checked()
    }

    fn name(&self) -> &'static str {
        "bincode"
    }

    fn extension(&self) -> &'static str {
        "gridstate"
    }
}
