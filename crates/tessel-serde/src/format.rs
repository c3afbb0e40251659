//! Format trait for grid-state encoding.

use crate::error::SerdeError;
use crate::snapshot::GridState;

/// An encoding for [`GridState`]s.
pub trait GridFormat {
    /// Encodes a grid state.
    fn serialize(&self, state: &GridState) -> Result<Vec<u8>, SerdeError>;

    /// Decodes a grid state.
    fn deserialize(&self, bytes: &[u8]) -> Result<GridState, SerdeError>;

    /// Human-readable format name.
    fn name(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}
