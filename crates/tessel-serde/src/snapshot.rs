//! Saved grid states.

use crate::error::SerdeError;
use crate::format::GridFormat;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tessel_automata::{Grid, GridAutomaton, State};

/// A saved grid: cells, generation and the colors in use when saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Generation counter.
    pub generation: u64,
    /// Row-major cell states.
    pub cells: Vec<State>,
    /// `#RRGGBB` color per state.
    pub state_colors: BTreeMap<State, String>,
}

impl GridState {
    /// Captures an engine's grid.
    pub fn capture<A: GridAutomaton + ?Sized>(engine: &A) -> Self {
        let grid = engine.grid();
        Self {
            width: grid.width(),
            height: grid.height(),
            generation: engine.generation(),
            cells: grid.to_dense(),
            state_colors: engine
                .state_colors()
                .iter()
                .map(|(state, color)| (*state, color.to_string()))
                .collect(),
        }
    }

    /// Returns the state if its cell list matches its dimensions.
    pub(crate) fn checked(self) -> Result<Self, SerdeError> {
        let expected = self.width.checked_mul(self.height);
        if self.width == 0 || self.height == 0 || expected != Some(self.cells.len()) {
            return Err(SerdeError::Schema(format!(
                "{}x{} grid with {} cells",
                self.width,
                self.height,
                self.cells.len()
            )));
        }
        Ok(self)
    }

    /// Builds a grid with the given addressing and storage of `like`.
    fn to_grid(&self, like: &Grid) -> Result<Grid, SerdeError> {
        Ok(Grid::from_dense(
            self.width,
            self.height,
            like.wrapping(),
            like.storage(),
            &self.cells,
        )?)
    }
}

/// Encodes an engine's grid, generation and colors.
pub fn export_grid_state<A: GridAutomaton + ?Sized>(
    engine: &A,
    format: &dyn GridFormat,
) -> Result<Vec<u8>, SerdeError> {
    format.serialize(&GridState::capture(engine))
}

/// Decodes a grid state and loads it into an engine.
///
/// The data is decoded and checked against the engine's grid size before
/// the engine is touched. Cells whose state is above the engine's highest
/// declared state become 0; the number of such cells is returned.
pub fn load_grid_state<A: GridAutomaton + ?Sized>(
    engine: &mut A,
    bytes: &[u8],
    format: &dyn GridFormat,
) -> Result<usize, SerdeError> {
    let state = format.deserialize(bytes)?;
    let mut grid = state.to_grid(engine.grid())?;

    let coerced = grid.coerce_above(engine.max_state());
    if coerced > 0 {
        warn!(
            "{coerced} cell(s) above state {} reset to 0 on load",
            engine.max_state()
        );
    }

    engine.restore_grid(grid, state.generation)?;
    info!(
        "loaded {}x{} grid at generation {} ({})",
        state.width,
        state.height,
        state.generation,
        format.name()
    );
    Ok(coerced)
}
