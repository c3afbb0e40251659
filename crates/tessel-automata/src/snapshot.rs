//! History snapshots and the surface shared by the grid engines.

use crate::error::AutomataError;
use crate::grid::Grid;
use crate::pointer::Pointer;
use crate::state::{BACKGROUND, State, StateColors};
use std::collections::BTreeMap;
use tessel_history::HistoryError;

/// Deep copy of an engine's evolving state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Cell states.
    pub grid: Grid,
    /// Pointer population; empty for neighborhood automata.
    pub pointers: Vec<Pointer>,
    /// Generation counter.
    pub generation: u64,
}

/// Operations common to automata that evolve a 2D grid.
///
/// Driving code (a render loop, a headless runner, the grid-state exporter)
/// talks to either engine through this trait.
pub trait GridAutomaton {
    /// Returns the grid.
    fn grid(&self) -> &Grid;

    /// Returns the generation counter.
    fn generation(&self) -> u64;

    /// Returns the color of every declared state.
    fn state_colors(&self) -> &StateColors;

    /// Advances one generation and returns the new generation count.
    fn step(&mut self) -> u64;

    /// Clears the grid, resets the generation and starts a fresh history.
    fn reset(&mut self);

    /// Restores the previous snapshot and returns its generation.
    fn undo(&mut self) -> Result<u64, HistoryError>;

    /// Restores the next snapshot and returns its generation.
    fn redo(&mut self) -> Result<u64, HistoryError>;

    /// Returns true if [`undo`](Self::undo) would succeed.
    fn can_undo(&self) -> bool;

    /// Returns true if [`redo`](Self::redo) would succeed.
    fn can_redo(&self) -> bool;

    /// Cycles a cell to the next declared state.
    fn toggle_cell(&mut self, row: isize, col: isize);

    /// Sets a cell. Ignored outside a clamped grid.
    fn set_cell(&mut self, row: isize, col: isize, state: State);

    /// Replaces the grid contents and generation, for loading saved state.
    ///
    /// The grid must have the session's dimensions; its storage and
    /// addressing are converted to the session's.
    fn restore_grid(&mut self, grid: Grid, generation: u64) -> Result<(), AutomataError>;

    /// Gets a cell. Out-of-bounds reads on a clamped grid return 0.
    fn get_cell(&self, row: isize, col: isize) -> State {
        self.grid().get(row, col)
    }

    /// Returns the highest declared state.
    fn max_state(&self) -> State {
        self.state_colors()
            .keys()
            .next_back()
            .copied()
            .unwrap_or(BACKGROUND)
    }

    /// Counts cells in each state.
    fn state_counts(&self) -> BTreeMap<State, usize> {
        self.grid().state_counts()
    }
}

/// Checks a grid being restored against the session grid and converts it.
pub(crate) fn conform_grid(session: &Grid, grid: Grid) -> Result<Grid, AutomataError> {
    if grid.width() != session.width() || grid.height() != session.height() {
        return Err(AutomataError::DimensionMismatch {
            width: session.width(),
            height: session.height(),
            found_width: grid.width(),
            found_height: grid.height(),
        });
    }
    if grid.storage() == session.storage() && grid.wrapping() == session.wrapping() {
        return Ok(grid);
    }
    Grid::from_dense(
        grid.width(),
        grid.height(),
        session.wrapping(),
        session.storage(),
        &grid.to_dense(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::StorageKind;

    #[test]
    fn test_conform_grid_converts_storage() {
        let session = Grid::new(4, 3, false, StorageKind::Sparse);
        let mut loaded = Grid::new(4, 3, true, StorageKind::Dense);
        loaded.set(1, 2, 5);

        let conformed = conform_grid(&session, loaded).unwrap();
        assert_eq!(conformed.storage(), StorageKind::Sparse);
        assert!(!conformed.wrapping());
        assert_eq!(conformed.get(1, 2), 5);
    }

    #[test]
    fn test_conform_grid_rejects_size() {
        let session = Grid::new(4, 3, true, StorageKind::Dense);
        let loaded = Grid::new(3, 4, true, StorageKind::Dense);
        assert_eq!(
            conform_grid(&session, loaded),
            Err(AutomataError::DimensionMismatch {
                width: 4,
                height: 3,
                found_width: 3,
                found_height: 4
            })
        );
    }
}
