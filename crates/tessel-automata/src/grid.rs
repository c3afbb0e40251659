//! Cell storage with wrapping or clamped addressing.
//!
//! A [`Grid`] is a fixed `width × height` rectangle of [`State`]s. Storage is
//! either dense (a row-major vector) or sparse (a map holding only non-zero
//! cells). The two are interchangeable: every read and write behaves the same
//! and two grids with the same contents compare equal whatever their storage.

use crate::error::AutomataError;
use crate::state::{BACKGROUND, State};
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How cells are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageKind {
    /// Row-major array of every cell.
    #[default]
    Dense,
    /// Map of non-zero cells; absent cells are background.
    Sparse,
}

/// Grid dimensions, addressing and storage, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Toroidal addressing when true, clamped otherwise.
    pub wrapping: bool,
    /// Storage strategy.
    pub storage: StorageKind,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 270,
            wrapping: true,
            storage: StorageKind::Dense,
        }
    }
}

impl GridConfig {
    /// Creates a wrapping dense configuration of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the addressing mode.
    pub fn with_wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Sets the storage strategy.
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    /// Checks the dimensions and builds an empty grid.
    pub fn build(&self) -> Result<Grid, AutomataError> {
        if self.width == 0 || self.height == 0 {
            return Err(AutomataError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Grid::new(self.width, self.height, self.wrapping, self.storage))
    }
}

/// An inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First row.
    pub min_row: usize,
    /// Last row (inclusive).
    pub max_row: usize,
    /// First column.
    pub min_col: usize,
    /// Last column (inclusive).
    pub max_col: usize,
}

impl Region {
    /// Creates a region from inclusive bounds.
    pub fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Self {
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Returns the number of cells.
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Returns true if the cell lies inside the region.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }
}

#[derive(Debug, Clone)]
enum Cells {
    Dense(Vec<State>),
    Sparse(HashMap<(usize, usize), State>),
}

/// Rectangular grid of cell states.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    wrapping: bool,
    cells: Cells,
}

impl Grid {
    /// Creates an all-background grid.
    pub fn new(width: usize, height: usize, wrapping: bool, storage: StorageKind) -> Self {
        let cells = match storage {
            StorageKind::Dense => Cells::Dense(vec![BACKGROUND; width * height]),
            StorageKind::Sparse => Cells::Sparse(HashMap::new()),
        };
        Self {
            width,
            height,
            wrapping,
            cells,
        }
    }

    /// Builds a grid from row-major cell states.
    pub fn from_dense(
        width: usize,
        height: usize,
        wrapping: bool,
        storage: StorageKind,
        states: &[State],
    ) -> Result<Self, AutomataError> {
        if width == 0 || height == 0 || states.len() != width * height {
            return Err(AutomataError::InvalidDimensions { width, height });
        }
        let mut grid = Self::new(width, height, wrapping, storage);
        for (index, &state) in states.iter().enumerate() {
            grid.put(index / width, index % width, state);
        }
        Ok(grid)
    }

    /// Returns the width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns true for toroidal addressing.
    pub fn wrapping(&self) -> bool {
        self.wrapping
    }

    /// Returns the storage strategy.
    pub fn storage(&self) -> StorageKind {
        match self.cells {
            Cells::Dense(_) => StorageKind::Dense,
            Cells::Sparse(_) => StorageKind::Sparse,
        }
    }

    /// Returns the region covering the whole grid.
    pub fn bounds(&self) -> Region {
        Region::new(0, self.height - 1, 0, self.width - 1)
    }

    /// Maps a signed coordinate onto a cell.
    ///
    /// Wrapping grids reduce both axes modulo the dimensions; clamped grids
    /// return `None` for anything outside.
    pub fn resolve(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        if self.wrapping {
            let row = row.rem_euclid(self.height as isize) as usize;
            let col = col.rem_euclid(self.width as isize) as usize;
            return Some((row, col));
        }
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Maps a signed coordinate onto a cell, wrapping or clamping to the edge.
    ///
    /// Used for movement: a clamped grid pins positions to `[0, dim - 1]`.
    pub fn clamp_position(&self, row: isize, col: isize) -> (usize, usize) {
        if self.wrapping {
            return (
                row.rem_euclid(self.height as isize) as usize,
                col.rem_euclid(self.width as isize) as usize,
            );
        }
        (
            row.clamp(0, self.height as isize - 1) as usize,
            col.clamp(0, self.width as isize - 1) as usize,
        )
    }

    /// Gets the state of a cell. Unaddressable cells read as background.
    pub fn get(&self, row: isize, col: isize) -> State {
        self.resolve(row, col)
            .map(|(row, col)| self.cell(row, col))
            .unwrap_or(BACKGROUND)
    }

    /// Sets the state of a cell. Writes to unaddressable cells are ignored.
    ///
    /// Returns true if a cell was written.
    pub fn set(&mut self, row: isize, col: isize, state: State) -> bool {
        match self.resolve(row, col) {
            Some((row, col)) => {
                self.put(row, col, state);
                true
            }
            None => false,
        }
    }

    /// Reads an in-bounds cell.
    pub(crate) fn cell(&self, row: usize, col: usize) -> State {
        match &self.cells {
            Cells::Dense(cells) => cells[row * self.width + col],
            Cells::Sparse(cells) => cells.get(&(row, col)).copied().unwrap_or(BACKGROUND),
        }
    }

    /// Writes an in-bounds cell.
    pub(crate) fn put(&mut self, row: usize, col: usize, state: State) {
        match &mut self.cells {
            Cells::Dense(cells) => cells[row * self.width + col] = state,
            Cells::Sparse(cells) => {
                if state == BACKGROUND {
                    cells.remove(&(row, col));
                } else {
                    cells.insert((row, col), state);
                }
            }
        }
    }

    /// Resets every cell to background.
    pub fn clear(&mut self) {
        match &mut self.cells {
            Cells::Dense(cells) => cells.fill(BACKGROUND),
            Cells::Sparse(cells) => cells.clear(),
        }
    }

    /// Iterates over non-background cells as `(row, col, state)`.
    pub fn iter_nonzero(&self) -> Box<dyn Iterator<Item = (usize, usize, State)> + '_> {
        match &self.cells {
            Cells::Dense(cells) => Box::new(
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &state)| state != BACKGROUND)
                    .map(|(index, &state)| (index / self.width, index % self.width, state)),
            ),
            Cells::Sparse(cells) => Box::new(cells.iter().map(|(&(row, col), &state)| (row, col, state))),
        }
    }

    /// Counts non-background cells.
    pub fn population(&self) -> usize {
        match &self.cells {
            Cells::Dense(cells) => cells.iter().filter(|&&state| state != BACKGROUND).count(),
            Cells::Sparse(cells) => cells.len(),
        }
    }

    /// Counts cells in each state, background included.
    pub fn state_counts(&self) -> BTreeMap<State, usize> {
        let mut counts = BTreeMap::new();
        for (_, _, state) in self.iter_nonzero() {
            *counts.entry(state).or_insert(0) += 1;
        }
        counts.insert(BACKGROUND, self.area() - self.population());
        counts
    }

    /// Returns the tight bounding box of all non-background cells.
    pub fn nonzero_bounds(&self) -> Option<Region> {
        let mut cells = self.iter_nonzero();
        let (row, col, _) = cells.next()?;
        let mut region = Region::new(row, row, col, col);
        for (row, col, _) in cells {
            region.min_row = region.min_row.min(row);
            region.max_row = region.max_row.max(row);
            region.min_col = region.min_col.min(col);
            region.max_col = region.max_col.max(col);
        }
        Some(region)
    }

    /// Returns all cells in row-major order.
    pub fn to_dense(&self) -> Vec<State> {
        match &self.cells {
            Cells::Dense(cells) => cells.clone(),
            Cells::Sparse(_) => self.read_region(&self.bounds()),
        }
    }

    /// Returns a copy of this grid using another storage strategy.
    pub fn with_storage(&self, storage: StorageKind) -> Self {
        let mut grid = Self::new(self.width, self.height, self.wrapping, storage);
        for (row, col, state) in self.iter_nonzero() {
            grid.put(row, col, state);
        }
        grid
    }

    /// Reads a region in row-major order.
    pub(crate) fn read_region(&self, region: &Region) -> Vec<State> {
        let mut states = Vec::with_capacity(region.area());
        for row in region.min_row..=region.max_row {
            for col in region.min_col..=region.max_col {
                states.push(self.cell(row, col));
            }
        }
        states
    }

    /// Overwrites a region from row-major states.
    pub(crate) fn write_region(&mut self, region: &Region, states: &[State]) {
        let width = region.width();
        for (index, &state) in states.iter().enumerate() {
            self.put(region.min_row + index / width, region.min_col + index % width, state);
        }
    }

    /// Resets every cell above `max_state` to background.
    ///
    /// Returns the number of cells changed.
    pub fn coerce_above(&mut self, max_state: State) -> usize {
        let stale: Vec<(usize, usize)> = self
            .iter_nonzero()
            .filter(|&(_, _, state)| state > max_state)
            .map(|(row, col, _)| (row, col))
            .collect();
        for &(row, col) in &stale {
            self.put(row, col, BACKGROUND);
        }
        stale.len()
    }

    /// Fills every cell with a state drawn from weighted choices.
    ///
    /// Each `(state, weight)` pair makes `state` proportionally likely. The
    /// same seed always produces the same grid. Returns false and leaves the
    /// grid untouched when all weights are zero.
    pub fn fill_weighted(&mut self, seed: u64, weights: &[(State, u32)]) -> bool {
        let total: u64 = weights.iter().map(|&(_, weight)| u64::from(weight)).sum();
        if total == 0 {
            return false;
        }

        let mut rng = SimpleRng::new(seed);
        for row in 0..self.height {
            for col in 0..self.width {
                let mut pick = rng.next_u64() % total;
                let mut chosen = BACKGROUND;
                for &(state, weight) in weights {
                    let weight = u64::from(weight);
                    if pick < weight {
                        chosen = state;
                        break;
                    }
                    pick -= weight;
                }
                self.put(row, col, chosen);
            }
        }
        true
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        if self.width != other.width
            || self.height != other.height
            || self.wrapping != other.wrapping
            || self.population() != other.population()
        {
            return false;
        }
        self.iter_nonzero()
            .all(|(row, col, state)| other.cell(row, col) == state)
    }
}

impl Eq for Grid {}

/// Simple RNG for density fills.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // High bits of an LCG are the well-mixed ones.
        self.state >> 33
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_storages(width: usize, height: usize, wrapping: bool) -> [Grid; 2] {
        [
            Grid::new(width, height, wrapping, StorageKind::Dense),
            Grid::new(width, height, wrapping, StorageKind::Sparse),
        ]
    }

    #[test]
    fn test_grid_config_rejects_empty() {
        assert_eq!(
            GridConfig::new(0, 5).build(),
            Err(AutomataError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(GridConfig::new(3, 3).build().is_ok());
    }

    #[test]
    fn test_set_get() {
        for mut grid in both_storages(10, 8, false) {
            assert_eq!(grid.get(3, 4), 0);
            assert!(grid.set(3, 4, 2));
            assert_eq!(grid.get(3, 4), 2);
            assert_eq!(grid.population(), 1);
        }
    }

    #[test]
    fn test_clamped_out_of_bounds() {
        for mut grid in both_storages(4, 4, false) {
            assert!(!grid.set(-1, 0, 1));
            assert!(!grid.set(0, 4, 1));
            assert_eq!(grid.get(-1, 0), 0);
            assert_eq!(grid.get(100, 100), 0);
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn test_wrapping_addressing() {
        for mut grid in both_storages(5, 4, true) {
            grid.set(-1, -1, 3);
            assert_eq!(grid.get(3, 4), 3);
            assert_eq!(grid.get(7, 9), 3);
            assert_eq!(grid.resolve(-5, 5), Some((3, 0)));
        }
    }

    #[test]
    fn test_sparse_never_stores_background() {
        let mut grid = Grid::new(4, 4, true, StorageKind::Sparse);
        grid.set(1, 1, 2);
        grid.set(1, 1, 0);
        grid.set(2, 2, 0);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_nonzero().count(), 0);
    }

    #[test]
    fn test_storage_equivalence() {
        let [mut dense, mut sparse] = both_storages(6, 6, true);
        for (row, col, state) in [(0, 0, 1), (5, 2, 3), (2, 5, 1)] {
            dense.set(row, col, state);
            sparse.set(row, col, state);
        }
        assert_eq!(dense, sparse);
        assert_eq!(dense.to_dense(), sparse.to_dense());
        assert_eq!(dense.state_counts(), sparse.state_counts());
        assert_eq!(dense.nonzero_bounds(), sparse.nonzero_bounds());
        assert_eq!(sparse.with_storage(StorageKind::Dense), dense);

        sparse.set(0, 0, 2);
        assert_ne!(dense, sparse);
    }

    #[test]
    fn test_clamp_position() {
        let clamped = Grid::new(5, 5, false, StorageKind::Dense);
        assert_eq!(clamped.clamp_position(-3, 9), (0, 4));
        let wrapped = Grid::new(5, 5, true, StorageKind::Dense);
        assert_eq!(wrapped.clamp_position(-1, 5), (4, 0));
    }

    #[test]
    fn test_nonzero_bounds() {
        let mut grid = Grid::new(10, 10, true, StorageKind::Dense);
        assert_eq!(grid.nonzero_bounds(), None);
        grid.set(2, 7, 1);
        grid.set(6, 3, 1);
        assert_eq!(grid.nonzero_bounds(), Some(Region::new(2, 6, 3, 7)));
    }

    #[test]
    fn test_coerce_above() {
        let mut grid = Grid::new(3, 3, true, StorageKind::Sparse);
        grid.set(0, 0, 1);
        grid.set(1, 1, 4);
        grid.set(2, 2, 7);
        assert_eq!(grid.coerce_above(3), 2);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_fill_weighted() {
        let mut grid = Grid::new(40, 40, true, StorageKind::Dense);
        assert!(!grid.fill_weighted(7, &[(0, 0), (1, 0)]));
        assert_eq!(grid.population(), 0);

        assert!(grid.fill_weighted(7, &[(0, 1), (1, 1)]));
        let alive = grid.population();
        // Roughly half alive, with some variance
        assert!(alive > 600 && alive < 1000, "alive = {alive}");

        let mut again = Grid::new(40, 40, true, StorageKind::Dense);
        again.fill_weighted(7, &[(0, 1), (1, 1)]);
        assert_eq!(grid, again);

        grid.fill_weighted(3, &[(2, 5)]);
        assert_eq!(grid.state_counts().get(&2), Some(&1600));
    }

    #[test]
    fn test_from_dense_checks_length() {
        assert!(Grid::from_dense(2, 2, true, StorageKind::Dense, &[0, 1, 0]).is_err());
        let grid = Grid::from_dense(2, 2, true, StorageKind::Sparse, &[0, 1, 0, 2]).unwrap();
        assert_eq!(grid.get(0, 1), 1);
        assert_eq!(grid.get(1, 1), 2);
        assert_eq!(grid.to_dense(), vec![0, 1, 0, 2]);
    }
}
