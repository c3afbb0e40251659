//! Neighbor-counting automata (Game of Life and relatives).
//!
//! Each generation counts, for every state a rule looks at, how many of a
//! cell's neighbors are in that state, then runs the rules in order. Counting
//! is a convolution: the "is this state" mask is shifted by every kernel
//! offset and summed.
//!
//! Two evaluation paths exist. [`NeighborhoodEngine::evolve_full`] covers the
//! whole grid. [`NeighborhoodEngine::evolve_bounding_box`] covers only the
//! padded rectangle around live cells and produces the same grid, falling
//! back to wider regions whenever cells outside the rectangle could change.

use crate::config::NeighborhoodConfig;
use crate::error::AutomataError;
use crate::grid::{Grid, Region};
use crate::kernel::{NeighborKernel, Neighborhood2D, NeighborhoodKind};
use crate::rule::{Rule, RuleSet};
use crate::snapshot::{GridAutomaton, Snapshot, conform_grid};
use crate::state::{State, StateColors};
use log::{debug, info, warn};
use std::collections::HashMap;
use tessel_history::{HistoryBuffer, HistoryError};

/// Engine for neighborhood automata.
///
/// # Example
///
/// ```
/// use tessel_automata::{GridAutomaton, GridConfig, NeighborhoodConfig, NeighborhoodEngine, RuleSet};
///
/// let config = NeighborhoodConfig::new(GridConfig::new(8, 8));
/// let mut life = NeighborhoodEngine::new(config, RuleSet::game_of_life()).unwrap();
///
/// // Blinker
/// for col in 2..5 {
///     life.set_cell(3, col, 1);
/// }
/// life.step();
///
/// assert_eq!(life.get_cell(2, 3), 1);
/// assert_eq!(life.get_cell(3, 2), 0);
/// assert_eq!(life.generation(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NeighborhoodEngine {
    grid: Grid,
    ruleset: RuleSet,
    kernel: NeighborKernel,
    generation: u64,
    history: HistoryBuffer<Snapshot>,
    bbox_threshold: f64,
}

impl NeighborhoodEngine {
    /// Creates an engine with an empty grid at generation 0.
    pub fn new(config: NeighborhoodConfig, ruleset: RuleSet) -> Result<Self, AutomataError> {
        let mut engine = Self {
            grid: config.grid.build()?,
            ruleset,
            kernel: config.kernel()?,
            generation: 0,
            history: HistoryBuffer::new(config.history()),
            bbox_threshold: config.bbox_threshold,
        };
        engine.reset();
        Ok(engine)
    }

    /// Returns the rule set.
    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    /// Returns the neighbor kernel.
    pub fn kernel(&self) -> &NeighborKernel {
        &self.kernel
    }

    /// Returns the undo history.
    pub fn history(&self) -> &HistoryBuffer<Snapshot> {
        &self.history
    }

    /// Replaces the rules and colors. See [`RuleSet::change_rules`].
    ///
    /// Cells above the new highest declared state are reset to 0. Returns
    /// the number of such cells.
    pub fn change_rules(&mut self, rules: Vec<Rule>, colors: StateColors) -> Result<usize, AutomataError> {
        self.ruleset.change_rules(rules, colors)?;
        Ok(self.coerce_undeclared())
    }

    /// Replaces the whole rule set, resetting cells it does not declare.
    pub fn set_ruleset(&mut self, ruleset: RuleSet) -> usize {
        self.ruleset = ruleset;
        self.coerce_undeclared()
    }

    fn coerce_undeclared(&mut self) -> usize {
        let max_state = self.ruleset.max_state();
        let coerced = self.grid.coerce_above(max_state);
        if coerced > 0 {
            warn!("{coerced} cell(s) above state {max_state} reset to 0 after rule change");
        }
        coerced
    }

    /// Changes the neighborhood shape and radius.
    pub fn set_neighborhood(&mut self, kind: NeighborhoodKind, radius: u32) -> Result<(), AutomataError> {
        self.kernel = NeighborKernel::new(kind, radius)?;
        info!("neighborhood set to {kind:?} radius {radius}");
        Ok(())
    }

    /// Fills the grid from weighted state choices, deterministically per seed.
    ///
    /// The filled grid starts a new run at generation 0 with a fresh history.
    /// Returns false, leaving the engine unchanged, if every weight is zero.
    pub fn fill_random(&mut self, seed: u64, weights: &[(State, u32)]) -> bool {
        if !self.grid.fill_weighted(seed, weights) {
            return false;
        }
        self.generation = 0;
        self.history.clear();
        self.history.save_state(self.snapshot());
        true
    }

    /// Returns the bounding box of all non-background cells padded by
    /// `radius + 1` and clamped to the grid, or `None` for an empty grid.
    pub fn active_bounding_box(&self) -> Option<Region> {
        let bounds = self.grid.nonzero_bounds()?;
        let pad = self.kernel.radius() as usize + 1;
        Some(Region::new(
            bounds.min_row.saturating_sub(pad),
            (bounds.max_row + pad).min(self.grid.height() - 1),
            bounds.min_col.saturating_sub(pad),
            (bounds.max_col + pad).min(self.grid.width() - 1),
        ))
    }

    /// Computes one generation over the whole grid.
    pub fn evolve_full(&mut self) -> u64 {
        let region = self.grid.bounds();
        let next = self.evolve_region(&region);
        self.commit(Some((region, next)))
    }

    /// Computes one generation over the active region only.
    ///
    /// Produces exactly the grid [`evolve_full`](Self::evolve_full) would.
    pub fn evolve_bounding_box(&mut self) -> u64 {
        let update = self.bounding_box_region().map(|region| {
            let next = self.evolve_region(&region);
            (region, next)
        });
        self.commit(update)
    }

    /// Picks the region the bounding-box path evolves.
    ///
    /// `None` means no cell can change.
    fn bounding_box_region(&self) -> Option<Region> {
        if !self.ruleset.is_quiescent(self.kernel.max_neighbors()) {
            return Some(self.grid.bounds());
        }
        let bounds = self.grid.nonzero_bounds()?;
        let pad = self.kernel.radius() as usize + 1;
        let wrapping = self.grid.wrapping();
        let (min_row, max_row) = pad_axis(bounds.min_row, bounds.max_row, pad, self.grid.height(), wrapping);
        let (min_col, max_col) = pad_axis(bounds.min_col, bounds.max_col, pad, self.grid.width(), wrapping);
        Some(Region::new(min_row, max_row, min_col, max_col))
    }

    /// Computes next states for a region, returned in row-major order.
    fn evolve_region(&self, region: &Region) -> Vec<State> {
        let radius = self.kernel.radius() as isize;
        let (height, width) = (region.height(), region.width());
        let window_width = width + 2 * radius as usize;
        let window_height = height + 2 * radius as usize;

        // Region plus a radius-wide border, read through the grid's
        // addressing. `None` is outside a clamped grid.
        let mut window = Vec::with_capacity(window_width * window_height);
        for wr in 0..window_height as isize {
            for wc in 0..window_width as isize {
                let row = region.min_row as isize - radius + wr;
                let col = region.min_col as isize - radius + wc;
                window.push(self.grid.resolve(row, col).map(|(r, c)| self.grid.cell(r, c)));
            }
        }

        let mut planes: HashMap<State, Vec<u32>> = HashMap::new();
        for state in self.ruleset.counted_states() {
            let mask: Vec<u32> = window.iter().map(|cell| u32::from(*cell == Some(state))).collect();
            let mut counts = vec![0u32; height * width];
            for &(dx, dy) in self.kernel.offsets() {
                let (dx, dy) = (dx as isize, dy as isize);
                for row in 0..height {
                    let start = (row as isize + radius + dy) as usize * window_width + (radius + dx) as usize;
                    let src = &mask[start..start + width];
                    let dst = &mut counts[row * width..(row + 1) * width];
                    for (count, hit) in dst.iter_mut().zip(src) {
                        *count += hit;
                    }
                }
            }
            planes.insert(state, counts);
        }

        let current = self.grid.read_region(region);
        let mut next = current.clone();
        let mut decided = vec![false; current.len()];
        for rule in self.ruleset.rules() {
            for (index, &state) in current.iter().enumerate() {
                if decided[index] || state != rule.current_state {
                    continue;
                }
                let fires = rule.conditions.iter().all(|condition| {
                    let count = planes
                        .get(&condition.neighbor_state)
                        .map_or(0, |plane| plane[index]);
                    condition.holds(count)
                });
                if fires {
                    next[index] = rule.next_state;
                    decided[index] = true;
                }
            }
        }
        next
    }

    fn commit(&mut self, update: Option<(Region, Vec<State>)>) -> u64 {
        if let Some((region, next)) = update {
            self.grid.write_region(&region, &next);
        }
        self.generation += 1;
        self.history.save_state(self.snapshot());
        self.generation
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            pointers: Vec::new(),
            generation: self.generation,
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) -> u64 {
        self.grid = snapshot.grid;
        self.generation = snapshot.generation;
        self.generation
    }
}

/// Pads `[min, max]` on an axis of length `len`.
///
/// A wrapping axis whose padding would cross an edge spans the whole axis,
/// since neighbors across the seam can change.
fn pad_axis(min: usize, max: usize, pad: usize, len: usize, wrapping: bool) -> (usize, usize) {
    match min.checked_sub(pad) {
        Some(lo) if max + pad < len => (lo, max + pad),
        _ if wrapping => (0, len - 1),
        lo => (lo.unwrap_or(0), (max + pad).min(len - 1)),
    }
}

impl GridAutomaton for NeighborhoodEngine {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn state_colors(&self) -> &StateColors {
        self.ruleset.state_colors()
    }

    /// Uses the bounding-box path while the active area is below the
    /// configured fraction of the grid.
    fn step(&mut self) -> u64 {
        let use_bbox = match self.active_bounding_box() {
            Some(bbox) => (bbox.area() as f64) < self.bbox_threshold * self.grid.area() as f64,
            None => true,
        };
        if use_bbox {
            debug!("generation {}: bounding-box path", self.generation + 1);
            self.evolve_bounding_box()
        } else {
            debug!("generation {}: full path", self.generation + 1);
            self.evolve_full()
        }
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.history.clear();
        self.history.save_state(self.snapshot());
        info!(
            "neighborhood engine reset ({}x{})",
            self.grid.width(),
            self.grid.height()
        );
    }

    fn undo(&mut self) -> Result<u64, HistoryError> {
        let snapshot = self.history.undo()?;
        Ok(self.apply_snapshot(snapshot))
    }

    fn redo(&mut self) -> Result<u64, HistoryError> {
        let snapshot = self.history.redo()?;
        Ok(self.apply_snapshot(snapshot))
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn toggle_cell(&mut self, row: isize, col: isize) {
        if let Some((row, col)) = self.grid.resolve(row, col) {
            let states = self.ruleset.num_states().max(1);
            let next = (self.grid.cell(row, col) as usize + 1) % states;
            self.grid.put(row, col, next as State);
        }
    }

    fn set_cell(&mut self, row: isize, col: isize, state: State) {
        self.grid.set(row, col, state);
    }

    fn restore_grid(&mut self, grid: Grid, generation: u64) -> Result<(), AutomataError> {
        self.grid = conform_grid(&self.grid, grid)?;
        self.generation = generation;
        self.history.save_state(self.snapshot());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridConfig, StorageKind};
    use crate::rule::{Condition, Operator};
    use crate::state::Rgb;
    use proptest::prelude::*;

    fn life(width: usize, height: usize, wrapping: bool) -> NeighborhoodEngine {
        let grid = GridConfig::new(width, height).with_wrapping(wrapping);
        NeighborhoodEngine::new(NeighborhoodConfig::new(grid), RuleSet::game_of_life()).unwrap()
    }

    fn live_cells(engine: &NeighborhoodEngine) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = engine.grid().iter_nonzero().map(|(r, c, _)| (r, c)).collect();
        cells.sort();
        cells
    }

    /// Three-state rules with several conditions per rule.
    fn three_state_rules() -> RuleSet {
        let mut ruleset = RuleSet::new();
        let colors = StateColors::from([(1, Rgb::GRAY), (2, Rgb::from_hex(0x3b528b))]);
        let rules = vec![
            Rule::new(
                0,
                vec![Condition::new(1, Operator::Ge, 2), Condition::new(2, Operator::Lt, 2)],
                1,
                Rgb::GRAY,
            ),
            Rule::new(1, vec![Condition::new(1, Operator::Gt, 3)], 2, Rgb::from_hex(0x3b528b)),
            Rule::new(2, vec![Condition::new(0, Operator::Ge, 5)], 0, Rgb::WHITE),
            Rule::new(1, vec![Condition::new(2, Operator::Eq, 1)], 0, Rgb::WHITE),
        ];
        ruleset.change_rules(rules, colors).unwrap();
        ruleset
    }

    #[test]
    fn test_new_starts_at_generation_zero() {
        let engine = life(5, 5, true);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_glider_travels_diagonally() {
        let mut engine = life(10, 10, true);
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        for (r, c) in glider {
            engine.set_cell(r + 2, c + 2, 1);
        }
        for _ in 0..4 {
            engine.step();
        }

        let mut expected: Vec<_> = glider.iter().map(|&(r, c)| (r as usize + 3, c as usize + 3)).collect();
        expected.sort();
        assert_eq!(live_cells(&engine), expected);
        assert_eq!(engine.grid().population(), 5);
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn test_glider_wraps_across_edges() {
        let mut full = life(8, 8, true);
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        for (r, c) in glider {
            full.set_cell(r + 5, c + 5, 1);
        }
        let mut bbox = full.clone();
        for _ in 0..12 {
            full.evolve_full();
            bbox.evolve_bounding_box();
            assert_eq!(full.grid(), bbox.grid());
        }
        assert_eq!(full.grid().population(), 5);
    }

    #[test]
    fn test_blinker_at_clamped_edge() {
        let mut engine = life(5, 5, false);
        for col in 0..3 {
            engine.set_cell(0, col, 1);
        }
        engine.evolve_full();
        // The row above is outside the grid, so only two cells survive.
        assert_eq!(live_cells(&engine), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_empty_grid_still_advances() {
        let mut engine = life(8, 8, true);
        assert_eq!(engine.step(), 1);
        assert_eq!(engine.grid().population(), 0);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.active_bounding_box(), None);
    }

    #[test]
    fn test_active_bounding_box() {
        let mut engine = life(20, 20, true);
        engine.set_cell(10, 10, 1);
        engine.set_cell(11, 12, 1);
        assert_eq!(engine.active_bounding_box(), Some(Region::new(8, 13, 8, 14)));

        engine.set_cell(0, 19, 1);
        assert_eq!(engine.active_bounding_box(), Some(Region::new(0, 13, 8, 19)));
    }

    #[test]
    fn test_non_quiescent_rules_cover_whole_grid() {
        let mut ruleset = RuleSet::new();
        ruleset.add_rule(Rule::new(0, vec![Condition::new(0, Operator::Eq, 8)], 1, Rgb::GRAY));
        let grid = GridConfig::new(12, 12);
        let mut engine = NeighborhoodEngine::new(NeighborhoodConfig::new(grid), ruleset).unwrap();
        engine.set_cell(0, 0, 1);

        let mut full = engine.clone();
        full.evolve_full();
        engine.evolve_bounding_box();

        assert_eq!(engine.grid(), full.grid());
        assert_eq!(engine.get_cell(6, 6), 1);
    }

    #[test]
    fn test_rule_precedence() {
        let mut ruleset = RuleSet::new();
        ruleset.add_rule(Rule::new(1, vec![], 2, Rgb::GRAY));
        ruleset.add_rule(Rule::new(1, vec![], 3, Rgb::GRAY));
        let mut engine = NeighborhoodEngine::new(NeighborhoodConfig::new(GridConfig::new(4, 4)), ruleset).unwrap();
        engine.set_cell(1, 1, 1);
        engine.step();
        assert_eq!(engine.get_cell(1, 1), 2);
    }

    #[test]
    fn test_decisions_do_not_chain() {
        let mut ruleset = RuleSet::new();
        ruleset.add_rule(Rule::new(1, vec![], 2, Rgb::GRAY));
        ruleset.add_rule(Rule::new(2, vec![], 3, Rgb::GRAY));
        let mut engine = NeighborhoodEngine::new(NeighborhoodConfig::new(GridConfig::new(4, 4)), ruleset).unwrap();
        engine.set_cell(0, 0, 1);
        engine.step();
        assert_eq!(engine.get_cell(0, 0), 2);
        engine.step();
        assert_eq!(engine.get_cell(0, 0), 3);
    }

    #[test]
    fn test_undo_redo() {
        let mut engine = life(8, 8, true);
        for col in 2..5 {
            engine.set_cell(3, col, 1);
        }
        engine.step();
        let after_one = engine.grid().clone();
        engine.step();

        assert_eq!(engine.undo(), Ok(1));
        assert_eq!(engine.grid(), &after_one);
        assert_eq!(engine.redo(), Ok(2));
        assert_eq!(engine.undo(), Ok(1));
        assert_eq!(engine.undo(), Ok(0));
        assert_eq!(engine.undo(), Err(HistoryError::NothingToUndo));
    }

    #[test]
    fn test_history_limit() {
        let mut engine = life(8, 8, true);
        for _ in 0..10 {
            engine.step();
        }
        let mut undone = 0;
        while engine.undo().is_ok() {
            undone += 1;
        }
        assert_eq!(undone, 4);
        assert_eq!(engine.generation(), 6);
    }

    #[test]
    fn test_reset() {
        let mut engine = life(8, 8, true);
        engine.set_cell(1, 1, 1);
        engine.step();
        engine.step();
        engine.reset();

        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().population(), 0);
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_toggle_cycles_states() {
        let mut engine = NeighborhoodEngine::new(NeighborhoodConfig::default(), three_state_rules()).unwrap();
        engine.toggle_cell(2, 2);
        assert_eq!(engine.get_cell(2, 2), 1);
        engine.toggle_cell(2, 2);
        assert_eq!(engine.get_cell(2, 2), 2);
        engine.toggle_cell(2, 2);
        assert_eq!(engine.get_cell(2, 2), 0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_restore_grid() {
        let mut engine = life(4, 4, true);
        let mut loaded = Grid::new(4, 4, true, StorageKind::Sparse);
        loaded.set(2, 2, 1);
        engine.restore_grid(loaded, 17).unwrap();
        assert_eq!(engine.generation(), 17);
        assert_eq!(engine.get_cell(2, 2), 1);
        assert_eq!(engine.grid().storage(), StorageKind::Dense);

        let wrong = Grid::new(5, 4, true, StorageKind::Dense);
        assert!(engine.restore_grid(wrong, 3).is_err());
        assert_eq!(engine.generation(), 17);
    }

    #[test]
    fn test_set_neighborhood() {
        let mut engine = life(9, 9, true);
        assert!(engine.set_neighborhood(NeighborhoodKind::VonNeumann, 0).is_err());
        engine.set_neighborhood(NeighborhoodKind::VonNeumann, 2).unwrap();
        assert_eq!(engine.kernel().max_neighbors(), 12);
    }

    #[test]
    fn test_fill_random_is_deterministic() {
        let mut a = life(16, 16, true);
        let mut b = life(16, 16, true);
        a.fill_random(42, &[(0, 3), (1, 1)]);
        b.fill_random(42, &[(0, 3), (1, 1)]);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.state_counts().values().sum::<usize>(), 256);
    }

    #[test]
    fn test_fill_random_restarts_generation() {
        let mut engine = life(16, 16, true);
        engine.step();
        engine.step();
        assert!(engine.fill_random(7, &[(0, 1), (1, 1)]));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.can_undo());

        let before = engine.grid().clone();
        engine.step();
        assert_eq!(engine.undo(), Ok(0));
        assert_eq!(engine.grid(), &before);

        assert!(!engine.fill_random(7, &[(0, 0), (1, 0)]));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_change_rules_resets_undeclared_cells() {
        let mut engine = NeighborhoodEngine::new(NeighborhoodConfig::default(), three_state_rules()).unwrap();
        engine.set_cell(1, 1, 2);
        engine.set_cell(1, 2, 1);
        engine.set_cell(3, 3, 5);

        let life = RuleSet::game_of_life();
        let coerced = engine
            .change_rules(life.rules().to_vec(), life.state_colors().clone())
            .unwrap();
        assert_eq!(coerced, 2);
        assert_eq!(engine.get_cell(1, 1), 0);
        assert_eq!(engine.get_cell(3, 3), 0);
        assert_eq!(engine.get_cell(1, 2), 1);

        assert!(engine.change_rules(Vec::new(), StateColors::new()).is_err());
        assert_eq!(engine.get_cell(1, 2), 1);

        engine.set_cell(0, 0, 4);
        assert_eq!(engine.set_ruleset(RuleSet::game_of_life()), 1);
        assert_eq!(engine.get_cell(0, 0), 0);
    }

    fn seeded(
        width: usize,
        height: usize,
        wrapping: bool,
        storage: StorageKind,
        ruleset: RuleSet,
        kind: NeighborhoodKind,
        radius: u32,
        cells: &[(usize, usize, State)],
    ) -> NeighborhoodEngine {
        let grid = GridConfig::new(width, height)
            .with_wrapping(wrapping)
            .with_storage(storage);
        let config = NeighborhoodConfig::new(grid).with_neighborhood(kind, radius);
        let mut engine = NeighborhoodEngine::new(config, ruleset).unwrap();
        for &(row, col, state) in cells {
            engine.set_cell((row % height) as isize, (col % width) as isize, state);
        }
        engine
    }

    proptest! {
        #[test]
        fn test_bounding_box_matches_full(
            width in 3..24usize,
            height in 3..24usize,
            wrapping: bool,
            von_neumann: bool,
            radius in 1..3u32,
            three_states: bool,
            cells in prop::collection::vec((0..24usize, 0..24usize, 1..3u8), 0..12),
        ) {
            let ruleset = if three_states { three_state_rules() } else { RuleSet::game_of_life() };
            let kind = if von_neumann { NeighborhoodKind::VonNeumann } else { NeighborhoodKind::Moore };
            let mut full = seeded(width, height, wrapping, StorageKind::Dense, ruleset, kind, radius, &cells);
            let mut bbox = full.clone();
            for _ in 0..3 {
                full.evolve_full();
                bbox.evolve_bounding_box();
                prop_assert_eq!(full.grid(), bbox.grid());
            }
        }

        #[test]
        fn test_sparse_matches_dense(
            wrapping: bool,
            cells in prop::collection::vec((0..16usize, 0..16usize, 1..3u8), 0..40),
        ) {
            let mut dense = seeded(16, 16, wrapping, StorageKind::Dense, three_state_rules(), NeighborhoodKind::Moore, 1, &cells);
            let mut sparse = seeded(16, 16, wrapping, StorageKind::Sparse, three_state_rules(), NeighborhoodKind::Moore, 1, &cells);
            for _ in 0..3 {
                dense.step();
                sparse.step();
                prop_assert_eq!(dense.grid().to_dense(), sparse.grid().to_dense());
            }
        }
    }
}
