//! Pointer automata (turmites).
//!
//! Pointers are mobile agents with a position and a heading. Each tick every
//! visible pointer reads its cell, applies every rule written for that state
//! (turning, facing, jumping, cloning and rewriting the cell), then moves one
//! cell forward.

use crate::config::PointerConfig;
use crate::error::AutomataError;
use crate::grid::Grid;
use crate::snapshot::{GridAutomaton, Snapshot, conform_grid};
use crate::state::{BACKGROUND, Rgb, State, StateColors, default_state_colors};
use log::{info, warn};
use tessel_history::{HistoryBuffer, HistoryError};

// ============================================================================
// Heading
// ============================================================================

/// A compass heading in degrees, clockwise from North.
///
/// Always normalized to `0..360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Heading(u16);

/// `(heading, (row delta, col delta))` for the eight tabulated headings.
const DIRECTIONS: [(u16, (isize, isize)); 8] = [
    (0, (-1, 0)),
    (45, (-1, 1)),
    (90, (0, 1)),
    (135, (1, 1)),
    (180, (1, 0)),
    (225, (1, -1)),
    (270, (0, -1)),
    (315, (-1, -1)),
];

impl Heading {
    /// North (up, decreasing row).
    pub const NORTH: Heading = Heading(0);
    /// East (right, increasing column).
    pub const EAST: Heading = Heading(90);
    /// South.
    pub const SOUTH: Heading = Heading(180);
    /// West.
    pub const WEST: Heading = Heading(270);

    /// Creates a heading, reducing it modulo 360.
    pub fn new(degrees: i32) -> Self {
        Heading(degrees.rem_euclid(360) as u16)
    }

    /// Returns the heading in degrees.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Returns the heading turned clockwise by `angle` degrees.
    pub fn rotated(self, angle: i32) -> Self {
        Self::new(i32::from(self.0) + angle)
    }

    /// Returns the `(row, col)` step for one forward move.
    ///
    /// Headings between table entries use the nearest entry by circular
    /// distance; ties go to the smaller heading.
    pub fn delta(self) -> (isize, isize) {
        let mut best = DIRECTIONS[0];
        let mut best_distance = u16::MAX;
        for entry in DIRECTIONS {
            let diff = self.0.abs_diff(entry.0);
            let distance = diff.min(360 - diff);
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }
        best.1
    }
}

// ============================================================================
// Pointers and rules
// ============================================================================

/// A mobile agent on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pointer {
    /// Row of the current cell.
    pub row: usize,
    /// Column of the current cell.
    pub col: usize,
    /// Direction of the forward move.
    pub heading: Heading,
    /// Hidden pointers neither act nor move.
    pub visible: bool,
}

impl Pointer {
    /// Creates a visible pointer.
    pub fn new(row: usize, col: usize, heading: Heading) -> Self {
        Self {
            row,
            col,
            heading,
            visible: true,
        }
    }
}

/// What a pointer rule does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Turn clockwise by `angle` degrees (negative turns counter-clockwise).
    Rotation {
        /// Turn in degrees.
        angle: i32,
    },
    /// Face an absolute heading.
    Face {
        /// New heading.
        heading: Heading,
    },
    /// Jump by `(dx, dy)`, or to `(row = dy, col = dx)` when not relative.
    Movement {
        /// Column offset or target column.
        dx: i32,
        /// Row offset or target row.
        dy: i32,
        /// Offsets are relative to the pointer.
        relative: bool,
    },
    /// Spawn a pointer on the current cell, before the owner moves. The
    /// clone inherits the heading. The offsets are kept for rule files and
    /// do not affect placement.
    Clone {
        /// Column offset or target column.
        dx: i32,
        /// Row offset or target row.
        dy: i32,
        /// Offsets are relative to the pointer.
        relative: bool,
    },
}

/// A rule applied by a pointer standing on `current_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerRule {
    /// Cell state the rule applies to.
    pub current_state: State,
    /// State written to the pointer's cell, if any.
    pub next_state: Option<State>,
    /// Effect on the pointer.
    pub action: PointerAction,
}

impl PointerRule {
    /// Creates a rule.
    pub fn new(current_state: State, next_state: Option<State>, action: PointerAction) -> Self {
        Self {
            current_state,
            next_state,
            action,
        }
    }
}

/// Reported when a clone was refused because the population is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEvent {
    /// The population limit.
    pub max_pointers: usize,
    /// Row of the pointer whose clone was refused.
    pub row: usize,
    /// Column of the pointer whose clone was refused.
    pub col: usize,
}

/// Outcome of one pointer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerStep {
    /// Generation after the tick.
    pub generation: u64,
    /// First refused clone of the tick, if any.
    pub capacity: Option<CapacityEvent>,
}

// ============================================================================
// Engine
// ============================================================================

/// Engine for pointer automata.
#[derive(Debug, Clone)]
pub struct PointerEngine {
    grid: Grid,
    pointers: Vec<Pointer>,
    rules: Vec<PointerRule>,
    colors: StateColors,
    generation: u64,
    max_pointers: usize,
    capacity_reached: bool,
    history: HistoryBuffer<Snapshot>,
}

impl PointerEngine {
    /// Creates an engine with one pointer at the grid center.
    ///
    /// Fails if `max_pointers` is 0, since the center pointer would not fit.
    pub fn new(config: PointerConfig, rules: Vec<PointerRule>, colors: StateColors) -> Result<Self, AutomataError> {
        if config.max_pointers == 0 {
            return Err(AutomataError::PointerCapacity(0));
        }
        let mut colors = colors;
        colors.entry(BACKGROUND).or_insert(Rgb::WHITE);
        let mut engine = Self {
            grid: config.grid.build()?,
            pointers: Vec::new(),
            rules,
            colors,
            generation: 0,
            max_pointers: config.max_pointers,
            capacity_reached: false,
            history: HistoryBuffer::new(config.history()),
        };
        engine.reset();
        Ok(engine)
    }

    /// Creates an engine with no rules and the default colors.
    pub fn with_config(config: PointerConfig) -> Result<Self, AutomataError> {
        Self::new(config, Vec::new(), default_state_colors())
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[PointerRule] {
        &self.rules
    }

    /// Returns the pointers in population order.
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// Returns the number of pointers, hidden ones included.
    pub fn population(&self) -> usize {
        self.pointers.len()
    }

    /// Returns the population limit.
    pub fn max_pointers(&self) -> usize {
        self.max_pointers
    }

    /// Returns true if the most recent tick refused a clone.
    pub fn capacity_reached(&self) -> bool {
        self.capacity_reached
    }

    /// Returns the undo history.
    pub fn history(&self) -> &HistoryBuffer<Snapshot> {
        &self.history
    }

    /// Replaces the rules and colors.
    ///
    /// An empty rule list is rejected. A `next_state` that is not declared in
    /// `colors` (or 0) is replaced by 0.
    pub fn change_rules(&mut self, rules: Vec<PointerRule>, colors: StateColors) -> Result<(), AutomataError> {
        if rules.is_empty() {
            return Err(AutomataError::NoRules);
        }

        let mut colors = colors;
        colors.entry(BACKGROUND).or_insert(Rgb::WHITE);
        self.rules = rules
            .into_iter()
            .map(|mut rule| {
                if let Some(next) = rule.next_state.filter(|next| !colors.contains_key(next)) {
                    warn!(
                        "pointer rule for state {} writes undeclared state {next}, using 0",
                        rule.current_state
                    );
                    rule.next_state = Some(BACKGROUND);
                }
                rule
            })
            .collect();
        self.colors = colors;

        info!(
            "pointer rules changed: {} rules, {} states",
            self.rules.len(),
            self.colors.len()
        );
        Ok(())
    }

    /// Adds a pointer, failing if the population is full.
    pub fn add_pointer(&mut self, pointer: Pointer) -> Result<(), AutomataError> {
        if self.pointers.len() >= self.max_pointers {
            return Err(AutomataError::PointerCapacity(self.max_pointers));
        }
        self.pointers.push(pointer);
        Ok(())
    }

    /// Interactive placement on a cell.
    ///
    /// An empty cell gets a new pointer facing North. A visible pointer turns
    /// 45° clockwise and hides once it faces North again. A hidden pointer
    /// reappears facing North. Cells outside a clamped grid are ignored.
    pub fn place_pointer(&mut self, row: isize, col: isize) -> Result<(), AutomataError> {
        let Some((row, col)) = self.grid.resolve(row, col) else {
            return Ok(());
        };

        match self.pointers.iter_mut().find(|p| p.row == row && p.col == col) {
            Some(pointer) if pointer.visible => {
                pointer.heading = pointer.heading.rotated(45);
                if pointer.heading == Heading::NORTH {
                    pointer.visible = false;
                }
                Ok(())
            }
            Some(pointer) => {
                pointer.visible = true;
                pointer.heading = Heading::NORTH;
                Ok(())
            }
            None => self.add_pointer(Pointer::new(row, col, Heading::NORTH)),
        }
    }

    /// Runs one tick.
    ///
    /// Pointers read cell states from the grid as it was when the tick
    /// started. Pointers cloned during the tick first act on the next one.
    pub fn step_generation(&mut self) -> PointerStep {
        let before = self.grid.clone();
        let acting = self.pointers.len();
        let mut spawned: Vec<Pointer> = Vec::new();
        let mut capacity = None;

        for index in 0..acting {
            let mut pointer = self.pointers[index];
            if !pointer.visible {
                continue;
            }

            let state = before.cell(pointer.row, pointer.col);
            for rule in self.rules.iter().filter(|rule| rule.current_state == state) {
                match rule.action {
                    PointerAction::Rotation { angle } => {
                        pointer.heading = pointer.heading.rotated(angle);
                    }
                    PointerAction::Face { heading } => {
                        pointer.heading = heading;
                    }
                    PointerAction::Movement { dx, dy, relative } => {
                        let (row, col) = target(&pointer, dx, dy, relative);
                        (pointer.row, pointer.col) = self.grid.clamp_position(row, col);
                    }
                    PointerAction::Clone { .. } => {
                        if self.pointers.len() + spawned.len() < self.max_pointers {
                            spawned.push(Pointer::new(pointer.row, pointer.col, pointer.heading));
                        } else if capacity.is_none() {
                            warn!(
                                "pointer limit reached ({}), clone at ({}, {}) refused",
                                self.max_pointers, pointer.row, pointer.col
                            );
                            capacity = Some(CapacityEvent {
                                max_pointers: self.max_pointers,
                                row: pointer.row,
                                col: pointer.col,
                            });
                        }
                    }
                }
                if let Some(next) = rule.next_state {
                    self.grid.put(pointer.row, pointer.col, next);
                }
            }

            let (drow, dcol) = pointer.heading.delta();
            (pointer.row, pointer.col) = self
                .grid
                .clamp_position(pointer.row as isize + drow, pointer.col as isize + dcol);
            self.pointers[index] = pointer;
        }

        self.pointers.extend(spawned);
        self.capacity_reached = capacity.is_some();
        self.generation += 1;
        self.history.save_state(self.snapshot());

        PointerStep {
            generation: self.generation,
            capacity,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            pointers: self.pointers.clone(),
            generation: self.generation,
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) -> u64 {
        self.grid = snapshot.grid;
        self.pointers = snapshot.pointers;
        self.generation = snapshot.generation;
        self.capacity_reached = false;
        self.generation
    }
}

/// Signed target cell of a movement.
fn target(pointer: &Pointer, dx: i32, dy: i32, relative: bool) -> (isize, isize) {
    if relative {
        (pointer.row as isize + dy as isize, pointer.col as isize + dx as isize)
    } else {
        (dy as isize, dx as isize)
    }
}

impl GridAutomaton for PointerEngine {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn state_colors(&self) -> &StateColors {
        &self.colors
    }

    fn step(&mut self) -> u64 {
        self.step_generation().generation
    }

    fn reset(&mut self) {
        self.grid.clear();
        let center = Pointer::new(self.grid.height() / 2, self.grid.width() / 2, Heading::NORTH);
        self.pointers = vec![center];
        self.generation = 0;
        self.capacity_reached = false;
        self.history.clear();
        self.history.save_state(self.snapshot());
        info!(
            "pointer engine reset ({}x{}), pointer at ({}, {})",
            self.grid.width(),
            self.grid.height(),
            center.row,
            center.col
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
            let states = self.colors.len().max(1);
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

    fn engine(size: usize, wrapping: bool, rules: Vec<PointerRule>) -> PointerEngine {
        let grid = GridConfig::new(size, size).with_wrapping(wrapping);
        PointerEngine::new(PointerConfig::new(grid), rules, default_state_colors()).unwrap()
    }

    fn langtons_ant() -> Vec<PointerRule> {
        vec![
            PointerRule::new(0, Some(1), PointerAction::Rotation { angle: 90 }),
            PointerRule::new(1, Some(0), PointerAction::Rotation { angle: -90 }),
        ]
    }

    #[test]
    fn test_heading_table() {
        assert_eq!(Heading::NORTH.delta(), (-1, 0));
        assert_eq!(Heading::new(45).delta(), (-1, 1));
        assert_eq!(Heading::EAST.delta(), (0, 1));
        assert_eq!(Heading::SOUTH.delta(), (1, 0));
        assert_eq!(Heading::WEST.delta(), (0, -1));
        assert_eq!(Heading::new(315).delta(), (-1, -1));
    }

    #[test]
    fn test_heading_snaps_to_nearest() {
        assert_eq!(Heading::new(100).delta(), Heading::EAST.delta());
        assert_eq!(Heading::new(350).delta(), Heading::NORTH.delta());
        assert_eq!(Heading::new(-10), Heading::new(350));
        assert_eq!(Heading::new(200).delta(), Heading::SOUTH.delta());
    }

    #[test]
    fn test_heading_rotation() {
        assert_eq!(Heading::NORTH.rotated(-90), Heading::WEST);
        assert_eq!(Heading::WEST.rotated(180), Heading::EAST);
        assert_eq!(Heading::new(315).rotated(45), Heading::NORTH);
    }

    #[test]
    fn test_reset_places_center_pointer() {
        let engine = engine(11, true, Vec::new());
        assert_eq!(engine.pointers(), &[Pointer::new(5, 5, Heading::NORTH)]);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = PointerConfig::new(GridConfig::new(5, 5)).with_max_pointers(0);
        let err = PointerEngine::with_config(config).unwrap_err();
        assert_eq!(err, AutomataError::PointerCapacity(0));

        let config = PointerConfig::new(GridConfig::new(5, 5)).with_max_pointers(1);
        assert_eq!(PointerEngine::with_config(config).unwrap().population(), 1);
    }

    #[test]
    fn test_face_and_move_then_forward() {
        let rules = vec![
            PointerRule::new(0, None, PointerAction::Face { heading: Heading::EAST }),
            PointerRule::new(0, None, PointerAction::Movement { dx: 1, dy: 0, relative: true }),
        ];
        let mut engine = engine(11, true, rules);
        let step = engine.step_generation();

        assert_eq!(step.generation, 1);
        assert_eq!(step.capacity, None);
        let pointer = engine.pointers()[0];
        assert_eq!(pointer.heading.degrees(), 90);
        assert_eq!((pointer.row, pointer.col), (5, 7));
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_langtons_ant() {
        let mut engine = engine(11, true, langtons_ant());
        engine.step();
        assert_eq!(engine.get_cell(5, 5), 1);
        assert_eq!(engine.pointers()[0], Pointer::new(5, 6, Heading::EAST));

        engine.step();
        assert_eq!(engine.get_cell(5, 6), 1);
        assert_eq!(engine.pointers()[0], Pointer::new(6, 6, Heading::SOUTH));

        for _ in 0..2 {
            engine.step();
        }
        // Back at the start, which turns it left and clears the cell
        assert_eq!(engine.pointers()[0], Pointer::new(5, 5, Heading::NORTH));
        engine.step();
        assert_eq!(engine.get_cell(5, 5), 0);
        assert_eq!(engine.pointers()[0], Pointer::new(5, 4, Heading::WEST));
        assert_eq!(engine.grid().population(), 3);
    }

    #[test]
    fn test_absolute_movement() {
        let rules = vec![PointerRule::new(
            0,
            Some(2),
            PointerAction::Movement { dx: 3, dy: 1, relative: false },
        )];
        let mut engine = engine(11, false, rules);
        engine.step();
        // The state is written after the jump, then the pointer moves north.
        assert_eq!(engine.get_cell(1, 3), 2);
        assert_eq!((engine.pointers()[0].row, engine.pointers()[0].col), (0, 3));
    }

    #[test]
    fn test_clamped_forward_move() {
        let mut engine = engine(5, false, Vec::new());
        for _ in 0..10 {
            engine.step();
        }
        assert_eq!((engine.pointers()[0].row, engine.pointers()[0].col), (0, 2));
    }

    #[test]
    fn test_wrapping_forward_move() {
        let mut engine = engine(5, true, Vec::new());
        for _ in 0..3 {
            engine.step();
        }
        assert_eq!((engine.pointers()[0].row, engine.pointers()[0].col), (4, 2));
    }

    #[test]
    fn test_reads_tick_start_grid() {
        // The first pointer writes 1 on the cell the second pointer stands on
        // this tick; the second still sees 0.
        let rules = vec![
            PointerRule::new(0, Some(1), PointerAction::Movement { dx: 1, dy: 0, relative: true }),
            PointerRule::new(1, Some(3), PointerAction::Rotation { angle: 180 }),
        ];
        let mut engine = engine(11, true, rules);
        engine.add_pointer(Pointer::new(5, 6, Heading::SOUTH)).unwrap();
        engine.step();

        // Second pointer read 0 and wrote 1 after jumping to (5, 7).
        assert_eq!(engine.get_cell(5, 7), 1);
        assert_eq!(engine.pointers()[1], Pointer::new(6, 7, Heading::SOUTH));
        // First pointer wrote 1 at (5, 6) after its own jump.
        assert_eq!(engine.get_cell(5, 6), 1);
    }

    #[test]
    fn test_clones_act_next_tick() {
        let rules = vec![PointerRule::new(0, None, PointerAction::Clone { dx: 0, dy: 0, relative: true })];
        let mut engine = engine(11, true, rules);
        engine.step();

        assert_eq!(engine.population(), 2);
        assert_eq!(engine.pointers()[0], Pointer::new(4, 5, Heading::NORTH));
        assert_eq!(engine.pointers()[1], Pointer::new(5, 5, Heading::NORTH));
    }

    #[test]
    fn test_clone_ignores_offset() {
        let rules = vec![PointerRule::new(0, None, PointerAction::Clone { dx: 3, dy: 0, relative: true })];
        let mut relative = engine(11, true, rules);
        relative.step();
        assert_eq!(relative.pointers()[0], Pointer::new(4, 5, Heading::NORTH));
        assert_eq!(relative.pointers()[1], Pointer::new(5, 5, Heading::NORTH));

        let rules = vec![PointerRule::new(0, None, PointerAction::Clone { dx: 9, dy: 1, relative: false })];
        let mut absolute = engine(11, true, rules);
        absolute.step();
        assert_eq!(absolute.pointers()[1], Pointer::new(5, 5, Heading::NORTH));
    }

    #[test]
    fn test_clone_capacity() {
        let rules = vec![PointerRule::new(0, None, PointerAction::Clone { dx: 0, dy: 0, relative: true })];
        let grid = GridConfig::new(11, 11);
        let config = PointerConfig::new(grid).with_max_pointers(3);
        let mut engine = PointerEngine::new(config, rules, default_state_colors()).unwrap();

        assert_eq!(engine.step_generation().capacity, None);
        assert_eq!(engine.population(), 2);

        let step = engine.step_generation();
        assert_eq!(engine.population(), 3);
        assert_eq!(step.capacity.map(|event| event.max_pointers), Some(3));
        assert!(engine.capacity_reached());

        for _ in 0..5 {
            engine.step();
            assert_eq!(engine.population(), 3);
        }
        assert_eq!(
            engine.add_pointer(Pointer::new(0, 0, Heading::NORTH)),
            Err(AutomataError::PointerCapacity(3))
        );
    }

    #[test]
    fn test_hidden_pointers_do_not_act() {
        let mut engine = engine(11, true, langtons_ant());
        for _ in 0..8 {
            engine.place_pointer(5, 5).unwrap();
        }
        assert!(!engine.pointers()[0].visible);
        engine.step();
        assert_eq!(engine.grid().population(), 0);
        assert_eq!(engine.pointers()[0], Pointer { visible: false, ..Pointer::new(5, 5, Heading::NORTH) });
    }

    #[test]
    fn test_place_pointer_cycle() {
        let mut engine = engine(11, true, Vec::new());
        engine.place_pointer(2, 3).unwrap();
        assert_eq!(engine.population(), 2);
        assert_eq!(engine.pointers()[1], Pointer::new(2, 3, Heading::NORTH));

        engine.place_pointer(2, 3).unwrap();
        assert_eq!(engine.pointers()[1].heading.degrees(), 45);
        for _ in 0..7 {
            engine.place_pointer(2, 3).unwrap();
        }
        assert!(!engine.pointers()[1].visible);

        engine.place_pointer(2, 3).unwrap();
        assert_eq!(engine.pointers()[1], Pointer::new(2, 3, Heading::NORTH));
        assert_eq!(engine.population(), 2);
    }

    #[test]
    fn test_undo_restores_pointers() {
        let mut engine = engine(11, true, langtons_ant());
        engine.step();
        let after_one = (engine.grid().clone(), engine.pointers().to_vec());
        engine.step();

        assert_eq!(engine.undo(), Ok(1));
        assert_eq!((engine.grid().clone(), engine.pointers().to_vec()), after_one);
        assert_eq!(engine.redo(), Ok(2));
        assert_eq!(engine.pointers()[0], Pointer::new(6, 6, Heading::SOUTH));
    }

    #[test]
    fn test_change_rules() {
        let mut engine = engine(11, true, Vec::new());
        assert_eq!(engine.change_rules(Vec::new(), StateColors::new()), Err(AutomataError::NoRules));

        let colors = StateColors::from([(1, Rgb::GRAY)]);
        let rules = vec![PointerRule::new(0, Some(9), PointerAction::Rotation { angle: 90 })];
        engine.change_rules(rules, colors).unwrap();
        assert_eq!(engine.rules()[0].next_state, Some(0));
        assert_eq!(engine.state_colors().len(), 2);
    }

    #[test]
    fn test_sparse_matches_dense() {
        let mut dense = engine(15, true, langtons_ant());
        let grid = GridConfig::new(15, 15).with_storage(StorageKind::Sparse);
        let mut sparse = PointerEngine::new(PointerConfig::new(grid), langtons_ant(), default_state_colors()).unwrap();
        for _ in 0..200 {
            dense.step();
            sparse.step();
        }
        assert_eq!(dense.grid(), sparse.grid());
        assert_eq!(dense.pointers(), sparse.pointers());
    }
}
