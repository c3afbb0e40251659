//! Elementary (1D) cellular automata.
//!
//! Wolfram's rule numbering: bit `p` of the rule is the next state of a cell
//! whose `(left, center, right)` neighborhood reads `p` in binary. Rows are
//! kept as history, newest last, and never change once produced except
//! through [`LinearEngine::toggle_cell`] on the newest row.

use crate::config::LinearConfig;
use crate::error::AutomataError;
use log::{debug, info};
use std::collections::VecDeque;

/// Eight-entry lookup table indexed by `left << 2 | center << 1 | right`.
pub type RuleTable = [bool; 8];

/// Builds the lookup table for a rule number.
pub fn rule_table(rule: u8) -> RuleTable {
    std::array::from_fn(|pattern| (rule >> pattern) & 1 == 1)
}

/// Engine for elementary automata.
///
/// # Example
///
/// ```
/// use tessel_automata::{LinearConfig, LinearEngine};
///
/// let mut rule90 = LinearEngine::new(LinearConfig::new(7, 90)).unwrap();
/// rule90.seed_center();
/// rule90.step();
/// assert_eq!(rule90.latest(), &[0, 0, 1, 0, 1, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearEngine {
    width: usize,
    rule: u8,
    table: RuleTable,
    rows: VecDeque<Vec<u8>>,
    max_rows: usize,
    generation: u64,
    revision: u64,
}

impl LinearEngine {
    /// Creates an engine holding a single all-zero row.
    pub fn new(config: LinearConfig) -> Result<Self, AutomataError> {
        if config.width == 0 {
            return Err(AutomataError::InvalidDimensions {
                width: config.width,
                height: 1,
            });
        }
        let mut engine = Self {
            width: config.width,
            rule: config.rule,
            table: rule_table(config.rule),
            rows: VecDeque::new(),
            max_rows: config.max_rows.max(1),
            generation: 0,
            revision: 0,
        };
        engine.reset();
        Ok(engine)
    }

    /// Returns the row width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the rule number.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Returns the lookup table.
    pub fn lookup(&self) -> &RuleTable {
        &self.table
    }

    /// Changes the rule. Existing rows are kept.
    pub fn set_rule(&mut self, rule: u8) {
        self.rule = rule;
        self.table = rule_table(rule);
        info!("elementary rule set to {rule}");
    }

    /// Returns the retained rows, oldest first.
    pub fn rows(&self) -> &VecDeque<Vec<u8>> {
        &self.rows
    }

    /// Returns the newest row.
    pub fn latest(&self) -> &[u8] {
        self.rows.back().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the generation counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the render revision, bumped whenever past output is edited.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the history with one all-zero row at generation 0.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push_back(vec![0; self.width]);
        self.generation = 0;
        self.revision += 1;
        info!("elementary engine reset (width {}, rule {})", self.width, self.rule);
    }

    /// Sets the center cell of the newest row.
    pub fn seed_center(&mut self) {
        let center = self.width / 2;
        if let Some(row) = self.rows.back_mut() {
            row[center] = 1;
            self.revision += 1;
        }
    }

    /// Flips a cell of the newest row. Out-of-range columns are ignored.
    pub fn toggle_cell(&mut self, col: usize) {
        if let Some(cell) = self.rows.back_mut().and_then(|row| row.get_mut(col)) {
            *cell ^= 1;
            self.revision += 1;
        }
    }

    /// Computes and appends the next row. Returns the new generation.
    pub fn step(&mut self) -> u64 {
        let current = self.latest();
        let next: Vec<u8> = (0..self.width)
            .map(|col| {
                let left = if col > 0 { current[col - 1] } else { 0 };
                let right = current.get(col + 1).copied().unwrap_or(0);
                let pattern = (left << 2 | current[col] << 1 | right) as usize;
                u8::from(self.table[pattern])
            })
            .collect();

        self.rows.push_back(next);
        if self.rows.len() > self.max_rows {
            self.rows.pop_front();
            debug!("elementary history full, dropped oldest row");
        }
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(row: &[u8]) -> Vec<usize> {
        row.iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(|(col, _)| col)
            .collect()
    }

    #[test]
    fn test_rule_table() {
        // 90 = 0b01011010: patterns 1, 3, 4, 6 produce 1
        assert_eq!(
            rule_table(90),
            [false, true, false, true, true, false, true, false]
        );
        assert_eq!(rule_table(0), [false; 8]);
        assert_eq!(rule_table(255), [true; 8]);
    }

    #[test]
    fn test_rule_90_sierpinski() {
        let mut engine = LinearEngine::new(LinearConfig::new(15, 90)).unwrap();
        engine.seed_center();
        assert_eq!(live(engine.latest()), vec![7]);

        engine.step();
        assert_eq!(live(engine.latest()), vec![6, 8]);
        engine.step();
        assert_eq!(live(engine.latest()), vec![5, 9]);
        engine.step();
        assert_eq!(live(engine.latest()), vec![4, 6, 8, 10]);
        assert_eq!(engine.generation(), 3);
        assert_eq!(engine.rows().len(), 4);
    }

    #[test]
    fn test_rule_0_and_255() {
        let mut zero = LinearEngine::new(LinearConfig::new(9, 0)).unwrap();
        zero.seed_center();
        zero.step();
        assert!(zero.latest().iter().all(|&cell| cell == 0));

        let mut full = LinearEngine::new(LinearConfig::new(9, 255)).unwrap();
        full.step();
        assert!(full.latest().iter().all(|&cell| cell == 1));
    }

    #[test]
    fn test_edges_are_zero_padded() {
        // Rule 2 copies the right neighbor into the cell: 001 -> 1
        let mut engine = LinearEngine::new(LinearConfig::new(5, 2)).unwrap();
        engine.toggle_cell(0);
        engine.step();
        assert_eq!(engine.latest(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_history_cap() {
        let config = LinearConfig::new(5, 30).with_max_rows(3);
        let mut engine = LinearEngine::new(config).unwrap();
        for _ in 0..10 {
            engine.step();
        }
        assert_eq!(engine.rows().len(), 3);
        assert_eq!(engine.generation(), 10);
    }

    #[test]
    fn test_toggle_bumps_revision() {
        let mut engine = LinearEngine::new(LinearConfig::new(5, 90)).unwrap();
        let revision = engine.revision();
        engine.toggle_cell(2);
        assert_eq!(engine.latest(), &[0, 0, 1, 0, 0]);
        assert_eq!(engine.revision(), revision + 1);

        engine.toggle_cell(2);
        assert_eq!(engine.latest(), &[0; 5]);
        engine.toggle_cell(99);
        assert_eq!(engine.revision(), revision + 2);
    }

    #[test]
    fn test_step_leaves_past_rows() {
        let mut engine = LinearEngine::new(LinearConfig::new(7, 90)).unwrap();
        engine.seed_center();
        engine.step();
        engine.step();
        assert_eq!(engine.rows()[0], vec![0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(engine.rows()[1], vec![0, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_reset_and_set_rule() {
        let mut engine = LinearEngine::new(LinearConfig::new(7, 90)).unwrap();
        engine.seed_center();
        engine.step();
        engine.set_rule(255);
        engine.reset();
        assert_eq!(engine.rows().len(), 1);
        assert_eq!(engine.generation(), 0);
        engine.step();
        assert_eq!(engine.latest(), &[1; 7]);
        assert_eq!(engine.rule(), 255);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(LinearEngine::new(LinearConfig::new(0, 90)).is_err());
    }
}
