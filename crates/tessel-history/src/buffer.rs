//! Snapshot ring with a linear undo/redo cursor.
//!
//! Stores full copies of the simulation at each history point. Simple and
//! reliable, trading storage space for simplicity.

use crate::error::HistoryError;
use log::debug;

/// Number of snapshots retained when no explicit limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Configuration for a history buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to keep. 0 = unlimited.
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_snapshots: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl HistoryConfig {
    /// Creates config with unlimited snapshots.
    pub fn unlimited() -> Self {
        Self { max_snapshots: 0 }
    }

    /// Creates config with a specific limit.
    pub fn with_limit(max: usize) -> Self {
        Self { max_snapshots: max }
    }
}

/// Fixed-capacity history of snapshots.
///
/// The cursor always points at the snapshot describing the live state.
/// [`undo`](Self::undo) and [`redo`](Self::redo) hand out clones, so a
/// restored snapshot can be mutated freely without touching history.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    /// All snapshots (oldest first).
    snapshots: Vec<T>,
    /// Current position in snapshot list (1-indexed, 0 = before first snapshot).
    current: usize,
    config: HistoryConfig,
}

impl<T: Clone> HistoryBuffer<T> {
    /// Creates a new empty history.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            snapshots: Vec::new(),
            current: 0,
            config,
        }
    }

    /// Records a snapshot and moves the cursor onto it.
    ///
    /// This truncates any redo history (snapshots after the cursor), then
    /// evicts the oldest snapshots beyond the configured limit.
    pub fn save_state(&mut self, snapshot: T) {
        self.snapshots.truncate(self.current);

        self.snapshots.push(snapshot);
        self.current = self.snapshots.len();

        if self.config.max_snapshots > 0 && self.snapshots.len() > self.config.max_snapshots {
            let remove_count = self.snapshots.len() - self.config.max_snapshots;
            self.snapshots.drain(0..remove_count);
            self.current = self.current.saturating_sub(remove_count);
            debug!("history evicted {remove_count} snapshot(s)");
        }
    }

    /// Steps the cursor back and returns a copy of that snapshot.
    pub fn undo(&mut self) -> Result<T, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NothingToUndo);
        }

        self.current -= 1;
        Ok(self.snapshots[self.current - 1].clone())
    }

    /// Steps the cursor forward and returns a copy of that snapshot.
    pub fn redo(&mut self) -> Result<T, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }

        self.current += 1;
        Ok(self.snapshots[self.current - 1].clone())
    }

    /// Returns true if undo is possible.
    pub fn can_undo(&self) -> bool {
        self.current > 1
    }

    /// Returns true if redo is possible.
    pub fn can_redo(&self) -> bool {
        self.current < self.snapshots.len()
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.current.checked_sub(1).map(|i| &self.snapshots[i])
    }

    /// Returns the number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the current position (1-indexed).
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns how many undo steps are available.
    pub fn undo_count(&self) -> usize {
        self.current.saturating_sub(1)
    }

    /// Returns how many redo steps are available.
    pub fn redo_count(&self) -> usize {
        self.snapshots.len().saturating_sub(self.current)
    }

    /// Returns the configured limit.
    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Clears all history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current = 0;
    }
}

impl<T: Clone> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
