//! Session configuration for each engine.
//!
//! Every config has a `Default` and `with_*` builders. With the `serde`
//! feature they deserialize from partial documents, missing fields taking
//! their defaults.

use crate::error::AutomataError;
use crate::grid::GridConfig;
use crate::kernel::{NeighborKernel, NeighborhoodKind};
use tessel_history::{DEFAULT_HISTORY_LIMIT, HistoryConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default pointer population limit.
pub const MAX_POINTERS: usize = 1000;

/// Default fraction of the grid below which the bounding-box path runs.
pub const DEFAULT_BBOX_THRESHOLD: f64 = 0.2;

/// Default number of rows kept by the elementary engine.
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// Configuration for a neighborhood automaton.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeighborhoodConfig {
    /// Grid shape.
    pub grid: GridConfig,
    /// Neighborhood shape.
    pub neighborhood: NeighborhoodKind,
    /// Neighborhood radius (at least 1).
    pub radius: u32,
    /// Snapshots kept for undo. 0 = unlimited.
    pub history_limit: usize,
    /// Active-area fraction below which [`step`] uses the bounding-box path.
    ///
    /// [`step`]: crate::NeighborhoodEngine::step
    pub bbox_threshold: f64,
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            neighborhood: NeighborhoodKind::Moore,
            radius: 1,
            history_limit: DEFAULT_HISTORY_LIMIT,
            bbox_threshold: DEFAULT_BBOX_THRESHOLD,
        }
    }
}

impl NeighborhoodConfig {
    /// Creates a default configuration with the given grid.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Sets the neighborhood shape and radius.
    pub fn with_neighborhood(mut self, kind: NeighborhoodKind, radius: u32) -> Self {
        self.neighborhood = kind;
        self.radius = radius;
        self
    }

    /// Sets the history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Sets the bounding-box threshold.
    pub fn with_bbox_threshold(mut self, threshold: f64) -> Self {
        self.bbox_threshold = threshold;
        self
    }

    /// Builds the neighbor kernel.
    pub fn kernel(&self) -> Result<NeighborKernel, AutomataError> {
        NeighborKernel::new(self.neighborhood, self.radius)
    }

    /// Returns the history configuration.
    pub fn history(&self) -> HistoryConfig {
        HistoryConfig::with_limit(self.history_limit)
    }
}

/// Configuration for a pointer automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PointerConfig {
    /// Grid shape.
    pub grid: GridConfig,
    /// Snapshots kept for undo. 0 = unlimited.
    pub history_limit: usize,
    /// Pointer population limit.
    pub max_pointers: usize,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_pointers: MAX_POINTERS,
        }
    }
}

impl PointerConfig {
    /// Creates a default configuration with the given grid.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Sets the history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Sets the pointer population limit.
    pub fn with_max_pointers(mut self, max: usize) -> Self {
        self.max_pointers = max;
        self
    }

    /// Returns the history configuration.
    pub fn history(&self) -> HistoryConfig {
        HistoryConfig::with_limit(self.history_limit)
    }
}

/// Configuration for an elementary (1D) automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearConfig {
    /// Cells per row.
    pub width: usize,
    /// Wolfram rule number.
    pub rule: u8,
    /// Rows kept before the oldest is dropped.
    pub max_rows: usize,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            width: 401,
            rule: 90,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl LinearConfig {
    /// Creates a default configuration with the given width and rule.
    pub fn new(width: usize, rule: u8) -> Self {
        Self {
            width,
            rule,
            ..Self::default()
        }
    }

    /// Sets the row limit.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}
