//! Discrete-state automata engines.
//!
//! Three families share one grid model:
//!
//! - [`NeighborhoodEngine`]: Game-of-Life-style automata driven by ordered
//!   rules over neighbor counts ([`RuleSet`]), with Moore or von Neumann
//!   neighborhoods of any radius ([`NeighborKernel`]).
//! - [`PointerEngine`]: turmites, mobile [`Pointer`]s that read and write
//!   cells, turn, jump and clone.
//! - [`LinearEngine`]: elementary 1D automata numbered 0 to 255.
//!
//! The two grid engines implement [`GridAutomaton`] and keep an undo/redo
//! history of [`Snapshot`]s.
//!
//! # Example
//!
//! ```
//! use tessel_automata::{GridAutomaton, GridConfig, NeighborhoodConfig, NeighborhoodEngine, RuleSet};
//!
//! let config = NeighborhoodConfig::new(GridConfig::new(16, 16));
//! let mut life = NeighborhoodEngine::new(config, RuleSet::game_of_life()).unwrap();
//!
//! // Glider
//! for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
//!     life.set_cell(row, col, 1);
//! }
//! for _ in 0..4 {
//!     life.step();
//! }
//!
//! assert_eq!(life.grid().population(), 5);
//! assert_eq!(life.get_cell(3, 3), 1);
//! life.undo().unwrap();
//! assert_eq!(life.generation(), 3);
//! ```

mod config;
mod error;
mod grid;
mod kernel;
mod linear;
mod neighborhood;
mod pointer;
mod rule;
mod snapshot;
mod state;

pub use config::{
    DEFAULT_BBOX_THRESHOLD, DEFAULT_MAX_ROWS, LinearConfig, MAX_POINTERS, NeighborhoodConfig,
    PointerConfig,
};
pub use error::AutomataError;
pub use grid::{Grid, GridConfig, Region, StorageKind};
pub use kernel::{NeighborKernel, Neighborhood2D, NeighborhoodKind};
pub use linear::{LinearEngine, RuleTable, rule_table};
pub use neighborhood::NeighborhoodEngine;
pub use pointer::{
    CapacityEvent, Heading, Pointer, PointerAction, PointerEngine, PointerRule, PointerStep,
};
pub use rule::{Condition, Operator, ParseOperatorError, Rule, RuleSet};
pub use snapshot::{GridAutomaton, Snapshot};
pub use state::{BACKGROUND, ParseColorError, Rgb, State, StateColors, default_state_colors};

/// Re-exported history types used by the engines.
pub use tessel_history::{HistoryBuffer, HistoryConfig, HistoryError};
