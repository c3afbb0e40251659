//! Bounded undo/redo history for automata sessions.
//!
//! A [`HistoryBuffer`] keeps the last `K` snapshots of a simulation and a
//! cursor into them. Saving a new snapshot after an undo discards the redo
//! branch; the history is linear, never a tree.
//!
//! # Example
//!
//! ```
//! use tessel_history::{HistoryBuffer, HistoryConfig};
//!
//! let mut history = HistoryBuffer::new(HistoryConfig::with_limit(5));
//! history.save_state(1);
//! history.save_state(2);
//!
//! assert_eq!(history.undo(), Ok(1));
//! assert_eq!(history.redo(), Ok(2));
//! ```

mod buffer;
mod error;

pub use buffer::{DEFAULT_HISTORY_LIMIT, HistoryBuffer, HistoryConfig};
pub use error::HistoryError;
