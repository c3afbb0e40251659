//! Engine error types.

use thiserror::Error;

/// Errors reported by the automata engines.
///
/// None of these are fatal: an operation that fails leaves the engine in
/// the state it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomataError {
    /// A rule change was requested with an empty rule list.
    #[error("rule set contains no rules")]
    NoRules,

    /// Grid dimensions must both be non-zero.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Neighborhood radius must be at least 1.
    #[error("invalid neighborhood radius {0}")]
    InvalidRadius(u32),

    /// A grid being restored does not match the session's grid.
    #[error("grid is {found_width}x{found_height}, expected {width}x{height}")]
    DimensionMismatch {
        /// Session width.
        width: usize,
        /// Session height.
        height: usize,
        /// Width of the rejected grid.
        found_width: usize,
        /// Height of the rejected grid.
        found_height: usize,
    },

    /// The pointer population is already at its limit.
    #[error("pointer limit reached ({0})")]
    PointerCapacity(usize),
}
