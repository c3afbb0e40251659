//! Neighborhood shapes and the offset kernels derived from them.

use crate::error::AutomataError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D neighborhood pattern for counting neighbor states.
pub trait Neighborhood2D: Clone {
    /// Returns the relative offsets of neighboring cells.
    ///
    /// Each offset is `(dx, dy)` relative to the center cell.
    /// The center cell `(0, 0)` is never included.
    fn offsets(&self) -> &[(i32, i32)];

    /// Returns the maximum number of neighbors a cell can have.
    fn max_neighbors(&self) -> usize {
        self.offsets().len()
    }
}

/// Shape of a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NeighborhoodKind {
    /// Every cell within Chebyshev distance `r`.
    ///
    /// ```text
    /// ┌───┬───┬───┐
    /// │ X │ X │ X │
    /// ├───┼───┼───┤
    /// │ X │ · │ X │
    /// ├───┼───┼───┤
    /// │ X │ X │ X │
    /// └───┴───┴───┘
    /// ```
    #[default]
    Moore,
    /// Every cell within Manhattan distance `r`.
    ///
    /// ```text
    /// ┌───┬───┬───┐
    /// │   │ X │   │
    /// ├───┼───┼───┤
    /// │ X │ · │ X │
    /// ├───┼───┼───┤
    /// │   │ X │   │
    /// └───┴───┴───┘
    /// ```
    VonNeumann,
}

/// Offset kernel for a neighborhood shape and radius.
///
/// Radius 1 Moore has 8 neighbors, radius `r` Moore has `(2r+1)² - 1`.
/// Radius `r` von Neumann has `2r(r+1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborKernel {
    kind: NeighborhoodKind,
    radius: u32,
    offsets: Vec<(i32, i32)>,
}

impl NeighborKernel {
    /// Creates a kernel. The radius must be at least 1.
    pub fn new(kind: NeighborhoodKind, radius: u32) -> Result<Self, AutomataError> {
        if radius == 0 || radius > i32::MAX as u32 / 4 {
            return Err(AutomataError::InvalidRadius(radius));
        }

        Ok(Self {
            kind,
            radius,
            offsets: build_offsets(kind, radius as i32),
        })
    }

    /// The standard 8-neighbor Moore kernel.
    pub fn moore() -> Self {
        Self {
            kind: NeighborhoodKind::Moore,
            radius: 1,
            offsets: build_offsets(NeighborhoodKind::Moore, 1),
        }
    }

    /// Returns the neighborhood shape.
    pub fn kind(&self) -> NeighborhoodKind {
        self.kind
    }

    /// Returns the radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }
}

fn build_offsets(kind: NeighborhoodKind, r: i32) -> Vec<(i32, i32)> {
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx == 0 && dy == 0 {
                continue;
            }
            let inside = match kind {
                NeighborhoodKind::Moore => true,
                NeighborhoodKind::VonNeumann => dx.abs() + dy.abs() <= r,
            };
            if inside {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

impl Default for NeighborKernel {
    fn default() -> Self {
        Self::moore()
    }
}

impl Neighborhood2D for NeighborKernel {
    fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }
}
