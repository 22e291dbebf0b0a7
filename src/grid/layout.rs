//! Cell-to-world transform.

use serde::{Deserialize, Serialize};

use crate::core::{CellCoord, GridError, Vec2};

/// Uniform rectangular grid placed in world space.
///
/// Cell `(x, y)` has its lower corner at
/// `origin + (x * cell_size.x, y * cell_size.y)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    origin: Vec2,
    cell_size: Vec2,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::unit()
    }
}

impl GridLayout {
    /// Create a layout, rejecting degenerate cell sizes.
    pub fn new(origin: Vec2, cell_size: Vec2) -> Result<Self, GridError> {
        if !origin.is_finite() {
            return Err(GridError::NonFiniteOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        if !cell_size.is_finite() || cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            return Err(GridError::InvalidCellSize {
                x: cell_size.x,
                y: cell_size.y,
            });
        }
        Ok(Self { origin, cell_size })
    }

    /// Unit cells with the grid anchored at the world origin.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell_size: Vec2::ONE,
        }
    }

    /// World position of cell `(0, 0)`.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// World-space size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// World position of a cell's lower corner.
    #[must_use]
    pub fn cell_to_world(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            self.origin.x + cell.x as f32 * self.cell_size.x,
            self.origin.y + cell.y as f32 * self.cell_size.y,
        )
    }
}
