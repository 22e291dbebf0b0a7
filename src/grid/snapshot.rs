//! Dense tile block.

use crate::core::{CellBounds, CellCoord, GridError, Vec2};

use super::layout::GridLayout;
use super::{GridProvider, TileId};

/// Immutable view of a grid: its bounds plus one entry per cell, row-major
/// (`index = x + y * width`, local coordinates).
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot {
    layout: GridLayout,
    bounds: CellBounds,
    tiles: Vec<Option<TileId>>,
}

impl GridSnapshot {
    /// Build a snapshot from a dense block.
    ///
    /// Fails if `tiles.len()` is not `bounds.width * bounds.height`.
    pub fn new(
        layout: GridLayout,
        bounds: CellBounds,
        tiles: Vec<Option<TileId>>,
    ) -> Result<Self, GridError> {
        let expected = bounds.area();
        let actual = tiles.len();
        if expected != actual {
            return Err(GridError::TileCountMismatch { expected, actual });
        }
        Ok(Self {
            layout,
            bounds,
            tiles,
        })
    }

    /// Build a snapshot from painted absolute cells.
    ///
    /// Cells outside `bounds` are ignored.
    pub fn from_painted(
        layout: GridLayout,
        bounds: CellBounds,
        painted: impl IntoIterator<Item = (CellCoord, TileId)>,
    ) -> Self {
        let mut tiles = vec![None; bounds.area()];
        for (cell, tile) in painted {
            if let Some(index) = bounds.index_of(bounds.to_local(cell)) {
                tiles[index] = Some(tile);
            }
        }
        Self {
            layout,
            bounds,
            tiles,
        }
    }

    /// Empty block covering `bounds`.
    pub fn empty(layout: GridLayout, bounds: CellBounds) -> Self {
        Self::from_painted(layout, bounds, std::iter::empty())
    }

    /// Grid layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Number of painted cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }
}

impl GridProvider for GridSnapshot {
    fn cell_bounds(&self) -> CellBounds {
        self.bounds
    }

    fn cell_size(&self) -> Vec2 {
        self.layout.cell_size()
    }

    fn cell_to_world(&self, cell: CellCoord) -> Vec2 {
        self.layout.cell_to_world(cell)
    }

    fn tile_at(&self, cell: CellCoord) -> Option<TileId> {
        self.bounds
            .index_of(self.bounds.to_local(cell))
            .and_then(|index| self.tiles.get(index).copied().flatten())
    }
}
