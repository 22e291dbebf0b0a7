//! Grid providers.
//!
//! The registry never owns the grid it mirrors. Hosts expose their tile
//! grid through the [`GridProvider`] trait; the crate ships two
//! implementations for hosts without a native grid and for tests:
//!
//! - [`GridSnapshot`]: a dense, validated block of tiles (what a host
//!   returns for "all tiles inside the current bounds")
//! - [`EditableTilemap`]: a sparse, paintable map whose bounds grow when
//!   painting outside them and can be compressed afterwards
//!
//! ## Coordinates
//!
//! Providers work in absolute cells. The registry stores records in
//! cells local to the provider's bounds at the time of the last sync,
//! which is why moving the bounds origin shifts every record.

mod layout;
mod snapshot;
mod tilemap;

pub use layout::GridLayout;
pub use snapshot::GridSnapshot;
pub use tilemap::EditableTilemap;

use serde::{Deserialize, Serialize};

use crate::core::{CellBounds, CellCoord, Vec2};

/// Opaque identifier of the tile asset painted in a cell.
///
/// The library never interprets it; hosts map it back to their assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Read access to a host tile grid.
///
/// ## Implementation Notes
///
/// - `cell_bounds`: the block currently considered "the map"; may move or
///   resize between calls as the map is edited
/// - `cell_to_world`: world position of a cell's lower corner
/// - `tile_at`: takes an absolute cell, returns `None` for empty cells and
///   for cells outside the bounds
pub trait GridProvider {
    /// Current cell bounds of the map.
    fn cell_bounds(&self) -> CellBounds;

    /// World-space size of one cell.
    fn cell_size(&self) -> Vec2;

    /// World position of an absolute cell.
    fn cell_to_world(&self, cell: CellCoord) -> Vec2;

    /// Tile painted at an absolute cell, if any.
    fn tile_at(&self, cell: CellCoord) -> Option<TileId>;

    // === Convenience Methods ===

    /// Check if an absolute cell holds a tile.
    fn has_tile(&self, cell: CellCoord) -> bool {
        self.tile_at(cell).is_some()
    }

    /// Painted cells inside the bounds, as `(local cell, tile)` pairs in
    /// column order.
    fn painted_local_cells(&self) -> Vec<(CellCoord, TileId)> {
        let bounds = self.cell_bounds();
        bounds
            .local_cells()
            .filter_map(|local| {
                self.tile_at(bounds.to_absolute(local))
                    .map(|tile| (local, tile))
            })
            .collect()
    }
}

impl<G: GridProvider + ?Sized> GridProvider for &G {
    fn cell_bounds(&self) -> CellBounds {
        (**self).cell_bounds()
    }

    fn cell_size(&self) -> Vec2 {
        (**self).cell_size()
    }

    fn cell_to_world(&self, cell: CellCoord) -> Vec2 {
        (**self).cell_to_world(cell)
    }

    fn tile_at(&self, cell: CellCoord) -> Option<TileId> {
        (**self).tile_at(cell)
    }
}
