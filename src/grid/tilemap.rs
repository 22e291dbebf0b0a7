//! Sparse, paintable tilemap.
//!
//! `EditableTilemap` stores painted cells in a hash map and tracks the
//! bounds the way editor tilemaps do:
//! - painting outside the bounds grows them (possibly moving the origin)
//! - erasing never shrinks them
//! - `compress_bounds` shrinks them to the painted extent

use rustc_hash::FxHashMap;

use crate::core::{CellBounds, CellCoord, Vec2};

use super::layout::GridLayout;
use super::{GridProvider, TileId};

/// Paintable tile grid.
///
/// ## Usage
///
/// ```
/// use tilemap_events::core::{CellBounds, CellCoord};
/// use tilemap_events::grid::{EditableTilemap, GridLayout, GridProvider, TileId};
///
/// let mut map = EditableTilemap::new(GridLayout::unit());
/// map.set_tile(CellCoord::new(2, 2), TileId::new(1));
///
/// // Painting left of the bounds moves their origin
/// map.set_tile(CellCoord::new(-1, 2), TileId::new(1));
/// assert_eq!(map.cell_bounds(), CellBounds::new(-1, 2, 4, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EditableTilemap {
    layout: GridLayout,

    /// Painted cells: absolute cell -> tile
    tiles: FxHashMap<CellCoord, TileId>,

    bounds: CellBounds,
}

impl EditableTilemap {
    /// Create an empty tilemap with empty bounds.
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            tiles: FxHashMap::default(),
            bounds: CellBounds::default(),
        }
    }

    /// Create an empty tilemap with preset bounds.
    #[must_use]
    pub fn with_bounds(layout: GridLayout, bounds: CellBounds) -> Self {
        Self {
            layout,
            tiles: FxHashMap::default(),
            bounds,
        }
    }

    /// Grid layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Paint a tile, growing the bounds if needed.
    ///
    /// Returns the tile previously painted there.
    pub fn set_tile(&mut self, cell: CellCoord, tile: TileId) -> Option<TileId> {
        if !self.bounds.contains(cell) {
            self.bounds = self.bounds.expanded_to(cell);
        }
        self.tiles.insert(cell, tile)
    }

    /// Erase a tile. Bounds are left as they are.
    pub fn clear_tile(&mut self, cell: CellCoord) -> Option<TileId> {
        self.tiles.remove(&cell)
    }

    /// Erase every tile. Bounds are left as they are.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Replace the bounds. Tiles outside them are kept but become
    /// invisible to `tile_at` until the bounds cover them again.
    pub fn set_bounds(&mut self, bounds: CellBounds) {
        self.bounds = bounds;
    }

    /// Shrink the bounds to the smallest block covering every painted
    /// cell; empty when nothing is painted.
    pub fn compress_bounds(&mut self) {
        self.bounds = self
            .tiles
            .keys()
            .fold(CellBounds::default(), |bounds, &cell| bounds.expanded_to(cell));
    }

    /// Number of painted cells, including any outside the bounds.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate painted cells (unordered).
    pub fn painted(&self) -> impl Iterator<Item = (CellCoord, TileId)> + '_ {
        self.tiles.iter().map(|(&cell, &tile)| (cell, tile))
    }
}

impl GridProvider for EditableTilemap {
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
        if !self.bounds.contains(cell) {
            return None;
        }
        self.tiles.get(&cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRASS: TileId = TileId::new(1);
    const DOOR: TileId = TileId::new(2);

    #[test]
    fn test_paint_grows_bounds() {
        let mut map = EditableTilemap::new(GridLayout::unit());
        assert!(map.cell_bounds().is_empty());

        map.set_tile(CellCoord::new(1, 1), GRASS);
        assert_eq!(map.cell_bounds(), CellBounds::new(1, 1, 1, 1));

        map.set_tile(CellCoord::new(3, 0), GRASS);
        assert_eq!(map.cell_bounds(), CellBounds::new(1, 0, 3, 2));
    }

    #[test]
    fn test_paint_inside_preset_bounds() {
        let mut map = EditableTilemap::with_bounds(GridLayout::unit(), CellBounds::new(0, 0, 4, 4));
        map.set_tile(CellCoord::new(2, 2), DOOR);
        assert_eq!(map.cell_bounds(), CellBounds::new(0, 0, 4, 4));
        assert_eq!(map.tile_at(CellCoord::new(2, 2)), Some(DOOR));
    }

    #[test]
    fn test_set_tile_replaces() {
        let mut map = EditableTilemap::new(GridLayout::unit());
        assert_eq!(map.set_tile(CellCoord::ZERO, GRASS), None);
        assert_eq!(map.set_tile(CellCoord::ZERO, DOOR), Some(GRASS));
        assert_eq!(map.tile_count(), 1);
    }

    #[test]
    fn test_clear_keeps_bounds() {
        let mut map = EditableTilemap::new(GridLayout::unit());
        map.set_tile(CellCoord::new(0, 0), GRASS);
        map.set_tile(CellCoord::new(5, 5), GRASS);

        assert_eq!(map.clear_tile(CellCoord::new(5, 5)), Some(GRASS));
        assert_eq!(map.cell_bounds(), CellBounds::new(0, 0, 6, 6));
        assert_eq!(map.tile_count(), 1);

        map.clear();
        assert_eq!(map.tile_count(), 0);
        assert_eq!(map.cell_bounds(), CellBounds::new(0, 0, 6, 6));
    }

    #[test]
    fn test_compress_bounds() {
        let mut map = EditableTilemap::new(GridLayout::unit());
        map.set_tile(CellCoord::new(0, 0), GRASS);
        map.set_tile(CellCoord::new(5, 5), GRASS);
        map.set_tile(CellCoord::new(3, 2), GRASS);
        map.clear_tile(CellCoord::new(0, 0));

        map.compress_bounds();
        assert_eq!(map.cell_bounds(), CellBounds::new(3, 2, 3, 4));

        map.clear();
        map.compress_bounds();
        assert!(map.cell_bounds().is_empty());
    }

    #[test]
    fn test_tiles_outside_bounds_hidden() {
        let mut map = EditableTilemap::new(GridLayout::unit());
        map.set_tile(CellCoord::new(0, 0), GRASS);
        map.set_tile(CellCoord::new(4, 0), GRASS);

        map.set_bounds(CellBounds::new(0, 0, 2, 1));
        assert!(map.has_tile(CellCoord::new(0, 0)));
        assert!(!map.has_tile(CellCoord::new(4, 0)));
        assert_eq!(map.painted().count(), 2);
    }
}
