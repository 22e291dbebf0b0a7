//! Tile registry.
//!
//! The registry mirrors the painted cells of one grid as event tiles and
//! keeps them consistent with the grid as it is edited. Records are kept
//! sorted by cell so iteration is deterministic.

use tracing::{debug, warn};

use crate::core::{CellBounds, CellCoord, TilemapEventsConfig, Vec2, DEFAULT_ANCHOR_BIAS};
use crate::grid::GridProvider;
use crate::tiles::EventTile;

use super::report::SyncReport;

/// Event tiles for one grid surface.
///
/// ## Reconciliation
///
/// The registry is brought in line with its grid by a three-step pass:
///
/// 1. `mark_all_deleted`: every record becomes a removal candidate
/// 2. `sync`: realigns records if the bounds origin moved, keeps alive
///    records whose cell is still painted and creates records for newly
///    painted cells
/// 3. `prune_deleted`: drops the candidates nobody kept alive
///
/// `refresh` runs all three. Collider callbacks must not run in the
/// middle of a pass.
///
/// ## Example
///
/// ```
/// use tilemap_events::core::{CellBounds, CellCoord};
/// use tilemap_events::grid::{EditableTilemap, GridLayout, TileId};
/// use tilemap_events::registry::TileRegistry;
///
/// let mut map = EditableTilemap::with_bounds(GridLayout::unit(), CellBounds::new(0, 0, 4, 4));
/// map.set_tile(CellCoord::new(2, 2), TileId::new(1));
///
/// let mut registry = TileRegistry::new();
/// let report = registry.refresh(&map);
/// assert_eq!(report.added, 1);
/// assert!(registry.get(CellCoord::new(2, 2)).is_some());
///
/// map.clear_tile(CellCoord::new(2, 2));
/// let report = registry.refresh(&map);
/// assert_eq!(report.removed, 1);
/// assert!(registry.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct TileRegistry {
    /// Records sorted by cell.
    tiles: Vec<EventTile>,

    /// Grid bounds seen by the last pass. `None` before the first one.
    last_bounds: Option<CellBounds>,

    /// Grid cell size seen by the last pass.
    cell_size: Vec2,

    anchor_bias: Vec2,
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            last_bounds: None,
            cell_size: Vec2::ONE,
            anchor_bias: DEFAULT_ANCHOR_BIAS,
        }
    }
}

impl TileRegistry {
    /// Create an empty registry with the default anchor bias.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry using `config`.
    #[must_use]
    pub fn with_config(config: &TilemapEventsConfig) -> Self {
        Self {
            anchor_bias: config.anchor_bias,
            ..Self::default()
        }
    }

    /// Rebuild a registry from persisted records for `grid`.
    ///
    /// `last_bounds` are the grid bounds the records' cells are relative
    /// to. The cell size is taken from `grid`, so footprints are right
    /// before any pass runs. Records sharing a cell are collapsed onto the
    /// first one. Restored records are marked deleted until a pass keeps
    /// them alive.
    pub fn restore<G: GridProvider + ?Sized>(
        config: &TilemapEventsConfig,
        grid: &G,
        last_bounds: CellBounds,
        records: impl IntoIterator<Item = EventTile>,
    ) -> Self {
        let mut tiles: Vec<EventTile> = records.into_iter().collect();
        tiles.sort_by_key(EventTile::cell);

        let before = tiles.len();
        tiles.dedup_by_key(|t| t.cell());
        let duplicates = before - tiles.len();
        if duplicates > 0 {
            warn!(duplicates, "restore_dropped_duplicate_cells");
        }

        for tile in &mut tiles {
            tile.set_deleted(true);
        }

        Self {
            tiles,
            last_bounds: Some(last_bounds),
            cell_size: grid.cell_size(),
            ..Self::with_config(config)
        }
    }

    // === Reconciliation ===

    /// Realign records after the grid's bounds origin moved.
    ///
    /// Each record moves to `cell - offset` so it stays on the same painted
    /// content. Returns the offset, or `None` if the origin did not move.
    pub fn realign<G: GridProvider + ?Sized>(&mut self, grid: &G) -> Option<CellCoord> {
        let bounds = grid.cell_bounds();
        self.cell_size = grid.cell_size();

        let offset = self
            .last_bounds
            .map_or(CellCoord::ZERO, |last| bounds.origin - last.origin);
        self.last_bounds = Some(bounds);

        if offset.is_zero() {
            return None;
        }

        for tile in &mut self.tiles {
            let cell = tile.cell() - offset;
            tile.set_position(grid, cell, self.anchor_bias);
        }

        debug!(
            dx = offset.x,
            dy = offset.y,
            records = self.tiles.len(),
            "registry_realigned"
        );
        Some(offset)
    }

    /// Bring the registry in line with the grid's painted cells.
    ///
    /// Realigns on origin moves, keeps alive records whose cell is painted
    /// and creates records for painted cells without one. Records whose
    /// cell is not painted are left untouched; pair with
    /// `mark_all_deleted`/`prune_deleted` (or use `refresh`) to drop them.
    pub fn sync<G: GridProvider + ?Sized>(&mut self, grid: &G) -> SyncReport {
        let shift = self.realign(grid);
        let mut report = SyncReport {
            shift,
            ..SyncReport::default()
        };

        for (cell, tile) in grid.painted_local_cells() {
            if self.contains(cell) {
                report.kept += 1;
                continue;
            }

            let mut record = EventTile::create(grid, cell, tile, self.anchor_bias);
            record.set_deleted(false);
            self.insert(record);
            report.added += 1;
        }

        debug!(
            added = report.added,
            kept = report.kept,
            records = self.tiles.len(),
            "registry_synced"
        );
        report
    }

    /// Mark every record as a removal candidate.
    pub fn mark_all_deleted(&mut self) {
        for tile in &mut self.tiles {
            tile.set_deleted(true);
        }
    }

    /// Remove every record still marked deleted. Returns how many.
    pub fn prune_deleted(&mut self) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|t| !t.is_deleted());
        let removed = before - self.tiles.len();

        if removed > 0 {
            debug!(removed, records = self.tiles.len(), "registry_pruned");
        }
        removed
    }

    /// Run a full reconciliation pass: mark, sync, prune.
    pub fn refresh<G: GridProvider + ?Sized>(&mut self, grid: &G) -> SyncReport {
        self.mark_all_deleted();
        let mut report = self.sync(grid);
        report.removed = self.prune_deleted();
        report
    }

    // === Lookup ===

    fn position_of(&self, cell: CellCoord) -> Result<usize, usize> {
        self.tiles.binary_search_by(|t| t.cell().cmp(&cell))
    }

    fn insert(&mut self, record: EventTile) {
        match self.position_of(record.cell()) {
            Ok(index) => self.tiles[index] = record,
            Err(index) => self.tiles.insert(index, record),
        }
    }

    /// Find the record at `cell` and keep it alive for the current pass.
    pub fn lookup(&mut self, cell: CellCoord) -> Option<&mut EventTile> {
        let index = self.position_of(cell).ok()?;
        let tile = &mut self.tiles[index];
        tile.set_deleted(false);
        Some(tile)
    }

    /// Check for a record at `cell`, keeping it alive for the current pass.
    pub fn contains(&mut self, cell: CellCoord) -> bool {
        self.lookup(cell).is_some()
    }

    /// Get the record at `cell`.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<&EventTile> {
        self.position_of(cell).ok().map(|index| &self.tiles[index])
    }

    /// Get the record at `cell` for editing.
    pub fn get_mut(&mut self, cell: CellCoord) -> Option<&mut EventTile> {
        let index = self.position_of(cell).ok()?;
        Some(&mut self.tiles[index])
    }

    // === Accessors ===

    /// Records in cell order.
    #[must_use]
    pub fn records(&self) -> &[EventTile] {
        &self.tiles
    }

    /// Iterate records in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &EventTile> {
        self.tiles.iter()
    }

    /// Iterate records mutably in cell order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EventTile> {
        self.tiles.iter_mut()
    }

    /// Get total record count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Grid bounds seen by the last pass.
    #[must_use]
    pub fn last_bounds(&self) -> Option<CellBounds> {
        self.last_bounds
    }

    /// Grid cell size seen by the last pass.
    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// World offset applied to record anchors.
    #[must_use]
    pub fn anchor_bias(&self) -> Vec2 {
        self.anchor_bias
    }

    /// Remove every record and forget the last bounds.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.last_bounds = None;
    }
}
