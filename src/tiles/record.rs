//! Event tile records.
//!
//! An `EventTile` is the event metadata of one painted cell. Authored
//! fields (name, tag filter, trigger kind, callback) are public; the cell,
//! world anchor and transient flags are kept consistent by the registry.

use serde::{Deserialize, Serialize};

use crate::core::{CellCoord, Rect, Vec2};
use crate::grid::{GridProvider, TileId};

use super::callback::EventCallback;
use super::trigger::{TagFilter, TriggerKind};

/// World anchor of a cell local to the grid's current bounds.
///
/// `cell_to_world(bounds.origin + cell) + bias`. The bias aligns the
/// record's footprint with the tile as drawn.
///
/// The bounds origin is applied on both axes. Anchors authored against a
/// host that only offsets `x` differ on `y` whenever the origin's `y` is
/// not zero.
pub fn compute_position<G: GridProvider + ?Sized>(grid: &G, cell: CellCoord, bias: Vec2) -> Vec2 {
    let bounds = grid.cell_bounds();
    grid.cell_to_world(bounds.to_absolute(cell)) + bias
}

/// Default display name for the record at `cell`.
#[must_use]
pub fn default_tile_name(cell: CellCoord) -> String {
    format!("Tile {}", cell)
}

fn detached() -> bool {
    true
}

/// A single event tile.
///
/// Only the registry moves a record between cells, so its records stay
/// sorted and unique:
///
/// ```compile_fail
/// use tilemap_events::core::{CellBounds, CellCoord, Vec2};
/// use tilemap_events::grid::{GridLayout, GridSnapshot};
/// use tilemap_events::tiles::EventTile;
///
/// let grid = GridSnapshot::empty(GridLayout::unit(), CellBounds::new(0, 0, 4, 4));
/// let mut tile = EventTile::new(CellCoord::ZERO);
/// tile.set_position(&grid, CellCoord::new(3, 3), Vec2::ZERO);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventTile {
    /// Display name (for debugging/editor display).
    pub name: String,

    /// Collider tags this tile responds to.
    pub tag_filter: TagFilter,

    /// How overlap turns into firing.
    pub trigger: TriggerKind,

    /// Tile painted in the cell when the record was created.
    pub tile: Option<TileId>,

    /// Event fired by this tile. Bound by the host, never persisted.
    #[serde(skip)]
    pub callback: EventCallback,

    /// Cell local to the registry's last known bounds.
    cell: CellCoord,

    /// World anchor derived from `cell`.
    world: Vec2,

    /// Reconciliation mark.
    #[serde(skip, default = "detached")]
    deleted: bool,

    /// Armed state, only ever set for `OnInteraction` tiles.
    #[serde(skip)]
    interactible: bool,
}

impl EventTile {
    /// Create a detached record at `cell` with a default name.
    ///
    /// The world anchor stays at the origin until a registry positions it.
    /// Detached records start marked deleted; a reconciliation pass keeps
    /// them only if their cell is still painted.
    #[must_use]
    pub fn new(cell: CellCoord) -> Self {
        Self {
            name: default_tile_name(cell),
            tag_filter: TagFilter::any(),
            trigger: TriggerKind::default(),
            tile: None,
            callback: EventCallback::new(),
            cell,
            world: Vec2::ZERO,
            deleted: true,
            interactible: false,
        }
    }

    /// Create the record for a freshly painted cell, positioned on `grid`.
    pub fn create<G: GridProvider + ?Sized>(
        grid: &G,
        cell: CellCoord,
        tile: TileId,
        bias: Vec2,
    ) -> Self {
        let mut record = Self::new(cell).with_tile(tile);
        record.set_position(grid, cell, bias);
        record
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the tag filter (builder pattern).
    #[must_use]
    pub fn with_tag_filter(mut self, filter: impl Into<TagFilter>) -> Self {
        self.tag_filter = filter.into();
        self
    }

    /// Set the trigger kind (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: TriggerKind) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the painted tile (builder pattern).
    #[must_use]
    pub fn with_tile(mut self, tile: TileId) -> Self {
        self.tile = Some(tile);
        self
    }

    /// Set the callback (builder pattern).
    #[must_use]
    pub fn with_callback(mut self, callback: EventCallback) -> Self {
        self.callback = callback;
        self
    }

    /// Grid cell, local to the registry's last known bounds.
    #[must_use]
    pub fn cell(&self) -> CellCoord {
        self.cell
    }

    /// World anchor.
    #[must_use]
    pub fn world(&self) -> Vec2 {
        self.world
    }

    /// Check if the record is marked for removal.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Check if the record is armed.
    #[must_use]
    pub fn is_interactible(&self) -> bool {
        self.interactible
    }

    pub(crate) fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }

    /// Move the record to `cell` and recompute its world anchor.
    pub(crate) fn set_position<G: GridProvider + ?Sized>(&mut self, grid: &G, cell: CellCoord, bias: Vec2) {
        self.cell = cell;
        self.world = compute_position(grid, cell, bias);
    }

    /// Arm or disarm the record. Ignored unless the trigger is
    /// `OnInteraction`.
    pub fn set_interactible(&mut self, active: bool) {
        if !self.trigger.is_interaction() {
            return;
        }
        self.interactible = active;
    }

    /// Check if the record would fire right now.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        !self.trigger.is_interaction() || self.interactible
    }

    /// Fire the event.
    ///
    /// Collision tiles always invoke their callback; interaction tiles only
    /// while armed. Returns whether the callback was invoked (an empty
    /// callback still counts as invoked).
    pub fn fire(&self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.callback.invoke();
        true
    }

    /// World-space box tested against colliders.
    ///
    /// Centered one cell above the anchor, one cell in size.
    #[must_use]
    pub fn footprint(&self, cell_size: Vec2) -> Rect {
        Rect::new(
            Vec2::new(self.world.x, self.world.y + cell_size.y),
            cell_size,
        )
    }
}
