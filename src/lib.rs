//! # tilemap-events
//!
//! Interactive event tiles laid over a 2D tile grid.
//!
//! Designers paint tiles on an event layer, give each one a trigger kind
//! and a tag filter, and bind a callback. This crate keeps the set of event
//! tiles in step with the painted cells as the map is edited, and decides
//! when each tile fires as bodies move over it.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: The grid is reached through [`GridProvider`];
//!    collisions arrive as plain [`ColliderContact`] values. No rendering,
//!    no physics.
//!
//! 2. **Explicit Reconciliation**: Edits are absorbed by a
//!    mark → sync → prune pass with a report of what changed.
//!
//! 3. **Infallible Hot Path**: Reconciliation and triggering never fail.
//!    Missing tags match everything, empty callbacks do nothing, unknown
//!    cells are simply not found.
//!
//! ## Modules
//!
//! - `core`: Geometry, configuration, construction errors
//! - `grid`: Grid provider trait, layouts, snapshots, editable tilemaps
//! - `tiles`: Event tile records, trigger kinds, tag filters, callbacks
//! - `registry`: Tile registry and reconciliation
//! - `triggers`: Collider contacts and the trigger engine
//! - `layer`: `TilemapEvents`, one event layer bundling all of the above

pub mod core;
pub mod grid;
pub mod tiles;
pub mod registry;
pub mod triggers;
pub mod layer;

// Re-export commonly used types
pub use crate::core::{
    CellBounds, CellCoord, Rect, Vec2,
    ExitPolicy, TilemapEventsConfig,
    ConfigError, GridError,
};

pub use crate::grid::{EditableTilemap, GridLayout, GridProvider, GridSnapshot, TileId};

pub use crate::tiles::{EventCallback, EventTile, TagFilter, TriggerKind};

pub use crate::registry::{SyncReport, TileRegistry};

pub use crate::triggers::{ColliderContact, TriggerEngine, TriggerReport};

pub use crate::layer::TilemapEvents;
