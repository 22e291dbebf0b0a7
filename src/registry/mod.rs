//! Tile registry and grid reconciliation.
//!
//! The registry owns the event tiles of one grid surface. Hosts call
//! [`TileRegistry::refresh`] whenever the map is edited; the pass creates
//! records for newly painted cells, realigns records when the grid's
//! bounds origin moves and drops records whose cell was cleared.
//!
//! ## Key Types
//!
//! - [`TileRegistry`]: Sorted record storage, reconciliation and lookup
//! - [`SyncReport`]: What a reconciliation pass changed

mod report;
mod tile_registry;

pub use report::SyncReport;
pub use tile_registry::TileRegistry;
