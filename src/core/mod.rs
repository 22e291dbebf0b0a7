//! Core types: geometry, configuration and construction errors.
//!
//! Everything here is engine-agnostic. Hosts convert their own vector,
//! bounds and collider types into these at the boundary.

pub mod geometry;
pub mod config;
pub mod error;

pub use geometry::{CellBounds, CellCoord, Rect, Vec2};
pub use config::{ExitPolicy, TilemapEventsConfig, DEFAULT_ANCHOR_BIAS};
pub use error::{ConfigError, GridError};
