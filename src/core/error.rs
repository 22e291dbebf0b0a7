//! Construction errors for host-facing value types.
//!
//! Reconciliation and trigger evaluation never fail; only building a
//! grid view or a configuration from host data can.

use thiserror::Error;

/// Errors raised while building a grid view.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("cell size must be finite and positive, got ({x}, {y})")]
    InvalidCellSize { x: f32, y: f32 },

    #[error("grid origin must be finite, got ({x}, {y})")]
    NonFiniteOrigin { x: f32, y: f32 },
}

/// Errors raised by `TilemapEventsConfig::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("anchor bias must be finite, got ({x}, {y})")]
    NonFiniteBias { x: f32, y: f32 },
}
