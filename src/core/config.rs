//! Engine configuration.
//!
//! Hosts configure the library once per event layer via
//! `TilemapEventsConfig`. Defaults reproduce the behavior event layers
//! were authored against, so most hosts never change them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::geometry::Vec2;

/// Offset added to a cell's world corner to get a record's anchor.
///
/// Moves the anchor one unit right and one unit down so that the
/// footprint built from it covers the painted tile rather than the
/// neighbouring cell.
pub const DEFAULT_ANCHOR_BIAS: Vec2 = Vec2::new(1.0, -1.0);

/// Which records a collider exit disarms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitPolicy {
    /// Disarm every record, whether or not the exiting body overlapped it.
    ///
    /// A body leaving tile A also disarms tile B that another body is
    /// still standing on. Kept as the default because existing layers
    /// were authored against it.
    #[default]
    DisarmAll,

    /// Disarm only records whose footprint intersects the exiting body.
    OverlappingOnly,
}

/// Configuration for one event layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilemapEventsConfig {
    /// World-space offset from a cell's corner to a record's anchor.
    pub anchor_bias: Vec2,

    /// Which records `on_collider_exit` disarms.
    pub exit_policy: ExitPolicy,
}

impl Default for TilemapEventsConfig {
    fn default() -> Self {
        Self {
            anchor_bias: DEFAULT_ANCHOR_BIAS,
            exit_policy: ExitPolicy::default(),
        }
    }
}

impl TilemapEventsConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor bias (builder pattern).
    #[must_use]
    pub fn with_anchor_bias(mut self, bias: Vec2) -> Self {
        self.anchor_bias = bias;
        self
    }

    /// Set the exit policy (builder pattern).
    #[must_use]
    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// Check the configuration for values that would poison positions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.anchor_bias.is_finite() {
            return Err(ConfigError::NonFiniteBias {
                x: self.anchor_bias.x,
                y: self.anchor_bias.y,
            });
        }
        Ok(())
    }
}
