//! Event layer facade.
//!
//! `TilemapEvents` bundles a registry, the trigger engine and their shared
//! configuration: one per event layer. Hosts forward edit notifications to
//! `refresh`, physics contacts to `on_collider_enter`/`on_collider_exit`
//! and interact actions to `fire_interactible`.

use crate::core::{ConfigError, TilemapEventsConfig};
use crate::grid::GridProvider;
use crate::registry::{SyncReport, TileRegistry};
use crate::triggers::{ColliderContact, TriggerEngine, TriggerReport};

/// One event layer laid over a grid.
#[derive(Clone, Debug, Default)]
pub struct TilemapEvents {
    config: TilemapEventsConfig,
    registry: TileRegistry,
    engine: TriggerEngine,
}

impl TilemapEvents {
    /// Create an empty layer, validating `config`.
    pub fn new(config: TilemapEventsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, TileRegistry::with_config(&config)))
    }

    /// Wrap an existing (for example restored) registry.
    pub fn with_registry(
        config: TilemapEventsConfig,
        registry: TileRegistry,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, registry))
    }

    fn from_parts(config: TilemapEventsConfig, registry: TileRegistry) -> Self {
        Self {
            config,
            registry,
            engine: TriggerEngine::with_config(&config),
        }
    }

    /// Layer configuration.
    #[must_use]
    pub fn config(&self) -> &TilemapEventsConfig {
        &self.config
    }

    /// Event tiles of this layer.
    #[must_use]
    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    /// Event tiles of this layer, for authoring.
    pub fn registry_mut(&mut self) -> &mut TileRegistry {
        &mut self.registry
    }

    /// Trigger engine of this layer.
    #[must_use]
    pub fn engine(&self) -> &TriggerEngine {
        &self.engine
    }

    /// Reconcile the layer with its grid after an edit.
    pub fn refresh<G: GridProvider + ?Sized>(&mut self, grid: &G) -> SyncReport {
        self.registry.refresh(grid)
    }

    /// Forward a body entering the layer.
    pub fn on_collider_enter(&mut self, contact: &ColliderContact) -> TriggerReport {
        self.engine.on_collider_enter(&mut self.registry, contact)
    }

    /// Forward a body leaving the layer.
    pub fn on_collider_exit(&mut self, contact: &ColliderContact) -> usize {
        self.engine.on_collider_exit(&mut self.registry, contact)
    }

    /// Fire every armed interaction tile.
    pub fn fire_interactible(&self) -> usize {
        self.engine.fire_armed(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellBounds, CellCoord, ExitPolicy, Vec2};
    use crate::grid::{EditableTilemap, GridLayout, TileId};

    #[test]
    fn test_layer_rejects_invalid_config() {
        let config = TilemapEventsConfig::new().with_anchor_bias(Vec2::new(f32::NAN, 0.0));
        assert!(TilemapEvents::new(config).is_err());
        assert!(TilemapEvents::with_registry(config, TileRegistry::new()).is_err());
    }

    #[test]
    fn test_layer_uses_config() {
        let config = TilemapEventsConfig::new()
            .with_anchor_bias(Vec2::ZERO)
            .with_exit_policy(ExitPolicy::OverlappingOnly);
        let mut layer = TilemapEvents::new(config).unwrap();
        assert_eq!(layer.engine().exit_policy(), ExitPolicy::OverlappingOnly);

        let mut map = EditableTilemap::with_bounds(GridLayout::unit(), CellBounds::new(0, 0, 2, 2));
        map.set_tile(CellCoord::new(1, 1), TileId::new(3));
        let report = layer.refresh(&map);

        assert_eq!(report.added, 1);
        assert_eq!(
            layer.registry().get(CellCoord::new(1, 1)).unwrap().world(),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_layer_default() {
        let layer = TilemapEvents::default();
        assert_eq!(*layer.config(), TilemapEventsConfig::default());
        assert!(layer.registry().is_empty());
        assert_eq!(layer.fire_interactible(), 0);
    }
}
