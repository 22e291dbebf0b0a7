//! Trigger evaluation.
//!
//! The engine turns collider contacts and interact actions into callback
//! invocations. It holds no per-record state of its own: the armed flag
//! lives on the records, so the registry stays the single source of truth.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{CellCoord, ExitPolicy, TilemapEventsConfig};
use crate::registry::TileRegistry;
use crate::tiles::TriggerKind;

use super::contact::ColliderContact;

/// Records affected by a collider enter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerReport {
    /// Collision tiles that fired, in cell order.
    pub fired: SmallVec<[CellCoord; 4]>,

    /// Interaction tiles that were armed, in cell order.
    pub armed: SmallVec<[CellCoord; 4]>,
}

impl TriggerReport {
    /// Check if the contact affected no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty() && self.armed.is_empty()
    }
}

/// Evaluates contacts and interact actions against a registry.
///
/// ## Lifecycle of an interaction tile
///
/// ```text
///   Idle --enter (overlap + tag)--> Armed --exit--> Idle
///                                     |
///                                fire_armed: invokes callback, stays Armed
/// ```
///
/// Collision tiles have no state; they fire on every overlapping enter.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriggerEngine {
    exit_policy: ExitPolicy,
}

impl TriggerEngine {
    /// Create an engine with the default exit policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine using `config`.
    #[must_use]
    pub fn with_config(config: &TilemapEventsConfig) -> Self {
        Self {
            exit_policy: config.exit_policy,
        }
    }

    /// Exit policy in use.
    #[must_use]
    pub fn exit_policy(&self) -> ExitPolicy {
        self.exit_policy
    }

    /// Handle a collider entering the layer.
    ///
    /// For every record whose footprint overlaps the contact and whose tag
    /// filter accepts it, collision tiles fire immediately and interaction
    /// tiles are armed. No debouncing: calling this again while the body
    /// still overlaps fires collision tiles again.
    pub fn on_collider_enter(
        &self,
        registry: &mut TileRegistry,
        contact: &ColliderContact,
    ) -> TriggerReport {
        let cell_size = registry.cell_size();
        let mut report = TriggerReport::default();

        for tile in registry.iter_mut() {
            if !tile.footprint(cell_size).intersects(&contact.bounds) {
                continue;
            }
            if !tile.tag_filter.matches(&contact.tag) {
                continue;
            }

            match tile.trigger {
                TriggerKind::OnEnterCollision => {
                    tile.fire();
                    trace!(cell = %tile.cell(), tag = %contact.tag, "tile_fired");
                    report.fired.push(tile.cell());
                }
                TriggerKind::OnInteraction => {
                    tile.set_interactible(true);
                    trace!(cell = %tile.cell(), tag = %contact.tag, "tile_armed");
                    report.armed.push(tile.cell());
                }
            }
        }

        report
    }

    /// Handle a collider leaving the layer. Returns how many armed records
    /// were disarmed.
    ///
    /// With `ExitPolicy::DisarmAll` every record is disarmed, including
    /// records the exiting body never overlapped.
    pub fn on_collider_exit(&self, registry: &mut TileRegistry, contact: &ColliderContact) -> usize {
        let cell_size = registry.cell_size();
        let mut disarmed = 0;
        let mut unrelated = 0;

        for tile in registry.iter_mut() {
            let overlapping = tile.footprint(cell_size).intersects(&contact.bounds);
            if self.exit_policy == ExitPolicy::OverlappingOnly && !overlapping {
                continue;
            }

            if tile.is_interactible() {
                disarmed += 1;
                if !overlapping {
                    unrelated += 1;
                }
                trace!(cell = %tile.cell(), tag = %contact.tag, "tile_disarmed");
            }
            tile.set_interactible(false);
        }

        if unrelated > 0 {
            warn!(
                unrelated,
                tag = %contact.tag,
                "exit_disarmed_tiles_outside_contact"
            );
        }
        disarmed
    }

    /// Fire every armed interaction tile. Returns how many fired.
    ///
    /// Meant for an explicit interact action (a button press), independent
    /// of the contact callbacks.
    pub fn fire_armed(&self, registry: &TileRegistry) -> usize {
        let mut fired = 0;
        for tile in registry.iter().filter(|t| t.trigger.is_interaction()) {
            if tile.fire() {
                trace!(cell = %tile.cell(), "tile_interacted");
                fired += 1;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellBounds, Vec2};
    use crate::grid::{EditableTilemap, GridLayout, TileId};
    use crate::tiles::EventCallback;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, EventCallback) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let callback = EventCallback::from_fn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (hits, callback)
    }

    fn registry_with(painted: &[(i32, i32)]) -> TileRegistry {
        let mut map = EditableTilemap::with_bounds(GridLayout::unit(), CellBounds::new(0, 0, 4, 4));
        for &(x, y) in painted {
            map.set_tile(CellCoord::new(x, y), TileId::new(1));
        }
        let mut registry = TileRegistry::new();
        registry.refresh(&map);
        registry
    }

    /// Small contact centered on the footprint of `cell`.
    fn contact_on(registry: &TileRegistry, cell: CellCoord, tag: &str) -> ColliderContact {
        let footprint = registry.get(cell).unwrap().footprint(registry.cell_size());
        ColliderContact::boxed(footprint.center, Vec2::new(0.2, 0.2), tag)
    }

    fn far_away(tag: &str) -> ColliderContact {
        ColliderContact::boxed(Vec2::new(100.0, 100.0), Vec2::ONE, tag)
    }

    #[test]
    fn test_collision_fires_on_enter() {
        let mut registry = registry_with(&[(1, 1)]);
        let (hits, callback) = counter();
        registry.get_mut(CellCoord::new(1, 1)).unwrap().callback = callback;

        let engine = TriggerEngine::new();
        let contact = contact_on(&registry, CellCoord::new(1, 1), "Player");
        let report = engine.on_collider_enter(&mut registry, &contact);

        assert_eq!(report.fired.as_slice(), &[CellCoord::new(1, 1)]);
        assert!(report.armed.is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // No debouncing
        engine.on_collider_enter(&mut registry, &contact);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_overlap_no_fire() {
        let mut registry = registry_with(&[(1, 1)]);
        let (hits, callback) = counter();
        registry.get_mut(CellCoord::new(1, 1)).unwrap().callback = callback;

        let report = TriggerEngine::new().on_collider_enter(&mut registry, &far_away("Player"));
        assert!(report.is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tag_gating() {
        let mut registry = registry_with(&[(1, 1), (2, 2)]);
        let (player_hits, player_cb) = counter();
        let (any_hits, any_cb) = counter();
        {
            let tile = registry.get_mut(CellCoord::new(1, 1)).unwrap();
            tile.tag_filter = "Player".into();
            tile.callback = player_cb;
        }
        registry.get_mut(CellCoord::new(2, 2)).unwrap().callback = any_cb;

        let engine = TriggerEngine::new();
        let enemy_on_1 = contact_on(&registry, CellCoord::new(1, 1), "Enemy");
        let enemy_on_2 = contact_on(&registry, CellCoord::new(2, 2), "Enemy");

        engine.on_collider_enter(&mut registry, &enemy_on_1);
        engine.on_collider_enter(&mut registry, &enemy_on_2);
        assert_eq!(player_hits.load(Ordering::SeqCst), 0);
        assert_eq!(any_hits.load(Ordering::SeqCst), 1);

        let player_on_1 = contact_on(&registry, CellCoord::new(1, 1), "Player");
        engine.on_collider_enter(&mut registry, &player_on_1);
        assert_eq!(player_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_interaction_arms_without_firing() {
        let mut registry = registry_with(&[(2, 2)]);
        let (hits, callback) = counter();
        {
            let tile = registry.get_mut(CellCoord::new(2, 2)).unwrap();
            tile.trigger = TriggerKind::OnInteraction;
            tile.callback = callback;
        }

        let engine = TriggerEngine::new();
        assert_eq!(engine.fire_armed(&registry), 0);

        let contact = contact_on(&registry, CellCoord::new(2, 2), "Player");
        let report = engine.on_collider_enter(&mut registry, &contact);
        assert_eq!(report.armed.as_slice(), &[CellCoord::new(2, 2)]);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(registry.get(CellCoord::new(2, 2)).unwrap().is_interactible());

        assert_eq!(engine.fire_armed(&registry), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert_eq!(engine.on_collider_exit(&mut registry, &contact), 1);
        assert_eq!(engine.fire_armed(&registry), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fire_armed_skips_collision_tiles() {
        let mut registry = registry_with(&[(0, 0)]);
        let (hits, callback) = counter();
        registry.get_mut(CellCoord::ZERO).unwrap().callback = callback;

        assert_eq!(TriggerEngine::new().fire_armed(&registry), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_exit_disarms_all_by_default() {
        let mut registry = registry_with(&[(0, 0), (3, 3)]);
        for tile in registry.iter_mut() {
            tile.trigger = TriggerKind::OnInteraction;
        }

        let engine = TriggerEngine::new();
        let on_a = contact_on(&registry, CellCoord::new(0, 0), "Player");
        let on_b = contact_on(&registry, CellCoord::new(3, 3), "Npc");
        engine.on_collider_enter(&mut registry, &on_a);
        engine.on_collider_enter(&mut registry, &on_b);

        // Leaving tile A also disarms tile B
        assert_eq!(engine.on_collider_exit(&mut registry, &on_a), 2);
        assert!(registry.iter().all(|t| !t.is_interactible()));
    }

    #[test]
    fn test_exit_overlapping_only() {
        let mut registry = registry_with(&[(0, 0), (3, 3)]);
        for tile in registry.iter_mut() {
            tile.trigger = TriggerKind::OnInteraction;
        }

        let config = TilemapEventsConfig::new().with_exit_policy(ExitPolicy::OverlappingOnly);
        let engine = TriggerEngine::with_config(&config);
        let on_a = contact_on(&registry, CellCoord::new(0, 0), "Player");
        let on_b = contact_on(&registry, CellCoord::new(3, 3), "Npc");
        engine.on_collider_enter(&mut registry, &on_a);
        engine.on_collider_enter(&mut registry, &on_b);

        assert_eq!(engine.on_collider_exit(&mut registry, &on_a), 1);
        assert!(!registry.get(CellCoord::new(0, 0)).unwrap().is_interactible());
        assert!(registry.get(CellCoord::new(3, 3)).unwrap().is_interactible());
    }

    #[test]
    fn test_enter_reports_in_cell_order() {
        let mut registry = registry_with(&[(1, 1), (1, 2), (2, 1)]);
        let contact = ColliderContact::boxed(Vec2::new(2.5, 2.5), Vec2::new(2.0, 2.0), "Player");

        let report = TriggerEngine::new().on_collider_enter(&mut registry, &contact);
        let mut sorted = report.fired.clone();
        sorted.sort();
        assert_eq!(report.fired, sorted);
        assert!(!report.fired.is_empty());
    }
}
