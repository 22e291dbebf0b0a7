//! Trigger evaluation against moving colliders.
//!
//! The host's physics reports bodies entering and leaving the event layer
//! as [`ColliderContact`]s; the [`TriggerEngine`] decides which tiles fire
//! or arm. Interact actions (a button press) go through
//! [`TriggerEngine::fire_armed`].
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use tilemap_events::core::{CellBounds, CellCoord, Vec2};
//! use tilemap_events::grid::{EditableTilemap, GridLayout, TileId};
//! use tilemap_events::registry::TileRegistry;
//! use tilemap_events::tiles::{EventCallback, TriggerKind};
//! use tilemap_events::triggers::{ColliderContact, TriggerEngine};
//!
//! let mut map = EditableTilemap::with_bounds(GridLayout::unit(), CellBounds::new(0, 0, 4, 4));
//! map.set_tile(CellCoord::new(2, 2), TileId::new(1));
//!
//! let mut registry = TileRegistry::new();
//! registry.refresh(&map);
//!
//! let talks = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&talks);
//! let sign = registry.get_mut(CellCoord::new(2, 2)).unwrap();
//! sign.trigger = TriggerKind::OnInteraction;
//! sign.callback = EventCallback::from_fn(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let engine = TriggerEngine::new();
//! let center = registry.get(CellCoord::new(2, 2)).unwrap().footprint(registry.cell_size()).center;
//! let player = ColliderContact::boxed(center, Vec2::new(0.5, 0.5), "Player");
//!
//! engine.on_collider_enter(&mut registry, &player);
//! assert_eq!(engine.fire_armed(&registry), 1);
//!
//! engine.on_collider_exit(&mut registry, &player);
//! assert_eq!(engine.fire_armed(&registry), 0);
//! assert_eq!(talks.load(Ordering::SeqCst), 1);
//! ```

mod contact;
mod engine;

pub use contact::ColliderContact;
pub use engine::{TriggerEngine, TriggerReport};
