//! Event tile records.
//!
//! ## Key Types
//!
//! - [`EventTile`]: Event metadata for one painted cell
//! - [`TriggerKind`]: Fire on contact, or arm on contact and fire on interact
//! - [`TagFilter`]: Which collider tags a tile responds to
//! - [`EventCallback`]: Listeners invoked when a tile fires
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use tilemap_events::core::CellCoord;
//! use tilemap_events::tiles::{EventCallback, EventTile, TriggerKind};
//!
//! let opened = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&opened);
//!
//! let mut door = EventTile::new(CellCoord::new(2, 2))
//!     .with_name("Door")
//!     .with_tag_filter("Player")
//!     .with_trigger(TriggerKind::OnInteraction)
//!     .with_callback(EventCallback::from_fn(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }));
//!
//! // Interaction tiles only fire while armed
//! assert!(!door.fire());
//! door.set_interactible(true);
//! assert!(door.fire());
//! assert_eq!(opened.load(Ordering::SeqCst), 1);
//! ```

mod callback;
mod record;
mod trigger;

pub use callback::{EventCallback, Listener};
pub use record::{compute_position, default_tile_name, EventTile};
pub use trigger::{TagFilter, TriggerKind};
