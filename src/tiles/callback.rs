//! Callback handles bound to event tiles.

use std::sync::Arc;

use smallvec::SmallVec;

/// A single listener. Invoked with no arguments.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Opaque invokable bound to an event tile.
///
/// Holds zero or more listeners and calls them in registration order.
/// Invoking an empty callback does nothing. Clones share listeners.
#[derive(Clone, Default)]
pub struct EventCallback {
    listeners: SmallVec<[Listener; 2]>,
}

impl EventCallback {
    /// Create a callback with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a callback with one listener.
    pub fn from_fn(listener: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new().with_listener(listener)
    }

    /// Add a listener (builder pattern).
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn() + Send + Sync + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    /// Add a listener.
    pub fn add_listener(&mut self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Call every listener in order.
    pub fn invoke(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

impl std::fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCallback")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
