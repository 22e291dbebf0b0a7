//! Collider contacts delivered by the host's physics.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};

/// A moving body entering or leaving the event layer.
///
/// Carries the body's world-space bounds and its tag. Tile tag filters
/// compare against `tag` verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColliderContact {
    /// World-space bounds of the body.
    pub bounds: Rect,

    /// Identifying tag of the body ("Player", "Enemy", ...).
    pub tag: String,
}

impl ColliderContact {
    /// Create a contact from bounds and a tag.
    pub fn new(bounds: Rect, tag: impl Into<String>) -> Self {
        Self {
            bounds,
            tag: tag.into(),
        }
    }

    /// Create a contact for a box centered at `center`.
    pub fn boxed(center: Vec2, size: Vec2, tag: impl Into<String>) -> Self {
        Self::new(Rect::new(center, size), tag)
    }

    /// Move the contact to a new center (builder pattern).
    #[must_use]
    pub fn at(mut self, center: Vec2) -> Self {
        self.bounds.center = center;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_builders() {
        let contact = ColliderContact::boxed(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.5), "Player");
        assert_eq!(contact.tag, "Player");
        assert_eq!(contact.bounds.center, Vec2::new(1.0, 2.0));

        let moved = contact.at(Vec2::new(4.0, 4.0));
        assert_eq!(moved.bounds.center, Vec2::new(4.0, 4.0));
        assert_eq!(moved.bounds.size, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_contact_serialization() {
        let contact = ColliderContact::boxed(Vec2::ZERO, Vec2::ONE, "Enemy");
        let json = serde_json::to_string(&contact).unwrap();
        let deserialized: ColliderContact = serde_json::from_str(&json).unwrap();
        assert_eq!(contact, deserialized);
    }
}
