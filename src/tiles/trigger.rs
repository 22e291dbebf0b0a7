//! Trigger kinds and tag filters.
//!
//! A record fires for a collider only when its tag filter accepts the
//! collider's tag. How it fires depends on its `TriggerKind`.

use serde::{Deserialize, Serialize};

/// How an event tile reacts to an overlapping collider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// Fire as soon as a matching collider overlaps the tile.
    #[default]
    OnEnterCollision,

    /// Arm while a matching collider overlaps the tile; fire on an
    /// explicit interact action.
    OnInteraction,
}

impl TriggerKind {
    /// Check if this kind has an armed state.
    #[must_use]
    pub const fn is_interaction(self) -> bool {
        matches!(self, TriggerKind::OnInteraction)
    }
}

/// Which collider tag a tile responds to.
///
/// The empty filter accepts every tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagFilter(String);

impl TagFilter {
    /// Label shown for the empty filter.
    pub const ANY_LABEL: &'static str = "<All Tags allowed>";

    /// Accept every tag.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept only `tag`. An empty `tag` accepts every tag.
    pub fn only(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Check if the filter accepts every tag.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// The required tag, or `None` for the empty filter.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        if self.is_any() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// Check if a collider tag passes the filter.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        self.is_any() || self.0 == tag
    }
}

impl From<&str> for TagFilter {
    fn from(tag: &str) -> Self {
        Self::only(tag)
    }
}

impl From<Option<&str>> for TagFilter {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or_else(Self::any, Self::only)
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None => f.write_str(Self::ANY_LABEL),
        }
    }
}
