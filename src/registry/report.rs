//! Reconciliation statistics.

use serde::{Deserialize, Serialize};

use crate::core::CellCoord;

/// Outcome of a `sync` or `refresh` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Records created for newly painted cells.
    pub added: usize,

    /// Existing records whose cell is still painted.
    pub kept: usize,

    /// Records pruned because their cell is no longer painted.
    pub removed: usize,

    /// Bounds origin movement since the previous pass, if any.
    pub shift: Option<CellCoord>,
}

impl SyncReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the pass left the registry unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.shift.is_none()
    }
}
