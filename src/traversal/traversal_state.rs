//! Active cell bookkeeping for pointer traversal

use crate::layout::{SpatialQuery, resolve_cell};

/// The coin the pointer is traversing, if any
///
/// Only one cell is ever active. It is cleared when the pointer leaves the grid
/// container and re-validated whenever the grid is rebuilt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerTraversal {
    active: Option<usize>,
}

impl PointerTraversal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Resolve the pointer position against the last rendered scene
    ///
    /// Returns true when the active cell changed.
    pub fn pointer_move<Q: SpatialQuery>(&mut self, query: &Q, x: u16, y: u16) -> bool {
        let resolved = resolve_cell(query, x, y);
        self.set_active(resolved)
    }

    /// Pointer left the grid container
    pub fn pointer_leave(&mut self) -> bool {
        self.set_active(None)
    }

    /// Drop the active cell if it no longer exists after a grid change
    pub fn revalidate(&mut self, total_cells: usize) -> bool {
        match self.active {
            Some(index) if index >= total_cells => self.set_active(None),
            _ => false,
        }
    }

    fn set_active(&mut self, active: Option<usize>) -> bool {
        if self.active == active {
            return false;
        }

        #[cfg(debug_assertions)]
        log::debug!("Active cell {:?} -> {:?}", self.active, active);

        self.active = active;
        true
    }
}
