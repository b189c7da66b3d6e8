//! Hover flags keyed by cell index

use std::collections::HashSet;

/// Which coins the mouse is currently over
///
/// Keyed by cell index so flags survive re-rendering; entries past the end of
/// a shrunken grid are dropped by `retain_below`.
#[derive(Debug, Default, Clone)]
pub struct HoverMap {
    hovered: HashSet<usize>,
}

impl HoverMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.contains(&index)
    }

    /// Mouse entered the coin at `index`
    pub fn enter(&mut self, index: usize) {
        self.hovered.insert(index);
    }

    /// Mouse left the coin at `index`
    pub fn leave(&mut self, index: usize) {
        self.hovered.remove(&index);
    }

    /// Move the mouse to `index` (or off every coin), firing leave/enter pairs
    ///
    /// Returns true when any flag changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let before = self.hovered.len();
        self.hovered.retain(|&hovered| Some(hovered) == index);
        let mut changed = self.hovered.len() != before;

        if let Some(index) = index {
            changed |= self.hovered.insert(index);
        }
        changed
    }

    /// Indices currently hovered, in no particular order
    pub fn hovered(&self) -> impl Iterator<Item = usize> + '_ {
        self.hovered.iter().copied()
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.hovered.is_empty();
        self.hovered.clear();
        changed
    }

    /// Forget flags for cells that no longer exist
    pub fn retain_below(&mut self, total_cells: usize) {
        self.hovered.retain(|&index| index < total_cells);
    }
}
