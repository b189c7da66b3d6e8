//! Column/row count for a viewport
//!
//! Every coin slot takes `4d/3` of linear space (the coin plus a `d/3` gap) and
//! the grid keeps one extra `d/3` of padding, so the count along an axis is the
//! largest `n` with `n * 4d/3 + d/3 <= extent`.

use std::fmt;

/// Viewports narrower than this use the small coin size.
pub const BREAKPOINT_WIDTH: i64 = 640;

/// Coin diameter in pixels below the breakpoint.
pub const SMALL_CELL_SIZE: u32 = 48;

/// Coin diameter in pixels at or above the breakpoint.
pub const LARGE_CELL_SIZE: u32 = 64;

/// Resolved grid dimensions for a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Coin diameter in pixels
    pub cell_size: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridConfig {
    /// Empty grid used before the first viewport measurement
    fn default() -> Self {
        Self {
            cell_size: LARGE_CELL_SIZE,
            columns: 0,
            rows: 0,
        }
    }
}

impl GridConfig {
    /// Compute the grid for a viewport measured in pixels
    ///
    /// Total over all inputs: negative or tiny viewports yield zero columns/rows.
    pub fn compute(viewport_width: i64, viewport_height: i64) -> Self {
        let cell_size = cell_size_for_width(viewport_width);

        Self {
            cell_size,
            columns: slots_along(viewport_width, cell_size),
            rows: slots_along(viewport_height, cell_size),
        }
    }

    /// Number of coins in the grid
    pub fn total_cells(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.total_cells() == 0
    }

    /// Gap between coins, also used as outer padding
    pub fn gap(&self) -> f64 {
        f64::from(self.cell_size) / 3.0
    }

    /// Row-major (row, column) of a cell index, `None` when out of range
    pub fn position_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.total_cells() {
            return None;
        }
        let columns = self.columns as usize;
        Some(((index / columns) as u32, (index % columns) as u32))
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell_size={} columns={} rows={} cells={}",
            self.cell_size,
            self.columns,
            self.rows,
            self.total_cells()
        )
    }
}

fn cell_size_for_width(viewport_width: i64) -> u32 {
    if viewport_width < BREAKPOINT_WIDTH {
        SMALL_CELL_SIZE
    } else {
        LARGE_CELL_SIZE
    }
}

/// `floor((3 * extent / d - 1) / 4)` clamped to zero, in exact integer math
fn slots_along(extent: i64, cell_size: u32) -> u32 {
    let d = i64::from(cell_size);
    let scaled = extent.saturating_mul(3);
    if scaled < d {
        return 0;
    }
    let slots = (scaled - d) / (4 * d);
    u32::try_from(slots).unwrap_or(u32::MAX)
}
