//! Pixel placement of coin slots
//!
//! Slots are `d x d` with a `d/3` gap, and the whole grid is centered in the
//! viewport.

use super::GridConfig;

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A grid laid out inside a concrete viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    pub config: GridConfig,
    origin_x: f64,
    origin_y: f64,
}

impl GridPlacement {
    pub fn new(config: GridConfig, viewport_width: f64, viewport_height: f64) -> Self {
        let origin_x = (viewport_width - extent(config.columns, config)) / 2.0;
        let origin_y = (viewport_height - extent(config.rows, config)) / 2.0;

        Self {
            config,
            origin_x,
            origin_y,
        }
    }

    /// Bounding box of every slot, without the outer padding
    pub fn grid_rect(&self) -> PixelRect {
        PixelRect::new(
            self.origin_x,
            self.origin_y,
            extent(self.config.columns, self.config),
            extent(self.config.rows, self.config),
        )
    }

    /// Pixel rectangle of the slot at `index`, `None` when out of range
    pub fn slot_rect(&self, index: usize) -> Option<PixelRect> {
        let (row, column) = self.config.position_of(index)?;
        let d = f64::from(self.config.cell_size);
        let pitch = d + self.config.gap();

        Some(PixelRect::new(
            self.origin_x + f64::from(column) * pitch,
            self.origin_y + f64::from(row) * pitch,
            d,
            d,
        ))
    }

    pub fn slots(&self) -> impl Iterator<Item = (usize, PixelRect)> + '_ {
        (0..self.config.total_cells()).filter_map(|i| self.slot_rect(i).map(|r| (i, r)))
    }
}

/// Length of `count` slots separated by gaps
fn extent(count: u32, config: GridConfig) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let d = f64::from(config.cell_size);
    f64::from(count) * d + f64::from(count - 1) * config.gap()
}
