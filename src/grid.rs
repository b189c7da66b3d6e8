//! Grid layout engine
//!
//! Derives how many coins fit in the viewport (`GridConfig`) and where each
//! coin slot lands in pixel space (`GridPlacement`).

mod grid_config;
mod grid_placement;

pub use grid_config::{BREAKPOINT_WIDTH, GridConfig, LARGE_CELL_SIZE, SMALL_CELL_SIZE};
pub use grid_placement::{GridPlacement, PixelRect};
