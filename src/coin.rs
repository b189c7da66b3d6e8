//! Coin tiles
//!
//! Per-cell hover flags, the flip spring for every coin, and the widget that
//! draws a coin at its current rotation.

pub mod coin_render;
mod coin_field;
mod hover_map;
mod spring;

pub use coin_field::CoinField;
pub use coin_render::{Coin, Face};
pub use hover_map::HoverMap;
pub use spring::FlipSpring;

/// One grid slot as seen by a single render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    /// Showing the back face: hovered, or the active traversal cell
    pub flipped: bool,
}

impl Cell {
    pub fn new(index: usize, hovered: bool, active: Option<usize>) -> Self {
        Self {
            index,
            flipped: hovered || active == Some(index),
        }
    }
}

#[cfg(test)]
#[path = "coin/hover_map_tests.rs"]
mod hover_map_tests;


#[cfg(test)]
#[path = "coin/coin_field_tests.rs"]
mod coin_field_tests;
