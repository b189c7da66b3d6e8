//! Flip springs for every coin in the grid

use std::time::Duration;

use super::Cell;
use super::spring::FlipSpring;
use crate::config::AnimationConfig;

/// One spring per grid cell, indexed like the grid
#[derive(Debug, Default, Clone)]
pub struct CoinField {
    springs: Vec<FlipSpring>,
}

impl CoinField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlipSpring> {
        self.springs.get(index)
    }

    /// Match the number of springs to the grid; new coins start face up
    pub fn resize(&mut self, total_cells: usize) {
        self.springs.resize_with(total_cells, FlipSpring::new);
    }

    /// Point every spring at the face its cell should show
    pub fn apply(&mut self, cells: impl IntoIterator<Item = Cell>) {
        for cell in cells {
            if let Some(spring) = self.springs.get_mut(cell.index) {
                spring.set_flipped(cell.flipped);
            }
        }
    }

    /// Advance every spring; returns true while any coin is moving
    pub fn tick(&mut self, params: &AnimationConfig, elapsed: Duration) -> bool {
        let mut animating = false;
        for spring in &mut self.springs {
            animating |= spring.step(params, elapsed);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.springs.iter().any(|spring| !spring.is_at_rest())
    }
}
