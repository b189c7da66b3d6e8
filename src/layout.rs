//! Layout module for tracking rendered elements
//!
//! This module provides hit testing for position-aware mouse interactions.
//! The `Scene` records every element drawn during a render pass, in paint
//! order, and `resolve_cell()` finds which coin the pointer is over by asking
//! for the topmost element and climbing to its tagged ancestor.

mod layout_hit_test;
mod layout_scene;

pub use layout_hit_test::{SpatialQuery, resolve_cell};
pub use layout_scene::{Element, ElementId, ElementKind, Scene};
