//! Pointer traversal
//!
//! Tracks the single coin currently under a moving or dragging pointer.

mod traversal_state;

pub use traversal_state::PointerTraversal;
