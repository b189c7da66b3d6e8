//! Mouse hover handling
//!
//! Keeps the per-coin hover flags in step with the cursor position.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::resolve_cell;

/// Fire leave/enter for the coin under the cursor
pub fn handle_hover(app: &mut App, mouse: MouseEvent) {
    let hovered = resolve_cell(&app.scene, mouse.column, mouse.row);

    if app.hover.set_hovered(hovered) {
        app.sync_flips();
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
