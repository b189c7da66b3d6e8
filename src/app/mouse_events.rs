//! Mouse event dispatcher
//!
//! Routes mouse events to hover and traversal handling based on position.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_hover;

/// Handle mouse events by routing to appropriate handlers
///
/// Anything outside the grid container counts as the pointer leaving it.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.scene.in_container(mouse.column, mouse.row) {
        app.pointer_leave();
        return;
    }

    match mouse.kind {
        MouseEventKind::Moved => {
            mouse_hover::handle_hover(app, mouse);
            handle_pointer_move(app, mouse);
        }
        // Button held: swipe across coins without hover
        MouseEventKind::Down(_) | MouseEventKind::Drag(_) => {
            handle_pointer_move(app, mouse);
        }
        _ => {}
    }
}

/// Re-resolve the active cell from what is drawn under the pointer
fn handle_pointer_move(app: &mut App, mouse: MouseEvent) {
    if app
        .traversal
        .pointer_move(&app.scene, mouse.column, mouse.row)
    {
        app.sync_flips();
        app.mark_dirty();
    }
}
