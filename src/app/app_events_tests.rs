//! Tests for top-level event handling

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};

use crate::app::app_render_tests::rendered_app;
use crate::test_utils::test_helpers::{key, key_with_mods, mouse_drag, mouse_moved, test_app};

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_esc_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_other_keys_do_not_quit() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('c')));
    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.should_quit());
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    app.handle_event(Event::Key(release));
    assert!(!app.should_quit());
}

#[test]
fn test_resize_event_recomputes_grid() {
    let mut app = test_app();
    app.handle_event(Event::Resize(128, 49));
    assert_eq!(app.grid.total_cells(), 88);

    app.handle_event(Event::Resize(2, 2));
    assert_eq!(app.grid.total_cells(), 0);
}

#[test]
fn test_moved_over_coin_hovers_and_activates() {
    let (mut app, _) = rendered_app();
    app.handle_event(Event::Mouse(mouse_moved(10, 4)));

    assert_eq!(app.traversal.active(), Some(0));
    assert!(app.hover.is_hovered(0));
    assert!(app.coins.get(0).unwrap().is_flipped());
}

#[test]
fn test_drag_activates_without_hover() {
    let (mut app, _) = rendered_app();
    app.handle_event(Event::Mouse(mouse_drag(20, 5)));

    assert_eq!(app.traversal.active(), Some(1));
    assert!(!app.hover.is_hovered(1));
    assert!(app.cell(1).flipped);
}

#[test]
fn test_drag_across_row_flips_one_coin_at_a_time() {
    let (mut app, _) = rendered_app();

    app.handle_event(Event::Mouse(mouse_drag(10, 4)));
    assert_eq!(app.traversal.active(), Some(0));

    app.handle_event(Event::Mouse(mouse_drag(16, 4)));
    assert_eq!(app.traversal.active(), None);

    app.handle_event(Event::Mouse(mouse_drag(18, 4)));
    assert_eq!(app.traversal.active(), Some(1));
    assert!(!app.coins.get(0).unwrap().is_flipped());
    assert!(app.coins.get(1).unwrap().is_flipped());
}

#[test]
fn test_drag_down_column() {
    let (mut app, _) = rendered_app();
    app.handle_event(Event::Mouse(mouse_drag(10, 10)));
    assert_eq!(app.traversal.active(), Some(11));
}

#[test]
fn test_leaving_container_resets_active_cell() {
    let (mut app, _) = rendered_app();
    app.handle_event(Event::Mouse(mouse_moved(10, 4)));
    assert_eq!(app.traversal.active(), Some(0));

    // Status line row is outside the grid container
    app.handle_event(Event::Mouse(mouse_moved(10, 48)));

    assert_eq!(app.traversal.active(), None);
    assert!(!app.hover.is_hovered(0));
}

#[test]
fn test_focus_lost_resets_active_cell() {
    let (mut app, _) = rendered_app();
    app.handle_event(Event::Mouse(mouse_drag(10, 4)));

    app.handle_event(Event::FocusLost);

    assert_eq!(app.traversal.active(), None);
    assert!(!app.cell(0).flipped);
}

#[test]
fn test_mouse_before_first_render_is_ignored() {
    let mut app = test_app();
    app.handle_event(Event::Mouse(mouse_moved(10, 4)));
    assert_eq!(app.traversal.active(), None);
}
