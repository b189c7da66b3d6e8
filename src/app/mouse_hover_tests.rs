//! Tests for mouse hover handling

use super::*;
use crate::app::app_render_tests::rendered_app;
use crate::test_utils::test_helpers::mouse_moved;

#[test]
fn test_hover_enters_coin() {
    let (mut app, _) = rendered_app();
    app.clear_dirty();

    handle_hover(&mut app, mouse_moved(10, 4));

    assert!(app.hover.is_hovered(0));
    assert!(app.should_render());
}

#[test]
fn test_hover_moves_between_coins() {
    let (mut app, _) = rendered_app();

    handle_hover(&mut app, mouse_moved(10, 4));
    handle_hover(&mut app, mouse_moved(20, 4));

    assert!(!app.hover.is_hovered(0));
    assert!(app.hover.is_hovered(1));
    assert!(!app.coins.get(0).unwrap().is_flipped());
    assert!(app.coins.get(1).unwrap().is_flipped());
}

#[test]
fn test_hover_over_gap_leaves_coin() {
    let (mut app, _) = rendered_app();
    handle_hover(&mut app, mouse_moved(10, 4));

    handle_hover(&mut app, mouse_moved(10, 7));

    assert_eq!(app.hover.hovered().count(), 0);
}

#[test]
fn test_hover_within_same_coin_keeps_single_flag() {
    let (mut app, _) = rendered_app();
    handle_hover(&mut app, mouse_moved(10, 4));
    app.clear_dirty();

    handle_hover(&mut app, mouse_moved(11, 5));

    assert!(app.hover.is_hovered(0));
    assert_eq!(app.hover.hovered().count(), 1);
}

#[test]
fn test_hover_does_not_touch_traversal() {
    let (mut app, _) = rendered_app();
    handle_hover(&mut app, mouse_moved(10, 4));
    assert_eq!(app.traversal.active(), None);
}
