//! Tests for hover flags

use super::*;

#[test]
fn test_new_map_has_no_hover() {
    let hover = HoverMap::new();
    assert!(!hover.is_hovered(0));
    assert_eq!(hover.hovered().count(), 0);
}

#[test]
fn test_enter_and_leave() {
    let mut hover = HoverMap::new();
    hover.enter(4);
    assert!(hover.is_hovered(4));

    hover.leave(4);
    assert!(!hover.is_hovered(4));
}

#[test]
fn test_set_hovered_moves_between_cells() {
    let mut hover = HoverMap::new();

    assert!(hover.set_hovered(Some(2)));
    assert!(hover.set_hovered(Some(3)));

    assert!(!hover.is_hovered(2));
    assert!(hover.is_hovered(3));
    assert_eq!(hover.hovered().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn test_set_hovered_same_cell_is_no_change() {
    let mut hover = HoverMap::new();
    hover.set_hovered(Some(2));
    assert!(!hover.set_hovered(Some(2)));
}

#[test]
fn test_set_hovered_none_leaves_all() {
    let mut hover = HoverMap::new();
    hover.enter(1);
    hover.enter(5);

    assert!(hover.set_hovered(None));
    assert_eq!(hover.hovered().count(), 0);
    assert!(!hover.set_hovered(None));
}

#[test]
fn test_retain_below_drops_removed_cells() {
    let mut hover = HoverMap::new();
    hover.enter(3);
    hover.enter(30);

    hover.retain_below(20);

    assert!(hover.is_hovered(3));
    assert!(!hover.is_hovered(30));
}

#[test]
fn test_clear_reports_change() {
    let mut hover = HoverMap::new();
    assert!(!hover.clear());
    hover.enter(0);
    assert!(hover.clear());
    assert!(!hover.is_hovered(0));
}

#[test]
fn test_leave_then_enter_again() {
    let mut hover = HoverMap::new();
    hover.enter(2);
    hover.leave(2);
    hover.leave(2);

    assert_eq!(hover.hovered().count(), 0);
    assert!(hover.set_hovered(Some(2)));
    assert_eq!(hover.hovered().collect::<Vec<_>>(), vec![2]);
}
