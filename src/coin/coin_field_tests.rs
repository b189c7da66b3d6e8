//! Tests for the coin field

use std::time::Duration;

use super::*;
use crate::config::AnimationConfig;

#[test]
fn test_resize_grows_and_shrinks() {
    let mut field = CoinField::new();
    assert!(field.is_empty());

    field.resize(50);
    assert_eq!(field.len(), 50);

    field.resize(20);
    assert_eq!(field.len(), 20);
    assert!(field.get(20).is_none());
}

#[test]
fn test_apply_sets_targets() {
    let mut field = CoinField::new();
    field.resize(3);

    field.apply((0..3).map(|i| Cell::new(i, i == 0, Some(2))));

    assert!(field.get(0).unwrap().is_flipped());
    assert!(!field.get(1).unwrap().is_flipped());
    assert!(field.get(2).unwrap().is_flipped());
    assert!(field.is_animating());
}

#[test]
fn test_apply_ignores_unknown_cells() {
    let mut field = CoinField::new();
    field.resize(2);
    field.apply([Cell::new(9, true, None)]);
    assert!(!field.is_animating());
}

#[test]
fn test_tick_until_settled() {
    let params = AnimationConfig::default();
    let mut field = CoinField::new();
    field.resize(4);
    field.apply([Cell::new(1, true, None)]);

    assert!(field.tick(&params, Duration::from_millis(16)));
    for _ in 0..200 {
        field.tick(&params, Duration::from_millis(16));
    }

    assert!(!field.is_animating());
    assert!(!field.tick(&params, Duration::from_millis(16)));
}

#[test]
fn test_regrown_cells_start_face_up() {
    let mut field = CoinField::new();
    field.resize(2);
    field.apply([Cell::new(1, true, None)]);

    field.resize(1);
    field.resize(2);

    assert!(!field.get(1).unwrap().is_flipped());
}

#[test]
fn test_cell_flipped_by_hover_or_active() {
    assert!(!Cell::new(3, false, None).flipped);
    assert!(Cell::new(3, true, None).flipped);
    assert!(Cell::new(3, false, Some(3)).flipped);
    assert!(!Cell::new(3, false, Some(4)).flipped);
    assert!(Cell::new(3, true, Some(4)).flipped);
}
