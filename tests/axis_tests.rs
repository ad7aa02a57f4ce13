//! Axis tests: index/position mapping, sizing with exceptions, hiding,
//! geometry lookups, and state snapshots.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridview::{Axis, GridError, Orientation, AFTER, BEFORE, HEADER};
use test_case::test_case;

fn axis(count: i32) -> Axis {
    let mut a = Axis::new(Orientation::Columns, 100, 20, 30).unwrap();
    a.set_count(count).unwrap();
    a
}

#[test]
fn test_size_clamped_to_minimum_and_body_total() {
    let mut a = axis(10);
    a.set_cell_size(3, 5).unwrap();
    assert_eq!(a.cell_size(3).unwrap(), 20);
    assert_eq!(a.body_px(), 9 * 100 + 20);
}

#[test_case(20, 20 ; "at the minimum")]
#[test_case(21, 21 ; "just above the minimum")]
#[test_case(250, 250 ; "above the default")]
#[test_case(0, 20 ; "zero clamps up")]
fn test_set_cell_size(requested: i32, expected: i32) {
    let mut a = axis(4);
    a.set_cell_size(2, requested).unwrap();
    assert_eq!(a.cell_size(2).unwrap(), expected);
}

#[test]
fn test_explicit_size_equal_to_default_is_kept() {
    let mut a = axis(4);
    a.set_cell_size(1, 100).unwrap();
    assert_eq!(a.state().sizes, vec![(1, 100)]);
}

#[test]
fn test_hide_unhide_round_trip() {
    let mut a = axis(10);
    let baseline = a.body_px();
    a.hide(2).unwrap();
    assert_eq!(a.cell_size(2).unwrap(), 0);
    assert_eq!(a.body_px(), baseline - 100);
    a.unhide(2).unwrap();
    assert_eq!(a.body_px(), baseline);
    // Unhide when not hidden is a no-op.
    a.unhide(2).unwrap();
    assert_eq!(a.body_px(), baseline);
}

#[test]
fn test_header_size_via_sentinel() {
    let a = axis(3);
    assert_eq!(a.cell_size(HEADER).unwrap(), 30);
}

#[test]
fn test_move_position_reorders() {
    let mut a = axis(10);
    a.move_position(0, 5).unwrap();
    assert_eq!(a.index_of_position(5).unwrap(), 0);
    assert_eq!(a.position_of_index(0).unwrap(), 5);
    for p in 0..5 {
        assert_eq!(a.index_of_position(p).unwrap(), p + 1);
    }
    // Self-move is a no-op.
    let before = a.state().order;
    a.move_position(3, 3).unwrap();
    assert_eq!(a.state().order, before);
}

#[test]
fn test_geometry_starts_and_lookup() {
    let mut a = axis(10);
    assert_eq!(a.start_of_position(0, 0).unwrap(), 30);
    assert_eq!(a.start_of_position(3, 0).unwrap(), 30 + 300);
    // The left edge belongs to the cell at that position.
    let edge = a.start_of_position(3, 0).unwrap();
    assert_eq!(a.position_at(edge, 0), 3);
    // Round trip over every position.
    for p in 0..10 {
        let start = a.start_of_position(p, 0).unwrap();
        assert_eq!(a.position_at(start, 0), p);
    }
}

#[test]
fn test_geometry_with_scroll_and_sentinels() {
    let mut a = axis(10);
    assert_eq!(a.start_of_position(3, 100).unwrap(), 230);
    assert_eq!(a.position_at(230, 100), 3);
    assert_eq!(a.position_at(-4, 0), BEFORE);
    assert_eq!(a.position_at(10, 0), HEADER);
    assert_eq!(a.position_at(30 + 1000, 0), AFTER);
}

#[test]
fn test_hidden_cells_are_zero_width() {
    let mut a = axis(10);
    a.hide(1).unwrap();
    assert_eq!(a.start_of_position(1, 0).unwrap(), 130);
    assert_eq!(a.start_of_position(2, 0).unwrap(), 130);
    // The shared edge belongs to the later, visible position.
    assert_eq!(a.position_at(130, 0), 2);
}

#[test]
fn test_size_change_after_cached_lookup() {
    let mut a = axis(10);
    // Warm the cache to the far end, then resize an early column.
    assert_eq!(a.start_of_position(9, 0).unwrap(), 30 + 900);
    a.set_cell_size(1, 40).unwrap();
    assert_eq!(a.start_of_position(9, 0).unwrap(), 30 + 840);
    assert_eq!(a.position_at(30 + 140, 0), 2);
}

#[test]
fn test_visible_walkers_skip_hidden() {
    let mut a = axis(10);
    a.hide(1).unwrap();
    a.hide(2).unwrap();
    assert_eq!(a.next_visible(0), 3);
    assert_eq!(a.prev_visible(3), 0);
    assert_eq!(a.first_visible(), 0);
    a.hide(0).unwrap();
    assert_eq!(a.first_visible(), 3);
    // Fail-soft at the ends.
    assert_eq!(a.next_visible(9), 9);
    assert_eq!(a.prev_visible(3), 3);
}

#[test]
fn test_walkers_on_fully_hidden_axis() {
    let mut a = axis(3);
    for i in 0..3 {
        a.hide(i).unwrap();
    }
    assert_eq!(a.next_visible(1), 1);
    assert_eq!(a.prev_visible(1), 1);
}

#[test]
fn test_default_and_minimum_constrain_each_other() {
    let mut a = axis(4);
    a.set_default_size(10).unwrap();
    assert_eq!(a.minimum_size(), 10);
    a.set_minimum_size(150).unwrap();
    assert_eq!(a.default_size(), 150);
}

#[test]
fn test_minimum_raise_clamps_existing_exceptions() {
    let mut a = axis(4);
    a.set_cell_size(0, 25).unwrap();
    a.set_minimum_size(60).unwrap();
    assert_eq!(a.cell_size(0).unwrap(), 60);
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(
        Axis::new(Orientation::Columns, 5, 10, 0),
        Err(GridError::InvalidConfig(_))
    ));
    assert!(matches!(
        Axis::new(Orientation::Columns, 10, -1, 0),
        Err(GridError::InvalidConfig(_))
    ));
    let mut a = axis(4);
    assert!(a.set_minimum_size(-5).is_err());
    assert!(a.set_default_size(-5).is_err());
    assert!(a.set_header_size(-5).is_err());
    // Axis unchanged after the rejected calls.
    assert_eq!(a.default_size(), 100);
    assert_eq!(a.minimum_size(), 20);
    assert_eq!(a.header_size(), 30);
}

#[test]
fn test_bounds_errors() {
    let mut a = axis(5);
    assert!(matches!(
        a.index_of_position(5),
        Err(GridError::PositionOutOfRange { position: 5, .. })
    ));
    assert!(a.index_of_position(BEFORE).is_err());
    assert!(a.position_of_index(-2).is_err());
    assert!(a.cell_size(5).is_err());
    assert!(a.set_cell_size(-1, 50).is_err());
    assert!(a.hide(5).is_err());
    assert!(a.move_position(0, 5).is_err());
    // The far edge is a valid start query, one past it is not.
    assert!(a.start_of_position(5, 0).is_ok());
    assert!(a.start_of_position(6, 0).is_err());
}

#[test]
fn test_count_shrink_drops_stale_state() {
    let mut a = axis(10);
    a.set_cell_size(8, 50).unwrap();
    a.move_position(9, 0).unwrap();
    a.set_count(5).unwrap();
    assert_eq!(a.body_px(), 500);
    assert!(a.state().sizes.is_empty());
    // Survivors keep their relative order (identity here).
    for p in 0..5 {
        assert_eq!(a.index_of_position(p).unwrap(), p);
    }
}

#[test]
fn test_reset_keeps_configured_sizes() {
    let mut a = axis(10);
    a.move_position(0, 4).unwrap();
    a.hide(2).unwrap();
    a.reset();
    assert_eq!(a.index_of_position(4).unwrap(), 4);
    assert_eq!(a.body_px(), 1000);
    assert_eq!(a.default_size(), 100);
    assert_eq!(a.header_size(), 30);
}

#[test]
fn test_state_snapshot_round_trip() {
    let mut a = axis(10);
    a.move_position(0, 5).unwrap();
    a.set_cell_size(3, 45).unwrap();
    a.hide(7).unwrap();
    let snapshot = a.state();
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: gridview::AxisState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let mut restored = axis(10);
    restored.apply_state(&decoded).unwrap();
    assert_eq!(restored.index_of_position(5).unwrap(), 0);
    assert_eq!(restored.cell_size(3).unwrap(), 45);
    assert!(restored.is_hidden(7).unwrap());
    assert_eq!(restored.body_px(), a.body_px());
}

#[test]
fn test_invalid_snapshots_rejected() {
    let mut a = axis(4);
    let mut bad = a.state();
    bad.order = vec![0, 0];
    assert!(a.apply_state(&bad).is_err());

    let mut too_long = a.state();
    too_long.order = vec![0, 1, 2, 3, 4];
    assert!(a.apply_state(&too_long).is_err());

    let mut bad_size = a.state();
    bad_size.sizes = vec![(9, 50)];
    assert!(a.apply_state(&bad_size).is_err());

    // Axis untouched by the failed applies.
    assert_eq!(a.body_px(), 400);
}
