//! Drag controller tests: resize targeting and averaging, reorder
//! placement and commit, and gesture-state errors.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridview::{
    Axis, GridError, Orientation, ReorderController, ResizeController, SelectionSpan,
};

fn axis(count: i32) -> Axis {
    let mut a = Axis::new(Orientation::Columns, 100, 20, 0).unwrap();
    a.set_count(count).unwrap();
    a
}

fn none_selected() -> SelectionSpan {
    SelectionSpan::Positions(Vec::new())
}

#[test]
fn test_resize_single_line() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    // Grab the far edge of position 3 (at 400px) and drag to 350px.
    ctl.start(&mut a, 3, &none_selected()).unwrap();
    ctl.update(&mut a, 350).unwrap();
    assert_eq!(a.cell_size(3).unwrap(), 50);
    // Dragging again in the same gesture re-derives from scratch.
    ctl.update(&mut a, 420).unwrap();
    assert_eq!(a.cell_size(3).unwrap(), 120);
    ctl.end();
    assert!(!ctl.is_active());
}

#[test]
fn test_resize_clamps_at_minimum() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    ctl.start(&mut a, 3, &none_selected()).unwrap();
    ctl.update(&mut a, 5).unwrap();
    assert_eq!(a.cell_size(3).unwrap(), 20);
}

#[test]
fn test_resize_selection_gets_one_common_size() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    // Positions 1 and 3 selected, dragging the edge of 3: the origin is
    // averaged so both end up the same size.
    let selected = SelectionSpan::Positions(vec![1, 3]);
    ctl.start(&mut a, 3, &selected).unwrap();
    ctl.update(&mut a, 500).unwrap();
    assert_eq!(a.cell_size(1).unwrap(), 150);
    assert_eq!(a.cell_size(3).unwrap(), 150);
    // The geometry agrees: the dragged edge lands where the pointer is.
    assert_eq!(a.start_of_position(4, 0).unwrap(), 500);
}

#[test]
fn test_resize_unselected_anchor_ignores_selection() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    let selected = SelectionSpan::Positions(vec![1, 2]);
    ctl.start(&mut a, 5, &selected).unwrap();
    ctl.update(&mut a, 650).unwrap();
    assert_eq!(a.cell_size(5).unwrap(), 150);
    assert_eq!(a.cell_size(1).unwrap(), 100);
    assert_eq!(a.cell_size(2).unwrap(), 100);
}

#[test]
fn test_resize_all_rewrites_default_size() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    ctl.start(&mut a, 3, &SelectionSpan::All).unwrap();
    ctl.update(&mut a, 600).unwrap();
    assert_eq!(a.default_size(), 150);
    assert_eq!(a.body_px(), 1500);
}

#[test]
fn test_resize_gesture_state_errors() {
    let mut a = axis(10);
    let mut ctl = ResizeController::new();
    assert!(matches!(ctl.update(&mut a, 100), Err(GridError::GestureIdle)));
    ctl.start(&mut a, 2, &none_selected()).unwrap();
    assert!(matches!(
        ctl.start(&mut a, 3, &none_selected()),
        Err(GridError::GestureActive)
    ));
    ctl.end();
    // End is idempotent.
    ctl.end();
    assert!(ctl.start(&mut a, 99, &none_selected()).is_err());
}

#[test]
fn test_reorder_rejects_all_and_empty() {
    let a = axis(10);
    let mut ctl = ReorderController::new();
    assert!(matches!(ctl.start(&a, &SelectionSpan::All), Err(GridError::ReorderAll)));
    assert!(matches!(ctl.start(&a, &none_selected()), Err(GridError::InvalidConfig(_))));
    assert!(!ctl.is_active());
}

#[test]
fn test_reorder_placement_snaps_to_nearest_edge() {
    let mut a = axis(6);
    let mut ctl = ReorderController::new();
    ctl.start(&a, &SelectionSpan::Positions(vec![0])).unwrap();
    // 230 is nearer the 200 edge than the 300 edge.
    ctl.set_placement(&mut a, 230).unwrap();
    assert_eq!(ctl.placement(), Some(2));
    assert_eq!(ctl.marker_px(), Some(200));
    // 280 snaps forward.
    ctl.set_placement(&mut a, 280).unwrap();
    assert_eq!(ctl.placement(), Some(3));
    assert_eq!(ctl.marker_px(), Some(300));
    // Past the end clamps to the final edge.
    ctl.set_placement(&mut a, 5_000).unwrap();
    assert_eq!(ctl.placement(), Some(6));
    // The axis is untouched while previewing.
    for p in 0..6 {
        assert_eq!(a.index_of_position(p).unwrap(), p);
    }
}

#[test]
fn test_reorder_commit_moves_block_left() {
    let mut a = axis(6);
    let mut ctl = ReorderController::new();
    ctl.start(&a, &SelectionSpan::Positions(vec![1, 4])).unwrap();
    ctl.set_placement(&mut a, 0).unwrap();
    let moved = ctl.end(&mut a).unwrap();
    assert_eq!(moved, Some((0, 2)));
    // Non-contiguous drag lands as one block, relative order kept.
    let order: Vec<i32> = (0..6).map(|p| a.index_of_position(p).unwrap()).collect();
    assert_eq!(order, vec![1, 4, 0, 2, 3, 5]);
}

#[test]
fn test_reorder_commit_moves_block_right() {
    let mut a = axis(6);
    let mut ctl = ReorderController::new();
    ctl.start(&a, &SelectionSpan::Positions(vec![0, 1])).unwrap();
    // Insertion edge just before position 4.
    ctl.set_placement(&mut a, 400).unwrap();
    let moved = ctl.end(&mut a).unwrap();
    assert_eq!(moved, Some((2, 2)));
    let order: Vec<i32> = (0..6).map(|p| a.index_of_position(p).unwrap()).collect();
    assert_eq!(order, vec![2, 3, 0, 1, 4, 5]);
}

#[test]
fn test_reorder_without_placement_moves_nothing() {
    let mut a = axis(6);
    let mut ctl = ReorderController::new();
    ctl.start(&a, &SelectionSpan::Positions(vec![2])).unwrap();
    let moved = ctl.end(&mut a).unwrap();
    assert_eq!(moved, None);
    for p in 0..6 {
        assert_eq!(a.index_of_position(p).unwrap(), p);
    }
}

#[test]
fn test_reorder_gesture_state_errors() {
    let mut a = axis(6);
    let mut ctl = ReorderController::new();
    assert!(matches!(ctl.set_placement(&mut a, 100), Err(GridError::GestureIdle)));
    assert!(matches!(ctl.end(&mut a), Err(GridError::GestureIdle)));
    ctl.start(&a, &SelectionSpan::Positions(vec![2])).unwrap();
    assert!(matches!(
        ctl.start(&a, &SelectionSpan::Positions(vec![3])),
        Err(GridError::GestureActive)
    ));
    ctl.end(&mut a).unwrap();
    assert!(!ctl.is_active());
}
