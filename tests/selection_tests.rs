//! Selection model tests: multi-area rectangles, whole-line queries, and
//! anchor/focus re-derivation.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridview::{Axis, CellPos, Orientation, SelectRect, SelectionModel, SelectionSpan, AFTER};

fn axis(count: i32) -> Axis {
    let mut a = Axis::new(Orientation::Rows, 20, 5, 20).unwrap();
    a.set_count(count).unwrap();
    a
}

#[test]
fn test_cell_membership() {
    let mut sel = SelectionModel::new();
    sel.select(2, 2, 4, 4);
    assert!(sel.is_cell_selected(3, 3));
    assert!(sel.is_cell_selected(2, 2));
    assert!(sel.is_cell_selected(4, 4));
    assert!(!sel.is_cell_selected(5, 5));
    assert!(!sel.is_cell_selected(1, 3));
}

#[test]
fn test_partial_column_is_not_column_selected() {
    let rows = axis(10);
    let mut sel = SelectionModel::new();
    sel.select(2, 2, 4, 4);
    assert!(!sel.is_column_selected(3, &rows));
}

#[test]
fn test_select_all_is_one_sentinel_rectangle() {
    let cols = axis(1000);
    let rows = axis(1000);
    let mut sel = SelectionModel::new();
    sel.select(1, 1, 2, 2);
    sel.select_all();
    assert_eq!(sel.areas().len(), 1);
    assert_eq!(sel.areas().first().unwrap().c2, AFTER);
    assert!(sel.is_all_selected(&cols, &rows));
    assert!(sel.is_column_selected(7, &rows));
    assert!(sel.is_row_selected(7, &cols));
}

#[test]
fn test_column_coverage_across_stacked_areas() {
    let rows = axis(10);
    let mut sel = SelectionModel::new();
    sel.select(1, 0, 1, 3);
    sel.select(1, 2, 1, 9);
    // Two overlapping areas together cover every row of column 1.
    assert!(sel.is_column_selected(1, &rows));
    sel.clear();
    sel.select(1, 0, 1, 3);
    assert!(!sel.is_column_selected(1, &rows));
}

#[test]
fn test_coverage_matches_per_cell_queries() {
    let rows = axis(8);
    let mut sel = SelectionModel::new();
    sel.select(0, 0, 2, 5);
    sel.select(2, 4, 3, 7);
    sel.select(5, 0, 5, AFTER);
    for col in 0..6 {
        let expected = (0..8).all(|row| sel.is_cell_selected(col, row));
        assert_eq!(sel.is_column_selected(col, &rows), expected, "column {col}");
    }
}

#[test]
fn test_hidden_rows_do_not_block_column_selection() {
    let mut rows = axis(6);
    rows.hide(5).unwrap();
    let mut sel = SelectionModel::new();
    sel.select(1, 0, 1, 4);
    assert!(sel.is_column_selected(1, &rows));
    rows.unhide(5).unwrap();
    assert!(!sel.is_column_selected(1, &rows));
}

#[test]
fn test_area_count_for_nested_shading() {
    let mut sel = SelectionModel::new();
    sel.select(0, 0, 4, 4);
    sel.select(2, 2, 6, 6);
    sel.select(3, 3, 3, 3);
    assert_eq!(sel.area_count_at(3, 3), 3);
    assert_eq!(sel.area_count_at(2, 2), 2);
    assert_eq!(sel.area_count_at(0, 0), 1);
    assert_eq!(sel.area_count_at(9, 9), 0);
}

#[test]
fn test_update_last_from_anchor_and_focus() {
    let mut sel = SelectionModel::new();
    sel.select(0, 0, 0, 0);
    sel.update_last(CellPos::new(5, 1), CellPos::new(2, 6));
    assert_eq!(
        sel.areas().last().copied().unwrap(),
        SelectRect { c1: 2, r1: 1, c2: 5, r2: 6 }
    );
    // Only the last area is re-derived.
    sel.select(9, 9, 9, 9);
    sel.update_last(CellPos::new(8, 8), CellPos::new(9, 9));
    assert_eq!(sel.areas().len(), 2);
    assert_eq!(sel.areas().first().copied().unwrap(), SelectRect { c1: 2, r1: 1, c2: 5, r2: 6 });
}

#[test]
fn test_update_last_pins_whole_lines() {
    let mut sel = SelectionModel::new();
    sel.select(0, 0, 0, 0);
    // Anchor row pinned at AFTER selects whole columns.
    sel.update_last(CellPos::new(2, AFTER), CellPos::new(5, 3));
    assert_eq!(
        sel.areas().last().copied().unwrap(),
        SelectRect { c1: 2, r1: 0, c2: 5, r2: AFTER }
    );
}

#[test]
fn test_selected_columns_span() {
    let cols = axis(10);
    let rows = axis(10);
    let mut sel = SelectionModel::new();
    sel.select(2, 0, 3, AFTER);
    sel.select(6, 0, 6, 9);
    sel.select(0, 1, 0, 5);
    match sel.selected_columns(&cols, &rows) {
        SelectionSpan::Positions(positions) => assert_eq!(positions, vec![2, 3, 6]),
        SelectionSpan::All => panic!("not everything is selected"),
    }
    sel.select_all();
    assert_eq!(sel.selected_columns(&cols, &rows), SelectionSpan::All);
}

#[test]
fn test_selected_rows_span() {
    let cols = axis(10);
    let rows = axis(10);
    let mut sel = SelectionModel::new();
    sel.select(0, 4, AFTER, 4);
    match sel.selected_rows(&cols, &rows) {
        SelectionSpan::Positions(positions) => assert_eq!(positions, vec![4]),
        SelectionSpan::All => panic!("not everything is selected"),
    }
    assert!(sel.has_row_selection(&cols));
    assert!(!sel.has_column_selection(&rows));
}

#[test]
fn test_normalization_clamps_at_first_cell() {
    let mut sel = SelectionModel::new();
    sel.select(4, 7, 2, -3);
    assert_eq!(
        sel.areas().last().copied().unwrap(),
        SelectRect { c1: 2, r1: 0, c2: 4, r2: 7 }
    );
}
