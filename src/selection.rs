//! Rectangular multi-area selection model.
//!
//! Selection state is an ordered list of rectangles in *position* space.
//! Rectangles may overlap; the count of areas covering a cell is a
//! first-class query used for nested-selection shading. The last-added
//! rectangle is the one live-updated during a drag.

use crate::layout::{Axis, CellPos, AFTER, FIRST_CELL};

/// A normalized selection rectangle (`c1 <= c2`, `r1 <= r2`) in position
/// space. `AFTER` upper bounds mean "to the end of the axis".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectRect {
    /// Leftmost column position.
    pub c1: i32,
    /// Topmost row position.
    pub r1: i32,
    /// Rightmost column position (may be `AFTER`).
    pub c2: i32,
    /// Bottommost row position (may be `AFTER`).
    pub r2: i32,
}

impl SelectRect {
    /// Build a rectangle from two corners, normalized and clamped at
    /// `FIRST_CELL`.
    pub fn normalized(c1: i32, r1: i32, c2: i32, r2: i32) -> Self {
        Self {
            c1: c1.min(c2).max(FIRST_CELL),
            r1: r1.min(r2).max(FIRST_CELL),
            c2: c1.max(c2).max(FIRST_CELL),
            r2: r1.max(r2).max(FIRST_CELL),
        }
    }

    /// Whether the rectangle covers the cell at `(col, row)`.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.c1 && col <= self.c2 && row >= self.r1 && row <= self.r2
    }

    /// Whether the rectangle covers every visible position of `axis` in
    /// its row dimension.
    fn spans_all_rows(&self, rows: &Axis) -> bool {
        self.r1 <= rows.first_visible() && (self.r2 == AFTER || self.r2 >= rows.last_visible())
    }

    /// Whether the rectangle covers every visible position of `axis` in
    /// its column dimension.
    fn spans_all_columns(&self, columns: &Axis) -> bool {
        self.c1 <= columns.first_visible()
            && (self.c2 == AFTER || self.c2 >= columns.last_visible())
    }
}

/// Result of a whole-line selection query: either everything or an
/// explicit set of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSpan {
    /// Every line of the axis is selected.
    All,
    /// The listed positions are selected (sorted, deduplicated).
    Positions(Vec<i32>),
}

/// Ordered list of selection rectangles.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    areas: Vec<SelectRect>,
}

impl SelectionModel {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rectangles, oldest first.
    pub fn areas(&self) -> &[SelectRect] {
        &self.areas
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Remove all rectangles.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Append a rectangle spanning the two corners (normalized, clamped
    /// at `FIRST_CELL`).
    pub fn select(&mut self, c1: i32, r1: i32, c2: i32, r2: i32) {
        self.areas.push(SelectRect::normalized(c1, r1, c2, r2));
    }

    /// Select the entire table with a single sentinel rectangle; cheap,
    /// does not enumerate.
    pub fn select_all(&mut self) {
        self.areas.clear();
        self.areas.push(SelectRect {
            c1: FIRST_CELL,
            r1: FIRST_CELL,
            c2: AFTER,
            r2: AFTER,
        });
    }

    /// Re-derive the last rectangle's bounds from the current
    /// anchor/focus pair (drag selection). An anchor component pinned at
    /// `AFTER` selects whole lines: the bounds in that dimension become
    /// `FIRST_CELL..AFTER`.
    pub fn update_last(&mut self, anchor: CellPos, focus: CellPos) {
        let Some(last) = self.areas.last_mut() else {
            return;
        };
        let (c1, c2) = if anchor.col == AFTER {
            (FIRST_CELL, AFTER)
        } else {
            (anchor.col.min(focus.col), anchor.col.max(focus.col))
        };
        let (r1, r2) = if anchor.row == AFTER {
            (FIRST_CELL, AFTER)
        } else {
            (anchor.row.min(focus.row), anchor.row.max(focus.row))
        };
        *last = SelectRect::normalized(c1, r1, c2, r2);
    }

    /// Whether the cell at `(col, row)` is covered by any rectangle.
    pub fn is_cell_selected(&self, col: i32, row: i32) -> bool {
        self.areas.iter().any(|area| area.contains(col, row))
    }

    /// Number of rectangles covering the cell at `(col, row)`.
    pub fn area_count_at(&self, col: i32, row: i32) -> usize {
        self.areas.iter().filter(|area| area.contains(col, row)).count()
    }

    /// Whether every visible row of column `col` is covered by some
    /// rectangle. On finding coverage the scan skips to the covering
    /// rectangle's far edge instead of re-testing covered positions.
    pub fn is_column_selected(&self, col: i32, rows: &Axis) -> bool {
        let mut row = FIRST_CELL;
        while row < rows.count() {
            if rows.hidden_at(row) {
                row += 1;
                continue;
            }
            let far = self
                .areas
                .iter()
                .filter(|area| area.contains(col, row))
                .map(|area| area.r2)
                .max();
            match far {
                Some(AFTER) => return true,
                Some(edge) => row = edge.saturating_add(1),
                None => return false,
            }
        }
        true
    }

    /// Whether every visible column of row `row` is covered by some
    /// rectangle.
    pub fn is_row_selected(&self, row: i32, columns: &Axis) -> bool {
        let mut col = FIRST_CELL;
        while col < columns.count() {
            if columns.hidden_at(col) {
                col += 1;
                continue;
            }
            let far = self
                .areas
                .iter()
                .filter(|area| area.contains(col, row))
                .map(|area| area.c2)
                .max();
            match far {
                Some(AFTER) => return true,
                Some(edge) => col = edge.saturating_add(1),
                None => return false,
            }
        }
        true
    }

    /// Whether any rectangle selects whole columns (spans every visible
    /// row).
    pub fn has_column_selection(&self, rows: &Axis) -> bool {
        self.areas.iter().any(|area| area.spans_all_rows(rows))
    }

    /// Whether any rectangle selects whole rows (spans every visible
    /// column).
    pub fn has_row_selection(&self, columns: &Axis) -> bool {
        self.areas.iter().any(|area| area.spans_all_columns(columns))
    }

    /// Whether some rectangle covers the whole table.
    pub fn is_all_selected(&self, columns: &Axis, rows: &Axis) -> bool {
        self.areas
            .iter()
            .any(|area| area.spans_all_rows(rows) && area.spans_all_columns(columns))
    }

    /// The fully selected columns: `All` when a rectangle covers the
    /// whole table, otherwise the positions covered by rectangles that
    /// span every visible row.
    pub fn selected_columns(&self, columns: &Axis, rows: &Axis) -> SelectionSpan {
        let mut positions: Vec<i32> = Vec::new();
        for area in &self.areas {
            if !area.spans_all_rows(rows) {
                continue;
            }
            if area.spans_all_columns(columns) {
                return SelectionSpan::All;
            }
            let hi = area.c2.min(columns.count().saturating_sub(1));
            let mut col = area.c1;
            while col <= hi {
                positions.push(col);
                col += 1;
            }
        }
        positions.sort_unstable();
        positions.dedup();
        SelectionSpan::Positions(positions)
    }

    /// The fully selected rows: `All` when a rectangle covers the whole
    /// table, otherwise the positions covered by rectangles that span
    /// every visible column.
    pub fn selected_rows(&self, columns: &Axis, rows: &Axis) -> SelectionSpan {
        let mut positions: Vec<i32> = Vec::new();
        for area in &self.areas {
            if !area.spans_all_columns(columns) {
                continue;
            }
            if area.spans_all_rows(rows) {
                return SelectionSpan::All;
            }
            let hi = area.r2.min(rows.count().saturating_sub(1));
            let mut row = area.r1;
            while row <= hi {
                positions.push(row);
                row += 1;
            }
        }
        positions.sort_unstable();
        positions.dedup();
        SelectionSpan::Positions(positions)
    }
}
