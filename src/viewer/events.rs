//! Pointer hit testing and the drag-gesture state machine.
//!
//! The host toolkit forwards raw pointer events here; everything else
//! (selection updates, gesture routing, redraw requests) happens inside
//! the view. Hit testing distinguishes header-band edge zones (within
//! [`PROXIMITY`] view pixels of a boundary) from plain header cells, so a
//! press starts the right gesture without the host tracking any state.

use super::GridView;
use crate::error::Result;
use crate::layout::{Axis, CellPos, Orientation, AFTER, FIRST_CELL, HEADER};
use crate::selection::SelectionSpan;

/// Edge-zone width for resize targeting, in view pixels.
pub const PROXIMITY: f32 = 4.0;

/// What a pointer coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The corner header (select all).
    Corner,
    /// A column header cell at the given column position.
    ColumnHeader(i32),
    /// The far edge of the column at the given position (resize zone).
    ColumnEdge(i32),
    /// A row header cell at the given row position.
    RowHeader(i32),
    /// The far edge of the row at the given position (resize zone).
    RowEdge(i32),
    /// A body cell at `(column, row)` position.
    Cell(i32, i32),
    /// Outside every interactive region.
    Outside,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl/Cmd: add a new selection area instead of replacing.
    pub ctrl: bool,
    /// Shift: extend the last selection area from the anchor.
    pub shift: bool,
}

/// What the held pointer button is currently driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PointerMode {
    #[default]
    Idle,
    SelectCells,
    SelectColumns,
    SelectRows,
    Resize(Orientation),
    Reorder(Orientation),
}

impl GridView {
    /// Classify a view-pixel point: corner, header cell, header edge
    /// zone, body cell, or outside.
    pub fn hit_test(&mut self, x: f32, y: f32) -> HitTarget {
        let pos = self.resolve_position(x, y);
        let prox = self.viewport.to_grid(PROXIMITY).max(1);
        match (pos.col, pos.row) {
            (HEADER, HEADER) => HitTarget::Corner,
            (col, HEADER) => {
                let gx = self.viewport.to_grid(x);
                if let Some(edge) =
                    edge_near(&mut self.columns, self.viewport.scroll_x, gx, col, prox)
                {
                    HitTarget::ColumnEdge(edge)
                } else if col >= FIRST_CELL && col != AFTER {
                    HitTarget::ColumnHeader(col)
                } else {
                    HitTarget::Outside
                }
            }
            (HEADER, row) => {
                let gy = self.viewport.to_grid(y);
                if let Some(edge) = edge_near(&mut self.rows, self.viewport.scroll_y, gy, row, prox)
                {
                    HitTarget::RowEdge(edge)
                } else if row >= FIRST_CELL && row != AFTER {
                    HitTarget::RowHeader(row)
                } else {
                    HitTarget::Outside
                }
            }
            (col, row) if CellPos::new(col, row).is_cell() => HitTarget::Cell(col, row),
            _ => HitTarget::Outside,
        }
    }

    /// Pointer button pressed. Starts the gesture the hit target calls
    /// for: corner = select all, header edge = resize, already-selected
    /// header = reorder, header = whole-line selection, cell = rectangle
    /// selection. Ctrl adds a new area; Shift extends the last one.
    ///
    /// # Errors
    /// [`GridError::GestureActive`] when a press arrives while a gesture
    /// is already held; [`GridError::ReorderAll`] when a drag of a
    /// select-all selection is attempted.
    ///
    /// [`GridError::GestureActive`]: crate::error::GridError::GestureActive
    /// [`GridError::ReorderAll`]: crate::error::GridError::ReorderAll
    pub fn pointer_down(&mut self, x: f32, y: f32, mods: Modifiers) -> Result<()> {
        if self.pointer != PointerMode::Idle {
            return Err(crate::error::GridError::GestureActive);
        }
        match self.hit_test(x, y) {
            HitTarget::Corner => {
                self.select_all();
            }
            HitTarget::ColumnEdge(position) => {
                self.begin_resize(Orientation::Columns, position)?;
                self.pointer = PointerMode::Resize(Orientation::Columns);
            }
            HitTarget::RowEdge(position) => {
                self.begin_resize(Orientation::Rows, position)?;
                self.pointer = PointerMode::Resize(Orientation::Rows);
            }
            HitTarget::ColumnHeader(position) => {
                self.header_down(Orientation::Columns, position, mods)?;
            }
            HitTarget::RowHeader(position) => {
                self.header_down(Orientation::Rows, position, mods)?;
            }
            HitTarget::Cell(col, row) => {
                let focus = CellPos::new(col, row);
                if mods.shift && !self.selection.is_empty() {
                    self.focus = focus;
                    self.selection.update_last(self.anchor, focus);
                } else {
                    if !mods.ctrl {
                        self.selection.clear();
                    }
                    self.selection.select(col, row, col, row);
                    self.anchor = focus;
                    self.focus = focus;
                }
                self.pointer = PointerMode::SelectCells;
                self.scheduler.request_full();
            }
            HitTarget::Outside => {}
        }
        Ok(())
    }

    fn header_down(
        &mut self,
        orientation: Orientation,
        position: i32,
        mods: Modifiers,
    ) -> Result<()> {
        let selected = self.whole_line_selection(orientation);
        let already = match &selected {
            SelectionSpan::All => true,
            SelectionSpan::Positions(positions) => positions.contains(&position),
        };
        if already && !mods.ctrl && !mods.shift {
            // Dragging a selected header moves it; the marker only
            // appears once the pointer starts placing.
            self.begin_reorder(orientation)?;
            self.pointer = PointerMode::Reorder(orientation);
            return Ok(());
        }
        match orientation {
            Orientation::Columns => {
                if mods.shift && !self.selection.is_empty() {
                    self.anchor.row = AFTER;
                    self.focus = CellPos::new(position, self.rows.first_visible());
                    self.selection.update_last(self.anchor, self.focus);
                } else {
                    if !mods.ctrl {
                        self.selection.clear();
                    }
                    self.selection.select(position, FIRST_CELL, position, AFTER);
                    self.anchor = CellPos::new(position, AFTER);
                    self.focus = CellPos::new(position, self.rows.first_visible());
                }
                self.pointer = PointerMode::SelectColumns;
            }
            Orientation::Rows => {
                if mods.shift && !self.selection.is_empty() {
                    self.anchor.col = AFTER;
                    self.focus = CellPos::new(self.columns.first_visible(), position);
                    self.selection.update_last(self.anchor, self.focus);
                } else {
                    if !mods.ctrl {
                        self.selection.clear();
                    }
                    self.selection.select(FIRST_CELL, position, AFTER, position);
                    self.anchor = CellPos::new(AFTER, position);
                    self.focus = CellPos::new(self.columns.first_visible(), position);
                }
                self.pointer = PointerMode::SelectRows;
            }
        }
        self.scheduler.request_full();
        Ok(())
    }

    /// Pointer moved. Updates the mouse-cell property and drives the
    /// active drag: live selection extension, live resize, or reorder
    /// marker placement.
    ///
    /// # Errors
    /// Propagates gesture-state errors from the drag controllers.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<()> {
        let pos = self.resolve_position(x, y);
        self.set_mouse(pos);
        match self.pointer {
            PointerMode::Idle => {}
            PointerMode::SelectCells => {
                let focus = CellPos::new(
                    clamp_to_cells(&self.columns, pos.col),
                    clamp_to_cells(&self.rows, pos.row),
                );
                if focus != self.focus {
                    self.focus = focus;
                    self.selection.update_last(self.anchor, focus);
                    self.ensure_visible(focus);
                    self.scheduler.request_full();
                }
            }
            PointerMode::SelectColumns => {
                let col = clamp_to_cells(&self.columns, pos.col);
                if col != self.focus.col {
                    self.focus.col = col;
                    self.selection.update_last(self.anchor, self.focus);
                    self.scheduler.request_full();
                }
            }
            PointerMode::SelectRows => {
                let row = clamp_to_cells(&self.rows, pos.row);
                if row != self.focus.row {
                    self.focus.row = row;
                    self.selection.update_last(self.anchor, self.focus);
                    self.scheduler.request_full();
                }
            }
            PointerMode::Resize(Orientation::Columns) => self.update_resize(x)?,
            PointerMode::Resize(Orientation::Rows) => self.update_resize(y)?,
            PointerMode::Reorder(Orientation::Columns) => self.place_reorder(x)?,
            PointerMode::Reorder(Orientation::Rows) => self.place_reorder(y)?,
        }
        Ok(())
    }

    /// Pointer button released. Finalizes the active gesture: a resize
    /// discards its state (sizes already committed live), a reorder
    /// commits at the last placement.
    ///
    /// # Errors
    /// Propagates gesture-state errors from the reorder commit.
    pub fn pointer_up(&mut self, _x: f32, _y: f32) -> Result<()> {
        match std::mem::take(&mut self.pointer) {
            PointerMode::Resize(_) => self.end_resize(),
            PointerMode::Reorder(_) => self.end_reorder()?,
            _ => {}
        }
        Ok(())
    }
}

/// The position whose far edge lies within `prox` grid pixels of
/// `coord`, if any. A point near the *start* of a position belongs to
/// the previous visible position's far edge; a point just past the last
/// position still grabs its edge.
fn edge_near(axis: &mut Axis, scroll: i64, coord: i64, pos: i32, prox: i64) -> Option<i32> {
    if pos == AFTER {
        if axis.count() == 0 {
            return None;
        }
        let last = axis.last_visible();
        let end = axis.start_of_position(last.saturating_add(1), scroll).ok()?;
        return ((coord - end).abs() <= prox).then_some(last);
    }
    if pos < FIRST_CELL {
        return None;
    }
    let start = axis.start_of_position(pos, scroll).ok()?;
    let end = axis.start_of_position(pos.saturating_add(1), scroll).ok()?;
    if end - coord <= prox {
        return Some(pos);
    }
    if coord - start <= prox {
        let prev = axis.prev_visible(pos);
        if prev < pos {
            return Some(prev);
        }
    }
    None
}

/// Clamp a resolved component to a real cell position for drag
/// selection: off-table sentinels snap to the nearest visible line.
fn clamp_to_cells(axis: &Axis, value: i32) -> i32 {
    if value == AFTER {
        axis.last_visible()
    } else if value < FIRST_CELL {
        axis.first_visible()
    } else {
        value
    }
}
