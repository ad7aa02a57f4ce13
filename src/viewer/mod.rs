//! The owning view aggregate.
//!
//! [`GridView`] exclusively owns both axes, the viewport, the selection
//! model, the redraw scheduler, the drag controllers, and the editor
//! session. The host toolkit holds the view, feeds pointer and keyboard
//! events in ([`events`]), and drains batched repaints through
//! [`GridView::flush_redraws`] with its own [`CellPainter`]. No component
//! holds a reference back to the view; the scheduler's one-shot hook is
//! the only outward callback.

mod events;
mod scroll;

pub use events::{HitTarget, Modifiers, PROXIMITY};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::drag::{ReorderController, ResizeController};
use crate::editor::EditorSession;
use crate::error::{GridError, Result};
use crate::layout::{
    Axis, AxisState, CellPos, Orientation, Viewport, AFTER, BEFORE, FIRST_CELL, HEADER, INVALID,
};
use crate::model::GridModel;
use crate::render::{
    CellGeometry, CellKind, CellPainter, CellRect, PaintSurface, RedrawScheduler, StyleLookup,
};
use crate::selection::{SelectionModel, SelectionSpan};

use events::PointerMode;
use scroll::ScrollAnimation;

/// Keyboard navigation commands, mapped by the host from its key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Previous visible column.
    Left,
    /// Next visible column.
    Right,
    /// Previous visible row.
    Up,
    /// Next visible row.
    Down,
    /// First visible column.
    Home,
    /// Last visible column.
    End,
    /// One viewport height up, landing on the nearest fully visible row.
    PageUp,
    /// One viewport height down, landing on the nearest fully visible row.
    PageDown,
}

/// Persistable view state: both axis snapshots plus scroll and zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Column axis snapshot.
    pub columns: AxisState,
    /// Row axis snapshot.
    pub rows: AxisState,
    /// Horizontal scroll offset in unscaled grid pixels.
    pub scroll_x: i64,
    /// Vertical scroll offset in unscaled grid pixels.
    pub scroll_y: i64,
    /// Zoom factor.
    pub scale: f32,
}

/// The interactive grid widget core.
#[derive(Debug)]
pub struct GridView {
    pub(crate) columns: Axis,
    pub(crate) rows: Axis,
    pub(crate) viewport: Viewport,
    pub(crate) selection: SelectionModel,
    pub(crate) scheduler: RedrawScheduler,
    pub(crate) resize: ResizeController,
    pub(crate) reorder: ReorderController,
    editor: Option<EditorSession>,
    /// Per-column cell kinds keyed by column *index*; default is text.
    column_kinds: HashMap<i32, CellKind>,
    pub(crate) focus: CellPos,
    pub(crate) anchor: CellPos,
    pub(crate) mouse: CellPos,
    pub(crate) pointer: PointerMode,
    pub(crate) scroll_anim: Option<ScrollAnimation>,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// View with spreadsheet-style axis defaults and an empty model
    /// (counts stay 0 until [`GridView::sync_model`]).
    pub fn new() -> Self {
        Self {
            columns: Axis::columns(),
            rows: Axis::rows(),
            viewport: Viewport::new(),
            selection: SelectionModel::new(),
            scheduler: RedrawScheduler::new(),
            resize: ResizeController::new(),
            reorder: ReorderController::new(),
            editor: None,
            column_kinds: HashMap::new(),
            focus: CellPos::new(INVALID, INVALID),
            anchor: CellPos::new(INVALID, INVALID),
            mouse: CellPos::new(INVALID, INVALID),
            pointer: PointerMode::Idle,
            scroll_anim: None,
        }
    }

    /// The column axis.
    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    /// The row axis.
    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    /// The viewport (scroll, extent, zoom).
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The selection model.
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    // ------------------------------------------------------------------
    // Model sync

    /// Pull the current counts from the data model. Shrinking truncates
    /// the axes (dropping stale ordering and size overrides), clamps the
    /// position properties, closes an out-of-range editor, and re-clamps
    /// scroll.
    ///
    /// # Errors
    /// Propagates [`GridError::InvalidConfig`] for negative counts.
    pub fn sync_model(&mut self, model: &dyn GridModel) -> Result<()> {
        let cols = model.column_count();
        let rows = model.row_count();
        if cols == self.columns.count() && rows == self.rows.count() {
            return Ok(());
        }
        self.columns.set_count(cols)?;
        self.rows.set_count(rows)?;
        self.focus = self.clamp_pos(self.focus);
        self.anchor = self.clamp_pos(self.anchor);
        self.mouse = self.clamp_pos(self.mouse);
        if let Some(open) = &self.editor {
            let cell = open.cell();
            if cell.col >= cols || cell.row >= rows {
                self.editor = None;
            }
        }
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
        Ok(())
    }

    /// Report a content change in the cell at the given data *indices*;
    /// schedules a repaint of the cell at its current display position.
    ///
    /// # Errors
    /// Bounds error for out-of-range indices.
    pub fn cell_value_changed(&mut self, col_index: i32, row_index: i32) -> Result<()> {
        let col = self.columns.position_of_index(col_index)?;
        let row = self.rows.position_of_index(row_index)?;
        self.scheduler.request_cell(col, row);
        Ok(())
    }

    fn clamp_pos(&self, pos: CellPos) -> CellPos {
        CellPos::new(
            clamp_component(&self.columns, pos.col),
            clamp_component(&self.rows, pos.row),
        )
    }

    // ------------------------------------------------------------------
    // Position properties

    /// The focus cell.
    pub fn focus(&self) -> CellPos {
        self.focus
    }

    /// The select-anchor cell (the fixed corner of a drag selection).
    pub fn anchor(&self) -> CellPos {
        self.anchor
    }

    /// The cell currently under the pointer.
    pub fn mouse_cell(&self) -> CellPos {
        self.mouse
    }

    /// Move the focus cell; the old and new cells are scheduled for
    /// repaint.
    ///
    /// # Errors
    /// Bounds error when a component is neither a sentinel nor within
    /// `[HEADER, count)`.
    pub fn set_focus(&mut self, pos: CellPos) -> Result<()> {
        self.check_property(pos)?;
        if pos == self.focus {
            return Ok(());
        }
        let old = self.focus;
        self.focus = pos;
        self.request_cell_if_real(old);
        self.request_cell_if_real(pos);
        Ok(())
    }

    /// Move the select-anchor cell.
    ///
    /// # Errors
    /// Bounds error as in [`GridView::set_focus`].
    pub fn set_anchor(&mut self, pos: CellPos) -> Result<()> {
        self.check_property(pos)?;
        self.anchor = pos;
        Ok(())
    }

    pub(crate) fn set_mouse(&mut self, pos: CellPos) {
        if pos == self.mouse {
            return;
        }
        let old = self.mouse;
        self.mouse = pos;
        self.request_cell_if_real(old);
        self.request_cell_if_real(pos);
    }

    fn check_property(&self, pos: CellPos) -> Result<()> {
        check_property_component(&self.columns, pos.col)?;
        check_property_component(&self.rows, pos.row)
    }

    fn request_cell_if_real(&mut self, pos: CellPos) {
        if pos.is_cell() {
            self.scheduler.request_cell(pos.col, pos.row);
        }
    }

    // ------------------------------------------------------------------
    // Coordinate resolution

    /// Resolve a view-pixel point to a `(column, row)` position pair.
    /// Either component may be a sentinel: `BEFORE` left/above the
    /// widget, `HEADER` inside a header band, `AFTER` past the last cell.
    pub fn resolve_position(&mut self, x: f32, y: f32) -> CellPos {
        let gx = self.viewport.to_grid(x);
        let gy = self.viewport.to_grid(y);
        CellPos::new(
            self.columns.position_at(gx, self.viewport.scroll_x),
            self.rows.position_at(gy, self.viewport.scroll_y),
        )
    }

    /// View-space rectangle of the cell at `(col, row)`; either component
    /// may be `HEADER`. Width/height are 0 for hidden or fully
    /// scrolled-past cells, which painters must skip.
    ///
    /// # Errors
    /// Bounds error for sentinel or out-of-range positions other than
    /// `HEADER`.
    pub fn cell_rect(&mut self, col: i32, row: i32) -> Result<CellRect> {
        resolve_cell_rect(&mut self.columns, &mut self.rows, &self.viewport, col, row)
    }

    // ------------------------------------------------------------------
    // Selection

    /// Append a selection rectangle (normalized, clamped at the first
    /// cell) and schedule a repaint.
    pub fn select(&mut self, c1: i32, r1: i32, c2: i32, r2: i32) {
        self.selection.select(c1, r1, c2, r2);
        self.scheduler.request_full();
    }

    /// Select the entire table.
    pub fn select_all(&mut self) {
        self.selection.select_all();
        self.anchor = CellPos::new(AFTER, AFTER);
        self.scheduler.request_full();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.scheduler.request_full();
        }
    }

    pub(crate) fn whole_line_selection(&self, orientation: Orientation) -> SelectionSpan {
        match orientation {
            Orientation::Columns => self.selection.selected_columns(&self.columns, &self.rows),
            Orientation::Rows => self.selection.selected_rows(&self.columns, &self.rows),
        }
    }

    // ------------------------------------------------------------------
    // Keyboard navigation

    /// Apply a navigation key: moves the focus along visible positions,
    /// re-derives the selection (extending when `extend` is set, e.g.
    /// Shift held), and scrolls the focus into view.
    pub fn navigate(&mut self, key: NavKey, extend: bool) {
        if self.columns.count() == 0 || self.rows.count() == 0 {
            return;
        }
        let mut focus = if self.focus.is_cell() {
            self.focus
        } else {
            CellPos::new(self.columns.first_visible(), self.rows.first_visible())
        };
        match key {
            NavKey::Left => focus.col = self.columns.prev_visible(focus.col),
            NavKey::Right => focus.col = self.columns.next_visible(focus.col),
            NavKey::Up => focus.row = self.rows.prev_visible(focus.row),
            NavKey::Down => focus.row = self.rows.next_visible(focus.row),
            NavKey::Home => focus.col = self.columns.first_visible(),
            NavKey::End => focus.col = self.columns.last_visible(),
            NavKey::PageUp => focus.row = self.page_jump(-1),
            NavKey::PageDown => focus.row = self.page_jump(1),
        }
        self.focus_and_reselect(focus, extend);
    }

    pub(crate) fn focus_and_reselect(&mut self, focus: CellPos, extend: bool) {
        self.focus = focus;
        if extend && !self.selection.is_empty() {
            self.selection.update_last(self.anchor, focus);
        } else {
            self.anchor = focus;
            self.selection.clear();
            self.selection.select(focus.col, focus.row, focus.col, focus.row);
        }
        self.ensure_visible(focus);
        self.scheduler.request_full();
    }

    /// Scroll one viewport height in `direction` and return the row at
    /// the top of the hypothetical new viewport, adjusted forward when it
    /// would be only partially visible.
    fn page_jump(&mut self, direction: i64) -> i32 {
        let header = i64::from(self.rows.header_size());
        let page = (self.viewport.grid_height() - header).max(1);
        let max = (self.rows.body_px() - page).max(0);
        let target = (self.viewport.scroll_y + direction * page).clamp(0, max);
        let mut row = self.rows.position_at(header, target);
        if row < FIRST_CELL {
            row = self.rows.first_visible();
        } else if row == AFTER {
            row = self.rows.last_visible();
        } else if let Ok(start) = self.rows.start_of_position(row, target) {
            if start < header {
                row = self.rows.next_visible(row);
            }
        }
        self.scroll_to(self.viewport.scroll_x, target);
        row
    }

    // ------------------------------------------------------------------
    // Zoom

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.viewport.scale
    }

    /// Set the zoom factor (clamped to the supported range). Scroll is
    /// re-clamped because the grid-pixel extent of the viewport changed.
    pub fn set_zoom(&mut self, scale: f32) {
        let old = self.viewport.scale;
        self.viewport.set_scale(scale);
        if (self.viewport.scale - old).abs() > f32::EPSILON {
            log::debug!("zoom {} -> {}", old, self.viewport.scale);
            self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
            self.scheduler.request_full();
        }
    }

    /// Resize the viewport (view pixels).
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
    }

    // ------------------------------------------------------------------
    // Axis configuration pass-throughs

    /// Set a column's width (data index, unscaled pixels).
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn set_column_width(&mut self, col_index: i32, width: i32) -> Result<()> {
        self.columns.set_cell_size(col_index, width)?;
        self.after_layout_change();
        Ok(())
    }

    /// Set a row's height (data index, unscaled pixels).
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn set_row_height(&mut self, row_index: i32, height: i32) -> Result<()> {
        self.rows.set_cell_size(row_index, height)?;
        self.after_layout_change();
        Ok(())
    }

    /// Hide a column by data index.
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn hide_column(&mut self, col_index: i32) -> Result<()> {
        self.columns.hide(col_index)?;
        self.after_layout_change();
        Ok(())
    }

    /// Restore a hidden column.
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn unhide_column(&mut self, col_index: i32) -> Result<()> {
        self.columns.unhide(col_index)?;
        self.after_layout_change();
        Ok(())
    }

    /// Hide a row by data index.
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn hide_row(&mut self, row_index: i32) -> Result<()> {
        self.rows.hide(row_index)?;
        self.after_layout_change();
        Ok(())
    }

    /// Restore a hidden row.
    ///
    /// # Errors
    /// Bounds error for an out-of-range index.
    pub fn unhide_row(&mut self, row_index: i32) -> Result<()> {
        self.rows.unhide(row_index)?;
        self.after_layout_change();
        Ok(())
    }

    /// Move the column displayed at `old_position` to `new_position`.
    ///
    /// # Errors
    /// Bounds error for out-of-range positions.
    pub fn move_column(&mut self, old_position: i32, new_position: i32) -> Result<()> {
        self.columns.move_position(old_position, new_position)?;
        self.scheduler.request_full();
        Ok(())
    }

    /// Move the row displayed at `old_position` to `new_position`.
    ///
    /// # Errors
    /// Bounds error for out-of-range positions.
    pub fn move_row(&mut self, old_position: i32, new_position: i32) -> Result<()> {
        self.rows.move_position(old_position, new_position)?;
        self.scheduler.request_full();
        Ok(())
    }

    /// Register the cell kind for a column (by data index), replacing
    /// per-draw type dispatch with a one-time registration.
    pub fn set_column_kind(&mut self, col_index: i32, kind: CellKind) {
        self.column_kinds.insert(col_index, kind);
    }

    fn after_layout_change(&mut self) {
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
    }

    // ------------------------------------------------------------------
    // Drag gestures

    /// Begin a resize drag at the far edge of `anchor_position` on the
    /// given axis. The resize targets the whole-line selection when it
    /// contains the anchor, the whole axis when everything is selected,
    /// and the single line otherwise.
    ///
    /// # Errors
    /// [`GridError::GestureActive`] when a gesture is already running;
    /// bounds error for an out-of-range anchor.
    pub fn begin_resize(&mut self, orientation: Orientation, anchor_position: i32) -> Result<()> {
        if self.reorder.is_active() {
            return Err(GridError::GestureActive);
        }
        let selected = self.whole_line_selection(orientation);
        match orientation {
            Orientation::Columns => {
                self.resize.start(&mut self.columns, anchor_position, &selected)
            }
            Orientation::Rows => self.resize.start(&mut self.rows, anchor_position, &selected),
        }
    }

    /// Update the active resize drag for a pointer coordinate along the
    /// drag axis (view pixels). Commits live and schedules a full
    /// repaint.
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no resize is running.
    pub fn update_resize(&mut self, view_coord: f32) -> Result<()> {
        let Some(orientation) = self.resize.orientation() else {
            return Err(GridError::GestureIdle);
        };
        let pointer = self.body_coord(orientation, view_coord);
        match orientation {
            Orientation::Columns => self.resize.update(&mut self.columns, pointer)?,
            Orientation::Rows => self.resize.update(&mut self.rows, pointer)?,
        }
        self.after_layout_change();
        Ok(())
    }

    /// Finish the active resize drag (sizes were committed live).
    pub fn end_resize(&mut self) {
        self.resize.end();
    }

    /// Begin a reorder drag of the current whole-line selection on the
    /// given axis. Re-selects exactly the dragged lines as full-span
    /// rectangles.
    ///
    /// # Errors
    /// [`GridError::GestureActive`] when a gesture is already running;
    /// [`GridError::ReorderAll`] when everything is selected;
    /// [`GridError::InvalidConfig`] when nothing is selected.
    pub fn begin_reorder(&mut self, orientation: Orientation) -> Result<()> {
        if self.resize.is_active() {
            return Err(GridError::GestureActive);
        }
        let selected = self.whole_line_selection(orientation);
        match orientation {
            Orientation::Columns => self.reorder.start(&self.columns, &selected)?,
            Orientation::Rows => self.reorder.start(&self.rows, &selected)?,
        }
        if let SelectionSpan::Positions(positions) = &selected {
            self.selection.clear();
            for &p in positions {
                match orientation {
                    Orientation::Columns => self.selection.select(p, FIRST_CELL, p, AFTER),
                    Orientation::Rows => self.selection.select(FIRST_CELL, p, AFTER, p),
                }
            }
        }
        self.scheduler.request_full();
        Ok(())
    }

    /// Update the reorder preview marker for a pointer coordinate along
    /// the drag axis (view pixels), clamped to the visible body region.
    /// The axis is not mutated.
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no reorder is running.
    pub fn place_reorder(&mut self, view_coord: f32) -> Result<()> {
        let Some(orientation) = self.reorder.orientation() else {
            return Err(GridError::GestureIdle);
        };
        let pointer = self.body_coord(orientation, view_coord);
        let (scroll, extent, header) = match orientation {
            Orientation::Columns => (
                self.viewport.scroll_x,
                self.viewport.grid_width(),
                i64::from(self.columns.header_size()),
            ),
            Orientation::Rows => (
                self.viewport.scroll_y,
                self.viewport.grid_height(),
                i64::from(self.rows.header_size()),
            ),
        };
        let visible_span = (extent - header).max(0);
        let clamped = pointer.clamp(scroll, scroll + visible_span);
        match orientation {
            Orientation::Columns => self.reorder.set_placement(&mut self.columns, clamped)?,
            Orientation::Rows => self.reorder.set_placement(&mut self.rows, clamped)?,
        }
        self.scheduler.request_full();
        Ok(())
    }

    /// Commit the active reorder at its last placement. The moved block
    /// is re-selected as full-span rectangles and receives the focus.
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no reorder is running.
    pub fn end_reorder(&mut self) -> Result<()> {
        let Some(orientation) = self.reorder.orientation() else {
            return Err(GridError::GestureIdle);
        };
        let moved = match orientation {
            Orientation::Columns => self.reorder.end(&mut self.columns)?,
            Orientation::Rows => self.reorder.end(&mut self.rows)?,
        };
        if let Some((first, len)) = moved {
            self.selection.clear();
            let last = first.saturating_add(len - 1);
            match orientation {
                Orientation::Columns => {
                    for p in first..=last {
                        self.selection.select(p, FIRST_CELL, p, AFTER);
                    }
                    self.focus = CellPos::new(first, self.rows.first_visible());
                    self.anchor = CellPos::new(first, AFTER);
                }
                Orientation::Rows => {
                    for p in first..=last {
                        self.selection.select(FIRST_CELL, p, AFTER, p);
                    }
                    self.focus = CellPos::new(self.columns.first_visible(), first);
                    self.anchor = CellPos::new(AFTER, first);
                }
            }
        }
        self.scheduler.request_full();
        Ok(())
    }

    /// The reorder preview marker, as the view-space coordinate of the
    /// insertion edge along the drag axis, if a reorder is placed.
    pub fn reorder_marker(&self) -> Option<(Orientation, f32)> {
        let orientation = self.reorder.orientation()?;
        let marker = self.reorder.marker_px()?;
        let (scroll, header) = match orientation {
            Orientation::Columns => (self.viewport.scroll_x, self.columns.header_size()),
            Orientation::Rows => (self.viewport.scroll_y, self.rows.header_size()),
        };
        Some((orientation, self.viewport.to_view(marker + i64::from(header) - scroll)))
    }

    /// Pointer coordinate in absolute body pixels along `orientation`
    /// (unscaled, scroll applied).
    fn body_coord(&self, orientation: Orientation, view_coord: f32) -> i64 {
        match orientation {
            Orientation::Columns => {
                self.viewport.to_grid(view_coord) - i64::from(self.columns.header_size())
                    + self.viewport.scroll_x
            }
            Orientation::Rows => {
                self.viewport.to_grid(view_coord) - i64::from(self.rows.header_size())
                    + self.viewport.scroll_y
            }
        }
    }

    // ------------------------------------------------------------------
    // Editor session

    /// Open an in-place editor on the focus cell, capturing its current
    /// value. An already-open session is discarded first (its cell is
    /// repainted).
    ///
    /// # Errors
    /// Bounds error when the focus is not a real cell.
    pub fn begin_edit(&mut self, model: &dyn GridModel) -> Result<()> {
        if self.focus.col < FIRST_CELL || self.focus.col >= self.columns.count() {
            return Err(GridError::PositionOutOfRange {
                position: self.focus.col,
                low: FIRST_CELL,
                high: self.columns.count(),
            });
        }
        if self.focus.row < FIRST_CELL || self.focus.row >= self.rows.count() {
            return Err(GridError::PositionOutOfRange {
                position: self.focus.row,
                low: FIRST_CELL,
                high: self.rows.count(),
            });
        }
        if let Some(open) = self.editor.take() {
            self.request_cell_if_real(open.cell());
        }
        let col_index = self.columns.index_of_position(self.focus.col)?;
        let row_index = self.rows.index_of_position(self.focus.row)?;
        let value = model.value(col_index, row_index);
        self.editor = Some(EditorSession::new(self.focus, value));
        self.scheduler.request_cell(self.focus.col, self.focus.row);
        Ok(())
    }

    /// The open editor session, if any.
    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    /// Mutable access to the open editor session (for text updates).
    pub fn editor_mut(&mut self) -> Option<&mut EditorSession> {
        self.editor.as_mut()
    }

    /// Close the editor and hand `(cell, text)` back to the host, which
    /// owns the data store. Returns `None` when no editor is open.
    pub fn commit_edit(&mut self) -> Option<(CellPos, String)> {
        let session = self.editor.take()?;
        let (cell, text) = session.into_parts();
        self.request_cell_if_real(cell);
        Some((cell, text))
    }

    /// Close the editor, discarding its pending text. Returns whether an
    /// editor was open.
    pub fn cancel_edit(&mut self) -> bool {
        match self.editor.take() {
            Some(session) => {
                self.request_cell_if_real(session.cell());
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Redraw

    /// Register the hook fired when the first redraw request of a batch
    /// arrives; the host arranges one deferred [`GridView::flush_redraws`]
    /// call per firing.
    pub fn set_redraw_hook(&mut self, hook: impl FnMut() + 'static) {
        self.scheduler.set_schedule_hook(hook);
    }

    /// Whether a redraw batch is pending.
    pub fn has_pending_redraw(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Request a full repaint.
    pub fn request_redraw(&mut self) {
        self.scheduler.request_full();
    }

    /// Request a repaint of one cell (position pair).
    pub fn request_cell_redraw(&mut self, col: i32, row: i32) {
        self.scheduler.request_cell(col, row);
    }

    /// Request a repaint of a whole column (position).
    pub fn request_column_redraw(&mut self, col: i32) {
        self.scheduler.request_column(col);
    }

    /// Request a repaint of a whole row (position).
    pub fn request_row_redraw(&mut self, row: i32) {
        self.scheduler.request_row(row);
    }

    /// Drain the pending redraw batch and paint it: cells not covered by
    /// a requested column/row first, then whole columns, then whole rows,
    /// all clipped to the viewport; a full batch repaints headers and
    /// every visible cell. Returns `false` when nothing was pending.
    pub fn flush_redraws(
        &mut self,
        model: &dyn GridModel,
        styles: &dyn StyleLookup,
        painter: &mut dyn CellPainter,
    ) -> bool {
        let Some(batch) = self.scheduler.flush() else {
            return false;
        };
        let mut surface = ViewSurface {
            columns: &mut self.columns,
            rows: &mut self.rows,
            viewport: &self.viewport,
            selection: &self.selection,
            kinds: &self.column_kinds,
            model,
            styles,
            painter,
        };
        batch.dispatch(&mut surface);
        true
    }

    // ------------------------------------------------------------------
    // Snapshots

    /// Snapshot the axis states, scroll, and zoom for host-side
    /// persistence.
    pub fn state(&self) -> ViewState {
        ViewState {
            columns: self.columns.state(),
            rows: self.rows.state(),
            scroll_x: self.viewport.scroll_x,
            scroll_y: self.viewport.scroll_y,
            scale: self.viewport.scale,
        }
    }

    /// Restore a snapshot produced by [`GridView::state`]. Axis snapshots
    /// are validated against the current counts; scroll and zoom are
    /// clamped. The view is left unchanged on error.
    ///
    /// # Errors
    /// [`GridError::InvalidConfig`] for an invalid axis snapshot.
    pub fn apply_state(&mut self, state: &ViewState) -> Result<()> {
        let mut columns = self.columns.clone();
        let mut rows = self.rows.clone();
        columns.apply_state(&state.columns)?;
        rows.apply_state(&state.rows)?;
        self.columns = columns;
        self.rows = rows;
        self.viewport.set_scale(state.scale);
        self.viewport.scroll_x = state.scroll_x;
        self.viewport.scroll_y = state.scroll_y;
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
        Ok(())
    }
}

fn check_property_component(axis: &Axis, value: i32) -> Result<()> {
    let sentinel = value == INVALID || value == AFTER || value == BEFORE;
    if sentinel || (value >= HEADER && value < axis.count()) {
        return Ok(());
    }
    Err(GridError::PositionOutOfRange {
        position: value,
        low: HEADER,
        high: axis.count(),
    })
}

fn clamp_component(axis: &Axis, value: i32) -> i32 {
    if value >= FIRST_CELL && value != AFTER && value >= axis.count() {
        if axis.count() == 0 {
            return INVALID;
        }
        return axis.last_visible();
    }
    value
}

/// Span of one position along an axis: clamped view-relative start (grid
/// pixels) and width. The header band is fixed at the origin; body cells
/// are clipped against it.
fn axis_span(axis: &mut Axis, scroll: i64, pos: i32) -> Result<(i64, i64)> {
    if pos == HEADER {
        return Ok((0, i64::from(axis.header_size())));
    }
    let header = i64::from(axis.header_size());
    let start = axis.start_of_position(pos, scroll)?.max(header);
    let end = axis
        .start_of_position(pos.saturating_add(1), scroll)?
        .max(header);
    Ok((start, (end - start).max(0)))
}

pub(crate) fn resolve_cell_rect(
    columns: &mut Axis,
    rows: &mut Axis,
    viewport: &Viewport,
    col: i32,
    row: i32,
) -> Result<CellRect> {
    let (x, w) = axis_span(columns, viewport.scroll_x, col)?;
    let (y, h) = axis_span(rows, viewport.scroll_y, row)?;
    Ok(CellRect {
        x: viewport.to_view(x),
        y: viewport.to_view(y),
        width: viewport.to_view(w),
        height: viewport.to_view(h),
    })
}

/// Visible positions of one axis given the current scroll, in display
/// order, hidden positions skipped.
fn visible_positions(axis: &mut Axis, scroll: i64, extent: i64) -> Vec<i32> {
    let mut out = Vec::new();
    let header = i64::from(axis.header_size());
    let mut p = axis.position_at(header, scroll);
    if p < FIRST_CELL || p == AFTER {
        return out;
    }
    while p < axis.count() {
        let Ok(start) = axis.start_of_position(p, scroll) else {
            break;
        };
        if start >= extent {
            break;
        }
        if !axis.hidden_at(p) {
            out.push(p);
        }
        p = p.saturating_add(1);
    }
    out
}

/// Adapter that resolves geometry and styles for a [`RedrawBatch`]
/// dispatch, painting through the host's [`CellPainter`].
///
/// [`RedrawBatch`]: crate::render::RedrawBatch
struct ViewSurface<'a> {
    columns: &'a mut Axis,
    rows: &'a mut Axis,
    viewport: &'a Viewport,
    selection: &'a SelectionModel,
    kinds: &'a HashMap<i32, CellKind>,
    model: &'a dyn GridModel,
    styles: &'a dyn StyleLookup,
    painter: &'a mut dyn CellPainter,
}

impl ViewSurface<'_> {
    fn visible_cols(&mut self) -> Vec<i32> {
        visible_positions(self.columns, self.viewport.scroll_x, self.viewport.grid_width())
    }

    fn visible_rows(&mut self) -> Vec<i32> {
        visible_positions(self.rows, self.viewport.scroll_y, self.viewport.grid_height())
    }

    fn paint_one_cell(&mut self, col: i32, row: i32) {
        let Ok(rect) = resolve_cell_rect(self.columns, self.rows, self.viewport, col, row) else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let Ok(col_index) = self.columns.index_of_position(col) else {
            return;
        };
        let Ok(row_index) = self.rows.index_of_position(row) else {
            return;
        };
        let mut style = self.styles.cell_style(col_index, row_index);
        style.selection_depth = self.selection.area_count_at(col, row);
        let kind = self.kinds.get(&col_index).copied().unwrap_or_default();
        let value = self.model.value(col_index, row_index);
        let geometry = CellGeometry { pos: CellPos::new(col, row), rect };
        self.painter.clear(rect);
        self.painter.paint_cell(&geometry, &style, kind, &value);
    }

    fn paint_column_header(&mut self, col: i32) {
        let Ok(rect) = resolve_cell_rect(self.columns, self.rows, self.viewport, col, HEADER)
        else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let Ok(index) = self.columns.index_of_position(col) else {
            return;
        };
        let selected = self.selection.is_column_selected(col, self.rows);
        let geometry = CellGeometry { pos: CellPos::new(col, HEADER), rect };
        self.painter.paint_header(&geometry, &self.model.column_label(index), selected);
    }

    fn paint_row_header(&mut self, row: i32) {
        let Ok(rect) = resolve_cell_rect(self.columns, self.rows, self.viewport, HEADER, row)
        else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let Ok(index) = self.rows.index_of_position(row) else {
            return;
        };
        let selected = self.selection.is_row_selected(row, self.columns);
        let geometry = CellGeometry { pos: CellPos::new(HEADER, row), rect };
        self.painter.paint_header(&geometry, &self.model.row_label(index), selected);
    }

    fn paint_corner(&mut self) {
        let Ok(rect) = resolve_cell_rect(self.columns, self.rows, self.viewport, HEADER, HEADER)
        else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let selected = self.selection.is_all_selected(self.columns, self.rows);
        let geometry = CellGeometry { pos: CellPos::new(HEADER, HEADER), rect };
        self.painter.paint_header(&geometry, "", selected);
    }
}

impl PaintSurface for ViewSurface<'_> {
    fn paint_all(&mut self) {
        let cols = self.visible_cols();
        let rows = self.visible_rows();
        self.paint_corner();
        for &col in &cols {
            self.paint_column_header(col);
        }
        for &row in &rows {
            self.paint_row_header(row);
        }
        for &row in &rows {
            for &col in &cols {
                self.paint_one_cell(col, row);
            }
        }
    }

    fn paint_cell(&mut self, col: i32, row: i32) {
        self.paint_one_cell(col, row);
    }

    fn paint_column(&mut self, col: i32) {
        self.paint_column_header(col);
        let rows = self.visible_rows();
        for &row in &rows {
            self.paint_one_cell(col, row);
        }
    }

    fn paint_row(&mut self, row: i32) {
        self.paint_row_header(row);
        let cols = self.visible_cols();
        for &col in &cols {
            self.paint_one_cell(col, row);
        }
    }
}
