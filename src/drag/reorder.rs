//! Reorder drag gesture.
//!
//! Dragging selected headers shows a live insertion marker without
//! touching the axis; the permutation mutates only on release. The commit
//! replays the drag as repeated single-position moves, tracking the net
//! shift of the insertion edge so the dragged lines land as one
//! contiguous block in their original relative order.

use crate::error::{GridError, Result};
use crate::layout::{Axis, Orientation, AFTER, FIRST_CELL};
use crate::selection::SelectionSpan;

#[derive(Debug)]
struct ReorderDrag {
    orientation: Orientation,
    /// Dragged indices in display order at gesture start.
    indices: Vec<i32>,
    /// Insertion edge in position space (`0..=count`), if placed.
    placement: Option<i32>,
    /// Marker offset in absolute body pixels, if placed.
    marker: i64,
}

/// Drives a header reorder drag with a live preview marker.
#[derive(Debug, Default)]
pub struct ReorderController {
    active: Option<ReorderDrag>,
}

impl ReorderController {
    /// Idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Orientation of the active gesture, if any.
    pub fn orientation(&self) -> Option<Orientation> {
        self.active.as_ref().map(|drag| drag.orientation)
    }

    /// Insertion position of the current preview, if placed.
    pub fn placement(&self) -> Option<i32> {
        self.active.as_ref().and_then(|drag| drag.placement)
    }

    /// Preview marker offset in absolute body pixels, if placed. The
    /// marker line spans the orthogonal extent of the viewport.
    pub fn marker_px(&self) -> Option<i64> {
        let drag = self.active.as_ref()?;
        drag.placement.map(|_| drag.marker)
    }

    /// Begin dragging the given whole-line selection.
    ///
    /// # Errors
    /// [`GridError::GestureActive`] when a gesture is already running;
    /// [`GridError::ReorderAll`] for a select-all selection (moving
    /// everything is a no-op); [`GridError::InvalidConfig`] for an empty
    /// selection; bounds errors for out-of-range positions.
    pub fn start(&mut self, axis: &Axis, selected: &SelectionSpan) -> Result<()> {
        if self.active.is_some() {
            return Err(GridError::GestureActive);
        }
        let positions = match selected {
            SelectionSpan::All => return Err(GridError::ReorderAll),
            SelectionSpan::Positions(positions) if positions.is_empty() => {
                return Err(GridError::InvalidConfig(
                    "reorder requires a non-empty selection".to_string(),
                ));
            }
            SelectionSpan::Positions(positions) => positions,
        };
        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            indices.push(axis.index_of_position(position)?);
        }
        self.active = Some(ReorderDrag {
            orientation: axis.orientation(),
            indices,
            placement: None,
            marker: 0,
        });
        Ok(())
    }

    /// Update the preview insertion edge for the pointer coordinate
    /// (absolute body pixels, clamped by the caller to the visible
    /// header-excluded region). Snaps to the nearest cell edge; the axis
    /// is not mutated.
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no gesture is running.
    pub fn set_placement(&mut self, axis: &mut Axis, pointer: i64) -> Result<()> {
        if self.active.is_none() {
            return Err(GridError::GestureIdle);
        }
        let header = i64::from(axis.header_size());
        let body = pointer.clamp(0, axis.body_px());
        let count = axis.count();
        let position = axis.position_at(body + header, 0);
        let insertion = if position == AFTER || position >= count {
            count
        } else if position < FIRST_CELL {
            FIRST_CELL
        } else {
            let start = axis.start_of_position(position, 0)? - header;
            let end = axis.start_of_position(position.saturating_add(1), 0)? - header;
            if end - body < body - start {
                position.saturating_add(1)
            } else {
                position
            }
        };
        let marker = axis.start_of_position(insertion, 0)? - header;
        if let Some(drag) = &mut self.active {
            drag.placement = Some(insertion);
            drag.marker = marker;
        }
        Ok(())
    }

    /// Commit at the last placement and return to idle.
    ///
    /// Replays the drag as one `move_position` per dragged index, in
    /// display order, against a tracked insertion edge. Returns the final
    /// contiguous block as `(first_position, length)` so the caller can
    /// re-select and focus it, or `None` when the gesture was never
    /// placed (nothing moves).
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no gesture is running; bounds
    /// errors if the axis shrank mid-gesture.
    pub fn end(&mut self, axis: &mut Axis) -> Result<Option<(i32, i32)>> {
        let Some(drag) = self.active.take() else {
            return Err(GridError::GestureIdle);
        };
        let Some(target) = drag.placement else {
            return Ok(None);
        };
        let mut edge = target.min(axis.count());
        for &index in &drag.indices {
            let current = axis.position_of_index(index)?;
            if current < edge {
                axis.move_position(current, edge - 1)?;
            } else {
                axis.move_position(current, edge)?;
                edge = edge.saturating_add(1);
            }
        }
        let len = i32::try_from(drag.indices.len()).unwrap_or_default();
        let first = edge - len;
        log::debug!(
            "{:?} reorder committed: {} line(s) now at positions {}..{}",
            drag.orientation,
            len,
            first,
            edge
        );
        Ok(Some((first, len)))
    }
}
