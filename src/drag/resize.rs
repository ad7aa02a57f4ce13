//! Resize drag gesture.
//!
//! One live state machine per gesture: started from a header edge,
//! updated on every pointer move (changes commit live through the axis),
//! discarded on release. Pointer coordinates are absolute body pixels
//! (unscaled, scroll already applied by the caller).

use crate::drag::gesture_positions;
use crate::error::{GridError, Result};
use crate::layout::{Axis, Orientation, FIRST_CELL};
use crate::selection::SelectionSpan;

/// What a resize drag applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResizeTarget {
    /// The listed indices (single line or the current multi-selection);
    /// every one receives the same resulting size.
    Indices(Vec<i32>),
    /// The whole axis: the drag rewrites the default size.
    All,
}

#[derive(Debug)]
struct ResizeDrag {
    orientation: Orientation,
    target: ResizeTarget,
    /// Pixel origin such that `(pointer - origin) / divisor` is the new
    /// per-line size.
    origin: i64,
    /// Count of affected positions at or before the anchor.
    divisor: i64,
}

/// Drives live size changes while a header-edge drag is held.
#[derive(Debug, Default)]
pub struct ResizeController {
    active: Option<ResizeDrag>,
}

impl ResizeController {
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

    /// Begin a resize at the far edge of `anchor_position`.
    ///
    /// `selected` is the current whole-line selection on this axis: `All`
    /// resizes every line (rewriting the default size); a position set
    /// containing the anchor resizes the whole selection to one common
    /// size; otherwise only the anchor's line is resized. The pixel
    /// origin is averaged over the affected positions at or before the
    /// anchor so the drag yields one proportional size.
    ///
    /// # Errors
    /// [`GridError::GestureActive`] when a gesture is already running;
    /// bounds error for an out-of-range anchor.
    pub fn start(
        &mut self,
        axis: &mut Axis,
        anchor_position: i32,
        selected: &SelectionSpan,
    ) -> Result<()> {
        if self.active.is_some() {
            return Err(GridError::GestureActive);
        }
        if anchor_position < FIRST_CELL || anchor_position >= axis.count() {
            return Err(GridError::PositionOutOfRange {
                position: anchor_position,
                low: FIRST_CELL,
                high: axis.count(),
            });
        }
        let header = i64::from(axis.header_size());
        let edge = axis.start_of_position(anchor_position.saturating_add(1), 0)? - header;

        let drag = match gesture_positions(selected, anchor_position) {
            None => {
                // Whole axis: sizes before the anchor are exactly the
                // cumulative offset, so the origin collapses to 0.
                ResizeDrag {
                    orientation: axis.orientation(),
                    target: ResizeTarget::All,
                    origin: 0,
                    divisor: i64::from(anchor_position) + 1,
                }
            }
            Some(positions) => {
                let mut indices = Vec::with_capacity(positions.len());
                let mut before = 0i64;
                let mut span = 0i64;
                for &position in &positions {
                    let index = axis.index_of_position(position)?;
                    indices.push(index);
                    if position <= anchor_position {
                        before += 1;
                        span += i64::from(axis.cell_size(index)?);
                    }
                }
                ResizeDrag {
                    orientation: axis.orientation(),
                    target: ResizeTarget::Indices(indices),
                    origin: edge - span,
                    divisor: before.max(1),
                }
            }
        };
        self.active = Some(drag);
        Ok(())
    }

    /// Recompute and commit sizes for the current pointer coordinate.
    /// Re-entrant: called on every pointer move without changing state.
    /// The caller is responsible for the follow-up full redraw and scroll
    /// re-clamp (the body extent changed).
    ///
    /// # Errors
    /// [`GridError::GestureIdle`] when no gesture is running.
    pub fn update(&mut self, axis: &mut Axis, pointer: i64) -> Result<()> {
        let Some(drag) = &self.active else {
            return Err(GridError::GestureIdle);
        };
        let raw = (pointer - drag.origin) / drag.divisor;
        let size = i32::try_from(raw.max(0)).unwrap_or(i32::MAX);
        match &drag.target {
            ResizeTarget::All => axis.set_default_size(size)?,
            ResizeTarget::Indices(indices) => {
                for &index in indices {
                    axis.set_cell_size(index, size)?;
                }
            }
        }
        Ok(())
    }

    /// Finish the gesture. Changes were already committed live, so this
    /// only discards state; a no-op when idle.
    pub fn end(&mut self) {
        self.active = None;
    }
}
