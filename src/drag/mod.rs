//! Drag gesture controllers for resize and reorder.
//!
//! Both are strictly sequential per surface: starting a gesture while one
//! is active is a state error. Cancellation has no dedicated path —
//! resize applies live, and reorder commits to the last placement (a
//! never-placed gesture moves nothing).

pub mod reorder;
pub mod resize;

pub use reorder::ReorderController;
pub use resize::ResizeController;

use crate::selection::SelectionSpan;

/// Positions a gesture applies to, given the current whole-line selection
/// and the anchor under the pointer: `None` means the whole axis;
/// a selection containing the anchor drags as a group, anything else
/// collapses to the anchor alone.
pub(crate) fn gesture_positions(selected: &SelectionSpan, anchor: i32) -> Option<Vec<i32>> {
    match selected {
        SelectionSpan::All => None,
        SelectionSpan::Positions(positions) if positions.contains(&anchor) => {
            Some(positions.clone())
        }
        SelectionSpan::Positions(_) => Some(vec![anchor]),
    }
}
