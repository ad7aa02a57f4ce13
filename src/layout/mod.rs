//! Axis model, cumulative-offset geometry, and viewport state.

pub mod axis;
pub(crate) mod geometry;
pub mod viewport;

pub use axis::{Axis, AxisState, CellPos, Orientation, AFTER, BEFORE, FIRST_CELL, HEADER, INVALID};
pub use viewport::{Viewport, MAX_SCALE, MIN_SCALE};
