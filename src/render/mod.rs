//! Redraw scheduling and the painter boundary.

pub mod painter;
pub mod scheduler;

pub use painter::{
    CellGeometry, CellKind, CellPainter, CellRect, CellStyle, DefaultStyles, HAlign, StyleLookup,
};
pub use scheduler::{PaintSurface, RedrawBatch, RedrawScheduler, DEFAULT_COST_CEILING};
