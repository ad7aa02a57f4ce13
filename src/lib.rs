//! gridview - virtualized grid/table widget core
//!
//! A toolkit-agnostic, scrollable, zoomable spreadsheet-like view over a
//! large external data model:
//! - Stable index ↔ display position mapping with reordering, per-line
//!   pixel sizes, and hide/show
//! - Lazy cumulative-offset geometry with binary-search hit testing
//! - Rectangular multi-area selection
//! - Coalescing dirty-region redraw scheduling (cell/column/row/full)
//! - Resize and reorder drag gestures with live preview
//!
//! The host owns the data store, the event loop, and the pixels: it feeds
//! pointer/keyboard events into [`GridView`], implements [`CellPainter`]
//! over its drawing surface, and drains batched repaints per frame.
//!
//! ```
//! use gridview::{GridModel, GridView};
//!
//! struct Table;
//!
//! impl GridModel for Table {
//!     fn column_count(&self) -> i32 {
//!         26
//!     }
//!     fn row_count(&self) -> i32 {
//!         10_000
//!     }
//!     fn value(&self, col: i32, row: i32) -> String {
//!         format!("{col}:{row}")
//!     }
//! }
//!
//! # fn main() -> gridview::Result<()> {
//! let mut view = GridView::new();
//! view.sync_model(&Table)?;
//! view.scroll_by(0, 400);
//! let pos = view.resolve_position(120.0, 60.0);
//! assert_eq!((pos.col, pos.row), (1, 22));
//! # Ok(())
//! # }
//! ```

pub mod drag;
pub mod editor;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod selection;
pub mod viewer;

pub use drag::{ReorderController, ResizeController};
pub use editor::EditorSession;
pub use error::{GridError, Result};
pub use layout::{
    Axis, AxisState, CellPos, Orientation, Viewport, AFTER, BEFORE, FIRST_CELL, HEADER, INVALID,
};
pub use model::GridModel;
pub use render::{
    CellGeometry, CellKind, CellPainter, CellRect, CellStyle, DefaultStyles, HAlign, PaintSurface,
    RedrawBatch, RedrawScheduler, StyleLookup,
};
pub use selection::{SelectRect, SelectionModel, SelectionSpan};
pub use viewer::{GridView, HitTarget, Modifiers, NavKey, ViewState, PROXIMITY};
