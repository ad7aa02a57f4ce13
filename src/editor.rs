//! In-place editing session.
//!
//! At most one editor is open per view, held by the view itself (there is
//! no process-wide "current editor" state). The data store is external
//! and read-only to the core, so committing hands the edited text back to
//! the host, which writes it to the model and reports the change via
//! [`GridView::cell_value_changed`].
//!
//! [`GridView::cell_value_changed`]: crate::viewer::GridView::cell_value_changed

use crate::layout::CellPos;

/// One open in-place edit: the cell being edited and its pending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    cell: CellPos,
    text: String,
}

impl EditorSession {
    pub(crate) fn new(cell: CellPos, text: String) -> Self {
        Self { cell, text }
    }

    /// The cell (position pair) being edited.
    pub fn cell(&self) -> CellPos {
        self.cell
    }

    /// Current pending text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the pending text (called by the host as the user types).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn into_parts(self) -> (CellPos, String) {
        (self.cell, self.text)
    }
}
