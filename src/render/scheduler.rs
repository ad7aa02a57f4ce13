//! Dirty-region redraw scheduling.
//!
//! Redraw requests (full / per-cell / per-column / per-row) arriving
//! between two executions coalesce into a single batch. The scheduler
//! never paints by itself: the `Idle -> PendingBatch` transition fires a
//! host-registered hook exactly once, and the host later drains the batch
//! with [`RedrawScheduler::flush`] and dispatches it against a
//! [`PaintSurface`] on its next paint tick.

use std::collections::BTreeSet;

/// Repaint operations a batch dispatches to. Implemented by the host
/// surface (or an adapter that resolves geometry and paints cells).
pub trait PaintSurface {
    /// Repaint everything.
    fn paint_all(&mut self);
    /// Repaint a single cell at `(col, row)` position.
    fn paint_cell(&mut self, col: i32, row: i32);
    /// Repaint a whole column: its header segment plus all visible body
    /// cells, clipped to the viewport.
    fn paint_column(&mut self, col: i32);
    /// Repaint a whole row: its header segment plus all visible body
    /// cells, clipped to the viewport.
    fn paint_row(&mut self, row: i32);
}

/// Relative repaint cost of one cell.
const CELL_COST: u32 = 1;
/// Relative repaint cost of one row.
const ROW_COST: u32 = 5;
/// Relative repaint cost of one column.
const COLUMN_COST: u32 = 20;

/// Default accumulated-cost ceiling beyond which a batch escalates to one
/// full repaint. A tuned heuristic: past this, granular bookkeeping costs
/// more than repainting everything.
pub const DEFAULT_COST_CEILING: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchState {
    Idle,
    PendingBatch,
}

/// A drained set of pending redraw requests, ready to dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedrawBatch {
    /// Repaint everything, discarding the granular sets.
    pub full: bool,
    /// Requested cells as `(col, row)` positions.
    pub cells: BTreeSet<(i32, i32)>,
    /// Requested columns.
    pub columns: BTreeSet<i32>,
    /// Requested rows.
    pub rows: BTreeSet<i32>,
}

impl RedrawBatch {
    /// Execute the batch: each logical request is satisfied exactly once
    /// by the cheapest covering operation (cell < column/row < full).
    pub fn dispatch(&self, surface: &mut dyn PaintSurface) {
        if self.full {
            surface.paint_all();
            return;
        }
        for &(col, row) in &self.cells {
            if self.columns.contains(&col) || self.rows.contains(&row) {
                continue;
            }
            surface.paint_cell(col, row);
        }
        for &col in &self.columns {
            surface.paint_column(col);
        }
        for &row in &self.rows {
            surface.paint_row(row);
        }
    }
}

/// Coalescing redraw scheduler for one canvas surface.
pub struct RedrawScheduler {
    state: BatchState,
    full: bool,
    cells: BTreeSet<(i32, i32)>,
    columns: BTreeSet<i32>,
    rows: BTreeSet<i32>,
    cost: u32,
    cost_ceiling: u32,
    schedule: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for RedrawScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawScheduler")
            .field("state", &self.state)
            .field("full", &self.full)
            .field("cells", &self.cells.len())
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("cost", &self.cost)
            .finish()
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawScheduler {
    /// Scheduler with the default cost ceiling.
    pub fn new() -> Self {
        Self::with_cost_ceiling(DEFAULT_COST_CEILING)
    }

    /// Scheduler with an explicit escalation ceiling.
    pub fn with_cost_ceiling(cost_ceiling: u32) -> Self {
        Self {
            state: BatchState::Idle,
            full: false,
            cells: BTreeSet::new(),
            columns: BTreeSet::new(),
            rows: BTreeSet::new(),
            cost: 0,
            cost_ceiling,
            schedule: None,
        }
    }

    /// Register the hook fired once per `Idle -> PendingBatch` transition.
    /// The host is expected to arrange one deferred [`flush`] call per
    /// firing (e.g. request an animation frame).
    ///
    /// [`flush`]: RedrawScheduler::flush
    pub fn set_schedule_hook(&mut self, hook: impl FnMut() + 'static) {
        self.schedule = Some(Box::new(hook));
    }

    /// Whether a batch is pending execution.
    pub fn is_pending(&self) -> bool {
        self.state == BatchState::PendingBatch
    }

    fn arm(&mut self) {
        if self.state == BatchState::PendingBatch {
            return;
        }
        self.state = BatchState::PendingBatch;
        if let Some(hook) = &mut self.schedule {
            hook();
        }
    }

    /// Request a full repaint, subsuming all finer-grained requests.
    pub fn request_full(&mut self) {
        self.full = true;
        self.arm();
    }

    /// Request a repaint of the cell at `(col, row)` position.
    pub fn request_cell(&mut self, col: i32, row: i32) {
        if !self.full && self.cells.insert((col, row)) {
            self.cost = self.cost.saturating_add(CELL_COST);
        }
        self.arm();
    }

    /// Request a repaint of a whole column.
    pub fn request_column(&mut self, col: i32) {
        if !self.full && self.columns.insert(col) {
            self.cost = self.cost.saturating_add(COLUMN_COST);
        }
        self.arm();
    }

    /// Request a repaint of a whole row.
    pub fn request_row(&mut self, row: i32) {
        if !self.full && self.rows.insert(row) {
            self.cost = self.cost.saturating_add(ROW_COST);
        }
        self.arm();
    }

    /// Drain the pending batch and return to `Idle`. Returns `None` when
    /// nothing is pending. Escalates to a full repaint when one was
    /// requested or the accumulated cost exceeded the ceiling.
    pub fn flush(&mut self) -> Option<RedrawBatch> {
        if self.state == BatchState::Idle {
            return None;
        }
        let escalate = self.full || self.cost > self.cost_ceiling;
        if escalate && !self.full {
            log::debug!(
                "redraw batch escalated to full (cost {} > ceiling {})",
                self.cost,
                self.cost_ceiling
            );
        }
        let batch = RedrawBatch {
            full: escalate,
            cells: if escalate { BTreeSet::new() } else { std::mem::take(&mut self.cells) },
            columns: if escalate { BTreeSet::new() } else { std::mem::take(&mut self.columns) },
            rows: if escalate { BTreeSet::new() } else { std::mem::take(&mut self.rows) },
        };
        self.cells.clear();
        self.columns.clear();
        self.rows.clear();
        self.full = false;
        self.cost = 0;
        self.state = BatchState::Idle;
        Some(batch)
    }
}
