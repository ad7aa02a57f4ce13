//! Per-dimension axis model: index↔position mapping and pixel sizing.
//!
//! An [`Axis`] describes one dimension (columns or rows) of the grid. It
//! maps stable data *indices* to mutable display *positions* through a
//! lazily materialized permutation, tracks per-index pixel sizes with
//! override exceptions (a negative stored value encodes "hidden"), and
//! owns the cumulative-offset cache used for coordinate lookups.
//!
//! The index→position direction is a linear scan and documented as the
//! slower one; iteration should prefer positions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::geometry::OffsetCache;
use crate::error::{GridError, Result};

/// Marker for "no position/index at all" (failed lookups).
pub const INVALID: i32 = i32::MIN;
/// Off-table sentinel before the header band.
pub const BEFORE: i32 = i32::MIN + 1;
/// The header band occupies this pseudo-position.
pub const HEADER: i32 = -1;
/// First real cell position.
pub const FIRST_CELL: i32 = 0;
/// Off-table sentinel past the last cell.
pub const AFTER: i32 = i32::MAX;

/// Which dimension an axis describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal axis (column positions, x coordinates).
    Columns,
    /// Vertical axis (row positions, y coordinates).
    Rows,
}

/// A `(column, row)` pair in position space.
///
/// Either component may be a sentinel (`HEADER`, `BEFORE`, `AFTER`,
/// `INVALID`). Plain value type, copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPos {
    /// Column position.
    pub col: i32,
    /// Row position.
    pub row: i32,
}

impl CellPos {
    /// Create a position pair.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True when both components are real cell positions (no sentinels).
    pub fn is_cell(&self) -> bool {
        self.col >= FIRST_CELL && self.col != AFTER && self.row >= FIRST_CELL && self.row != AFTER
    }
}

/// Convert a bounds-checked position/index to a vector slot.
fn slot(value: i32) -> usize {
    usize::try_from(value).unwrap_or_default()
}

/// Persistable axis state: display order, size overrides, and sizing
/// parameters. Produced by [`Axis::state`], restored (with validation) by
/// [`Axis::apply_state`]. The count is owned by the data model and is not
/// part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisState {
    /// Permutation prefix, position → index.
    pub order: Vec<i32>,
    /// Size overrides as `(index, stored_size)`; negative = hidden.
    pub sizes: Vec<(i32, i32)>,
    /// Default cell size in unscaled pixels.
    pub default_size: i32,
    /// Minimum cell size in unscaled pixels.
    pub minimum_size: i32,
    /// Header band size in unscaled pixels.
    pub header_size: i32,
}

/// One dimension of the grid: ordering, sizing, and geometry.
#[derive(Debug, Clone)]
pub struct Axis {
    orientation: Orientation,
    /// Number of indices; owned by the data model, synced via [`Axis::set_count`].
    count: i32,
    /// Permutation prefix, position → index. Positions beyond the prefix
    /// map to themselves (identity).
    order: Vec<i32>,
    /// Per-index size overrides. Negative stored value = hidden, true
    /// size is the magnitude.
    size_exceptions: HashMap<i32, i32>,
    default_size: i32,
    minimum_size: i32,
    header_size: i32,
    /// Cached body pixel total; dropped on any size/count mutation.
    body_px: Option<i64>,
    starts: OffsetCache,
}

impl Axis {
    /// Create an axis with explicit sizing parameters.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] when `minimum_size` is
    /// negative, `default_size < minimum_size`, or `header_size` is
    /// negative. The count starts at 0 until synced from the model.
    pub fn new(
        orientation: Orientation,
        default_size: i32,
        minimum_size: i32,
        header_size: i32,
    ) -> Result<Self> {
        if minimum_size < 0 {
            return Err(GridError::InvalidConfig(format!(
                "minimum size {minimum_size} is negative"
            )));
        }
        if default_size < minimum_size {
            return Err(GridError::InvalidConfig(format!(
                "default size {default_size} below minimum {minimum_size}"
            )));
        }
        if header_size < 0 {
            return Err(GridError::InvalidConfig(format!(
                "header size {header_size} is negative"
            )));
        }
        Ok(Self {
            orientation,
            count: 0,
            order: Vec::new(),
            size_exceptions: HashMap::new(),
            default_size,
            minimum_size,
            header_size,
            body_px: None,
            starts: OffsetCache::default(),
        })
    }

    /// Column axis with spreadsheet-style defaults (64px cells, 40px
    /// row-header band).
    pub fn columns() -> Self {
        Self {
            orientation: Orientation::Columns,
            count: 0,
            order: Vec::new(),
            size_exceptions: HashMap::new(),
            default_size: 64,
            minimum_size: 8,
            header_size: 40,
            body_px: None,
            starts: OffsetCache::default(),
        }
    }

    /// Row axis with spreadsheet-style defaults (20px cells, 20px
    /// column-header band).
    pub fn rows() -> Self {
        Self {
            orientation: Orientation::Rows,
            count: 0,
            order: Vec::new(),
            size_exceptions: HashMap::new(),
            default_size: 20,
            minimum_size: 8,
            header_size: 20,
            body_px: None,
            starts: OffsetCache::default(),
        }
    }

    /// Which dimension this axis describes.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current index count (synced from the data model).
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Default cell size in unscaled pixels.
    pub fn default_size(&self) -> i32 {
        self.default_size
    }

    /// Minimum cell size in unscaled pixels.
    pub fn minimum_size(&self) -> i32 {
        self.minimum_size
    }

    /// Header band size in unscaled pixels.
    pub fn header_size(&self) -> i32 {
        self.header_size
    }

    /// Sync the count from the data model.
    ///
    /// Shrinking drops permutation entries and size exceptions for indices
    /// past the new count; surviving permutation entries keep their
    /// relative order, so the bijection-prefix invariant holds. Growing
    /// leaves the cached geometry prefix valid.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] for a negative count.
    pub fn set_count(&mut self, count: i32) -> Result<()> {
        if count < 0 {
            return Err(GridError::InvalidConfig(format!("count {count} is negative")));
        }
        if count == self.count {
            return Ok(());
        }
        if count < self.count {
            let before = self.order.len();
            self.order.retain(|&index| index < count);
            self.size_exceptions.retain(|&index, _| index < count);
            self.starts.clear();
            log::debug!(
                "{:?} axis shrunk {} -> {} (order entries {} -> {})",
                self.orientation,
                self.count,
                count,
                before,
                self.order.len()
            );
        }
        self.body_px = None;
        self.count = count;
        Ok(())
    }

    /// Clear the permutation, all size exceptions, and the caches.
    /// Configured default/minimum/header sizes are kept.
    pub fn reset(&mut self) {
        self.order.clear();
        self.size_exceptions.clear();
        self.starts.clear();
        self.body_px = None;
    }

    fn check_position(&self, position: i32) -> Result<()> {
        if position < HEADER || position >= self.count {
            return Err(GridError::PositionOutOfRange {
                position,
                low: HEADER,
                high: self.count,
            });
        }
        Ok(())
    }

    fn check_cell_position(&self, position: i32) -> Result<()> {
        if position < FIRST_CELL || position >= self.count {
            return Err(GridError::PositionOutOfRange {
                position,
                low: FIRST_CELL,
                high: self.count,
            });
        }
        Ok(())
    }

    fn check_cell_index(&self, index: i32) -> Result<()> {
        if index < FIRST_CELL || index >= self.count {
            return Err(GridError::IndexOutOfRange {
                index,
                low: FIRST_CELL,
                high: self.count,
            });
        }
        Ok(())
    }

    /// Index displayed at `position`. O(1).
    ///
    /// # Errors
    /// Bounds error outside `[HEADER, count)`.
    pub fn index_of_position(&self, position: i32) -> Result<i32> {
        self.check_position(position)?;
        if position == HEADER {
            return Ok(HEADER);
        }
        Ok(self.order.get(slot(position)).copied().unwrap_or(position))
    }

    /// Position at which `index` is displayed. O(n) — prefer iterating
    /// positions and using [`Axis::index_of_position`].
    ///
    /// # Errors
    /// Bounds error outside `[HEADER, count)`.
    pub fn position_of_index(&self, index: i32) -> Result<i32> {
        self.check_position(index)?;
        if index == HEADER {
            return Ok(HEADER);
        }
        if slot(index) >= self.order.len() {
            return Ok(index);
        }
        for (position, &i) in self.order.iter().enumerate() {
            if i == index {
                return Ok(i32::try_from(position).unwrap_or(AFTER));
            }
        }
        // The prefix is a permutation of [0, len), so an in-prefix index is
        // always found above; identity keeps the bijection if it is not.
        Ok(index)
    }

    /// Move the index displayed at `old_position` so it is displayed at
    /// `new_position`. The sole reordering primitive; no-op when equal.
    ///
    /// # Errors
    /// Bounds error when either position is outside `[FIRST_CELL, count)`.
    pub fn move_position(&mut self, old_position: i32, new_position: i32) -> Result<()> {
        self.check_cell_position(old_position)?;
        self.check_cell_position(new_position)?;
        if old_position == new_position {
            return Ok(());
        }
        let needed = slot(old_position.max(new_position)) + 1;
        while self.order.len() < needed {
            let next = i32::try_from(self.order.len()).unwrap_or(AFTER);
            self.order.push(next);
        }
        let index = self.order.remove(slot(old_position));
        self.order.insert(slot(new_position), index);
        self.starts.truncate_after(slot(old_position.min(new_position)));
        Ok(())
    }

    fn effective_size(&self, index: i32) -> i32 {
        match self.size_exceptions.get(&index) {
            Some(&stored) if stored < 0 => 0,
            Some(&stored) => stored,
            None => self.default_size,
        }
    }

    fn stored_true_size(&self, index: i32) -> i32 {
        self.size_exceptions
            .get(&index)
            .map_or(self.default_size, |&stored| stored.abs())
    }

    /// Effective pixel size of `index`. The header sentinel yields the
    /// header band size; hidden indices yield 0.
    ///
    /// # Errors
    /// Bounds error outside `[HEADER, count)`.
    pub fn cell_size(&self, index: i32) -> Result<i32> {
        if index == HEADER {
            return Ok(self.header_size);
        }
        self.check_cell_index(index)?;
        Ok(self.effective_size(index))
    }

    /// Whether `index` is hidden.
    ///
    /// # Errors
    /// Bounds error outside `[FIRST_CELL, count)`.
    pub fn is_hidden(&self, index: i32) -> Result<bool> {
        self.check_cell_index(index)?;
        Ok(self.size_exceptions.get(&index).is_some_and(|&s| s < 0))
    }

    /// Whether the index displayed at `position` is hidden. Out-of-range
    /// positions report `false`.
    pub fn hidden_at(&self, position: i32) -> bool {
        if position < FIRST_CELL || position >= self.count {
            return false;
        }
        let index = self.order.get(slot(position)).copied().unwrap_or(position);
        self.size_exceptions.get(&index).is_some_and(|&s| s < 0)
    }

    /// Set the pixel size of `index`, clamped to the minimum size. Always
    /// records an override, preserving explicit-size intent even when the
    /// value equals the default. Unhides a hidden index.
    ///
    /// # Errors
    /// Bounds error outside `[FIRST_CELL, count)`.
    pub fn set_cell_size(&mut self, index: i32, size: i32) -> Result<()> {
        self.check_cell_index(index)?;
        let clamped = size.max(self.minimum_size);
        let old = self.effective_size(index);
        self.size_exceptions.insert(index, clamped);
        if clamped != old {
            self.bump_body(i64::from(clamped) - i64::from(old));
            self.invalidate_from_index(index);
        }
        Ok(())
    }

    /// Hide `index` (its effective size becomes 0). No-op when already
    /// hidden.
    ///
    /// # Errors
    /// Bounds error outside `[FIRST_CELL, count)`.
    pub fn hide(&mut self, index: i32) -> Result<()> {
        if self.is_hidden(index)? {
            return Ok(());
        }
        let size = self.stored_true_size(index);
        self.size_exceptions.insert(index, -size);
        self.bump_body(-i64::from(size));
        self.invalidate_from_index(index);
        Ok(())
    }

    /// Restore a hidden `index` to its prior effective size. The override
    /// is dropped entirely when the restored size equals the default,
    /// keeping the exception map minimal. No-op when not hidden.
    ///
    /// # Errors
    /// Bounds error outside `[FIRST_CELL, count)`.
    pub fn unhide(&mut self, index: i32) -> Result<()> {
        if !self.is_hidden(index)? {
            return Ok(());
        }
        let restored = self.stored_true_size(index);
        if restored == self.default_size {
            self.size_exceptions.remove(&index);
        } else {
            self.size_exceptions.insert(index, restored);
        }
        self.bump_body(i64::from(restored));
        self.invalidate_from_index(index);
        Ok(())
    }

    /// Set the default cell size. Lowering it below the minimum lowers the
    /// minimum to match.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] for a negative size; the axis
    /// is left unchanged.
    pub fn set_default_size(&mut self, size: i32) -> Result<()> {
        if size < 0 {
            return Err(GridError::InvalidConfig(format!("default size {size} is negative")));
        }
        if size == self.default_size {
            return Ok(());
        }
        self.default_size = size;
        if size < self.minimum_size {
            self.minimum_size = size;
        }
        self.body_px = None;
        self.starts.clear();
        Ok(())
    }

    /// Set the minimum cell size. Raising it past the default raises the
    /// default to match and clamps every exception that now violates it
    /// (hidden exceptions keep their sign).
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] for a negative size; the axis
    /// is left unchanged.
    pub fn set_minimum_size(&mut self, size: i32) -> Result<()> {
        if size < 0 {
            return Err(GridError::InvalidConfig(format!("minimum size {size} is negative")));
        }
        if size == self.minimum_size {
            return Ok(());
        }
        let raising = size > self.minimum_size;
        self.minimum_size = size;
        if size > self.default_size {
            self.default_size = size;
        }
        if raising {
            for stored in self.size_exceptions.values_mut() {
                if *stored >= 0 && *stored < size {
                    *stored = size;
                } else if *stored < 0 && -*stored < size {
                    *stored = -size;
                }
            }
        }
        self.body_px = None;
        self.starts.clear();
        Ok(())
    }

    /// Set the header band size.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] for a negative size.
    pub fn set_header_size(&mut self, size: i32) -> Result<()> {
        if size < 0 {
            return Err(GridError::InvalidConfig(format!("header size {size} is negative")));
        }
        // Cumulative starts are body-relative; no cache impact.
        self.header_size = size;
        Ok(())
    }

    fn bump_body(&mut self, delta: i64) {
        if let Some(total) = &mut self.body_px {
            *total += delta;
        }
    }

    fn invalidate_from_index(&mut self, index: i32) {
        if let Ok(position) = self.position_of_index(index) {
            self.starts.truncate_after(slot(position));
        } else {
            self.starts.clear();
        }
    }

    /// Total body extent in unscaled pixels (hidden indices contribute 0).
    /// Cached; recomputed lazily after mutations.
    pub fn body_px(&mut self) -> i64 {
        if let Some(total) = self.body_px {
            return total;
        }
        let exceptions = i64::try_from(self.size_exceptions.len()).unwrap_or_default();
        let mut total = i64::from(self.default_size) * (i64::from(self.count) - exceptions);
        for &stored in self.size_exceptions.values() {
            if stored > 0 {
                total += i64::from(stored);
            }
        }
        self.body_px = Some(total);
        total
    }

    /// Ensure `starts[0..=upto]` is populated.
    fn ensure_starts(&mut self, upto: usize) {
        let Self {
            starts,
            order,
            size_exceptions,
            default_size,
            ..
        } = self;
        starts.ensure(upto, |position| {
            let identity = i32::try_from(position).unwrap_or(AFTER);
            let index = order.get(position).copied().unwrap_or(identity);
            match size_exceptions.get(&index) {
                Some(&stored) if stored < 0 => 0,
                Some(&stored) => i64::from(stored),
                None => i64::from(*default_size),
            }
        });
    }

    /// Extend the cached prefix until it covers `offset` (or the full axis).
    fn extend_to_cover(&mut self, offset: i64) {
        let limit = slot(self.count);
        loop {
            let len = self.starts.len();
            if len > limit {
                break;
            }
            if len > 0 {
                if let Some(last) = self.starts.start(len - 1) {
                    if last > offset {
                        break;
                    }
                }
            }
            self.ensure_starts(len);
        }
    }

    /// View-space start offset of `position` given the current scroll.
    ///
    /// The header band is fixed at offset 0; body cells start after it.
    /// `position == count` is accepted and yields the far edge of the last
    /// cell, so callers can bracket a cell's span with `position + 1`.
    ///
    /// # Errors
    /// Bounds error outside `[HEADER, count]`.
    pub fn start_of_position(&mut self, position: i32, scroll: i64) -> Result<i64> {
        if position == HEADER {
            return Ok(0);
        }
        if position < FIRST_CELL || position > self.count {
            return Err(GridError::PositionOutOfRange {
                position,
                low: HEADER,
                high: self.count.saturating_add(1),
            });
        }
        self.ensure_starts(slot(position));
        let start = self.starts.start(slot(position)).unwrap_or_default();
        Ok(i64::from(self.header_size) + start - scroll)
    }

    /// Position whose span contains the view-space `coord`, given the
    /// current scroll. Returns `BEFORE` for negative coordinates, `HEADER`
    /// inside the header band, `AFTER` past the last cell. A coordinate on
    /// a shared edge belongs to the greatest position whose start is at or
    /// before it.
    pub fn position_at(&mut self, coord: i64, scroll: i64) -> i32 {
        if coord < 0 {
            return BEFORE;
        }
        if coord < i64::from(self.header_size) {
            return HEADER;
        }
        let body = coord - i64::from(self.header_size) + scroll;
        if body < 0 {
            return BEFORE;
        }
        if self.count == 0 || body >= self.body_px() {
            return AFTER;
        }
        self.extend_to_cover(body);
        match self.starts.position_before(body) {
            Some(position) if position < slot(self.count) => {
                i32::try_from(position).unwrap_or(AFTER)
            }
            _ => AFTER,
        }
    }

    /// Next visible position after `position`, skipping hidden indices.
    /// Fail-soft: falls back to the last visible position when nothing is
    /// visible ahead, and to `position` itself when nothing is visible at
    /// all.
    pub fn next_visible(&self, position: i32) -> i32 {
        let from = if position < FIRST_CELL {
            FIRST_CELL
        } else {
            position.saturating_add(1)
        };
        let mut p = from;
        while p < self.count {
            if !self.hidden_at(p) {
                return p;
            }
            p += 1;
        }
        self.last_visible_or(position)
    }

    /// Previous visible position before `position`, skipping hidden
    /// indices. Fail-soft like [`Axis::next_visible`].
    pub fn prev_visible(&self, position: i32) -> i32 {
        let mut p = position.min(self.count).saturating_sub(1);
        while p >= FIRST_CELL {
            if !self.hidden_at(p) {
                return p;
            }
            p -= 1;
        }
        self.first_visible_or(position)
    }

    /// First visible position, or `FIRST_CELL` when none is visible.
    pub fn first_visible(&self) -> i32 {
        self.first_visible_or(FIRST_CELL)
    }

    /// Last visible position, or `FIRST_CELL` when none is visible.
    pub fn last_visible(&self) -> i32 {
        self.last_visible_or(FIRST_CELL)
    }

    fn first_visible_or(&self, fallback: i32) -> i32 {
        let mut p = FIRST_CELL;
        while p < self.count {
            if !self.hidden_at(p) {
                return p;
            }
            p += 1;
        }
        fallback
    }

    fn last_visible_or(&self, fallback: i32) -> i32 {
        let mut p = self.count - 1;
        while p >= FIRST_CELL {
            if !self.hidden_at(p) {
                return p;
            }
            p -= 1;
        }
        fallback
    }

    /// Snapshot the display order, size overrides, and sizing parameters.
    pub fn state(&self) -> AxisState {
        let mut sizes: Vec<(i32, i32)> = self
            .size_exceptions
            .iter()
            .map(|(&index, &stored)| (index, stored))
            .collect();
        sizes.sort_unstable();
        AxisState {
            order: self.order.clone(),
            sizes,
            default_size: self.default_size,
            minimum_size: self.minimum_size,
            header_size: self.header_size,
        }
    }

    /// Restore a snapshot produced by [`Axis::state`].
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] when the snapshot's sizing
    /// parameters are inconsistent, its order is not a permutation prefix
    /// within the current count, or a size override targets an
    /// out-of-range index. The axis is left unchanged on error.
    pub fn apply_state(&mut self, state: &AxisState) -> Result<()> {
        if state.minimum_size < 0 || state.header_size < 0 {
            return Err(GridError::InvalidConfig("negative size in snapshot".to_string()));
        }
        if state.default_size < state.minimum_size {
            return Err(GridError::InvalidConfig(
                "snapshot default size below its minimum".to_string(),
            ));
        }
        let len = state.order.len();
        if len > slot(self.count) {
            return Err(GridError::InvalidConfig(
                "snapshot order longer than the axis".to_string(),
            ));
        }
        let mut seen = vec![false; len];
        for &index in &state.order {
            match usize::try_from(index).ok().filter(|&i| i < len) {
                Some(i) if !seen.get(i).copied().unwrap_or(true) => {
                    if let Some(entry) = seen.get_mut(i) {
                        *entry = true;
                    }
                }
                _ => {
                    return Err(GridError::InvalidConfig(
                        "snapshot order is not a permutation prefix".to_string(),
                    ));
                }
            }
        }
        for &(index, _) in &state.sizes {
            if index < FIRST_CELL || index >= self.count {
                return Err(GridError::InvalidConfig(format!(
                    "snapshot size override for out-of-range index {index}"
                )));
            }
        }
        self.default_size = state.default_size;
        self.minimum_size = state.minimum_size;
        self.header_size = state.header_size;
        self.order = state.order.clone();
        self.size_exceptions = state
            .sizes
            .iter()
            .map(|&(index, stored)| {
                let magnitude = stored.abs().max(state.minimum_size);
                (index, if stored < 0 { -magnitude } else { magnitude })
            })
            .collect();
        self.starts.clear();
        self.body_px = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn axis(count: i32) -> Axis {
        let mut a = Axis::new(Orientation::Columns, 100, 20, 30).unwrap();
        a.set_count(count).unwrap();
        a
    }

    #[test]
    fn test_identity_mapping() {
        let a = axis(5);
        for p in 0..5 {
            assert_eq!(a.index_of_position(p).unwrap(), p);
            assert_eq!(a.position_of_index(p).unwrap(), p);
        }
        assert_eq!(a.index_of_position(HEADER).unwrap(), HEADER);
        assert!(a.index_of_position(5).is_err());
        assert!(a.index_of_position(BEFORE).is_err());
    }

    #[test]
    fn test_move_position_shifts() {
        let mut a = axis(10);
        a.move_position(0, 5).unwrap();
        assert_eq!(a.index_of_position(5).unwrap(), 0);
        assert_eq!(a.position_of_index(0).unwrap(), 5);
        for p in 0..5 {
            assert_eq!(a.index_of_position(p).unwrap(), p + 1);
        }
        // Untouched tail stays identity.
        assert_eq!(a.index_of_position(9).unwrap(), 9);
    }

    #[test]
    fn test_count_shrink_restores_prefix() {
        let mut a = axis(6);
        a.move_position(5, 0).unwrap();
        a.set_count(3).unwrap();
        // Index 5 dropped; survivors keep relative order.
        for p in 0..3 {
            assert_eq!(a.index_of_position(p).unwrap(), p);
        }
    }

    #[test]
    fn test_hide_restores_exact_size() {
        let mut a = axis(4);
        a.set_cell_size(1, 50).unwrap();
        a.hide(1).unwrap();
        assert_eq!(a.cell_size(1).unwrap(), 0);
        assert!(a.is_hidden(1).unwrap());
        a.unhide(1).unwrap();
        assert_eq!(a.cell_size(1).unwrap(), 50);
        // Unhide of a default-size index drops the override.
        a.hide(2).unwrap();
        a.unhide(2).unwrap();
        assert_eq!(a.state().sizes.iter().filter(|(i, _)| *i == 2).count(), 0);
    }

    #[test]
    fn test_minimum_raise_clamps_exceptions() {
        let mut a = axis(4);
        a.set_cell_size(0, 25).unwrap();
        a.hide(0).unwrap();
        a.set_minimum_size(40).unwrap();
        a.unhide(0).unwrap();
        assert_eq!(a.cell_size(0).unwrap(), 40);
    }
}
