//! Scrolling for `GridView`: clamped offsets, ensure-visible, and
//! time-based scroll transitions.
//!
//! Animations advance on the host's frame ticks with host-supplied
//! timestamps; the core holds no clock. A new animation request while one
//! is running cancels it and starts fresh from the current interpolated
//! offset.

use super::GridView;
use crate::layout::CellPos;

/// An in-flight scroll transition.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScrollAnimation {
    from_x: i64,
    from_y: i64,
    to_x: i64,
    to_y: i64,
    start_ms: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    /// Interpolated offsets at `now_ms` (smoothstep easing) and whether
    /// the animation has finished.
    #[allow(clippy::cast_possible_truncation)]
    fn sample(&self, now_ms: f64) -> (i64, i64, bool) {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        let x = self.from_x + ((self.to_x - self.from_x) as f64 * eased).round() as i64;
        let y = self.from_y + ((self.to_y - self.from_y) as f64 * eased).round() as i64;
        (x, y, t >= 1.0)
    }
}

impl GridView {
    /// Scroll by a delta in unscaled grid pixels, clamped to the
    /// scrollable range. Cancels any running scroll animation.
    pub fn scroll_by(&mut self, delta_x: i64, delta_y: i64) {
        self.scroll_anim = None;
        self.viewport.scroll_x += delta_x;
        self.viewport.scroll_y += delta_y;
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
    }

    /// Set absolute scroll offsets (unscaled grid pixels), clamped.
    /// Cancels any running scroll animation.
    pub fn scroll_to(&mut self, x: i64, y: i64) {
        self.scroll_anim = None;
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
    }

    /// Scroll the minimum amount needed to bring `pos` fully into view.
    /// Sentinel components are ignored.
    pub fn ensure_visible(&mut self, pos: CellPos) {
        if !pos.is_cell() {
            return;
        }
        let mut moved = false;

        let header_x = i64::from(self.columns.header_size());
        let span_x = self.viewport.grid_width();
        if let (Ok(start), Ok(end)) = (
            self.columns.start_of_position(pos.col, self.viewport.scroll_x),
            self.columns
                .start_of_position(pos.col.saturating_add(1), self.viewport.scroll_x),
        ) {
            if start < header_x {
                self.viewport.scroll_x += start - header_x;
                moved = true;
            } else if end > span_x {
                self.viewport.scroll_x += (end - span_x).min(start - header_x);
                moved = true;
            }
        }

        let header_y = i64::from(self.rows.header_size());
        let span_y = self.viewport.grid_height();
        if let (Ok(start), Ok(end)) = (
            self.rows.start_of_position(pos.row, self.viewport.scroll_y),
            self.rows
                .start_of_position(pos.row.saturating_add(1), self.viewport.scroll_y),
        ) {
            if start < header_y {
                self.viewport.scroll_y += start - header_y;
                moved = true;
            } else if end > span_y {
                self.viewport.scroll_y += (end - span_y).min(start - header_y);
                moved = true;
            }
        }

        if moved {
            self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
            self.scheduler.request_full();
        }
    }

    /// Begin (or restart) an animated scroll to the given offsets. A
    /// request arriving mid-animation restarts from the current
    /// interpolated offset.
    pub fn animate_scroll_to(&mut self, x: i64, y: i64, duration_ms: f64, now_ms: f64) {
        self.scroll_anim = Some(ScrollAnimation {
            from_x: self.viewport.scroll_x,
            from_y: self.viewport.scroll_y,
            to_x: x,
            to_y: y,
            start_ms: now_ms,
            duration_ms: duration_ms.max(1.0),
        });
    }

    /// Advance the scroll animation to `now_ms`. Returns `true` while
    /// more frames are needed, `false` once idle.
    pub fn tick_scroll(&mut self, now_ms: f64) -> bool {
        let Some(anim) = self.scroll_anim else {
            return false;
        };
        let (x, y, done) = anim.sample(now_ms);
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
        self.viewport.clamp_scroll(&mut self.columns, &mut self.rows);
        self.scheduler.request_full();
        if done {
            self.scroll_anim = None;
        }
        !done
    }
}
