//! Structured error types for gridview.
//!
//! Every fallible operation in the crate returns [`Result`]. Bounds errors
//! are contract violations in the caller (cursor state and axis state
//! disagreeing) and are never clamped away silently; the documented
//! exceptions (minimum-size clamping, scroll clamping) happen in the
//! mutating call itself.

/// All errors that can occur in gridview operations.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A position argument was outside the valid range.
    #[error("position {position} outside [{low}, {high})")]
    PositionOutOfRange {
        /// The offending position.
        position: i32,
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },

    /// An index argument was outside the valid range.
    #[error("index {index} outside [{low}, {high})")]
    IndexOutOfRange {
        /// The offending index.
        index: i32,
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },

    /// Invalid sizing or state configuration. The target is left unchanged.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A drag gesture was started while another one is active.
    #[error("a drag gesture is already active")]
    GestureActive,

    /// A drag update/commit was issued with no active gesture.
    #[error("no drag gesture is active")]
    GestureIdle,

    /// Reordering was requested for a select-all selection (a no-op by
    /// definition, rejected so callers notice the dead gesture).
    #[error("cannot reorder a select-all selection")]
    ReorderAll,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
