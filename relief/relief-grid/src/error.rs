//! Error types for sample mapping and resampling.

use thiserror::Error;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during coordinate mapping and resampling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridError {
    /// The sample collection is empty, so no offsets or scales are definable.
    #[error("sample collection is empty")]
    EmptyInput,

    /// Too few or degenerate points for a 2D triangulation.
    ///
    /// Raised when fewer than 3 points are given, or when all points are
    /// coincident/collinear in XY so no triangle exists to interpolate in.
    #[error("insufficient data for triangulation: {point_count} usable points")]
    InsufficientData {
        /// Number of points that were available.
        point_count: usize,
    },

    /// The requested lattice is too small to form cells.
    #[error("lattice dimensions must be at least 2x2, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A log-scaled axis value was zero or negative.
    #[error("log-scaled axis requires positive values, got {value}")]
    NonPositiveLogInput {
        /// The offending axis value.
        value: f64,
    },
}
