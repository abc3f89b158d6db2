//! Pipeline error type.

use relief_grid::GridError;
use relief_io::IoError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that can abort a pipeline run.
///
/// All variants are fatal: they reflect structurally invalid input or a
/// broken environment, not transient conditions, so nothing is retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// Mapping or resampling failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Table reading or mesh writing failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The configured lattice cannot form cells.
    #[error("lattice must be at least 2x2, got {rows}x{cols}")]
    InvalidLatticeSize {
        /// Configured row count.
        rows: usize,
        /// Configured column count.
        cols: usize,
    },

    /// A scale factor is not a positive finite number.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidScale {
        /// Which parameter was invalid.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The base depth would not place the cap strictly below the surface.
    #[error("base depth must be positive and finite, got {0}")]
    InvalidBaseDepth(f64),

    /// The fill value is not a finite number.
    #[error("fill value must be finite, got {0}")]
    InvalidFillValue(f64),
}
