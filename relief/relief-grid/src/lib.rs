//! Scattered-sample resampling for reliefforge.
//!
//! This crate takes an irregular cloud of `(u, v, w)` samples and turns it
//! into a dense, regular height lattice:
//!
//! 1. [`map_samples`] applies a fixed affine transform per axis (with an
//!    optional `log10` on the second axis), producing scaled XYZ points
//!    that share one coordinate origin.
//! 2. [`resample`] Delaunay-triangulates the XY projection and linearly
//!    interpolates heights onto a regular R×C [`Lattice`], writing a
//!    configured fill value into cells outside the data's convex hull.
//!
//! The fill behavior is deliberate: a closed, printable solid is preferred
//! over numerical fidelity at the boundary, so out-of-hull cells are valid
//! output, not an error.
//!
//! # Example
//!
//! ```
//! use relief_grid::{map_samples, resample, MapParams, Sample};
//!
//! let samples = vec![
//!     Sample::new(0.0, 1.0, 0.0),
//!     Sample::new(0.0, 10.0, 1.0),
//!     Sample::new(1.0, 1.0, 1.0),
//!     Sample::new(1.0, 10.0, 2.0),
//! ];
//!
//! let points = map_samples(&samples, &MapParams::default()).unwrap();
//! let lattice = resample(&points, 10, 10, 0.0).unwrap();
//! assert_eq!(lattice.cell_count(), 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod lattice;
mod map;
mod resample;

pub use error::{GridError, GridResult};
pub use lattice::Lattice;
pub use map::{map_samples, MapParams, Sample};
pub use resample::resample;
