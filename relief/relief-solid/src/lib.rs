//! Height-field solidification for reliefforge.
//!
//! Turns a resampled height [`Lattice`](relief_grid::Lattice) into an
//! ordered triangle soup ready for STL serialization:
//!
//! - [`triangulate_height_field`] - two triangles per lattice cell,
//!   consistent CCW-from-above winding, exactly `2*(R-1)*(C-1)` triangles
//! - [`extrude_base`] - a flat two-triangle cap strictly below the surface,
//!   wound so its normal points down
//! - [`assemble`] - surface triangles followed by base triangles, in a
//!   deterministic order
//!
//! # Known limitation
//!
//! The base is a bottom cap only; no perimeter side walls connect the
//! surface boundary to the base, so the result is sliceable but not a
//! watertight manifold. This matches the reference behavior deliberately.
//!
//! # Example
//!
//! ```
//! use relief_grid::Lattice;
//! use relief_solid::{assemble, extrude_base, triangulate_height_field};
//!
//! let lattice = Lattice::from_axes(
//!     vec![0.0, 1.0],
//!     vec![0.0, 1.0],
//!     vec![0.0, 1.0, 1.0, 2.0],
//! );
//! let surface = triangulate_height_field(&lattice);
//! let base = extrude_base(&lattice, 5.0);
//! let mesh = assemble(surface, base);
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod assemble;
mod base;
mod height_field;

pub use assemble::assemble;
pub use base::extrude_base;
pub use height_field::triangulate_height_field;
