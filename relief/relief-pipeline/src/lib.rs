//! End-to-end relief pipeline: sample table in, printable STL out.
//!
//! This crate wires the reliefforge stages into one sequential batch run:
//!
//! 1. [`relief_grid::map_samples`] - affine mapping into fabrication space
//! 2. [`relief_grid::resample`] - scattered points onto a regular lattice
//! 3. [`relief_solid::triangulate_height_field`] - lattice to triangle soup
//! 4. [`relief_solid::extrude_base`] - flat cap below the surface
//! 5. [`relief_solid::assemble`] - surface ++ base, deterministic order
//! 6. [`relief_io::save_stl`] - atomic binary STL write
//!
//! All configuration lives in an explicit [`PipelineParams`] record passed
//! into each entry point; there is no process-wide state, so runs are
//! reproducible byte-for-byte.
//!
//! Failures are fatal to the run: either a complete, well-formed mesh file
//! is produced or none is. A partially triangulated surface has no useful
//! meaning, so there is no partial-result recovery.
//!
//! # Example
//!
//! ```no_run
//! use relief_pipeline::{run, PipelineParams};
//!
//! let params = PipelineParams::default();
//! let stats = run("data/pTv_points.csv", "stl/pTv_surface.stl", &params).unwrap();
//! println!("wrote {} triangles", stats.triangle_count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod run;

pub use error::{PipelineError, PipelineResult};
pub use params::PipelineParams;
pub use run::{build_solid, run, RunStats};

pub use relief_grid::Sample;
pub use relief_io::TableColumns;
pub use relief_types::TriangleMesh;
