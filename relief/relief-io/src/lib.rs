//! File I/O for reliefforge.
//!
//! Two concerns, one crate:
//!
//! - [`load_samples`] reads the sample table produced by the property
//!   sampling collaborator: a header row naming the columns, then one
//!   comma-separated decimal row per sample.
//! - [`save_stl`] / [`load_stl`] serialize a [`TriangleMesh`] to and from
//!   binary STL. Writes are atomic: bytes land in a temp file next to the
//!   destination and are renamed into place only after a complete,
//!   well-formed file exists, so a failed run never leaves a truncated
//!   mesh behind.
//!
//! ASCII STL is intentionally not supported; the pipeline's exchange
//! format is the binary variant only.
//!
//! # Example
//!
//! ```no_run
//! use relief_io::{load_samples, save_stl, TableColumns};
//! use relief_types::TriangleMesh;
//!
//! let samples = load_samples("data/pTv_points.csv", &TableColumns::default()).unwrap();
//! println!("loaded {} samples", samples.len());
//!
//! let mesh = TriangleMesh::new();
//! save_stl(&mesh, "out/surface.stl").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;
mod table;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, save_stl};
pub use table::{load_samples, TableColumns};

pub use relief_types::TriangleMesh;
