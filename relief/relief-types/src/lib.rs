//! Core mesh types for reliefforge.
//!
//! This crate provides the foundational types for the relief pipeline:
//!
//! - [`Triangle`] - A triangle with concrete vertex positions
//! - [`TriangleMesh`] - An ordered triangle soup
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Why a triangle soup?
//!
//! The relief pipeline emits binary STL, which stores each triangle's
//! vertices inline. An ordered soup keeps the file layout deterministic
//! (surface triangles first, base triangles last) without the bookkeeping
//! of a shared-vertex index.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`; the
//! pipeline's scale factors decide what a unit means physically.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X, Y: the resampling plane
//! - Z: height
//!
//! Face winding is **counter-clockwise (CCW) when viewed from the normal
//! side**. An upward-facing triangle is CCW when viewed from +Z.
//!
//! # Example
//!
//! ```
//! use relief_types::{Triangle, TriangleMesh, Point3};
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.push(Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ));
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
