//! Ordered triangle soup.

use crate::{Aabb, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of triangles.
///
/// This is the primary mesh type for reliefforge. Triangles are stored
/// inline in emission order; the order is meaningless geometrically but
/// must be deterministic because it fixes the byte layout of the output
/// file.
///
/// # Winding Order
///
/// Triangles use **counter-clockwise (CCW) winding** when viewed from the
/// side their normal points toward.
///
/// # Example
///
/// ```
/// use relief_types::{Triangle, TriangleMesh, Point3};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.push(Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Triangles in emission order.
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a mesh from an existing triangle list.
    #[inline]
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Number of triangles in the mesh.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh contains no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append a triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Append all triangles from a slice, preserving their order.
    #[inline]
    pub fn extend_from_slice(&mut self, triangles: &[Triangle]) {
        self.triangles.extend_from_slice(triangles);
    }

    /// Iterate over the triangles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Compute the axis-aligned bounding box over all vertices.
    ///
    /// Returns an empty [`Aabb`] for an empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::{Triangle, TriangleMesh, Point3};
    ///
    /// let mesh = TriangleMesh::from_triangles(vec![Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(0.0, 3.0, 1.0),
    /// )]);
    /// let bounds = mesh.bounds();
    /// assert_eq!(bounds.max.y, 3.0);
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for tri in &self.triangles {
            for v in tri.vertices() {
                aabb.expand_to_include(&v);
            }
        }
        aabb
    }

    /// The smallest Z coordinate across all triangles.
    ///
    /// Returns `None` for an empty mesh.
    #[must_use]
    pub fn min_z(&self) -> Option<f64> {
        self.triangles
            .iter()
            .map(Triangle::min_z)
            .fold(None, |acc, z| Some(acc.map_or(z, |a: f64| a.min(z))))
    }
}

impl<'a> IntoIterator for &'a TriangleMesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn tri(z: f64) -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(0.0, 1.0, z + 1.0),
        )
    }

    #[test]
    fn empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.min_z().is_none());
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn push_and_count() {
        let mut mesh = TriangleMesh::new();
        mesh.push(tri(0.0));
        mesh.push(tri(2.0));
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn extend_preserves_order() {
        let mut mesh = TriangleMesh::new();
        let batch = [tri(0.0), tri(5.0)];
        mesh.extend_from_slice(&batch);
        assert_eq!(mesh.triangles[0], batch[0]);
        assert_eq!(mesh.triangles[1], batch[1]);
    }

    #[test]
    fn min_z_over_all_triangles() {
        let mesh = TriangleMesh::from_triangles(vec![tri(3.0), tri(-2.0), tri(1.0)]);
        let min_z = mesh.min_z();
        assert!(min_z.is_some());
        assert_relative_eq!(min_z.unwrap_or(f64::NAN), -2.0);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mesh = TriangleMesh::from_triangles(vec![tri(0.0), tri(4.0)]);
        let bounds = mesh.bounds();
        assert_relative_eq!(bounds.min.z, 0.0);
        assert_relative_eq!(bounds.max.z, 5.0);
        assert_relative_eq!(bounds.max.x, 1.0);
    }
}
