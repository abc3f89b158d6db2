//! Mesh assembly.

use relief_types::{Triangle, TriangleMesh};
use tracing::debug;

/// Concatenate surface and base triangles into one ordered mesh.
///
/// Surface triangles come first, base triangles last, each preserving
/// the order they were generated in. The order has no geometric meaning
/// but fixes the output file layout, which must be deterministic for
/// reproducible builds.
///
/// # Example
///
/// ```
/// use relief_solid::assemble;
/// use relief_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let mesh = assemble(vec![tri], vec![tri.reversed()]);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[must_use]
pub fn assemble(surface: Vec<Triangle>, base: Vec<Triangle>) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(surface.len() + base.len());
    mesh.extend_from_slice(&surface);
    mesh.extend_from_slice(&base);

    debug!(
        surface_triangles = surface.len(),
        base_triangles = base.len(),
        "assembled mesh"
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn tri(z: f64) -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn surface_precedes_base() {
        let mesh = assemble(vec![tri(1.0), tri(2.0)], vec![tri(-5.0)]);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.triangles[0], tri(1.0));
        assert_eq!(mesh.triangles[1], tri(2.0));
        assert_eq!(mesh.triangles[2], tri(-5.0));
    }

    #[test]
    fn empty_parts_allowed() {
        let mesh = assemble(Vec::new(), Vec::new());
        assert!(mesh.is_empty());
    }
}
