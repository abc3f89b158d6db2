//! Height-field triangulation.

use relief_grid::Lattice;
use relief_types::Triangle;
use tracing::debug;

/// Triangulate a height lattice into a triangle soup.
///
/// Each 2x2 block of lattice nodes emits exactly two triangles, so an
/// R×C lattice yields `2*(R-1)*(C-1)` triangles. The count is deterministic
/// and independent of the height values: degenerate (zero-area) triangles
/// from coincident heights are emitted, not culled, because culling would
/// make the output cardinality input-dependent.
///
/// Winding is counter-clockwise viewed from +Z, so upward-facing cells get
/// upward normals.
///
/// # Example
///
/// ```
/// use relief_grid::Lattice;
/// use relief_solid::triangulate_height_field;
///
/// let lattice = Lattice::from_axes(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 1.0],
///     vec![0.0; 6],
/// );
/// let surface = triangulate_height_field(&lattice);
/// assert_eq!(surface.len(), 4); // 2 * (2-1) * (3-1)
/// ```
#[must_use]
pub fn triangulate_height_field(lattice: &Lattice) -> Vec<Triangle> {
    let rows = lattice.rows();
    let cols = lattice.cols();
    let mut triangles = Vec::with_capacity(2 * (rows - 1) * (cols - 1));

    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let v1 = lattice.node(i, j);
            let v2 = lattice.node(i, j + 1);
            let v3 = lattice.node(i + 1, j);
            let v4 = lattice.node(i + 1, j + 1);

            triangles.push(Triangle::from_arrays(v1, v2, v3));
            triangles.push(Triangle::from_arrays(v2, v4, v3));
        }
    }

    debug!(
        rows,
        cols,
        triangle_count = triangles.len(),
        "triangulated height field"
    );

    triangles
}
