//! Base-plate closure.

use relief_grid::Lattice;
use relief_types::Triangle;
use tracing::debug;

/// Emit the flat rectangular base cap below a height lattice.
///
/// The cap covers the lattice's XY extent at `z = min_z - base_depth`,
/// as two triangles wound opposite to the top surface so the cap's normal
/// points down, away from the solid interior. With `base_depth > 0` the
/// cap sits strictly below every surface vertex.
///
/// This is a bottom cap only. No side walls are generated, so the solid
/// is not watertight at the perimeter (see crate docs).
///
/// # Example
///
/// ```
/// use relief_grid::Lattice;
/// use relief_solid::extrude_base;
///
/// let lattice = Lattice::from_axes(
///     vec![0.0, 10.0],
///     vec![0.0, 10.0],
///     vec![1.0, 2.0, 3.0, 4.0],
/// );
/// let base = extrude_base(&lattice, 5.0);
/// assert_eq!(base.len(), 2);
/// assert!((base[0].v0.z - (-4.0)).abs() < 1e-12);
/// ```
#[must_use]
pub fn extrude_base(lattice: &Lattice, base_depth: f64) -> Vec<Triangle> {
    let (x_min, x_max, y_min, y_max) = lattice.extent();
    let z = lattice.min_z() - base_depth;

    let b1 = [x_min, y_min, z];
    let b2 = [x_max, y_min, z];
    let b3 = [x_min, y_max, z];
    let b4 = [x_max, y_max, z];

    debug!(base_z = z, "extruded base cap");

    // Wound so the cross product points -Z.
    vec![
        Triangle::from_arrays(b1, b3, b2),
        Triangle::from_arrays(b2, b3, b4),
    ]
}
