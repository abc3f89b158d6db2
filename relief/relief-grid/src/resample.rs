//! Scattered-data linear interpolation onto a regular lattice.
//!
//! The resampler Delaunay-triangulates the XY projection of the scaled
//! points, then evaluates each lattice node by barycentric interpolation
//! inside its containing triangle. Nodes outside the convex hull get the
//! caller's fill value.

// Numeric casts between usize and f64 are inherent to grid indexing.
#![allow(clippy::cast_precision_loss)]

use delaunator::{next_halfedge, triangulate, Point as PlanePoint, Triangulation, EMPTY};
use nalgebra::Point3;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::lattice::Lattice;

/// Interpolate scattered points onto a regular `rows` x `cols` lattice.
///
/// The lattice spans the observed XY extents of `points` inclusively, with
/// linearly spaced nodes. Every node is either interpolated (linear within
/// the Delaunay triangle that contains it) or set to `fill` when it falls
/// outside the convex hull of the input, so no node is ever NaN.
///
/// Duplicate XY positions among the input points are tolerated; the
/// triangulation keeps one of them.
///
/// # Errors
///
/// - [`GridError::InvalidDimensions`] if `rows` or `cols` is below 2.
/// - [`GridError::InsufficientData`] if fewer than 3 points are given, or
///   all points are coincident/collinear so no 2D triangulation exists.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use relief_grid::resample;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
///     Point3::new(1.0, 1.0, 2.0),
/// ];
/// let lattice = resample(&points, 2, 2, 0.0).unwrap();
///
/// // Lattice corners coincide with the input points.
/// assert!((lattice.z(1, 1) - 2.0).abs() < 1e-12);
/// ```
pub fn resample(points: &[Point3<f64>], rows: usize, cols: usize, fill: f64) -> GridResult<Lattice> {
    if rows < 2 || cols < 2 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    if points.len() < 3 {
        return Err(GridError::InsufficientData {
            point_count: points.len(),
        });
    }

    let plane: Vec<PlanePoint> = points
        .iter()
        .map(|p| PlanePoint { x: p.x, y: p.y })
        .collect();
    let triangulation = triangulate(&plane);
    if triangulation.triangles.is_empty() {
        // All points coincident or collinear in XY.
        return Err(GridError::InsufficientData {
            point_count: points.len(),
        });
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    let xs = linspace(x_min, x_max, cols);
    let ys = linspace(y_min, y_max, rows);
    let heights: Vec<f64> = points.iter().map(|p| p.z).collect();

    // Containment tolerance scaled to the data extent, so lattice nodes
    // sitting exactly on hull edges interpolate instead of falling out.
    let span = (x_max - x_min).max(y_max - y_min);
    let eps = span * span * 1e-12;
    let orient = orientation_sign(&triangulation, &plane);

    let mut z = Vec::with_capacity(rows * cols);
    let mut hint = 0;
    let mut filled = 0usize;
    for &y in &ys {
        for &x in &xs {
            match locate(&triangulation, &plane, (x, y), hint, orient, eps) {
                Some(tri) => {
                    hint = tri;
                    z.push(interpolate(&triangulation, &plane, &heights, (x, y), tri));
                }
                None => {
                    z.push(fill);
                    filled += 1;
                }
            }
        }
    }

    debug!(
        point_count = points.len(),
        triangle_count = triangulation.triangles.len() / 3,
        rows,
        cols,
        filled_cells = filled,
        "resampled scattered points onto lattice"
    );

    Ok(Lattice::from_axes(xs, ys, z))
}

/// `n` linearly spaced values from `start` to `end` inclusive (`n >= 2`).
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n)
        .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
        .collect()
}

/// Sign of the signed area of the triangulation's first triangle.
///
/// The walk's edge tests assume a consistent winding; multiplying by this
/// sign makes them hold either way.
fn orientation_sign(t: &Triangulation, plane: &[PlanePoint]) -> f64 {
    let a = &plane[t.triangles[0]];
    let b = &plane[t.triangles[1]];
    let c = &plane[t.triangles[2]];
    let area = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if area < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Signed cross product of edge `a -> b` against point `p`.
#[inline]
fn edge_cross(a: &PlanePoint, b: &PlanePoint, p: (f64, f64)) -> f64 {
    (b.x - a.x) * (p.1 - a.y) - (b.y - a.y) * (p.0 - a.x)
}

/// Find the triangle containing `p` by walking the halfedge structure.
///
/// Starting from `start`, steps across whichever edge has `p` on its outer
/// side. Crossing a hull edge means `p` is outside the triangulation.
/// A step cap guards against cycling on numerically marginal input, with a
/// full scan as fallback.
fn locate(
    t: &Triangulation,
    plane: &[PlanePoint],
    p: (f64, f64),
    start: usize,
    orient: f64,
    eps: f64,
) -> Option<usize> {
    let tri_count = t.triangles.len() / 3;
    let mut current = start.min(tri_count - 1);

    for _ in 0..tri_count {
        let mut crossed = false;
        for edge in 0..3 {
            let e = 3 * current + edge;
            let a = &plane[t.triangles[e]];
            let b = &plane[t.triangles[next_halfedge(e)]];
            if orient * edge_cross(a, b, p) < -eps {
                let opposite = t.halfedges[e];
                if opposite == EMPTY {
                    // Walked out of the hull.
                    return None;
                }
                current = opposite / 3;
                crossed = true;
                break;
            }
        }
        if !crossed {
            return Some(current);
        }
    }

    (0..tri_count).find(|&tri| contains(t, plane, p, tri, orient, eps))
}

/// Whether triangle `tri` contains `p` (inclusive of edges).
fn contains(
    t: &Triangulation,
    plane: &[PlanePoint],
    p: (f64, f64),
    tri: usize,
    orient: f64,
    eps: f64,
) -> bool {
    (0..3).all(|edge| {
        let e = 3 * tri + edge;
        let a = &plane[t.triangles[e]];
        let b = &plane[t.triangles[next_halfedge(e)]];
        orient * edge_cross(a, b, p) >= -eps
    })
}

/// Barycentric linear interpolation of the heights at `p` within `tri`.
fn interpolate(
    t: &Triangulation,
    plane: &[PlanePoint],
    heights: &[f64],
    p: (f64, f64),
    tri: usize,
) -> f64 {
    let ia = t.triangles[3 * tri];
    let ib = t.triangles[3 * tri + 1];
    let ic = t.triangles[3 * tri + 2];
    let (a, b, c) = (&plane[ia], &plane[ib], &plane[ic]);

    // The denominator's sign cancels in the weights, so the triangle's
    // winding does not matter here.
    let denom = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    let wa = ((b.x - p.0) * (c.y - p.1) - (b.y - p.1) * (c.x - p.0)) / denom;
    let wb = ((c.x - p.0) * (a.y - p.1) - (c.y - p.1) * (a.x - p.0)) / denom;
    let wc = 1.0 - wa - wb;

    wa * heights[ia] + wb * heights[ib] + wc * heights[ic]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 2.0),
        ]
    }

    #[test]
    fn corners_reproduce_input_heights() {
        let lattice = resample(&unit_square(), 2, 2, 0.0).unwrap();
        assert_relative_eq!(lattice.z(0, 0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(lattice.z(0, 1), 1.0, epsilon = 1e-12);
        assert_relative_eq!(lattice.z(1, 0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(lattice.z(1, 1), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn interior_nodes_interpolate_linearly() {
        let lattice = resample(&unit_square(), 3, 3, 0.0).unwrap();
        // The surface z = x + y is linear, so the midpoint is exact.
        assert_relative_eq!(lattice.z(1, 1), 1.0, epsilon = 1e-9);
        assert_relative_eq!(lattice.z(1, 2), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn every_cell_is_finite() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.5, 1.0),
            Point3::new(1.5, 2.0, 4.0),
            Point3::new(0.5, 1.0, 2.0),
            Point3::new(2.5, 1.5, 3.0),
        ];
        let lattice = resample(&points, 17, 13, 0.0).unwrap();
        assert_eq!(lattice.cell_count(), 17 * 13);
        assert!(lattice.heights().iter().all(|z| z.is_finite()));
    }

    #[test]
    fn outside_hull_gets_fill_value() {
        // Right triangle; the (x_max, y_max) lattice corner is outside it.
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 2.0),
        ];
        let lattice = resample(&points, 3, 3, -1.0).unwrap();
        assert_relative_eq!(lattice.z(2, 2), -1.0);
        // The hypotenuse midpoint is on the hull and interpolates.
        assert_relative_eq!(lattice.z(1, 1), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn fewer_than_three_points_is_insufficient() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
        let result = resample(&points, 4, 4, 0.0);
        assert!(matches!(
            result,
            Err(GridError::InsufficientData { point_count: 2 })
        ));
    }

    #[test]
    fn coincident_points_are_insufficient() {
        let points = vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 2.0),
            Point3::new(1.0, 1.0, 3.0),
        ];
        let result = resample(&points, 4, 4, 0.0);
        assert!(matches!(result, Err(GridError::InsufficientData { .. })));
    }

    #[test]
    fn collinear_points_are_insufficient() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        let result = resample(&points, 4, 4, 0.0);
        assert!(matches!(result, Err(GridError::InsufficientData { .. })));
    }

    #[test]
    fn lattice_below_2x2_is_invalid() {
        let result = resample(&unit_square(), 1, 5, 0.0);
        assert!(matches!(
            result,
            Err(GridError::InvalidDimensions { rows: 1, cols: 5 })
        ));
    }

    #[test]
    fn duplicate_xy_positions_are_tolerated() {
        let mut points = unit_square();
        points.push(Point3::new(0.0, 0.0, 5.0)); // duplicate of the first corner
        let lattice = resample(&points, 2, 2, 0.0).unwrap();
        assert_eq!(lattice.cell_count(), 4);
        assert!(lattice.heights().iter().all(|z| z.is_finite()));
    }

    #[test]
    fn axes_span_extents_inclusively() {
        let lattice = resample(&unit_square(), 5, 4, 0.0).unwrap();
        let (x_min, x_max, y_min, y_max) = lattice.extent();
        assert_relative_eq!(x_min, 0.0);
        assert_relative_eq!(x_max, 1.0);
        assert_relative_eq!(y_min, 0.0);
        assert_relative_eq!(y_max, 1.0);
    }
}
