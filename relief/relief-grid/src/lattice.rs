//! Regular height lattice.

/// A regular R×C height lattice over a rectangular XY extent.
///
/// Rows index Y and columns index X; heights are stored row-major. Every
/// cell holds either an interpolated height or the resampler's fill value,
/// never NaN or uninitialized data.
///
/// # Example
///
/// ```
/// use relief_grid::Lattice;
///
/// let lattice = Lattice::from_axes(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0; 4]);
/// assert_eq!(lattice.rows(), 2);
/// assert_eq!(lattice.cols(), 2);
/// assert_eq!(lattice.z(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    /// X coordinate per column, ascending, length C.
    xs: Vec<f64>,
    /// Y coordinate per row, ascending, length R.
    ys: Vec<f64>,
    /// Heights, row-major, length R*C.
    z: Vec<f64>,
}

impl Lattice {
    /// Build a lattice from its axes and row-major height data.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() != xs.len() * ys.len()`. The resampler is the
    /// only intended producer and always upholds this.
    #[must_use]
    pub fn from_axes(xs: Vec<f64>, ys: Vec<f64>, z: Vec<f64>) -> Self {
        assert_eq!(
            z.len(),
            xs.len() * ys.len(),
            "height data must be rows*cols"
        );
        Self { xs, ys, z }
    }

    /// Number of rows (Y samples).
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    /// Number of columns (X samples).
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.xs.len()
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.z.len()
    }

    /// X coordinate of column `j`.
    #[inline]
    #[must_use]
    pub fn x(&self, j: usize) -> f64 {
        self.xs[j]
    }

    /// Y coordinate of row `i`.
    #[inline]
    #[must_use]
    pub fn y(&self, i: usize) -> f64 {
        self.ys[i]
    }

    /// Height at row `i`, column `j`.
    #[inline]
    #[must_use]
    pub fn z(&self, i: usize, j: usize) -> f64 {
        self.z[i * self.xs.len() + j]
    }

    /// The lattice node at row `i`, column `j` as an XYZ triple.
    #[inline]
    #[must_use]
    pub fn node(&self, i: usize, j: usize) -> [f64; 3] {
        [self.x(j), self.y(i), self.z(i, j)]
    }

    /// XY extent as `(x_min, x_max, y_min, y_max)`.
    ///
    /// Axes are ascending, so the extremes are the end elements.
    #[must_use]
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (
            self.xs[0],
            self.xs[self.xs.len() - 1],
            self.ys[0],
            self.ys[self.ys.len() - 1],
        )
    }

    /// The smallest height in the lattice.
    #[must_use]
    pub fn min_z(&self) -> f64 {
        self.z.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Raw row-major height data.
    #[must_use]
    pub fn heights(&self) -> &[f64] {
        &self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lattice() -> Lattice {
        Lattice::from_axes(
            vec![0.0, 1.0, 2.0],
            vec![10.0, 11.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
    }

    #[test]
    fn row_major_indexing() {
        let lattice = sample_lattice();
        assert_eq!(lattice.rows(), 2);
        assert_eq!(lattice.cols(), 3);
        assert_eq!(lattice.z(0, 0), 1.0);
        assert_eq!(lattice.z(0, 2), 3.0);
        assert_eq!(lattice.z(1, 0), 4.0);
        assert_eq!(lattice.z(1, 2), 6.0);
    }

    #[test]
    fn node_combines_axes_and_height() {
        let lattice = sample_lattice();
        assert_eq!(lattice.node(1, 2), [2.0, 11.0, 6.0]);
    }

    #[test]
    fn extent_and_min_z() {
        let lattice = sample_lattice();
        assert_eq!(lattice.extent(), (0.0, 2.0, 10.0, 11.0));
        assert_eq!(lattice.min_z(), 1.0);
    }

    #[test]
    #[should_panic(expected = "rows*cols")]
    fn mismatched_heights_panic() {
        let _ = Lattice::from_axes(vec![0.0, 1.0], vec![0.0], vec![0.0; 3]);
    }
}
