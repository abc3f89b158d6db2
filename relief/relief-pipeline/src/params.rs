//! Pipeline configuration.

use relief_grid::MapParams;
use relief_io::TableColumns;

use crate::error::{PipelineError, PipelineResult};

/// Configuration for one pipeline run.
///
/// This record replaces what the reference implementation kept as
/// module-level constants; every component receives it explicitly and
/// nothing is shared mutably.
///
/// Defaults reproduce the reference relief: a 100×100 lattice, 1 unit per
/// step on axis 1, 50 units per decade on the log-scaled axis 2, 1/20000
/// unit per value of height, a 5-unit base depth, and fill value 0.
///
/// # Example
///
/// ```
/// use relief_pipeline::PipelineParams;
///
/// let params = PipelineParams::default()
///     .with_lattice(50, 80)
///     .with_log_scale_axis2(false);
/// assert_eq!(params.lattice_rows, 50);
/// params.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    /// Lattice row count (Y samples).
    pub lattice_rows: usize,

    /// Lattice column count (X samples).
    pub lattice_cols: usize,

    /// Units per step of the first independent axis.
    pub scale_axis1: f64,

    /// Units per step (or per decade, when log-scaled) of the second
    /// independent axis.
    pub scale_axis2: f64,

    /// Whether the second axis goes through `log10` before scaling.
    pub log_scale_axis2: bool,

    /// Units per value of the dependent axis.
    pub z_scale: f64,

    /// How far below the surface minimum the base cap sits, in units.
    pub base_depth: f64,

    /// Height assigned to lattice cells outside the data's convex hull.
    pub fill_value: f64,

    /// Names of the table columns to read.
    pub columns: TableColumns,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            lattice_rows: 100,
            lattice_cols: 100,
            scale_axis1: 1.0,
            scale_axis2: 50.0,
            log_scale_axis2: true,
            z_scale: 1.0 / 20_000.0,
            base_depth: 5.0,
            fill_value: 0.0,
            columns: TableColumns::default(),
        }
    }
}

impl PipelineParams {
    /// Creates params with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lattice dimensions.
    #[must_use]
    pub fn with_lattice(mut self, rows: usize, cols: usize) -> Self {
        self.lattice_rows = rows;
        self.lattice_cols = cols;
        self
    }

    /// Set the first-axis scale.
    #[must_use]
    pub fn with_scale_axis1(mut self, scale: f64) -> Self {
        self.scale_axis1 = scale;
        self
    }

    /// Set the second-axis scale.
    #[must_use]
    pub fn with_scale_axis2(mut self, scale: f64) -> Self {
        self.scale_axis2 = scale;
        self
    }

    /// Enable or disable `log10` on the second axis.
    #[must_use]
    pub fn with_log_scale_axis2(mut self, log_scale: bool) -> Self {
        self.log_scale_axis2 = log_scale;
        self
    }

    /// Set the dependent-axis scale.
    #[must_use]
    pub fn with_z_scale(mut self, scale: f64) -> Self {
        self.z_scale = scale;
        self
    }

    /// Set the base depth.
    #[must_use]
    pub fn with_base_depth(mut self, depth: f64) -> Self {
        self.base_depth = depth;
        self
    }

    /// Set the out-of-hull fill value.
    #[must_use]
    pub fn with_fill_value(mut self, fill: f64) -> Self {
        self.fill_value = fill;
        self
    }

    /// Set the table column names.
    #[must_use]
    pub fn with_columns(mut self, columns: TableColumns) -> Self {
        self.columns = columns;
        self
    }

    /// Check that the configuration can produce a valid solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice is smaller than 2×2, a scale is not
    /// positive finite, the base depth is not positive finite, or the fill
    /// value is not finite.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.lattice_rows < 2 || self.lattice_cols < 2 {
            return Err(PipelineError::InvalidLatticeSize {
                rows: self.lattice_rows,
                cols: self.lattice_cols,
            });
        }
        for (name, value) in [
            ("scale_axis1", self.scale_axis1),
            ("scale_axis2", self.scale_axis2),
            ("z_scale", self.z_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PipelineError::InvalidScale { name, value });
            }
        }
        if !(self.base_depth.is_finite() && self.base_depth > 0.0) {
            return Err(PipelineError::InvalidBaseDepth(self.base_depth));
        }
        if !self.fill_value.is_finite() {
            return Err(PipelineError::InvalidFillValue(self.fill_value));
        }
        Ok(())
    }

    /// The coordinate-mapping portion of this configuration.
    #[must_use]
    pub fn map_params(&self) -> MapParams {
        MapParams {
            scale_u: self.scale_axis1,
            scale_v: self.scale_axis2,
            log_scale_v: self.log_scale_axis2,
            scale_w: self.z_scale,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_validate() {
        PipelineParams::default().validate().unwrap();
    }

    #[test]
    fn reject_tiny_lattice() {
        let params = PipelineParams::default().with_lattice(1, 100);
        assert!(matches!(
            params.validate(),
            Err(PipelineError::InvalidLatticeSize { rows: 1, cols: 100 })
        ));
    }

    #[test]
    fn reject_non_positive_scale() {
        let params = PipelineParams::default().with_z_scale(0.0);
        assert!(matches!(
            params.validate(),
            Err(PipelineError::InvalidScale { name: "z_scale", .. })
        ));
    }

    #[test]
    fn reject_nan_scale() {
        let params = PipelineParams::default().with_scale_axis2(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn reject_zero_base_depth() {
        let params = PipelineParams::default().with_base_depth(0.0);
        assert!(matches!(
            params.validate(),
            Err(PipelineError::InvalidBaseDepth(_))
        ));
    }

    #[test]
    fn reject_infinite_fill() {
        let params = PipelineParams::default().with_fill_value(f64::INFINITY);
        assert!(matches!(
            params.validate(),
            Err(PipelineError::InvalidFillValue(_))
        ));
    }

    #[test]
    fn map_params_mirror_configuration() {
        let params = PipelineParams::default()
            .with_scale_axis1(2.0)
            .with_log_scale_axis2(false);
        let map = params.map_params();
        assert_relative_eq!(map.scale_u, 2.0);
        assert!(!map.log_scale_v);
    }
}
