//! Affine coordinate mapping from raw samples to fabrication space.

use nalgebra::Point3;
use tracing::debug;

use crate::error::{GridError, GridResult};

/// One raw data triplet from the sampling collaborator.
///
/// `u` and `v` are the independent variables (temperature and specific
/// volume in the motivating use); `w` is the dependent variable (pressure).
/// The mapper attaches no physical meaning to any of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// First independent variable.
    pub u: f64,
    /// Second independent variable.
    pub v: f64,
    /// Dependent variable.
    pub w: f64,
}

impl Sample {
    /// Create a new sample.
    #[inline]
    #[must_use]
    pub const fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }
}

/// Per-axis scale configuration for the affine mapping.
///
/// Defaults match the reference relief: 1 unit per step on the first axis,
/// 50 units per decade on the (log-scaled) second axis, and 1/20000 unit
/// per value on the height axis.
///
/// # Example
///
/// ```
/// use relief_grid::MapParams;
///
/// let params = MapParams::default().with_log_scale_v(false);
/// assert!(!params.log_scale_v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapParams {
    /// Units per step of the first independent axis (X).
    pub scale_u: f64,

    /// Units per step of the second independent axis (Y).
    ///
    /// When [`log_scale_v`](Self::log_scale_v) is set this is units per
    /// decade, since the axis is transformed through `log10` first.
    pub scale_v: f64,

    /// Whether to pass the second axis through `log10` before scaling.
    ///
    /// Used when the physically relevant range spans orders of magnitude.
    pub log_scale_v: bool,

    /// Units per value of the dependent axis (Z).
    pub scale_w: f64,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            scale_u: 1.0,
            scale_v: 50.0,
            log_scale_v: true,
            scale_w: 1.0 / 20_000.0,
        }
    }
}

impl MapParams {
    /// Set the first-axis scale.
    #[must_use]
    pub const fn with_scale_u(mut self, scale: f64) -> Self {
        self.scale_u = scale;
        self
    }

    /// Set the second-axis scale.
    #[must_use]
    pub const fn with_scale_v(mut self, scale: f64) -> Self {
        self.scale_v = scale;
        self
    }

    /// Enable or disable the `log10` transform on the second axis.
    #[must_use]
    pub const fn with_log_scale_v(mut self, log_scale: bool) -> Self {
        self.log_scale_v = log_scale;
        self
    }

    /// Set the dependent-axis scale.
    #[must_use]
    pub const fn with_scale_w(mut self, scale: f64) -> Self {
        self.scale_w = scale;
        self
    }
}

/// Map raw samples into scaled, offset fabrication coordinates.
///
/// Each axis is shifted by its minimum over the **entire** sample set and
/// multiplied by a fixed scale, so all points share one coordinate origin
/// and every output coordinate is non-negative.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] for an empty sample set (no minimum
/// is definable) and [`GridError::NonPositiveLogInput`] if the second axis
/// is log-scaled but contains a value `<= 0`.
///
/// # Example
///
/// ```
/// use relief_grid::{map_samples, MapParams, Sample};
///
/// let samples = vec![Sample::new(300.0, 0.01, 1e5), Sample::new(320.0, 0.1, 2e5)];
/// let points = map_samples(&samples, &MapParams::default()).unwrap();
///
/// // The minimum sample lands at the origin.
/// assert!(points[0].x.abs() < 1e-12);
/// assert!(points[0].z.abs() < 1e-12);
/// ```
pub fn map_samples(samples: &[Sample], params: &MapParams) -> GridResult<Vec<Point3<f64>>> {
    if samples.is_empty() {
        return Err(GridError::EmptyInput);
    }

    // Second-axis transform is applied before the minimum is taken, so the
    // offset is in log space when the log transform is active.
    let axis_v = |v: f64| if params.log_scale_v { v.log10() } else { v };

    if params.log_scale_v {
        if let Some(bad) = samples.iter().find(|s| s.v <= 0.0) {
            return Err(GridError::NonPositiveLogInput { value: bad.v });
        }
    }

    let mut u_min = f64::INFINITY;
    let mut v_min = f64::INFINITY;
    let mut w_min = f64::INFINITY;
    for s in samples {
        u_min = u_min.min(s.u);
        v_min = v_min.min(axis_v(s.v));
        w_min = w_min.min(s.w);
    }

    debug!(
        sample_count = samples.len(),
        u_min, v_min, w_min, "mapping samples to fabrication coordinates"
    );

    Ok(samples
        .iter()
        .map(|s| {
            Point3::new(
                (s.u - u_min) * params.scale_u,
                (axis_v(s.v) - v_min) * params.scale_v,
                (s.w - w_min) * params.scale_w,
            )
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_input_is_an_error() {
        let result = map_samples(&[], &MapParams::default());
        assert!(matches!(result, Err(GridError::EmptyInput)));
    }

    #[test]
    fn offsets_shared_across_whole_set() {
        let samples = vec![
            Sample::new(10.0, 1.0, 100.0),
            Sample::new(30.0, 100.0, 300.0),
        ];
        let params = MapParams::default()
            .with_scale_u(1.0)
            .with_scale_v(50.0)
            .with_scale_w(0.5);
        let points = map_samples(&samples, &params).unwrap();

        // First sample is the minimum on every axis.
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[0].y, 0.0);
        assert_relative_eq!(points[0].z, 0.0);

        // Second sample: 20 steps in u, 2 decades in v, 200 in w.
        assert_relative_eq!(points[1].x, 20.0);
        assert_relative_eq!(points[1].y, 100.0);
        assert_relative_eq!(points[1].z, 100.0);
    }

    #[test]
    fn linear_second_axis_when_log_disabled() {
        let samples = vec![Sample::new(0.0, 2.0, 0.0), Sample::new(0.0, 5.0, 1.0)];
        let params = MapParams::default()
            .with_log_scale_v(false)
            .with_scale_v(1.0);
        let points = map_samples(&samples, &params).unwrap();
        assert_relative_eq!(points[1].y, 3.0);
    }

    #[test]
    fn log_axis_rejects_non_positive_values() {
        let samples = vec![Sample::new(0.0, 0.0, 0.0)];
        let result = map_samples(&samples, &MapParams::default());
        assert!(matches!(
            result,
            Err(GridError::NonPositiveLogInput { .. })
        ));
    }

    #[test]
    fn all_outputs_non_negative() {
        let samples = vec![
            Sample::new(-5.0, 1.0, -2.0),
            Sample::new(3.0, 0.5, 7.0),
            Sample::new(0.0, 2.0, 0.0),
        ];
        let points = map_samples(&samples, &MapParams::default()).unwrap();
        for p in &points {
            assert!(p.x >= 0.0 && p.y >= 0.0 && p.z >= 0.0);
        }
    }
}
