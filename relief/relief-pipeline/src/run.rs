//! Pipeline execution.

use std::path::Path;

use relief_grid::{map_samples, resample, Sample};
use relief_io::{load_samples, save_stl};
use relief_solid::{assemble, extrude_base, triangulate_height_field};
use relief_types::TriangleMesh;
use tracing::info;

use crate::error::PipelineResult;
use crate::params::PipelineParams;

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of samples read from the table.
    pub sample_count: usize,

    /// Lattice dimensions as (rows, cols).
    pub lattice_size: (usize, usize),

    /// Triangles in the written mesh, surface and base together.
    pub triangle_count: usize,
}

/// Build the solid mesh for a sample collection.
///
/// Runs mapping, resampling, triangulation, base extrusion and assembly,
/// leaving serialization to the caller. The result is deterministic for a
/// given input and configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the sample set is
/// empty, or the points are too degenerate to triangulate.
///
/// # Example
///
/// ```
/// use relief_pipeline::{build_solid, PipelineParams, Sample};
///
/// let samples = vec![
///     Sample::new(0.0, 0.0, 0.0),
///     Sample::new(0.0, 1.0, 1.0),
///     Sample::new(1.0, 0.0, 1.0),
///     Sample::new(1.0, 1.0, 2.0),
/// ];
/// let params = PipelineParams::default()
///     .with_lattice(2, 2)
///     .with_scale_axis2(1.0)
///     .with_log_scale_axis2(false)
///     .with_z_scale(1.0);
///
/// let mesh = build_solid(&samples, &params).unwrap();
/// assert_eq!(mesh.triangle_count(), 4); // 2 surface + 2 base
/// ```
pub fn build_solid(samples: &[Sample], params: &PipelineParams) -> PipelineResult<TriangleMesh> {
    params.validate()?;

    let points = map_samples(samples, &params.map_params())?;
    let lattice = resample(
        &points,
        params.lattice_rows,
        params.lattice_cols,
        params.fill_value,
    )?;

    let surface = triangulate_height_field(&lattice);
    let base = extrude_base(&lattice, params.base_depth);
    Ok(assemble(surface, base))
}

/// Run the full pipeline: read a sample table, write a binary STL.
///
/// One bulk read, one atomic bulk write. If any stage fails, the
/// destination file is left untouched.
///
/// # Errors
///
/// Returns an error if the table cannot be read or parsed, the samples
/// cannot produce a solid (see [`build_solid`]), or the mesh file cannot
/// be written.
///
/// # Example
///
/// ```no_run
/// use relief_pipeline::{run, PipelineParams};
///
/// let stats = run("data/pTv_points.csv", "stl/pTv_surface.stl", &PipelineParams::default())
///     .unwrap();
/// println!("{} samples -> {} triangles", stats.sample_count, stats.triangle_count);
/// ```
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    table_path: P,
    stl_path: Q,
    params: &PipelineParams,
) -> PipelineResult<RunStats> {
    params.validate()?;

    let samples = load_samples(table_path.as_ref(), &params.columns)?;
    info!(sample_count = samples.len(), "read sample table");

    let mesh = build_solid(&samples, params)?;
    save_stl(&mesh, stl_path.as_ref())?;

    let stats = RunStats {
        sample_count: samples.len(),
        lattice_size: (params.lattice_rows, params.lattice_cols),
        triangle_count: mesh.triangle_count(),
    };
    info!(
        triangle_count = stats.triangle_count,
        path = %stl_path.as_ref().display(),
        "pipeline run complete"
    );

    Ok(stats)
}
