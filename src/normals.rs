//! Unit surface normals of a polar Monge patch `z = h(r, θ)`.

use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::geometry::{check_rectangle, grid_dimensions};
use crate::loader::load_grid;
use crate::math::Vector3;
use crate::neighbors::validate_neighbors;
use crate::stencil::{select_angular_stencil, select_radial_stencil};
use crate::types::{Grid, GridDims, NormalField, NormalSample, NormalSettings, ValidityMask};

/// Closed-form unit normal at `(r, θ)` given the radial derivative `h_r`
/// and the angular derivative `h_theta`.
///
/// ```text
/// norm = sqrt(1 + h_θ² / r² + h_r²)
/// nx   = (sin θ · h_θ / r − cos θ · h_r) / norm
/// ny   = −(sin θ · h_r + cos θ · h_θ / r) / norm
/// nz   = 1 / norm
/// ```
///
/// `norm >= 1`, so `nz` is always positive.
pub fn unit_normal(r: f64, theta: f64, h_r: f64, h_theta: f64) -> Vector3 {
    let c1 = 1.0 / r;
    let c2 = 1.0 / (r * r);
    let (sin, cos) = theta.sin_cos();
    let norm = (1.0 + c2 * h_theta * h_theta + h_r * h_r).sqrt();

    Vector3::new(
        (c1 * sin * h_theta - cos * h_r) / norm,
        -(sin * h_r + c1 * cos * h_theta) / norm,
        1.0 / norm,
    )
}

/// Estimate the normal at every cell, in flat order.
///
/// Cells with a missing elevation, or outside `mask`, get no normal. Any
/// eligible cell without a usable stencil aborts the whole field.
#[instrument(skip_all, fields(rings = dims.rings, bins = dims.bins))]
pub fn estimate_normals(
    grid: &Grid,
    dims: GridDims,
    mask: &ValidityMask,
    settings: &NormalSettings,
) -> Result<NormalField> {
    check_rectangle(grid, dims)?;

    let mut cells = Vec::with_capacity(dims.cell_count());
    for (idx, sample) in grid.iter().enumerate() {
        if sample.is_missing() || !mask.is_eligible(idx) {
            cells.push(NormalSample::missing(sample.r, sample.theta));
            continue;
        }
        let radial = select_radial_stencil(grid, dims, idx)?;
        let angular = select_angular_stencil(grid, dims, idx, settings.angular_wrap)?;
        let normal = unit_normal(sample.r, sample.theta, radial.derivative(), angular.derivative());
        cells.push(NormalSample { r: sample.r, theta: sample.theta, normal: Some(normal) });
    }

    let field = NormalField { cells };
    info!(estimated = field.estimated_count(), total = field.len(), "normals estimated");
    Ok(field)
}

/// Load a bin dump and run the whole pipeline over it.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn surface_normals(path: &Path, settings: &NormalSettings) -> Result<NormalField> {
    let (grid, _bins) = load_grid(path)?;
    let dims = grid_dimensions(&grid)?;
    let mask = validate_neighbors(&grid, dims, settings)?;
    estimate_normals(&grid, dims, &mask, settings)
}
