//! Grid dimensions derived from loaded samples.

use tracing::info;

use crate::error::{Error, Result};
use crate::math::COORD_TOL;
use crate::types::{Grid, GridDims};

/// Ring count and angular bins per ring.
///
/// The ring count is the integer part of the last sample's radial
/// coordinate, so it counts rings only when the radial bin width is 1. The
/// bin count is the number of samples sharing the first sample's radial
/// coordinate. Grids that are not a full `R x Θ` rectangle under these
/// dimensions are rejected.
pub fn grid_dimensions(grid: &Grid) -> Result<GridDims> {
    let samples = grid.samples();
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(Error::Shape("grid is empty".into())),
    };

    let rings = last.r.trunc();
    if rings < 1.0 {
        return Err(Error::Shape(format!(
            "last radial coordinate {} gives no rings",
            last.r
        )));
    }
    let rings = rings as usize;
    if rings > grid.len() {
        return Err(Error::Shape(format!(
            "last radial coordinate {} implies more rings than the {} samples can fill",
            last.r,
            grid.len()
        )));
    }
    let bins = samples
        .iter()
        .filter(|s| (s.r - first.r).abs() <= COORD_TOL)
        .count();

    let dims = GridDims::new(rings, bins);
    check_rectangle(grid, dims)?;

    info!(rings, bins, "grid dimensions");
    Ok(dims)
}

/// Every ring must hold exactly `Θ` samples sharing one radial coordinate,
/// strictly outside the ring before it.
pub fn check_rectangle(grid: &Grid, dims: GridDims) -> Result<()> {
    let cells = dims.rings.checked_mul(dims.bins);
    if dims.bins == 0 || cells != Some(grid.len()) {
        return Err(Error::Shape(format!(
            "{} samples do not fill a {} x {} grid",
            grid.len(),
            dims.rings,
            dims.bins
        )));
    }
    let mut previous: Option<f64> = None;
    for (k, ring) in grid.samples().chunks(dims.bins).enumerate() {
        let r0 = ring[0].r;
        if ring.iter().any(|s| (s.r - r0).abs() > COORD_TOL) {
            return Err(Error::Shape(format!(
                "ring {} does not hold exactly {} angular bins",
                k + 1,
                dims.bins
            )));
        }
        if let Some(prev) = previous {
            if r0 <= prev + COORD_TOL {
                return Err(Error::Shape(format!(
                    "ring {} repeats radial coordinate {} of the ring before it",
                    k + 1,
                    r0
                )));
            }
        }
        previous = Some(r0);
    }
    Ok(())
}
