//! Neighbor lookup and per-cell eligibility for normal estimation.
//!
//! A cell is eligible when both a radial and an angular finite-difference
//! stencil can be formed around it. Boundary rings need their single inward
//! neighbor; interior rings and every angular bin need at least one of their
//! two neighbors. The cell's own elevation plays no part here.
//!
//! Neighbor indices that fall outside the grid read as missing.

use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::geometry::check_rectangle;
use crate::types::{AngularWrap, Grid, GridDims, NormalSettings, RingPosition, ValidityMask};

/// Candidate neighbor indices of one cell, after the angular seam rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub radial_ahead: Option<usize>,
    pub radial_behind: Option<usize>,
    pub angular_ahead: Option<usize>,
    pub angular_behind: Option<usize>,
}

/// Neighbor indices of cell `idx`.
///
/// On the first angular bin the behind-neighbor is moved to
/// `idx + wrap.offset(Θ)`; on the last bin the ahead-neighbor is moved to
/// `idx - wrap.offset(Θ)`.
///
/// Under `RingOffset` the last bin of ring 1 points one cell before the
/// start of the grid, and the first bin of ring R one cell past its end.
/// Both read as `None`, so on a complete grid those two cells take a
/// one-sided angular stencil. An index of -1 is not wrapped around to the
/// last cell of the grid.
pub fn neighbors(dims: GridDims, idx: usize, wrap: AngularWrap) -> Neighbors {
    let n = dims.cell_count();
    let bins = dims.bins;
    let within = |i: Option<usize>| i.filter(|&i| i < n);

    let (_, bin) = dims.position(idx);
    let mut angular_ahead = within(idx.checked_add(1));
    let mut angular_behind = idx.checked_sub(1);

    let offset = wrap.offset(bins);
    if bin == 0 {
        angular_behind = within(idx.checked_add(offset));
    }
    if bin + 1 == bins {
        angular_ahead = idx.checked_sub(offset);
    }

    Neighbors {
        radial_ahead: within(idx.checked_add(bins)),
        radial_behind: idx.checked_sub(bins),
        angular_ahead,
        angular_behind,
    }
}

/// Why a cell was left out of the validity mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exclusion {
    /// First ring with no elevation one ring outward.
    FirstRingAheadMissing,
    /// Last ring with no elevation one ring inward.
    LastRingBehindMissing,
    /// Interior ring with both radial neighbors missing.
    NoRadialNeighbor,
    /// Both angular neighbors missing.
    NoAngularNeighbor,
}

/// Eligibility of a single cell: `None` if eligible, else the first rule
/// that rejected it. Radial rules are checked before angular ones.
pub fn classify(grid: &Grid, dims: GridDims, idx: usize, wrap: AngularWrap) -> Option<Exclusion> {
    let nb = neighbors(dims, idx, wrap);
    let present = |i: Option<usize>| grid.neighbor_elevation(i).is_some();

    match dims.ring_position(idx) {
        RingPosition::First if !present(nb.radial_ahead) => {
            return Some(Exclusion::FirstRingAheadMissing)
        }
        RingPosition::Last if !present(nb.radial_behind) => {
            return Some(Exclusion::LastRingBehindMissing)
        }
        RingPosition::Interior if !present(nb.radial_ahead) && !present(nb.radial_behind) => {
            return Some(Exclusion::NoRadialNeighbor)
        }
        _ => {}
    }

    if !present(nb.angular_ahead) && !present(nb.angular_behind) {
        return Some(Exclusion::NoAngularNeighbor);
    }
    None
}

/// Classify every cell of the grid.
#[instrument(skip_all, fields(rings = dims.rings, bins = dims.bins))]
pub fn validate_neighbors(
    grid: &Grid,
    dims: GridDims,
    settings: &NormalSettings,
) -> Result<ValidityMask> {
    check_rectangle(grid, dims)?;

    let mut eligible = Vec::with_capacity(dims.cell_count());
    for idx in 0..dims.cell_count() {
        match classify(grid, dims, idx, settings.angular_wrap) {
            None => eligible.push(true),
            Some(reason) => {
                trace!(idx, ?reason, "cell excluded");
                eligible.push(false);
            }
        }
    }

    let mask = ValidityMask::from_flags(eligible);
    debug!(eligible = mask.eligible_count(), total = mask.len(), "neighbor validation");
    Ok(mask)
}
