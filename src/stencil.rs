//! Finite-difference stencil selection, one axis at a time.
//!
//! Radial stencils fall into five cases: the two boundary rings, which only
//! ever look inward, and interior rings with both, only the ahead, or only
//! the behind neighbor present. Angular stencils have the three interior
//! cases only, because the seam rule supplies a neighbor on both sides.
//!
//! Step sizes are in index units (1 or 2) while the grid coordinates are
//! rescaled by the bin widths.

use crate::error::{Error, Result};
use crate::neighbors::{neighbors, Neighbors};
use crate::types::{AngularWrap, Grid, GridDims, RingPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StencilKind {
    Central,
    Forward,
    Backward,
}

impl StencilKind {
    pub fn step(self) -> f64 {
        match self {
            StencilKind::Central => 2.0,
            StencilKind::Forward | StencilKind::Backward => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadialCase {
    FirstRing,
    LastRing,
    InteriorBoth,
    InteriorAheadOnly,
    InteriorBehindOnly,
}

impl RadialCase {
    pub fn kind(self) -> StencilKind {
        match self {
            RadialCase::FirstRing | RadialCase::InteriorAheadOnly => StencilKind::Forward,
            RadialCase::LastRing | RadialCase::InteriorBehindOnly => StencilKind::Backward,
            RadialCase::InteriorBoth => StencilKind::Central,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngularCase {
    Both,
    AheadOnly,
    BehindOnly,
}

impl AngularCase {
    pub fn kind(self) -> StencilKind {
        match self {
            AngularCase::Both => StencilKind::Central,
            AngularCase::AheadOnly => StencilKind::Forward,
            AngularCase::BehindOnly => StencilKind::Backward,
        }
    }
}

/// A selected stencil and the elevation difference it spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stencil {
    pub kind: StencilKind,
    pub difference: f64,
}

impl Stencil {
    pub fn step(&self) -> f64 { self.kind.step() }
    pub fn derivative(&self) -> f64 { self.difference / self.step() }
}

/// Radial case for cell `idx`, from ring position and neighbor presence.
pub fn radial_case(grid: &Grid, dims: GridDims, idx: usize) -> Result<RadialCase> {
    let nb = neighbors(dims, idx, AngularWrap::default());
    let ahead = grid.neighbor_elevation(nb.radial_ahead).is_some();
    let behind = grid.neighbor_elevation(nb.radial_behind).is_some();

    let case = match (dims.ring_position(idx), ahead, behind) {
        (RingPosition::First, true, _) => RadialCase::FirstRing,
        (RingPosition::Last, _, true) => RadialCase::LastRing,
        (RingPosition::Interior, true, true) => RadialCase::InteriorBoth,
        (RingPosition::Interior, true, false) => RadialCase::InteriorAheadOnly,
        (RingPosition::Interior, false, true) => RadialCase::InteriorBehindOnly,
        (position, _, _) => {
            return Err(Error::InvariantViolation {
                index: idx,
                message: format!("no radial neighbor usable for a {position:?} ring cell"),
            })
        }
    };
    Ok(case)
}

/// Angular case for a cell with the given (seam-corrected) neighbors.
pub fn angular_case(grid: &Grid, idx: usize, nb: &Neighbors) -> Result<AngularCase> {
    let ahead = grid.neighbor_elevation(nb.angular_ahead).is_some();
    let behind = grid.neighbor_elevation(nb.angular_behind).is_some();

    match (ahead, behind) {
        (true, true) => Ok(AngularCase::Both),
        (true, false) => Ok(AngularCase::AheadOnly),
        (false, true) => Ok(AngularCase::BehindOnly),
        (false, false) => Err(Error::InvariantViolation {
            index: idx,
            message: "no angular neighbor usable".into(),
        }),
    }
}

pub fn select_radial_stencil(grid: &Grid, dims: GridDims, idx: usize) -> Result<Stencil> {
    let kind = radial_case(grid, dims, idx)?.kind();
    let nb = neighbors(dims, idx, AngularWrap::default());
    build(grid, idx, kind, nb.radial_ahead, nb.radial_behind)
}

pub fn select_angular_stencil(
    grid: &Grid,
    dims: GridDims,
    idx: usize,
    wrap: AngularWrap,
) -> Result<Stencil> {
    let nb = neighbors(dims, idx, wrap);
    let kind = angular_case(grid, idx, &nb)?.kind();
    build(grid, idx, kind, nb.angular_ahead, nb.angular_behind)
}

fn build(
    grid: &Grid,
    idx: usize,
    kind: StencilKind,
    ahead: Option<usize>,
    behind: Option<usize>,
) -> Result<Stencil> {
    let missing = |what: &str| Error::InvariantViolation {
        index: idx,
        message: format!("{what} elevation missing for a {kind:?} stencil"),
    };
    let own = grid.elevation(idx).ok_or_else(|| missing("own"))?;
    let ahead = grid.neighbor_elevation(ahead);
    let behind = grid.neighbor_elevation(behind);

    let difference = match kind {
        StencilKind::Central => {
            ahead.ok_or_else(|| missing("ahead"))? - behind.ok_or_else(|| missing("behind"))?
        }
        StencilKind::Forward => ahead.ok_or_else(|| missing("ahead"))? - own,
        StencilKind::Backward => own - behind.ok_or_else(|| missing("behind"))?,
    };
    Ok(Stencil { kind, difference })
}
