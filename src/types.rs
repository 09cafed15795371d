use crate::math::Vector3;

/// One grid cell: physical polar coordinates plus an elevation that may be
/// missing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Radial coordinate, already shifted to 1-based rings and rescaled.
    pub r: f64,
    /// Angular coordinate, rescaled by the angular bin width.
    pub theta: f64,
    /// `None` where the simulation left the cell empty.
    pub elevation: Option<f64>,
}

impl Sample {
    pub fn new(r: f64, theta: f64, elevation: Option<f64>) -> Self { Self { r, theta, elevation } }
    pub fn is_missing(&self) -> bool { self.elevation.is_none() }
}

/// Radial and angular bin widths read from the input metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinGeometry {
    pub radial_width: f64,
    pub angular_width: f64,
}

impl BinGeometry {
    pub fn new(radial_width: f64, angular_width: f64) -> Self { Self { radial_width, angular_width } }
}

/// Flat index of ring `ring` (1-based) and angular bin `bin` (0-based) in a
/// grid with `bins` angular bins per ring. `ring` must be at least 1.
pub fn flat_index(ring: usize, bin: usize, bins: usize) -> usize {
    debug_assert!(ring >= 1, "rings are 1-based, got ring {ring}");
    (ring - 1) * bins + bin
}

/// Cells sorted radial-major, angular-minor.
///
/// Flat index `(i - 1) * Θ + j` addresses ring `i` and angular bin `j`; see
/// [`GridDims`] for the arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    samples: Vec<Sample>,
}

impl Grid {
    /// Wrap samples that are already in row-major (ring, bin) order.
    pub fn from_samples(samples: Vec<Sample>) -> Self { Self { samples } }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn get(&self, idx: usize) -> Option<&Sample> { self.samples.get(idx) }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }

    /// Elevation at `idx`. Out-of-grid indices read as missing.
    pub fn elevation(&self, idx: usize) -> Option<f64> {
        self.samples.get(idx).and_then(|s| s.elevation)
    }

    /// Elevation at an optional neighbor index.
    pub fn neighbor_elevation(&self, idx: Option<usize>) -> Option<f64> {
        idx.and_then(|i| self.elevation(i))
    }
}

/// Which boundary, if any, a ring sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingPosition {
    First,
    Interior,
    Last,
}

/// Ring count `R` and angular bins per ring `Θ`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub rings: usize,
    pub bins: usize,
}

impl GridDims {
    pub fn new(rings: usize, bins: usize) -> Self { Self { rings, bins } }
    pub fn cell_count(&self) -> usize { self.rings * self.bins }

    pub fn flat_index(&self, ring: usize, bin: usize) -> usize {
        flat_index(ring, bin, self.bins)
    }

    /// Inverse of [`GridDims::flat_index`]: `(ring, bin)` with a 1-based ring.
    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.bins + 1, idx % self.bins)
    }

    /// A single-ring grid reports `First`; its missing radial-ahead neighbor
    /// then excludes every cell.
    pub fn ring_position(&self, idx: usize) -> RingPosition {
        let (ring, _) = self.position(idx);
        if ring == 1 {
            RingPosition::First
        } else if ring == self.rings {
            RingPosition::Last
        } else {
            RingPosition::Interior
        }
    }
}

/// Per-cell eligibility for normal estimation, parallel to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidityMask {
    eligible: Vec<bool>,
}

impl ValidityMask {
    pub fn from_flags(eligible: Vec<bool>) -> Self { Self { eligible } }

    pub fn len(&self) -> usize { self.eligible.len() }
    pub fn is_empty(&self) -> bool { self.eligible.is_empty() }

    pub fn is_eligible(&self, idx: usize) -> bool {
        self.eligible.get(idx).copied().unwrap_or(false)
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible.iter().filter(|&&e| e).count()
    }

    /// Flat indices of eligible cells in ascending order.
    pub fn eligible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.eligible.iter().enumerate().filter(|(_, &e)| e).map(|(i, _)| i)
    }
}

/// One output row: cell coordinates and its unit normal, if one exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalSample {
    pub r: f64,
    pub theta: f64,
    pub normal: Option<Vector3>,
}

impl NormalSample {
    pub fn missing(r: f64, theta: f64) -> Self { Self { r, theta, normal: None } }

    /// `(r, θ, nx, ny, nz)` with NaN standing in for a missing normal.
    pub fn to_row(&self) -> [f64; 5] {
        match self.normal {
            Some(n) => [self.r, self.theta, n.x, n.y, n.z],
            None => [self.r, self.theta, f64::NAN, f64::NAN, f64::NAN],
        }
    }
}

/// Normals for every cell, in the grid's row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalField {
    pub cells: Vec<NormalSample>,
}

impl NormalField {
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn rows(&self) -> Vec<[f64; 5]> { self.cells.iter().map(NormalSample::to_row).collect() }
    pub fn estimated_count(&self) -> usize { self.cells.iter().filter(|c| c.normal.is_some()).count() }
}

/// How the angular stencil wraps at the seam of a ring.
///
/// `RingOffset` moves a full ring (Θ cells) away, so the first bin's
/// behind-neighbor lands in the next ring and the last bin's ahead-neighbor
/// in the previous one. `WithinRing` moves Θ − 1 cells and stays on the
/// same ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngularWrap {
    #[default]
    RingOffset,
    WithinRing,
}

impl AngularWrap {
    /// Index distance from a seam cell to its wrapped neighbor.
    pub fn offset(self, bins: usize) -> usize {
        match self {
            AngularWrap::RingOffset => bins,
            AngularWrap::WithinRing => bins.saturating_sub(1),
        }
    }
}

/// Settings controlling neighbor validation and normal estimation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalSettings {
    pub angular_wrap: AngularWrap,
}
