//! Surface normal estimation for polar Monge patches.
//!
//! A membrane surface is sampled as elevation `h(r, θ)` on a regular polar
//! grid, some cells possibly empty. The pipeline runs strictly forward:
//!
//! 1. [`loader`] parses the bin dump into a sorted, rescaled [`types::Grid`]
//! 2. [`geometry`] derives the ring count and bins per ring
//! 3. [`neighbors`] marks cells that can support a stencil on both axes
//! 4. [`normals`] picks a central, forward, or backward difference per axis
//!    and evaluates the closed-form unit normal
//!
//! Missing elevation never fails the run; it propagates into the output as a
//! cell without a normal.

pub mod error;
pub mod export;
pub mod geometry;
pub mod loader;
pub mod math;
pub mod neighbors;
pub mod normals;
pub mod stencil;
pub mod types;

pub use error::{Error, Result};
pub use geometry::grid_dimensions;
pub use loader::{load_grid, parse_bin_geometry, parse_grid};
pub use neighbors::validate_neighbors;
pub use normals::{estimate_normals, surface_normals, unit_normal};
pub use types::{
    AngularWrap, BinGeometry, Grid, GridDims, NormalField, NormalSample, NormalSettings, Sample,
    ValidityMask,
};
