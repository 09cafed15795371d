//! Linear algebra type aliases and numeric tolerances.

pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for unit-length checks on estimated normals.
pub const UNIT_TOL: f64 = 1e-9;

/// Tolerance for comparing rescaled grid coordinates.
pub const COORD_TOL: f64 = 1e-9;
