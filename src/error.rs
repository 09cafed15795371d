//! Error taxonomy for the normal-estimation pipeline.
//!
//! Missing elevation is not an error: it is carried as `None` through the
//! grid, the validity mask and the output field. Everything here aborts the
//! whole run.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Bin-width metadata absent, non-numeric, or non-positive.
    #[error("bin geometry: {0}")]
    Config(String),

    /// The data is not a conforming R x Θ grid.
    #[error("grid shape: {0}")]
    Shape(String),

    /// An eligible cell turned out to have no usable stencil.
    #[error("invariant violated at cell {index}: {message}")]
    InvariantViolation { index: usize, message: String },
}
