//! Writers for estimated normal fields.
//!
//! - **Table**: comma-delimited `r,theta,nx,ny,nz` text, one row per cell

pub mod table;

pub use table::{write_normal_field, write_normal_field_file};
