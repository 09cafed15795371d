//! Comma-delimited text export.
//!
//! One row `r,theta,nx,ny,nz` per cell in grid order. Cells without a
//! normal write `nan` in the last three columns. The `#` header line keeps
//! the file readable by the same comment-aware loaders as the input.

use crate::types::NormalField;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a `NormalField` as comma-delimited text to the given writer.
pub fn write_normal_field<W: Write>(field: &NormalField, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "# r, theta, nx, ny, nz")?;
    writeln!(writer, "# Cells: {}, Estimated: {}", field.len(), field.estimated_count())?;

    for cell in &field.cells {
        match cell.normal {
            Some(n) => writeln!(
                writer,
                "{:.6},{:.6},{:.6},{:.6},{:.6}",
                cell.r, cell.theta, n.x, n.y, n.z
            )?,
            None => writeln!(writer, "{:.6},{:.6},nan,nan,nan", cell.r, cell.theta)?,
        }
    }

    Ok(())
}

/// Write a `NormalField` to a file at `path`.
pub fn write_normal_field_file(field: &NormalField, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_normal_field(field, &mut writer)?;
    writer.flush()
}
