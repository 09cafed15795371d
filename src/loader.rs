//! Grid loading from the plain-text bin dump.
//!
//! The input is comma-delimited rows of `radial, angular, elevation` with
//! zero-based bin indices, preceded by comment lines. The last comment line
//! of the form `#  <radial_width>  <angular_width>` supplies the bin widths.
//!
//! Loading sorts rows by (radial, angular), shifts radial indices to start at
//! 1, and rescales both indices into physical units. A blank or unparsable
//! elevation becomes a missing cell; the row is kept.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::types::{BinGeometry, Grid, Sample};

/// Read and parse a bin dump from disk.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_grid(path: &Path) -> Result<(Grid, BinGeometry)> {
    let text = fs::read_to_string(path)?;
    parse_grid(&text)
}

/// Parse a bin dump already held in memory.
pub fn parse_grid(text: &str) -> Result<(Grid, BinGeometry)> {
    let bins = parse_bin_geometry(text)?;

    let mut samples = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let data = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        };
        if data.trim().is_empty() {
            continue;
        }
        samples.push(parse_row(data, lineno + 1)?);
    }
    if samples.is_empty() {
        return Err(Error::Shape("input has no data rows".into()));
    }

    samples.sort_by(|a, b| a.r.total_cmp(&b.r).then(a.theta.total_cmp(&b.theta)));

    for s in &mut samples {
        s.r += 1.0;
        if s.r < 1.0 {
            return Err(Error::Shape(format!(
                "radial index {} is below 1 after the shift",
                s.r
            )));
        }
        s.r *= bins.radial_width;
        s.theta *= bins.angular_width;
    }

    let missing = samples.iter().filter(|s| s.is_missing()).count();
    info!(rows = samples.len(), missing, "grid loaded");
    Ok((Grid::from_samples(samples), bins))
}

/// Scan comment lines for the bin widths. The last matching line wins.
pub fn parse_bin_geometry(text: &str) -> Result<BinGeometry> {
    let mut saw_comment = false;
    let mut found = None;

    for line in text.lines() {
        let line = line.trim_start();
        if !line.starts_with('#') {
            continue;
        }
        saw_comment = true;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            continue;
        }
        if let (Ok(radial), Ok(angular)) = (tokens[1].parse::<f64>(), tokens[2].parse::<f64>()) {
            found = Some((radial, angular));
        }
    }

    let (radial, angular) = match found {
        Some(widths) => widths,
        None if saw_comment => {
            return Err(Error::Config(
                "no comment line carries numeric radial and angular bin widths".into(),
            ))
        }
        None => return Err(Error::Config("input has no metadata comment line".into())),
    };

    for (name, width) in [("radial", radial), ("angular", angular)] {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::Config(format!("{name} bin width must be positive, got {width}")));
        }
    }

    debug!(radial, angular, "bin geometry");
    Ok(BinGeometry::new(radial, angular))
}

fn parse_row(data: &str, lineno: usize) -> Result<Sample> {
    let cols: Vec<&str> = data.split(',').map(str::trim).collect();
    if cols.len() < 3 {
        return Err(Error::Shape(format!(
            "line {lineno}: expected at least 3 columns, found {}",
            cols.len()
        )));
    }

    let radial = parse_index(cols[0], "radial", lineno)?;
    let angular = parse_index(cols[1], "angular", lineno)?;
    let elevation = cols[2].parse::<f64>().ok().filter(|z| z.is_finite());

    Ok(Sample::new(radial, angular, elevation))
}

fn parse_index(token: &str, name: &str, lineno: usize) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Shape(format!("line {lineno}: bad {name} index {token:?}"))),
    }
}
