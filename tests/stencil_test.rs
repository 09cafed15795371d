use approx::assert_relative_eq;
use monge_normals::stencil::{
    radial_case, select_angular_stencil, select_radial_stencil, RadialCase, StencilKind,
};
use monge_normals::types::{AngularWrap, Grid, GridDims, Sample};
use monge_normals::Error;

/// Elevation `z = 10 * ring + bin` with the listed flat indices empty.
fn grid(rings: usize, bins: usize, holes: &[usize]) -> (Grid, GridDims) {
    let mut samples = Vec::new();
    for i in 1..=rings {
        for j in 0..bins {
            let idx = (i - 1) * bins + j;
            let z = (!holes.contains(&idx)).then(|| 10.0 * i as f64 + j as f64);
            samples.push(Sample::new(i as f64, j as f64, z));
        }
    }
    (Grid::from_samples(samples), GridDims::new(rings, bins))
}

#[test]
fn boundary_rings_use_one_sided_radial_differences() {
    let (grid, dims) = grid(3, 4, &[]);
    for idx in 0..4 {
        let s = select_radial_stencil(&grid, dims, idx).unwrap();
        assert_eq!(radial_case(&grid, dims, idx).unwrap(), RadialCase::FirstRing);
        assert_eq!(s.kind, StencilKind::Forward);
        assert_eq!(s.step(), 1.0);
        assert_relative_eq!(s.derivative(), 10.0);
    }
    for idx in 4..8 {
        let s = select_radial_stencil(&grid, dims, idx).unwrap();
        assert_eq!(radial_case(&grid, dims, idx).unwrap(), RadialCase::InteriorBoth);
        assert_eq!(s.kind, StencilKind::Central);
        assert_eq!(s.step(), 2.0);
        assert_relative_eq!(s.difference, 20.0);
        assert_relative_eq!(s.derivative(), 10.0);
    }
    for idx in 8..12 {
        let s = select_radial_stencil(&grid, dims, idx).unwrap();
        assert_eq!(radial_case(&grid, dims, idx).unwrap(), RadialCase::LastRing);
        assert_eq!(s.kind, StencilKind::Backward);
        assert_eq!(s.step(), 1.0);
    }
}

#[test]
fn interior_ring_falls_back_to_one_sided() {
    let (grid, dims) = grid(3, 4, &[1]);
    assert_eq!(radial_case(&grid, dims, 5).unwrap(), RadialCase::InteriorAheadOnly);
    let s = select_radial_stencil(&grid, dims, 5).unwrap();
    assert_eq!(s.kind, StencilKind::Forward);
    assert_relative_eq!(s.difference, 10.0);

    let (grid, dims) = self::grid(3, 4, &[9]);
    assert_eq!(radial_case(&grid, dims, 5).unwrap(), RadialCase::InteriorBehindOnly);
    let s = select_radial_stencil(&grid, dims, 5).unwrap();
    assert_eq!(s.kind, StencilKind::Backward);
    assert_relative_eq!(s.difference, 10.0);
}

#[test]
fn seam_uses_ring_offset_neighbor() {
    let (grid, dims) = grid(3, 4, &[]);
    // Ring 2, bin 0 (z = 20): ahead is idx 5 (z = 21), behind is idx 8 (z = 30).
    let s = select_angular_stencil(&grid, dims, 4, AngularWrap::RingOffset).unwrap();
    assert_eq!(s.kind, StencilKind::Central);
    assert_relative_eq!(s.difference, 21.0 - 30.0);

    // Same-ring wrap would read idx 7 (z = 23) instead.
    let s = select_angular_stencil(&grid, dims, 4, AngularWrap::WithinRing).unwrap();
    assert_relative_eq!(s.difference, 21.0 - 23.0);
}

#[test]
fn one_sided_angular_difference_uses_own_elevation() {
    // Ring 2, bin 1 (z = 21) with bin 0 empty: forward difference to bin 2.
    let (grid, dims) = grid(3, 4, &[4]);
    let s = select_angular_stencil(&grid, dims, 5, AngularWrap::RingOffset).unwrap();
    assert_eq!(s.kind, StencilKind::Forward);
    assert_relative_eq!(s.difference, 22.0 - 21.0);

    // With bin 2 empty instead: backward difference to bin 0.
    let (grid, dims) = self::grid(3, 4, &[6]);
    let s = select_angular_stencil(&grid, dims, 5, AngularWrap::RingOffset).unwrap();
    assert_eq!(s.kind, StencilKind::Backward);
    assert_relative_eq!(s.difference, 21.0 - 20.0);
}

#[test]
fn no_radial_neighbor_is_an_invariant_violation() {
    let (grid, dims) = grid(3, 4, &[1, 9]);
    let err = select_radial_stencil(&grid, dims, 5).unwrap_err();
    assert!(matches!(err, Error::InvariantViolation { index: 5, .. }), "got {err:?}");
}

#[test]
fn no_angular_neighbor_is_an_invariant_violation() {
    let (grid, dims) = grid(3, 4, &[4, 6]);
    let err = select_angular_stencil(&grid, dims, 5, AngularWrap::RingOffset).unwrap_err();
    assert!(matches!(err, Error::InvariantViolation { index: 5, .. }), "got {err:?}");
}
