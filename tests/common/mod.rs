//! Common fixtures for integration tests

use aquifer_rs::prelude::*;
use nalgebra::DVector;

/// Node count shared by the reference fixtures.
pub const NODES: usize = 100;

/// Node spacing shared by the reference fixtures [m].
pub const SPACING: f64 = 100.0;

/// Boundary heads of the reference scenario: 444 m upstream, 430 m
/// downstream.
pub fn reference_boundary() -> BoundaryHeads {
    BoundaryHeads::new(444.0, 430.0)
}

/// Homogeneous aquifer: one conductivity/porosity zone over 100 nodes.
pub fn homogeneous_model() -> AquiferModel {
    let grid = SpatialGrid::uniform(NODES, SPACING).unwrap();
    AquiferModel::new(
        grid,
        &ZoneDefinition::uniform(2.84e-5),
        &ZoneDefinition::uniform(0.40),
    )
    .unwrap()
}

/// The reference three-zone aquifer: a low-conductivity band across the
/// middle third.
///
/// k = [0,33)=2.84e-5, [33,66)=0.69e-5, [66,99)=2.84e-5 m/s;
/// n = 0.40 / 0.35 / 0.40.
pub fn three_zone_model() -> AquiferModel {
    let grid = SpatialGrid::uniform(NODES, SPACING).unwrap();
    let conductivity =
        ZoneDefinition::piecewise(&[33, 66], &[2.84e-5, 0.69e-5, 2.84e-5]).unwrap();
    let porosity = ZoneDefinition::piecewise(&[33, 66], &[0.40, 0.35, 0.40]).unwrap();
    AquiferModel::new(grid, &conductivity, &porosity).unwrap()
}

/// Mean absolute deviation between a head field and the straight line
/// through the boundary heads.
pub fn mean_deviation_from_line(head: &DVector<f64>, boundary: &BoundaryHeads) -> f64 {
    let line = boundary.linear_profile(head.len());
    (head - line).abs().mean()
}

/// Average head drop per interval over a node range `[from, to)`.
pub fn mean_gradient(head: &DVector<f64>, from: usize, to: usize) -> f64 {
    let intervals = (to - from - 1) as f64;
    (head[from] - head[to - 1]) / intervals
}
