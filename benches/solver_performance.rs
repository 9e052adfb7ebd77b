//! Performance benchmarks for the explicit groundwater flow solver
//!
//! # What We're Measuring
//!
//! 1. **Scaling with grid size**: a fixed sweep budget over growing node
//!    counts. Each sweep touches every interval once, so time should grow
//!    linearly with nodes.
//! 2. **Full reference solve**: the three-zone 100-node scenario marched all
//!    the way to convergence, i.e. the cost a caller actually pays.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench solver_performance
//!
//! # Only the grid-size sweep
//! cargo bench --bench solver_performance sweep
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use aquifer_rs::prelude::*;

/// Three-zone model scaled to an arbitrary node count.
///
/// Keeps the zone boundaries at one and two thirds of the grid so every size
/// exercises the heterogeneous flux path, not just uniform arithmetic.
fn scaled_three_zone(nodes: usize) -> AquiferModel {
    let grid = SpatialGrid::uniform(nodes, 100.0).unwrap();
    let cutoffs = [nodes / 3, 2 * nodes / 3];
    let conductivity =
        ZoneDefinition::piecewise(&cutoffs, &[2.84e-5, 0.69e-5, 2.84e-5]).unwrap();
    let porosity = ZoneDefinition::piecewise(&cutoffs, &[0.40, 0.35, 0.40]).unwrap();
    AquiferModel::new(grid, &conductivity, &porosity).unwrap()
}

/// Fixed sweep budget across grid sizes.
///
/// The epsilon is unreachably small so every run performs exactly the capped
/// number of sweeps; the measurement is pure update cost, independent of how
/// fast a given size happens to converge.
fn benchmark_sweep_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Capped sweep scaling");

    let boundary = BoundaryHeads::new(444.0, 430.0);
    let solver = GroundwaterFlowSolver::new();

    for nodes in [100, 500, 1000].iter() {
        let model = scaled_three_zone(*nodes);
        let config = SolverConfig::new(3.15e7, 1e-30).with_max_iterations(1_000);

        group.throughput(criterion::Throughput::Elements(
            (*nodes as u64 - 1) * 1_000,
        ));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), nodes, |b, _| {
            b.iter(|| {
                solver
                    .solve(black_box(&model), black_box(&boundary), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// The reference scenario solved to convergence.
fn benchmark_reference_solve(c: &mut Criterion) {
    let model = scaled_three_zone(100);
    let boundary = BoundaryHeads::new(444.0, 430.0);
    let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(500_000);
    let solver = GroundwaterFlowSolver::new();

    c.bench_function("Reference three-zone solve", |b| {
        b.iter(|| {
            solver
                .solve(black_box(&model), black_box(&boundary), black_box(&config))
                .unwrap()
        });
    });
}

criterion_group!(benches, benchmark_sweep_scaling, benchmark_reference_solve);
criterion_main!(benches);
