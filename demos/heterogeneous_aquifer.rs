//! Three-Zone Heterogeneous Aquifer
//!
//! 1D confined aquifer, 100 nodes over 9.9 km, fixed heads of 444 m and
//! 430 m, with a low-conductivity band across the middle third. Marches the
//! transient head equation to steady state and plots intermediate snapshots
//! against the converged profile.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=info cargo run --example heterogeneous_aquifer
//! ```

use aquifer_rs::output::visualization::{plot_head_profile, plot_profile_comparison, PlotConfig};
use aquifer_rs::prelude::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Three-Zone Heterogeneous Aquifer ===\n");

    // Physical parameters
    let nodes = 100;
    let spacing = 100.0; // m
    let head_left = 444.0; // m asl
    let head_right = 430.0; // m asl

    // Zone layout: cutoffs index the per-interval property arrays.
    let cutoffs = [33, 66];
    let conductivity_values = [2.84e-5, 0.69e-5, 2.84e-5]; // m/s
    let porosity_values = [0.40, 0.35, 0.40];

    // Simulation parameters
    let dt = 3.15e7; // s, one year per sweep
    let epsilon = 1e-5; // m, mean absolute head change

    println!("Physical Parameters:");
    println!("  Nodes: {} ({} m spacing)", nodes, spacing);
    println!("  Boundary heads: {} m / {} m", head_left, head_right);
    println!("  Conductivity zones: {:?} m/s at cutoffs {:?}", conductivity_values, cutoffs);
    println!("  Porosity zones: {:?}", porosity_values);
    println!("\nSimulation:");
    println!("  Time step: {:.2e} s", dt);
    println!("  Convergence threshold: {:.0e} m\n", epsilon);

    let grid = SpatialGrid::uniform(nodes, spacing)?;
    let conductivity = ZoneDefinition::piecewise(&cutoffs, &conductivity_values)?;
    let porosity = ZoneDefinition::piecewise(&cutoffs, &porosity_values)?;
    let model = AquiferModel::new(grid, &conductivity, &porosity)?;

    let boundary = BoundaryHeads::new(head_left, head_right);
    let config = SolverConfig::new(dt, epsilon).with_max_iterations(1_000_000);

    // Collect a snapshot every 1000 sweeps for the comparison plot.
    let mut snapshots: Vec<(usize, Vec<f64>)> = Vec::new();

    println!("Solving...");
    let start = std::time::Instant::now();
    let report = GroundwaterFlowSolver::new()
        .solve_with_observer(&model, &boundary, &config, 1_000, |iteration, head| {
            snapshots.push((iteration, head.as_slice().to_vec()));
        })?
        .require_converged()?;
    let elapsed = start.elapsed();

    println!("✓ Converged in {:.3}s\n", elapsed.as_secs_f64());
    println!("Number of iterations: {}", report.iterations);
    println!("Final residual: {:.3e} m", report.residual);
    println!("Boundary heads: {:.1} m / {:.1} m", report.head[0], report.head[nodes - 1]);
    println!(
        "Head at zone interfaces: {:.3} m (node 33), {:.3} m (node 66)",
        report.head[33], report.head[66]
    );

    // Final profile on its own.
    let positions = model.grid().positions().as_slice();
    plot_head_profile(
        positions,
        report.head.as_slice(),
        "heterogeneous_aquifer.png",
        Some(&PlotConfig::head_profile("Three-Zone Aquifer, Steady State")),
    )?;
    println!("\nSaved heterogeneous_aquifer.png");

    // Approach to steady state: a thinned selection of snapshots plus the
    // converged profile.
    let labels: Vec<String> = snapshots.iter().map(|(i, _)| format!("{} sweeps", i)).collect();
    let mut profiles: Vec<(&str, &[f64])> = Vec::new();
    let step = (snapshots.len() / 5).max(1);
    for idx in (0..snapshots.len()).step_by(step) {
        profiles.push((&labels[idx], &snapshots[idx].1));
    }
    profiles.push(("Converged", report.head.as_slice()));

    plot_profile_comparison(
        positions,
        profiles,
        "heterogeneous_aquifer_progress.png",
        Some(&PlotConfig::head_profile("Approach to Steady State")),
    )?;
    println!("Saved heterogeneous_aquifer_progress.png");

    Ok(())
}
