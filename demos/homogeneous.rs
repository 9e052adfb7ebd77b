//! Homogeneous Aquifer Sanity Run
//!
//! One-zone aquifer between fixed heads: the steady-state profile is the
//! straight line through the boundary heads, and the linear seed means the
//! solve converges on its first sweep. No plotting, so this example runs
//! without the `visualization` feature.
//!
//! ```bash
//! cargo run --example homogeneous --no-default-features
//! ```

use aquifer_rs::prelude::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Homogeneous Aquifer ===\n");

    let nodes = 100;
    let grid = SpatialGrid::uniform(nodes, 100.0)?;
    let model = AquiferModel::new(
        grid,
        &ZoneDefinition::uniform(2.84e-5),
        &ZoneDefinition::uniform(0.40),
    )?;
    let boundary = BoundaryHeads::new(444.0, 430.0);
    let config = SolverConfig::new(3.15e8, 1e-5).with_max_iterations(10_000);

    let report = GroundwaterFlowSolver::new()
        .solve(&model, &boundary, &config)?
        .require_converged()?;

    println!("Number of iterations: {}", report.iterations);
    println!("Final residual: {:.3e} m", report.residual);
    println!("\nHead profile (every 10th node):");
    for i in (0..nodes).step_by(10) {
        println!("  x = {:6.0} m   h = {:8.3} m", model.grid().positions()[i], report.head[i]);
    }

    for (key, value) in [
        ("solver", report.metadata.get("solver")),
        ("model", report.metadata.get("model")),
    ] {
        if let Some(value) = value {
            println!("{}: {}", key, value);
        }
    }

    Ok(())
}
