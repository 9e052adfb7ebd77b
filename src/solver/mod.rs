//! Numerical solver
//!
//! # Architecture (WHAT vs HOW)
//!
//! The solve is split into three layers:
//!
//! 1. **Model** ([`AquiferModel`](crate::AquiferModel)) — WHAT to solve:
//!    grid, zoned material properties, Darcy flux and head-rate physics.
//! 2. **Configuration** ([`SolverConfig`]) — HOW to solve: time step,
//!    convergence threshold, iteration cap, metric mode.
//! 3. **Method** ([`GroundwaterFlowSolver`]) — the explicit time-marching
//!    scheme itself, independent of any particular aquifer.
//!
//! This separation keeps the same model solvable under different numerical
//! parameters and keeps the numerics testable without any physics.
//!
//! # Module Organization
//!
//! - `boundary`: `BoundaryHeads` — the fixed-head Dirichlet pair and the
//!   linear initial seed derived from it.
//! - `config`: `SolverConfig` with validation.
//! - `convergence`: `ConvergenceMetric` and the previous-snapshot
//!   `ConvergenceState`.
//! - `flow`: `GroundwaterFlowSolver`, `SolveReport`, `SolveStatus`.

mod boundary;
mod config;
mod convergence;
mod flow;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use boundary::BoundaryHeads;
pub use config::SolverConfig;
pub use convergence::{ConvergenceMetric, ConvergenceState};
pub use flow::{GroundwaterFlowSolver, SolveReport, SolveStatus};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

use crate::error::SolverError;

/// Check the head field for NaN or Inf after a sweep.
///
/// Non-finite heads mean the explicit step amplified instead of damping,
/// i.e. `dt` is too large for the spacing and material properties. Caught
/// here so the failure names the iteration instead of propagating silently.
pub(crate) fn validate_head(head: &DVector<f64>, iteration: usize) -> Result<(), SolverError> {
    if head.iter().any(|h| !h.is_finite()) {
        return Err(SolverError::Unstable { iteration });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
