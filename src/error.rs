//! Error types for grid, zone, and solver operations.

use thiserror::Error;

/// Errors that can occur while configuring or running a solve.
///
/// The first three variants are raised during validation, before the first
/// iteration; `NonConvergence` and `Unstable` concern the iteration itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Malformed grid, zone partition, or solver parameters.
    ///
    /// Not recoverable; the solve never starts.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Two adjacent grid nodes share the same position, so the flux and
    /// head-rate computations would divide by zero.
    #[error("degenerate grid: zero spacing between nodes {left} and {right}")]
    DegenerateGrid { left: usize, right: usize },

    /// A zone property value has no physical meaning (porosity ≤ 0 typically
    /// indicates a zone-indexing bug).
    #[error("invalid zone property: {name}[{index}] = {value} must be positive")]
    InvalidZoneProperty {
        name: &'static str,
        index: usize,
        value: f64,
    },

    /// The iteration cap was reached before the convergence threshold.
    ///
    /// Raised only by [`SolveReport::require_converged`]; `solve` itself
    /// returns the best-effort head with status `Capped` instead of
    /// discarding work.
    ///
    /// [`SolveReport::require_converged`]: crate::solver::SolveReport::require_converged
    #[error("no convergence after {iterations} iterations (residual {residual:e})")]
    NonConvergence { iterations: usize, residual: f64 },

    /// A head value became NaN or infinite mid-iteration, which means the
    /// explicit time step is too large for the material properties and
    /// spacing.
    #[error("non-finite head at iteration {iteration}: explicit time step too large")]
    Unstable { iteration: usize },
}

impl SolverError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
