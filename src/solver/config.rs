//! Solver configuration
//!
//! `SolverConfig` is the HOW of a solve: the explicit time step, the
//! convergence threshold, the optional iteration cap, and the convergence
//! metric mode. The WHAT (grid, zones, boundary heads) lives in
//! [`AquiferModel`](crate::AquiferModel) and
//! [`BoundaryHeads`](crate::BoundaryHeads).

use crate::error::SolverError;
use crate::solver::convergence::ConvergenceMetric;

/// Numerical parameters for an explicit steady-state solve.
///
/// Immutable input, validated once before the first iteration.
///
/// # Examples
///
/// ```rust
/// use aquifer_rs::{ConvergenceMetric, SolverConfig};
///
/// // One-year steps, converge when mean head change drops below 1e-5 m,
/// // give up after 500k iterations.
/// let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(500_000);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.metric, ConvergenceMetric::FullField);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Explicit time step Δt [s].
    pub dt: f64,

    /// Convergence threshold ε on the mean absolute head change between
    /// successive iterations [m].
    pub epsilon: f64,

    /// Safety cap on iterations. `None` means the solve may in principle not
    /// terminate; callers needing hard guarantees must supply a cap.
    pub max_iterations: Option<usize>,

    /// Which nodes enter the convergence metric (full field by default,
    /// matching the reference behavior).
    pub metric: ConvergenceMetric,
}

impl SolverConfig {
    /// Create a configuration with no iteration cap and the full-field
    /// metric.
    pub fn new(dt: f64, epsilon: f64) -> Self {
        Self {
            dt,
            epsilon,
            max_iterations: None,
            metric: ConvergenceMetric::FullField,
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the convergence metric mode.
    pub fn with_metric(mut self, metric: ConvergenceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Validate that the parameters are numerically meaningful.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(SolverError::configuration(format!(
                "time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.epsilon > 0.0) || !self.epsilon.is_finite() {
            return Err(SolverError::configuration(format!(
                "convergence threshold must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SolverError::configuration(
                "iteration cap must be at least 1",
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SolverConfig::new(3.15e7, 1e-5);
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = SolverConfig::new(1.0, 1e-6)
            .with_max_iterations(100)
            .with_metric(ConvergenceMetric::InteriorOnly);

        assert_eq!(config.max_iterations, Some(100));
        assert_eq!(config.metric, ConvergenceMetric::InteriorOnly);
    }

    #[test]
    fn test_non_positive_dt() {
        assert!(SolverConfig::new(0.0, 1e-5).validate().is_err());
        assert!(SolverConfig::new(-1.0, 1e-5).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 1e-5).validate().is_err());
    }

    #[test]
    fn test_non_positive_epsilon() {
        assert!(SolverConfig::new(1.0, 0.0).validate().is_err());
        assert!(SolverConfig::new(1.0, -1e-5).validate().is_err());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = SolverConfig::new(1.0, 1e-5).with_max_iterations(0);
        assert!(config.validate().is_err());
    }
}
