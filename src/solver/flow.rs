//! Explicit time-marching groundwater flow solver
//!
//! # Mathematical Background
//!
//! The solver marches the transient head equation to steady state with the
//! simplest explicit scheme:
//!
//! ```text
//! h[j] ← h[j] + dt · dh_dt[j]        (interior nodes only)
//! ```
//!
//! where `dh_dt` comes from the model's Darcy flux divergence (see
//! [`AquiferModel::head_rate`]). Each sweep is one forward-Euler step; the
//! steady-state profile is the fixed point where the flux through every
//! interval is equal.
//!
//! # Termination
//!
//! After every sweep the mean absolute head change against the previous sweep
//! is compared to the configured threshold ε. The solve ends:
//!
//! - **Converged** — change ≤ ε;
//! - **Capped** — the optional iteration cap was reached first. The
//!   best-effort head field is returned either way; callers that require
//!   convergence use [`SolveReport::require_converged`].
//!
//! # Stability
//!
//! The scheme is conditionally stable: roughly `k·n·dt/dx² ≤ ½` per zone.
//! A too-large `dt` makes the interior oscillate and diverge; the per-sweep
//! finiteness check turns that into [`SolverError::Unstable`] instead of a
//! silently non-finite result.
//!
//! # Example
//!
//! ```rust
//! use aquifer_rs::prelude::*;
//!
//! let grid = SpatialGrid::uniform(100, 100.0)?;
//! let model = AquiferModel::new(
//!     grid,
//!     &ZoneDefinition::uniform(2.84e-5),
//!     &ZoneDefinition::uniform(0.40),
//! )?;
//! let boundary = BoundaryHeads::new(444.0, 430.0);
//! let config = SolverConfig::new(3.15e8, 1e-5).with_max_iterations(10_000);
//!
//! let report = GroundwaterFlowSolver::new().solve(&model, &boundary, &config)?;
//! assert!(report.is_converged());
//! # Ok::<(), aquifer_rs::SolverError>(())
//! ```

use std::collections::HashMap;

use nalgebra::DVector;

use crate::error::SolverError;
use crate::model::AquiferModel;
use crate::solver;
use crate::solver::boundary::BoundaryHeads;
use crate::solver::config::SolverConfig;
use crate::solver::convergence::ConvergenceState;

// =================================================================================================
// Terminal status and report
// =================================================================================================

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The mean absolute head change dropped to the threshold.
    Converged,

    /// The iteration cap was reached first; the head field is best-effort.
    Capped,
}

/// Result of a solve: the final head field plus diagnostics.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Final head values, one per grid node [m].
    pub head: DVector<f64>,

    /// Number of update sweeps performed.
    pub iterations: usize,

    /// Mean absolute head change of the last sweep [m].
    pub residual: f64,

    /// Terminal status.
    pub status: SolveStatus,

    /// Free-form diagnostics (solver name, dt, ε, …) for display and
    /// reproducibility.
    pub metadata: HashMap<String, String>,
}

impl SolveReport {
    fn new(head: DVector<f64>, iterations: usize, residual: f64, status: SolveStatus) -> Self {
        Self {
            head,
            iterations,
            residual,
            status,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Strict accessor: reject a capped solve.
    ///
    /// Converts a `Capped` report into [`SolverError::NonConvergence`]
    /// carrying the iteration count and last residual, for callers that need
    /// a converged profile rather than a best-effort one.
    pub fn require_converged(self) -> Result<Self, SolverError> {
        match self.status {
            SolveStatus::Converged => Ok(self),
            SolveStatus::Capped => Err(SolverError::NonConvergence {
                iterations: self.iterations,
                residual: self.residual,
            }),
        }
    }
}

// =================================================================================================
// Solver
// =================================================================================================

/// Explicit finite-difference solver for 1D steady-state groundwater flow.
///
/// Stateless; all inputs arrive per call. Each iteration reads only the
/// previous head field and the immutable model, so a solve is deterministic
/// and strictly sequential.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundwaterFlowSolver;

impl GroundwaterFlowSolver {
    /// Create a solver.
    pub fn new() -> Self {
        Self
    }

    /// Solver name for display and report metadata.
    pub fn name(&self) -> &'static str {
        "Explicit Darcy Time-Marching"
    }

    /// Solve from the default seed (linear interpolation between the
    /// boundary heads).
    pub fn solve(
        &self,
        model: &AquiferModel,
        boundary: &BoundaryHeads,
        config: &SolverConfig,
    ) -> Result<SolveReport, SolverError> {
        let seed = boundary.linear_profile(model.node_count());
        self.run(model, boundary, config, seed, 0, |_, _| {})
    }

    /// Solve from a caller-supplied initial head field.
    ///
    /// `initial` must have one value per node; its boundary entries are
    /// overwritten with the configured boundary heads before the first sweep.
    pub fn solve_from(
        &self,
        model: &AquiferModel,
        boundary: &BoundaryHeads,
        config: &SolverConfig,
        initial: DVector<f64>,
    ) -> Result<SolveReport, SolverError> {
        self.run(model, boundary, config, initial, 0, |_, _| {})
    }

    /// Solve with a progress observer.
    ///
    /// `observer(iteration, head)` is invoked after every `sample_every`-th
    /// sweep (0 disables sampling). Observers see intermediate head fields
    /// read-only and have no influence on the numerics; the plotting
    /// collaborator hangs off this hook.
    pub fn solve_with_observer<F>(
        &self,
        model: &AquiferModel,
        boundary: &BoundaryHeads,
        config: &SolverConfig,
        sample_every: usize,
        observer: F,
    ) -> Result<SolveReport, SolverError>
    where
        F: FnMut(usize, &DVector<f64>),
    {
        let seed = boundary.linear_profile(model.node_count());
        self.run(model, boundary, config, seed, sample_every, observer)
    }

    fn run<F>(
        &self,
        model: &AquiferModel,
        boundary: &BoundaryHeads,
        config: &SolverConfig,
        mut head: DVector<f64>,
        sample_every: usize,
        mut observer: F,
    ) -> Result<SolveReport, SolverError>
    where
        F: FnMut(usize, &DVector<f64>),
    {
        // ====== Validation (solve never starts on bad input) ======

        config.validate()?;
        boundary.validate()?;

        let nodes = model.node_count();
        if head.len() != nodes {
            return Err(SolverError::configuration(format!(
                "initial head needs one value per node: expected {}, got {}",
                nodes,
                head.len()
            )));
        }

        // Zero spacing would divide the flux computation by zero.
        model.grid().check_degenerate()?;

        // ====== Seeding ======

        // Boundary entries are fixed for the lifetime of the solve.
        head[0] = boundary.left;
        head[nodes - 1] = boundary.right;

        let mut state = ConvergenceState::new(&head);
        let mut iterations = 0usize;

        // ====== Iteration ======

        let (residual, status) = loop {
            // Flux divergence at the interior nodes, then one Euler step.
            // rate[j] belongs to node j + 1; nodes 0 and N−1 are never
            // touched.
            let rate = model.head_rate(&head);
            for j in 0..nodes - 2 {
                head[j + 1] += rate[j] * config.dt;
            }

            iterations += 1;
            solver::validate_head(&head, iterations)?;

            let residual = state.advance(&head, config.metric);

            if sample_every > 0 && iterations % sample_every == 0 {
                observer(iterations, &head);
            }

            if residual <= config.epsilon {
                break (residual, SolveStatus::Converged);
            }
            if let Some(cap) = config.max_iterations {
                if iterations >= cap {
                    break (residual, SolveStatus::Capped);
                }
            }
        };

        // ====== Report ======

        let mut report = SolveReport::new(head, iterations, residual, status);
        report.add_metadata("solver", self.name());
        report.add_metadata("model", model.name());
        report.add_metadata("nodes", &nodes.to_string());
        report.add_metadata("dt", &config.dt.to_string());
        report.add_metadata("epsilon", &config.epsilon.to_string());

        Ok(report)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SpatialGrid;
    use crate::zones::ZoneDefinition;

    fn homogeneous(nodes: usize) -> AquiferModel {
        let grid = SpatialGrid::uniform(nodes, 100.0).unwrap();
        AquiferModel::new(
            grid,
            &ZoneDefinition::uniform(2.84e-5),
            &ZoneDefinition::uniform(0.40),
        )
        .unwrap()
    }

    fn three_zone() -> AquiferModel {
        let grid = SpatialGrid::uniform(100, 100.0).unwrap();
        let conductivity =
            ZoneDefinition::piecewise(&[33, 66], &[2.84e-5, 0.69e-5, 2.84e-5]).unwrap();
        let porosity = ZoneDefinition::piecewise(&[33, 66], &[0.40, 0.35, 0.40]).unwrap();
        AquiferModel::new(grid, &conductivity, &porosity).unwrap()
    }

    #[test]
    fn test_homogeneous_converges_immediately() {
        // Uniform medium: the linear seed is already the fixed point, so the
        // first sweep changes nothing.
        let model = homogeneous(100);
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e8, 1e-5).with_max_iterations(10);

        let report = GroundwaterFlowSolver::new()
            .solve(&model, &boundary, &config)
            .unwrap();

        assert_eq!(report.status, SolveStatus::Converged);
        assert!(report.iterations <= 10);
        assert_eq!(report.residual, 0.0);
    }

    #[test]
    fn test_boundaries_never_move() {
        let model = three_zone();
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(2_000);

        let solver = GroundwaterFlowSolver::new();
        let report = solver
            .solve_with_observer(&model, &boundary, &config, 100, |_, head| {
                assert_eq!(head[0], 444.0);
                assert_eq!(head[99], 430.0);
            })
            .unwrap();

        assert_eq!(report.head[0], 444.0);
        assert_eq!(report.head[99], 430.0);
    }

    #[test]
    fn test_capped_returns_partial_head() {
        let model = three_zone();
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(5);

        let report = GroundwaterFlowSolver::new()
            .solve(&model, &boundary, &config)
            .unwrap();

        assert_eq!(report.status, SolveStatus::Capped);
        assert_eq!(report.iterations, 5);
        assert_eq!(report.head.len(), 100);
        assert!(report.residual > 1e-5);

        let err = report.require_converged().unwrap_err();
        assert!(matches!(
            err,
            SolverError::NonConvergence { iterations: 5, .. }
        ));
    }

    #[test]
    fn test_degenerate_grid_detected_before_first_sweep() {
        let mut positions: Vec<f64> = (0..100).map(|i| i as f64 * 100.0).collect();
        positions[51] = positions[50];
        let grid = SpatialGrid::from_positions(positions).unwrap();
        let model = AquiferModel::new(
            grid,
            &ZoneDefinition::uniform(2.84e-5),
            &ZoneDefinition::uniform(0.40),
        )
        .unwrap();

        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(100);

        let result = GroundwaterFlowSolver::new().solve(&model, &boundary, &config);
        assert_eq!(
            result.unwrap_err(),
            SolverError::DegenerateGrid {
                left: 50,
                right: 51
            }
        );
    }

    #[test]
    fn test_oversized_time_step_is_unstable() {
        // k·n·dt/dx² ≫ ½: the interior oscillates and diverges; the solver
        // must surface that rather than return infinities.
        let model = three_zone();
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(1.0e12, 1e-5).with_max_iterations(100_000);

        let result = GroundwaterFlowSolver::new().solve(&model, &boundary, &config);
        assert!(matches!(result, Err(SolverError::Unstable { .. })));
    }

    #[test]
    fn test_solve_from_overwrites_boundary_entries() {
        let model = homogeneous(10);
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(10_000);

        // Wrong boundary values in the seed; they must be pinned back.
        let initial = DVector::from_element(10, 437.0);
        let report = GroundwaterFlowSolver::new()
            .solve_from(&model, &boundary, &config, initial)
            .unwrap();

        assert_eq!(report.head[0], 444.0);
        assert_eq!(report.head[9], 430.0);
    }

    #[test]
    fn test_initial_length_mismatch() {
        let model = homogeneous(10);
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(10);

        let result = GroundwaterFlowSolver::new().solve_from(
            &model,
            &boundary,
            &config,
            DVector::from_element(7, 437.0),
        );
        assert!(matches!(result, Err(SolverError::Configuration(_))));
    }

    #[test]
    fn test_observer_cadence() {
        let model = three_zone();
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e7, 1e-9).with_max_iterations(1_000);

        let mut samples = Vec::new();
        GroundwaterFlowSolver::new()
            .solve_with_observer(&model, &boundary, &config, 250, |iteration, _| {
                samples.push(iteration)
            })
            .unwrap();

        assert_eq!(samples, vec![250, 500, 750, 1000]);
    }

    #[test]
    fn test_report_metadata() {
        let model = homogeneous(100);
        let boundary = BoundaryHeads::new(444.0, 430.0);
        let config = SolverConfig::new(3.15e8, 1e-5).with_max_iterations(10);

        let report = GroundwaterFlowSolver::new()
            .solve(&model, &boundary, &config)
            .unwrap();

        assert_eq!(
            report.metadata.get("solver"),
            Some(&"Explicit Darcy Time-Marching".to_string())
        );
        assert_eq!(report.metadata.get("nodes"), Some(&"100".to_string()));
        assert_eq!(report.metadata.get("epsilon"), Some(&"0.00001".to_string()));
    }
}
