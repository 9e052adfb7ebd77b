//! aquifer-rs: 1D Heterogeneous Groundwater Flow
//!
//! An explicit finite-difference solver for steady-state hydraulic head
//! along a one-dimensional heterogeneous porous medium, built on Darcy's Law
//! and the continuity equation.
//!
//! # Architecture
//!
//! The crate separates two concerns:
//!
//! 1. **Physics** — [`AquiferModel`] owns the spatial grid, the zoned
//!    conductivity/porosity, and the Darcy flux / head-rate equations.
//! 2. **Numerics** — [`GroundwaterFlowSolver`] marches the head field in
//!    explicit time steps until the mean absolute change per sweep drops to
//!    a configured threshold (or an iteration cap is hit).
//!
//! # Quick Start
//!
//! ```rust
//! use aquifer_rs::prelude::*;
//!
//! // 1. Describe the aquifer: 100 nodes, 100 m apart, three conductivity
//! //    and porosity zones.
//! let grid = SpatialGrid::uniform(100, 100.0)?;
//! let conductivity = ZoneDefinition::piecewise(&[33, 66], &[2.84e-5, 0.69e-5, 2.84e-5])?;
//! let porosity = ZoneDefinition::piecewise(&[33, 66], &[0.40, 0.35, 0.40])?;
//! let model = AquiferModel::new(grid, &conductivity, &porosity)?;
//!
//! // 2. Fixed heads at both ends, one-year explicit steps.
//! let boundary = BoundaryHeads::new(444.0, 430.0);
//! let config = SolverConfig::new(3.15e7, 1e-5).with_max_iterations(500_000);
//!
//! // 3. Solve.
//! let report = GroundwaterFlowSolver::new().solve(&model, &boundary, &config)?;
//!
//! // 4. Access results.
//! assert!(report.is_converged());
//! assert_eq!(report.head.len(), 100);
//! # Ok::<(), aquifer_rs::SolverError>(())
//! ```
//!
//! # Modules
//!
//! - [`grid`]: spatial discretization
//! - [`zones`]: piecewise-constant material properties
//! - [`model`]: the aquifer physics
//! - [`solver`]: the explicit time-marching method
//! - [`output`]: head-profile plotting (optional, feature `visualization`)

pub mod error;
pub mod grid;
pub mod model;
pub mod solver;
pub mod zones;

#[cfg(feature = "visualization")]
pub mod output;

pub use error::SolverError;
pub use grid::SpatialGrid;
pub use model::AquiferModel;
pub use solver::{
    BoundaryHeads, ConvergenceMetric, ConvergenceState, GroundwaterFlowSolver, SolveReport,
    SolveStatus, SolverConfig,
};
pub use zones::{Zone, ZoneDefinition};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use aquifer_rs::prelude::*;
    //! ```
    pub use crate::error::SolverError;
    pub use crate::grid::SpatialGrid;
    pub use crate::model::AquiferModel;
    pub use crate::solver::{
        BoundaryHeads, ConvergenceMetric, GroundwaterFlowSolver, SolveReport, SolveStatus,
        SolverConfig,
    };
    pub use crate::zones::{Zone, ZoneDefinition};
}
