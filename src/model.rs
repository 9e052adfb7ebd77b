//! 1D heterogeneous aquifer model
//!
//! # Mathematical Background
//!
//! ## Darcy's Law
//!
//! Groundwater flux through a porous interval is proportional to the head
//! gradient across it:
//!
//! ```text
//! q[i] = -k[i]·n[i]·(h[i+1] - h[i]) / dx[i]
//! ```
//!
//! Where:
//! - **h** : hydraulic head at the nodes [m]
//! - **k** : hydraulic conductivity per interval [m/s]
//! - **n** : porosity per interval (void fraction, dimensionless)
//! - **dx** : node spacing [m]
//!
//! ## Continuity
//!
//! The rate of head change at an interior node follows from the divergence of
//! the flux between the two adjacent intervals:
//!
//! ```text
//! dh/dt[j] = -(q[j+1] - q[j]) / dx_inner[j]
//! ```
//!
//! The model owns this spatial discretization (the WHAT); time integration to
//! steady state is the solver's job (the HOW).
//!
//! ## Flux rounding
//!
//! Fluxes are rounded to 10 decimal digits before differencing. Without this,
//! floating-point noise in near-equilibrium fluxes keeps producing sub-µm
//! head updates and the mean-change convergence check never settles.

use log::warn;
use nalgebra::DVector;

use crate::error::SolverError;
use crate::grid::SpatialGrid;
use crate::zones::ZoneDefinition;

/// Decimal digits kept in the Darcy flux.
const FLUX_DECIMALS: i32 = 10;

/// A 1D aquifer: spatial grid plus per-interval material properties.
///
/// Immutable once constructed. The constructor materializes the zone
/// partitions into per-interval vectors and precomputes the spacing vectors
/// used by every solver iteration.
///
/// # Validation
///
/// - Conductivity and porosity partitions must materialize to exactly N−1
///   values ([`SolverError::Configuration`] otherwise).
/// - Porosity must be positive everywhere: a non-positive void fraction has
///   no physical meaning and typically indicates a zone-indexing bug
///   ([`SolverError::InvalidZoneProperty`]).
/// - Non-positive conductivity flattens or flips the flux but computes fine;
///   it is logged as a warning rather than rejected.
///
/// # Example
///
/// ```rust
/// use aquifer_rs::{AquiferModel, SpatialGrid, ZoneDefinition};
///
/// let grid = SpatialGrid::uniform(100, 100.0).unwrap();
/// let conductivity = ZoneDefinition::piecewise(&[33, 66], &[2.84e-5, 0.69e-5, 2.84e-5]).unwrap();
/// let porosity = ZoneDefinition::piecewise(&[33, 66], &[0.40, 0.35, 0.40]).unwrap();
///
/// let model = AquiferModel::new(grid, &conductivity, &porosity).unwrap();
/// assert_eq!(model.node_count(), 100);
/// assert_eq!(model.interval_count(), 99);
/// ```
#[derive(Debug, Clone)]
pub struct AquiferModel {
    grid: SpatialGrid,

    /// Hydraulic conductivity per interval [m/s], length N−1.
    conductivity: DVector<f64>,

    /// Porosity per interval (dimensionless), length N−1.
    porosity: DVector<f64>,

    /// Node spacings dx, length N−1. Precomputed; the grid is immutable.
    dx: DVector<f64>,

    /// Spacings between flux sample points, length N−2.
    dx_inner: DVector<f64>,
}

impl AquiferModel {
    /// Build a model from a grid and zoned properties.
    pub fn new(
        grid: SpatialGrid,
        conductivity: &ZoneDefinition,
        porosity: &ZoneDefinition,
    ) -> Result<Self, SolverError> {
        let intervals = grid.interval_count();
        let conductivity = conductivity.materialize(intervals)?;
        let porosity = porosity.materialize(intervals)?;
        Self::from_arrays(grid, conductivity, porosity)
    }

    /// Build a model from already-expanded per-interval property vectors.
    ///
    /// Both vectors must have length N−1 for a grid of N nodes.
    pub fn from_arrays(
        grid: SpatialGrid,
        conductivity: DVector<f64>,
        porosity: DVector<f64>,
    ) -> Result<Self, SolverError> {
        let intervals = grid.interval_count();
        if conductivity.len() != intervals {
            return Err(SolverError::configuration(format!(
                "conductivity needs one value per interval: expected {}, got {}",
                intervals,
                conductivity.len()
            )));
        }
        if porosity.len() != intervals {
            return Err(SolverError::configuration(format!(
                "porosity needs one value per interval: expected {}, got {}",
                intervals,
                porosity.len()
            )));
        }

        for (index, &value) in porosity.iter().enumerate() {
            if value <= 0.0 {
                return Err(SolverError::InvalidZoneProperty {
                    name: "porosity",
                    index,
                    value,
                });
            }
        }

        for (index, &value) in conductivity.iter().enumerate() {
            if value <= 0.0 {
                warn!(
                    "non-positive conductivity {} at interval {}: flux will flatten or reverse",
                    value, index
                );
            }
        }

        let dx = grid.spacings();
        let dx_inner = grid.inner_spacings();

        Ok(Self {
            grid,
            conductivity,
            porosity,
            dx,
            dx_inner,
        })
    }

    // ========================================== Queries ==========================================

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn node_count(&self) -> usize {
        self.grid.node_count()
    }

    pub fn interval_count(&self) -> usize {
        self.grid.interval_count()
    }

    pub fn conductivity(&self) -> &DVector<f64> {
        &self.conductivity
    }

    pub fn porosity(&self) -> &DVector<f64> {
        &self.porosity
    }

    /// Model name, used in report metadata and demo output.
    pub fn name(&self) -> &'static str {
        "Darcy 1D Heterogeneous"
    }

    // ========================================== Physics ==========================================

    /// Darcy flux per interval for the given head field, length N−1.
    ///
    /// `q[i] = -k[i]·n[i]·(h[i+1] - h[i]) / dx[i]`, rounded to
    /// [`FLUX_DECIMALS`] digits.
    pub fn darcy_flux(&self, head: &DVector<f64>) -> DVector<f64> {
        DVector::from_fn(self.interval_count(), |i, _| {
            let dh = head[i + 1] - head[i];
            let q = -self.conductivity[i] * self.porosity[i] * dh / self.dx[i];
            round_decimals(q, FLUX_DECIMALS)
        })
    }

    /// Rate of head change at the interior nodes, length N−2.
    ///
    /// `dh_dt[j] = -(q[j+1] - q[j]) / dx_inner[j]`; entry `j` belongs to
    /// node `j + 1`.
    pub fn head_rate(&self, head: &DVector<f64>) -> DVector<f64> {
        let q = self.darcy_flux(head);
        DVector::from_fn(self.node_count() - 2, |j, _| {
            -(q[j + 1] - q[j]) / self.dx_inner[j]
        })
    }
}

/// Round to a fixed number of decimal digits.
#[inline]
fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// =================================================================================================
// Tests
// =================================================================================================
