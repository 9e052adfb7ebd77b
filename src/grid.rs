//! 1D spatial grid
//!
//! The grid is an ordered sequence of N node positions along the flow
//! direction. Heads live on nodes; material properties and Darcy fluxes live
//! on the N−1 inter-node intervals, so the double-difference update chain
//! needs N ≥ 3 (at least one interior node).
//!
//! Spacing may be non-uniform via [`SpatialGrid::from_positions`], but the
//! usual construction is [`SpatialGrid::uniform`].

use nalgebra::DVector;

use crate::error::SolverError;

/// Minimum node count for the explicit update chain.
const MIN_NODES: usize = 3;

/// Ordered node positions of a 1D domain.
///
/// # Invariants
///
/// - At least 3 nodes.
/// - Positions are finite and non-decreasing. Equal adjacent positions are
///   accepted at construction and rejected by the solver as
///   [`SolverError::DegenerateGrid`] before the first sweep, so a duplicated
///   node surfaces as a diagnostic rather than a silent NaN.
///
/// # Example
///
/// ```rust
/// use aquifer_rs::SpatialGrid;
///
/// // 100 nodes from 0 to 9900 m, 100 m apart
/// let grid = SpatialGrid::uniform(100, 100.0).unwrap();
/// assert_eq!(grid.node_count(), 100);
/// assert_eq!(grid.extent(), 9900.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid {
    positions: DVector<f64>,
}

impl SpatialGrid {
    /// Create a uniformly spaced grid: `x[i] = i * spacing`.
    pub fn uniform(nodes: usize, spacing: f64) -> Result<Self, SolverError> {
        if nodes < MIN_NODES {
            return Err(SolverError::configuration(format!(
                "grid needs at least {} nodes for interior updates, got {}",
                MIN_NODES, nodes
            )));
        }
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(SolverError::configuration(format!(
                "grid spacing must be positive and finite, got {}",
                spacing
            )));
        }

        let positions = DVector::from_fn(nodes, |i, _| i as f64 * spacing);
        Ok(Self { positions })
    }

    /// Create a grid from explicit node positions.
    ///
    /// Positions must be finite and non-decreasing. A strictly decreasing
    /// pair is a [`SolverError::Configuration`]; equal adjacent positions are
    /// deferred to the solver's degeneracy check.
    pub fn from_positions(positions: Vec<f64>) -> Result<Self, SolverError> {
        if positions.len() < MIN_NODES {
            return Err(SolverError::configuration(format!(
                "grid needs at least {} nodes for interior updates, got {}",
                MIN_NODES,
                positions.len()
            )));
        }
        if positions.iter().any(|x| !x.is_finite()) {
            return Err(SolverError::configuration(
                "grid positions must be finite",
            ));
        }
        for i in 0..positions.len() - 1 {
            if positions[i + 1] < positions[i] {
                return Err(SolverError::configuration(format!(
                    "grid positions must be non-decreasing (nodes {} and {})",
                    i,
                    i + 1
                )));
            }
        }

        Ok(Self {
            positions: DVector::from_vec(positions),
        })
    }

    // ========================================== Queries ==========================================

    /// Number of nodes N.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of inter-node intervals, N−1.
    pub fn interval_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Node positions.
    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }

    /// Domain length from first to last node.
    pub fn extent(&self) -> f64 {
        self.positions[self.positions.len() - 1] - self.positions[0]
    }

    /// Spacings between adjacent nodes: `dx[i] = x[i+1] − x[i]`, length N−1.
    pub fn spacings(&self) -> DVector<f64> {
        let n = self.interval_count();
        DVector::from_fn(n, |i, _| self.positions[i + 1] - self.positions[i])
    }

    /// Spacings between flux sample points, length N−2.
    ///
    /// The flux sample points are the cumulative sums of `dx`; their
    /// differences reduce to `dx_inner[i] = dx[i+1]`. For a uniform grid
    /// this equals the node spacing everywhere.
    pub fn inner_spacings(&self) -> DVector<f64> {
        let dx = self.spacings();
        let mut x_inner = DVector::zeros(dx.len());
        let mut running = 0.0;
        for i in 0..dx.len() {
            running += dx[i];
            x_inner[i] = running;
        }
        DVector::from_fn(dx.len() - 1, |i, _| x_inner[i + 1] - x_inner[i])
    }

    /// Fail with [`SolverError::DegenerateGrid`] if any interval has zero
    /// width. The solver calls this once before the first sweep.
    pub fn check_degenerate(&self) -> Result<(), SolverError> {
        for i in 0..self.interval_count() {
            if self.positions[i + 1] == self.positions[i] {
                return Err(SolverError::DegenerateGrid {
                    left: i,
                    right: i + 1,
                });
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
