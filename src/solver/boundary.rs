//! Fixed-head boundary conditions
//!
//! The domain has exactly two Dirichlet boundaries: a fixed head at each end.
//! The same pair also seeds the initial interior guess, as a linear
//! interpolation across the nodes.

use nalgebra::DVector;

use crate::error::SolverError;

/// Fixed hydraulic heads at the two ends of the domain.
///
/// Boundary entries of the head field are set from this pair before the first
/// iteration and never touched afterwards.
///
/// # Example
///
/// ```rust
/// use aquifer_rs::BoundaryHeads;
///
/// let boundary = BoundaryHeads::new(444.0, 430.0);
/// let seed = boundary.linear_profile(100);
///
/// assert_eq!(seed[0], 444.0);
/// assert_eq!(seed[99], 430.0);
/// assert_eq!(boundary.head_drop(), 14.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHeads {
    /// Fixed head at the first node [m].
    pub left: f64,

    /// Fixed head at the last node [m].
    pub right: f64,
}

impl BoundaryHeads {
    /// Create a boundary pair.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Total head drop across the domain (positive when flow is left→right).
    pub fn head_drop(&self) -> f64 {
        self.left - self.right
    }

    /// Linear interpolation between the two boundary heads over `nodes`
    /// evenly spaced samples, endpoints included.
    ///
    /// This is the solver's default initial guess.
    pub fn linear_profile(&self, nodes: usize) -> DVector<f64> {
        let span = (nodes - 1) as f64;
        DVector::from_fn(nodes, |i, _| {
            self.left + (self.right - self.left) * (i as f64 / span)
        })
    }

    /// Boundary heads must be finite.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.left.is_finite() || !self.right.is_finite() {
            return Err(SolverError::configuration(format!(
                "boundary heads must be finite, got ({}, {})",
                self.left, self.right
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
