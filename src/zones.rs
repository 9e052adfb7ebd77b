//! Zoned material properties
//!
//! Conductivity and porosity are piecewise constant: the N−1 inter-node
//! intervals are partitioned into contiguous zones, each carrying one scalar
//! value. The partition is declared as zone cutoff indices plus one value per
//! zone and validated once at construction, replacing ad hoc slice assignment
//! with an explicit, testable structure.
//!
//! # Example
//!
//! ```rust
//! use aquifer_rs::ZoneDefinition;
//!
//! // Three conductivity zones: [0,33) [33,66) [66,end)
//! let k = ZoneDefinition::piecewise(&[33, 66], &[2.84e-5, 0.69e-5, 2.84e-5]).unwrap();
//! let values = k.materialize(99).unwrap();
//! assert_eq!(values.len(), 99);
//! assert_eq!(values[32], 2.84e-5);
//! assert_eq!(values[33], 0.69e-5);
//! assert_eq!(values[98], 2.84e-5);
//! ```

use nalgebra::DVector;

use crate::error::SolverError;

/// One contiguous run of intervals sharing a property value.
///
/// Half-open index range `[start, end)` over inter-node intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub start: usize,
    pub end: usize,
    pub value: f64,
}

/// A declared partition of the interval range into contiguous zones.
///
/// Stored as the cutoff indices between zones plus one value per zone
/// (`values.len() == cutoffs.len() + 1`). The last zone always extends to
/// the final interval, so the partition covers the whole range without gaps
/// or overlaps by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDefinition {
    cutoffs: Vec<usize>,
    values: Vec<f64>,
}

impl ZoneDefinition {
    /// Create a partition from zone cutoffs and per-zone values.
    ///
    /// `cutoffs[i]` is the first interval index of zone `i + 1`. Cutoffs must
    /// be strictly increasing and nonzero; there must be exactly one more
    /// value than cutoffs.
    pub fn piecewise(cutoffs: &[usize], values: &[f64]) -> Result<Self, SolverError> {
        if values.len() != cutoffs.len() + 1 {
            return Err(SolverError::configuration(format!(
                "zone partition needs one value per zone: {} cutoffs require {} values, got {}",
                cutoffs.len(),
                cutoffs.len() + 1,
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::configuration("zone values must be finite"));
        }
        for (i, window) in cutoffs.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(SolverError::configuration(format!(
                    "zone cutoffs must be strictly increasing: cutoff {} = {} follows {}",
                    i + 1,
                    window[1],
                    window[0]
                )));
            }
        }
        if cutoffs.first() == Some(&0) {
            return Err(SolverError::configuration(
                "first zone cutoff must be greater than 0",
            ));
        }

        Ok(Self {
            cutoffs: cutoffs.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Create a single zone covering the whole domain.
    pub fn uniform(value: f64) -> Self {
        Self {
            cutoffs: Vec::new(),
            values: vec![value],
        }
    }

    /// Number of zones.
    pub fn zone_count(&self) -> usize {
        self.values.len()
    }

    /// Per-zone values in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The explicit `(start, end, value)` ranges for a domain with
    /// `intervals` inter-node intervals.
    pub fn zones(&self, intervals: usize) -> Vec<Zone> {
        let mut zones = Vec::with_capacity(self.values.len());
        let mut start = 0;
        for (i, &value) in self.values.iter().enumerate() {
            let end = self.cutoffs.get(i).copied().unwrap_or(intervals);
            zones.push(Zone { start, end, value });
            start = end;
        }
        zones
    }

    /// Expand the partition into one value per interval.
    ///
    /// Every cutoff must lie strictly inside `[1, intervals)`; a cutoff at or
    /// beyond the interval count means the zone indices were written for a
    /// different grid.
    pub fn materialize(&self, intervals: usize) -> Result<DVector<f64>, SolverError> {
        if intervals == 0 {
            return Err(SolverError::configuration(
                "cannot materialize zones over an empty interval range",
            ));
        }
        if let Some(&last) = self.cutoffs.last() {
            if last >= intervals {
                return Err(SolverError::configuration(format!(
                    "zone cutoff {} is outside the {} intervals of the grid",
                    last, intervals
                )));
            }
        }

        let mut out = DVector::zeros(intervals);
        for zone in self.zones(intervals) {
            for i in zone.start..zone.end.min(intervals) {
                out[i] = zone.value;
            }
        }
        Ok(out)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
