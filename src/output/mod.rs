//! Result visualization
//!
//! Peripheral to the solver: these modules consume `(positions, head)` pairs
//! read-only and have no influence on the numerics. Compiled only with the
//! `visualization` feature.

pub mod visualization;

pub use visualization::{plot_head_profile, plot_profile_comparison, PlotConfig};
