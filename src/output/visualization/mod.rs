//! Head-profile plotting
//!
//! Renders hydraulic head over distance with `plotters`. The backend is
//! chosen from the output path extension (`.svg` → SVG, anything else →
//! bitmap PNG).

mod config;
mod profile;

pub use config::{PlotConfig, NO_TITLE};
pub use profile::{plot_head_profile, plot_profile_comparison};
