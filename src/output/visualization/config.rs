//! Plot configuration
//!
//! Shared appearance settings for the head-profile plots.

use plotters::prelude::*;

/// Sentinel for an untitled plot.
pub const NO_TITLE: &str = "";

/// Configuration for customizing head-profile plots.
///
/// # Example
///
/// ```rust,ignore
/// use aquifer_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::head_profile("Hydraulic Head over Distance");
/// config.line_color = BLUE;
/// config.line_width = 4;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "Distance (m)")
    pub xlabel: String,

    /// Y-axis label (default: "Hydraulic Head (m asl)")
    pub ylabel: String,

    /// Line color (default: BLUE)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,

    /// Whether to draw grid lines (default: true)
    pub show_grid: bool,
}

impl PlotConfig {
    /// Configuration for a head-over-distance profile plot.
    pub fn head_profile(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Hydraulic Head over Distance".to_string(),
            xlabel: "Distance (m)".to_string(),
            ylabel: "Hydraulic Head (m asl)".to_string(),
            line_color: BLUE,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}
