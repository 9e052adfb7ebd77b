//! Spatial head-profile plotting
//!
//! # Usage
//!
//! ```rust,ignore
//! use aquifer_rs::output::visualization::plot_head_profile;
//!
//! let report = solver.solve(&model, &boundary, &config)?;
//! plot_head_profile(
//!     model.grid().positions().as_slice(),
//!     report.head.as_slice(),
//!     "head_profile.png",
//!     None,
//! )?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot one head profile over distance.
///
/// # Arguments
///
/// * `positions` - Node positions [m]
/// * `head` - Head values, one per node [m]
/// * `output_path` - Path to save the plot (PNG or SVG by extension)
/// * `config` - Optional plot configuration
pub fn plot_head_profile(
    positions: &[f64],
    head: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_profile_comparison(positions, vec![("Head", head)], output_path, config)
}

/// Overlay several head profiles over the same node positions.
///
/// Used to compare intermediate snapshots (collected through the solver's
/// observer hook) against the final converged profile.
///
/// # Arguments
///
/// * `positions` - Node positions shared by every profile [m]
/// * `profiles` - `(label, head values)` pairs
/// * `output_path` - Path to save the plot (PNG or SVG by extension)
/// * `config` - Optional plot configuration
pub fn plot_profile_comparison(
    positions: &[f64],
    profiles: Vec<(&str, &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    if positions.is_empty() {
        return Err("Empty position grid".into());
    }
    for (label, head) in &profiles {
        if head.len() != positions.len() {
            return Err(format!(
                "Profile '{}' has {} values for {} positions",
                label,
                head.len(),
                positions.len()
            )
            .into());
        }
    }

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::head_profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Axis ranges: x spans the grid, y fits the heads with a small margin.
    // Heads sit far from zero (hundreds of meters asl), so a zero-based axis
    // would flatten every profile into a line.
    let x_min = positions[0];
    let x_max = positions[positions.len() - 1];

    let heads = profiles.iter().flat_map(|(_, h)| h.iter().cloned());
    let y_min = heads.clone().fold(f64::INFINITY, f64::min);
    let y_max = heads.fold(f64::NEG_INFINITY, f64::max);
    let y_pad = ((y_max - y_min) * 0.05).max(1e-6);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(
                backend,
                positions,
                &profiles,
                config,
                (x_min, x_max),
                (y_min - y_pad, y_max + y_pad),
            )
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(
                backend,
                positions,
                &profiles,
                config,
                (x_min, x_max),
                (y_min - y_pad, y_max + y_pad),
            )
        }
    }
}

/// Implementation for profile plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    positions: &[f64],
    profiles: &[(&str, &[f64])],
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    // Intermediate snapshots cycle through thin colored lines; a single
    // profile uses the configured color and width.
    let colors = [GREEN, RED, MAGENTA, CYAN, BLACK];

    for (idx, (label, head)) in profiles.iter().enumerate() {
        let (color, width) = if profiles.len() == 1 {
            (config.line_color, config.line_width)
        } else if idx == profiles.len() - 1 {
            // Final profile drawn last and heaviest, like the reference.
            (config.line_color, config.line_width * 2)
        } else {
            (colors[idx % colors.len()], 1)
        };

        chart
            .draw_series(LineSeries::new(
                positions.iter().zip(head.iter()).map(|(x, h)| (*x, *h)),
                ShapeStyle::from(&color).stroke_width(width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
