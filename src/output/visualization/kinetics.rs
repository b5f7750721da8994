//! Kinetics plots of a trajectory
//!
//! # Layout
//!
//! [`plot_trajectory`] draws two stacked panels sharing the time axis:
//!
//! - top: `N/Ne, %` and, when the run has a threshold, `No/Ne, %`
//! - bottom: `U/Uo`
//!
//! An undefined threshold channel is left out of the top panel; it is never
//! drawn as a line at zero.
//!
//! [`plot_photon_comparison`] overlays the `U/Uo` curves of several runs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use laser_rs::output::visualization::plot_trajectory;
//! use laser_rs::physics::PhysicalConstants;
//! use laser_rs::solver::Integrator;
//!
//! let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
//! let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
//!
//! plot_trajectory(&trajectory, "ndyag.png", None).unwrap();
//! ```

use std::error::Error;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::{NO_TITLE, PlotConfig};
use crate::solver::Trajectory;

// =================================================================================================
// Series extraction
// =================================================================================================

/// One labelled curve, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Population curves in percent: `N/Ne` and, if defined, `No/Ne`
pub fn population_series(trajectory: &Trajectory) -> Vec<PlotSeries> {
    let mut series = vec![PlotSeries {
        label: "N/Ne, %".to_string(),
        points: percent_points(&trajectory.time, &trajectory.lower_ratio),
    }];

    if let Some(threshold) = trajectory.threshold_values() {
        series.push(PlotSeries {
            label: "No/Ne, %".to_string(),
            points: percent_points(&trajectory.time, &threshold),
        });
    }

    series
}

/// Photon curve `U/Uo`
pub fn photon_series(trajectory: &Trajectory) -> PlotSeries {
    PlotSeries {
        label: "U/Uo".to_string(),
        points: trajectory
            .time
            .iter()
            .copied()
            .zip(trajectory.photon_ratio.iter().copied())
            .collect(),
    }
}

fn percent_points(time: &[f64], ratios: &[f64]) -> Vec<(f64, f64)> {
    time.iter()
        .zip(ratios)
        .map(|(t, r)| (*t, 100.0 * r))
        .collect()
}

/// Y range covering every finite value, padded by 10 %
fn value_range(series: &[PlotSeries]) -> Range<f64> {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, y)| *y))
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let span = (max - min).max(max.abs() * 1e-3).max(1e-10);
    let pad = 0.1 * span;
    (min - pad)..(max + pad)
}

fn time_range(trajectory: &Trajectory) -> Range<f64> {
    let end = trajectory.time.last().copied().unwrap_or(0.0);
    0.0..if end > 0.0 { end } else { 1.0 }
}

fn is_svg(output_path: &str) -> bool {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render the two-panel kinetics plot (PNG, or SVG for a `.svg` path)
pub fn plot_trajectory(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to plot".into());
    }

    let default_config = PlotConfig::kinetics(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_trajectory_impl(backend, trajectory, config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_trajectory_impl(backend, trajectory, config)
    }
}

/// Overlay the `U/Uo` curves of several labelled runs
pub fn plot_photon_comparison(
    datasets: &[(String, &Trajectory)],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::comparison(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<PlotSeries> = datasets
        .iter()
        .map(|(label, trajectory)| PlotSeries {
            label: label.clone(),
            points: photon_series(trajectory).points,
        })
        .collect();

    let end = datasets
        .iter()
        .map(|(_, trajectory)| time_range(trajectory).end)
        .fold(0.0_f64, f64::max);

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_comparison_impl(backend, &series, config, 0.0..end)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_comparison_impl(backend, &series, config, 0.0..end)
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn plot_trajectory_impl<DB: DrawingBackend>(
    backend: DB,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((2, 1));
    let times = time_range(trajectory);

    draw_panel(
        &panels[0],
        &population_series(trajectory),
        Some(config.title.as_str()),
        &config.population_label,
        config,
        times.clone(),
    )?;

    draw_panel(
        &panels[1],
        &[photon_series(trajectory)],
        None,
        &config.photon_label,
        config,
        times,
    )?;

    root.present()?;
    Ok(())
}

fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[PlotSeries],
    config: &PlotConfig,
    times: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    draw_panel(&root, series, Some(config.title.as_str()), &config.photon_label, config, times)?;

    root.present()?;
    Ok(())
}

/// Draw labelled series on one drawing area
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[PlotSeries],
    caption: Option<&str>,
    ylabel: &str,
    config: &PlotConfig,
    times: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut builder = ChartBuilder::on(area);
    builder.margin(15).x_label_area_size(45).y_label_area_size(70);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 30).into_font());
    }

    let mut chart = builder.build_cartesian_2d(times, value_range(series))?;

    let x_format = |x: &f64| format!("{:.2}", x);
    let y_format = |y: &f64| format!("{:.2}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(ylabel)
        .x_label_formatter(&x_format)
        .y_label_formatter(&y_format);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (index, curve) in series.iter().enumerate() {
        let color = config.series_color(index);

        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied().filter(|(_, y)| y.is_finite()),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
