//! Command-line front end: one run, or a sweep over pump positions

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::info;

use laser_rs::config::SimulationConfig;
use laser_rs::models::{DriveParameters, PumpProfile};
use laser_rs::output::export::{TextConfig, TextExporter, export_with_notice};
use laser_rs::output::visualization::{PlotConfig, plot_photon_comparison, plot_trajectory};
use laser_rs::solver::{Integrator, Trajectory, sweep};

#[derive(Parser)]
#[command(name = "ndyag")]
#[command(about = "Nd:YAG three-level laser rate-equation kinetics", long_about = None)]
struct Cli {
    /// JSON session configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pump control position (ticks of the configured pump scale)
    #[arg(short, long, default_value_t = 2.0)]
    pump: f64,

    /// Cavity lifetime control position (ticks of the configured lifetime scale)
    #[arg(short, long, default_value_t = 30.0)]
    lifetime: f64,

    /// Raw pump rate Wp, bypassing the control scale (not with --sweep)
    #[arg(long, value_name = "RATE", conflicts_with = "sweep")]
    wp: Option<f64>,

    /// Raw cavity lifetime Tc, bypassing the control scale
    #[arg(long, value_name = "TIME")]
    tc: Option<f64>,

    /// Switch the pump off after this fraction of the window
    #[arg(long, value_name = "FRACTION")]
    cutoff: Option<f64>,

    /// Write the trajectory as aligned text
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Prepend the metadata comment block to the export
    #[arg(long, action = ArgAction::SetTrue)]
    metadata: bool,

    /// Render the kinetics plot (PNG, or SVG for a .svg path)
    #[arg(long, value_name = "FILE")]
    plot: Option<String>,

    /// Comma-separated pump positions to sweep at the chosen lifetime
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    sweep: Vec<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if cli.cutoff.is_some() {
        config.pump_cutoff = cli.cutoff;
        config.validate()?;
    }

    let integrator = Integrator::new(config.constants)?;

    if cli.sweep.is_empty() {
        run_single(&cli, &config, &integrator)
    } else {
        run_sweep(&cli, &config, &integrator)
    }
}

/// Drive from the control positions, with raw rates taking precedence
fn drive_for(cli: &Cli, config: &SimulationConfig, pump_position: f64) -> Result<DriveParameters, Box<dyn Error>> {
    let controls = &config.controls;

    let pump_rate = match cli.wp {
        Some(wp) => wp,
        None => controls.pump_rate(pump_position)?,
    };
    let cavity_lifetime = match cli.tc {
        Some(tc) => tc,
        None => controls.cavity_lifetime(cli.lifetime)?,
    };

    Ok(DriveParameters::new(pump_rate, cavity_lifetime).with_profile(config.pump_profile()))
}

fn run_single(cli: &Cli, config: &SimulationConfig, integrator: &Integrator) -> Result<(), Box<dyn Error>> {
    let drive = drive_for(cli, config, cli.pump)?;
    let trajectory = integrator.solve(&drive)?;

    print_summary(&trajectory);

    if let Some(path) = &cli.export {
        let mut text = TextConfig::default().precision(config.export_precision);
        if cli.metadata {
            text = text.with_metadata();
        }

        match export_with_notice(&TextExporter::new(text), &trajectory, path) {
            Some(notice) => eprintln!("{}", notice),
            None => info!("Trajectory written to {}", path.display()),
        }
    }

    if let Some(path) = &cli.plot {
        let title = format!(
            "Wp = {:.3e}, Tc = {:.3e}",
            drive.pump_rate, drive.cavity_lifetime
        );
        plot_trajectory(&trajectory, path, Some(&PlotConfig::kinetics(title)))?;
        info!("Plot written to {}", path);
    }

    Ok(())
}

fn run_sweep(cli: &Cli, config: &SimulationConfig, integrator: &Integrator) -> Result<(), Box<dyn Error>> {
    let drives = cli
        .sweep
        .iter()
        .map(|&position| drive_for(cli, config, position))
        .collect::<Result<Vec<_>, _>>()?;

    let mut finished: Vec<(String, Trajectory)> = Vec::new();
    for (position, result) in cli.sweep.iter().zip(sweep(integrator, &drives)) {
        match result {
            Ok(trajectory) => {
                println!("pump {:>6.2}: peak U/Uo = {:.5}", position, trajectory.peak_photon_ratio());
                finished.push((format!("pump {}", position), trajectory));
            }
            Err(error) => eprintln!("pump {:>6.2}: {}", position, error),
        }
    }

    if let Some(path) = &cli.plot
        && !finished.is_empty()
    {
        let datasets: Vec<(String, &Trajectory)> = finished
            .iter()
            .map(|(label, trajectory)| (label.clone(), trajectory))
            .collect();
        plot_photon_comparison(&datasets, path, None)?;
        info!("Comparison plot written to {}", path);
    }

    Ok(())
}

fn print_summary(trajectory: &Trajectory) {
    let drive = &trajectory.drive;
    let profile = match drive.pump_profile {
        PumpProfile::Continuous => "continuous".to_string(),
        PumpProfile::Cutoff { fraction } => format!("off after {:.0} % of the window", 100.0 * fraction),
    };

    println!("Wp = {}, Tc = {} ({})", drive.pump_rate, drive.cavity_lifetime, profile);
    println!("{}", trajectory.steady);
    println!(
        "{} samples, peak U/Uo = {:.5}",
        trajectory.len(),
        trajectory.peak_photon_ratio()
    );
}

// =================================================================================================
// Tests
// =================================================================================================
