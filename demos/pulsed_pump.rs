//! Example: Nd:YAG rod - continuous vs pulsed pump
//!
//! Integrates the three-level rate equations for the same rod and cavity
//! twice: once with the pump on for the whole window, once with the lamp
//! switched off after 95 % of it. Both kinetics are plotted and exported.
//!
//! **Physical System**:
//! - Active medium: Nd:YAG, Nv = 5e7 um^-3
//! - Transition 2 -> 1: 230 us spontaneous lifetime
//! - Cavity photon lifetime: 30 ns
//! - Pump rate: 2e-3 1/ms (2 ticks of the pump control)

use laser_rs::{
    models::{DriveParameters, PumpProfile},
    output::{
        PlotConfig, TextExporter, export_with_notice, plot_photon_comparison, plot_trajectory,
    },
    physics::PhysicalConstants,
    solver::{Integrator, Trajectory},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Nd:YAG Kinetics - Continuous vs Pulsed Pump");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Material and window ======

    let constants = PhysicalConstants::nd_yag();

    println!("Nd:YAG constants:");
    println!("  Wi  : {:.3} um^3/ms", constants.induced_emission());
    println!("  Nv  : {:.3e} um^-3", constants.particle_density());
    println!("  W21 : {:.4} 1/ms", constants.spontaneous_21());
    println!("  W32 : {:.4e} 1/ms", constants.spontaneous_32());
    println!("  dt  : {} ms, Np = {}\n", constants.time_step(), constants.samples());

    let integrator = Integrator::new(constants)?;

    // ====== Drives ======

    let pump_rate = 2.0e-3;
    let cavity_lifetime = 30.0e-6;

    let drives = vec![
        ("continuous", DriveParameters::new(pump_rate, cavity_lifetime)),
        (
            "pulsed",
            DriveParameters::new(pump_rate, cavity_lifetime).with_profile(PumpProfile::cutoff(0.95)),
        ),
    ];

    let tmp_dir = std::env::temp_dir();
    let mut results: Vec<(String, Trajectory)> = Vec::new();

    // =============================================================================================
    // Runs
    // =============================================================================================

    for (name, drive) in &drives {
        print!("  {:<12}", name);
        std::io::Write::flush(&mut std::io::stdout())?;

        let started = Instant::now();
        let trajectory = integrator.solve(drive)?;
        println!("✓ {:.3}s", started.elapsed().as_secs_f64());

        let export_path = tmp_dir.join(format!("ndyag_{}.dat", name));
        if let Some(notice) = export_with_notice(&TextExporter::default(), &trajectory, &export_path) {
            eprintln!("  {}", notice);
        }

        let plot_path = tmp_dir.join(format!("ndyag_{}.png", name));
        plot_trajectory(
            &trajectory,
            &plot_path.to_string_lossy(),
            Some(&PlotConfig::kinetics(format!("Nd:YAG, {} pump", name))),
        )?;

        results.push((name.to_string(), trajectory));
    }

    // =============================================================================================
    // Results Analysis
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Results");
    println!("═══════════════════════════════════════════════════════\n");

    println!("Steady state: {}\n", results[0].1.steady);

    println!("{:<12} {:>12} {:>12} {:>12}", "Pump", "Peak U/Uo", "Final U/Uo", "Final N/Ne");
    println!("{:-<52}", "");
    for (name, trajectory) in &results {
        println!(
            "{:<12} {:>12.5} {:>12.5} {:>12.5}",
            name,
            trajectory.peak_photon_ratio(),
            trajectory.photon_ratio.last().copied().unwrap_or(0.0),
            trajectory.lower_ratio.last().copied().unwrap_or(0.0),
        );
    }

    let datasets: Vec<(String, &Trajectory)> = results
        .iter()
        .map(|(name, trajectory)| (name.clone(), trajectory))
        .collect();
    let comparison = tmp_dir.join("ndyag_pump_comparison.png");
    plot_photon_comparison(&datasets, &comparison.to_string_lossy(), None)?;

    println!("\nFiles written to {}", tmp_dir.display());

    Ok(())
}
