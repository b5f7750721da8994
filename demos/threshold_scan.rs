//! Example: lasing threshold scan over the control grid
//!
//! Sweeps every pump position of the control at a few cavity lifetimes and
//! reports, per drive, whether the run is above threshold (`No < Ne`) and
//! the peak photon ratio it reaches.

use laser_rs::{
    config::ControlScale,
    physics::{PhysicalConstants, SteadyState},
    solver::{Integrator, sweep},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Nd:YAG Threshold Scan");
    println!("═══════════════════════════════════════════════════════\n");

    let constants = PhysicalConstants::nd_yag().with_window(1.0e-4, 5_000)?;
    let integrator = Integrator::new(constants)?;
    let controls = ControlScale::default();

    let pump_positions = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0];
    let lifetime_positions = [1.0, 10.0, 30.0, 50.0];

    for lifetime in lifetime_positions {
        let drives = pump_positions
            .iter()
            .map(|&pump| controls.drive(pump, lifetime))
            .collect::<Result<Vec<_>, _>>()?;

        println!("Tc = {} ns", lifetime);
        println!("{:>8} {:>10} {:>10} {:>12}", "pump", "No/Ne", "Wp/Wt", "peak U/Uo");
        println!("{:-<44}", "");

        for (drive, result) in drives.iter().zip(sweep(&integrator, &drives)) {
            let steady = SteadyState::derive(&constants, drive.pump_rate, drive.cavity_lifetime)?;
            let threshold = steady
                .threshold_ratio()
                .map(|ratio| format!("{:.4}", ratio))
                .unwrap_or_else(|| "-".to_string());
            let over_threshold = steady
                .decay_rate
                .filter(|wt| *wt != 0.0)
                .map(|wt| format!("{:.3}", drive.pump_rate / wt))
                .unwrap_or_else(|| "-".to_string());

            match result {
                Ok(trajectory) => println!(
                    "{:>8.1} {:>10} {:>10} {:>12.5}",
                    drive.pump_rate / controls.pump_per_tick,
                    threshold,
                    over_threshold,
                    trajectory.peak_photon_ratio()
                ),
                Err(error) => println!("{:>8.1} failed: {}", drive.pump_rate / controls.pump_per_tick, error),
            }
        }
        println!();
    }

    Ok(())
}
