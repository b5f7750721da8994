//! Integration tests: physics, models and integrator together
//!
//! These tests run the full Nd:YAG kinetics and check the properties every
//! trajectory must satisfy, independent of the exact numbers.

use approx::assert_relative_eq;

use laser_rs::config::ControlScale;
use laser_rs::error::LaserError;
use laser_rs::models::{DriveParameters, PumpProfile, ThreeLevelRateModel};
use laser_rs::physics::{PHOTON_RATIO_CEILING, PhysicalConstants, PhysicalModel};
use laser_rs::solver::{Integrator, RK4Solver, RequestGate, Solver, sweep};

mod common;
use common::{assert_non_decreasing, integrator_with_window, relative_error, solve};

// =================================================================================================
// Trajectory Shape
// =================================================================================================

#[test]
fn test_time_axis_and_initial_sample() {
    let trajectory = solve(2.0e-3, 30.0e-6);
    let constants = PhysicalConstants::nd_yag();

    assert_eq!(trajectory.len(), 10_000);
    assert_eq!(trajectory.time.len(), trajectory.photon_ratio.len());
    assert_eq!(trajectory.time.len(), trajectory.threshold_ratio.len());

    for (i, t) in trajectory.time.iter().enumerate() {
        assert_eq!(*t, i as f64 * constants.time_step());
    }

    assert_eq!(trajectory.lower_ratio[0], 0.0);
    assert_eq!(trajectory.photon_ratio[0], 0.0);
}

#[test]
fn test_threshold_channel_is_constant() {
    let trajectory = solve(2.0e-3, 30.0e-6);
    let expected = trajectory.steady.threshold_ratio().unwrap();

    assert!(trajectory.threshold_ratio.iter().all(|v| *v == Some(expected)));
    assert!(expected > 0.0);
}

// =================================================================================================
// Control Range
// =================================================================================================

#[test]
fn test_control_grid_never_reaches_photon_guard() {
    // Every control position: pump 0..=5 in 0.05 ticks, lifetime 0..=50 in 1 tick
    let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
    let controls = ControlScale::default();
    let lifetimes: Vec<f64> = (0..=50u32).map(f64::from).collect();

    for pump_tick in 0..=100u32 {
        let pump = f64::from(pump_tick) / 20.0;
        let drives: Vec<DriveParameters> = lifetimes
            .iter()
            .map(|&lifetime| controls.drive(pump, lifetime).unwrap())
            .collect();

        for (drive, result) in drives.iter().zip(sweep(&integrator, &drives)) {
            let trajectory = result.unwrap();

            for channel in [
                &trajectory.lower_ratio,
                &trajectory.photon_ratio,
                &trajectory.photon_density,
            ] {
                assert!(
                    channel.iter().all(|v| v.is_finite()),
                    "non-finite sample for {:?}",
                    drive
                );
            }

            for (i, u) in trajectory.photon_density.iter().enumerate() {
                if let Some(raw) = trajectory.steady.unguarded_photon_ratio(*u) {
                    assert!(
                        raw < PHOTON_RATIO_CEILING,
                        "U/Uo = {} at sample {} for {:?}",
                        raw,
                        i,
                        drive
                    );
                }
            }
            assert_eq!(trajectory.guarded_samples(), 0, "{:?}", drive);

            assert!(
                trajectory.peak_photon_ratio() < 25.0,
                "peak {} for {:?}",
                trajectory.peak_photon_ratio(),
                drive
            );
        }
    }
}

#[test]
fn test_guard_is_visible_against_raw_density() {
    let trajectory = solve(2.0e-3, 30.0e-6);
    let mut forced = trajectory.clone();

    // A photon density past the ceiling records 0 but stays visible raw
    let uo = forced.steady.threshold.photon_density().unwrap();
    forced.photon_density[500] = 60.0 * uo;
    forced.photon_ratio[500] = forced.steady.photon_ratio(forced.photon_density[500]);

    assert_eq!(forced.photon_ratio[500], 0.0);
    assert_eq!(trajectory.guarded_samples(), 0);
    assert_eq!(forced.guarded_samples(), 1);
}

// =================================================================================================
// Photon Floor
// =================================================================================================

#[test]
fn test_floor_holds_photons_below_threshold() {
    // Tc = 1 ns: the inversion never reaches No within the window
    let trajectory = solve(1.0e-3, 1.0e-6);
    let eta = PhysicalConstants::nd_yag().floor_ratio();

    assert_eq!(trajectory.photon_ratio[0], 0.0);
    for ratio in &trajectory.photon_ratio[1..] {
        assert_relative_eq!(*ratio, eta, max_relative = 1e-12);
    }
}

// =================================================================================================
// No Pump, No Cavity
// =================================================================================================

#[test]
fn test_unpumped_medium_without_cavity() {
    let integrator = integrator_with_window(5.0e-5, 21_000);
    let trajectory = integrator.solve_rates(0.0, 0.0).unwrap();

    assert_eq!(trajectory.len(), 21_000);
    assert!(!trajectory.has_threshold());
    assert!(trajectory.threshold_values().is_none());
    assert_eq!(trajectory.steady.saturation_population, 5.0e7);

    assert_eq!(trajectory.lower_ratio[0], 0.0);
    assert_non_decreasing(&trajectory.lower_ratio, 1e-12, "N/Ne");
    assert!(
        trajectory
            .lower_ratio
            .iter()
            .all(|v| *v >= 0.0 && *v <= 1.0 + 1e-9)
    );
    assert!(trajectory.photon_ratio.iter().all(|v| *v == 0.0));
}

#[test]
fn test_zero_lifetime_records_no_photons() {
    let integrator = integrator_with_window(1.0e-4, 2_000);
    let without_cavity = integrator.solve_rates(2.0e-3, 0.0).unwrap();

    assert!(!without_cavity.has_threshold());
    assert!(without_cavity.photon_ratio.iter().all(|v| *v == 0.0));
    assert!(without_cavity.lower_ratio.iter().all(|v| v.is_finite()));
    assert!(without_cavity.lower_ratio[1] > 0.0);
}

// =================================================================================================
// Pump Cutoff
// =================================================================================================

#[test]
fn test_cutoff_matches_continuous_until_switch_off() {
    let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
    let continuous = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
    let pulsed = integrator
        .solve(&DriveParameters::new(2.0e-3, 30.0e-6).with_profile(PumpProfile::cutoff(0.95)))
        .unwrap();

    let cutoff = PumpProfile::cutoff(0.95).cutoff_step(10_000).unwrap();
    assert_eq!(cutoff, 9_500);

    // Sample i is recorded before step i, so samples up to the cutoff step
    // have only seen pumped steps.
    assert_eq!(
        continuous.lower_ratio[..=cutoff],
        pulsed.lower_ratio[..=cutoff]
    );
    assert_eq!(
        continuous.photon_ratio[..=cutoff],
        pulsed.photon_ratio[..=cutoff]
    );
    assert_ne!(
        continuous.lower_ratio[cutoff + 1..],
        pulsed.lower_ratio[cutoff + 1..]
    );

    // Normalizers keep using the nominal pump rate
    assert_eq!(continuous.steady, pulsed.steady);
}

#[test]
fn test_photons_decay_after_cutoff() {
    let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
    let pulsed = integrator
        .solve(&DriveParameters::new(2.0e-3, 30.0e-6).with_profile(PumpProfile::cutoff(0.95)))
        .unwrap();

    let before = pulsed.photon_ratio[9_400];
    let last = *pulsed.photon_ratio.last().unwrap();

    assert!(before > 0.5, "U/Uo before cutoff: {}", before);
    assert!(last < before, "U/Uo did not decay: {} -> {}", before, last);
}

// =================================================================================================
// Determinism and Concurrency
// =================================================================================================

#[test]
fn test_repeated_solves_are_identical() {
    let integrator = integrator_with_window(1.0e-4, 3_000);
    let drive = DriveParameters::new(2.5e-3, 20.0e-6).with_profile(PumpProfile::cutoff(0.5));

    let first = integrator.solve(&drive).unwrap();
    let second = integrator.solve(&drive).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_sweep_preserves_order_and_reports_failures() {
    let integrator = integrator_with_window(1.0e-4, 1_000);
    let drives = vec![
        DriveParameters::new(1.0e-3, 10.0e-6),
        DriveParameters::new(-1.0e-3, 10.0e-6),
        DriveParameters::new(3.0e-3, 40.0e-6),
    ];

    let results = sweep(&integrator, &drives);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().drive, drives[0]);
    assert!(matches!(results[1], Err(LaserError::InvalidDrive { .. })));
    assert_eq!(
        results[2].as_ref().unwrap(),
        &integrator.solve(&drives[2]).unwrap()
    );
}

#[test]
fn test_newer_request_supersedes_older() {
    let integrator = integrator_with_window(1.0e-4, 1_000);
    let gate = RequestGate::new();
    let drive = DriveParameters::new(2.0e-3, 30.0e-6);

    let stale = gate.issue();
    let current = gate.issue();

    assert!(matches!(
        integrator.solve_gated(&drive, &stale),
        Err(LaserError::Superseded { step: 0 })
    ));
    assert_eq!(
        integrator.solve_gated(&drive, &current).unwrap(),
        integrator.solve(&drive).unwrap()
    );
}

// =================================================================================================
// Solver Convergence on the Rate Equations
// =================================================================================================

#[test]
fn test_rk4_fourth_order_on_population_dynamics() {
    // No cavity: smooth population relaxation, integrated to t = 1 ms
    let constants = PhysicalConstants::nd_yag();
    let model = ThreeLevelRateModel::new(constants, 0.0);
    let solver = RK4Solver::new();
    let pump_rate = 2.0e-3;

    let integrate = |steps: usize| {
        let dt = 1.0 / steps as f64;
        let mut state = model.setup_initial_state();
        for _ in 0..steps {
            state = state + solver.increment(&model, &state, pump_rate, dt);
        }
        state.inversion()
    };

    let reference = integrate(2_560);
    let errors: Vec<f64> = [10, 20, 40]
        .iter()
        .map(|&steps| (integrate(steps) - reference).abs())
        .collect();

    for pair in errors.windows(2) {
        let ratio = pair[0] / pair[1];
        assert!(
            ratio > 12.0 && ratio < 24.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }

    assert!(relative_error(integrate(40), reference) < 1e-9);
}
