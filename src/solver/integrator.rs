//! Fixed-step trajectory integrator
//!
//! # Algorithm
//!
//! For a drive `(Wp, Tc)`:
//!
//! 1. Validate the drive and derive the [`SteadyState`] from the nominal `Wp`.
//! 2. Start from `(N1, N, U) = (Nv, 0, 0)`.
//! 3. For each step `i` in `0..Np`:
//!    - record the channels from the current (pre-step) state,
//!    - compute the RK4 increment with the effective pump rate of step `i`,
//!    - apply `N1 += ΔN1`, `N += ΔN`, then the photon floor policy.
//!
//! Recording happens before the update, so sample 0 is the initial condition
//! and the increment computed during the last step is never observed.
//!
//! # Photon floor
//!
//! ```text
//! if N_new < No and U_old <= eta*Uo:  U = eta*Uo
//! else:                                U = U_old + ΔU
//! ```
//!
//! Below threshold the photon density would otherwise decay into the
//! all-zero fixed point and never seed lasing. Without a threshold the floor
//! never engages.

use log::{debug, info, warn};

use crate::error::{LaserError, LaserResult};
use crate::models::{DriveParameters, ThreeLevelRateModel};
use crate::physics::{PhysicalConstants, PhysicalModel, PhysicalState, SteadyState};
use crate::solver::{RK4Solver, RequestTicket, Solver, Trajectory, gate_poll_interval};

/// Integrates the three-level rate equations over a fixed window
///
/// # Example
///
/// ```rust
/// use laser_rs::physics::PhysicalConstants;
/// use laser_rs::solver::Integrator;
///
/// let constants = PhysicalConstants::nd_yag().with_window(1.0e-4, 500).unwrap();
/// let integrator = Integrator::new(constants).unwrap();
///
/// let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
/// assert_eq!(trajectory.len(), 500);
/// assert_eq!(trajectory.lower_ratio[0], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Integrator {
    constants: PhysicalConstants,
    solver: RK4Solver,
}

impl Integrator {
    /// Bind an integrator to a set of constants
    ///
    /// # Errors
    ///
    /// [`LaserError::InvalidConstant`] when the constants fail validation
    /// (possible for values deserialized from a configuration file).
    pub fn new(constants: PhysicalConstants) -> LaserResult<Self> {
        constants.validate()?;
        Ok(Self {
            constants,
            solver: RK4Solver::new(),
        })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Run one drive to completion
    pub fn solve(&self, drive: &DriveParameters) -> LaserResult<Trajectory> {
        self.run(drive, None)
    }

    /// Continuous pump at `pump_rate` into a cavity of lifetime `cavity_lifetime`
    pub fn solve_rates(&self, pump_rate: f64, cavity_lifetime: f64) -> LaserResult<Trajectory> {
        self.solve(&DriveParameters::new(pump_rate, cavity_lifetime))
    }

    /// Run one drive, giving up as soon as `ticket` is superseded
    ///
    /// The ticket is checked before the first step and then every
    /// [`gate_poll_interval`] steps.
    ///
    /// # Errors
    ///
    /// [`LaserError::Superseded`] with the step at which the run stopped,
    /// plus everything [`Integrator::solve`] may return.
    pub fn solve_gated(
        &self,
        drive: &DriveParameters,
        ticket: &RequestTicket,
    ) -> LaserResult<Trajectory> {
        self.run(drive, Some(ticket))
    }

    fn run(&self, drive: &DriveParameters, ticket: Option<&RequestTicket>) -> LaserResult<Trajectory> {
        // ====== Step 1: Validation and references ======

        drive.validate()?;
        let steady = SteadyState::derive(
            &self.constants,
            drive.pump_rate,
            drive.cavity_lifetime,
        )?;

        // ====== Step 2: Setup ======

        let model = ThreeLevelRateModel::new(self.constants, drive.cavity_lifetime);
        let samples = self.constants.samples();
        let dt = self.constants.time_step();
        let poll_interval = gate_poll_interval();

        // Channel 2 does not depend on the state
        let threshold_ratio = steady.threshold_ratio();

        let mut time = Vec::with_capacity(samples);
        let mut lower_ratio = Vec::with_capacity(samples);
        let mut threshold_channel = Vec::with_capacity(samples);
        let mut photon_ratio = Vec::with_capacity(samples);
        let mut photon_density = Vec::with_capacity(samples);

        let mut state = model.setup_initial_state();
        let mut non_finite_reported = false;

        // ====== Step 3: Time Integration ======

        for step in 0..samples {
            if let Some(ticket) = ticket
                && step % poll_interval == 0
                && ticket.is_superseded()
            {
                debug!("Request {} superseded at step {}", ticket.id(), step);
                return Err(LaserError::Superseded { step });
            }

            // Pre-step recording
            time.push(self.constants.time_at(step));
            lower_ratio.push(steady.lower_ratio(state.inversion()));
            threshold_channel.push(threshold_ratio);
            photon_ratio.push(steady.photon_ratio(state.photons()));
            photon_density.push(state.photons());

            let pump_rate = drive
                .pump_profile
                .effective_rate(step, samples, drive.pump_rate);
            let delta = self.solver.increment(&model, &state, pump_rate, dt);
            state = apply_increment(&state, &delta, &steady);

            if !non_finite_reported && let Some(quantity) = state.first_non_finite() {
                warn!(
                    "Non-finite {} after step {} (Wp={}, Tc={}); try a smaller time step",
                    quantity, step, drive.pump_rate, drive.cavity_lifetime
                );
                non_finite_reported = true;
            }
        }

        // ====== Step 4: Build Result ======

        let mut trajectory = Trajectory {
            time,
            lower_ratio,
            threshold_ratio: threshold_channel,
            photon_ratio,
            photon_density,
            steady,
            drive: *drive,
            metadata: Default::default(),
        };

        trajectory.add_metadata("solver", self.solver.name());
        trajectory.add_metadata("model", model.name());
        trajectory.add_metadata("time steps", &samples.to_string());
        trajectory.add_metadata("dt", &dt.to_string());
        trajectory.add_metadata(
            "model evaluations",
            &(self.solver.evaluations_per_step() * samples).to_string(),
        );
        trajectory.add_metadata("pump profile", &format!("{:?}", drive.pump_profile));

        let guarded = trajectory.guarded_samples();
        if guarded > 0 {
            debug!(
                "Display guard zeroed U/Uo on {} of {} samples",
                guarded, samples
            );
        }

        info!(
            "Solved Wp={}, Tc={} over {} steps (peak U/Uo = {:.3})",
            drive.pump_rate,
            drive.cavity_lifetime,
            samples,
            trajectory.peak_photon_ratio()
        );

        Ok(trajectory)
    }
}

/// Apply one increment with the photon floor policy
///
/// `N1` and `N` take the increment unconditionally. `U` is pinned to
/// `eta*Uo` when the updated `N` is below `No` and the previous `U` is at or
/// below that floor.
pub(crate) fn apply_increment(
    state: &PhysicalState,
    delta: &PhysicalState,
    steady: &SteadyState,
) -> PhysicalState {
    let lower = state.lower() + delta.lower();
    let inversion = state.inversion() + delta.inversion();

    let photons = match (steady.threshold.population(), steady.photon_floor()) {
        (Some(population), Some(floor)) if inversion < population && state.photons() <= floor => {
            floor
        }
        _ => state.photons() + delta.photons(),
    };

    PhysicalState::new(lower, inversion, photons)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PumpProfile;
    use crate::physics::Threshold;
    use crate::solver::{GatePollGuard, RequestGate};

    fn short_window() -> PhysicalConstants {
        PhysicalConstants::nd_yag().with_window(1.0e-4, 400).unwrap()
    }

    fn steady_with(threshold: Threshold) -> SteadyState {
        let mut steady = SteadyState::derive(&PhysicalConstants::nd_yag(), 1.0e-3, 0.0).unwrap();
        steady.threshold = threshold;
        steady
    }

    #[test]
    fn test_rejects_invalid_constants() {
        let constants: PhysicalConstants = serde_json::from_str(r#"{ "samples": 0 }"#).unwrap();
        assert!(matches!(
            Integrator::new(constants),
            Err(LaserError::InvalidConstant { name: "samples", .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_drive() {
        let integrator = Integrator::new(short_window()).unwrap();

        assert!(matches!(
            integrator.solve_rates(-1.0, 1.0e-6),
            Err(LaserError::InvalidDrive { .. })
        ));
        assert!(matches!(
            integrator.solve(&DriveParameters::new(1.0e-3, 1.0e-6).with_profile(PumpProfile::cutoff(1.2))),
            Err(LaserError::InvalidDrive { .. })
        ));
    }

    #[test]
    fn test_floor_engages_below_threshold() {
        let steady = steady_with(Threshold::Defined {
            population: 1.0e5,
            photon_density: 2.0,
        });
        let floor = steady.floor_ratio * 2.0;

        let state = PhysicalState::new(10.0, 500.0, 0.0);
        let delta = PhysicalState::new(1.0, 20.0, -3.0);
        let next = apply_increment(&state, &delta, &steady);

        assert_eq!(next.lower(), 11.0);
        assert_eq!(next.inversion(), 520.0);
        assert_eq!(next.photons(), floor);
    }

    #[test]
    fn test_floor_released_above_threshold() {
        let steady = steady_with(Threshold::Defined {
            population: 1.0e5,
            photon_density: 2.0,
        });

        // Updated N crosses No, so the increment applies
        let state = PhysicalState::new(0.0, 99_990.0, 0.0);
        let delta = PhysicalState::new(0.0, 20.0, 1.0e-3);
        assert_eq!(apply_increment(&state, &delta, &steady).photons(), 1.0e-3);
    }

    #[test]
    fn test_floor_released_when_photons_above_floor() {
        let steady = steady_with(Threshold::Defined {
            population: 1.0e5,
            photon_density: 2.0,
        });

        let state = PhysicalState::new(0.0, 10.0, 1.0);
        let delta = PhysicalState::new(0.0, 0.0, -0.25);
        assert_eq!(apply_increment(&state, &delta, &steady).photons(), 0.75);
    }

    #[test]
    fn test_floor_inactive_without_threshold() {
        let steady = steady_with(Threshold::Undefined);

        let state = PhysicalState::new(0.0, 10.0, 0.0);
        let delta = PhysicalState::new(0.0, 1.0, -1.0e-3);
        assert_eq!(apply_increment(&state, &delta, &steady).photons(), -1.0e-3);
    }

    #[test]
    fn test_pre_step_recording() {
        let integrator = Integrator::new(short_window()).unwrap();
        let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();

        assert_eq!(trajectory.len(), 400);
        assert_eq!(trajectory.lower_ratio[0], 0.0);
        assert_eq!(trajectory.photon_ratio[0], 0.0);
        assert!(trajectory.lower_ratio[1] > 0.0);
        assert!(trajectory.has_threshold());

        assert_eq!(trajectory.photon_density.len(), 400);
        assert_eq!(trajectory.photon_density[0], 0.0);
        assert_eq!(
            trajectory.photon_ratio[1],
            trajectory.steady.photon_ratio(trajectory.photon_density[1])
        );
    }

    #[test]
    fn test_metadata() {
        let integrator = Integrator::new(short_window()).unwrap();
        let trajectory = integrator.solve_rates(1.0e-3, 10.0e-6).unwrap();

        assert_eq!(trajectory.get_metadata("solver"), Some("Runge Kutta (RK4)"));
        assert_eq!(trajectory.get_metadata("time steps"), Some("400"));
        assert_eq!(trajectory.get_metadata("model evaluations"), Some("1600"));
        assert_eq!(trajectory.get_metadata("pump profile"), Some("Continuous"));
    }

    #[test]
    fn test_superseded_ticket_stops_run() {
        let integrator = Integrator::new(short_window()).unwrap();
        let gate = RequestGate::new();
        let stale = gate.issue();
        let _fresh = gate.issue();

        match integrator.solve_gated(&DriveParameters::new(1.0e-3, 10.0e-6), &stale) {
            Err(LaserError::Superseded { step }) => assert_eq!(step, 0),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_current_ticket_matches_plain_solve() {
        let _guard = GatePollGuard::save(7);
        let integrator = Integrator::new(short_window()).unwrap();
        let drive = DriveParameters::new(2.5e-3, 40.0e-6);
        let ticket = RequestGate::new().issue();

        let gated = integrator.solve_gated(&drive, &ticket).unwrap();
        let plain = integrator.solve(&drive).unwrap();
        assert_eq!(gated, plain);
    }
}
