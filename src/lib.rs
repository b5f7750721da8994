//! laser-rs: Three-level laser rate-equation kinetics
//!
//! Integrates the rate equations of an optically pumped three-level laser
//! medium (Nd:YAG preset) with a fixed-step fourth-order Runge-Kutta scheme
//! and reports populations and photon density normalized by their
//! steady-state and threshold references.
//!
//! # Architecture
//!
//! laser-rs is built on the separation of physics and numerics:
//!
//! - Physical models define equations (what to solve)
//! - Numerical solvers provide methods (how to solve)
//! - The integrator owns the run: references, recording, photon floor
//!
//! # Quick Start
//!
//! ```rust
//! use laser_rs::prelude::*;
//!
//! // 1. Material and time window (1 ms sampled every 0.1 us)
//! let constants = PhysicalConstants::nd_yag();
//!
//! // 2. Drive: Wp = 2e-3 1/ms, Tc = 30 ns, pump off after 95 % of the window
//! let drive = DriveParameters::new(2.0e-3, 30.0e-6).with_profile(PumpProfile::cutoff(0.95));
//!
//! // 3. Run
//! let integrator = Integrator::new(constants).unwrap();
//! let trajectory = integrator.solve(&drive).unwrap();
//!
//! // 4. Inspect
//! assert_eq!(trajectory.len(), 10_000);
//! assert!(trajectory.has_threshold());
//! println!("{}", trajectory.steady);
//! ```
//!
//! # Modules
//!
//! - [`physics`]: constants, state, model trait and steady-state references
//! - [`models`]: the three-level rate equations and their drive
//! - [`solver`]: RK4, the integrator, sweeps and request gating
//! - [`output`]: text export and kinetics plots
//! - [`config`]: JSON session configuration and control scaling
//! - [`error`]: crate error type

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod physics;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use laser_rs::prelude::*;
    //! ```
    pub use crate::config::{ControlScale, SimulationConfig};
    pub use crate::error::{LaserError, LaserResult};
    pub use crate::models::{DriveParameters, PumpProfile, ThreeLevelRateModel};
    pub use crate::physics::{
        PhysicalConstants, PhysicalModel, PhysicalQuantity, PhysicalState, SteadyState, Threshold,
    };
    pub use crate::solver::{Integrator, RK4Solver, RequestGate, Solver, Trajectory, sweep};
}
