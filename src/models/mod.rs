//! Laser models and their drive
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The solver calls `compute_physics` at each RK4 stage with the pump rate of
//! the current step. Models are responsible for the physics, the solver for
//! the time integration.
//!
//! # Available Models
//!
//! ## [`ThreeLevelRateModel`]
//!
//! Point model of a pumped Nd:YAG rod in a resonator: lower population `N1`,
//! inversion `N` and intracavity photon density `U`.
//!
//! # Drive
//!
//! [`DriveParameters`] bundles the per-run inputs (pump rate, cavity lifetime)
//! and a [`PumpProfile`] that can switch the pump off partway through the
//! window.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod drive;
pub mod pump;
pub mod rate_equations;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use drive::DriveParameters;
pub use pump::PumpProfile;
pub use rate_equations::ThreeLevelRateModel;
