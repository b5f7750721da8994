//! Numerical solver trait
//!
//! A solver here is a one-step method: it computes the increment of the
//! state over one time step and leaves applying it to the caller. The
//! integrator applies the increment component by component because the
//! photon density follows a floor policy the other components do not.
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: stable, implementors only add methods with defaults

use crate::physics::{PhysicalModel, PhysicalState};

/// One-step numerical method for `dy/dt = f(y)`
pub trait Solver: Send + Sync {
    /// Increment `y(t + dt) - y(t)` predicted from `state`
    ///
    /// `pump_rate` is forwarded to every evaluation of the model within the
    /// step, so a pump switch can only happen between steps.
    fn increment(
        &self,
        model: &dyn PhysicalModel,
        state: &PhysicalState,
        pump_rate: f64,
        dt: f64,
    ) -> PhysicalState;

    /// Solver name (used in metadata and logs)
    fn name(&self) -> &'static str;

    /// Model evaluations performed by one call to [`Solver::increment`]
    fn evaluations_per_step(&self) -> usize {
        1
    }
}
