//! Numerical integration of the rate equations
//!
//! This module turns a model and a drive into a [`Trajectory`].
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Model** ([`PhysicalModel`](crate::physics::PhysicalModel)) - WHAT to solve
//!    - Rate equations for `(N1, N, U)`
//!
//! 2. **Solver** ([`Solver`] trait) - HOW one step is taken
//!    - [`RK4Solver`]: classic fourth-order Runge-Kutta
//!
//! 3. **Integrator** ([`Integrator`]) - the run
//!    - Steady-state references, pre-step recording, photon floor
//!    - Returns a fresh [`Trajectory`] per call
//!
//! # Module Organization
//!
//! - **`traits`**: the one-step [`Solver`] interface
//! - **`methods`**: concrete methods ([`RK4Solver`])
//! - **`integrator`**: fixed-step loop and floor policy
//! - **`trajectory`**: recorded output channels
//! - **`request`**: [`RequestGate`] for superseding in-flight runs
//! - **`sweep`**: batch solves over many drive points
//!
//! # Quick Start Example
//!
//! ```rust
//! use laser_rs::models::{DriveParameters, PumpProfile};
//! use laser_rs::physics::PhysicalConstants;
//! use laser_rs::solver::Integrator;
//!
//! let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
//! let drive = DriveParameters::new(2.0e-3, 30.0e-6).with_profile(PumpProfile::cutoff(0.95));
//!
//! let trajectory = integrator.solve(&drive).unwrap();
//! println!("{}", trajectory.steady);
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ PhysicalConsts  │     │ DriveParameters  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          └──────────┬────────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │  SteadyState    │ ← normalizers (Ne, No, Uo)
//!            └────────┬────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │  Integrator     │ ← record, RK4 step, floor
//!            └────────┬────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │  Trajectory     │ ← time + three channels
//!            └─────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Runs return [`LaserResult`](crate::error::LaserResult). Inputs are checked
//! before the first step; once stepping starts nothing fails except a
//! superseded gated run. A non-finite state is logged once and the run goes on.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod integrator;
mod methods;
mod request;
mod sweep;
mod traits;
mod trajectory;

// =================================================================================================
// Gate Polling Interval
// =================================================================================================
//
// How often a gated run looks at its ticket is an execution knob, not part of
// the numerics. It is stored in an AtomicUsize so benchmarks and tests can
// change it at runtime without a lock on the hot loop. Relaxed ordering is
// enough: the value is a hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of steps between two ticket checks of a gated run
const DEFAULT_GATE_POLL_INTERVAL: usize = 256;

static GATE_POLL_INTERVAL: AtomicUsize = AtomicUsize::new(DEFAULT_GATE_POLL_INTERVAL);

/// Return the current gate polling interval, in steps
///
/// # Example
///
/// ```rust
/// use laser_rs::solver::gate_poll_interval;
///
/// assert!(gate_poll_interval() > 0);
/// ```
pub fn gate_poll_interval() -> usize {
    GATE_POLL_INTERVAL.load(Ordering::Relaxed)
}

/// Set the gate polling interval
///
/// # Panics
///
/// Panics when `interval == 0`.
///
/// # Example
///
/// ```rust
/// use laser_rs::solver::{gate_poll_interval, set_gate_poll_interval};
///
/// let previous = gate_poll_interval();
/// set_gate_poll_interval(64);
/// assert_eq!(gate_poll_interval(), 64);
///
/// // Restore so other tests are not affected.
/// set_gate_poll_interval(previous);
/// ```
pub fn set_gate_poll_interval(interval: usize) {
    assert!(interval > 0, "gate poll interval must be at least 1");
    GATE_POLL_INTERVAL.store(interval, Ordering::Relaxed);
}

/// RAII guard that saves the current interval on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Guards are serialized through a lock, so a
/// test holding one sees its own value for as long as the guard lives.
#[cfg(test)]
pub(crate) struct GatePollGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
static GATE_POLL_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
impl GatePollGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = GATE_POLL_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = gate_poll_interval();
        set_gate_poll_interval(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for GatePollGuard {
    fn drop(&mut self) {
        // Bypass the setter so restoring never panics
        GATE_POLL_INTERVAL.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use integrator::Integrator;
pub use methods::RK4Solver;
pub use request::{RequestGate, RequestTicket};
pub use sweep::sweep;
pub use traits::Solver;
pub use trajectory::Trajectory;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_value() {
        assert_eq!(DEFAULT_GATE_POLL_INTERVAL, 256);
    }

    #[test]
    fn test_get_and_set_interval() {
        let _guard = GatePollGuard::save(500);
        assert_eq!(gate_poll_interval(), 500);
    }

    #[test]
    #[should_panic(expected = "gate poll interval must be at least 1")]
    fn test_zero_interval_panics() {
        set_gate_poll_interval(0);
    }

    #[test]
    fn test_guard_records_previous_value() {
        let restored = {
            let guard = GatePollGuard::save(42);
            assert_eq!(gate_poll_interval(), 42);
            guard.previous
        };
        assert!(restored > 0);
    }
}
