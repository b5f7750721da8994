//! Runge-Kutta 4 (RK4) one-step method
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates over one step:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 * k₁)
//! k₃ = f(yₙ + dt/2 * k₂)
//! k₄ = f(yₙ + dt * k₃)
//!
//! Δy = dt/6 * (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! All three components `(N1, N, U)` are staged jointly: every `kᵢ` is a full
//! state-shaped slope, and each stage sees the other components advanced by
//! the same fraction of the step.
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (error ~ O(dt⁴) over a window)
//! - **Complexity**: 4 model evaluations per step
//! - **Memory**: O(1), only k₁..k₄ are kept
//! - **Step**: fixed, chosen by the caller
//!
//! # When NOT to Use
//!
//! - Very stiff problems, where an implicit method is cheaper
//! - When the step must adapt to an error estimate
//!
//! # Example
//!
//! ```rust
//! use laser_rs::models::ThreeLevelRateModel;
//! use laser_rs::physics::{PhysicalConstants, PhysicalModel};
//! use laser_rs::solver::{RK4Solver, Solver};
//!
//! let constants = PhysicalConstants::nd_yag();
//! let model = ThreeLevelRateModel::new(constants, 30.0e-6);
//! let state = model.setup_initial_state();
//!
//! let solver = RK4Solver::new();
//! let delta = solver.increment(&model, &state, 2.0e-3, constants.time_step());
//! assert!(delta.inversion() > 0.0);
//! ```

use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::Solver;

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta method
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use laser_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn increment(
        &self,
        model: &dyn PhysicalModel,
        state: &PhysicalState,
        pump_rate: f64,
        dt: f64,
    ) -> PhysicalState {
        // ====== RK4 Stages ======

        // Stage 1: slope at the beginning of the step
        let k1 = model.compute_physics(state, pump_rate);

        // Stage 2: slope at the midpoint, predicted with k₁
        let state_k2 = *state + k1 * (dt / 2.0);
        let k2 = model.compute_physics(&state_k2, pump_rate);

        // Stage 3: slope at the midpoint, predicted with k₂
        let state_k3 = *state + k2 * (dt / 2.0);
        let k3 = model.compute_physics(&state_k3, pump_rate);

        // Stage 4: slope at the end, predicted with k₃
        let state_k4 = *state + k3 * dt;
        let k4 = model.compute_physics(&state_k4, pump_rate);

        // ====== Weighted increment ======

        // Simpson weights: 1/6 at the ends, 1/3 at the midpoints
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        weighted_slope * (dt / 6.0)
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }

    fn evaluations_per_step(&self) -> usize {
        4
    }
}

// =================================================================================================
// Tests
// =================================================================================================
