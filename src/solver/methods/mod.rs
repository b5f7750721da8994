//! Numerical methods for advancing the rate equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract one-step interface (`solver::traits`)
//! and concrete methods (`solver::methods`) lets the integrator loop stay the
//! same whatever scheme computes the increment.
//!
//! # Available Methods
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 model evaluations per step
//!   - Use: fixed-step laser kinetics, non-stiff to moderately stiff problems
//!
//! # Design Philosophy
//!
//! Each method is:
//! - **Stateless**: Can be reused for any number of runs and threads
//! - **Self-contained**: No shared mutable state

mod rk4;

pub use rk4::RK4Solver;
