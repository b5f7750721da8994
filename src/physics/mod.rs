//! Physical description of the laser
//!
//! This module holds everything that is physics rather than numerics:
//! the state triple, the model trait, the material constants and the
//! closed-form steady state.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes the rate equations at a given state
//! - **Physical State**: The `(N1, N, U)` triple evolved by the solver
//! - **Physical Constants**: `Wi`, `Nv`, `W21`, `W32`, `eta`, `dt`, `Np`
//! - **Steady State**: Saturation population, threshold and photon reference
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! # Example
//!
//! ```rust
//! use laser_rs::physics::{PhysicalConstants, SteadyState};
//!
//! let constants = PhysicalConstants::nd_yag();
//! let steady = SteadyState::derive(&constants, 2.0e-3, 30.0e-6).unwrap();
//!
//! assert!(steady.threshold.is_defined());
//! println!("{}", steady);
//! ```

pub mod constants;
pub mod steady;
pub mod traits;

pub use constants::PhysicalConstants;
pub use steady::{PHOTON_RATIO_CEILING, SteadyState, Threshold};
pub use traits::{PhysicalModel, PhysicalQuantity, PhysicalState};
