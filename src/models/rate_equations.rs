//! Three-level rate equations of a pumped Nd:YAG medium
//!
//! # Equations
//!
//! ```text
//! dN1/dt = -N1*(Wp + W21/2) + W21/2*(Nv - N)
//! dN/dt  =  N1*(Wp + W32 - W21/2) + W21/2*(Nv - N) - W32*(Nv + N) - 2*N*U*Wi
//! dU/dt  =  Wi*N*U - U/Tc            (Tc > 0)
//!        =  0                        (Tc == 0)
//! ```
//!
//! `Wp` is the pump rate of the current step, passed in by the solver.
//!
//! # Example
//!
//! ```rust
//! use laser_rs::models::ThreeLevelRateModel;
//! use laser_rs::physics::{PhysicalConstants, PhysicalModel};
//!
//! let model = ThreeLevelRateModel::new(PhysicalConstants::nd_yag(), 30.0e-6);
//! let initial = model.setup_initial_state();
//! let rates = model.compute_physics(&initial, 2.0e-3);
//!
//! // No photons yet, so U does not move
//! assert_eq!(rates.photons(), 0.0);
//! ```

use crate::physics::{PhysicalConstants, PhysicalModel, PhysicalState};

/// Rate-equation model for one cavity lifetime
#[derive(Debug, Clone, Copy)]
pub struct ThreeLevelRateModel {
    // ==================== Material ====================
    /// Induced-emission constant `Wi`
    wi: f64,
    /// Active-particle density `Nv`
    nv: f64,
    /// Spontaneous rate `W21`
    w21: f64,
    /// Spontaneous rate `W32`
    w32: f64,

    // ==================== Cavity ====================
    /// Photon lifetime `Tc`, `0` for no cavity
    cavity_lifetime: f64,
}

impl ThreeLevelRateModel {
    /// Bind the material constants to a cavity
    pub fn new(constants: PhysicalConstants, cavity_lifetime: f64) -> Self {
        Self {
            wi: constants.induced_emission(),
            nv: constants.particle_density(),
            w21: constants.spontaneous_21(),
            w32: constants.spontaneous_32(),
            cavity_lifetime,
        }
    }

    pub fn cavity_lifetime(&self) -> f64 {
        self.cavity_lifetime
    }

    /// `dN1/dt`
    fn lower_rate(&self, n1: f64, n: f64, wp: f64) -> f64 {
        -n1 * (wp + 0.5 * self.w21) + 0.5 * self.w21 * (self.nv - n)
    }

    /// `dN/dt`
    fn inversion_rate(&self, n1: f64, n: f64, u: f64, wp: f64) -> f64 {
        n1 * (wp + self.w32 - 0.5 * self.w21) + 0.5 * self.w21 * (self.nv - n)
            - self.w32 * (self.nv + n)
            - 2.0 * n * u * self.wi
    }

    /// `dU/dt`
    fn photon_rate(&self, n: f64, u: f64) -> f64 {
        if self.cavity_lifetime > 0.0 {
            self.wi * n * u - u / self.cavity_lifetime
        } else {
            0.0
        }
    }
}

impl PhysicalModel for ThreeLevelRateModel {
    fn compute_physics(&self, state: &PhysicalState, pump_rate: f64) -> PhysicalState {
        let (n1, n, u) = (state.lower(), state.inversion(), state.photons());

        PhysicalState::new(
            self.lower_rate(n1, n, pump_rate),
            self.inversion_rate(n1, n, u, pump_rate),
            self.photon_rate(n, u),
        )
    }

    /// Whole density in the ground-adjacent level, no inversion, no photons
    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(self.nv, 0.0, 0.0)
    }

    fn name(&self) -> &str {
        "Three-level rate equations (Nd:YAG)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
