//! Physical model traits and types
//!
//! This module defines the core API for rate-equation models:
//! - `PhysicalModel`: trait for all kinetic models
//! - `PhysicalState`: the `(N1, N, U)` state triple
//! - `PhysicalQuantity`: type-safe quantity identifiers

use nalgebra::Vector3;
use std::fmt;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Quantities tracked by the three-level laser model
///
/// Each variant maps to a fixed slot of the state vector, so indexing a
/// [`PhysicalState`] by quantity never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Population adjacent to the lower laser level, `N1` (1/volume)
    LowerPopulation,

    /// Inversion-relevant population, `N` (1/volume)
    Inversion,

    /// Intracavity photon density, `U` (1/volume)
    PhotonDensity,
}

impl PhysicalQuantity {
    /// All quantities, in state-vector order
    pub const ALL: [PhysicalQuantity; 3] = [
        PhysicalQuantity::LowerPopulation,
        PhysicalQuantity::Inversion,
        PhysicalQuantity::PhotonDensity,
    ];

    /// Slot of this quantity in the state vector
    pub fn index(self) -> usize {
        match self {
            PhysicalQuantity::LowerPopulation => 0,
            PhysicalQuantity::Inversion => 1,
            PhysicalQuantity::PhotonDensity => 2,
        }
    }

    /// Short symbol, also part of the `Display` form used in log messages
    pub fn symbol(self) -> &'static str {
        match self {
            PhysicalQuantity::LowerPopulation => "N1",
            PhysicalQuantity::Inversion => "N",
            PhysicalQuantity::PhotonDensity => "U",
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalQuantity::LowerPopulation => "lower population",
            PhysicalQuantity::Inversion => "inversion",
            PhysicalQuantity::PhotonDensity => "photon density",
        };
        write!(f, "{} ({})", name, self.symbol())
    }
}

// =================================================================================================
// Physical State
// =================================================================================================

/// State of the laser medium at one instant: `(N1, N, U)`
///
/// The same type carries derivatives (`dN1/dt, dN/dt, dU/dt`) and RK4
/// increments, which is why it supports addition and scaling.
///
/// # Example
/// ```
/// use laser_rs::physics::{PhysicalState, PhysicalQuantity};
///
/// let state = PhysicalState::new(5.0e7, 0.0, 0.0);
/// assert_eq!(state.get(PhysicalQuantity::LowerPopulation), 5.0e7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    values: Vector3<f64>,
}

impl PhysicalState {
    /// Create a state from its three components
    pub fn new(lower: f64, inversion: f64, photons: f64) -> Self {
        Self {
            values: Vector3::new(lower, inversion, photons),
        }
    }

    /// All-zero state (also the zero derivative)
    pub fn zeros() -> Self {
        Self {
            values: Vector3::zeros(),
        }
    }

    /// Get a quantity
    pub fn get(&self, quantity: PhysicalQuantity) -> f64 {
        self.values[quantity.index()]
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: f64) {
        self.values[quantity.index()] = value;
    }

    /// `N1`
    pub fn lower(&self) -> f64 {
        self.values.x
    }

    /// `N`
    pub fn inversion(&self) -> f64 {
        self.values.y
    }

    /// `U`
    pub fn photons(&self) -> f64 {
        self.values.z
    }

    /// Underlying vector
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.values
    }

    /// First quantity holding a NaN or an infinity, if any
    pub fn first_non_finite(&self) -> Option<PhysicalQuantity> {
        PhysicalQuantity::ALL
            .into_iter()
            .find(|quantity| !self.get(*quantity).is_finite())
    }
}

impl Default for PhysicalState {
    fn default() -> Self {
        Self::zeros()
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            values: self.values + rhs.values,
        }
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            values: self.values * scalar,
        }
    }
}

impl fmt::Display for PhysicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N1={:.6e}, N={:.6e}, U={:.6e}",
            self.lower(),
            self.inversion(),
            self.photons()
        )
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for rate-equation models
///
/// # Responsibility
/// Evaluates the right-hand side of `dy/dt = f(y)` at a given state.
/// Does NOT integrate it (that's the Solver's job).
///
/// The pump rate is passed per evaluation rather than stored in the model:
/// a pump profile may switch the pump off partway through a run while the
/// model itself stays immutable.
pub trait PhysicalModel: Send + Sync {
    /// Computes `(dN1/dt, dN/dt, dU/dt)` at `state` for the given pump rate
    fn compute_physics(&self, state: &PhysicalState, pump_rate: f64) -> PhysicalState;

    /// Initial condition of a run
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
