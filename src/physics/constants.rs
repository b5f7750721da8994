//! Material constants and simulation window
//!
//! Units follow the micrometre/millisecond system of the Nd:YAG preset:
//! densities in 1/um^3, rates in 1/ms, `Wi` in um^3/ms and time in ms.
//! Any other consistent unit system works as long as every field uses it.

use serde::{Deserialize, Serialize};

use crate::error::{LaserError, LaserResult};

/// Speed of light in um/ms
pub const SPEED_OF_LIGHT: f64 = 3.0e11;

/// Refractive index of the YAG host
pub const YAG_REFRACTIVE_INDEX: f64 = 1.5;

/// Stimulated-emission cross section of Nd:YAG at 1064 nm, um^2
pub const ND_YAG_CROSS_SECTION: f64 = 2.8e-11;

/// Spontaneous lifetime of the 2 -> 1 transition, ms
pub const ND_YAG_LIFETIME_21: f64 = 0.23;

/// Fixed physical constants of one simulated laser plus the time grid
///
/// # Invariants
///
/// Once constructed (through [`PhysicalConstants::new`], a preset, or a
/// validated configuration) the values never change: there are no setters.
/// `dt` and `Np` define the time axis `t[i] = i*dt`, `i in 0..Np`.
///
/// # Example
///
/// ```rust
/// use laser_rs::physics::PhysicalConstants;
///
/// let constants = PhysicalConstants::nd_yag();
/// assert_eq!(constants.samples(), 10_000);
/// assert_eq!(constants.time_at(0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Induced-emission rate constant `Wi` (volume/time)
    induced_emission: f64,

    /// Active-particle density `Nv` (1/volume)
    particle_density: f64,

    /// Spontaneous rate of the 2 -> 1 transition, `W21` (1/time)
    spontaneous_21: f64,

    /// Spontaneous rate of the 3 -> 2 transition, `W32` (1/time)
    spontaneous_32: f64,

    /// Photon floor ratio `eta`
    floor_ratio: f64,

    /// Integration step `dt`
    time_step: f64,

    /// Number of recorded samples `Np`
    samples: usize,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::nd_yag()
    }
}

impl PhysicalConstants {
    /// Create and validate a set of constants
    ///
    /// # Errors
    ///
    /// [`LaserError::InvalidConstant`] when a rate or density is not
    /// positive and finite, `eta` is outside `(0, 1)`, `dt <= 0` or `Np == 0`.
    pub fn new(
        induced_emission: f64,
        particle_density: f64,
        spontaneous_21: f64,
        spontaneous_32: f64,
        floor_ratio: f64,
        time_step: f64,
        samples: usize,
    ) -> LaserResult<Self> {
        let constants = Self {
            induced_emission,
            particle_density,
            spontaneous_21,
            spontaneous_32,
            floor_ratio,
            time_step,
            samples,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Nd:YAG preset: 1 ms window sampled every 0.1 us
    pub fn nd_yag() -> Self {
        let spontaneous_21 = 1.0 / ND_YAG_LIFETIME_21;
        Self {
            induced_emission: SPEED_OF_LIGHT / YAG_REFRACTIVE_INDEX * ND_YAG_CROSS_SECTION,
            particle_density: 5.0e7,
            spontaneous_21,
            spontaneous_32: 1.0e-3 * spontaneous_21,
            floor_ratio: 1.0e-16,
            time_step: 1.0e-4,
            samples: 10_000,
        }
    }

    /// Same material, different time grid
    pub fn with_window(self, time_step: f64, samples: usize) -> LaserResult<Self> {
        Self::new(
            self.induced_emission,
            self.particle_density,
            self.spontaneous_21,
            self.spontaneous_32,
            self.floor_ratio,
            time_step,
            samples,
        )
    }

    /// Check every field against its domain
    pub fn validate(&self) -> LaserResult<()> {
        let positive = [
            ("induced_emission", self.induced_emission),
            ("particle_density", self.particle_density),
            ("spontaneous_21", self.spontaneous_21),
            ("spontaneous_32", self.spontaneous_32),
            ("time_step", self.time_step),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LaserError::InvalidConstant {
                    name,
                    message: format!("must be positive and finite, got {}", value),
                });
            }
        }

        if !(self.floor_ratio > 0.0 && self.floor_ratio < 1.0) {
            return Err(LaserError::InvalidConstant {
                name: "floor_ratio",
                message: format!("must lie in (0, 1), got {}", self.floor_ratio),
            });
        }

        if self.samples == 0 {
            return Err(LaserError::InvalidConstant {
                name: "samples",
                message: "at least one sample is required".to_string(),
            });
        }

        Ok(())
    }

    // ========================================= Accessors =========================================

    /// `Wi`
    pub fn induced_emission(&self) -> f64 {
        self.induced_emission
    }

    /// `Nv`
    pub fn particle_density(&self) -> f64 {
        self.particle_density
    }

    /// `W21`
    pub fn spontaneous_21(&self) -> f64 {
        self.spontaneous_21
    }

    /// `W32`
    pub fn spontaneous_32(&self) -> f64 {
        self.spontaneous_32
    }

    /// `eta`
    pub fn floor_ratio(&self) -> f64 {
        self.floor_ratio
    }

    /// `dt`
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// `Np`
    pub fn samples(&self) -> usize {
        self.samples
    }

    // ========================================= Time axis =========================================

    /// Time of sample `index`
    ///
    /// Computed from the index, never accumulated, so the axis carries no
    /// rounding drift over long windows.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.time_step
    }

    /// Full time axis `[0, dt, 2dt, ..., (Np-1)dt]`
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.samples).map(|i| self.time_at(i)).collect()
    }

    /// Length of the simulated window, `Np * dt`
    pub fn duration(&self) -> f64 {
        self.samples as f64 * self.time_step
    }
}

// =================================================================================================
// Tests
// =================================================================================================
