//! Steady-state references of the three-level model
//!
//! The analytic fixed point of the rate equations gives the references the
//! trajectory is normalized against:
//!
//! ```text
//! Zn = Wp*(W21 + W32) + W21*W32
//! Ne = Nv                           if Wp == 0
//!    = Nv*Wp*(W21 - W32) / Zn       otherwise
//! To = (2*Wp + W21) / Zn
//! No = 1 / (Wi*Tc)                  if Tc > 0
//! Uo = (Tc/To) * (Ne - No)          if Tc > 0
//! ```
//!
//! These values never feed back into the dynamics. They only scale the
//! recorded channels and position the photon floor.

use std::fmt;

use log::debug;

use crate::error::{LaserError, LaserResult};
use crate::physics::PhysicalConstants;

/// Recorded photon ratios at or above this value are replaced by `0`
pub const PHOTON_RATIO_CEILING: f64 = 50.0;

// =================================================================================================
// Threshold
// =================================================================================================

/// Lasing threshold of one run
///
/// A cavity with zero photon lifetime stores no photons, so no threshold
/// exists. That case is a variant of its own rather than a `0`/`1` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Cavity present (`Tc > 0`)
    Defined {
        /// Threshold population `No = 1/(Wi*Tc)`
        population: f64,

        /// Photon-density reference `Uo = (Tc/To)*(Ne - No)`
        ///
        /// Negative below threshold. Kept as computed.
        photon_density: f64,
    },

    /// No cavity (`Tc == 0`)
    Undefined,
}

impl Threshold {
    /// `No`, when defined
    pub fn population(&self) -> Option<f64> {
        match self {
            Threshold::Defined { population, .. } => Some(*population),
            Threshold::Undefined => None,
        }
    }

    /// `Uo`, when defined
    pub fn photon_density(&self) -> Option<f64> {
        match self {
            Threshold::Defined { photon_density, .. } => Some(*photon_density),
            Threshold::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Threshold::Defined { .. })
    }
}

// =================================================================================================
// Steady State
// =================================================================================================

/// Per-run references derived once before stepping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    /// Nominal pump rate `Wp` the references were derived for
    pub pump_rate: f64,

    /// Cavity photon lifetime `Tc`
    pub cavity_lifetime: f64,

    /// Active-particle density `Nv`, copied for the ratios of the summary
    pub particle_density: f64,

    /// Saturation population `Ne`
    ///
    /// Not clamped: unphysical rate combinations may give a negative value
    /// or one above `Nv`.
    pub saturation_population: f64,

    /// Characteristic time `To`
    pub characteristic_time: f64,

    /// Threshold population and photon-density reference
    pub threshold: Threshold,

    /// Decay-rate ratio `Wt = W32*No/(Nv - No)`
    ///
    /// `None` without a threshold or when `No == Nv`.
    pub decay_rate: Option<f64>,

    /// Floor ratio `eta` of the constants
    pub floor_ratio: f64,
}

impl SteadyState {
    /// Derive the references for one `(Wp, Tc)` pair
    ///
    /// The `Wp == 0` and `Tc == 0` branches are taken before any division
    /// they would otherwise involve.
    ///
    /// # Errors
    ///
    /// [`LaserError::DegenerateRates`] when `Zn` is zero or not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use laser_rs::physics::{PhysicalConstants, SteadyState};
    ///
    /// let constants = PhysicalConstants::nd_yag();
    /// let steady = SteadyState::derive(&constants, 0.0, 0.0).unwrap();
    /// assert_eq!(steady.saturation_population, constants.particle_density());
    /// assert!(!steady.threshold.is_defined());
    /// ```
    pub fn derive(
        constants: &PhysicalConstants,
        pump_rate: f64,
        cavity_lifetime: f64,
    ) -> LaserResult<Self> {
        let nv = constants.particle_density();
        let w21 = constants.spontaneous_21();
        let w32 = constants.spontaneous_32();

        let zn = pump_rate * (w21 + w32) + w21 * w32;
        if zn == 0.0 || !zn.is_finite() {
            return Err(LaserError::DegenerateRates { pump_rate });
        }

        let saturation_population = if pump_rate == 0.0 {
            nv
        } else {
            nv * pump_rate * (w21 - w32) / zn
        };

        let characteristic_time = (2.0 * pump_rate + w21) / zn;

        let threshold = if cavity_lifetime == 0.0 {
            Threshold::Undefined
        } else {
            let population = 1.0 / (constants.induced_emission() * cavity_lifetime);
            Threshold::Defined {
                population,
                photon_density: cavity_lifetime / characteristic_time
                    * (saturation_population - population),
            }
        };

        let decay_rate = match threshold.population() {
            Some(population) if population != nv => Some(w32 * population / (nv - population)),
            _ => None,
        };

        let steady = Self {
            pump_rate,
            cavity_lifetime,
            particle_density: nv,
            saturation_population,
            characteristic_time,
            threshold,
            decay_rate,
            floor_ratio: constants.floor_ratio(),
        };

        debug!("Steady state for Wp={}, Tc={}: {}", pump_rate, cavity_lifetime, steady);

        Ok(steady)
    }

    // ====================================== Normalization ======================================

    /// Channel 1: `N / Ne`, `0` when `Ne == 0`
    pub fn lower_ratio(&self, inversion: f64) -> f64 {
        if self.saturation_population == 0.0 {
            0.0
        } else {
            inversion / self.saturation_population
        }
    }

    /// Channel 2: `No / Ne` when both are positive
    pub fn threshold_ratio(&self) -> Option<f64> {
        let population = self.threshold.population()?;
        if population > 0.0 && self.saturation_population > 0.0 {
            Some(population / self.saturation_population)
        } else {
            None
        }
    }

    /// `U / Uo` before the display guard, `None` without a usable `Uo`
    pub fn unguarded_photon_ratio(&self, photons: f64) -> Option<f64> {
        match self.threshold.photon_density() {
            Some(reference) if reference != 0.0 => Some(photons / reference),
            _ => None,
        }
    }

    /// Channel 3: `U / Uo`
    ///
    /// Recorded as `0` without a usable `Uo` and whenever the ratio is not
    /// below [`PHOTON_RATIO_CEILING`] (NaN included).
    pub fn photon_ratio(&self, photons: f64) -> f64 {
        match self.unguarded_photon_ratio(photons) {
            Some(ratio) if ratio < PHOTON_RATIO_CEILING => ratio,
            _ => 0.0,
        }
    }

    /// Photon floor `eta*Uo`, present only with a defined threshold
    pub fn photon_floor(&self) -> Option<f64> {
        self.threshold
            .photon_density()
            .map(|reference| self.floor_ratio * reference)
    }
}

impl fmt::Display for SteadyState {
    /// One-line summary: `Ne/Nv`, `No/Nv`, `Uo`, `Wp/Wt`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ne/Nv = {:.5}",
            self.saturation_population / self.particle_density
        )?;

        match self.threshold {
            Threshold::Defined {
                population,
                photon_density,
            } => write!(
                f,
                ", No/Nv = {:.5}, Uo = {:.5e}",
                population / self.particle_density,
                photon_density
            )?,
            Threshold::Undefined => write!(f, ", No/Nv = undefined, Uo = undefined")?,
        }

        match self.decay_rate {
            Some(wt) if wt != 0.0 => write!(f, ", Wp/Wt = {:.5}", self.pump_rate / wt),
            _ => write!(f, ", Wp/Wt = undefined"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
