//! Per-run drive of the laser: pump rate, cavity lifetime and pump profile

use serde::{Deserialize, Serialize};

use crate::error::{LaserError, LaserResult};
use crate::models::PumpProfile;

/// Inputs that change from one run to the next
///
/// # Example
///
/// ```rust
/// use laser_rs::models::{DriveParameters, PumpProfile};
///
/// let drive = DriveParameters::new(2.0e-3, 30.0e-6).with_profile(PumpProfile::cutoff(0.95));
/// assert!(drive.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveParameters {
    /// Pump rate `Wp` (1/time, `>= 0`)
    pub pump_rate: f64,

    /// Cavity photon lifetime `Tc` (time, `>= 0`); `0` means no cavity
    pub cavity_lifetime: f64,

    /// How the pump evolves over the window
    #[serde(default)]
    pub pump_profile: PumpProfile,
}

impl DriveParameters {
    /// Continuous pump at `pump_rate` into a cavity of lifetime `cavity_lifetime`
    pub fn new(pump_rate: f64, cavity_lifetime: f64) -> Self {
        Self {
            pump_rate,
            cavity_lifetime,
            pump_profile: PumpProfile::Continuous,
        }
    }

    pub fn with_profile(mut self, pump_profile: PumpProfile) -> Self {
        self.pump_profile = pump_profile;
        self
    }

    /// Reject negative or non-finite rates and out-of-range cutoffs
    pub fn validate(&self) -> LaserResult<()> {
        for (name, value) in [
            ("pump_rate", self.pump_rate),
            ("cavity_lifetime", self.cavity_lifetime),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LaserError::InvalidDrive {
                    name,
                    message: format!("must be finite and non-negative, got {}", value),
                });
            }
        }

        self.pump_profile.validate()
    }
}
