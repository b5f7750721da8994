//! JSON configuration of a simulation session
//!
//! Every field has a default equal to the Nd:YAG preset, so a partial file
//! such as
//!
//! ```json
//! { "pump_cutoff": 0.95, "constants": { "samples": 5000 } }
//! ```
//!
//! is accepted. [`SimulationConfig::from_file`] validates after loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LaserError, LaserResult};
use crate::models::{DriveParameters, PumpProfile};
use crate::physics::PhysicalConstants;

/// Maps control positions to drive rates
///
/// The pump control is graduated in 1/us ticks and the lifetime control in
/// ns ticks; with a millisecond time base one tick is `1e-3` and `1e-6`
/// respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlScale {
    /// `Wp` per pump tick (default: 1e-3)
    pub pump_per_tick: f64,

    /// `Tc` per lifetime tick (default: 1e-6)
    pub lifetime_per_tick: f64,

    /// Allowed pump positions, inclusive (default: [0, 5])
    pub pump_range: [f64; 2],

    /// Allowed lifetime positions, inclusive (default: [0, 50])
    pub lifetime_range: [f64; 2],
}

impl Default for ControlScale {
    fn default() -> Self {
        Self {
            pump_per_tick: 1.0e-3,
            lifetime_per_tick: 1.0e-6,
            pump_range: [0.0, 5.0],
            lifetime_range: [0.0, 50.0],
        }
    }
}

impl ControlScale {
    /// Drive for a pair of control positions, continuous pump
    ///
    /// # Example
    ///
    /// ```rust
    /// use laser_rs::config::ControlScale;
    ///
    /// let drive = ControlScale::default().drive(2.0, 30.0).unwrap();
    /// assert!((drive.pump_rate - 2.0e-3).abs() < 1e-15);
    /// assert!((drive.cavity_lifetime - 30.0e-6).abs() < 1e-18);
    /// ```
    ///
    /// # Errors
    ///
    /// [`LaserError::InvalidDrive`] when a position is outside its range.
    pub fn drive(&self, pump_position: f64, lifetime_position: f64) -> LaserResult<DriveParameters> {
        Ok(DriveParameters::new(
            self.pump_rate(pump_position)?,
            self.cavity_lifetime(lifetime_position)?,
        ))
    }

    /// `Wp` for a pump position
    pub fn pump_rate(&self, position: f64) -> LaserResult<f64> {
        check_position("pump_position", position, self.pump_range)?;
        Ok(position * self.pump_per_tick)
    }

    /// `Tc` for a lifetime position
    pub fn cavity_lifetime(&self, position: f64) -> LaserResult<f64> {
        check_position("lifetime_position", position, self.lifetime_range)?;
        Ok(position * self.lifetime_per_tick)
    }

    pub fn validate(&self) -> LaserResult<()> {
        for (name, value) in [
            ("pump_per_tick", self.pump_per_tick),
            ("lifetime_per_tick", self.lifetime_per_tick),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LaserError::Config(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        for (name, [low, high]) in [
            ("pump_range", self.pump_range),
            ("lifetime_range", self.lifetime_range),
        ] {
            if !(low.is_finite() && high.is_finite()) || low < 0.0 || low > high {
                return Err(LaserError::Config(format!(
                    "{} must satisfy 0 <= low <= high, got [{}, {}]",
                    name, low, high
                )));
            }
        }

        Ok(())
    }
}

fn check_position(name: &'static str, position: f64, [low, high]: [f64; 2]) -> LaserResult<()> {
    if position.is_finite() && position >= low && position <= high {
        Ok(())
    } else {
        Err(LaserError::InvalidDrive {
            name,
            message: format!("must lie in [{}, {}], got {}", low, high, position),
        })
    }
}

fn default_export_precision() -> usize {
    5
}

/// Top-level session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub constants: PhysicalConstants,

    #[serde(default)]
    pub controls: ControlScale,

    /// Fraction of the window after which the pump is switched off.
    /// When absent, the pump stays on for the whole window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_cutoff: Option<f64>,

    /// Decimal places of the text export (default: 5)
    #[serde(default = "default_export_precision")]
    pub export_precision: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::nd_yag(),
            controls: ControlScale::default(),
            pump_cutoff: None,
            export_precision: default_export_precision(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file and validate
    pub fn from_file(path: impl AsRef<Path>) -> LaserResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string and validate
    pub fn from_json(contents: &str) -> LaserResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> LaserResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> LaserResult<()> {
        self.constants.validate()?;
        self.controls.validate()?;
        self.pump_profile().validate()?;
        Ok(())
    }

    /// Pump profile implied by `pump_cutoff`
    pub fn pump_profile(&self) -> PumpProfile {
        match self.pump_cutoff {
            Some(fraction) => PumpProfile::cutoff(fraction),
            None => PumpProfile::continuous(),
        }
    }

    /// Drive for a pair of control positions, with the configured profile
    pub fn drive(&self, pump_position: f64, lifetime_position: f64) -> LaserResult<DriveParameters> {
        Ok(self
            .controls
            .drive(pump_position, lifetime_position)?
            .with_profile(self.pump_profile()))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
