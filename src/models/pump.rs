//! Temporal pump profiles
//!
//! Defines how the pump rate seen by the rate equations varies along the
//! step index of a run.
//!
//! # Use Case
//!
//! A flash-lamp pumped rod is driven for most of the window, then the lamp
//! goes dark and the medium decays freely. [`PumpProfile::Cutoff`] models
//! that pulsed-then-free-decay behavior; [`PumpProfile::Continuous`] keeps
//! the pump on for the whole window.
//!
//! # Example
//!
//! ```rust
//! use laser_rs::models::PumpProfile;
//!
//! let pump = PumpProfile::cutoff(0.95);
//! assert_eq!(pump.effective_rate(0, 1000, 2.0e-3), 2.0e-3);
//! assert_eq!(pump.effective_rate(950, 1000, 2.0e-3), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LaserError, LaserResult};

/// Pump profile over the steps of a run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PumpProfile {
    /// Pump on for every step
    #[default]
    Continuous,

    /// Pump on until `fraction` of the steps have elapsed, off afterwards
    ///
    /// # Parameters
    ///
    /// - `fraction`: share of the window that is pumped, in `[0, 1]`
    Cutoff { fraction: f64 },
}

impl PumpProfile {
    /// Create a continuous profile
    pub fn continuous() -> Self {
        Self::Continuous
    }

    /// Create a cutoff profile (validated when the run starts)
    pub fn cutoff(fraction: f64) -> Self {
        Self::Cutoff { fraction }
    }

    /// Check that a cutoff fraction lies in `[0, 1]`
    pub fn validate(&self) -> LaserResult<()> {
        match self {
            Self::Continuous => Ok(()),
            Self::Cutoff { fraction } => {
                if (0.0..=1.0).contains(fraction) {
                    Ok(())
                } else {
                    Err(LaserError::InvalidDrive {
                        name: "pump_cutoff",
                        message: format!("fraction must lie in [0, 1], got {}", fraction),
                    })
                }
            }
        }
    }

    /// First step at which the pump is off, if it ever is
    pub fn cutoff_step(&self, total_steps: usize) -> Option<usize> {
        match self {
            Self::Continuous => None,
            Self::Cutoff { fraction } => Some((fraction * total_steps as f64).ceil() as usize),
        }
    }

    /// Pump rate applied at `step` out of `total_steps`
    ///
    /// Returns `nominal` while the pump is on and `0` once
    /// `step >= fraction * total_steps`.
    pub fn effective_rate(&self, step: usize, total_steps: usize, nominal: f64) -> f64 {
        match self.cutoff_step(total_steps) {
            Some(cutoff) if step >= cutoff => 0.0,
            _ => nominal,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_never_switches_off() {
        let pump = PumpProfile::continuous();

        assert_eq!(pump.cutoff_step(10_000), None);
        assert_eq!(pump.effective_rate(0, 10_000, 3.0e-3), 3.0e-3);
        assert_eq!(pump.effective_rate(9_999, 10_000, 3.0e-3), 3.0e-3);
    }

    #[test]
    fn test_cutoff_boundary() {
        let pump = PumpProfile::cutoff(0.5);

        assert_eq!(pump.cutoff_step(100), Some(50));
        assert_eq!(pump.effective_rate(49, 100, 1.0), 1.0);
        assert_eq!(pump.effective_rate(50, 100, 1.0), 0.0);
        assert_eq!(pump.effective_rate(99, 100, 1.0), 0.0);
    }

    #[test]
    fn test_cutoff_fraction_rounds_up() {
        // 0.95 * 21 = 19.95 -> steps 0..=19 pumped
        let pump = PumpProfile::cutoff(0.95);
        assert_eq!(pump.effective_rate(19, 21, 1.0), 1.0);
        assert_eq!(pump.effective_rate(20, 21, 1.0), 0.0);
    }

    #[test]
    fn test_cutoff_extremes() {
        assert_eq!(PumpProfile::cutoff(0.0).effective_rate(0, 10, 1.0), 0.0);
        assert_eq!(PumpProfile::cutoff(1.0).effective_rate(9, 10, 1.0), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(PumpProfile::continuous().validate().is_ok());
        assert!(PumpProfile::cutoff(0.95).validate().is_ok());
        assert!(PumpProfile::cutoff(-0.1).validate().is_err());
        assert!(PumpProfile::cutoff(1.5).validate().is_err());
        assert!(PumpProfile::cutoff(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let pump: PumpProfile =
            serde_json::from_str(r#"{ "kind": "cutoff", "fraction": 0.9 }"#).unwrap();
        assert_eq!(pump, PumpProfile::cutoff(0.9));
    }
}
