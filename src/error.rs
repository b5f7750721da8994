//! Error types shared across the crate
//!
//! Every fallible operation of the kinetics core returns [`LaserResult`].
//! Export keeps its own error type (see [`crate::output::export::ExportError`])
//! so that a failed write can be reported without touching a trajectory.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaserError {
    /// A physical constant or the simulation window is not usable
    #[error("Invalid constant `{name}`: {message}")]
    InvalidConstant { name: &'static str, message: String },

    /// Pump rate, cavity lifetime or pump profile outside their domain
    #[error("Invalid drive parameter `{name}`: {message}")]
    InvalidDrive { name: &'static str, message: String },

    /// `Zn = Wp*(W21+W32) + W21*W32` vanished, steady state has no meaning
    #[error("Degenerate rates: normalization denominator is zero (Wp={pump_rate})")]
    DegenerateRates { pump_rate: f64 },

    /// A newer request overtook this solve before it finished
    #[error("Solve superseded at step {step} by a newer request")]
    Superseded { step: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LaserResult<T> = Result<T, LaserError>;
