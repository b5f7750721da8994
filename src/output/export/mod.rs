//! Export of trajectories to files
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file rather than changes to existing ones.
//!
//! # Available formats
//!
//! | Format       | Module   |
//! |--------------|----------|
//! | Aligned text | [`text`] |
//!
//! # Failure handling
//!
//! An export failure never touches the trajectory it was writing. Front ends
//! that only need to tell the user call [`export_with_notice`], which logs
//! the failure and turns it into a notice string.
//!
//! # Usage example
//!
//! ```rust,no_run
//! use laser_rs::output::export::{Exporter, TextExporter};
//! use laser_rs::physics::PhysicalConstants;
//! use laser_rs::solver::Integrator;
//!
//! let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
//! let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
//!
//! TextExporter::default().export(&trajectory, "ndyag.dat".as_ref()).unwrap();
//! ```

pub mod text;

pub use text::{TextConfig, TextExporter};

use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::solver::Trajectory;

/// Errors raised while exporting a trajectory
#[derive(Error, Debug)]
pub enum ExportError {
    /// The trajectory has no samples
    #[error("Empty trajectory: nothing to export")]
    EmptyTrajectory,

    /// A channel does not have one value per time point
    #[error("Channel `{channel}` has {found} values, expected {expected}")]
    LengthMismatch {
        channel: &'static str,
        expected: usize,
        found: usize,
    },

    /// Missing directory, permission denied and friends
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction trait for all export formats
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// boxing and lets the caller react precisely to the failure.
pub trait Exporter {
    /// Error type specific to this export format
    type Error: std::error::Error;

    /// Write `trajectory` to `path`, replacing any existing file
    fn export(&self, trajectory: &Trajectory, path: &Path) -> Result<(), Self::Error>;
}

/// Export and turn a failure into a user-visible notice
///
/// Returns `None` on success. On failure the error is logged at `warn` level
/// and returned as a message suitable for a status line or dialog.
pub fn export_with_notice<E: Exporter>(
    exporter: &E,
    trajectory: &Trajectory,
    path: &Path,
) -> Option<String> {
    match exporter.export(trajectory, path) {
        Ok(()) => None,
        Err(error) => {
            warn!("Export to {} failed: {}", path.display(), error);
            Some(format!("Could not save {}: {}", path.display(), error))
        }
    }
}
