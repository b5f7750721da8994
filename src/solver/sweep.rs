//! Batch solves over many drive points
//!
//! Each run is independent and returns its own [`Trajectory`], so a sweep is
//! an embarrassingly parallel map. With the `parallel` feature the map runs on
//! Rayon's thread pool; without it the drives are solved in order.

use crate::error::LaserResult;
use crate::models::DriveParameters;
use crate::solver::{Integrator, Trajectory};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Solve every drive, preserving input order in the output
///
/// # Example
///
/// ```rust
/// use laser_rs::models::DriveParameters;
/// use laser_rs::physics::PhysicalConstants;
/// use laser_rs::solver::{Integrator, sweep};
///
/// let constants = PhysicalConstants::nd_yag().with_window(1.0e-4, 200).unwrap();
/// let integrator = Integrator::new(constants).unwrap();
/// let drives: Vec<_> = [1.0e-3, 2.0e-3, 3.0e-3]
///     .iter()
///     .map(|&wp| DriveParameters::new(wp, 20.0e-6))
///     .collect();
///
/// let results = sweep(&integrator, &drives);
/// assert_eq!(results.len(), 3);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn sweep(integrator: &Integrator, drives: &[DriveParameters]) -> Vec<LaserResult<Trajectory>> {
    #[cfg(feature = "parallel")]
    {
        drives
            .par_iter()
            .map(|drive| integrator.solve(drive))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        drives.iter().map(|drive| integrator.solve(drive)).collect()
    }
}
