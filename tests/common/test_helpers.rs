//! Helper functions for integration tests

#![allow(dead_code)]

use laser_rs::physics::PhysicalConstants;
use laser_rs::solver::{Integrator, Trajectory};

/// Nd:YAG integrator over a custom window
pub fn integrator_with_window(time_step: f64, samples: usize) -> Integrator {
    let constants = PhysicalConstants::nd_yag()
        .with_window(time_step, samples)
        .expect("valid window");
    Integrator::new(constants).expect("valid constants")
}

/// Continuous-pump run over the full Nd:YAG window
pub fn solve(pump_rate: f64, cavity_lifetime: f64) -> Trajectory {
    Integrator::new(PhysicalConstants::nd_yag())
        .expect("valid constants")
        .solve_rates(pump_rate, cavity_lifetime)
        .expect("solve succeeds")
}

/// Assert `values[i+1] - values[i] >= -tolerance` for every `i`
pub fn assert_non_decreasing(values: &[f64], tolerance: f64, message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        let diff = pair[1] - pair[0];
        assert!(
            diff >= -tolerance,
            "{}: sample {} decreases by {} (tolerance {})",
            message,
            i + 1,
            -diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
