//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{assert_non_decreasing, integrator_with_window, relative_error, solve};
