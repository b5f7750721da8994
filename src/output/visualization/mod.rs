//! Visualization of integrated trajectories
//!
//! This module renders results with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **kinetics**: Time plots of the recorded channels
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use laser_rs::output::visualization::{plot_trajectory, PlotConfig};
//! use laser_rs::physics::PhysicalConstants;
//! use laser_rs::solver::Integrator;
//!
//! let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
//! let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
//!
//! // Default config
//! plot_trajectory(&trajectory, "kinetics.png", None).unwrap();
//!
//! // Custom title, SVG output
//! let config = PlotConfig::kinetics("Wp = 2e-3, Tc = 30 ns");
//! plot_trajectory(&trajectory, "kinetics.svg", Some(&config)).unwrap();
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Populations and photons of one run | `plot_trajectory` |
//! | Photon curves of several runs | `plot_photon_comparison` |

pub mod config;
pub mod kinetics;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};

pub use kinetics::{
    PlotSeries, photon_series, plot_photon_comparison, plot_trajectory, population_series,
};
