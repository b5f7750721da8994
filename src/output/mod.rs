//! Output of integrated trajectories
//!
//! - **Export**: aligned text dump for external analysis
//! - **Visualization**: PNG/SVG kinetics plots using plotters
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   └── kinetics.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── text.rs
//! ```
//!
//! Both sub-modules read a [`Trajectory`](crate::solver::Trajectory) and
//! never modify it; a failed write or render leaves the result usable.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use laser_rs::output::{export_with_notice, plot_trajectory, TextExporter};
//! use laser_rs::physics::PhysicalConstants;
//! use laser_rs::solver::Integrator;
//!
//! let integrator = Integrator::new(PhysicalConstants::nd_yag()).unwrap();
//! let trajectory = integrator.solve_rates(2.0e-3, 30.0e-6).unwrap();
//!
//! if let Some(notice) = export_with_notice(&TextExporter::default(), &trajectory, "ndyag.dat".as_ref()) {
//!     eprintln!("{}", notice);
//! }
//! plot_trajectory(&trajectory, "ndyag.png", None).unwrap();
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{ExportError, Exporter, TextConfig, TextExporter, export_with_notice};

pub use visualization::{PlotConfig, plot_photon_comparison, plot_trajectory};
