//! Whitespace-aligned text dump of a trajectory
//!
//! # Format
//!
//! One `#`-prefixed header line, then one line per sample with fixed-point
//! fields right-aligned in columns. Two columns when the run has no
//! threshold, four otherwise:
//!
//! ```text
//! #           t        N/Ne       No/Ne        U/Uo
//!       0.00000     0.00000     0.03502     0.00000
//!       0.00010     0.00002     0.03502     0.00000
//! ```
//!
//! ```text
//! #           t        N/Ne
//!       0.00000     0.00000
//! ```
//!
//! The optional metadata block (off by default) adds `#` comment lines
//! above the header with a timestamp, the model, the solver and the
//! steady-state summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::output::export::{ExportError, Exporter};
use crate::solver::Trajectory;

// =============================================================================
// Configuration
// =============================================================================

/// Layout of the text dump
///
/// # Example
///
/// ```rust
/// use laser_rs::output::export::TextConfig;
///
/// let config = TextConfig::default().precision(7).with_metadata();
/// assert_eq!(config.precision, 7);
/// assert!(config.include_metadata);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    /// Decimal places of every field (default: 5)
    pub precision: usize,

    /// Width of every column, sign and padding included (default: 12)
    pub column_width: usize,

    /// Add `#` comment lines above the column header (default: false)
    pub include_metadata: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            precision: 5,
            column_width: 12,
            include_metadata: false,
        }
    }
}

impl TextConfig {
    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set column width
    pub fn column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    /// Builder pattern: enable the metadata block
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

// =============================================================================
// Exporter
// =============================================================================

const FULL_COLUMNS: &[&str] = &["t", "N/Ne", "No/Ne", "U/Uo"];
const SHORT_COLUMNS: &[&str] = &["t", "N/Ne"];

/// Writes trajectories as aligned text
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    pub config: TextConfig,
}

impl TextExporter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Column names for a trajectory
    pub fn column_names(trajectory: &Trajectory) -> &'static [&'static str] {
        if trajectory.has_threshold() {
            FULL_COLUMNS
        } else {
            SHORT_COLUMNS
        }
    }

    /// Header line, `#` in the first character
    fn header_line(&self, names: &[&str]) -> String {
        let width = self.config.column_width.saturating_sub(1);
        let mut line = String::from("#");
        for name in names {
            line.push_str(&format!(" {:>width$}", name, width = width));
        }
        line
    }

    /// One data line; the leading blank lines fields up with the header
    fn data_line(&self, values: &[f64]) -> String {
        let width = self.config.column_width.saturating_sub(1);
        let precision = self.config.precision;
        let mut line = String::from(" ");
        for value in values {
            line.push_str(&format!(
                " {:>width$.precision$}",
                value,
                width = width,
                precision = precision
            ));
        }
        line
    }

    fn write_metadata(
        &self,
        writer: &mut impl Write,
        trajectory: &Trajectory,
    ) -> std::io::Result<()> {
        writeln!(writer, "# Nd:YAG rate-equation trajectory")?;
        writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

        let mut keys: Vec<&String> = trajectory.metadata.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(writer, "# {}: {}", key, trajectory.metadata[key])?;
        }

        writeln!(writer, "# Wp: {}", trajectory.drive.pump_rate)?;
        writeln!(writer, "# Tc: {}", trajectory.drive.cavity_lifetime)?;
        writeln!(writer, "# Steady state: {}", trajectory.steady)?;
        writeln!(writer, "#")
    }

    fn validate(trajectory: &Trajectory) -> Result<(), ExportError> {
        let expected = trajectory.time.len();
        if expected == 0 {
            return Err(ExportError::EmptyTrajectory);
        }

        for (channel, found) in [
            ("N/Ne", trajectory.lower_ratio.len()),
            ("No/Ne", trajectory.threshold_ratio.len()),
            ("U/Uo", trajectory.photon_ratio.len()),
        ] {
            if found != expected {
                return Err(ExportError::LengthMismatch {
                    channel,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }
}

impl Exporter for TextExporter {
    type Error = ExportError;

    fn export(&self, trajectory: &Trajectory, path: &Path) -> Result<(), Self::Error> {
        // ============================= Validation =============================

        Self::validate(trajectory)?;
        let threshold = trajectory.threshold_values();

        // ============================= Open File ==============================

        let mut writer = BufWriter::new(File::create(path)?);

        // ============================= Header =================================

        if self.config.include_metadata {
            self.write_metadata(&mut writer, trajectory)?;
        }

        writeln!(writer, "{}", self.header_line(Self::column_names(trajectory)))?;

        // ============================= Data ===================================

        for i in 0..trajectory.len() {
            let line = match &threshold {
                Some(threshold) => self.data_line(&[
                    trajectory.time[i],
                    trajectory.lower_ratio[i],
                    threshold[i],
                    trajectory.photon_ratio[i],
                ]),
                None => self.data_line(&[trajectory.time[i], trajectory.lower_ratio[i]]),
            };
            writeln!(writer, "{}", line)?;
        }

        writer.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
