//! Output of one integrator run

use std::collections::HashMap;

use crate::models::DriveParameters;
use crate::physics::{PHOTON_RATIO_CEILING, SteadyState};

/// Recorded channels of one run
///
/// Every vector has exactly `Np` elements and element `i` describes the state
/// *before* step `i` was applied. A trajectory is a fresh value per run; the
/// integrator keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// `t[i] = i*dt`
    pub time: Vec<f64>,

    /// Channel 1: `N / Ne`
    pub lower_ratio: Vec<f64>,

    /// Channel 2: `No / Ne`, `None` where no threshold applies
    pub threshold_ratio: Vec<Option<f64>>,

    /// Channel 3: `U / Uo`, with the display guard applied
    pub photon_ratio: Vec<f64>,

    /// Photon density `U` as integrated, before normalization
    pub photon_density: Vec<f64>,

    /// References the channels were normalized against
    pub steady: SteadyState,

    /// Drive that produced this run
    pub drive: DriveParameters,

    /// Solver name, step count and similar facts about the run
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// True when channel 2 carries a value for every sample
    ///
    /// Channel 2 is constant over a run, so it is either fully defined or
    /// fully absent.
    pub fn has_threshold(&self) -> bool {
        !self.threshold_ratio.is_empty() && self.threshold_ratio.iter().all(Option::is_some)
    }

    /// Channel 2 as plain numbers, `None` when it is undefined for the run
    pub fn threshold_values(&self) -> Option<Vec<f64>> {
        self.threshold_ratio.iter().copied().collect()
    }

    /// Number of samples where the display guard replaced `U / Uo` by `0`
    pub fn guarded_samples(&self) -> usize {
        self.photon_density
            .iter()
            .filter(|u| {
                self.steady
                    .unguarded_photon_ratio(**u)
                    .is_some_and(|ratio| ratio.is_nan() || ratio >= PHOTON_RATIO_CEILING)
            })
            .count()
    }

    /// Largest recorded photon ratio
    pub fn peak_photon_ratio(&self) -> f64 {
        self.photon_ratio
            .iter()
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
