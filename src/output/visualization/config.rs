//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Caption above the first panel
/// - `xlabel`: Time axis label, shared by both panels
/// - `population_label`, `photon_label`: Y-axis labels of the two panels
/// - `series_colors`: Optional palette, one color per series
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to draw the mesh lines (axis labels are always drawn)
///
/// # Example
///
/// ```rust
/// use laser_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::kinetics(NO_TITLE);
/// assert_eq!(config.xlabel, "time, ms");
///
/// let config = PlotConfig::kinetics(format!("Wp = {} 1/ms", 2.0e-3));
/// assert!(config.title.starts_with("Wp"));
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Nd:YAG kinetics")
    pub title: String,

    /// X-axis label (default: "time, ms")
    pub xlabel: String,

    /// Y-axis label of the population panel (default: "inverse population")
    pub population_label: String,

    /// Y-axis label of the photon panel (default: "lasing power")
    pub photon_label: String,

    /// Optional palette (default: BLUE, RED, GREEN, ...)
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Draw mesh lines behind the curves (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Nd:YAG kinetics".to_string(),
            xlabel: "time, ms".to_string(),
            population_label: "inverse population".to_string(),
            photon_label: "lasing power".to_string(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for the two-panel kinetics plot with an optional custom title
    pub fn kinetics(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Config for overlaid photon curves of several runs
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Lasing power comparison".to_string());
        config
    }

    /// Builder pattern: custom palette
    pub fn with_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Color of series `index`
    ///
    /// Uses custom colors if provided, otherwise the default palette, which
    /// starts with blue for `N/Ne` and red for `No/Ne`.
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && index < colors.len()
        {
            return colors[index];
        }

        const PALETTE: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
