//! Plot configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by the
//! composition and dilution-curve plotting functions.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by the composition (bar/pie) and dilution-curve (line) plots.
///
/// # Example: Dilution Curve
///
/// ```rust,ignore
/// use recon_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::dilution_curve("SARxxxx Dilution Study");
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Composition with Custom Colors
///
/// ```rust,ignore
/// let mut config = PlotConfig::composition("Post-Recon Composition");
/// config.component_colors = Some(vec![
///     RED,
///     BLUE,
///     GREEN,
///     RGBColor(255, 165, 0),  // Orange
/// ]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (mg/mL)")
    pub ylabel: String,

    /// Line color for curve plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for per-component plots (one per component)
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    /// If Some, must have at least as many colors as components
    pub component_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),  // Set by specific plot type
            ylabel: "Concentration (mg/mL)".to_string(),
            line_color: RED,
            component_colors: None,
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
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::composition(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for per-component composition plots
    ///
    /// Sets xlabel to "Component" and title to custom value or
    /// "Post-Reconstitution Composition"
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::composition("SARxxxx Composition");
    /// let config = PlotConfig::composition(format!("{} Composition", product));
    ///
    /// // With default title
    /// let config = PlotConfig::composition(None::<&str>);
    /// ```
    pub fn composition(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Component".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Post-Reconstitution Composition".to_string());
        config
    }

    /// Create config for dilution curves with optional custom title
    ///
    /// Sets xlabel to "Target Volume (mL)", ylabel to "Diluent Volume (mL)"
    /// and title to custom value or "Dilution Curve"
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::dilution_curve("SARxxxx Dilution Study");
    /// let config = PlotConfig::dilution_curve(None::<&str>);
    /// ```
    pub fn dilution_curve(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Target Volume (mL)".to_string();
        config.ylabel = "Diluent Volume (mL)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Dilution Curve".to_string());
        config
    }

    /// Create config for per-component plots with custom colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::multi_component_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn multi_component_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.component_colors = Some(colors);
        config
    }

    /// Get color for component at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_component_color(&self, component_index: usize) -> RGBColor {
        if let Some(ref colors) = self.component_colors {
            if component_index < colors.len() {
                return colors[component_index];
            }
        }

        // Default palette
        let default_colors = vec![
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[component_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_composition_config_default() {
        let config = PlotConfig::composition(NO_TITLE);
        assert_eq!(config.xlabel, "Component");
        assert_eq!(config.title, "Post-Reconstitution Composition");
    }

    #[test]
    fn test_composition_config_with_str() {
        let config = PlotConfig::composition("SARxxxx Composition");
        assert_eq!(config.title, "SARxxxx Composition");
    }

    #[test]
    fn test_composition_config_with_string() {
        let title = format!("{} Composition", "SARxxxx");
        let config = PlotConfig::composition(title);
        assert_eq!(config.title, "SARxxxx Composition");
    }

    #[test]
    fn test_dilution_curve_config_default() {
        let config = PlotConfig::dilution_curve(NO_TITLE);
        assert_eq!(config.xlabel, "Target Volume (mL)");
        assert_eq!(config.ylabel, "Diluent Volume (mL)");
        assert_eq!(config.title, "Dilution Curve");
    }

    #[test]
    fn test_get_component_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_component_color(0), RED);
        assert_eq!(config.get_component_color(1), BLUE);
        assert_eq!(config.get_component_color(10), RED); // Wraparound
    }

    #[test]
    fn test_get_component_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, LIGHTGREEN, ORANGE};
        let config = PlotConfig::multi_component_colors(vec![ORANGE, LIGHTGREEN, LIGHTBLUE]);
        assert_eq!(config.get_component_color(0), ORANGE);
        assert_eq!(config.get_component_color(1), LIGHTGREEN);
        assert_eq!(config.get_component_color(2), LIGHTBLUE);
    }
}
