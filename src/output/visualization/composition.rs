//! Composition plots for reconstitution results
//!
//! Two views of the same breakdown:
//!
//! - **Concentration bars** — one bar per component showing its
//!   post-reconstitution concentration. The at-a-glance check that the
//!   reconstituted product hits its concentration targets.
//! - **Solid mass pie** — the mass fraction each component contributes to
//!   the lyophilized cake. The cake is what the diluent has to dissolve,
//!   so this is the view formulation scientists reach for first.
//!
//! # Example
//!
//! ```rust,ignore
//! use recon_rs::output::visualization::{plot_concentration_bars, plot_solid_mass_pie};
//!
//! let result = calculator.compute(&formulation, &params)?;
//!
//! plot_concentration_bars(&result, "composition.png", None)?;
//! plot_solid_mass_pie(&result, "cake.png", None)?;
//! ```

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::element::Pie;
use plotters::prelude::*;
use std::error::Error;

use crate::calculator::ReconstitutionResult;
use crate::output::visualization::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Concentration Bars
// =================================================================================================

/// Plot post-reconstitution concentrations as one bar per component
///
/// # Arguments
///
/// * `result`      — Reconstitution result containing the breakdown rows
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults.
///                   Use `config.component_colors` to override the palette
///
/// # Errors
///
/// Returns `Err` if the result holds no components or the backend cannot
/// write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use recon_rs::output::visualization::plot_concentration_bars;
///
/// plot_concentration_bars(&result, "composition.png", None)?;
/// ```
pub fn plot_concentration_bars(
    result: &ReconstitutionResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("No components in result: nothing to plot".into());
    }

    let names: Vec<String> = result
        .component_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let concentrations: Vec<f64> = result
        .components
        .iter()
        .map(|c| c.concentration_post_recon)
        .collect();

    let default_config = PlotConfig::composition(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_conc = concentrations
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_bars_impl(backend, &names, &concentrations, config, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_bars_impl(backend, &names, &concentrations, config, max_conc)
        }
    }
}

/// Render the bar chart on any drawing backend
fn plot_bars_impl<DB: DrawingBackend>(
    backend: DB,
    names: &[String],
    concentrations: &[f64],
    config: &PlotConfig,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..names.len()).into_segmented(),
            0.0..(max_conc * 1.15),
        )?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_labels(names.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    chart.draw_series((0..names.len()).map(|i| {
        let color = config.get_component_color(i);
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), concentrations[i]),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Solid Mass Pie
// =================================================================================================

/// Plot the solid composition of the lyophilized cake as a pie chart
///
/// Slice sizes are the per-component masses carried through the cake
/// (`amount_pre_lyo`); labels carry the component names.
///
/// # Arguments
///
/// * `result`      — Reconstitution result containing the breakdown rows
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if the result holds no components, the total solid mass is
/// zero (all slices would be degenerate), or the backend cannot write to
/// `output_path`.
pub fn plot_solid_mass_pie(
    result: &ReconstitutionResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("No components in result: nothing to plot".into());
    }
    if result.total_solid_mass <= 0.0 {
        return Err("Total solid mass is zero: nothing to plot".into());
    }

    let names: Vec<String> = result
        .component_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let masses: Vec<f64> = result
        .components
        .iter()
        .map(|c| c.amount_pre_lyo)
        .collect();

    let default_config = PlotConfig::composition(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_pie_impl(backend, &names, &masses, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_pie_impl(backend, &names, &masses, config)
        }
    }
}

/// Render the pie chart on any drawing backend
fn plot_pie_impl<DB: DrawingBackend>(
    backend: DB,
    names: &[String],
    masses: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = root.titled(&config.title, ("sans-serif", 40).into_font())?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let colors: Vec<RGBColor> = (0..names.len())
        .map(|i| config.get_component_color(i))
        .collect();

    let mut pie = Pie::new(&center, &radius, masses, &colors, names);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 14).into_font());

    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ProcessParameters, ReconstitutionCalculator};
    use crate::formulation::{Component, Formulation};

    fn compute_reference() -> ReconstitutionResult {
        let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
            .with(Component::buffer("Histidine", 1.15))
            .with(Component::stabilizer("Sucrose", 80.0))
            .with(Component::surfactant("PS80", 0.5));
        let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
        ReconstitutionCalculator::new()
            .compute(&formulation, &params)
            .unwrap()
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_plot_bars_png() {
        let result = compute_reference();
        let path = temp_path("recon_rs_bars.png");

        plot_concentration_bars(&result, &path, None).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_bars_svg() {
        let result = compute_reference();
        let path = temp_path("recon_rs_bars.svg");

        plot_concentration_bars(&result, &path, None).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_bars_custom_config() {
        let result = compute_reference();
        let path = temp_path("recon_rs_bars_custom.png");

        let mut config = PlotConfig::composition("Custom Title");
        config.width = 640;
        config.height = 480;
        plot_concentration_bars(&result, &path, Some(&config)).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_bars_rejects_empty_result() {
        let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
        let result = ReconstitutionCalculator::new()
            .compute(&Formulation::empty(), &params)
            .unwrap();

        let error = plot_concentration_bars(&result, &temp_path("recon_rs_none.png"), None);
        assert!(error.is_err());
    }

    #[test]
    fn test_plot_pie_png() {
        let result = compute_reference();
        let path = temp_path("recon_rs_pie.png");

        plot_solid_mass_pie(&result, &path, None).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_pie_rejects_zero_mass() {
        let formulation = Formulation::new(Component::drug("mAb", 0.0));
        let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
        let result = ReconstitutionCalculator::new()
            .compute(&formulation, &params)
            .unwrap();

        let error = plot_solid_mass_pie(&result, &temp_path("recon_rs_pie_zero.png"), None);
        assert!(error.is_err());
    }
}
