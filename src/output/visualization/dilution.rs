//! Dilution curve plots
//!
//! Renders the output of a volume sweep: diluent volume to add as a
//! function of the target reconstitution volume. The curve is a straight
//! line in this model (mass balance is linear in the target volume), so
//! any kink or gap in the rendered plot points at bad input data.

use plotters::prelude::*;
use std::error::Error;

use crate::calculator::SweepResult;
use crate::output::visualization::config::{PlotConfig, NO_TITLE};

/// Plot a dilution curve (diluent volume vs target volume)
///
/// # Arguments
///
/// * `series`      — Sweep result containing the volume grid and series
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the sweep holds fewer than two points or the backend
/// cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use recon_rs::output::visualization::plot_dilution_curve;
///
/// let series = calculator.sweep(&formulation, &params, &sweep)?;
/// plot_dilution_curve(&series, "dilution_curve.png", None)?;
/// ```
pub fn plot_dilution_curve(
    series: &SweepResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if series.len() < 2 {
        return Err("Sweep must contain at least two points to plot a curve".into());
    }

    let default_config = PlotConfig::dilution_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let min_volume = series.recon_volumes.first().copied().unwrap_or(0.0);
    let max_volume = series.recon_volumes.last().copied().unwrap_or(1.0);
    let max_diluent = series
        .diluent_volumes
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
            plot_curve_impl(backend, series, config, min_volume, max_volume, max_diluent)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curve_impl(backend, series, config, min_volume, max_volume, max_diluent)
        }
    }
}

/// Render the dilution curve on any drawing backend
fn plot_curve_impl<DB: DrawingBackend>(
    backend: DB,
    series: &SweepResult,
    config: &PlotConfig,
    min_volume: f64,
    max_volume: f64,
    max_diluent: f64,
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
        .build_cartesian_2d(min_volume..max_volume, 0.0..(max_diluent * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            series
                .recon_volumes
                .iter()
                .zip(series.diluent_volumes.iter())
                .map(|(v, d)| (*v, *d)),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Diluent Volume")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color)
        });

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ProcessParameters, ReconstitutionCalculator, VolumeSweep};
    use crate::formulation::{Component, Formulation};

    fn compute_sweep(points: usize) -> SweepResult {
        let formulation = Formulation::new(Component::drug("mAb", 10.0));
        let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
        ReconstitutionCalculator::new()
            .sweep(&formulation, &params, &VolumeSweep::new(2.0, 10.0, points))
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
    fn test_plot_dilution_curve_png() {
        let series = compute_sweep(50);
        let path = temp_path("recon_rs_dilution.png");

        plot_dilution_curve(&series, &path, None).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_dilution_curve_svg() {
        let series = compute_sweep(50);
        let path = temp_path("recon_rs_dilution.svg");

        plot_dilution_curve(&series, &path, None).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_plot_dilution_curve_custom_config() {
        let series = compute_sweep(20);
        let path = temp_path("recon_rs_dilution_custom.png");

        let mut config = PlotConfig::dilution_curve("SARxxxx Dilution Study");
        config.line_color = BLUE;
        plot_dilution_curve(&series, &path, Some(&config)).unwrap();
        assert!(std::path::Path::new(&path).exists());
    }
}
