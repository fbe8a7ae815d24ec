//! Example: Dilution Study - Sweep Across Target Volumes
//!
//! Evaluates the reference formulation across a range of target
//! reconstitution volumes and renders the dilution curve. Use this kind of
//! sweep to pick a target volume that balances injection volume against
//! post-reconstitution concentration.

use recon_rs::{
    calculator::{ProcessParameters,
                 ReconstitutionCalculator,
                 VolumeSweep},
    formulation::{Component,
                  Formulation},
    output::{export_sweep_csv,
             plot_dilution_curve,
             PlotConfig},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Dilution Study - Target Volume Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Formulation and process ======

    let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
        .with(Component::buffer("Histidine", 1.15))
        .with(Component::buffer("Histidine HCl", 0.54))
        .with(Component::stabilizer("Sucrose", 80.0))
        .with(Component::surfactant("PS80", 0.5));

    let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);

    // ====== Sweep configuration ======

    let sweep = VolumeSweep::new(1.0, 10.0, 1000);

    println!("Sweep:");
    println!("  Target volumes : {} .. {} mL", sweep.start, sweep.end);
    println!("  Grid points    : {}\n", sweep.points);

    // ====== Evaluate ======

    let calculator = ReconstitutionCalculator::new();

    let current_time = Instant::now();
    let series = calculator.sweep(&formulation, &params, &sweep)?;
    let elapsed_time = current_time.elapsed().as_secs_f64();

    println!("Evaluated {} grid points in {:.3} ms\n", series.len(), elapsed_time * 1e3);

    // =============================================================================================
    // Results Summary
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Results: Selected Grid Points");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<18} {:>18} {:>20}",
             "Target Vol (mL)", "Diluent Vol (mL)", "Solids Post (mg/mL)");
    println!("{:-<58}", "");

    // Every ~111th point lands on the whole-mL targets of a 1..10 grid
    for i in (0..series.len()).step_by(111) {
        println!("{:<18.2} {:>18.4} {:>20.2}",
                 series.recon_volumes[i],
                 series.diluent_volumes[i],
                 series.total_solid_concentrations_post_recon[i]);
    }

    // =============================================================================================
    // Export & Plot
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Outputs");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();

    let csv_path = tmp_dir.join("sarxxxx_dilution_curve.csv");
    export_sweep_csv(&series, csv_path.to_str().unwrap(), None)?;
    println!("  Sweep CSV      : {:?}", csv_path);

    let plot_path = tmp_dir.join("sarxxxx_dilution_curve.png");
    let plot_config = PlotConfig::dilution_curve("SARxxxx: Diluent vs Target Volume");
    plot_dilution_curve(&series, plot_path.to_str().unwrap(), Some(&plot_config))?;
    println!("  Dilution curve : {:?}", plot_path);

    Ok(())
}
