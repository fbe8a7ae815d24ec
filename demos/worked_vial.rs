//! Example: Reference Vial - Full Reconstitution Workup
//!
//! Computes the reconstitution of the reference development batch:
//! an 8 mg/mL drug formulation with a histidine/sucrose/PS80 excipient
//! system, filled at 8 mL and reconstituted to 4 mL with water for
//! injection.
//!
//! **Formulation** (pre-lyophilization, mg/mL):
//! - SARxxxx (drug): 8.0
//! - Histidine: 1.15
//! - Histidine HCl: 0.54
//! - Sucrose: 80.0
//! - PS80: 0.5
//!
//! **Process**:
//! - Filling volume: 8 mL at 1030 mg/mL
//! - Target volume: 4 mL at 1030 mg/mL
//! - Diluent: WFI (998.2 mg/mL)

use recon_rs::{
    calculator::{ProcessParameters,
                 ReconstitutionCalculator},
    formulation::{Component,
                  Formulation},
    output::{export_result_csv,
             plot_concentration_bars,
             plot_solid_mass_pie,
             CsvConfig,
             PlotConfig},
};
use recon_rs::output::export::CsvMetadata;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Lyophilized Drug Product - Reconstitution Workup");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Formulation ======

    let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
        .with(Component::buffer("Histidine", 1.15))
        .with(Component::buffer("Histidine HCl", 0.54))
        .with(Component::stabilizer("Sucrose", 80.0))
        .with(Component::surfactant("PS80", 0.5));

    println!("Formulation (pre-lyophilization):");
    for component in formulation.components() {
        println!(
            "  {:<14} {:<12} {:>8.2} mg/mL",
            component.name(),
            format!("[{}]", component.role()),
            component.concentration_pre_lyo()
        );
    }

    // ====== Process parameters ======

    let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);

    println!("\nProcess:");
    println!("  Filling volume      : {} mL", params.filling_volume);
    println!("  Density pre-lyo     : {} mg/mL", params.density_pre_lyo);
    println!("  Target volume       : {} mL", params.recon_volume);
    println!("  Density post-recon  : {} mg/mL", params.density_post_recon);
    println!("  Diluent density     : {} mg/mL\n", params.diluent_density);

    // ====== Compute ======

    let calculator = ReconstitutionCalculator::new();
    let result = calculator.compute(&formulation, &params)?;

    // =============================================================================================
    // Results
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Results: Per-Component Breakdown");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<14} {:>14} {:>16} {:>16}",
             "Component", "Pre (mg/mL)", "Amount (mg/vial)", "Post (mg/mL)");
    println!("{:-<62}", "");

    for row in &result.components {
        println!("{:<14} {:>14.2} {:>16.2} {:>16.2}",
                 row.name, row.concentration_pre_lyo, row.amount_pre_lyo,
                 row.concentration_post_recon);
    }
    println!("{:<14} {:>14.2} {:>16.2} {:>16.2}",
             "Solvent pool",
             result.solvent_concentration_pre_lyo,
             result.solvent_mass_pre_lyo,
             result.solvent_concentration_post_recon);

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Results: Diluent Requirement");
    println!("═══════════════════════════════════════════════════════\n");

    println!("  Total solid content    : {:.2} mg/mL", result.total_solid_concentration);
    println!("  Theoretical solid mass : {:.2} mg/vial", result.total_solid_mass);
    println!("  Diluent mass needed    : {:.2} mg/vial", result.diluent_mass_needed);
    println!("  Diluent volume needed  : {:.4} mL/vial", result.diluent_volume_needed);

    // =============================================================================================
    // Export & Plots
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Outputs");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();

    let csv_path = tmp_dir.join("sarxxxx_breakdown.csv");
    let csv_config = CsvConfig::default()
        .with_metadata(CsvMetadata::from_process("SARxxxx DP", &params));
    export_result_csv(&result, csv_path.to_str().unwrap(), Some(&csv_config))?;
    println!("  Breakdown CSV : {:?}", csv_path);

    let bars_path = tmp_dir.join("sarxxxx_composition.png");
    let bars_config = PlotConfig::composition("SARxxxx: Post-Reconstitution Composition");
    plot_concentration_bars(&result, bars_path.to_str().unwrap(), Some(&bars_config))?;
    println!("  Composition   : {:?}", bars_path);

    let pie_path = tmp_dir.join("sarxxxx_cake.png");
    let pie_config = PlotConfig::composition("SARxxxx: Cake Solid Composition");
    plot_solid_mass_pie(&result, pie_path.to_str().unwrap(), Some(&pie_config))?;
    println!("  Cake pie      : {:?}", pie_path);

    Ok(())
}
