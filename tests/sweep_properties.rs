//! Property tests for volume sweeps
//!
//! The mass balance is linear in the target volume, which gives the sweep
//! output strong, checkable structure: strict monotonicity, constant
//! increments on a uniform grid, and point-wise agreement with individual
//! `compute` calls.

use recon_rs::calculator::{
    ProcessParameters, ReconstitutionCalculator, ReconstitutionError, VolumeSweep,
};
use recon_rs::formulation::{Component, Formulation};

mod common;
use common::{reference_formulation, reference_parameters, relative_error};

#[test]
fn test_sweep_agrees_with_individual_computes() {
    let calculator = ReconstitutionCalculator::new();
    let formulation = reference_formulation();
    let params = reference_parameters();

    let series = calculator
        .sweep(&formulation, &params, &VolumeSweep::new(1.0, 12.0, 23))
        .unwrap();

    for (i, &volume) in series.recon_volumes.iter().enumerate() {
        let point_params = ProcessParameters {
            recon_volume: volume,
            ..params
        };
        let single = calculator.compute(&formulation, &point_params).unwrap();

        assert!(relative_error(series.diluent_masses[i], single.diluent_mass_needed) < 1e-12);
        assert!(relative_error(series.diluent_volumes[i], single.diluent_volume_needed) < 1e-12);
    }
}

#[test]
fn test_sweep_is_strictly_increasing() {
    let calculator = ReconstitutionCalculator::new();
    let series = calculator
        .sweep(
            &reference_formulation(),
            &reference_parameters(),
            &VolumeSweep::new(1.0, 20.0, 100),
        )
        .unwrap();

    for window in series.diluent_volumes.windows(2) {
        assert!(window[1] > window[0]);
    }
}

#[test]
fn test_uniform_grid_gives_constant_increments() {
    // Linearity check: on a uniform volume grid the diluent mass increment
    // between neighbouring points is constant (density_post_recon × step).
    let calculator = ReconstitutionCalculator::new();
    let params = reference_parameters();
    let sweep = VolumeSweep::new(2.0, 10.0, 17);

    let series = calculator
        .sweep(&reference_formulation(), &params, &sweep)
        .unwrap();

    let step = (sweep.end - sweep.start) / (sweep.points as f64 - 1.0);
    let expected_increment = params.density_post_recon * step;

    for window in series.diluent_masses.windows(2) {
        assert!(relative_error(window[1] - window[0], expected_increment) < 1e-9);
    }
}

#[test]
fn test_solid_concentration_dilutes_with_volume() {
    let calculator = ReconstitutionCalculator::new();
    let series = calculator
        .sweep(
            &reference_formulation(),
            &reference_parameters(),
            &VolumeSweep::new(2.0, 10.0, 30),
        )
        .unwrap();

    // More diluent, weaker solution
    for window in series.total_solid_concentrations_post_recon.windows(2) {
        assert!(window[1] < window[0]);
    }
}

#[test]
fn test_sweep_over_infeasible_region_fails() {
    let calculator = ReconstitutionCalculator::new();
    // 90 mg/mL × 8 mL = 720 mg of solids makes sub-0.7 mL targets infeasible
    let formulation = Formulation::new(Component::drug("mAb", 90.0));
    let params = reference_parameters();

    let error = calculator
        .sweep(&formulation, &params, &VolumeSweep::new(0.1, 10.0, 50))
        .unwrap_err();

    assert!(matches!(
        error,
        ReconstitutionError::InfeasibleReconstitutionTarget { .. }
    ));
}

#[test]
fn test_sweep_rejects_malformed_grids() {
    let calculator = ReconstitutionCalculator::new();
    let formulation = reference_formulation();
    let params = reference_parameters();

    let malformed = [
        VolumeSweep::new(-1.0, 10.0, 10),
        VolumeSweep::new(5.0, 5.0, 10),
        VolumeSweep::new(2.0, 10.0, 1),
    ];

    for sweep in malformed {
        let error = calculator.sweep(&formulation, &params, &sweep).unwrap_err();
        assert!(matches!(error, ReconstitutionError::InvalidSweep { .. }));
    }
}

#[test]
fn test_large_grid_matches_small_grid_endpoints() {
    // Grid resolution must not change the physics: endpoint values are
    // identical whatever the number of interior points.
    let calculator = ReconstitutionCalculator::new();
    let formulation = reference_formulation();
    let params = reference_parameters();

    let coarse = calculator
        .sweep(&formulation, &params, &VolumeSweep::new(2.0, 10.0, 2))
        .unwrap();
    let fine = calculator
        .sweep(&formulation, &params, &VolumeSweep::new(2.0, 10.0, 10_001))
        .unwrap();

    assert!(relative_error(coarse.diluent_volumes[0], fine.diluent_volumes[0]) < 1e-12);
    assert!(
        relative_error(
            *coarse.diluent_volumes.last().unwrap(),
            *fine.diluent_volumes.last().unwrap()
        ) < 1e-12
    );
}
