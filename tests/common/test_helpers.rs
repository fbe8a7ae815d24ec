//! Helper functions and fixtures for integration tests

use recon_rs::calculator::ProcessParameters;
use recon_rs::formulation::{Component, Formulation};

/// The reference formulation from the original development batch:
/// 8 mg/mL drug with a histidine buffer system, sucrose as stabilizer,
/// and polysorbate 80. Total solid content 90.19 mg/mL.
pub fn reference_formulation() -> Formulation {
    Formulation::new(Component::drug("SARxxxx", 8.0))
        .with(Component::buffer("Histidine", 1.15))
        .with(Component::buffer("Histidine HCl", 0.54))
        .with(Component::stabilizer("Sucrose", 80.0))
        .with(Component::surfactant("PS80", 0.5))
}

/// The matching process: fill 8 mL at 1030 mg/mL, reconstitute to 4 mL at
/// 1030 mg/mL with water for injection (998.2 mg/mL).
pub fn reference_parameters() -> ProcessParameters {
    ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_reference_fixture_totals() {
        let formulation = reference_formulation();
        assert_eq!(formulation.len(), 5);
        assert!((formulation.total_solid_concentration() - 90.19).abs() < 1e-12);
    }
}
