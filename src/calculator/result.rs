//! Reconstitution result snapshot
//!
//! The result is entirely derived and never mutated once produced: one call
//! to the calculator yields one immutable snapshot of every mass, volume,
//! and concentration the mass balance determines.

use std::collections::HashMap;

use nalgebra::DVector;

use crate::formulation::ComponentRole;

// =================================================================================================
// Per-Component Breakdown
// =================================================================================================

/// Mass and concentration of one original component through the process
///
/// One row per formulation component, in formulation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBreakdown {
    /// Component label (copied from the formulation)
    pub name: String,

    /// Component role (copied from the formulation)
    pub role: ComponentRole,

    /// Concentration prior to lyophilization (mg/mL)
    pub concentration_pre_lyo: f64,

    /// Mass per vial carried through the cake (mg)
    pub amount_pre_lyo: f64,

    /// Concentration after reconstitution to the target volume (mg/mL)
    pub concentration_post_recon: f64,
}

// =================================================================================================
// Reconstitution Result
// =================================================================================================

/// Output snapshot of one mass-balance evaluation
///
/// All masses are per vial (mg), volumes in mL, concentrations and
/// densities in mg/mL.
///
/// # Mass Balance
///
/// Two balances hold by construction (within floating-point tolerance):
///
/// ```text
/// Σ amount_pre_lyo + solvent_mass_pre_lyo  ==  density_pre_lyo × filling_volume
/// total_solid_mass + diluent_mass_needed   ==  recon_volume × density_post_recon
/// ```
///
/// The residual helpers below report the defect of each balance so tests
/// and diagnostics can pin them without recomputing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstitutionResult {
    /// Sum of all component concentrations prior to lyophilization (mg/mL)
    pub total_solid_concentration: f64,

    /// Concentration of the implicit solvent carrier prior to
    /// lyophilization (mg/mL), derived as
    /// `density_pre_lyo − total_solid_concentration`
    pub solvent_concentration_pre_lyo: f64,

    /// Per-component breakdown rows, in formulation order
    pub components: Vec<ComponentBreakdown>,

    /// Mass of all solids per vial (mg); invariant through lyophilization
    /// and reconstitution
    pub total_solid_mass: f64,

    /// Residual solvent mass per vial prior to lyophilization (mg)
    pub solvent_mass_pre_lyo: f64,

    /// Diluent mass to add per vial (mg)
    pub diluent_mass_needed: f64,

    /// Diluent volume to add per vial (mL)
    pub diluent_volume_needed: f64,

    /// Concentration of the solvent pool after reconstitution (mg/mL):
    /// residual solvent carried over in the cake plus the added diluent,
    /// over the target volume
    pub solvent_concentration_post_recon: f64,

    /// Diagnostic key/value pairs (process parameters echo etc.)
    metadata: HashMap<String, String>,
}

impl ReconstitutionResult {
    /// Assemble a result snapshot with empty metadata
    pub(crate) fn new(
        total_solid_concentration: f64,
        solvent_concentration_pre_lyo: f64,
        components: Vec<ComponentBreakdown>,
        total_solid_mass: f64,
        solvent_mass_pre_lyo: f64,
        diluent_mass_needed: f64,
        diluent_volume_needed: f64,
        solvent_concentration_post_recon: f64,
    ) -> Self {
        Self {
            total_solid_concentration,
            solvent_concentration_pre_lyo,
            components,
            total_solid_mass,
            solvent_mass_pre_lyo,
            diluent_mass_needed,
            diluent_volume_needed,
            solvent_concentration_post_recon,
            metadata: HashMap::new(),
        }
    }

    /// Number of breakdown rows
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the evaluated formulation held no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component labels in formulation order
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// Per-component masses per vial as a vector (mg)
    pub fn amounts_pre_lyo(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.components.len(),
            self.components.iter().map(|c| c.amount_pre_lyo),
        )
    }

    /// Per-component post-reconstitution concentrations as a vector (mg/mL)
    pub fn concentrations_post_recon(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.components.len(),
            self.components.iter().map(|c| c.concentration_post_recon),
        )
    }

    /// Defect of the pre-lyophilization balance (mg):
    /// `Σ amount_pre_lyo + solvent_mass_pre_lyo − density_pre_lyo × filling_volume`
    ///
    /// Needs the original parameters, which the snapshot does not retain.
    pub fn pre_lyo_balance_residual(&self, density_pre_lyo: f64, filling_volume: f64) -> f64 {
        self.amounts_pre_lyo().sum() + self.solvent_mass_pre_lyo
            - density_pre_lyo * filling_volume
    }

    /// Defect of the reconstitution balance (mg):
    /// `total_solid_mass + diluent_mass_needed − recon_volume × density_post_recon`
    pub fn recon_balance_residual(&self, recon_volume: f64, density_post_recon: f64) -> f64 {
        self.total_solid_mass + self.diluent_mass_needed - recon_volume * density_post_recon
    }

    /// Get a metadata value
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|v| v.as_str())
    }

    /// Set a metadata value
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row_result() -> ReconstitutionResult {
        ReconstitutionResult::new(
            10.0,
            990.0,
            vec![ComponentBreakdown {
                name: "mAb".to_string(),
                role: ComponentRole::Drug,
                concentration_pre_lyo: 10.0,
                amount_pre_lyo: 80.0,
                concentration_post_recon: 20.0,
            }],
            80.0,
            7920.0,
            3320.0,
            3.326,
            2810.0,
        )
    }

    #[test]
    fn test_vector_accessors_follow_component_order() {
        let result = single_row_result();

        assert_eq!(result.len(), 1);
        assert_eq!(result.component_names(), vec!["mAb"]);
        assert_eq!(result.amounts_pre_lyo()[0], 80.0);
        assert_eq!(result.concentrations_post_recon()[0], 20.0);
    }

    #[test]
    fn test_metadata_round_trip() {
        let mut result = single_row_result();

        assert!(result.get_metadata("calculator").is_none());
        result.add_metadata("calculator", "Reconstitution Mass Balance");
        assert_eq!(
            result.get_metadata("calculator"),
            Some("Reconstitution Mass Balance")
        );
    }

    #[test]
    fn test_balance_residuals_vanish_for_consistent_snapshot() {
        let result = single_row_result();

        // 80 + 7920 = 1000 * 8
        assert!(result.pre_lyo_balance_residual(1000.0, 8.0).abs() < 1e-9);
        // 80 + 3320 = 4 * 850
        assert!(result.recon_balance_residual(4.0, 850.0).abs() < 1e-9);
    }
}
