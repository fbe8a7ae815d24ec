//! Reconstitution mass-balance calculator
//!
//! # Mathematical Background
//!
//! Lyophilization removes the solvent from a filled vial and leaves a solid
//! cake. Reconstitution adds diluent until the contents reach a target
//! volume. The governing principle is conservation of solid mass: no solid
//! is gained or lost through freeze-drying or reconstitution, so the mass
//! the diluent must supply is whatever remains of the target mass after the
//! cake is accounted for:
//!
//! ```text
//! diluent_mass = recon_volume × density_post_recon − total_solid_mass
//! ```
//!
//! Everything else the calculator reports (per-component amounts, pre- and
//! post-reconstitution concentrations, the residual solvent pool) follows
//! from the same balance applied per component.
//!
//! # Characteristics
//!
//! - **Deterministic**: same inputs, same outputs — retries are meaningless
//! - **Total**: out-of-domain inputs return typed errors, never panics
//! - **Stateless**: one call per evaluation, nothing retained between calls
//! - **Complexity**: O(number of components)
//!
//! # Example
//!
//! ```rust,ignore
//! use recon_rs::calculator::{ProcessParameters, ReconstitutionCalculator};
//!
//! let calculator = ReconstitutionCalculator::new();
//! let result = calculator.compute(&formulation, &params)?;
//! println!("Add {:.4} mL of diluent per vial", result.diluent_volume_needed);
//! ```

use crate::calculator::error::ReconstitutionError;
use crate::calculator::parameters::ProcessParameters;
use crate::calculator::result::{ComponentBreakdown, ReconstitutionResult};
use crate::calculator::validate_result_finite;
use crate::formulation::Formulation;

// =================================================================================================
// Reconstitution Calculator
// =================================================================================================

/// Mass-balance calculator for lyophilized drug product reconstitution
///
/// # Algorithm
///
/// For a formulation with components `i` at pre-lyophilization
/// concentrations `c_i` and process parameters `(V_fill, ρ_pre, V_recon,
/// ρ_post, ρ_dil)`:
///
/// 1. `C_solid = Σ c_i` and `C_solvent = ρ_pre − C_solid`
///    (negative `C_solvent` → `NegativeSolventConcentration`)
/// 2. Per component: `m_i = c_i × V_fill`
/// 3. `M_solid = C_solid × V_fill` and `M_solvent = C_solvent × V_fill`
/// 4. `M_dil = V_recon × ρ_post − M_solid`
///    (negative `M_dil` → `InfeasibleReconstitutionTarget`)
/// 5. `V_dil = M_dil / ρ_dil`
/// 6. Per component: `c_i' = m_i / V_recon`
/// 7. Solvent pool after mixing: `C_solvent' = (M_solvent + M_dil) / V_recon`
///
/// The residual solvent of step 7 reflects that this simplified model does
/// not assume freeze-drying removes 100% of the solvent: the carried-over
/// solvent mass is reconstituted alongside the added diluent.
///
/// # Concurrency
///
/// The calculator holds no state; a single instance may be shared freely
/// across threads and calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstitutionCalculator;

impl ReconstitutionCalculator {
    /// Create a new calculator
    ///
    /// # Example
    ///
    /// ```rust
    /// use recon_rs::calculator::ReconstitutionCalculator;
    ///
    /// let calculator = ReconstitutionCalculator::new();
    /// assert_eq!(calculator.name(), "Reconstitution Mass Balance");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Name of the calculation (used for display and export metadata)
    pub fn name(&self) -> &'static str {
        "Reconstitution Mass Balance"
    }

    /// Evaluate the mass balance for one formulation under one parameter set
    ///
    /// # Errors
    ///
    /// - `InvalidVolume` / `InvalidDensity` — non-positive or non-finite
    ///   process parameters
    /// - `InvalidComponent` — empty component name, or a negative or
    ///   non-finite concentration
    /// - `NegativeSolventConcentration` — solids exceed the
    ///   pre-lyophilization density
    /// - `InfeasibleReconstitutionTarget` — target mass below the solid mass
    pub fn compute(
        &self,
        formulation: &Formulation,
        params: &ProcessParameters,
    ) -> Result<ReconstitutionResult, ReconstitutionError> {
        // ====== Step 1: Validation ======

        params.validate()?;
        validate_formulation(formulation)?;

        // An empty formulation is a degenerate valid case (zero solids,
        // pure diluent fill) but almost always a caller mistake.
        if formulation.is_empty() {
            log::warn!("computing reconstitution for a formulation with no components");
        }

        // ====== Step 2: Pre-Lyophilization Composition ======

        let total_solid_concentration = formulation.total_solid_concentration();
        let solvent_concentration_pre_lyo = params.density_pre_lyo - total_solid_concentration;

        if solvent_concentration_pre_lyo < 0.0 {
            return Err(ReconstitutionError::NegativeSolventConcentration {
                total_solid_concentration,
                density_pre_lyo: params.density_pre_lyo,
            });
        }

        let total_solid_mass = total_solid_concentration * params.filling_volume;
        let solvent_mass_pre_lyo = solvent_concentration_pre_lyo * params.filling_volume;

        // ====== Step 3: Reconstitution Mass Balance ======

        let target_mass = params.target_reconstituted_mass();
        let diluent_mass_needed = target_mass - total_solid_mass;

        if diluent_mass_needed < 0.0 {
            return Err(ReconstitutionError::InfeasibleReconstitutionTarget {
                target_mass,
                total_solid_mass,
            });
        }

        // diluent_density > 0 is guaranteed by step 1
        let diluent_volume_needed = diluent_mass_needed / params.diluent_density;

        let solvent_concentration_post_recon =
            (solvent_mass_pre_lyo + diluent_mass_needed) / params.recon_volume;

        // ====== Step 4: Per-Component Breakdown ======

        let components: Vec<ComponentBreakdown> = formulation
            .components()
            .iter()
            .map(|component| {
                let amount_pre_lyo = component.concentration_pre_lyo() * params.filling_volume;
                ComponentBreakdown {
                    name: component.name().to_string(),
                    role: component.role(),
                    concentration_pre_lyo: component.concentration_pre_lyo(),
                    amount_pre_lyo,
                    concentration_post_recon: amount_pre_lyo / params.recon_volume,
                }
            })
            .collect();

        // ====== Step 5: Build Result ======

        let mut result = ReconstitutionResult::new(
            total_solid_concentration,
            solvent_concentration_pre_lyo,
            components,
            total_solid_mass,
            solvent_mass_pre_lyo,
            diluent_mass_needed,
            diluent_volume_needed,
            solvent_concentration_post_recon,
        );

        // Add metadata for diagnostics and reproducibility

        result.add_metadata("calculator", self.name());
        result.add_metadata("filling volume (mL)", &params.filling_volume.to_string());
        result.add_metadata("density pre-lyo (mg/mL)", &params.density_pre_lyo.to_string());
        result.add_metadata("recon volume (mL)", &params.recon_volume.to_string());
        result.add_metadata(
            "density post-recon (mg/mL)",
            &params.density_post_recon.to_string(),
        );
        result.add_metadata("diluent density (mg/mL)", &params.diluent_density.to_string());

        // Check for numerical issues (NaN, Inf) before handing the snapshot
        // to consumers
        validate_result_finite(&result)?;

        Ok(result)
    }
}

// =================================================================================================
// Formulation Validation
// =================================================================================================

/// Check component names and concentrations before any arithmetic
pub(crate) fn validate_formulation(formulation: &Formulation) -> Result<(), ReconstitutionError> {
    for component in formulation.components() {
        if component.name().trim().is_empty() {
            return Err(ReconstitutionError::InvalidComponent {
                name: component.name().to_string(),
                reason: "component name must not be empty".to_string(),
            });
        }

        let concentration = component.concentration_pre_lyo();
        if !concentration.is_finite() {
            return Err(ReconstitutionError::InvalidComponent {
                name: component.name().to_string(),
                reason: format!("concentration {} is not finite", concentration),
            });
        }
        if concentration < 0.0 {
            return Err(ReconstitutionError::InvalidComponent {
                name: component.name().to_string(),
                reason: format!("concentration {} mg/mL is negative", concentration),
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
