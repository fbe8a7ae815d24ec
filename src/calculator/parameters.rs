//! Process parameters for one reconstitution evaluation
//!
//! # Design
//!
//! Plain value object with factory constructors and an explicit `validate()`
//! — the calculator validates before it computes, so an out-of-domain
//! parameter set is reported as a typed error rather than propagating
//! through the arithmetic.

use crate::calculator::error::ReconstitutionError;

/// Density of water for injection at 20 °C (mg/mL)
///
/// The usual diluent for lyophilized products; used by
/// [`ProcessParameters::with_wfi_diluent`].
pub const WFI_DENSITY: f64 = 998.2;

/// Scalar inputs to the mass-balance computation
///
/// All fields are per single vial. Volumes in mL, densities in mg/mL.
///
/// # Examples
///
/// ```rust
/// use recon_rs::calculator::ProcessParameters;
///
/// // Fill 8 mL at 1030 mg/mL, reconstitute to 4 mL with water for injection
/// let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
/// assert!(params.validate().is_ok());
///
/// // Explicit diluent density (e.g. bacteriostatic water)
/// let params = ProcessParameters::new(8.0, 1030.0, 4.0, 1030.0, 995.0);
/// assert_eq!(params.diluent_density, 995.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParameters {
    /// Pre-lyophilization fill volume per vial (mL)
    pub filling_volume: f64,

    /// Density of the liquid formulation prior to freeze-drying (mg/mL)
    pub density_pre_lyo: f64,

    /// Target volume after reconstitution (mL)
    pub recon_volume: f64,

    /// Density of the fully reconstituted solution (mg/mL)
    pub density_post_recon: f64,

    /// Density of the diluent used to reconstitute (mg/mL)
    pub diluent_density: f64,
}

impl ProcessParameters {
    /// Create a parameter set with an explicit diluent density
    pub fn new(
        filling_volume: f64,
        density_pre_lyo: f64,
        recon_volume: f64,
        density_post_recon: f64,
        diluent_density: f64,
    ) -> Self {
        Self {
            filling_volume,
            density_pre_lyo,
            recon_volume,
            density_post_recon,
            diluent_density,
        }
    }

    /// Create a parameter set reconstituting with water for injection
    ///
    /// Uses [`WFI_DENSITY`] for the diluent.
    pub fn with_wfi_diluent(
        filling_volume: f64,
        density_pre_lyo: f64,
        recon_volume: f64,
        density_post_recon: f64,
    ) -> Self {
        Self::new(
            filling_volume,
            density_pre_lyo,
            recon_volume,
            density_post_recon,
            WFI_DENSITY,
        )
    }

    /// Total mass of the target reconstituted solution (mg)
    ///
    /// `recon_volume × density_post_recon`; the right-hand side of the
    /// reconstitution mass balance.
    pub fn target_reconstituted_mass(&self) -> f64 {
        self.recon_volume * self.density_post_recon
    }

    /// Validate that all parameters are physically meaningful
    ///
    /// Volumes and densities must be positive and finite. Reported as
    /// [`ReconstitutionError::InvalidVolume`] or
    /// [`ReconstitutionError::InvalidDensity`].
    pub fn validate(&self) -> Result<(), ReconstitutionError> {
        let volumes = [
            ("filling_volume", self.filling_volume),
            ("recon_volume", self.recon_volume),
        ];
        for (name, value) in volumes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ReconstitutionError::InvalidVolume { name, value });
            }
        }

        let densities = [
            ("density_pre_lyo", self.density_pre_lyo),
            ("density_post_recon", self.density_post_recon),
            ("diluent_density", self.diluent_density),
        ];
        for (name, value) in densities {
            if !(value.is_finite() && value > 0.0) {
                return Err(ReconstitutionError::InvalidDensity { name, value });
            }
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
