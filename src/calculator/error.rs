//! Typed errors for the reconstitution mass balance
//!
//! All error conditions are local, recoverable validation failures detected
//! before or during the arithmetic — never process-fatal. Callers surface
//! them to end users in domain terms; the `Display` messages are written for
//! exactly that.

use thiserror::Error;

/// Error kinds produced by the reconstitution calculator
///
/// # Policy
///
/// Inputs are validated first (non-positive volumes and densities), then the
/// mass balance runs, then derived invariants are checked on the results
/// (`NegativeSolventConcentration`, `InfeasibleReconstitutionTarget`).
/// Retrying with the same inputs always yields the same outcome — the
/// computation is deterministic and pure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconstitutionError {
    /// A volume parameter is zero, negative, or non-finite
    #[error("invalid volume: {name} = {value} mL (must be positive and finite)")]
    InvalidVolume { name: &'static str, value: f64 },

    /// A density parameter is zero, negative, or non-finite
    #[error("invalid density: {name} = {value} mg/mL (must be positive and finite)")]
    InvalidDensity { name: &'static str, value: f64 },

    /// A component carries an empty name or an out-of-domain concentration
    #[error("invalid component \"{name}\": {reason}")]
    InvalidComponent { name: String, reason: String },

    /// The combined solids are denser than the whole pre-lyophilization
    /// solution — the formulation is physically inconsistent
    #[error(
        "total solid concentration {total_solid_concentration} mg/mL exceeds the \
         pre-lyophilization density {density_pre_lyo} mg/mL"
    )]
    NegativeSolventConcentration {
        total_solid_concentration: f64,
        density_pre_lyo: f64,
    },

    /// The target reconstituted mass is below the solid mass alone — the
    /// target volume is too small for this solid load
    #[error(
        "target reconstituted mass {target_mass} mg is below the solid mass \
         {total_solid_mass} mg (target volume too small for this solid load)"
    )]
    InfeasibleReconstitutionTarget {
        target_mass: f64,
        total_solid_mass: f64,
    },

    /// A sweep grid definition is out of domain
    #[error("invalid sweep: {reason}")]
    InvalidSweep { reason: String },

    /// A derived quantity came out NaN or infinite
    ///
    /// Cannot occur for in-domain inputs; reported instead of propagated so
    /// that downstream consumers never see a non-finite number.
    #[error("non-finite value computed for {quantity}")]
    NonFiniteResult { quantity: &'static str },
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_speak_domain_language() {
        let error = ReconstitutionError::InfeasibleReconstitutionTarget {
            target_mass: 500.0,
            total_solid_mass: 721.52,
        };

        let message = error.to_string();
        assert!(message.contains("target volume too small"));
        assert!(message.contains("721.52"));
    }

    #[test]
    fn test_errors_are_comparable() {
        let one = ReconstitutionError::InvalidDensity {
            name: "diluent_density",
            value: 0.0,
        };
        let two = ReconstitutionError::InvalidDensity {
            name: "diluent_density",
            value: 0.0,
        };

        assert_eq!(one, two);
    }
}
