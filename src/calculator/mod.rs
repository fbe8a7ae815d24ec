//! Reconstitution calculator
//!
//! This module provides the mass-balance computation and its supporting
//! types: process parameters, typed errors, the result snapshot, and
//! volume sweeps.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The calculator architecture separates concerns into three layers:
//!
//! 1. **Formulation** ([`crate::formulation`]) - WHAT is in the vial
//!    - Drug substance and excipients
//!    - Pre-lyophilization concentrations
//!
//! 2. **Process Parameters** ([`ProcessParameters`]) - HOW the vial is
//!    processed
//!    - Fill volume and solution density before freeze-drying
//!    - Target volume, solution density, and diluent density for
//!      reconstitution
//!
//! 3. **Calculator** ([`ReconstitutionCalculator`]) - The mass balance
//!    - Applies conservation of solid mass
//!    - Returns one immutable [`ReconstitutionResult`] per call
//!    - Independent of any presentation concern
//!
//! This separation allows:
//! - Same formulation evaluated under different process parameters
//! - Same parameters applied to candidate formulations side by side
//! - Pure computation with no retained state between calls
//!
//! # Module Organization
//!
//! - **`parameters`**: [`ProcessParameters`] and the WFI density constant
//! - **`error`**: [`ReconstitutionError`], the typed failure kinds
//! - **`result`**: [`ReconstitutionResult`] and per-component breakdown rows
//! - **`compute`**: [`ReconstitutionCalculator::compute`], the mass balance
//! - **`sweep`**: [`VolumeSweep`] grids and [`SweepResult`] series
//!
//! # Quick Start Example
//!
//! ```rust
//! use recon_rs::formulation::{Component, Formulation};
//! use recon_rs::calculator::{ProcessParameters, ReconstitutionCalculator};
//!
//! let formulation = Formulation::new(Component::drug("mAb", 10.0))
//!     .with(Component::stabilizer("Sucrose", 80.0));
//! let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
//!
//! let result = ReconstitutionCalculator::new()
//!     .compute(&formulation, &params)
//!     .expect("in-domain inputs");
//!
//! assert!(result.diluent_volume_needed > 0.0);
//! ```
//!
//! # Error Handling
//!
//! Every calculator method returns `Result<T, ReconstitutionError>`:
//!
//! ```rust
//! use recon_rs::formulation::{Component, Formulation};
//! use recon_rs::calculator::{ProcessParameters, ReconstitutionCalculator, ReconstitutionError};
//!
//! let formulation = Formulation::new(Component::drug("mAb", 10.0));
//! // Solids (10 mg/mL) denser than the whole solution (5 mg/mL)
//! let params = ProcessParameters::with_wfi_diluent(8.0, 5.0, 4.0, 1030.0);
//!
//! match ReconstitutionCalculator::new().compute(&formulation, &params) {
//!     Ok(result) => println!("add {} mL", result.diluent_volume_needed),
//!     Err(ReconstitutionError::NegativeSolventConcentration { .. }) => {
//!         eprintln!("formulation is physically inconsistent");
//!     }
//!     Err(other) => eprintln!("calculation failed: {}", other),
//! }
//! ```
//!
//! Common errors:
//! - Invalid parameters (non-positive volume or density)
//! - Physically inconsistent formulation (solids exceed solution density)
//! - Infeasible target (target mass below the solid mass alone)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod compute;
mod error;
mod parameters;
mod result;
mod sweep;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand a sweep grid off to Rayon is an execution
// concern, not a mass-balance concern, so it lives here (calculator root)
// rather than in sweep.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every sweep call. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default grid size at which [`ReconstitutionCalculator::sweep`] switches
/// to parallel evaluation.
///
/// Each grid point costs a handful of floating-point operations, so the
/// thread-pool dispatch only pays for itself on large grids. The crossover
/// is set at 8 192 points.
const DEFAULT_PARALLEL_THRESHOLD: usize = 8192;

/// Runtime-configurable parallel-evaluation threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-evaluation threshold.
///
/// Sweeps use sequential iteration when the grid contains fewer points
/// than this value, and switch to Rayon when it contains more — but only
/// when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use recon_rs::calculator::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-evaluation threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-point threshold would force
/// parallel dispatch on every single-point sweep, which is never the
/// intended behaviour.
///
/// # Example
///
/// ```rust
/// use recon_rs::calculator::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value (including
        // the original default) never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use compute::ReconstitutionCalculator;
pub use error::ReconstitutionError;
pub use parameters::{ProcessParameters, WFI_DENSITY};
pub use result::{ComponentBreakdown, ReconstitutionResult};
pub use sweep::{SweepResult, VolumeSweep};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate a result snapshot for numerical issues
///
/// Checks that no derived quantity is NaN or Inf. Cannot trip for
/// in-domain inputs; kept as a last line of defence so downstream
/// consumers (plots, exports) never see a non-finite number.
pub(crate) fn validate_result_finite(
    result: &ReconstitutionResult,
) -> Result<(), ReconstitutionError> {
    let scalars = [
        ("total solid concentration", result.total_solid_concentration),
        (
            "solvent concentration pre-lyo",
            result.solvent_concentration_pre_lyo,
        ),
        ("total solid mass", result.total_solid_mass),
        ("solvent mass pre-lyo", result.solvent_mass_pre_lyo),
        ("diluent mass", result.diluent_mass_needed),
        ("diluent volume", result.diluent_volume_needed),
        (
            "solvent concentration post-recon",
            result.solvent_concentration_post_recon,
        ),
    ];

    for (quantity, value) in scalars {
        if !value.is_finite() {
            return Err(ReconstitutionError::NonFiniteResult { quantity });
        }
    }

    for component in &result.components {
        if !component.amount_pre_lyo.is_finite()
            || !component.concentration_post_recon.is_finite()
        {
            return Err(ReconstitutionError::NonFiniteResult {
                quantity: "component breakdown",
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 8192);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        // Guard dropped — value must be back to what it was before.
        assert_eq!(parallel_threshold(), before);
    }
}
