//! Volume sweeps: dilution curves across a range of target volumes
//!
//! A single `compute` call answers "how much diluent for this target
//! volume?". During process development the question is usually plural:
//! how does the required diluent change as the target reconstitution
//! volume moves? A sweep evaluates the same formulation and process across
//! a linearly spaced grid of target volumes and returns the parallel
//! series, ready for plotting or export.
//!
//! # Example
//!
//! ```rust,ignore
//! use recon_rs::calculator::{ReconstitutionCalculator, VolumeSweep};
//!
//! let sweep = VolumeSweep::new(2.0, 10.0, 200);
//! let series = calculator.sweep(&formulation, &params, &sweep)?;
//!
//! for (volume, diluent) in series.recon_volumes.iter().zip(&series.diluent_volumes) {
//!     println!("target {volume:.2} mL -> diluent {diluent:.4} mL");
//! }
//! ```
//!
//! # Parallel evaluation
//!
//! With the `parallel` feature enabled, grids at or above the runtime
//! threshold (see [`parallel_threshold`](crate::calculator::parallel_threshold))
//! are evaluated with Rayon. Results are identical either way; only the
//! wall-clock time changes.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::calculator::compute::validate_formulation;
use crate::calculator::error::ReconstitutionError;
use crate::calculator::parameters::ProcessParameters;
use crate::calculator::ReconstitutionCalculator;
#[cfg(feature = "parallel")]
use crate::calculator::parallel_threshold;
use crate::formulation::Formulation;

// =================================================================================================
// Sweep Definition
// =================================================================================================

/// Linearly spaced grid of target reconstitution volumes (mL)
///
/// # Example
///
/// ```rust
/// use recon_rs::calculator::VolumeSweep;
///
/// let sweep = VolumeSweep::new(2.0, 10.0, 5);
/// assert_eq!(sweep.volumes(), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSweep {
    /// First target volume (mL)
    pub start: f64,

    /// Last target volume, inclusive (mL)
    pub end: f64,

    /// Number of grid points
    pub points: usize,
}

impl VolumeSweep {
    /// Create a sweep definition
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    /// Validate that the grid is physically meaningful
    pub fn validate(&self) -> Result<(), ReconstitutionError> {
        if !(self.start.is_finite() && self.start > 0.0) {
            return Err(ReconstitutionError::InvalidSweep {
                reason: format!("start volume {} mL must be positive and finite", self.start),
            });
        }
        if !(self.end.is_finite() && self.end > self.start) {
            return Err(ReconstitutionError::InvalidSweep {
                reason: format!(
                    "end volume {} mL must be finite and greater than start {} mL",
                    self.end, self.start
                ),
            });
        }
        if self.points < 2 {
            return Err(ReconstitutionError::InvalidSweep {
                reason: format!("need at least 2 grid points, got {}", self.points),
            });
        }
        Ok(())
    }

    /// Materialize the grid
    ///
    /// Each point is computed directly from its index rather than by
    /// repeated addition, so rounding does not accumulate along the grid;
    /// the final point is pinned to `end` exactly.
    pub fn volumes(&self) -> Vec<f64> {
        let step = (self.end - self.start) / (self.points as f64 - 1.0);
        (0..self.points)
            .map(|i| {
                if i + 1 == self.points {
                    self.end
                } else {
                    self.start + step * i as f64
                }
            })
            .collect()
    }
}

// =================================================================================================
// Sweep Result
// =================================================================================================

/// Parallel series produced by a volume sweep
///
/// All vectors share the grid's length and ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Target reconstitution volumes (mL), the sweep grid
    pub recon_volumes: Vec<f64>,

    /// Diluent mass to add at each grid point (mg)
    pub diluent_masses: Vec<f64>,

    /// Diluent volume to add at each grid point (mL)
    pub diluent_volumes: Vec<f64>,

    /// Total solid concentration after reconstitution at each grid point
    /// (mg/mL)
    pub total_solid_concentrations_post_recon: Vec<f64>,

    /// Diagnostic key/value pairs
    metadata: HashMap<String, String>,
}

impl SweepResult {
    /// Number of grid points
    pub fn len(&self) -> usize {
        self.recon_volumes.len()
    }

    /// True when the sweep holds no points (never produced by `sweep`)
    pub fn is_empty(&self) -> bool {
        self.recon_volumes.is_empty()
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
// Sweep Evaluation
// =================================================================================================

impl ReconstitutionCalculator {
    /// Evaluate the mass balance across a grid of target volumes
    ///
    /// The formulation-side quantities (total solid concentration and mass,
    /// solvent check) do not depend on the target volume and are computed
    /// once; each grid point then costs a handful of arithmetic operations.
    ///
    /// # Errors
    ///
    /// Everything [`compute`](Self::compute) reports, plus `InvalidSweep`
    /// for a malformed grid. A grid point whose target mass falls below the
    /// solid mass reports `InfeasibleReconstitutionTarget` for the whole
    /// sweep — partial series are never returned.
    pub fn sweep(
        &self,
        formulation: &Formulation,
        params: &ProcessParameters,
        sweep: &VolumeSweep,
    ) -> Result<SweepResult, ReconstitutionError> {
        // ====== Step 1: Validation ======

        params.validate()?;
        sweep.validate()?;
        validate_formulation(formulation)?;

        // ====== Step 2: Volume-Independent Quantities ======

        let total_solid_concentration = formulation.total_solid_concentration();
        if params.density_pre_lyo - total_solid_concentration < 0.0 {
            return Err(ReconstitutionError::NegativeSolventConcentration {
                total_solid_concentration,
                density_pre_lyo: params.density_pre_lyo,
            });
        }
        let total_solid_mass = total_solid_concentration * params.filling_volume;

        // ====== Step 3: Grid Evaluation ======

        let volumes = sweep.volumes();

        let evaluate = |volume: &f64| -> Result<(f64, f64, f64), ReconstitutionError> {
            let target_mass = volume * params.density_post_recon;
            let diluent_mass = target_mass - total_solid_mass;
            if diluent_mass < 0.0 {
                return Err(ReconstitutionError::InfeasibleReconstitutionTarget {
                    target_mass,
                    total_solid_mass,
                });
            }
            Ok((
                diluent_mass,
                diluent_mass / params.diluent_density,
                total_solid_mass / volume,
            ))
        };

        let evaluations = evaluate_grid(&volumes, evaluate)?;

        // ====== Step 4: Build Result ======

        let mut diluent_masses = Vec::with_capacity(volumes.len());
        let mut diluent_volumes = Vec::with_capacity(volumes.len());
        let mut solid_concentrations = Vec::with_capacity(volumes.len());
        for (mass, volume, concentration) in evaluations {
            diluent_masses.push(mass);
            diluent_volumes.push(volume);
            solid_concentrations.push(concentration);
        }

        let mut result = SweepResult {
            recon_volumes: volumes,
            diluent_masses,
            diluent_volumes,
            total_solid_concentrations_post_recon: solid_concentrations,
            metadata: HashMap::new(),
        };

        result.add_metadata("calculator", self.name());
        result.add_metadata("grid points", &sweep.points.to_string());
        result.add_metadata("start volume (mL)", &sweep.start.to_string());
        result.add_metadata("end volume (mL)", &sweep.end.to_string());

        Ok(result)
    }
}

/// Evaluate the per-point closure over the whole grid
///
/// Dispatches to Rayon when the `parallel` feature is enabled and the grid
/// reaches the runtime threshold; sequential iteration otherwise.
#[cfg(feature = "parallel")]
fn evaluate_grid<F>(
    volumes: &[f64],
    evaluate: F,
) -> Result<Vec<(f64, f64, f64)>, ReconstitutionError>
where
    F: Fn(&f64) -> Result<(f64, f64, f64), ReconstitutionError> + Sync + Send,
{
    if volumes.len() >= parallel_threshold() {
        volumes.par_iter().map(evaluate).collect()
    } else {
        volumes.iter().map(evaluate).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_grid<F>(
    volumes: &[f64],
    evaluate: F,
) -> Result<Vec<(f64, f64, f64)>, ReconstitutionError>
where
    F: Fn(&f64) -> Result<(f64, f64, f64), ReconstitutionError>,
{
    volumes.iter().map(evaluate).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
