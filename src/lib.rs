//! recon-rs: Lyophilized Drug Product Reconstitution Framework
//!
//! A library for computing the diluent volume required to reconstitute a
//! lyophilized (freeze-dried) drug product to a target volume, accounting
//! for the solids left behind by freeze-drying and for the density
//! differences between the pre-lyophilization solution, the diluent, and
//! the reconstituted solution.
//!
//! # Architecture
//!
//! recon-rs is built on two core principles:
//!
//! 1. **Separation of Formulation and Calculation**
//!    - The formulation describes what is in the vial (drug + excipients)
//!    - The calculator applies the mass balance (how much diluent to add)
//!
//! 2. **Pure, Total Computation**
//!    - One call, one immutable result — no retained state, no I/O
//!    - Out-of-domain inputs come back as typed errors, never panics
//!
//! # Quick Start
//!
//! ```rust
//! use recon_rs::formulation::{Component, Formulation};
//! use recon_rs::calculator::{ProcessParameters, ReconstitutionCalculator};
//!
//! # fn main() -> Result<(), recon_rs::calculator::ReconstitutionError> {
//! // 1. Describe the pre-lyophilization formulation (mg/mL)
//! let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
//!     .with(Component::buffer("Histidine", 1.15))
//!     .with(Component::buffer("Histidine HCl", 0.54))
//!     .with(Component::stabilizer("Sucrose", 80.0))
//!     .with(Component::surfactant("PS80", 0.5));
//!
//! // 2. Describe the process (fill 8 mL at 1030 mg/mL, reconstitute to 4 mL)
//! let params = ProcessParameters::with_wfi_diluent(8.0, 1030.0, 4.0, 1030.0);
//!
//! // 3. Run the mass balance
//! let calculator = ReconstitutionCalculator::new();
//! let result = calculator.compute(&formulation, &params)?;
//!
//! // 4. Access results
//! println!("Total solid content: {:.2} mg/mL", result.total_solid_concentration);
//! println!("Diluent to add: {:.4} mL/vial", result.diluent_volume_needed);
//! # Ok(())
//! # }
//! ```
//!
//! # Units
//!
//! All quantities follow the conventions of fill/finish batch records:
//! mass in **mg**, volume in **mL**, density and concentration in
//! **mg/mL**. Every mass and volume in a result is per single vial.
//!
//! # Modules
//!
//! - [`formulation`]: Components and formulations (what is in the vial)
//! - [`calculator`]: Mass-balance computation and volume sweeps
//! - [`output`]: Result visualization and export (optional consumers)

// Core modules
pub mod formulation;

pub mod calculator;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use recon_rs::prelude::*;
    //! ```
    pub use crate::formulation::{Component,
                                 ComponentRole,
                                 Formulation};
    pub use crate::calculator::{ProcessParameters,
                                ReconstitutionCalculator,
                                ReconstitutionError,
                                ReconstitutionResult,
                                SweepResult,
                                VolumeSweep};
}
