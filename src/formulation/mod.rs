//! Formulation description
//!
//! This module provides the types that describe what is in the vial
//! before lyophilization: the drug substance and its excipients.
//!
//! # Core Concepts
//!
//! - **Component**: One ingredient with its pre-lyophilization concentration
//! - **Component Role**: Type-safe label for what the ingredient does
//! - **Formulation**: Ordered collection of components, drug first
//!
//! # Architecture
//!
//! Formulations are **separate from the calculator**:
//! - The formulation describes the **contents** (what is in the vial)
//! - The calculator applies the **mass balance** (how much diluent to add)
//!
//! This separation allows:
//! - Same formulation evaluated under different process parameters
//! - Same calculator applied to any formulation
//!
//! # Example
//!
//! ```rust
//! use recon_rs::formulation::{Component, Formulation};
//!
//! let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
//!     .with(Component::stabilizer("Sucrose", 80.0))
//!     .with(Component::surfactant("PS80", 0.5));
//!
//! assert_eq!(formulation.len(), 3);
//! assert!((formulation.total_solid_concentration() - 88.5).abs() < 1e-12);
//! ```
//!
//! # Ownership Model
//!
//! A `Formulation` is a plain value object. Callers that let users edit a
//! component list (add/remove/rename) own that editing state themselves and
//! pass a fresh snapshot to the calculator on each recomputation.

// module declaration
pub mod component;
pub mod formulation;

// re-export commonly used types for convenience
pub use component::{Component, ComponentRole};
pub use formulation::Formulation;
