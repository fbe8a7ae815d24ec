//! Formulation components and their roles
//!
//! This module defines the smallest unit of a formulation:
//! - `Component`: one ingredient with its pre-lyophilization concentration
//! - `ComponentRole`: type-safe identifier for what the ingredient does

use std::fmt;

// =================================================================================================
// Component Roles (Type-safe Identifiers)
// =================================================================================================

/// Known component roles (type-safe enum)
///
/// Roles label breakdown rows for display and export; the mass-balance
/// arithmetic treats every solid the same regardless of role.
///
/// # Enum type safety
///
/// If you need a role other than those available in this enumeration, use
/// `Custom` in order to maintain type safety.
///
/// # Example
/// ```
/// use recon_rs::formulation::ComponentRole;
///
/// let lyoprotectant = ComponentRole::Custom("Lyoprotectant");
/// assert_eq!(lyoprotectant.to_string(), "Lyoprotectant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentRole {
    /// Active pharmaceutical ingredient
    Drug,

    /// pH buffering agent (e.g. histidine)
    Buffer,

    /// Cake stabilizer (e.g. sucrose, trehalose)
    Stabilizer,

    /// Surfactant (e.g. polysorbate 80)
    Surfactant,

    /// Excipient without a more specific classification
    Excipient,

    /// Custom role (for use extension)
    Custom(&'static str),
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRole::Drug => write!(f, "Drug"),
            ComponentRole::Buffer => write!(f, "Buffer"),
            ComponentRole::Stabilizer => write!(f, "Stabilizer"),
            ComponentRole::Surfactant => write!(f, "Surfactant"),
            ComponentRole::Excipient => write!(f, "Excipient"),
            ComponentRole::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Component
// =================================================================================================

/// One formulation ingredient
///
/// A component is identified by a non-empty name and carries its
/// concentration in the liquid formulation prior to lyophilization.
/// Whether the name and concentration are actually valid is checked by the
/// calculator before any arithmetic; constructing a component never fails.
///
/// # Example
/// ```
/// use recon_rs::formulation::{Component, ComponentRole};
///
/// let sucrose = Component::stabilizer("Sucrose", 80.0);
/// assert_eq!(sucrose.name(), "Sucrose");
/// assert_eq!(sucrose.role(), ComponentRole::Stabilizer);
/// assert_eq!(sucrose.concentration_pre_lyo(), 80.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Identifying label (drug substance or excipient name)
    name: String,

    /// Role of the ingredient in the formulation
    role: ComponentRole,

    /// Concentration prior to lyophilization (mg/mL)
    concentration_pre_lyo: f64,
}

impl Component {
    /// Create a component with an explicit role
    pub fn with_role(
        name: impl Into<String>,
        role: ComponentRole,
        concentration_pre_lyo: f64,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            concentration_pre_lyo,
        }
    }

    /// Create the drug substance component
    pub fn drug(name: impl Into<String>, concentration_pre_lyo: f64) -> Self {
        Self::with_role(name, ComponentRole::Drug, concentration_pre_lyo)
    }

    /// Create a buffering agent component
    pub fn buffer(name: impl Into<String>, concentration_pre_lyo: f64) -> Self {
        Self::with_role(name, ComponentRole::Buffer, concentration_pre_lyo)
    }

    /// Create a stabilizer component
    pub fn stabilizer(name: impl Into<String>, concentration_pre_lyo: f64) -> Self {
        Self::with_role(name, ComponentRole::Stabilizer, concentration_pre_lyo)
    }

    /// Create a surfactant component
    pub fn surfactant(name: impl Into<String>, concentration_pre_lyo: f64) -> Self {
        Self::with_role(name, ComponentRole::Surfactant, concentration_pre_lyo)
    }

    /// Create a generic excipient component
    pub fn excipient(name: impl Into<String>, concentration_pre_lyo: f64) -> Self {
        Self::with_role(name, ComponentRole::Excipient, concentration_pre_lyo)
    }

    /// Identifying label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role of the ingredient
    pub fn role(&self) -> ComponentRole {
        self.role
    }

    /// Concentration prior to lyophilization (mg/mL)
    pub fn concentration_pre_lyo(&self) -> f64 {
        self.concentration_pre_lyo
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_component_with_role() {
        let component = Component::with_role("Trehalose", ComponentRole::Stabilizer, 40.0);

        assert_eq!(component.name(), "Trehalose");
        assert_eq!(component.role(), ComponentRole::Stabilizer);
        assert_eq!(component.concentration_pre_lyo(), 40.0);
    }

    #[test]
    fn test_role_constructors() {
        assert_eq!(Component::drug("mAb", 8.0).role(), ComponentRole::Drug);
        assert_eq!(Component::buffer("Histidine", 1.15).role(), ComponentRole::Buffer);
        assert_eq!(Component::stabilizer("Sucrose", 80.0).role(), ComponentRole::Stabilizer);
        assert_eq!(Component::surfactant("PS80", 0.5).role(), ComponentRole::Surfactant);
        assert_eq!(Component::excipient("NaCl", 2.0).role(), ComponentRole::Excipient);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ComponentRole::Drug.to_string(), "Drug");
        assert_eq!(ComponentRole::Surfactant.to_string(), "Surfactant");
        assert_eq!(ComponentRole::Custom("Bulking Agent").to_string(), "Bulking Agent");
    }

    #[test]
    fn test_component_equality() {
        let one = Component::stabilizer("Sucrose", 80.0);
        let two = Component::stabilizer("Sucrose", 80.0);
        let other = Component::stabilizer("Sucrose", 60.0);

        assert_eq!(one, two);
        assert_ne!(one, other);
    }
}
