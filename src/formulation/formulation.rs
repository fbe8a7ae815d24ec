//! Formulation: the ordered component list for one drug product
//!
//! A formulation is the pre-lyophilization recipe of a single vial. By
//! convention the drug substance comes first, followed by excipients in the
//! order they appear in the batch record. Insertion order is preserved for
//! display; the arithmetic does not depend on it.

use nalgebra::DVector;

use crate::formulation::component::Component;

/// Ordered collection of formulation components
///
/// # Invariant
///
/// A meaningful calculation needs at least the drug component, but the
/// collection itself tolerates zero components — the calculator treats the
/// empty formulation as a degenerate valid case (zero solids).
///
/// # Example
/// ```
/// use recon_rs::formulation::{Component, Formulation};
///
/// let formulation = Formulation::new(Component::drug("SARxxxx", 8.0))
///     .with(Component::buffer("Histidine", 1.15))
///     .with(Component::stabilizer("Sucrose", 80.0));
///
/// let names: Vec<&str> = formulation.components().iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["SARxxxx", "Histidine", "Sucrose"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Formulation {
    /// Components in display order (drug first by convention)
    components: Vec<Component>,
}

impl Formulation {
    /// Create a formulation starting from its drug component
    pub fn new(drug: Component) -> Self {
        Self {
            components: vec![drug],
        }
    }

    /// Create a formulation with no components
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append a component, consuming and returning the formulation
    ///
    /// Allows chained construction; see the module example.
    pub fn with(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Append a component in place
    pub fn add(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Components in display order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look a component up by name
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the formulation holds no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of all pre-lyophilization concentrations (mg/mL)
    ///
    /// This is the total solid content of the liquid formulation: everything
    /// that stays in the cake when the solvent is removed.
    pub fn total_solid_concentration(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.concentration_pre_lyo())
            .sum()
    }

    /// Pre-lyophilization concentrations as a vector (mg/mL)
    ///
    /// Ordered like [`components`](Self::components); convenient for
    /// numeric consumers that work on whole series.
    pub fn concentrations_pre_lyo(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.components.len(),
            self.components.iter().map(|c| c.concentration_pre_lyo()),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_reference_formulation() -> Formulation {
        Formulation::new(Component::drug("SARxxxx", 8.0))
            .with(Component::buffer("Histidine", 1.15))
            .with(Component::buffer("Histidine HCl", 0.54))
            .with(Component::stabilizer("Sucrose", 80.0))
            .with(Component::surfactant("PS80", 0.5))
    }

    #[test]
    fn test_empty_formulation() {
        let formulation = Formulation::empty();

        assert!(formulation.is_empty());
        assert_eq!(formulation.len(), 0);
        assert_eq!(formulation.total_solid_concentration(), 0.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let formulation = create_reference_formulation();

        let names: Vec<&str> = formulation.components().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["SARxxxx", "Histidine", "Histidine HCl", "Sucrose", "PS80"]
        );
    }

    #[test]
    fn test_total_solid_concentration() {
        let formulation = create_reference_formulation();

        // 8 + 1.15 + 0.54 + 80 + 0.5 = 90.19 mg/mL
        assert!((formulation.total_solid_concentration() - 90.19).abs() < 1e-12);
    }

    #[test]
    fn test_add_in_place() {
        let mut formulation = Formulation::new(Component::drug("mAb", 10.0));
        formulation.add(Component::excipient("NaCl", 2.0));

        assert_eq!(formulation.len(), 2);
        assert!((formulation.total_solid_concentration() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_get_by_name() {
        let formulation = create_reference_formulation();

        assert!(formulation.get("Sucrose").is_some());
        assert_eq!(
            formulation.get("Sucrose").unwrap().concentration_pre_lyo(),
            80.0
        );
        assert!(formulation.get("Mannitol").is_none());
    }

    #[test]
    fn test_concentration_vector_matches_components() {
        let formulation = create_reference_formulation();
        let concentrations = formulation.concentrations_pre_lyo();

        assert_eq!(concentrations.len(), formulation.len());
        assert_eq!(concentrations[0], 8.0);
        assert_eq!(concentrations[3], 80.0);
        assert!((concentrations.sum() - formulation.total_solid_concentration()).abs() < 1e-12);
    }
}
