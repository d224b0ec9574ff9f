use crate::Molecules::molecule::Molecule;
use crate::Molecules::molecule_catalog::{CatalogError, MoleculeDatabase};

/// Oxidizer, products and the inert carrier shared by every reaction: O2, H2O, CO, CO2 and N2.
/// Built once and passed by reference into the thermodynamic calculations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSpecies {
    pub o2: Molecule,
    pub h2o: Molecule,
    pub co: Molecule,
    pub co2: Molecule,
    pub n2: Molecule,
}

impl ReferenceSpecies {
    pub fn new(o2: Molecule, h2o: Molecule, co: Molecule, co2: Molecule, n2: Molecule) -> Self {
        Self {
            o2,
            h2o,
            co,
            co2,
            n2,
        }
    }

    /// Looks every species up by formula. All five must be present in the database.
    pub fn from_database(database: &dyn MoleculeDatabase) -> Result<Self, CatalogError> {
        let find = |formula: &str| {
            database
                .lookup_by_formula(formula)
                .map(Molecule::from)
                .ok_or_else(|| CatalogError::MissingReference(formula.to_string()))
        };
        Ok(Self {
            o2: find("O2")?,
            h2o: find("H2O")?,
            co: find("CO")?,
            co2: find("CO2")?,
            n2: find("N2")?,
        })
    }
}
