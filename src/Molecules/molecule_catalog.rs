//! # Molecule Catalog Module
//!
//! ## Purpose
//! Resolves molecules by human-readable name or by chemical formula against a JSON document of
//! known molecules and supplies the physical constants that cannot be derived from atom counts.
//!
//! ## Catalog Format
//! ```json
//! {
//!   "methane": { "formula": "CH4", "density": 0.000657, "enthalpy": -74.87, "entropy": 186.25, "specific_heat": 2.22 },
//!   "octane":  { "formula": "C8H18", "density": 0.703 }
//! }
//! ```
//! Only `formula` is mandatory. Document order is kept, so [`MoleculeDatabase::list_known_names`]
//! lists molecules the way they are written in the file and formula lookup returns the first match.
//!
//! ## Resolution
//! Lookup by name returns a [`Resolution`]: an unknown name is not an error, the caller decides
//! whether to stop or to continue with a degraded (atomless) molecule.
use crate::Molecules::molecule::Molecule;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../data/known_molecules.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record '{name}' is invalid: {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("Reference species {0} is not in the catalog")]
    MissingReference(String),
}

/// One catalog entry. Any physical constant may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub formula: String,
    /// (g/cm³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// (kJ/mol) enthalpy of formation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enthalpy: Option<f64>,
    /// (J/(mol·K)) molar entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entropy: Option<f64>,
    /// (J/(g·K))
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_heat: Option<f64>,
}

impl From<&MoleculeRecord> for Molecule {
    fn from(record: &MoleculeRecord) -> Self {
        let defaults = Molecule::default();
        let mut molecule = Molecule {
            density: record.density,
            enthalpy: record.enthalpy.unwrap_or(defaults.enthalpy),
            entropy: record.entropy.unwrap_or(defaults.entropy),
            specific_heat: record.specific_heat.unwrap_or(defaults.specific_heat),
            ..defaults
        };
        molecule.set_chemical_formula(&record.formula);
        molecule
    }
}

/// Outcome of a lookup by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(Molecule),
    Unknown(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_molecule(self) -> Option<Molecule> {
        match self {
            Resolution::Resolved(molecule) => Some(molecule),
            Resolution::Unknown(_) => None,
        }
    }

    /// The resolved molecule, or a molecule with no atoms and default constants for an unknown name.
    pub fn or_degraded(self) -> Molecule {
        self.into_molecule().unwrap_or_default()
    }
}

/// Source of known molecules.
pub trait MoleculeDatabase {
    fn lookup_by_name(&self, name: &str) -> Option<&MoleculeRecord>;
    /// case-insensitive comparison with the record formulas, first match wins
    fn lookup_by_formula(&self, formula: &str) -> Option<&MoleculeRecord>;
    fn list_known_names(&self) -> Vec<&str>;

    fn resolve_name(&self, name: &str) -> Resolution {
        match self.lookup_by_name(name) {
            Some(record) => Resolution::Resolved(Molecule::from(record)),
            None => {
                warn!(
                    "Molecule '{}' is not known by name. Add it to the catalog if you wish to use it by name.",
                    name
                );
                Resolution::Unknown(name.to_string())
            }
        }
    }

    /// Atom counts always come from the given formula; physical constants are copied from the
    /// catalog when a record with this formula exists, otherwise they keep their defaults.
    fn resolve_formula(&self, formula: &str) -> Molecule {
        let formula = formula.to_uppercase();
        match self.lookup_by_formula(&formula) {
            Some(record) => Molecule::from(record),
            None => {
                info!("formula {} is not in the catalog, default constants used", formula);
                Molecule::from_formula(&formula)
            }
        }
    }

    /// Name first, formula if the name gives no atoms.
    fn resolve(&self, input: &str) -> Molecule {
        match self.resolve_name(input) {
            Resolution::Resolved(molecule) if !molecule.is_empty() => molecule,
            _ => self.resolve_formula(input),
        }
    }
}

/// JSON-backed catalog of known molecules
#[derive(Debug, Clone, Default)]
pub struct MoleculeCatalog {
    records: Vec<(String, MoleculeRecord)>,
}

impl MoleculeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// catalog shipped with the crate (data/known_molecules.json)
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG)?;
        info!("Loaded bundled catalog with {} molecules", catalog.len());
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded catalog '{}' with {} molecules",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: Map<String, Value> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (name, value) in document {
            let record: MoleculeRecord =
                serde_json::from_value(value).map_err(|e| CatalogError::InvalidRecord {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            if record.formula.trim().is_empty() {
                warn!("Record '{}' has an empty formula", name);
            }
            catalog.insert(&name, record);
        }
        Ok(catalog)
    }

    /// adds a record or replaces the record with the same name
    pub fn insert(&mut self, name: &str, record: MoleculeRecord) {
        match self.records.iter_mut().find(|(known, _)| known == name) {
            Some((_, existing)) => *existing = record,
            None => self.records.push((name.to_string(), record)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MoleculeDatabase for MoleculeCatalog {
    fn lookup_by_name(&self, name: &str) -> Option<&MoleculeRecord> {
        self.records
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, record)| record)
    }

    fn lookup_by_formula(&self, formula: &str) -> Option<&MoleculeRecord> {
        let formula = formula.to_uppercase();
        self.records
            .iter()
            .find(|(_, record)| record.formula.to_uppercase() == formula)
            .map(|(_, record)| record)
    }

    fn list_known_names(&self) -> Vec<&str> {
        self.records.iter().map(|(name, _)| name.as_str()).collect()
    }
}
