use crate::Molecules::molecule_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombustionError {
    #[error("{formula} has no {property} value")]
    MissingProperty {
        formula: String,
        property: &'static str,
    },
    #[error("{formula} carries more oxygen than it can burn: O2 coefficient would be {oxygen_in}")]
    InvalidStoichiometry { formula: String, oxygen_in: i64 },
    #[error("Fuel scale must be a positive multiple of 4 small enough for the atom counts, got {0}")]
    InvalidFuelScale(u64),
    #[error("{quantity} is zero, cannot divide by it")]
    ZeroDivisor { quantity: &'static str },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
