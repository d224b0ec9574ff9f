/// error type of balancing and thermodynamic calculations
pub mod combustion_errors;
/// report of lean and rich combustion of one fuel, printed as a table
pub mod combustion_report;
/// thermodynamics of a balanced combustion reaction
/// # Examples
/// ```
/// use FuelCombust::Combustion::combustion_thermo::{CombustionThermo, PhysicalConstants};
/// use FuelCombust::Combustion::reaction::Reaction;
/// use FuelCombust::Combustion::reference_species::ReferenceSpecies;
/// use FuelCombust::Molecules::molecule_catalog::{MoleculeCatalog, MoleculeDatabase};
/// let catalog = MoleculeCatalog::bundled().unwrap();
/// let species = ReferenceSpecies::from_database(&catalog).unwrap();
/// let octane = catalog.resolve("octane");
/// let lean = Reaction::lean_combustion(&octane).unwrap();
/// let thermo = CombustionThermo::new(&lean, &species, PhysicalConstants::default());
/// let afr = thermo.air_fuel_mass_ratio().unwrap();
/// assert!(afr > 13.0 && afr < 16.0);
/// // exothermic
/// assert!(thermo.enthalpy_change() > 0.0);
/// println!("fuel economy {} kJ/cm3", thermo.fuel_economy().unwrap());
/// ```
pub mod combustion_thermo;
/// rich and lean combustion equations of a fuel
/// # Examples
/// ```
/// use FuelCombust::Combustion::reaction::Reaction;
/// use FuelCombust::Molecules::molecule::Molecule;
/// let methane = Molecule::from_formula("CH4");
/// let lean = Reaction::lean_combustion(&methane).unwrap();
/// assert_eq!(lean.to_string(), "1C1H4 + 2O2 -> 2H2O + 1CO2");
/// let rich = Reaction::rich_combustion(&methane).unwrap();
/// assert_eq!(rich.to_string(), "2C1H4 + 3O2 -> 4H2O + 2CO");
/// ```
pub mod reaction;
/// O2, H2O, CO, CO2 and N2 used by every reaction
pub mod reference_species;
