/// chemical species made of C, H, O and N atoms: atom counts, chemical formula parsing and generation,
/// molar mass and the physical constants needed for combustion calculations
/// # Examples
/// ```
/// use FuelCombust::Molecules::molecule::Molecule;
/// let methane = Molecule::from_formula("CH4");
/// assert_eq!(methane.carbon, 1);
/// assert_eq!(methane.hydrogen, 4);
/// // generated formula always writes the count, even when it is 1
/// assert_eq!(methane.chemical_formula(), "C1H4");
/// assert!((methane.molar_mass() - 16.04246).abs() < 1e-6);
/// ```
pub mod molecule;
/// catalog of known molecules (name -> formula and physical constants), lookup by name or formula
/// # Examples
/// ```
/// use FuelCombust::Molecules::molecule_catalog::{MoleculeCatalog, MoleculeDatabase, Resolution};
/// let catalog = MoleculeCatalog::bundled().unwrap();
/// let octane = catalog.resolve_name("octane");
/// assert!(octane.is_resolved());
/// let octane = octane.into_molecule().unwrap();
/// assert_eq!(octane.chemical_formula(), "C8H18");
/// assert_eq!(catalog.resolve_name("kryptonite"), Resolution::Unknown("kryptonite".to_string()));
/// ```
pub mod molecule_catalog;
