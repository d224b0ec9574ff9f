/// Module to represent a fuel or combustion product molecule: atom counts, chemical formula and molar mass
///
///
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// atoms the combustion model knows about, in the order they are written into a chemical formula
struct Atom {
    symbol: &'static str,
    atomic_mass: f64,
}

const ATOMS: [Atom; 4] = [
    Atom {
        symbol: "C",
        atomic_mass: 12.0107,
    },
    Atom {
        symbol: "H",
        atomic_mass: 1.00794,
    },
    Atom {
        symbol: "O",
        atomic_mass: 15.999,
    },
    Atom {
        symbol: "N",
        atomic_mass: 14.0067,
    },
];

// first occurrence of the symbol (any case) and the run of digits right after it
static ATOM_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ATOMS.map(|atom| {
        Regex::new(&format!("(?i){}([0-9]*)", atom.symbol)).expect("atom pattern is a valid regex")
    })
});

/// Counts C, H, O and N atoms in a chemical formula.
///
/// For every atom only its first occurrence (case-insensitive) is taken into account: a symbol that
/// is the last character or is followed by a non-digit counts as 1, otherwise the whole run of digits
/// after it is the count. Absent atoms count as 0 and any other characters are ignored, so parsing
/// never fails.
/// Returns counts in the order carbon, hydrogen, oxygen, nitrogen.
pub fn parse_formula(formula: &str) -> [u32; 4] {
    let mut counts = [0u32; 4];
    for (count, pattern) in counts.iter_mut().zip(ATOM_PATTERNS.iter()) {
        *count = match pattern.captures(formula) {
            None => 0,
            Some(caps) => {
                let digits = caps.get(1).map_or("", |m| m.as_str());
                if digits.is_empty() {
                    1
                } else {
                    digits.parse::<u32>().unwrap_or_else(|_| {
                        warn!(
                            "atom count {} in formula {} is too large, saturated to {}",
                            digits,
                            formula,
                            u32::MAX
                        );
                        u32::MAX
                    })
                }
            }
        };
    }
    counts
}

/// A chemical species: numbers of C, H, O, N atoms and its physical constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub carbon: u32,
    pub hydrogen: u32,
    pub oxygen: u32,
    pub nitrogen: u32,
    /// (g/cm³) density at standard conditions, None if unknown
    pub density: Option<f64>,
    /// (kJ/mol) enthalpy of formation
    pub enthalpy: f64,
    /// (J/(mol·K)) molar entropy
    pub entropy: f64,
    /// (J/(g·K)) specific heat
    pub specific_heat: f64,
}

impl Default for Molecule {
    fn default() -> Self {
        Self {
            carbon: 0,
            hydrogen: 0,
            oxygen: 0,
            nitrogen: 0,
            density: None,
            enthalpy: 0.0,
            entropy: 0.0,
            specific_heat: 1.0,
        }
    }
}

impl Molecule {
    /// molecule with given atom counts and default physical constants
    pub fn new(carbon: u32, hydrogen: u32, oxygen: u32, nitrogen: u32) -> Self {
        Self {
            carbon,
            hydrogen,
            oxygen,
            nitrogen,
            ..Self::default()
        }
    }

    /// molecule with atom counts taken from a chemical formula and default physical constants
    pub fn from_formula(formula: &str) -> Self {
        let mut molecule = Self::default();
        molecule.set_chemical_formula(formula);
        molecule
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_enthalpy(mut self, enthalpy: f64) -> Self {
        self.enthalpy = enthalpy;
        self
    }

    pub fn with_entropy(mut self, entropy: f64) -> Self {
        self.entropy = entropy;
        self
    }

    pub fn with_specific_heat(mut self, specific_heat: f64) -> Self {
        self.specific_heat = specific_heat;
        self
    }

    fn atom_counts(&self) -> [u32; 4] {
        [self.carbon, self.hydrogen, self.oxygen, self.nitrogen]
    }

    /// (g/mol) molar mass of the molecule
    pub fn molar_mass(&self) -> f64 {
        ATOMS
            .iter()
            .zip(self.atom_counts())
            .map(|(atom, count)| atom.atomic_mass * count as f64)
            .sum()
    }

    /// Canonical formula: C, H, O, N in this order, every present atom followed by its count
    /// (a count of 1 is written too, "C1H4" for methane), absent atoms omitted.
    pub fn chemical_formula(&self) -> String {
        let mut formula = String::new();
        for (atom, count) in ATOMS.iter().zip(self.atom_counts()) {
            if count > 0 {
                formula.push_str(atom.symbol);
                formula.push_str(&count.to_string());
            }
        }
        formula
    }

    /// Re-derives atom counts from a formula (see [`parse_formula`]). Physical constants are left untouched.
    pub fn set_chemical_formula(&mut self, formula: &str) {
        let [carbon, hydrogen, oxygen, nitrogen] = parse_formula(formula);
        self.carbon = carbon;
        self.hydrogen = hydrogen;
        self.oxygen = oxygen;
        self.nitrogen = nitrogen;
    }

    /// true if the molecule has no atoms at all
    pub fn is_empty(&self) -> bool {
        self.atom_counts().iter().all(|&count| count == 0)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let density = match self.density {
            Some(density) => density.to_string(),
            None => "unknown".to_string(),
        };
        write!(
            f,
            "{}, density: {}, enthalpy: {}, entropy: {}",
            self.chemical_formula(),
            density,
            self.enthalpy,
            self.entropy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_formula() {
        assert_eq!(parse_formula("CH4"), [1, 4, 0, 0]);
        assert_eq!(parse_formula("C8H18"), [8, 18, 0, 0]);
        assert_eq!(parse_formula("C2H6O"), [2, 6, 1, 0]);
        assert_eq!(parse_formula("CH3NO2"), [1, 3, 2, 1]);
        assert_eq!(parse_formula("CO2"), [1, 0, 2, 0]);
        // last character without digits
        assert_eq!(parse_formula("CH4O"), [1, 4, 1, 0]);
    }

    #[test]
    fn test_parse_formula_case_insensitive() {
        assert_eq!(parse_formula("ch4"), [1, 4, 0, 0]);
        assert_eq!(parse_formula("c2h6O"), [2, 6, 1, 0]);
    }

    #[test]
    fn test_parse_formula_takes_first_occurrence_only() {
        // C2H5OH: only the first H is counted
        assert_eq!(parse_formula("C2H5OH"), [2, 5, 1, 0]);
        // the C of Cl is not a second carbon, and the l is ignored
        assert_eq!(parse_formula("CCl4"), [1, 0, 0, 0]);
    }

    #[test]
    fn test_parse_formula_ignores_garbage() {
        assert_eq!(parse_formula("xyz C2 @ H6 !"), [2, 6, 0, 0]);
        assert_eq!(parse_formula(""), [0, 0, 0, 0]);
        assert_eq!(parse_formula("12345"), [0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_formula_saturates_huge_counts() {
        assert_eq!(parse_formula("C99999999999H2"), [u32::MAX, 2, 0, 0]);
    }

    #[test]
    fn test_formula_parse_generate_asymmetry() {
        let methane = Molecule::from_formula("CH4");
        assert_eq!((methane.carbon, methane.hydrogen), (1, 4));
        assert_eq!(methane.chemical_formula(), "C1H4");
        assert_ne!(methane.chemical_formula(), "CH4");
    }

    #[test]
    fn test_formula_order_is_fixed() {
        let nitromethane = Molecule::new(1, 3, 2, 1);
        assert_eq!(nitromethane.chemical_formula(), "C1H3O2N1");
        let shuffled = Molecule::from_formula("N1O2H3C1");
        assert_eq!(shuffled.chemical_formula(), "C1H3O2N1");
        assert_eq!(Molecule::default().chemical_formula(), "");
    }

    #[test]
    fn test_set_formula_keeps_constants() {
        let mut molecule = Molecule::new(1, 4, 0, 0)
            .with_density(0.000657)
            .with_enthalpy(-74.87);
        molecule.set_chemical_formula("C2H6");
        assert_eq!((molecule.carbon, molecule.hydrogen), (2, 6));
        assert_eq!(molecule.density, Some(0.000657));
        assert_eq!(molecule.enthalpy, -74.87);
    }

    #[test]
    fn test_molar_mass() {
        let water = Molecule::from_formula("H2O");
        assert_relative_eq!(water.molar_mass(), 18.01488, epsilon = 1e-9);
        let octane = Molecule::from_formula("C8H18");
        assert_relative_eq!(octane.molar_mass(), 114.22852, epsilon = 1e-9);
        let nitromethane = Molecule::from_formula("CH3NO2");
        assert_relative_eq!(nitromethane.molar_mass(), 61.03922, epsilon = 1e-9);
        assert_eq!(Molecule::default().molar_mass(), 0.0);
    }

    #[test]
    fn test_defaults() {
        let molecule = Molecule::default();
        assert!(molecule.is_empty());
        assert_eq!(molecule.specific_heat, 1.0);
        assert_eq!(molecule.density, None);
        assert!(!Molecule::new(0, 2, 0, 0).is_empty());
    }

    #[test]
    fn test_display() {
        let co2 = Molecule::from_formula("CO2")
            .with_density(0.001977)
            .with_enthalpy(-393.51)
            .with_entropy(213.79);
        assert_eq!(
            co2.to_string(),
            "C1O2, density: 0.001977, enthalpy: -393.51, entropy: 213.79"
        );
        assert_eq!(
            Molecule::new(0, 2, 0, 0).to_string(),
            "H2, density: unknown, enthalpy: 0, entropy: 0"
        );
    }
}
