/// Balanced combustion equations of a C/H/O/N fuel with oxygen: rich (carbon burns to CO) and
/// lean (carbon burns to CO2) variants, coefficients reduced to lowest terms.
use crate::Combustion::combustion_errors::CombustionError;
use crate::Molecules::molecule::Molecule;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel coefficient before reduction. Multiple of 4 so that halving hydrogen and oxygen stays exact.
pub const FUEL_SCALE: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombustionMode {
    /// fuel-limited: all the oxygen is consumed, carbon forms CO
    Rich,
    /// oxygen-limited: all the carbon is fully oxidized to CO2
    Lean,
}

impl fmt::Display for CombustionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CombustionMode::Rich => write!(f, "rich"),
            CombustionMode::Lean => write!(f, "lean"),
        }
    }
}

/// fuel + O2 -> H2O + CO + CO2, read-only once balanced
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    fuel: Molecule,
    fuel_in: u64,
    oxygen_in: u64,
    water_out: u64,
    carbon_monoxide_out: u64,
    carbon_dioxide_out: u64,
    mode: CombustionMode,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Divides all coefficients by the greatest common divisor of the positive ones until it is 1.
/// Zero coefficients stay zero; all-zero input is returned unchanged.
pub fn reduce_to_lowest_terms(mut coefficients: [u64; 5]) -> [u64; 5] {
    loop {
        let divisor = coefficients
            .iter()
            .filter(|&&c| c > 0)
            .fold(0, |acc, &c| gcd(acc, c));
        if divisor <= 1 {
            return coefficients;
        }
        for c in coefficients.iter_mut() {
            *c /= divisor;
        }
    }
}

/// A usable fuel scale is a positive multiple of 4: every division of the balancer is then exact.
pub fn check_fuel_scale(fuel_in: u64) -> Result<u64, CombustionError> {
    if fuel_in == 0 || fuel_in % 4 != 0 || i64::try_from(fuel_in).is_err() {
        Err(CombustionError::InvalidFuelScale(fuel_in))
    } else {
        Ok(fuel_in)
    }
}

impl Reaction {
    /// A rich reaction, burning as much fuel as possible with the available oxygen
    pub fn rich_combustion(fuel: &Molecule) -> Result<Self, CombustionError> {
        Self::balance(fuel, CombustionMode::Rich, FUEL_SCALE)
    }

    /// A lean reaction, reacting as much oxygen as possible with the fuel
    pub fn lean_combustion(fuel: &Molecule) -> Result<Self, CombustionError> {
        Self::balance(fuel, CombustionMode::Lean, FUEL_SCALE)
    }

    /// Balances the equation with `fuel_in` molecules of fuel and reduces it to lowest terms.
    /// `fuel_in` must pass [`check_fuel_scale`] and must not overflow the atom counts.
    /// Fuels carrying more oxygen than their combustion needs are rejected.
    pub fn balance(
        fuel: &Molecule,
        mode: CombustionMode,
        fuel_in: u64,
    ) -> Result<Self, CombustionError> {
        let scale = check_fuel_scale(fuel_in)? as i64;
        let overflow = || CombustionError::InvalidFuelScale(fuel_in);
        let atoms = |count: u32| (count as i64).checked_mul(scale).ok_or_else(overflow);
        let water_out = atoms(fuel.hydrogen)? / 2;
        let carbon_out = atoms(fuel.carbon)?;
        let oxygen_atoms_in_fuel = atoms(fuel.oxygen)?;
        let (oxygen_atoms_out, carbon_monoxide_out, carbon_dioxide_out) = match mode {
            CombustionMode::Rich => (carbon_out.checked_add(water_out), carbon_out, 0),
            CombustionMode::Lean => (
                carbon_out
                    .checked_mul(2)
                    .and_then(|oxygen| oxygen.checked_add(water_out)),
                0,
                carbon_out,
            ),
        };
        // O2 molecules = (oxygen atoms in products - oxygen atoms in fuel) / 2
        let oxygen_in = (oxygen_atoms_out.ok_or_else(overflow)? - oxygen_atoms_in_fuel) / 2;
        if oxygen_in < 0 {
            return Err(CombustionError::InvalidStoichiometry {
                formula: fuel.chemical_formula(),
                oxygen_in,
            });
        }
        let mut reaction = Self {
            fuel: fuel.clone(),
            fuel_in,
            oxygen_in: oxygen_in as u64,
            water_out: water_out as u64,
            carbon_monoxide_out: carbon_monoxide_out as u64,
            carbon_dioxide_out: carbon_dioxide_out as u64,
            mode,
        };
        debug!("{} combustion before reduction: {}", mode, reaction);
        reaction.reduce();
        debug!("{} combustion reduced: {}", mode, reaction);
        Ok(reaction)
    }

    pub fn fuel(&self) -> &Molecule {
        &self.fuel
    }

    pub fn fuel_in(&self) -> u64 {
        self.fuel_in
    }

    pub fn oxygen_in(&self) -> u64 {
        self.oxygen_in
    }

    pub fn water_out(&self) -> u64 {
        self.water_out
    }

    pub fn carbon_monoxide_out(&self) -> u64 {
        self.carbon_monoxide_out
    }

    pub fn carbon_dioxide_out(&self) -> u64 {
        self.carbon_dioxide_out
    }

    pub fn mode(&self) -> CombustionMode {
        self.mode
    }

    /// fuel_in, oxygen_in, water_out, carbon_monoxide_out, carbon_dioxide_out
    pub fn coefficients(&self) -> [u64; 5] {
        [
            self.fuel_in,
            self.oxygen_in,
            self.water_out,
            self.carbon_monoxide_out,
            self.carbon_dioxide_out,
        ]
    }

    /// same equation with another O2 coefficient, for sweeping the air supply in tests
    #[cfg(test)]
    pub(crate) fn with_oxygen_in(&self, oxygen_in: u64) -> Self {
        Self {
            oxygen_in,
            ..self.clone()
        }
    }

    fn reduce(&mut self) {
        let [fuel_in, oxygen_in, water_out, carbon_monoxide_out, carbon_dioxide_out] =
            reduce_to_lowest_terms(self.coefficients());
        self.fuel_in = fuel_in;
        self.oxygen_in = oxygen_in;
        self.water_out = water_out;
        self.carbon_monoxide_out = carbon_monoxide_out;
        self.carbon_dioxide_out = carbon_dioxide_out;
    }

    /// true if the equation has no common divisor left
    pub fn is_reduced(&self) -> bool {
        reduce_to_lowest_terms(self.coefficients()) == self.coefficients()
    }

    /// Hydrogen and carbon atoms are the same on both sides of the equation.
    pub fn is_balanced(&self) -> bool {
        let fuel_in = self.fuel_in as u128;
        let hydrogen_in = self.fuel.hydrogen as u128 * fuel_in;
        let carbon_in = self.fuel.carbon as u128 * fuel_in;
        hydrogen_in == 2 * self.water_out as u128
            && carbon_in == self.carbon_monoxide_out as u128 + self.carbon_dioxide_out as u128
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{} + {}O2 -> {}H2O",
            self.fuel_in,
            self.fuel.chemical_formula(),
            self.oxygen_in,
            self.water_out
        )?;
        if self.carbon_monoxide_out > 0 {
            write!(f, " + {}CO", self.carbon_monoxide_out)?;
        }
        if self.carbon_dioxide_out > 0 {
            write!(f, " + {}CO2", self.carbon_dioxide_out)?;
        }
        Ok(())
    }
}
