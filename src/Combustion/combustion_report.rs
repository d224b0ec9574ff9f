/// Lean and rich combustion of one fuel side by side, with every derived quantity, ready to print.
use crate::Combustion::combustion_errors::CombustionError;
use crate::Combustion::combustion_thermo::{CombustionThermo, PhysicalConstants};
use crate::Combustion::reaction::{CombustionMode, Reaction};
use crate::Combustion::reference_species::ReferenceSpecies;
use crate::Molecules::molecule::Molecule;
use log::warn;
use prettytable::{Cell, Row, Table, row};
use std::io::{self, Write};

/// Derived quantities of one reaction. Values that need a missing constant are None.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionResult {
    pub reaction: Reaction,
    pub air_fuel_ratio: f64,
    /// air:fuel ratio relative to the lean reaction
    pub lambda: Option<f64>,
    pub enthalpy_change: f64,
    pub entropy_change: f64,
    pub temperature_change: Option<f64>,
    pub usable_energy: Option<f64>,
    pub specific_power: Option<f64>,
    pub fuel_economy: Option<f64>,
}

fn optional(value: Result<f64, CombustionError>, quantity: &str, reaction: &Reaction) -> Option<f64> {
    match value {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} of {} is not available: {}", quantity, reaction, e);
            None
        }
    }
}

impl ReactionResult {
    fn new(
        reaction: Reaction,
        species: &ReferenceSpecies,
        constants: PhysicalConstants,
    ) -> Result<Self, CombustionError> {
        let thermo = CombustionThermo::new(&reaction, species, constants);
        let air_fuel_ratio = thermo.air_fuel_mass_ratio()?;
        let enthalpy_change = thermo.enthalpy_change();
        let entropy_change = thermo.entropy_change();
        let temperature_change = optional(
            thermo.constant_volume_temperature_change(),
            "temperature change",
            &reaction,
        );
        let usable_energy = optional(thermo.usable_energy(), "usable energy", &reaction);
        let specific_power = optional(thermo.specific_power(), "specific power", &reaction);
        let fuel_economy = optional(thermo.fuel_economy(), "fuel economy", &reaction);
        Ok(Self {
            reaction,
            air_fuel_ratio,
            lambda: None,
            enthalpy_change,
            entropy_change,
            temperature_change,
            usable_energy,
            specific_power,
            fuel_economy,
        })
    }
}

#[derive(Debug)]
pub struct CombustionReport {
    pub fuel: Molecule,
    pub lean: ReactionResult,
    /// a fuel whose lean combustion is fine can still carry too much oxygen to burn rich (CO2)
    pub rich: Result<ReactionResult, CombustionError>,
}

impl CombustionReport {
    /// Balances both reactions with `fuel_scale` fuel molecules and evaluates them.
    /// Fails if the lean reaction fails; a failed rich reaction is kept as its error.
    pub fn new(
        fuel: &Molecule,
        species: &ReferenceSpecies,
        constants: PhysicalConstants,
        fuel_scale: u64,
    ) -> Result<Self, CombustionError> {
        let lean = Reaction::balance(fuel, CombustionMode::Lean, fuel_scale)?;
        let mut lean = ReactionResult::new(lean, species, constants)?;
        let lean_afr = lean.air_fuel_ratio;
        let lambda = |air_fuel_ratio: f64| {
            if lean_afr != 0.0 {
                Some(air_fuel_ratio / lean_afr)
            } else {
                None
            }
        };
        lean.lambda = lambda(lean.air_fuel_ratio);
        let rich = Reaction::balance(fuel, CombustionMode::Rich, fuel_scale)
            .and_then(|rich| ReactionResult::new(rich, species, constants))
            .map(|mut rich| {
                rich.lambda = lambda(rich.air_fuel_ratio);
                rich
            });
        if let Err(e) = &rich {
            warn!("rich combustion of {} is not possible: {}", fuel.chemical_formula(), e);
        }
        Ok(Self {
            fuel: fuel.clone(),
            lean,
            rich,
        })
    }

    /// lean, then rich if it could be balanced
    pub fn results(&self) -> Vec<&ReactionResult> {
        let mut results = vec![&self.lean];
        if let Ok(rich) = &self.rich {
            results.push(rich);
        }
        results
    }

    pub fn to_table(&self) -> Table {
        let fmt = |value: Option<f64>, precision: usize| match value {
            Some(value) => format!("{:.*}", precision, value),
            None => "n/a".to_string(),
        };
        let mut table = Table::new();
        table.add_row(row![
            "Mode",
            "Equation",
            "Air:fuel",
            "Lambda",
            "dH, kJ",
            "dS, J/K",
            "dT, K",
            "Usable, kJ",
            "Power, kW",
            "Economy, kJ/cm3"
        ]);
        for result in self.results() {
            table.add_row(Row::new(vec![
                Cell::new(&result.reaction.mode().to_string()),
                Cell::new(&result.reaction.to_string()),
                Cell::new(&format!("{:.2}", result.air_fuel_ratio)),
                Cell::new(&fmt(result.lambda, 2)),
                Cell::new(&format!("{:.2}", result.enthalpy_change)),
                Cell::new(&format!("{:.2}", result.entropy_change)),
                Cell::new(&fmt(result.temperature_change, 0)),
                Cell::new(&fmt(result.usable_energy, 2)),
                Cell::new(&fmt(result.specific_power, 1)),
                Cell::new(&fmt(result.fuel_economy, 4)),
            ]));
        }
        if let Err(e) = &self.rich {
            let mut cells = vec![
                Cell::new(&CombustionMode::Rich.to_string()),
                Cell::new(&e.to_string()),
            ];
            cells.extend((0..8).map(|_| Cell::new("n/a")));
            table.add_row(Row::new(cells));
        }
        table
    }

    /// equations with their air:fuel ratios, then the table of all quantities
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for result in self.results() {
            write!(
                out,
                "{}    At an air:fuel ratio of {:.2}",
                result.reaction, result.air_fuel_ratio
            )?;
            match result.lambda {
                Some(lambda) => writeln!(out, " ({:.2} lambda)", lambda)?,
                None => writeln!(out)?,
            }
        }
        if let Err(e) = &self.rich {
            writeln!(out, "No rich combustion: {}", e)?;
        }
        self.to_table().print(out)?;
        Ok(())
    }
}
