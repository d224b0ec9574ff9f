//! # Combustion Thermodynamics Module
//!
//! ## Purpose
//! Quantities derived from a balanced [`Reaction`]: air:fuel mass ratio, enthalpy and entropy change,
//! temperature rise, usable energy, specific power and fuel economy. Every value is a pure function
//! of the reaction, the [`ReferenceSpecies`] and the [`PhysicalConstants`].
//!
//! ## Units
//! | Quantity | Unit |
//! |----------|------|
//! | masses | g per reaction as written |
//! | volumes | cm³ per reaction as written |
//! | enthalpy change, usable energy | kJ per reaction as written |
//! | entropies | J/K per reaction as written |
//! | temperature change | K |
//! | specific power | kW for a 1 L engine at 6000 RPM |
//! | fuel economy | kJ/cm³ of fuel |
//!
//! ## Accuracy
//! The temperature rise and usable energy are rough estimates: constant heat capacities of the
//! products and of the nitrogen carried in with the air, no dissociation, one fixed initial
//! temperature. The sign convention of the T·ΔS term is not settled physically; it is kept as is.
use crate::Combustion::combustion_errors::CombustionError;
use crate::Combustion::reaction::Reaction;
use crate::Combustion::reference_species::ReferenceSpecies;
use crate::Molecules::molecule::Molecule;
use serde::{Deserialize, Serialize};

/// Fixed physical and engine constants of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// (g/cm³)
    pub air_density: f64,
    /// O2 share of air by volume
    pub o2_volume_fraction: f64,
    /// inert N2 share of the reacted air mass
    pub n2_mass_fraction: f64,
    /// (K)
    pub initial_temperature: f64,
    /// (cm³/s) air drawn by a 1 L four-stroke engine at 6000 RPM
    pub air_volume_rate: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            air_density: 0.001225,
            o2_volume_fraction: 0.209,
            n2_mass_fraction: 0.79,
            initial_temperature: 300.0,
            air_volume_rate: 50000.0,
        }
    }
}

/// all derived values of one reaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermoSummary {
    pub air_fuel_ratio: f64,
    pub enthalpy_change: f64,
    pub entropy_change: f64,
    pub temperature_change: f64,
    pub usable_energy: f64,
    pub specific_power: f64,
    pub fuel_economy: f64,
}

fn density_of(molecule: &Molecule) -> Result<f64, CombustionError> {
    match molecule.density {
        None => Err(CombustionError::MissingProperty {
            formula: molecule.chemical_formula(),
            property: "density",
        }),
        Some(density) => nonzero(density, "density"),
    }
}

fn nonzero(value: f64, quantity: &'static str) -> Result<f64, CombustionError> {
    if value == 0.0 {
        Err(CombustionError::ZeroDivisor { quantity })
    } else {
        Ok(value)
    }
}

pub struct CombustionThermo<'a> {
    reaction: &'a Reaction,
    species: &'a ReferenceSpecies,
    constants: PhysicalConstants,
}

impl<'a> CombustionThermo<'a> {
    pub fn new(
        reaction: &'a Reaction,
        species: &'a ReferenceSpecies,
        constants: PhysicalConstants,
    ) -> Self {
        Self {
            reaction,
            species,
            constants,
        }
    }

    pub fn reaction(&self) -> &Reaction {
        self.reaction
    }

    /// O2 share of air by mass
    pub fn mass_ratio_of_o2_in_air(&self) -> Result<f64, CombustionError> {
        let air_density = nonzero(self.constants.air_density, "air density")?;
        Ok(self.constants.o2_volume_fraction * density_of(&self.species.o2)? / air_density)
    }

    /// (g)
    pub fn mass_of_air_reacted(&self) -> Result<f64, CombustionError> {
        let mass_ratio = nonzero(self.mass_ratio_of_o2_in_air()?, "O2 mass fraction of air")?;
        Ok(self.reaction.oxygen_in() as f64 * self.species.o2.molar_mass() / mass_ratio)
    }

    /// (g)
    pub fn mass_of_fuel_reacted(&self) -> f64 {
        self.reaction.fuel_in() as f64 * self.reaction.fuel().molar_mass()
    }

    /// The mass ratio of air to fuel for this reaction
    pub fn air_fuel_mass_ratio(&self) -> Result<f64, CombustionError> {
        let fuel_mass = nonzero(self.mass_of_fuel_reacted(), "fuel mass")?;
        Ok(self.mass_of_air_reacted()? / fuel_mass)
    }

    /// (kJ) reactants minus products, positive for an exothermic reaction
    pub fn enthalpy_change(&self) -> f64 {
        let r = self.reaction;
        let s = self.species;
        let reactants = r.fuel_in() as f64 * r.fuel().enthalpy + r.oxygen_in() as f64 * s.o2.enthalpy;
        let products = r.water_out() as f64 * s.h2o.enthalpy
            + r.carbon_dioxide_out() as f64 * s.co2.enthalpy
            + r.carbon_monoxide_out() as f64 * s.co.enthalpy;
        reactants - products
    }

    /// (J/K) entropy of the reactants
    pub fn entropy_start(&self) -> f64 {
        let r = self.reaction;
        r.fuel_in() as f64 * r.fuel().entropy + r.oxygen_in() as f64 * self.species.o2.entropy
    }

    /// (J/K) entropy of the products
    pub fn entropy_end(&self) -> f64 {
        let r = self.reaction;
        let s = self.species;
        r.water_out() as f64 * s.h2o.entropy
            + r.carbon_dioxide_out() as f64 * s.co2.entropy
            + r.carbon_monoxide_out() as f64 * s.co.entropy
    }

    /// (J/K) products minus reactants
    pub fn entropy_change(&self) -> f64 {
        self.entropy_end() - self.entropy_start()
    }

    /// (J/K) heat capacity of everything leaving the reaction: products and the N2 of the air
    pub fn product_heat_capacity(&self) -> Result<f64, CombustionError> {
        let r = self.reaction;
        let s = self.species;
        let heat_capacity = |count: u64, molecule: &Molecule| {
            count as f64 * molecule.molar_mass() * molecule.specific_heat
        };
        let nitrogen_mass = self.constants.n2_mass_fraction * self.mass_of_air_reacted()?;
        Ok(heat_capacity(r.carbon_dioxide_out(), &s.co2)
            + heat_capacity(r.carbon_monoxide_out(), &s.co)
            + heat_capacity(r.water_out(), &s.h2o)
            + nitrogen_mass * s.n2.specific_heat)
    }

    /// (K) approximate temperature rise of the products at constant volume:
    /// (1000·ΔH - T0·ΔS) / C
    pub fn constant_volume_temperature_change(&self) -> Result<f64, CombustionError> {
        let heat_capacity = nonzero(self.product_heat_capacity()?, "product heat capacity")?;
        Ok((self.enthalpy_change() * 1000.0
            - self.constants.initial_temperature * self.entropy_change())
            / heat_capacity)
    }

    /// (kJ) ΔH - ΔT·ΔS
    pub fn usable_energy(&self) -> Result<f64, CombustionError> {
        let heat_energy = self.constant_volume_temperature_change()? * self.entropy_change() / 1000.0;
        Ok(self.enthalpy_change() - heat_energy)
    }

    /// (cm³) volume of air that carries the O2 of the reaction
    pub fn volume_of_air_consumed(&self) -> Result<f64, CombustionError> {
        let o2_volume = self.reaction.oxygen_in() as f64 * self.species.o2.molar_mass()
            / density_of(&self.species.o2)?;
        Ok(o2_volume / nonzero(self.constants.o2_volume_fraction, "O2 volume fraction")?)
    }

    /// (kW) power of a 1 L engine at 6000 RPM burning this reaction
    pub fn specific_power(&self) -> Result<f64, CombustionError> {
        let air_volume = nonzero(self.volume_of_air_consumed()?, "air volume")?;
        Ok(self.usable_energy()? * self.constants.air_volume_rate / air_volume)
    }

    /// (cm³)
    pub fn volume_of_fuel_consumed(&self) -> Result<f64, CombustionError> {
        Ok(self.mass_of_fuel_reacted() / density_of(self.reaction.fuel())?)
    }

    /// (kJ/cm³) usable energy per volume of fuel
    pub fn fuel_economy(&self) -> Result<f64, CombustionError> {
        let fuel_volume = nonzero(self.volume_of_fuel_consumed()?, "fuel volume")?;
        Ok(self.usable_energy()? / fuel_volume)
    }

    pub fn summary(&self) -> Result<ThermoSummary, CombustionError> {
        Ok(ThermoSummary {
            air_fuel_ratio: self.air_fuel_mass_ratio()?,
            enthalpy_change: self.enthalpy_change(),
            entropy_change: self.entropy_change(),
            temperature_change: self.constant_volume_temperature_change()?,
            usable_energy: self.usable_energy()?,
            specific_power: self.specific_power()?,
            fuel_economy: self.fuel_economy()?,
        })
    }
}
