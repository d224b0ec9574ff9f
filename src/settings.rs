//! # Settings Module
//!
//! ## Purpose
//! Keeps the adjustable parts of the combustion model in one JSON file: which molecule catalog to
//! use, the fuel scale of the balancer, the physical constants of air and engine, and the log level.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "catalog_path": null,
//!   "fuel_scale": 4,
//!   "air_density": 0.001225,
//!   "o2_volume_fraction": 0.209,
//!   "n2_mass_fraction": 0.79,
//!   "initial_temperature": 300.0,
//!   "air_volume_rate": 50000.0,
//!   "log_level": "Info"
//! }
//! ```
//! Missing keys take their default values. `catalog_path: null` means the catalog bundled with the crate.
//!
//! ## Usage Pattern
//! ```rust
//! use FuelCombust::settings::SettingsManager;
//!
//! let manager = SettingsManager::with_config_file("no_such_config.json");
//! let catalog = manager.open_catalog().unwrap();
//! assert_eq!(manager.get_settings().fuel_scale, 4);
//! ```
use crate::Combustion::combustion_thermo::PhysicalConstants;
use crate::Combustion::reaction::{FUEL_SCALE, check_fuel_scale};
use crate::Molecules::molecule_catalog::{CatalogError, MoleculeCatalog};
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILE: &str = "combustion_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombustionSettings {
    /// external catalog file, None for the bundled one
    pub catalog_path: Option<String>,
    pub fuel_scale: u64,
    /// (g/cm³)
    pub air_density: f64,
    pub o2_volume_fraction: f64,
    pub n2_mass_fraction: f64,
    /// (K)
    pub initial_temperature: f64,
    /// (cm³/s)
    pub air_volume_rate: f64,
    pub log_level: String,
}

impl Default for CombustionSettings {
    fn default() -> Self {
        let constants = PhysicalConstants::default();
        Self {
            catalog_path: None,
            fuel_scale: FUEL_SCALE,
            air_density: constants.air_density,
            o2_volume_fraction: constants.o2_volume_fraction,
            n2_mass_fraction: constants.n2_mass_fraction,
            initial_temperature: constants.initial_temperature,
            air_volume_rate: constants.air_volume_rate,
            log_level: "Info".to_string(),
        }
    }
}

impl CombustionSettings {
    pub fn physical_constants(&self) -> PhysicalConstants {
        PhysicalConstants {
            air_density: self.air_density,
            o2_volume_fraction: self.o2_volume_fraction,
            n2_mass_fraction: self.n2_mass_fraction,
            initial_temperature: self.initial_temperature,
            air_volume_rate: self.air_volume_rate,
        }
    }

    pub fn set_physical_constants(&mut self, constants: PhysicalConstants) {
        self.air_density = constants.air_density;
        self.o2_volume_fraction = constants.o2_volume_fraction;
        self.n2_mass_fraction = constants.n2_mass_fraction;
        self.initial_temperature = constants.initial_temperature;
        self.air_volume_rate = constants.air_volume_rate;
    }

    /// Rejects a fuel scale the balancer cannot use and a log level simplelog does not know.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        check_fuel_scale(self.fuel_scale)?;
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))?;
        Ok(())
    }

    /// log level, Info if the configured name is not a level
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using Info", self.log_level);
            LevelFilter::Info
        })
    }
}

/// Loads, updates and saves [`CombustionSettings`] in a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: CombustionSettings,
    config_file: String,
}

impl SettingsManager {
    /// settings from combustion_config.json in the current directory
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Settings from a custom file. A missing file gives defaults silently, an unreadable or
    /// invalid one gives defaults with a warning.
    pub fn with_config_file(config_file: &str) -> Self {
        Self::load(config_file).unwrap_or_else(|e| {
            warn!(
                "Failed to load settings from '{}': {}. Using defaults",
                config_file, e
            );
            Self::defaults(config_file)
        })
    }

    /// Settings from a custom file, defaults if it does not exist. Unreadable, malformed or
    /// invalid settings are returned as the error.
    pub fn load(config_file: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            settings: Self::load_config(config_file)?,
            config_file: config_file.to_string(),
        })
    }

    /// default settings that will be saved to `config_file`
    pub fn defaults(config_file: &str) -> Self {
        Self {
            settings: CombustionSettings::default(),
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<CombustionSettings, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: CombustionSettings = serde_json::from_str(&content)?;
            settings.validate()?;
            info!("Settings loaded from '{}'", config_file);
            Ok(settings)
        } else {
            Ok(CombustionSettings::default())
        }
    }

    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn get_settings(&self) -> &CombustionSettings {
        &self.settings
    }

    /// Switches to another catalog file. The file must exist.
    pub fn set_catalog_path(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.settings.catalog_path = Some(path.to_string());
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    /// positive multiples of 4 only
    pub fn set_fuel_scale(&mut self, fuel_scale: u64) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.fuel_scale = check_fuel_scale(fuel_scale)?;
        self.save_config()?;
        Ok(())
    }

    pub fn set_physical_constants(
        &mut self,
        constants: PhysicalConstants,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.set_physical_constants(constants);
        self.save_config()?;
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.settings = CombustionSettings::default();
        self.save_config()?;
        Ok(())
    }

    /// the configured catalog, or the bundled one
    pub fn open_catalog(&self) -> Result<MoleculeCatalog, CatalogError> {
        match &self.settings.catalog_path {
            Some(path) => MoleculeCatalog::from_file(path),
            None => MoleculeCatalog::bundled(),
        }
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Molecules::molecule_catalog::MoleculeDatabase;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = CombustionSettings::default();
        assert_eq!(settings.fuel_scale, 4);
        assert_eq!(settings.catalog_path, None);
        assert_eq!(settings.physical_constants(), PhysicalConstants::default());
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager = SettingsManager::with_config_file("definitely/not/here.json");
        assert_eq!(manager.get_settings(), &CombustionSettings::default());
        assert_eq!(manager.config_file(), "definitely/not/here.json");
    }

    #[test]
    fn test_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "fuel_scale": 8, "initial_temperature": 350.0, "log_level": "debug" }"#)
            .unwrap();
        let manager = SettingsManager::with_config_file(file.path().to_str().unwrap());
        let settings = manager.get_settings();
        assert_eq!(settings.fuel_scale, 8);
        assert_eq!(settings.initial_temperature, 350.0);
        assert_eq!(settings.air_density, 0.001225);
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_config_gives_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let manager = SettingsManager::with_config_file(file.path().to_str().unwrap());
        assert_eq!(manager.get_settings(), &CombustionSettings::default());
    }

    #[test]
    fn test_unknown_log_level() {
        let settings = CombustionSettings {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let mut manager = SettingsManager::with_config_file(&path);
        manager.set_fuel_scale(12).unwrap();
        let constants = PhysicalConstants {
            initial_temperature: 320.0,
            ..PhysicalConstants::default()
        };
        manager.set_physical_constants(constants).unwrap();

        let reloaded = SettingsManager::with_config_file(&path);
        assert_eq!(reloaded.get_settings().fuel_scale, 12);
        assert_eq!(reloaded.get_settings().physical_constants(), constants);

        manager.reset_to_defaults().unwrap();
        let reloaded = SettingsManager::with_config_file(&path);
        assert_eq!(reloaded.get_settings(), &CombustionSettings::default());
    }

    #[test]
    fn test_unusable_fuel_scale_rejected() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = SettingsManager::with_config_file(file.path().to_str().unwrap());
        for scale in [0, 1, 2, 3, 6, 1 << 63] {
            assert!(manager.set_fuel_scale(scale).is_err(), "scale {}", scale);
        }
        assert_eq!(manager.get_settings().fuel_scale, 4);
        manager.set_fuel_scale(8).unwrap();
        assert_eq!(manager.get_settings().fuel_scale, 8);
    }

    #[test]
    fn test_config_file_with_unusable_fuel_scale() {
        for scale in [0, 2, 3] {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, r#"{{ "fuel_scale": {}, "initial_temperature": 350.0 }}"#, scale).unwrap();
            let path = file.path().to_str().unwrap();
            assert!(SettingsManager::load(path).is_err(), "scale {}", scale);
            let manager = SettingsManager::with_config_file(path);
            assert_eq!(manager.get_settings(), &CombustionSettings::default());
        }
    }

    #[test]
    fn test_load_reports_errors() {
        let missing = SettingsManager::load("definitely/not/here.json").unwrap();
        assert_eq!(missing.get_settings(), &CombustionSettings::default());

        let mut not_json = NamedTempFile::new().unwrap();
        not_json.write_all(b"{ not json").unwrap();
        assert!(SettingsManager::load(not_json.path().to_str().unwrap()).is_err());

        let mut bad_level = NamedTempFile::new().unwrap();
        bad_level.write_all(br#"{ "log_level": "chatty" }"#).unwrap();
        let error = SettingsManager::load(bad_level.path().to_str().unwrap()).unwrap_err();
        assert!(error.to_string().contains("chatty"));

        let defaults = SettingsManager::defaults("somewhere.json");
        assert_eq!(defaults.config_file(), "somewhere.json");
        assert_eq!(defaults.get_settings(), &CombustionSettings::default());
    }

    #[test]
    fn test_catalog_path() {
        let config = NamedTempFile::new().unwrap();
        let mut catalog_file = NamedTempFile::new().unwrap();
        catalog_file
            .write_all(br#"{ "oxygen": { "formula": "O2", "density": 0.001429 } }"#)
            .unwrap();
        let mut manager = SettingsManager::with_config_file(config.path().to_str().unwrap());
        assert_eq!(manager.open_catalog().unwrap().len(), 22);

        assert!(manager.set_catalog_path("no/such/catalog.json").is_err());
        manager
            .set_catalog_path(catalog_file.path().to_str().unwrap())
            .unwrap();
        let catalog = manager.open_catalog().unwrap();
        assert_eq!(catalog.list_known_names(), vec!["oxygen"]);
    }
}
