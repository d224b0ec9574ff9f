use FuelCombust::cli::cli_main::run_interactive_menu;
use FuelCombust::settings::{DEFAULT_CONFIG_FILE, SettingsManager};
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    // the logger needs the configured level, so a load failure is reported once it runs
    let loaded = SettingsManager::load(DEFAULT_CONFIG_FILE);
    let level = match &loaded {
        Ok(manager) => manager.get_settings().level_filter(),
        Err(_) => LevelFilter::Info,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    let manager = loaded.unwrap_or_else(|e| {
        warn!(
            "Failed to load settings from '{}': {}. Using defaults",
            DEFAULT_CONFIG_FILE, e
        );
        SettingsManager::defaults(DEFAULT_CONFIG_FILE)
    });
    if let Err(e) = run_interactive_menu(&manager) {
        eprintln!("\x1b[31m{}\x1b[0m", e);
        std::process::exit(1);
    }
}
