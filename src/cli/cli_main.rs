use crate::Combustion::combustion_report::CombustionReport;
use crate::Combustion::reference_species::ReferenceSpecies;
use crate::Molecules::molecule_catalog::MoleculeDatabase;
use crate::settings::{CombustionSettings, SettingsManager};
use log::{error, info};
use std::io::{self, BufRead, Write};

/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - hints

Cyan (\x1b[36m) - prompt

Red (\x1b[31m) - errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/

/// Shell over stdin/stdout with the catalog and constants of the given settings
pub fn run_interactive_menu(manager: &SettingsManager) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = manager.open_catalog()?;
    let species = ReferenceSpecies::from_database(&catalog)?;
    show_welcome();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(
        stdin.lock(),
        &mut stdout,
        &catalog,
        &species,
        manager.get_settings(),
    )?;
    Ok(())
}

fn show_welcome() {
    println!(
        "\x1b[34m\n Combustion of hydrocarbon and oxygenate fuels:\n
    rich and lean equations, air:fuel ratio, energy, power and economy \n \x1b[0m"
    );
    println!("\x1b[33mType a chemical name or formula, L for a list of known chemicals, Q to quit\x1b[0m");
}

/// Reads names or formulas line by line until quit or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    database: &dyn MoleculeDatabase,
    species: &ReferenceSpecies,
    settings: &CombustionSettings,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(
            out,
            "\x1b[36mWhat is the name of this chemical? (respond L for a list of known chemicals)\x1b[0m"
        )?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if !handle_line(&line, out, database, species, settings)? {
            break;
        }
    }
    Ok(())
}

/// false when the shell should stop
fn handle_line<W: Write>(
    line: &str,
    out: &mut W,
    database: &dyn MoleculeDatabase,
    species: &ReferenceSpecies,
    settings: &CombustionSettings,
) -> io::Result<bool> {
    let response = line.trim().to_lowercase();
    match response.as_str() {
        "" => {}
        "list" | "l" | "ls" => {
            for name in database.list_known_names() {
                writeln!(out, "{}", name)?;
            }
        }
        "quit" | "exit" | "q" | "0" => {
            writeln!(out, "Goodbye!")?;
            return Ok(false);
        }
        _ => {
            let molecule = database.resolve(&response);
            info!("resolved '{}' to {}", response, molecule);
            match CombustionReport::new(
                &molecule,
                species,
                settings.physical_constants(),
                settings.fuel_scale,
            ) {
                Ok(report) => report.write_to(out)?,
                Err(e) => {
                    error!("combustion of '{}' failed: {}", response, e);
                    writeln!(out, "\x1b[31m{}\x1b[0m", e)?;
                }
            }
        }
    }
    Ok(true)
}
