//! Spectral class lookups

use crate::cli::SpectralArgs;
use exocat_core::measure::StarTeff;
use exocat_core::{Quantity, SpClassTeffTable, SpectralClass};

pub fn run(args: &SpectralArgs) -> anyhow::Result<()> {
    let table = SpClassTeffTable::standard();
    let header = format!("Teff ({})", StarTeff::UNIT);
    println!("{:<12} {:<6} {:>16}", "Type", "Class", header);
    for sp_type in &args.classes {
        let class = SpectralClass::parse(sp_type);
        let teff = class.and_then(|c| table.get(&c));
        match (class, teff) {
            (Some(class), Some(teff)) => {
                println!("{:<12} {:<6} {:>16}", sp_type, class.key(), teff.to_string())
            }
            (Some(class), None) => println!("{:<12} {:<6} {:>16}", sp_type, class.key(), "no entry"),
            (None, _) => println!("{:<12} {:<6} {:>16}", sp_type, "-", "unparseable"),
        }
    }
    Ok(())
}
