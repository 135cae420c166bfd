//! tzfind — Command-line interface for tzfind-core
//!
//! Looks up the timezone of a city, a country, or a zone given by
//! abbreviation. Names may be partial or differently punctuated; a prefix
//! that matches several places prints the closest candidates instead.
//!
//! Usage examples
//! --------------
//!
//! - A city, exact or by prefix
//!   $ tzfind city kathmandu
//!   $ tzfind city los ang
//!
//! - A country by ISO code or name
//!   $ tzfind country np
//!   $ tzfind country united
//!
//! - A zone abbreviation or IANA name
//!   $ tzfind zone pst
//!   $ tzfind zone Asia/Kathmandu
//!
//! - Vocabulary counts, optionally for a custom file
//!   $ tzfind --data ./my_places.json.gz stats
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use log::debug;
use tzfind_core::{resolve_zone, LocationIndex, Resolution, Vocabulary};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let vocab = load_vocabulary(&args)?;
    let index = LocationIndex::new(vocab);

    match args.command {
        Commands::City { name } => {
            let query = name.join(" ");
            debug!("city query: {query:?}");
            print_resolution(&index.lookup_city(&query)?);
        }

        Commands::Country { name } => {
            let query = name.join(" ");
            debug!("country query: {query:?}");
            print_resolution(&index.lookup_country(&query)?);
        }

        Commands::Zone { zone } => {
            let info = resolve_zone(vocab, &zone)?;
            match info.abbreviation {
                Some(abbr) => println!("{} ({})", info.timezone, abbr.to_uppercase()),
                None => println!("{}", info.timezone),
            }
        }

        Commands::Stats => {
            let stats = vocab.stats();
            println!("Vocabulary statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Country codes: {}", stats.country_codes);
            println!("  Zone abbreviations: {}", stats.abbreviations);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // A logger may already be installed when embedded; keep that one.
    builder.try_init().ok();
}

/// The vocabulary from `--data`, or the bundled one.
///
/// Leaked to `'static` so the index can borrow it for the rest of the run.
fn load_vocabulary(args: &CliArgs) -> anyhow::Result<&'static Vocabulary> {
    match &args.data {
        Some(path) => {
            let vocab = Vocabulary::load_from_path(path)
                .with_context(|| format!("loading vocabulary from {}", path.display()))?;
            Ok(Box::leak(Box::new(vocab)))
        }
        None => bundled(),
    }
}

#[cfg(feature = "bundled")]
fn bundled() -> anyhow::Result<&'static Vocabulary> {
    Ok(Vocabulary::bundled()?)
}

#[cfg(not(feature = "bundled"))]
fn bundled() -> anyhow::Result<&'static Vocabulary> {
    anyhow::bail!("built without the bundled vocabulary; pass --data <path>")
}

fn print_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::City {
            city,
            country,
            timezone,
        } => {
            println!("City: {city}");
            println!("Country: {country}");
            println!("Timezone: {timezone}");
        }
        Resolution::Country { country, timezones } => {
            println!("Country: {country}");
            if let [only] = timezones.as_slice() {
                println!("Timezone: {only}");
            } else {
                println!("Timezones:");
                for tz in timezones {
                    println!("- {tz}");
                }
            }
        }
        Resolution::Candidates { names } => {
            println!("Did you mean:");
            for (i, name) in names.iter().enumerate() {
                println!("{}. {name}", i + 1);
            }
        }
    }
}
