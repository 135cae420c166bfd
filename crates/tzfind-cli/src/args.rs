use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for tzfind
#[derive(Debug, Parser)]
#[command(
    name = "tzfind",
    version,
    about = "Find the timezone of a city, country or zone abbreviation"
)]
pub struct CliArgs {
    /// Path to a vocabulary JSON (or .json.gz) file instead of the bundled one
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<PathBuf>,

    /// Print debug logging (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a city by full name or prefix (e.g. `tzfind city new york`)
    City {
        /// City name words; joined with a space
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Look up a country by ISO2/ISO3 code, full name or prefix
    Country {
        /// Code or name words (e.g. US, NPL, united)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Resolve a zone abbreviation (pst) or IANA name (Asia/Kathmandu)
    Zone {
        zone: String,
    },

    /// Show a summary of the vocabulary contents
    Stats,
}
