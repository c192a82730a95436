use clap::{Parser, Subcommand};

/// CLI arguments for geoquery-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoquery",
    version,
    about = "Resolve free-form location queries against a place dataset"
)]
pub struct CliArgs {
    /// Path to the dataset, .json or .json.gz (default: places.json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of ISO2 country codes to load (e.g. US,FR,DE)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a query into places and print the unconsumed remainder
    Resolve {
        /// The query, e.g. "Some Venue, Los Angeles, CA" (quotes optional)
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show a summary of the dataset contents
    Stats,

    /// List all countries
    Countries,

    /// Look up cities by name (case-insensitive)
    Cities {
        /// Exact city name, e.g. "Los Angeles"
        #[arg(required = true)]
        name: Vec<String>,
    },
}
