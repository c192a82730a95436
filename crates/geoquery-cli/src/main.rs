//! geoquery-cli — Command-line interface for geoquery-core
//!
//! This binary resolves free-form location queries against a place dataset
//! from your terminal. It supports printing dataset statistics, listing
//! countries, looking up cities by name, and the main event: resolving a
//! typed query into places plus the unconsumed remainder.
//!
//! Usage examples
//! --------------
//!
//! - Resolve a query
//!   $ geoquery-cli resolve "Some Venue, Los Angeles, CA"
//!
//! - Show overall stats
//!   $ geoquery-cli stats
//!
//! - List all countries (optionally restricted at load time)
//!   $ geoquery-cli countries
//!   $ geoquery-cli --filter=US,DE countries
//!
//! - Look up cities by exact name
//!   $ geoquery-cli cities paris
//!
//! Data source
//! -----------
//!
//! The CLI loads a countries→regions→cities JSON dataset (optionally
//! gzipped) and caches a binary version next to it for fast subsequent runs.
//! Use `--input <path>` to point at the dataset and
//! `--filter <ISO2,ISO2,...>` to restrict loading to specific countries for
//! speed.

mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use geoquery_core::{resolve_place, PlaceDb, PlaceMatch, PlaceRepository};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let input_path = args.input.unwrap_or_else(|| "places.json.gz".to_string());

    // Parse filter if provided
    let iso_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    let filter_slice = iso_filter.as_deref();
    let db = PlaceDb::load_from_path(&input_path, filter_slice)?;

    match args.command {
        Commands::Resolve { query } => {
            let query = query.join(" ");
            let res = resolve_place(&db, &query)?;
            match res.places {
                None => println!("No place found."),
                Some(PlaceMatch::Countries(countries)) => {
                    for c in countries {
                        println!("{} ({})", c.name, c.code);
                    }
                }
                Some(PlaceMatch::Regions(regions)) => {
                    for r in regions {
                        println!("{} ({})", db.describe_region(&r), r.code);
                    }
                }
                Some(PlaceMatch::Cities(cities)) => {
                    for city in cities {
                        println!("{}", db.describe_city(&city));
                    }
                }
            }
            println!("Remaining query: {:?}", res.remaining);
        }

        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Countries => {
            for c in &db.countries {
                println!("{} ({})", c.name, c.code);
            }
        }

        Commands::Cities { name } => {
            let name = name.join(" ");
            let matches = db.cities_by_name(&name, None, None)?;
            if matches.is_empty() {
                println!("No cities found matching: {name}");
            } else {
                for city in matches {
                    println!("{}", db.describe_city(&city));
                }
            }
        }
    }

    Ok(())
}
