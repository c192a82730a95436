//! Basic usage example for geoquery-core
//!
//! This example demonstrates how to:
//! - Assemble an in-memory place repository
//! - Resolve free-form location queries
//! - Inspect the matched places and the leftover query

use geoquery_core::{resolve_place, City, Country, PlaceDb, PlaceMatch, Region, Result};

fn main() -> Result<()> {
    println!("=== geoquery-core Basic Usage Example ===\n");

    // A PlaceDb is usually loaded from a dataset via PlaceDb::load_from_path;
    // for a self-contained example we assemble a tiny one by hand.
    let db = PlaceDb {
        countries: vec![
            Country {
                name: "United States".into(),
                code: "US".into(),
                population: 331_000_000,
                continent: Some("NA".into()),
                tld: Some(".us".into()),
            },
            Country {
                name: "France".into(),
                code: "FR".into(),
                population: 67_000_000,
                continent: Some("EU".into()),
                tld: Some(".fr".into()),
            },
        ],
        regions: vec![Region {
            name: "California".into(),
            code: "US.CA".into(),
            country_code: "US".into(),
        }],
        cities: vec![
            City {
                name: "Los Angeles".into(),
                population: 3_900_000,
                latitude: Some(34.05),
                longitude: Some(-118.24),
                country_code: "US".into(),
                region_code: Some("US.CA".into()),
            },
            City {
                name: "Paris".into(),
                population: 2_100_000,
                latitude: Some(48.86),
                longitude: Some(2.35),
                country_code: "FR".into(),
                region_code: None,
            },
        ],
    };
    println!("Repository ready: {:?}\n", db.stats());

    let queries = [
        "Paris France",
        "Some Venue, Los Angeles, CA",
        "US",
        "nowhere in particular",
    ];

    for query in queries {
        println!("--- Query: {query:?} ---");
        let res = resolve_place(&db, query)?;
        match &res.places {
            None => println!("No place found"),
            Some(PlaceMatch::Countries(countries)) => {
                for c in countries {
                    println!("Country: {} ({})", c.name, c.code);
                }
            }
            Some(PlaceMatch::Regions(regions)) => {
                for r in regions {
                    println!("Region: {}", db.describe_region(r));
                }
            }
            Some(PlaceMatch::Cities(cities)) => {
                for city in cities {
                    println!("City: {}", db.describe_city(city));
                }
            }
        }
        println!("Remaining query: {:?}\n", res.remaining);
    }

    Ok(())
}
