// crates/geoquery-core/src/loader.rs

use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::db::PlaceDb;
use crate::error::{GeoQueryError, Result};
use crate::model::{City, Country, Region};

/// Raw city structure as it comes from the dataset JSON.
///
/// Coordinates arrive as strings in the source export; they are parsed
/// best-effort at build time.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub name: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Raw region structure from the dataset JSON. `code` is the bare
/// subdivision code (e.g. "CA"); the hierarchical form is composed with the
/// country code at build time.
#[derive(Debug, Deserialize)]
pub struct RegionRaw {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

/// Raw country structure from the dataset JSON. `cities` holds cities
/// attached directly to the country, with no region in between.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub regions: Vec<RegionRaw>,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;

fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

fn build_city(raw: CityRaw, country_code: &str, region_code: Option<&str>) -> City {
    City {
        latitude: parse_opt_f64(&raw.latitude),
        longitude: parse_opt_f64(&raw.longitude),
        name: raw.name,
        population: raw.population.unwrap_or(0),
        country_code: country_code.to_owned(),
        region_code: region_code.map(str::to_owned),
    }
}

/// Convert raw JSON data into a flat [`PlaceDb`], optionally restricted to a
/// set of alpha-2 country codes.
pub fn build_place_db(raw: CountriesRaw, filter: Option<&[&str]>) -> PlaceDb {
    let mut db = PlaceDb::default();
    for country in raw {
        if let Some(filter) = filter {
            if !filter.iter().any(|f| f.eq_ignore_ascii_case(&country.code)) {
                continue;
            }
        }
        let country_code = country.code.to_uppercase();
        for region in country.regions {
            let region_code = format!("{}.{}", country_code, region.code.to_uppercase());
            for city in region.cities {
                db.cities
                    .push(build_city(city, &country_code, Some(&region_code)));
            }
            db.regions.push(Region {
                name: region.name,
                code: region_code,
                country_code: country_code.clone(),
            });
        }
        for city in country.cities {
            db.cities.push(build_city(city, &country_code, None));
        }
        db.countries.push(Country {
            name: country.name,
            code: country_code,
            population: country.population.unwrap_or(0),
            continent: country.continent,
            tld: country.tld,
        });
    }
    db
}

/// Sibling binary-cache path for a dataset: `places.json.gz` -> `places.bin`.
fn cache_path(path: &Path) -> PathBuf {
    let stem = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = stem
        .trim_end_matches(".gz")
        .trim_end_matches(".json")
        .to_owned();
    path.with_file_name(format!("{stem}.bin"))
}

impl PlaceDb {
    /// Build a database from a reader yielding the raw JSON dataset.
    pub fn from_json_reader<R: Read>(reader: R, filter: Option<&[&str]>) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(build_place_db(raw, filter))
    }

    /// Load a dataset from disk.
    ///
    /// - With no filter, tries a sibling `.bin` bincode cache first and,
    ///   after parsing the JSON, writes that cache best-effort.
    /// - `.gz` files are decompressed transparently.
    /// - `filter` restricts loading to the given alpha-2 country codes; a
    ///   filtered load never reads or writes the cache, which always holds
    ///   the full dataset.
    pub fn load_from_path<P: AsRef<Path>>(path: P, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let cache = cache_path(path);

        if filter.is_none() {
            if let Ok(bytes) = std::fs::read(&cache) {
                if let Ok(db) = bincode::deserialize::<PlaceDb>(&bytes) {
                    return Ok(db);
                }
            }
        }

        let file = File::open(path).map_err(|_| {
            GeoQueryError::NotFound(format!("dataset not found at path: {}", path.display()))
        })?;
        let reader = BufReader::new(file);
        let db = if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_json_reader(GzDecoder::new(reader), filter)?
        } else {
            Self::from_json_reader(reader, filter)?
        };

        if filter.is_none() {
            if let Ok(bin) = bincode::serialize(&db) {
                let _ = std::fs::write(&cache, bin);
            }
        }

        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {
            "name": "United States",
            "code": "us",
            "population": 331000000,
            "continent": "NA",
            "tld": ".us",
            "regions": [
                {
                    "name": "California",
                    "code": "ca",
                    "cities": [
                        {
                            "name": "Los Angeles",
                            "population": 3900000,
                            "latitude": "34.05",
                            "longitude": "-118.24"
                        }
                    ]
                }
            ]
        },
        {
            "name": "France",
            "code": "FR",
            "population": 67000000,
            "cities": [
                { "name": "Paris", "population": 2100000 }
            ]
        }
    ]"#;

    #[test]
    fn builds_flat_tables_with_composed_region_codes() {
        let db = PlaceDb::from_json_reader(DATASET.as_bytes(), None).unwrap();
        let stats = db.stats();
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.regions, 1);
        assert_eq!(stats.cities, 2);

        assert_eq!(db.regions[0].code, "US.CA");
        let la = &db.cities[0];
        assert_eq!(la.region_code.as_deref(), Some("US.CA"));
        assert_eq!(la.country_code, "US");
        assert_eq!(la.latitude, Some(34.05));

        // Region-less city hangs off the country directly.
        let paris = &db.cities[1];
        assert_eq!(paris.region_code, None);
        assert_eq!(paris.country_code, "FR");
    }

    #[test]
    fn filter_restricts_countries_at_load_time() {
        let db = PlaceDb::from_json_reader(DATASET.as_bytes(), Some(&["fr"])).unwrap();
        let stats = db.stats();
        assert_eq!(stats.countries, 1);
        assert_eq!(stats.regions, 0);
        assert_eq!(stats.cities, 1);
        assert_eq!(db.countries[0].code, "FR");
    }

    #[test]
    fn load_from_path_reads_plain_json_and_writes_a_cache() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("places.json");
        let mut f = File::create(&json_path).unwrap();
        f.write_all(DATASET.as_bytes()).unwrap();

        let db = PlaceDb::load_from_path(&json_path, None).unwrap();
        assert_eq!(db.stats().countries, 2);

        // Second load comes from the sibling cache.
        let cache = dir.path().join("places.bin");
        assert!(cache.exists());
        let db = PlaceDb::load_from_path(&json_path, None).unwrap();
        assert_eq!(db.stats().cities, 2);
    }

    #[test]
    fn load_from_path_decompresses_gz_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let gz_path = dir.path().join("places.json.gz");
        let f = File::create(&gz_path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::default());
        enc.write_all(DATASET.as_bytes()).unwrap();
        enc.finish().unwrap();

        // Filtered load bypasses the cache entirely.
        let db = PlaceDb::load_from_path(&gz_path, Some(&["US"])).unwrap();
        assert_eq!(db.stats().countries, 1);
        assert!(!dir.path().join("places.bin").exists());
    }

    #[test]
    fn missing_dataset_is_a_not_found_error() {
        let err = PlaceDb::load_from_path("no/such/file.json", None).unwrap_err();
        assert!(matches!(err, GeoQueryError::NotFound(_)));
    }
}
