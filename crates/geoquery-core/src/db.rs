// crates/geoquery-core/src/db.rs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{City, Country, Region};
use crate::repo::PlaceRepository;
use crate::text::NameMatch;

/// Simple aggregate statistics for a [`PlaceDb`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
}

/// In-memory place table backing [`PlaceRepository`].
///
/// Flat vectors with parent references by code; lookups are linear scans.
/// Country and region counts are small, and the city scan is a single
/// contiguous pass, which is plenty for the handful of lookups a resolution
/// issues. Built by the loader module from a JSON dataset, or assembled
/// directly for tests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceDb {
    pub countries: Vec<Country>,
    pub regions: Vec<Region>,
    pub cities: Vec<City>,
}

impl PlaceDb {
    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            regions: self.regions.len(),
            cities: self.cities.len(),
        }
    }

    /// Parent country of any place, by alpha-2 code.
    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Parent region of a city, if the city has one.
    pub fn region_of(&self, city: &City) -> Option<&Region> {
        let code = city.region_code.as_deref()?;
        self.regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }

    /// Hierarchy line for a city, root last: "Los Angeles, California,
    /// United States".
    pub fn describe_city(&self, city: &City) -> String {
        let mut out = city.name.clone();
        if let Some(region) = self.region_of(city) {
            out.push_str(", ");
            out.push_str(&region.name);
        }
        if let Some(country) = self.country_by_code(&city.country_code) {
            out.push_str(", ");
            out.push_str(&country.name);
        }
        out
    }

    /// Hierarchy line for a region: "California, United States".
    pub fn describe_region(&self, region: &Region) -> String {
        match self.country_by_code(&region.country_code) {
            Some(country) => format!("{}, {}", region.name, country.name),
            None => region.name.clone(),
        }
    }
}

fn by_population_desc<T, F: Fn(&T) -> u64>(items: &mut [T], population: F) {
    items.sort_by(|a, b| population(b).cmp(&population(a)));
}

impl PlaceRepository for PlaceDb {
    fn countries_by_code(&self, code: &str) -> Result<Vec<Country>> {
        let mut out: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| c.code.eq_ignore_ascii_case(code))
            .cloned()
            .collect();
        by_population_desc(&mut out, |c| c.population);
        Ok(out)
    }

    fn regions_by_code(&self, code: &str) -> Result<Vec<Region>> {
        Ok(self
            .regions
            .iter()
            .filter(|r| r.code.eq_ignore_ascii_case(code))
            .cloned()
            .collect())
    }

    fn regions_by_code_suffix(&self, suffix: &str) -> Result<Vec<Region>> {
        let suffix = suffix.to_ascii_uppercase();
        Ok(self
            .regions
            .iter()
            .filter(|r| r.code.to_ascii_uppercase().ends_with(&suffix))
            .cloned()
            .collect())
    }

    fn countries_by_name(&self, name: &str) -> Result<Vec<Country>> {
        let mut out: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| c.is_named(name))
            .cloned()
            .collect();
        by_population_desc(&mut out, |c| c.population);
        Ok(out)
    }

    fn regions_by_name(&self, name: &str, country: Option<&Country>) -> Result<Vec<Region>> {
        Ok(self
            .regions
            .iter()
            .filter(|r| r.is_named(name))
            .filter(|r| match country {
                Some(c) => r.country_code.eq_ignore_ascii_case(&c.code),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn cities_by_name(
        &self,
        name: &str,
        country: Option<&Country>,
        regions: Option<&[Region]>,
    ) -> Result<Vec<City>> {
        let mut out: Vec<City> = self
            .cities
            .iter()
            .filter(|city| city.is_named(name))
            .filter(|city| match country {
                Some(c) => city.country_code.eq_ignore_ascii_case(&c.code),
                None => true,
            })
            .filter(|city| match regions {
                Some(rs) => match city.region_code.as_deref() {
                    Some(rc) => rs.iter().any(|r| r.code.eq_ignore_ascii_case(rc)),
                    None => false,
                },
                None => true,
            })
            .cloned()
            .collect();
        by_population_desc(&mut out, |c| c.population);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> PlaceDb {
        PlaceDb {
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
            regions: vec![
                Region {
                    name: "California".into(),
                    code: "US.CA".into(),
                    country_code: "US".into(),
                },
                Region {
                    name: "Texas".into(),
                    code: "US.TX".into(),
                    country_code: "US".into(),
                },
            ],
            cities: vec![
                City {
                    name: "Paris".into(),
                    population: 25_000,
                    latitude: None,
                    longitude: None,
                    country_code: "US".into(),
                    region_code: Some("US.TX".into()),
                },
                City {
                    name: "Paris".into(),
                    population: 2_100_000,
                    latitude: Some(48.8566),
                    longitude: Some(2.3522),
                    country_code: "FR".into(),
                    region_code: None,
                },
            ],
        }
    }

    #[test]
    fn country_code_lookup_is_case_insensitive() {
        let db = db();
        let found = db.countries_by_code("us").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "United States");
    }

    #[test]
    fn region_suffix_matches_the_tail_of_the_code() {
        let db = db();
        let found = db.regions_by_code_suffix("ca").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "US.CA");
        assert!(db.regions_by_code_suffix("ZZ").unwrap().is_empty());
    }

    #[test]
    fn city_name_lookup_orders_by_population() {
        let db = db();
        let found = db.cities_by_name("paris", None, None).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].country_code, "FR");
        assert_eq!(found[1].country_code, "US");
    }

    #[test]
    fn city_lookup_respects_country_and_region_scopes() {
        let db = db();
        let us = db.countries_by_code("US").unwrap();
        let found = db.cities_by_name("Paris", us.first(), None).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].country_code, "US");

        let texas = db.regions_by_code("US.TX").unwrap();
        let found = db.cities_by_name("Paris", None, Some(&texas)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].region_code.as_deref(), Some("US.TX"));

        // A region scope never matches cities attached directly to a country.
        let found = db.cities_by_name("Paris", None, Some(&[])).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn describe_renders_the_hierarchy_root_last() {
        let db = db();
        let paris = db.cities_by_name("Paris", None, None).unwrap();
        assert_eq!(db.describe_city(&paris[1]), "Paris, Texas, United States");
        let regions = db.regions_by_code("US.CA").unwrap();
        assert_eq!(db.describe_region(&regions[0]), "California, United States");
    }
}
