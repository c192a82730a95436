// crates/geoquery-core/src/model.rs

use serde::{Deserialize, Serialize};

use crate::text::NameMatch;

/// A country entry.
///
/// `code` is the ISO 3166-1 alpha-2 code, stored uppercase. `continent` and
/// `tld` ride along from the dataset for callers; the resolver never reads
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
}

/// A region (first-level subdivision) within a country.
///
/// `code` is hierarchical, `"<COUNTRY>.<REGION>"` (e.g. `"US.CA"`), stored
/// uppercase. The parent country is referenced by its alpha-2 code so region
/// values stay self-contained when returned from a repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub code: String,
    pub country_code: String,
}

/// A city. `region_code` is absent for cities attached directly to a country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub country_code: String,
    #[serde(default)]
    pub region_code: Option<String>,
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Region {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Matched places at exactly one specificity level.
///
/// A lookup can legitimately return more than one entity (the same city name
/// in two countries, a region code suffix shared across countries); all
/// matches are kept, most populous first where the repository orders them,
/// and disambiguation is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceMatch {
    Countries(Vec<Country>),
    Regions(Vec<Region>),
    Cities(Vec<City>),
}

impl PlaceMatch {
    pub fn len(&self) -> usize {
        match self {
            PlaceMatch::Countries(v) => v.len(),
            PlaceMatch::Regions(v) => v.len(),
            PlaceMatch::Cities(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if this match holds a city with the given name
    /// (case-insensitive, accent-insensitive).
    pub fn has_city_named(&self, name: &str) -> bool {
        match self {
            PlaceMatch::Cities(v) => v.iter().any(|c| c.is_named(name)),
            _ => false,
        }
    }

    /// True if this match holds a country with the given alpha-2 code.
    pub fn has_country_coded(&self, code: &str) -> bool {
        match self {
            PlaceMatch::Countries(v) => v.iter().any(|c| c.code.eq_ignore_ascii_case(code)),
            _ => false,
        }
    }
}

/// Outcome of [`resolve_place`](crate::resolve::resolve_place).
///
/// `remaining` is the head of the query left over after the matched place
/// tokens were removed; `consumed` is the number of trailing tokens the
/// match accounts for. `remaining` token count plus `consumed` always equals
/// the original token count, and `consumed` is zero exactly when `places` is
/// `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub remaining: String,
    pub consumed: usize,
    pub places: Option<PlaceMatch>,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        self.places.is_some()
    }
}
