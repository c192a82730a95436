// crates/geoquery-core/src/repo.rs

use crate::error::Result;
use crate::model::{City, Country, Region};

/// Read-only lookup interface the resolver drives.
///
/// Any storage engine can sit behind this trait: a relational database, a
/// search index, or the bundled in-memory [`PlaceDb`](crate::db::PlaceDb).
/// The resolver issues at most a handful of strictly sequential lookups per
/// query, each depending on the previous outcome, so implementations need no
/// batching.
///
/// Contract notes:
/// - Name lookups are case-insensitive exact matches on the full name.
/// - "Most populous first" orderings are part of the contract where noted;
///   the resolver and its callers rely on them for ranking.
/// - An empty result is an ordinary outcome. `Err` is reserved for real
///   failures (connectivity, malformed data), which the resolver propagates
///   to its caller rather than treating as "no match".
pub trait PlaceRepository {
    /// Countries whose alpha-2 code equals `code`, most populous first.
    fn countries_by_code(&self, code: &str) -> Result<Vec<Country>>;

    /// Regions whose hierarchical code equals `code` exactly (e.g. `"US.CA"`).
    fn regions_by_code(&self, code: &str) -> Result<Vec<Region>>;

    /// Regions whose hierarchical code ends with `suffix` (e.g. `"CA"`
    /// matches `"US.CA"`).
    fn regions_by_code_suffix(&self, suffix: &str) -> Result<Vec<Region>>;

    /// Countries matching `name`, most populous first.
    fn countries_by_name(&self, name: &str) -> Result<Vec<Country>>;

    /// Regions matching `name`, optionally restricted to one country.
    fn regions_by_name(&self, name: &str, country: Option<&Country>) -> Result<Vec<Region>>;

    /// Cities matching `name`, most populous first, optionally restricted to
    /// one country or to a set of regions.
    fn cities_by_name(
        &self,
        name: &str,
        country: Option<&Country>,
        regions: Option<&[Region]>,
    ) -> Result<Vec<City>>;
}
