// crates/geoquery-core/src/resolve.rs

use crate::error::Result;
use crate::model::{City, Country, PlaceMatch, Region, Resolution};
use crate::query::QueryTokens;
use crate::repo::PlaceRepository;
use crate::scan::{scan_city, scan_country, scan_region};

/// Resolve a free-form location query into places and a leftover query head.
///
/// The trailing tokens of `query` are interpreted as a place name — a bare
/// ISO-style code ("US", "CA US"), a name ("Paris France"), or a mix
/// ("Los Angeles, CA") — and everything before them is returned untouched in
/// [`Resolution::remaining`] for downstream matching (venue names, streets).
///
/// Two branches:
/// - a trailing 2-letter alphabetic token takes the code-suffix path
///   ([`resolve_coded`]),
/// - anything else is treated as free-form names with region↔city
///   backtracking ([`resolve_free_form`]).
///
/// Result precedence is City > Region > Country > no match. Repository
/// failures propagate; they are never folded into a "no match" result.
///
/// # Examples
///
/// ```no_run
/// use geoquery_core::{resolve_place, PlaceDb};
///
/// fn main() -> geoquery_core::Result<()> {
///     let db = PlaceDb::load_from_path("data/places.json.gz", None)?;
///     let res = resolve_place(&db, "Walt Disney Concert Hall, Los Angeles, CA")?;
///     assert_eq!(res.remaining, "Walt Disney Concert Hall");
///     Ok(())
/// }
/// ```
pub fn resolve_place<R: PlaceRepository + ?Sized>(repo: &R, query: &str) -> Result<Resolution> {
    let tokens = QueryTokens::parse(query);
    if tokens.is_empty() {
        return Ok(Resolution {
            remaining: String::new(),
            consumed: 0,
            places: None,
        });
    }

    let last = &tokens.tokens()[tokens.len() - 1];
    let (consumed, places) = if is_code_token(last) {
        resolve_coded(repo, &tokens)?
    } else {
        resolve_free_form(repo, &tokens)?
    };

    Ok(Resolution {
        remaining: tokens.remaining(consumed),
        consumed,
        places,
    })
}

/// True for tokens that look like an ISO-style code: exactly two alphabetic
/// characters.
fn is_code_token(token: &str) -> bool {
    token.chars().count() == 2 && token.chars().all(|c| c.is_alphabetic())
}

/// Code-suffix path: the query ends in what looks like a region or country
/// code.
///
/// "CA US" pairs up as region code "US.CA"; a lone trailing code is tried as
/// a region-code suffix first and as a country code second. Whichever level
/// matches, the window in front of the code is scanned for a city name
/// scoped to it; a city hit wins over the bare region/country.
fn resolve_coded<R: PlaceRepository + ?Sized>(
    repo: &R,
    tokens: &QueryTokens,
) -> Result<(usize, Option<PlaceMatch>)> {
    let all = tokens.tokens();
    let last = &all[all.len() - 1];

    let (regions, mut consumed) = if all.len() >= 2 && is_code_token(&all[all.len() - 2]) {
        // "<region> <country>", e.g. "CA US" -> "US.CA"
        let code = format!(
            "{}.{}",
            last.to_uppercase(),
            all[all.len() - 2].to_uppercase()
        );
        (repo.regions_by_code(&code)?, 2)
    } else {
        (repo.regions_by_code_suffix(&last.to_uppercase())?, 1)
    };

    if !regions.is_empty() {
        if let Some((count, cities)) = city_for_scope(repo, tokens, consumed, None, Some(&regions))?
        {
            return Ok((consumed + count, Some(PlaceMatch::Cities(cities))));
        }
        return Ok((consumed, Some(PlaceMatch::Regions(regions))));
    }

    // A lone code that names no region: try it as a country code.
    if consumed == 1 {
        let countries = repo.countries_by_code(&last.to_uppercase())?;
        if !countries.is_empty() {
            if let Some((count, cities)) =
                city_for_scope(repo, tokens, consumed, countries.first(), None)?
            {
                return Ok((consumed + count, Some(PlaceMatch::Cities(cities))));
            }
            return Ok((consumed, Some(PlaceMatch::Countries(countries))));
        }
    }

    // Code tokens that match nothing are not consumed.
    Ok((0, None))
}

/// Run the city scanner on the window in front of `consumed` trailing tokens
/// and look the consumed span up within the given scope. `Some` only when
/// both the scan and the lookup produce something; the returned count is the
/// scanner's consumption, to be added to the caller's total.
fn city_for_scope<R: PlaceRepository + ?Sized>(
    repo: &R,
    tokens: &QueryTokens,
    consumed: usize,
    country: Option<&Country>,
    regions: Option<&[Region]>,
) -> Result<Option<(usize, Vec<City>)>> {
    let count = scan_city(tokens.window(consumed));
    if count == 0 {
        return Ok(None);
    }
    let cities = repo.cities_by_name(&tokens.span(consumed, count), country, regions)?;
    if cities.is_empty() {
        return Ok(None);
    }
    Ok(Some((count, cities)))
}

/// Free-form path: no trailing code, so country, region and city names are
/// peeled off the tail in that order, each level committing its tokens only
/// when its lookup succeeds.
///
/// If a region committed but no city matched inside it, the region's tokens
/// are released and the city scan is retried on the widened window (a region
/// name with no city under it is usually a city query in disguise, e.g.
/// "North Dakota" typed as a city). A retry hit yields the city; a retry
/// miss discards the region for good and the country, if any, is the answer.
fn resolve_free_form<R: PlaceRepository + ?Sized>(
    repo: &R,
    tokens: &QueryTokens,
) -> Result<(usize, Option<PlaceMatch>)> {
    let mut consumed = 0;

    let mut countries: Vec<Country> = Vec::new();
    let country_count = scan_country(tokens.window(consumed));
    if country_count > 0 {
        let found = repo.countries_by_name(&tokens.span(consumed, country_count))?;
        if !found.is_empty() {
            countries = found;
            consumed += country_count;
        }
    }

    let mut regions: Vec<Region> = Vec::new();
    let mut region_consumed = 0;
    let region_count = scan_region(tokens.window(consumed));
    if region_count > 0 {
        let found = repo.regions_by_name(&tokens.span(consumed, region_count), countries.first())?;
        if !found.is_empty() {
            regions = found;
            region_consumed = region_count;
            consumed += region_count;
        }
    }

    let city_scope_regions = if regions.is_empty() {
        None
    } else {
        Some(regions.as_slice())
    };
    let city_scope_country = if regions.is_empty() {
        countries.first()
    } else {
        None
    };
    if let Some((count, cities)) =
        city_for_scope(repo, tokens, consumed, city_scope_country, city_scope_regions)?
    {
        return Ok((consumed + count, Some(PlaceMatch::Cities(cities))));
    }

    if !regions.is_empty() {
        // Backtrack: release the region's tokens and retry the city scan on
        // the widened window, scoped to the country if one committed.
        consumed -= region_consumed;
        if let Some((count, cities)) =
            city_for_scope(repo, tokens, consumed, countries.first(), None)?
        {
            return Ok((consumed + count, Some(PlaceMatch::Cities(cities))));
        }
        // Retry missed too: the region match is discarded and the country
        // (or nothing) is the final result.
    }

    if !countries.is_empty() {
        return Ok((consumed, Some(PlaceMatch::Countries(countries))));
    }
    Ok((0, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoQueryError;

    #[test]
    fn code_tokens_are_two_alphabetic_chars() {
        assert!(is_code_token("US"));
        assert!(is_code_token("ca"));
        assert!(!is_code_token("USA"));
        assert!(!is_code_token("U1"));
        assert!(!is_code_token("U"));
    }

    /// A repository whose every lookup fails.
    struct BrokenRepo;

    impl PlaceRepository for BrokenRepo {
        fn countries_by_code(&self, _code: &str) -> Result<Vec<Country>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
        fn regions_by_code(&self, _code: &str) -> Result<Vec<Region>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
        fn regions_by_code_suffix(&self, _suffix: &str) -> Result<Vec<Region>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
        fn countries_by_name(&self, _name: &str) -> Result<Vec<Country>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
        fn regions_by_name(&self, _name: &str, _country: Option<&Country>) -> Result<Vec<Region>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
        fn cities_by_name(
            &self,
            _name: &str,
            _country: Option<&Country>,
            _regions: Option<&[Region]>,
        ) -> Result<Vec<City>> {
            Err(GeoQueryError::Repository("backend offline".into()))
        }
    }

    #[test]
    fn repository_failures_propagate_instead_of_becoming_no_match() {
        let err = resolve_place(&BrokenRepo, "US").unwrap_err();
        assert!(matches!(err, GeoQueryError::Repository(_)));

        let err = resolve_place(&BrokenRepo, "Paris France").unwrap_err();
        assert!(matches!(err, GeoQueryError::Repository(_)));
    }

    #[test]
    fn empty_query_never_touches_the_repository() {
        let res = resolve_place(&BrokenRepo, "  ,  ").expect("no lookups issued");
        assert!(res.places.is_none());
        assert_eq!(res.consumed, 0);
    }
}
