// crates/geoquery-core/src/scan.rs

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words that typically belong to a country name ("United States",
/// "North Korea", "New Zealand").
static COUNTRY_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["new", "north", "south", "united"].into_iter().collect());

/// Words that typically belong to a region name ("South Dakota",
/// "West Bengal", "New South Wales").
static REGION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["south", "north", "east", "west", "new"]
        .into_iter()
        .collect()
});

/// Words that typically belong to a city name ("Lake Forest",
/// "Santa Monica", "Port Harcourt"). Matched against the singular form, so
/// "Islands" hits "island".
static CITY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "south", "north", "east", "west", "santa", "upper", "lower", "fort", "cape", "city",
        "town", "beach", "square", "centre", "hill", "park", "point", "hollow", "harbor", "shore",
        "head", "cove", "station", "height", "fall", "bay", "river", "island", "grove", "valley",
        "lake", "creek", "cloud", "rapid", "spring", "arrow", "township", "village", "grand",
        "palm", "port", "prince", "king", "queen",
    ]
    .into_iter()
    .collect()
});

/// Shared scan policy for the country and region levels.
///
/// Walks the window strictly tail to head: every trailing word-class token is
/// consumed, then exactly one token that is not in the set (the head noun,
/// assumed to be the name's distinguishing word), then scanning stops. The
/// count never exceeds the window length and is 0 only for an empty window.
fn scan_tail(window: &[String], words: &HashSet<&'static str>) -> usize {
    let mut consumed = 0;
    let mut head_taken = false;
    for token in window.iter().rev() {
        if words.contains(token.to_lowercase().as_str()) {
            consumed += 1;
        } else if !head_taken {
            consumed += 1;
            head_taken = true;
        } else {
            break;
        }
    }
    consumed
}

/// Count the trailing tokens that plausibly form a country name.
pub fn scan_country(window: &[String]) -> usize {
    scan_tail(window, &COUNTRY_WORDS)
}

/// Count the trailing tokens that plausibly form a region name.
pub fn scan_region(window: &[String]) -> usize {
    scan_tail(window, &REGION_WORDS)
}

/// Count the trailing tokens that plausibly form a city name.
///
/// Same policy as [`scan_country`]/[`scan_region`], with two extra rules:
/// any token of 3 characters or fewer is consumable outright (short
/// particles such as "la", "des", "san", "mt", "st"), and a single trailing
/// "s" is stripped before the set check so plurals like "islands" match.
pub fn scan_city(window: &[String]) -> usize {
    let mut consumed = 0;
    let mut head_taken = false;
    for token in window.iter().rev() {
        if token.chars().count() <= 3 {
            consumed += 1;
            continue;
        }
        let lower = token.to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        if CITY_WORDS.contains(singular) {
            consumed += 1;
        } else if !head_taken {
            consumed += 1;
            head_taken = true;
        } else {
            break;
        }
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_window_consumes_nothing() {
        assert_eq!(scan_country(&[]), 0);
        assert_eq!(scan_region(&[]), 0);
        assert_eq!(scan_city(&[]), 0);
    }

    #[test]
    fn country_scan_takes_class_words_and_one_head_noun() {
        assert_eq!(scan_country(&toks(&["United", "States"])), 2);
        assert_eq!(scan_country(&toks(&["Paris", "France"])), 1);
        assert_eq!(scan_country(&toks(&["Papua", "New", "Guinea"])), 2);
    }

    #[test]
    fn region_scan_stops_after_the_head_noun() {
        // Tail to head: "Dakota" is the head noun, "North" is a class word,
        // "Fargo" ends the scan.
        assert_eq!(scan_region(&toks(&["Fargo", "North", "Dakota"])), 2);
        assert_eq!(scan_region(&toks(&["California"])), 1);
    }

    #[test]
    fn both_ends_head_noun_counts_once() {
        // Strict tail-to-head order: the head-noun slot is spent on the last
        // non-class token, so the scan cannot also absorb a leading one.
        assert_eq!(scan_region(&toks(&["Venue", "North", "Dakota"])), 2);
        assert_eq!(scan_country(&toks(&["Venue", "France"])), 1);
    }

    #[test]
    fn scan_is_case_insensitive() {
        assert_eq!(scan_country(&toks(&["UNITED", "states"])), 2);
        assert_eq!(scan_city(&toks(&["lake", "FOREST"])), 2);
    }

    #[test]
    fn city_scan_takes_short_particles() {
        // "Angeles" is the head noun; "Los" is short enough to ride along.
        assert_eq!(scan_city(&toks(&["Los", "Angeles"])), 2);
        assert_eq!(scan_city(&toks(&["Venue", "St", "Cloud"])), 3);
    }

    #[test]
    fn city_scan_matches_plurals_as_singular() {
        assert_eq!(scan_city(&toks(&["Thousand", "Islands"])), 2);
    }

    #[test]
    fn city_scan_stops_after_head_noun() {
        assert_eq!(scan_city(&toks(&["Sunset", "Boulevard", "Hollywood"])), 1);
    }
}
