// crates/geoquery-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use geoquery_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// Case-insensitive and accent-insensitive: both sides are transliterated to
/// ASCII and lowercased before comparison, so strings that differ only in
/// diacritics or case compare equal.
///
/// # Examples
///
/// ```rust
/// use geoquery_core::text::equals_folded;
///
/// assert!(equals_folded("Zürich", "zurich"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Name-based matching for types that expose a canonical display name.
///
/// This trait centralizes case-insensitive and accent-insensitive comparisons
/// based on [`fold_key`]. Implementors provide a `&str` view of their
/// canonical name via [`NameMatch::name_str`] and get [`NameMatch::is_named`]
/// for free.
///
/// # Examples
/// ```rust
/// use geoquery_core::text::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_transliterates_and_lowercases() {
        assert_eq!(fold_key("Łódź"), "lodz");
        assert_eq!(fold_key("Đà Nẵng"), "da nang");
        assert_eq!(fold_key("PARIS"), "paris");
    }

    #[test]
    fn equals_folded_ignores_case_and_accents() {
        assert!(equals_folded("Los Angeles", "los angeles"));
        assert!(equals_folded("Genève", "geneve"));
        assert!(!equals_folded("Paris", "Parism"));
    }
}
