//! ISO 3166-1 code resolution.
//!
//! Converts any of the three standard encodings (alpha-2, alpha-3, numeric)
//! into the canonical alpha-2 code used as the flag lookup key.

use std::sync::LazyLock;

use serde::Deserialize;

/// One row of the packaged ISO 3166-1 table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    pub country_name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub numeric: String,
}

static COUNTRY_CODES: LazyLock<Vec<CountryCode>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/country_codes.json"))
        .expect("packaged country code table is valid JSON")
});

/// The packaged ISO 3166-1 table, loaded once per process.
pub fn country_codes() -> &'static [CountryCode] {
    &COUNTRY_CODES
}

/// Convert an ISO code in any format (alpha-2, alpha-3, or numeric) to its
/// alpha-2 code.
///
/// Input is trimmed and uppercased before matching. Empty input and codes
/// not present in the table yield `None`; nothing panics on malformed input.
///
/// # Examples
/// ```
/// use flagpack::iso_to_alpha2;
///
/// assert_eq!(iso_to_alpha2("USA"), Some("US"));
/// assert_eq!(iso_to_alpha2("840"), Some("US"));
/// assert_eq!(iso_to_alpha2(" us "), Some("US"));
/// assert_eq!(iso_to_alpha2("ZZ9"), None);
/// ```
pub fn iso_to_alpha2(iso_code: &str) -> Option<&'static str> {
    let normalized = iso_code.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return None;
    }

    country_codes()
        .iter()
        .find(|country| {
            country.alpha2 == normalized
                || country.alpha3 == normalized
                || country.numeric == normalized
        })
        .map(|country| country.alpha2.as_str())
}

/// Check whether a code resolves in any of the three ISO formats.
///
/// Defined strictly in terms of [`iso_to_alpha2`] so that "valid" can never
/// drift from "resolvable".
pub fn is_valid_iso_code(iso_code: &str) -> bool {
    iso_to_alpha2(iso_code).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn resolves_all_three_encodings() {
        assert_eq!(iso_to_alpha2("US"), Some("US"));
        assert_eq!(iso_to_alpha2("USA"), Some("US"));
        assert_eq!(iso_to_alpha2("840"), Some("US"));
        assert_eq!(iso_to_alpha2("gbr"), Some("GB"));
        assert_eq!(iso_to_alpha2("826"), Some("GB"));
        assert_eq!(iso_to_alpha2("NLD"), Some("NL"));
    }

    #[test]
    fn every_record_round_trips() {
        for country in country_codes() {
            let expected = Some(country.alpha2.as_str());
            assert_eq!(iso_to_alpha2(&country.alpha2), expected);
            assert_eq!(iso_to_alpha2(&country.alpha3), expected);
            assert_eq!(iso_to_alpha2(&country.numeric), expected);
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(iso_to_alpha2(" us "), Some("US"));
        assert_eq!(iso_to_alpha2("uSa"), Some("US"));
        assert_eq!(iso_to_alpha2("\tfra\n"), Some("FR"));
    }

    #[test]
    fn empty_and_unknown_yield_none() {
        assert_eq!(iso_to_alpha2(""), None);
        assert_eq!(iso_to_alpha2("   "), None);
        assert_eq!(iso_to_alpha2("ZZ9"), None);
        assert_eq!(iso_to_alpha2("XYZ"), None);
        // numeric codes are zero-padded; unpadded input does not match
        assert_eq!(iso_to_alpha2("12"), None);
    }

    #[test]
    fn validity_is_defined_by_resolution() {
        assert!(is_valid_iso_code("USA"));
        assert!(is_valid_iso_code("052"));
        assert!(!is_valid_iso_code("UK")); // alias, not an ISO code
        assert!(!is_valid_iso_code(""));
    }

    #[test]
    fn table_columns_are_unique_and_well_formed() {
        let mut alpha2s = HashSet::new();
        let mut alpha3s = HashSet::new();
        let mut numerics = HashSet::new();

        for country in country_codes() {
            assert_eq!(country.alpha2.len(), 2, "{}", country.country_name);
            assert!(country.alpha2.chars().all(|c| c.is_ascii_uppercase()));
            assert_eq!(country.alpha3.len(), 3, "{}", country.country_name);
            assert!(country.alpha3.chars().all(|c| c.is_ascii_uppercase()));
            assert_eq!(country.numeric.len(), 3, "{}", country.country_name);
            assert!(country.numeric.chars().all(|c| c.is_ascii_digit()));

            assert!(alpha2s.insert(&country.alpha2), "dup {}", country.alpha2);
            assert!(alpha3s.insert(&country.alpha3), "dup {}", country.alpha3);
            assert!(numerics.insert(&country.numeric), "dup {}", country.numeric);
        }
    }
}
