//! Flag alias mapping.
//!
//! Maps informal names ("EARTH", "UK") to canonical flag codes. The mapped
//! values may be non-ISO pseudo-codes, e.g. "001" for the globe icon.

/// Alias table: uppercase alias name to canonical flag code.
pub const FLAG_ALIASES: &[(&str, &str)] = &[
    // Globe/World/International aliases - all map to 001
    ("EARTH", "001"),
    ("GLOBE", "001"),
    ("GLOBAL", "001"),
    ("WORLD", "001"),
    ("INTERNATIONAL", "001"),
    // Other specific aliases
    ("UK", "GB"),
];

/// Resolve a flag code through the alias table.
///
/// Trimming and uppercasing apply only to the lookup key: on a hit the
/// mapped value comes back in its own canonical casing, on a miss the
/// original input comes back untouched, casing preserved. Empty input
/// yields `None`.
pub fn resolve_flag_alias(code: &str) -> Option<&str> {
    if code.is_empty() {
        return None;
    }

    let key = code.trim().to_ascii_uppercase();

    FLAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .or(Some(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globe_aliases_converge_on_the_pseudo_code() {
        for alias in ["EARTH", "Globe", "world", "GLOBAL", "International"] {
            assert_eq!(resolve_flag_alias(alias), Some("001"), "{alias}");
        }
    }

    #[test]
    fn uk_maps_to_gb() {
        assert_eq!(resolve_flag_alias("UK"), Some("GB"));
        assert_eq!(resolve_flag_alias(" uk "), Some("GB"));
    }

    #[test]
    fn unknown_codes_pass_through_unchanged() {
        assert_eq!(resolve_flag_alias("US"), Some("US"));
        // the passthrough value is never re-normalized
        assert_eq!(resolve_flag_alias("us"), Some("us"));
        assert_eq!(resolve_flag_alias(" nl"), Some(" nl"));
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(resolve_flag_alias(""), None);
    }

    #[test]
    fn alias_keys_are_uppercase_and_unique() {
        for (i, (alias, _)) in FLAG_ALIASES.iter().enumerate() {
            assert_eq!(*alias, alias.to_ascii_uppercase());
            assert!(
                FLAG_ALIASES[i + 1..].iter().all(|(other, _)| other != alias),
                "dup {alias}"
            );
        }
    }
}
