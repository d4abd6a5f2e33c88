//! Country-flag code resolution and asset lookup.
//!
//! Translates ISO 3166-1 codes (alpha-2, alpha-3, numeric) and informal
//! aliases ("Earth", "UK") into canonical two-letter flag codes, and
//! resolves those codes against packaged flag artwork in three sizes.
//!
//! All resolution functions are pure reads of immutable tables loaded once
//! per process. Asset lookups fail soft: a missing flag produces a warning
//! diagnostic and an empty result, never an error the caller must recover
//! from.

pub mod codes;
pub mod error;
pub mod flags;

pub use codes::{is_valid_iso_code, iso_to_alpha2, resolve_flag_alias, CountryCode, FLAG_ALIASES};
pub use error::FlagError;
pub use flags::{
    get_flag_data, get_flag_url, import_flag, AssetSource, FlagSize, FlagStore, SizeConfig,
};
