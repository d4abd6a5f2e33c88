//! Code resolution - ISO 3166-1 codes and informal aliases.
//!
//! Both resolvers are pure functions over static tables; callers may chain
//! them in either order.

mod aliases;
mod iso;

pub use aliases::{resolve_flag_alias, FLAG_ALIASES};
pub use iso::{country_codes, is_valid_iso_code, iso_to_alpha2, CountryCode};
