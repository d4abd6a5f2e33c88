//! Flag size selectors and packaged artwork geometry.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The three packaged flag sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlagSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Packaged artwork geometry for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConfig {
    pub view_box: &'static str,
    pub width: u32,
    pub height: u32,
}

impl FlagSize {
    /// Directory key used by the asset tree and the CDN layout.
    pub fn dir_name(self) -> &'static str {
        match self {
            FlagSize::Small => "s",
            FlagSize::Medium => "m",
            FlagSize::Large => "l",
        }
    }

    /// Artwork geometry for this size.
    pub fn config(self) -> SizeConfig {
        match self {
            FlagSize::Small => SizeConfig {
                view_box: "0 0 16 12",
                width: 16,
                height: 12,
            },
            FlagSize::Medium => SizeConfig {
                view_box: "0 0 20 15",
                width: 20,
                height: 15,
            },
            FlagSize::Large => SizeConfig {
                view_box: "0 0 32 24",
                width: 32,
                height: 24,
            },
        }
    }
}

impl fmt::Display for FlagSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagSize::Small => "small",
            FlagSize::Medium => "medium",
            FlagSize::Large => "large",
        };
        f.write_str(name)
    }
}

/// Rejected size selector at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flag size {0:?} (expected s, m, or l)")]
pub struct ParseSizeError(String);

impl FromStr for FlagSize {
    type Err = ParseSizeError;

    /// Accepts the single-letter shorthands `s`/`m`/`l` and the full words,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "small" => Ok(FlagSize::Small),
            "m" | "medium" => Ok(FlagSize::Medium),
            "l" | "large" => Ok(FlagSize::Large),
            _ => Err(ParseSizeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_map_one_to_one() {
        assert_eq!("s".parse(), Ok(FlagSize::Small));
        assert_eq!("m".parse(), Ok(FlagSize::Medium));
        assert_eq!("l".parse(), Ok(FlagSize::Large));
    }

    #[test]
    fn full_words_and_mixed_case_parse() {
        assert_eq!("Small".parse(), Ok(FlagSize::Small));
        assert_eq!("MEDIUM".parse(), Ok(FlagSize::Medium));
        assert_eq!(" large ".parse(), Ok(FlagSize::Large));
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(FlagSize::default(), FlagSize::Medium);
    }

    #[test]
    fn unknown_selector_is_rejected() {
        assert!("xl".parse::<FlagSize>().is_err());
        assert!("".parse::<FlagSize>().is_err());
    }

    #[test]
    fn geometry_per_size() {
        assert_eq!(FlagSize::Small.config().view_box, "0 0 16 12");
        assert_eq!(FlagSize::Medium.config().width, 20);
        assert_eq!(FlagSize::Large.config().height, 24);
        assert_eq!(FlagSize::Large.dir_name(), "l");
    }
}
