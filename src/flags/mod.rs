//! Flag asset lookup - sizes, embedded artwork, and retrieval strategies.

mod size;
mod store;
mod svg_data;

pub use size::{FlagSize, ParseSizeError, SizeConfig};
pub use store::{
    cdn_asset_url, get_flag_data, get_flag_url, import_flag, AssetSource, FlagStore,
    DEFAULT_CDN_BASE,
};
pub use svg_data::{embedded_flag, EMBEDDED_CODES};
