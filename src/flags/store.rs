//! Flag asset retrieval.
//!
//! One lookup contract over three deployment modes: markup embedded in the
//! binary, a pre-generated asset tree on local disk, or a remote CDN laid
//! out like the published flagpack-core package.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codes::{iso_to_alpha2, resolve_flag_alias};
use crate::error::FlagError;
use crate::flags::size::FlagSize;
use crate::flags::svg_data;

/// Default CDN layout, matching the published flagpack-core package.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/flagpack-core@2.1.0/lib/flags";

/// Where a store retrieves asset markup from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// SVG markup compiled into the binary.
    Embedded,
    /// A pre-generated `<root>/{s,m,l}/<CODE>.svg` tree on local disk.
    Directory(PathBuf),
    /// Remote fetch from a flagpack-core layout at the given base URL.
    Cdn(String),
}

/// Code-driven flag asset lookup over one retrieval strategy.
///
/// Lookups are the combined entry point over both resolvers: the caller's
/// code goes through [`resolve_flag_alias`], then [`iso_to_alpha2`], and
/// finally falls back to the raw uppercased input, so aliases ("UK"),
/// any ISO encoding, and already-canonical pseudo-codes ("001") all reach
/// the same asset.
#[derive(Debug, Clone)]
pub struct FlagStore {
    source: AssetSource,
}

impl FlagStore {
    pub fn new(source: AssetSource) -> Self {
        Self { source }
    }

    /// Store over the markup compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(AssetSource::Embedded)
    }

    /// Store over a pre-generated asset tree on disk.
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::new(AssetSource::Directory(root.into()))
    }

    /// Store fetching from a flagpack-core CDN layout.
    pub fn cdn(base_url: impl Into<String>) -> Self {
        Self::new(AssetSource::Cdn(base_url.into()))
    }

    /// CDN store at the default base, honoring `FLAGPACK_CDN_BASE`.
    pub fn cdn_default() -> Self {
        let base = std::env::var("FLAGPACK_CDN_BASE")
            .ok()
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_CDN_BASE.to_string());
        Self::cdn(base)
    }

    /// Directory store in the standard location.
    ///
    /// Checks `FLAGPACK_ASSET_DIR`, then `<data dir>/flagpack/flags`. The
    /// path is returned even when nothing exists there yet; lookups against
    /// a missing tree fail soft.
    pub fn discover_directory() -> Self {
        if let Ok(dir) = std::env::var("FLAGPACK_ASSET_DIR") {
            if !dir.is_empty() {
                return Self::directory(dir);
            }
        }

        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("flagpack")
            .join("flags");
        Self::directory(root)
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Resolve `code` and return the asset markup for `size`.
    ///
    /// Unknown codes, missing sizes, and retrieval failures all produce a
    /// warning diagnostic and an empty string; a missing flag never fails
    /// the rendering caller.
    ///
    /// Only the CDN source suspends; embedded and directory lookups complete
    /// without awaiting.
    pub async fn flag_url(&self, code: &str, size: FlagSize) -> String {
        let canonical = canonical_code(code);
        match self.fetch(&canonical, size).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!(code, %size, error = %e, "flag asset lookup failed");
                String::new()
            }
        }
    }

    /// Alias for [`FlagStore::flag_url`]; identical contract.
    pub async fn import_flag(&self, code: &str, size: FlagSize) -> String {
        self.flag_url(code, size).await
    }

    async fn fetch(&self, code: &str, size: FlagSize) -> Result<String, FlagError> {
        match &self.source {
            AssetSource::Embedded => svg_data::embedded_flag(code, size)
                .map(str::to_owned)
                .ok_or_else(|| FlagError::MissingAsset {
                    code: code.to_owned(),
                    size,
                }),
            AssetSource::Directory(root) => read_asset(root, code, size),
            AssetSource::Cdn(base) => fetch_cdn(base, code, size).await,
        }
    }
}

impl Default for FlagStore {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Canonicalize a caller-supplied code: alias table first, ISO resolution
/// next, raw trimmed and uppercased input as the fallback. The fallback
/// lets already-canonical codes and non-ISO pseudo-codes ("001") through
/// without ISO validation.
fn canonical_code(code: &str) -> String {
    let aliased = resolve_flag_alias(code).unwrap_or(code);
    match iso_to_alpha2(aliased) {
        Some(alpha2) => alpha2.to_owned(),
        None => aliased.trim().to_ascii_uppercase(),
    }
}

fn read_asset(root: &Path, code: &str, size: FlagSize) -> Result<String, FlagError> {
    if !root.is_dir() {
        return Err(FlagError::AssetRoot(root.to_path_buf()));
    }

    let path = root.join(size.dir_name()).join(format!("{code}.svg"));
    if !path.is_file() {
        return Err(FlagError::MissingAsset {
            code: code.to_owned(),
            size,
        });
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Fetch one asset from the CDN. No retries; a failed fetch is reported
/// once.
async fn fetch_cdn(base: &str, code: &str, size: FlagSize) -> Result<String, FlagError> {
    let url = cdn_asset_url(base, code, size);
    debug!(%url, "fetching flag asset from CDN");

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(FlagError::CdnStatus {
            status: response.status(),
            url,
        });
    }

    Ok(response.text().await?)
}

/// CDN URL for a canonical code at a size: `{base}/{size}/{CODE}.svg`.
pub fn cdn_asset_url(base: &str, code: &str, size: FlagSize) -> String {
    format!(
        "{}/{}/{}.svg",
        base.trim_end_matches('/'),
        size.dir_name(),
        code
    )
}

/// Look up a flag against the embedded asset set.
///
/// Synchronous: embedded data never suspends. Same fail-soft contract as
/// [`FlagStore::flag_url`].
pub fn get_flag_url(code: &str, size: FlagSize) -> String {
    let canonical = canonical_code(code);
    match svg_data::embedded_flag(&canonical, size) {
        Some(markup) => markup.to_owned(),
        None => {
            warn!(code, %size, "no embedded flag asset");
            String::new()
        }
    }
}

/// Alias for [`get_flag_url`]; identical contract.
pub fn import_flag(code: &str, size: FlagSize) -> String {
    get_flag_url(code, size)
}

/// Embedded markup for a code, aliases and ISO formats resolved first.
///
/// `None` when the code is outside the packaged set; no diagnostics.
pub fn get_flag_data(code: &str, size: FlagSize) -> Option<&'static str> {
    svg_data::embedded_flag(&canonical_code(code), size)
}
