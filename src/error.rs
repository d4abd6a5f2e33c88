//! Error types for flag asset retrieval.

use std::path::PathBuf;

use thiserror::Error;

use crate::flags::FlagSize;

/// Errors raised inside asset store strategies.
///
/// None of these cross the public lookup surface: `FlagStore` converts every
/// variant into a warning diagnostic and an empty result.
#[derive(Error, Debug)]
pub enum FlagError {
    #[error("no {size} asset for code {code}")]
    MissingAsset { code: String, size: FlagSize },

    #[error("asset directory not found: {0}")]
    AssetRoot(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CDN returned {status} for {url}")]
    CdnStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}
