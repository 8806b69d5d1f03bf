//! Catalog loading
//!
//! Reads music_metadata.json from a local path, a file:// URI or an
//! http(s) URL and decodes it into track records.

mod loader;
mod source;

pub use loader::{load_catalog, parse_catalog};
pub use source::{CatalogSource, DEFAULT_CATALOG_PATH};

use thiserror::Error;

/// Failure to fetch or decode the catalog document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local catalog file failed.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote catalog failed.
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Reading the body of a remote catalog failed.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not an array of tracks.
    #[error("catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}
