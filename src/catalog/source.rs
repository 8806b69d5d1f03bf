use std::fmt;
use std::path::PathBuf;

/// Default catalog location, relative to the site root
pub const DEFAULT_CATALOG_PATH: &str = "data/music_metadata.json";

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file
    Path(PathBuf),

    /// Remote JSON document fetched over HTTP(S)
    Url(String),
}

impl CatalogSource {
    /// Interpret a location given on the command line or in a config
    pub fn parse(location: &str) -> Self {
        let location = location.trim();

        if location.starts_with("http://") || location.starts_with("https://") {
            return CatalogSource::Url(location.to_string());
        }

        if let Some(path) = location.strip_prefix("file://") {
            // Decode %20 and friends, keep the raw text if decoding fails
            let decoded = urlencoding::decode(path)
                .map(|p| p.into_owned())
                .unwrap_or_else(|_| path.to_string());
            return CatalogSource::Path(PathBuf::from(decoded));
        }

        CatalogSource::Path(PathBuf::from(location))
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Path(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}
