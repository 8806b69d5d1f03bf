//! Catalog document fetching and decoding

use super::{CatalogSource, LoadError};
use crate::model::Track;
use serde_json::Value;

/// Fetch and decode the catalog from its source
pub fn load_catalog(source: &CatalogSource) -> Result<Vec<Track>, LoadError> {
    log::info!("Loading catalog from {}", source);

    let body = match source {
        CatalogSource::Path(path) => {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?
        }
        CatalogSource::Url(url) => fetch(url)?,
    };

    parse_catalog(&body)
}

fn fetch(url: &str) -> Result<String, LoadError> {
    let agent = ureq::AgentBuilder::new().build();

    let response = agent.get(url).call().map_err(|e| LoadError::Http {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    response.into_string().map_err(|source| LoadError::Body {
        url: url.to_string(),
        source,
    })
}

/// Decode a catalog document
///
/// The document must be a JSON array. Elements that do not decode as a
/// track (e.g. a bare string) are skipped with a warning.
pub fn parse_catalog(body: &str) -> Result<Vec<Track>, LoadError> {
    let document: Value = serde_json::from_str(body)?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => return Err(LoadError::NotAnArray(json_kind(&other))),
    };

    let mut tracks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Track>(entry) {
            Ok(track) => tracks.push(track),
            Err(e) => log::warn!("Skipping catalog entry {}: {}", index, e),
        }
    }

    log::info!("Parsed {} tracks from catalog", tracks.len());
    Ok(tracks)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
