//! Stub prober for scans without audio decoding

use super::probe::{AudioProber, AudioProperties};
use anyhow::Result;
use std::path::Path;

/// Prober that returns fixed properties for every file
///
/// Useful for tests and for regenerating a catalog when only the
/// file listing matters.
pub struct StubProber {
    properties: AudioProperties,
}

impl StubProber {
    pub fn new() -> Self {
        Self {
            properties: AudioProperties::default(),
        }
    }

    /// Return `properties` for every probed file
    pub fn with_properties(properties: AudioProperties) -> Self {
        Self { properties }
    }
}

impl Default for StubProber {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProber for StubProber {
    fn probe(&self, audio_path: &Path) -> Result<AudioProperties> {
        log::debug!("Stub probe for: {:?}", audio_path);
        Ok(self.properties.clone())
    }
}
