//! Audio property probing

use anyhow::{Context, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use std::path::Path;

/// Audio prober trait - allows swapping between lofty and stub implementations
pub trait AudioProber {
    /// Read the stream properties of an audio file
    fn probe(&self, audio_path: &Path) -> Result<AudioProperties>;
}

/// Stream properties recorded in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioProperties {
    /// Duration in whole seconds
    pub duration_secs: Option<u64>,

    /// Audio bitrate in kbps
    pub bitrate_kbps: Option<u32>,

    /// Sample rate in Hz
    pub sample_rate: Option<u32>,
}

/// Prober backed by lofty's file properties
pub struct LoftyProber;

impl LoftyProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyProber {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProber for LoftyProber {
    fn probe(&self, audio_path: &Path) -> Result<AudioProperties> {
        let tagged_file = Probe::open(audio_path)
            .with_context(|| format!("Failed to open {:?}", audio_path))?
            .read()
            .with_context(|| format!("Failed to read audio properties of {:?}", audio_path))?;

        let properties = tagged_file.properties();

        Ok(AudioProperties {
            duration_secs: Some(properties.duration().as_secs()),
            bitrate_kbps: properties
                .audio_bitrate()
                .or_else(|| properties.overall_bitrate()),
            sample_rate: properties.sample_rate(),
        })
    }
}
