//! Catalog scanning
//!
//! Builds music_metadata.json from the FLAC and MP3 renditions under a
//! project's `public/music` directory. Audio properties come from an
//! `AudioProber`, so tests can swap in a stub that never touches decoders.

mod probe;
mod scanner;
mod stub;

pub use probe::{AudioProber, AudioProperties, LoftyProber};
pub use scanner::{CatalogScanner, ScanConfig, DEFAULT_ARTIST, FLAC_DIR, MP3_DIR};
pub use stub::StubProber;
