//! Music directory scanner and catalog writer

use super::probe::AudioProber;
use crate::catalog::{parse_catalog, DEFAULT_CATALOG_PATH};
use crate::model::Track;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// FLAC renditions, relative to the project root
pub const FLAC_DIR: &str = "public/music/flac";

/// MP3 renditions, relative to the project root
pub const MP3_DIR: &str = "public/music/mp3";

/// Artist recorded for newly discovered tracks
pub const DEFAULT_ARTIST: &str = "Unknown Artist";

/// Configuration for a catalog scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Project root containing public/music
    pub root: PathBuf,

    /// Catalog file to write (and merge with, if it exists)
    pub output: PathBuf,

    /// Artist for tracks not yet in the catalog
    pub default_artist: String,
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        let output = root.join(DEFAULT_CATALOG_PATH);
        Self {
            root,
            output,
            default_artist: DEFAULT_ARTIST.to_string(),
        }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.default_artist = artist.into();
        self
    }
}

/// Renditions found for one file stem
#[derive(Debug, Clone, Default)]
struct Renditions {
    flac: Option<String>,
    mp3: Option<String>,
}

/// Scans music directories into catalog records
pub struct CatalogScanner<P: AudioProber> {
    config: ScanConfig,
    prober: P,
}

impl<P: AudioProber + Sync> CatalogScanner<P> {
    pub fn new(config: ScanConfig, prober: P) -> Self {
        Self { config, prober }
    }

    /// Scan, merge with the existing catalog and write it, returning its path
    pub fn run(&self) -> Result<PathBuf> {
        let scanned = self.scan()?;
        let mut merged = merge_existing(scanned, &self.config.output)?;
        merged.iter_mut().for_each(blank_editable_fields);
        self.write(&merged)?;

        log::info!(
            "Catalog with {} tracks written to {:?}",
            merged.len(),
            self.config.output
        );
        Ok(self.config.output.clone())
    }

    /// Build one record per file stem found in the FLAC and MP3 directories
    pub fn scan(&self) -> Result<Vec<Track>> {
        let flac = collect_files(&self.config.root, FLAC_DIR, "flac")?;
        let mp3 = collect_files(&self.config.root, MP3_DIR, "mp3")?;

        let stems: BTreeSet<&String> = flac.keys().chain(mp3.keys()).collect();
        let entries: Vec<(String, Renditions)> = stems
            .into_iter()
            .map(|stem| {
                let renditions = Renditions {
                    flac: flac.get(stem).cloned(),
                    mp3: mp3.get(stem).cloned(),
                };
                (stem.clone(), renditions)
            })
            .collect();

        log::info!(
            "Found {} tracks ({} FLAC, {} MP3)",
            entries.len(),
            flac.len(),
            mp3.len()
        );

        Ok(entries
            .par_iter()
            .map(|(stem, renditions)| self.build_track(stem, renditions))
            .collect())
    }

    fn build_track(&self, stem: &str, renditions: &Renditions) -> Track {
        let mut track = Track {
            filename: Some(stem.to_string()),
            artist: Some(self.config.default_artist.clone()),
            path_flac: renditions.flac.clone(),
            path_mp3: renditions.mp3.clone(),
            ..Track::new(stem)
        };

        // Read metadata from the lossless rendition when there is one
        let Some(relative) = renditions.flac.as_ref().or(renditions.mp3.as_ref()) else {
            return track;
        };
        let audio_path = self.config.root.join(relative);

        match self.prober.probe(&audio_path) {
            Ok(properties) => {
                log::debug!("Probed {:?}: {:?}", audio_path, properties);
                track.duration = properties.duration_secs;
                track.bitrate = properties.bitrate_kbps.map(u64::from);
                track.sample_rate = properties.sample_rate.map(u64::from);
                track.format = audio_path
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
                track.date = file_date(&audio_path);
            }
            Err(e) => {
                log::warn!("Could not probe {:?}: {:#}", audio_path, e);
            }
        }

        track
    }

    /// Write records as indented JSON, creating parent directories
    pub fn write(&self, tracks: &[Track]) -> Result<()> {
        if let Some(parent) = self.config.output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tracks
            .serialize(&mut serializer)
            .context("Failed to serialize catalog")?;
        buf.push(b'\n');

        fs::write(&self.config.output, buf)
            .with_context(|| format!("Failed to write {:?}", self.config.output))?;
        Ok(())
    }
}

/// Map of file stem to root-relative path for one rendition directory
fn collect_files(root: &Path, dir: &str, extension: &str) -> Result<BTreeMap<String, String>> {
    let dir_path = root.join(dir);
    let mut files = BTreeMap::new();

    if !dir_path.is_dir() {
        log::warn!("Music directory {:?} does not exist, skipping", dir_path);
        return Ok(files);
    }

    for entry in WalkDir::new(&dir_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if !entry.file_type().is_file() || !matches {
            continue;
        }

        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("{:?} is outside {:?}", path, root))?;

        if let Some(previous) = files.insert(stem.clone(), to_slash(relative)) {
            log::warn!("Duplicate {} file for {:?}, replacing {}", extension, stem, previous);
        }
    }

    Ok(files)
}

/// Relative path with `/` separators regardless of platform
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Creation date of a file (modification date as fallback), as YYYY-MM-DD
fn file_date(path: &Path) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    let time = metadata.created().or_else(|_| metadata.modified()).ok()?;
    Some(DateTime::<Local>::from(time).format("%Y-%m-%d").to_string())
}

/// Carry hand-edited fields over from the catalog already on disk
///
/// A missing catalog means a first scan. A catalog that cannot be read or
/// parsed is an error, so hand edits are never overwritten.
fn merge_existing(scanned: Vec<Track>, existing_path: &Path) -> Result<Vec<Track>> {
    let body = match fs::read_to_string(existing_path) {
        Ok(body) => body,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(scanned),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read existing catalog {:?}", existing_path))
        }
    };

    let existing = parse_catalog(&body).with_context(|| {
        format!(
            "Existing catalog {:?} is not valid JSON; fix or remove it before scanning",
            existing_path
        )
    })?;

    let by_filename: HashMap<&str, &Track> = existing
        .iter()
        .filter_map(|t| t.filename.as_deref().map(|f| (f, t)))
        .collect();

    Ok(scanned
        .into_iter()
        .map(|mut track| {
            let previous = track
                .filename
                .as_deref()
                .and_then(|f| by_filename.get(f).copied());
            if let Some(previous) = previous {
                log::debug!("Keeping edited fields for {:?}", previous.filename);
                if !previous.title.is_empty() {
                    track.title = previous.title.clone();
                }
                track.artist = previous.artist.clone().or(track.artist);
                track.movie = previous.movie.clone();
                track.genre = previous.genre.clone();
                track.desc = previous.desc.clone();
                track.date = previous.date.clone().or(track.date);
                track.featured = previous.featured;
            }
            track
        })
        .collect())
}

/// Empty `movie`, `genre` and `desc` so every record has them ready to edit
fn blank_editable_fields(track: &mut Track) {
    for field in [&mut track.movie, &mut track.genre, &mut track.desc] {
        field.get_or_insert_with(String::new);
    }
}
