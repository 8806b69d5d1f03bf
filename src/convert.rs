//! Audio conversion into the catalog's FLAC and MP3 renditions
//!
//! Shells out to ffmpeg: lossless FLAC, and MP3 with LAME VBR quality 0.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Default music directory, relative to the project root
pub const DEFAULT_MUSIC_DIR: &str = "public/music";

/// Failure to produce one of the renditions
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("input file does not exist: {0:?}")]
    MissingInput(PathBuf),

    /// The input path has no usable file stem for naming outputs.
    #[error("cannot derive an output name from {0:?}")]
    NoOutputName(PathBuf),

    /// Creating an output directory failed.
    #[error("failed to create {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg could not be started.
    #[error("failed to run ffmpeg: {0}")]
    Spawn(#[source] std::io::Error),

    /// ffmpeg exited unsuccessfully.
    #[error("ffmpeg failed converting to {output:?} ({status})")]
    Ffmpeg {
        output: PathBuf,
        status: std::process::ExitStatus,
    },
}

/// Output format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendition {
    /// Lossless FLAC
    Flac,

    /// High-quality VBR MP3 (LAME V0)
    Mp3,
}

impl Rendition {
    pub fn extension(&self) -> &'static str {
        match self {
            Rendition::Flac => "flac",
            Rendition::Mp3 => "mp3",
        }
    }

    /// Codec arguments passed to ffmpeg after the input
    fn codec_args(&self) -> &'static [&'static str] {
        match self {
            Rendition::Flac => &["-c:a", "flac"],
            Rendition::Mp3 => &["-c:a", "libmp3lame", "-q:a", "0"],
        }
    }
}

/// Convert one input file into both renditions
#[derive(Debug, Clone)]
pub struct ConvertJob {
    /// Source audio file (any format ffmpeg reads)
    pub input: PathBuf,

    /// Output file stem; defaults to the input's stem
    pub name: Option<String>,

    /// Directory holding the flac/ and mp3/ subdirectories
    pub music_root: PathBuf,
}

impl ConvertJob {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            name: None,
            music_root: PathBuf::from(DEFAULT_MUSIC_DIR),
        }
    }

    /// Rename the outputs
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_music_root(mut self, music_root: PathBuf) -> Self {
        self.music_root = music_root;
        self
    }

    /// Stem used for both output files
    pub fn output_stem(&self) -> Result<String, ConvertError> {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return Ok(name.to_string());
        }
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| ConvertError::NoOutputName(self.input.clone()))
    }

    /// Where `rendition` is written
    pub fn output_path(&self, rendition: Rendition) -> Result<PathBuf, ConvertError> {
        let stem = self.output_stem()?;
        Ok(self
            .music_root
            .join(rendition.extension())
            .join(format!("{}.{}", stem, rendition.extension())))
    }

    /// Run both conversions, returning the written paths (FLAC, then MP3)
    pub fn run(&self) -> Result<Vec<PathBuf>, ConvertError> {
        if !self.input.is_file() {
            return Err(ConvertError::MissingInput(self.input.clone()));
        }

        let mut outputs = Vec::new();
        for rendition in [Rendition::Flac, Rendition::Mp3] {
            let output = self.output_path(rendition)?;
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            log::info!("Converting to {}: {:?} -> {:?}", rendition.extension(), self.input, output);
            run_ffmpeg(&ffmpeg_args(&self.input, &output, rendition), &output)?;
            outputs.push(output);
        }

        log::info!("All conversions completed successfully");
        Ok(outputs)
    }
}

/// ffmpeg arguments converting `input` to `output` (overwriting it)
pub fn ffmpeg_args(input: &Path, output: &Path, rendition: Rendition) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), input.into()];
    args.extend(rendition.codec_args().iter().map(OsString::from));
    args.push(output.into());
    args
}

fn run_ffmpeg(args: &[OsString], output: &Path) -> Result<(), ConvertError> {
    let status = Command::new("ffmpeg")
        .args(args)
        .status()
        .map_err(ConvertError::Spawn)?;

    if !status.success() {
        return Err(ConvertError::Ffmpeg {
            output: output.to_path_buf(),
            status,
        });
    }
    Ok(())
}
