//! Output directory layout

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the rendered page
pub const INDEX_FILE: &str = "index.html";

/// Manages the output directory of a rendered site
pub struct SiteOrganizer {
    /// Root output directory
    root: PathBuf,
}

impl SiteOrganizer {
    /// Create an organizer for the given output directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create output directory {:?}", self.root))?;
        log::debug!("Output directory ready at {:?}", self.root);
        Ok(())
    }

    /// Path of the rendered page
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Write the rendered page, returning its path
    pub fn write_index(&self, html: &str) -> Result<PathBuf> {
        let path = self.index_path();
        fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(path)
    }
}
