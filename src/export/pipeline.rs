//! Main render pipeline orchestration

use super::config::SiteConfig;
use super::organizer::SiteOrganizer;
use crate::catalog::{load_catalog, LoadError};
use crate::model::{Catalog, Track};
use crate::render::{html, CatalogRenderer, Document, UiTree, SORT_SCRIPT};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Loads the catalog and writes the rendered page
pub struct SitePipeline {
    config: SiteConfig,
    organizer: SiteOrganizer,
}

impl SitePipeline {
    /// Create a new pipeline
    pub fn new(config: SiteConfig) -> Self {
        let organizer = SiteOrganizer::new(config.output_dir.clone());
        Self { config, organizer }
    }

    /// Run the complete render, returning the path of the written page
    ///
    /// A load failure is logged and returned before anything is written.
    pub fn render(&self) -> Result<PathBuf> {
        log::info!("Rendering catalog page");
        log::info!("Source: {}", self.config.source);

        // Step 1: Load the catalog and mount it into a fresh document
        let mut document = Document::with_mount(&self.config.mount_id);
        let renderer = self.mount_into(&mut document)?;

        // Step 2: Pre-render every ordering for the page's sort control
        renderer
            .mount_sort_templates(&mut document)
            .context("Failed to mount sort templates")?;

        // Step 3: Write the page
        self.organizer.init()?;
        let page = html::render_page(&self.config.title, &document.to_html(), &[SORT_SCRIPT]);
        let path = self.organizer.write_index(&page)?;

        log::info!("Page written to: {:?}", path);
        Ok(path)
    }

    fn load(&self) -> Result<Vec<Track>, LoadError> {
        load_catalog(&self.config.source).inspect_err(|e| {
            log::error!("Error loading music JSON: {}", e);
        })
    }

    /// Load the catalog and mount it into `tree`
    ///
    /// On a load failure nothing is inserted into the tree.
    pub fn mount_into<T: UiTree>(&self, tree: &mut T) -> Result<CatalogRenderer> {
        let tracks = self.load()?;

        let catalog = Catalog::partition(tracks);
        log::info!(
            "Catalog: {} featured, {} normal tracks",
            catalog.featured().len(),
            catalog.normal().len()
        );

        let mut renderer = CatalogRenderer::new(catalog, self.config.mount_id.clone())
            .with_order(self.config.sort_order);
        renderer
            .mount(tree)
            .context("Failed to mount catalog")?;

        Ok(renderer)
    }
}
