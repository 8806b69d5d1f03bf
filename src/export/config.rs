//! Site configuration

use crate::catalog::CatalogSource;
use crate::model::SortOrder;
use std::path::PathBuf;

/// Default id of the element the catalog is mounted into
pub const DEFAULT_MOUNT_ID: &str = "music-library";

/// Default page title
pub const DEFAULT_TITLE: &str = "Music Library";

/// Configuration for rendering the catalog page
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory the page is written into
    pub output_dir: PathBuf,

    /// Where the catalog JSON is loaded from
    pub source: CatalogSource,

    /// Content of the `<title>` element
    pub title: String,

    /// Id of the mount point element in the page shell
    pub mount_id: String,

    /// Order of the normal track list in the written page
    pub sort_order: SortOrder,
}

impl SiteConfig {
    /// Create a configuration with defaults for everything but the output
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            source: CatalogSource::default(),
            title: DEFAULT_TITLE.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            sort_order: SortOrder::default(),
        }
    }

    /// Set the catalog source
    pub fn with_source(mut self, source: CatalogSource) -> Self {
        self.source = source;
        self
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the mount point id
    pub fn with_mount_id(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }

    /// Set the initial sort order
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
}
