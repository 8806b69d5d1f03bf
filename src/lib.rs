//! Catalog Renderer - music catalog to static webpage
//!
//! This library loads a JSON catalog of music tracks and renders it as a
//! page with a featured section and a sortable track list, each entry
//! carrying an inline audio player. It also ships the tooling that builds
//! the catalog from a music directory.

pub mod catalog;
pub mod convert;
pub mod export;
pub mod model;
pub mod render;
pub mod scan;

pub use export::config::SiteConfig;
pub use export::pipeline::SitePipeline;
