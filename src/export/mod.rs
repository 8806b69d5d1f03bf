//! Site generation: configuration, output layout and the render pipeline

pub mod config;
pub mod organizer;
pub mod pipeline;

pub use config::SiteConfig;
pub use organizer::SiteOrganizer;
pub use pipeline::SitePipeline;
