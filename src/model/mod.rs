//! Unified data model for the music catalog
//!
//! This module defines the track record, the featured/normal partition
//! and date-based ordering. It is independent of where the catalog is
//! loaded from and of how it is rendered.

mod catalog;
mod sort;
mod track;

pub use catalog::{Catalog, FEATURED_LIMIT};
pub use sort::{parse_date, sort_tracks, SortOrder};
pub use track::{Track, META_SEPARATOR};
