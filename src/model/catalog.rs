use super::Track;

/// Maximum number of tracks shown in the featured section
pub const FEATURED_LIMIT: usize = 3;

/// Track collection split into the featured and normal sections
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// First featured tracks in source order, at most FEATURED_LIMIT
    featured: Vec<Track>,

    /// All tracks without the featured flag, in source order
    normal: Vec<Track>,
}

impl Catalog {
    /// Partition tracks by their featured flag
    ///
    /// Only the first FEATURED_LIMIT featured tracks are kept. Later featured
    /// tracks are dropped from both sections.
    pub fn partition(tracks: Vec<Track>) -> Self {
        let (featured, normal): (Vec<Track>, Vec<Track>) =
            tracks.into_iter().partition(|t| t.featured);

        if featured.len() > FEATURED_LIMIT {
            log::debug!(
                "Dropping {} featured track(s) beyond the limit of {}",
                featured.len() - FEATURED_LIMIT,
                FEATURED_LIMIT
            );
        }

        Self {
            featured: featured.into_iter().take(FEATURED_LIMIT).collect(),
            normal,
        }
    }

    /// Featured tracks
    pub fn featured(&self) -> &[Track] {
        &self.featured
    }

    /// Normal tracks
    pub fn normal(&self) -> &[Track] {
        &self.normal
    }

    /// Split into (featured, normal)
    pub fn into_parts(self) -> (Vec<Track>, Vec<Track>) {
        (self.featured, self.normal)
    }
}
