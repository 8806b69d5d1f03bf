//! Stateful catalog renderer

use super::sections::{
    render_featured, render_sort_control, render_sort_options, render_sort_templates,
    render_track_list, render_track_list_container, SORT_SELECT_ID, TRACK_LIST_ID,
};
use super::tree::{CommitError, UiTree};
use crate::model::{sort_tracks, Catalog, SortOrder, Track};

/// Owns the featured tracks, the re-orderable normal tracks and the
/// current sort order
///
/// Sort changes go through `&mut self`, so the normal ordering has a single
/// owner. Every list render replaces the whole list container.
#[derive(Debug, Clone)]
pub struct CatalogRenderer {
    mount_id: String,
    featured: Vec<Track>,
    normal: Vec<Track>,
    order: SortOrder,
}

impl CatalogRenderer {
    /// Create a renderer for `catalog`, mounting into `mount_id`
    pub fn new(catalog: Catalog, mount_id: impl Into<String>) -> Self {
        let (featured, normal) = catalog.into_parts();
        Self {
            mount_id: mount_id.into(),
            featured,
            normal,
            order: SortOrder::default(),
        }
    }

    /// Start in a different sort order than Most Recent
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn featured(&self) -> &[Track] {
        &self.featured
    }

    /// Normal tracks in their current order
    pub fn normal(&self) -> &[Track] {
        &self.normal
    }

    /// Insert the featured section, sort control and track list into the
    /// mount point, then render the list in the current order
    ///
    /// Call once per tree; there is no guard against mounting twice.
    pub fn mount<T: UiTree>(&mut self, tree: &mut T) -> Result<(), CommitError> {
        log::debug!(
            "Mounting catalog into #{}: {} featured, {} normal",
            self.mount_id,
            self.featured.len(),
            self.normal.len()
        );

        let mut nodes = render_featured(&self.featured);
        nodes.push(render_sort_control(self.order));
        nodes.push(render_track_list_container());
        tree.append(&self.mount_id, nodes)?;

        sort_tracks(&mut self.normal, self.order);
        self.render_list(tree)
    }

    /// Re-sort the normal tracks and re-render the list
    pub fn handle_sort_change<T: UiTree>(
        &mut self,
        order: SortOrder,
        tree: &mut T,
    ) -> Result<(), CommitError> {
        log::debug!("Sort order changed: {} -> {}", self.order, order);
        self.order = order;
        sort_tracks(&mut self.normal, order);
        tree.replace_children(SORT_SELECT_ID, render_sort_options(order))?;
        self.render_list(tree)
    }

    /// Handle a raw value from the sort select
    ///
    /// Unknown values leave the order unchanged but still re-render.
    pub fn handle_sort_value<T: UiTree>(
        &mut self,
        value: &str,
        tree: &mut T,
    ) -> Result<(), CommitError> {
        match value.parse::<SortOrder>() {
            Ok(order) => self.handle_sort_change(order, tree),
            Err(e) => {
                log::debug!("Ignoring sort value: {}", e);
                self.render_list(tree)
            }
        }
    }

    /// Append one `<template>` per sort order to the mount point, so a
    /// static page can re-sort with `SORT_SCRIPT` alone
    pub fn mount_sort_templates<T: UiTree>(&self, tree: &mut T) -> Result<(), CommitError> {
        tree.append(&self.mount_id, render_sort_templates(&self.normal))
    }

    fn render_list<T: UiTree>(&self, tree: &mut T) -> Result<(), CommitError> {
        tree.replace_children(TRACK_LIST_ID, render_track_list(&self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Document;

    const MOUNT: &str = "music-library";

    fn dated(title: &str, date: &str) -> Track {
        Track {
            date: Some(date.to_string()),
            ..Track::new(title)
        }
    }

    fn list_titles(doc: &Document) -> Vec<String> {
        doc.find(TRACK_LIST_ID)
            .unwrap()
            .child_elements()
            .map(|block| block.child_elements().next().unwrap().text_content())
            .collect()
    }

    fn mounted(tracks: Vec<Track>) -> (CatalogRenderer, Document) {
        let mut doc = Document::with_mount(MOUNT);
        let mut renderer = CatalogRenderer::new(Catalog::partition(tracks), MOUNT);
        renderer.mount(&mut doc).unwrap();
        (renderer, doc)
    }

    #[test]
    fn test_mount_renders_most_recent_first() {
        let (renderer, doc) = mounted(vec![
            dated("a", "2019-01-01"),
            dated("b", "2021-06-15"),
            dated("c", "2020-03-10"),
        ]);

        assert_eq!(renderer.order(), SortOrder::Recent);
        assert_eq!(list_titles(&doc), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_change_reorders_list() {
        let (mut renderer, mut doc) = mounted(vec![
            dated("a", "2019-01-01"),
            dated("b", "2021-06-15"),
            dated("c", "2020-03-10"),
        ]);

        renderer
            .handle_sort_change(SortOrder::Oldest, &mut doc)
            .unwrap();
        assert_eq!(list_titles(&doc), vec!["a", "c", "b"]);

        renderer.handle_sort_value("recent", &mut doc).unwrap();
        assert_eq!(list_titles(&doc), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unknown_sort_value_keeps_order() {
        let (mut renderer, mut doc) = mounted(vec![
            dated("a", "2019-01-01"),
            dated("b", "2021-06-15"),
        ]);

        renderer.handle_sort_value("alphabetical", &mut doc).unwrap();
        assert_eq!(renderer.order(), SortOrder::Recent);
        assert_eq!(list_titles(&doc), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_change_updates_selected_option() {
        let (mut renderer, mut doc) = mounted(vec![dated("a", "2019-01-01")]);

        renderer
            .handle_sort_change(SortOrder::Oldest, &mut doc)
            .unwrap();

        let select = doc.find(SORT_SELECT_ID).unwrap();
        let selected: Vec<_> = select
            .child_elements()
            .filter(|o| o.has_attr("selected"))
            .map(|o| o.get_attr("value").unwrap().to_string())
            .collect();
        assert_eq!(selected, vec!["oldest"]);
    }

    #[test]
    fn test_sort_never_touches_featured() {
        let mut featured = dated("star", "2018-01-01");
        featured.featured = true;

        let (mut renderer, mut doc) =
            mounted(vec![featured, dated("a", "2019-01-01"), dated("b", "2020-01-01")]);
        let before = doc.find(MOUNT).unwrap().child_elements().next().cloned();

        renderer
            .handle_sort_change(SortOrder::Oldest, &mut doc)
            .unwrap();

        assert_eq!(doc.find(MOUNT).unwrap().child_elements().next().cloned(), before);
        assert_eq!(renderer.featured().len(), 1);
        assert_eq!(list_titles(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_start_in_oldest_order() {
        let mut doc = Document::with_mount(MOUNT);
        let catalog = Catalog::partition(vec![dated("new", "2021-01-01"), dated("old", "2001-01-01")]);
        let mut renderer = CatalogRenderer::new(catalog, MOUNT).with_order(SortOrder::Oldest);
        renderer.mount(&mut doc).unwrap();

        assert_eq!(list_titles(&doc), vec!["old", "new"]);
    }

    #[test]
    fn test_sort_templates_follow_list() {
        let (renderer, mut doc) = mounted(vec![
            dated("a", "2019-01-01"),
            dated("b", "2021-06-15"),
        ]);
        renderer.mount_sort_templates(&mut doc).unwrap();

        let library = doc.find(MOUNT).unwrap();
        let last: Vec<_> = library.child_elements().skip(2).map(|el| el.tag).collect();
        assert_eq!(last, vec!["template", "template"]);
        assert_eq!(list_titles(&doc), vec!["b", "a"]);
        assert!(doc.find("tracks-recent").is_some());
        assert!(doc.find("tracks-oldest").is_some());
    }

    #[test]
    fn test_mount_without_mount_point_fails() {
        let mut doc = Document::new();
        let mut renderer = CatalogRenderer::new(Catalog::partition(Vec::new()), MOUNT);
        assert_eq!(
            renderer.mount(&mut doc),
            Err(CommitError::MissingMount(MOUNT.to_string()))
        );
    }
}
