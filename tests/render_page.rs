use catalog_renderer::catalog::{parse_catalog, CatalogSource};
use catalog_renderer::model::{Catalog, SortOrder};
use catalog_renderer::render::{CatalogRenderer, Document, Element, SORT_SCRIPT, TRACK_LIST_ID};
use catalog_renderer::{SiteConfig, SitePipeline};
use std::fs;
use tempfile::TempDir;

const MOUNT: &str = "music-library";

/// Catalog with five featured tracks and three dated normal tracks
const CATALOG: &str = r#"[
    {"title": "F1", "featured": true, "path_mp3": "f1.mp3"},
    {"title": "N2019", "date": "2019-01-01", "genre": "Rock"},
    {"title": "F2", "featured": true},
    {"title": "N2021", "date": "2021-06-15", "path_mp3": "a.mp3", "path_flac": "a.flac"},
    {"title": "F3", "featured": true, "movie": "Arrival"},
    {"title": "F4", "featured": true},
    {"title": "N2020", "date": "2020-03-10"},
    {"title": "F5", "featured": "true"}
]"#;

fn mount(json: &str) -> (CatalogRenderer, Document) {
    let tracks = parse_catalog(json).expect("catalog should parse");
    let mut doc = Document::with_mount(MOUNT);
    let mut renderer = CatalogRenderer::new(Catalog::partition(tracks), MOUNT);
    renderer.mount(&mut doc).expect("mount point exists");
    (renderer, doc)
}

fn titles_in(container: &Element) -> Vec<String> {
    container
        .child_elements()
        .map(|block| block.child_elements().next().unwrap().text_content())
        .collect()
}

fn list_titles(doc: &Document) -> Vec<String> {
    titles_in(doc.find(TRACK_LIST_ID).unwrap())
}

#[test]
fn test_featured_cap_and_exclusion() {
    let (_, doc) = mount(CATALOG);
    let library = doc.find(MOUNT).unwrap();
    let sections: Vec<_> = library.child_elements().collect();

    assert_eq!(sections[0].tag, "h2");
    assert!(sections[1].has_class("featured-container"));
    assert_eq!(titles_in(sections[1]), vec!["F1", "F2", "F3 (Arrival)"]);

    let list = list_titles(&doc);
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|title| !title.starts_with('F')));
}

#[test]
fn test_no_featured_section_without_featured_tracks() {
    let (_, doc) = mount(r#"[{"title": "A", "date": "2020-01-01"}, {"title": "B"}]"#);
    let library = doc.find(MOUNT).unwrap();

    assert!(library.child_elements().all(|el| el.tag != "h2"));
    assert!(library
        .child_elements()
        .all(|el| !el.has_class("featured-container")));
    // Sort control and list container only
    assert_eq!(library.child_elements().count(), 2);
}

#[test]
fn test_meta_line_and_audio_precedence() {
    let (_, doc) = mount(CATALOG);
    let list = doc.find(TRACK_LIST_ID).unwrap();
    let blocks: Vec<_> = list.child_elements().collect();

    // Most recent first: N2021, N2020, N2019
    let n2021: Vec<_> = blocks[0].child_elements().collect();
    assert_eq!(n2021[1].text_content(), "2021-06-15");
    assert_eq!(n2021[2].get_attr("src"), Some("a.mp3"));

    let n2019: Vec<_> = blocks[2].child_elements().collect();
    assert_eq!(n2019[1].text_content(), "Rock | 2019-01-01");
    assert!(!n2019[2].has_attr("src"));
}

#[test]
fn test_sort_toggle() {
    let (mut renderer, mut doc) = mount(CATALOG);
    assert_eq!(list_titles(&doc), vec!["N2021", "N2020", "N2019"]);

    renderer
        .handle_sort_change(SortOrder::Oldest, &mut doc)
        .unwrap();
    assert_eq!(list_titles(&doc), vec!["N2019", "N2020", "N2021"]);

    renderer
        .handle_sort_change(SortOrder::Recent, &mut doc)
        .unwrap();
    assert_eq!(list_titles(&doc), vec!["N2021", "N2020", "N2019"]);
}

#[test]
fn test_full_replace_on_resort() {
    let (mut renderer, mut doc) = mount(CATALOG);

    renderer.handle_sort_value("oldest", &mut doc).unwrap();
    renderer.handle_sort_value("recent", &mut doc).unwrap();

    let list = doc.find(TRACK_LIST_ID).unwrap();
    assert_eq!(list.children.len(), renderer.normal().len());

    // Sort control and list are mounted once
    let library = doc.find(MOUNT).unwrap();
    assert_eq!(library.child_elements().filter(|el| el.tag == "div").count(), 3);
    assert_eq!(doc.to_html().matches("id=\"sort-select\"").count(), 1);
}

#[test]
fn test_pipeline_writes_index() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("music_metadata.json");
    fs::write(&catalog, CATALOG).unwrap();

    let config = SiteConfig::new(temp.path().join("site"))
        .with_source(CatalogSource::Path(catalog))
        .with_title("Scores")
        .with_sort_order(SortOrder::Oldest);
    let path = SitePipeline::new(config).render().expect("render should succeed");

    let page = fs::read_to_string(path).unwrap();
    assert!(page.contains("<title>Scores</title>"));
    assert!(page.contains("<div id=\"music-library\"><h2 style=\"margin-bottom: 1rem\">Featured</h2>"));
    assert!(page.contains("<option value=\"oldest\" selected>Oldest</option>"));

    let oldest = page.find("N2019").unwrap();
    let newest = page.find("N2021").unwrap();
    assert!(oldest < newest);
}

/// Markup between `start` and the next `end`
fn between<'a>(page: &'a str, start: &str, end: &str) -> &'a str {
    let from = page.find(start).unwrap() + start.len();
    let to = from + page[from..].find(end).unwrap();
    &page[from..to]
}

#[test]
fn test_written_page_wires_sort_select() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("music_metadata.json");
    fs::write(&catalog, CATALOG).unwrap();

    let config = SiteConfig::new(temp.path().join("site")).with_source(CatalogSource::Path(catalog));
    let path = SitePipeline::new(config).render().unwrap();
    let page = fs::read_to_string(path).unwrap();

    // Every ordering is pre-rendered next to the live list
    let recent = between(&page, "<template id=\"tracks-recent\">", "</template>");
    let oldest = between(&page, "<template id=\"tracks-oldest\">", "</template>");
    for (list, expected) in [(recent, ["N2021", "N2020", "N2019"]), (oldest, ["N2019", "N2020", "N2021"])] {
        let positions: Vec<_> = expected.iter().map(|t| list.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(list.matches("<div class=\"track\">").count(), 3);
        assert!(!list.contains("F1"));
    }

    // The change handler swaps the list for the matching ordering
    let script = between(&page, "<script>", "</script>");
    assert_eq!(script.trim(), SORT_SCRIPT);
    assert!(script.contains("getElementById(\"sort-select\")"));
    assert!(script.contains("addEventListener(\"change\""));
    assert!(script.contains("replaceChildren"));
    assert!(page.find("</script>").unwrap() < page.find("</body>").unwrap());
    assert!(page.find("id=\"sort-select\"").unwrap() < page.find("<script>").unwrap());
}

#[test]
fn test_load_failure_renders_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("site");

    let missing = SiteConfig::new(output.clone())
        .with_source(CatalogSource::Path(temp.path().join("missing.json")));
    assert!(SitePipeline::new(missing).render().is_err());
    assert!(!output.exists());

    let malformed = temp.path().join("broken.json");
    fs::write(&malformed, "[{\"title\": ").unwrap();
    let config = SiteConfig::new(output.clone()).with_source(CatalogSource::Path(malformed));
    assert!(SitePipeline::new(config).render().is_err());
    assert!(!output.exists());
}

#[test]
fn test_load_failure_leaves_mount_empty() {
    let temp = TempDir::new().unwrap();
    let config = SiteConfig::new(temp.path().join("site"))
        .with_source(CatalogSource::Path(temp.path().join("missing.json")));

    let mut doc = Document::with_mount(MOUNT);
    assert!(SitePipeline::new(config).mount_into(&mut doc).is_err());

    let library = doc.find(MOUNT).unwrap();
    assert!(library.children.is_empty());
    assert!(doc.find("sort-select").is_none());
}

#[test]
fn test_mount_into_returns_live_renderer() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("music_metadata.json");
    fs::write(&catalog, CATALOG).unwrap();
    let config = SiteConfig::new(temp.path().join("site")).with_source(CatalogSource::Path(catalog));

    let mut doc = Document::with_mount(MOUNT);
    let mut renderer = SitePipeline::new(config).mount_into(&mut doc).unwrap();
    renderer.handle_sort_value("oldest", &mut doc).unwrap();

    assert_eq!(list_titles(&doc), vec!["N2019", "N2020", "N2021"]);
}
