//! Pure builders for the featured section, sort control and track list

use super::node::{Element, Node};
use crate::model::{sort_tracks, SortOrder, Track};

/// Id of the container holding the normal track list
pub const TRACK_LIST_ID: &str = "all-tracks";

/// Id of the sort `<select>` element
pub const SORT_SELECT_ID: &str = "sort-select";

/// Page script that swaps the track list for the pre-rendered ordering
/// matching the sort select
///
/// The whole list container is replaced on every change, so switching back
/// and forth never duplicates blocks. An unknown value leaves the list as is.
pub const SORT_SCRIPT: &str = r#"(function () {
  var select = document.getElementById("sort-select");
  var list = document.getElementById("all-tracks");
  if (!select || !list) return;
  select.addEventListener("change", function () {
    var ordered = document.getElementById("tracks-" + select.value);
    if (ordered) list.replaceChildren(ordered.content.cloneNode(true));
  });
})();"#;

/// Id of the `<template>` holding the list pre-rendered in `order`
pub fn sort_template_id(order: SortOrder) -> String {
    format!("tracks-{}", order.value())
}

/// Heading + card row for the featured tracks, or nothing when there are none
pub fn render_featured(tracks: &[Track]) -> Vec<Node> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let heading = Element::new("h2")
        .style("margin-bottom", "1rem")
        .text("Featured");

    let container = Element::new("div")
        .class("featured-container")
        .style("display", "flex")
        .style("gap", "1rem")
        .style("margin-bottom", "2rem")
        .style("justify-content", "space-between")
        .children(tracks.iter().map(|t| Node::from(featured_card(t))));

    vec![heading.into(), container.into()]
}

fn featured_card(track: &Track) -> Element {
    Element::new("div")
        .class("track featured-track")
        .style("flex", "1")
        .style("min-width", "250px")
        .style("padding", "1rem")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("justify-content", "space-between")
        .style("border-radius", "8px")
        .style("box-shadow", "0 2px 4px rgba(0,0,0,0.1)")
        .children(track_body(track))
}

/// Title, meta line and audio player shared by cards and list blocks
fn track_body(track: &Track) -> Vec<Node> {
    let title = Element::new("h3").text(track.display_title());
    let meta = Element::new("p").text(track.meta_line());

    let mut audio = Element::new("audio").flag("controls");
    if let Some(src) = track.audio_source() {
        audio = audio.attr("src", src);
    }

    vec![title.into(), meta.into(), audio.into()]
}

/// "Sort by" label and select, with `current` marked as selected
pub fn render_sort_control(current: SortOrder) -> Node {
    Element::new("div")
        .style("margin-bottom", "1rem")
        .child(
            Element::new("label")
                .attr("for", SORT_SELECT_ID)
                .text("Sort by: "),
        )
        .child(
            Element::new("select")
                .id(SORT_SELECT_ID)
                .children(render_sort_options(current)),
        )
        .into()
}

/// The `<option>` children of the sort select
pub fn render_sort_options(current: SortOrder) -> Vec<Node> {
    SortOrder::ALL
        .iter()
        .map(|order| {
            let option = Element::new("option")
                .attr("value", order.value())
                .text(order.label());
            if *order == current {
                Node::from(option.flag("selected"))
            } else {
                Node::from(option)
            }
        })
        .collect()
}

/// Empty container the track list is rendered into
pub fn render_track_list_container() -> Node {
    Element::new("div").id(TRACK_LIST_ID).into()
}

/// One plain block per track, in the given order
pub fn render_track_list(tracks: &[Track]) -> Vec<Node> {
    tracks
        .iter()
        .map(|track| {
            Node::from(
                Element::new("div")
                    .class("track")
                    .children(track_body(track)),
            )
        })
        .collect()
}

/// One inert `<template>` per sort order, each holding the full track list
/// in that order
pub fn render_sort_templates(tracks: &[Track]) -> Vec<Node> {
    SortOrder::ALL
        .iter()
        .map(|order| {
            let mut ordered = tracks.to_vec();
            sort_tracks(&mut ordered, *order);
            Node::from(
                Element::new("template")
                    .id(sort_template_id(*order))
                    .children(render_track_list(&ordered)),
            )
        })
        .collect()
}
