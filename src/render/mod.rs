//! Page rendering
//!
//! Pure functions turn tracks into virtual node descriptors; `UiTree`
//! implementations commit them. `CatalogRenderer` ties the two together
//! and owns the sort state.

pub mod html;
mod node;
mod renderer;
mod sections;
mod tree;

pub use node::{Element, Node};
pub use renderer::CatalogRenderer;
pub use sections::{
    render_featured, render_sort_control, render_sort_options, render_sort_templates,
    render_track_list, render_track_list_container, sort_template_id, SORT_SCRIPT,
    SORT_SELECT_ID, TRACK_LIST_ID,
};
pub use tree::{CommitError, Document, UiTree};
