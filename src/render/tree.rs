//! Committing node descriptors into a UI tree

use super::html;
use super::node::{Element, Node};
use thiserror::Error;

/// Failure to commit nodes into a tree
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommitError {
    /// No element carries the requested id.
    #[error("no element with id {0:?} in the document")]
    MissingMount(String),
}

/// A mutable UI tree that rendered nodes are committed into
///
/// Implementations address containers by their `id` attribute.
pub trait UiTree {
    /// Append nodes after the existing children of `parent_id`
    fn append(&mut self, parent_id: &str, nodes: Vec<Node>) -> Result<(), CommitError>;

    /// Remove all children of `parent_id` and insert `nodes` instead
    fn replace_children(&mut self, parent_id: &str, nodes: Vec<Node>) -> Result<(), CommitError>;
}

/// In-memory document, serializable to HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
}

impl Document {
    /// Empty document without any mount point
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// Document whose body holds a single empty mount point
    pub fn with_mount(mount_id: &str) -> Self {
        Self {
            body: Element::new("body").child(Element::new("div").id(mount_id)),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Find an element by id
    pub fn find(&self, id: &str) -> Option<&Element> {
        find_in(&self.body, id)
    }

    /// Serialize the body's children as HTML
    pub fn to_html(&self) -> String {
        html::render_nodes(&self.body.children)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Element, CommitError> {
        find_in_mut(&mut self.body, id).ok_or_else(|| CommitError::MissingMount(id.to_string()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl UiTree for Document {
    fn append(&mut self, parent_id: &str, nodes: Vec<Node>) -> Result<(), CommitError> {
        let parent = self.find_mut(parent_id)?;
        parent.children.extend(nodes);
        Ok(())
    }

    fn replace_children(&mut self, parent_id: &str, nodes: Vec<Node>) -> Result<(), CommitError> {
        let parent = self.find_mut(parent_id)?;
        parent.children = nodes;
        Ok(())
    }
}

fn find_in<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.get_attr("id") == Some(id) {
        return Some(element);
    }
    element.child_elements().find_map(|child| find_in(child, id))
}

fn find_in_mut<'a>(element: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if element.get_attr("id") == Some(id) {
        return Some(element);
    }
    element
        .children
        .iter_mut()
        .filter_map(Node::as_element_mut)
        .find_map(|child| find_in_mut(child, id))
}
