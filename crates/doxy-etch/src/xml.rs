//! XML access layer
//!
//! Loads named Doxygen XML resources from a root directory and provides the
//! small set of lookups the extractors need. Documents are parsed with
//! `roxmltree`, which borrows from the loaded text, so a resource is loaded
//! first and parsed on demand.

use crate::diagnostics::{DoxyError, DoxyResult};
use roxmltree::{Document, Node};
use std::path::{Path, PathBuf};

/// Read-only access to the XML resources under one root directory
#[derive(Debug, Clone)]
pub struct XmlSource {
    root: PathBuf,
}

impl XmlSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a named resource
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Check whether a named resource exists
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Load a named resource
    pub fn load(&self, name: &str) -> DoxyResult<XmlResource> {
        let path = self.path(name);
        if !path.is_file() {
            return Err(DoxyError::MissingResource(path));
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(XmlResource { path, text })
    }
}

/// A loaded, not yet parsed, XML resource
#[derive(Debug, Clone)]
pub struct XmlResource {
    path: PathBuf,
    text: String,
}

impl XmlResource {
    /// Wrap in-memory XML text
    pub fn from_string(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Where the resource was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse into a document tree
    pub fn parse(&self) -> DoxyResult<Document<'_>> {
        Document::parse(&self.text).map_err(|e| DoxyError::xml(&self.path, e.to_string()))
    }
}

/// First direct child element named `name`
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(name))
}

/// All direct child elements named `name`
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |c| c.has_tag_name(name))
}

/// First direct child element named `name`, or a malformed-input error
pub fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> DoxyResult<Node<'a, 'input>> {
    child(node, name).ok_or_else(|| DoxyError::missing_element(name, describe(node)))
}

/// Attribute value, or a malformed-input error
pub fn required_attribute<'a>(node: Node<'a, '_>, name: &str) -> DoxyResult<&'a str> {
    node.attribute(name)
        .ok_or_else(|| DoxyError::missing_attribute(name, node.tag_name().name()))
}

/// Concatenated direct text children (element content is skipped)
pub fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

/// Concatenated text of every descendant text node, in document order
pub fn descendant_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

/// Short description of an element for error messages
fn describe(node: Node<'_, '_>) -> String {
    let tag = node.tag_name().name();
    match node.attribute("id") {
        Some(id) => format!("{} '{}'", tag, id),
        None if tag.is_empty() => "document".to_string(),
        None => tag.to_string(),
    }
}
