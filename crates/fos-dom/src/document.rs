//! Document - High-level document API
//!
//! Wraps the tree with the cached `<body>` element, id lookups and the
//! focused element.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Focus change produced by [`Document::focus`] and [`Document::blur`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTransition {
    pub previous: Option<NodeId>,
    pub current: Option<NodeId>,
}

impl FocusTransition {
    /// Whether focus actually moved
    pub fn is_change(&self) -> bool {
        self.previous != self.current
    }
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    url: String,
    html_element: NodeId,
    body_element: NodeId,
    focused: Option<NodeId>,
}

impl Document {
    /// Create a document with an `<html><head></head><body></body></html>` skeleton
    pub fn new(url: &str) -> DomResult<Self> {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        tree.append_child(NodeId::ROOT, html)?;
        tree.append_child(html, head)?;
        tree.append_child(html, body)?;

        Ok(Self {
            tree,
            url: url.to_string(),
            html_element: html,
            body_element: body,
            focused: None,
        })
    }

    /// Adopt an already-built tree (e.g. from the HTML parser)
    pub fn from_tree(tree: DomTree, url: &str) -> Self {
        let mut document = Self {
            tree,
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
        };
        document.finalize();
        document
    }

    /// Locate the cached `<html>` and `<body>` elements
    fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self
            .tree
            .element_children(root)
            .find(|&id| self.tree.is_element_named(id, "html"))
            .unwrap_or(NodeId::NONE);
        self.body_element = self
            .tree
            .element_children(self.html_element)
            .find(|&id| self.tree.is_element_named(id, "body"))
            .unwrap_or(NodeId::NONE);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `<html>` element (NONE if absent)
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// `<body>` element (NONE if absent)
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.tree.contains(self.tree.root(), node)
    }

    /// First connected element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| self.tree.get_attribute(node, "id") == Some(id))
    }

    /// Every connected element carrying the given id
    pub fn elements_with_id(&self, id: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter(|&node| self.tree.get_attribute(node, "id") == Some(id))
            .collect()
    }

    /// Currently focused element
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus to an element
    pub fn focus(&mut self, node: NodeId) -> DomResult<FocusTransition> {
        if self.tree.tag_name(node).is_none() {
            return Err(DomError::NotAnElement(node));
        }
        let previous = self.focused.replace(node);
        tracing::trace!("focus {:?} -> {}", previous, node);
        Ok(FocusTransition {
            previous,
            current: Some(node),
        })
    }

    /// Clear focus
    pub fn blur(&mut self) -> FocusTransition {
        FocusTransition {
            previous: self.focused.take(),
            current: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Document {
        Document::new("about:blank").unwrap()
    }

    #[test]
    fn test_skeleton() {
        let doc = blank();
        assert!(doc.body().is_valid());
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
        assert_eq!(doc.tree().tag_name(doc.document_element()), Some("html"));
        assert_eq!(doc.tree().parent(doc.document_element()), Some(NodeId::ROOT));
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.tree().element_children(doc.document_element()).count(), 2);
        assert_eq!(doc.url(), "about:blank");
    }

    #[test]
    fn test_id_lookup() {
        let mut doc = blank();
        let body = doc.body();
        let tree = doc.tree_mut();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let detached = tree.create_element("div");
        tree.set_attribute(a, "id", "faq").unwrap();
        tree.set_attribute(b, "id", "faq").unwrap();
        tree.set_attribute(detached, "id", "faq").unwrap();
        tree.append_child(body, a).unwrap();
        tree.append_child(body, b).unwrap();

        assert_eq!(doc.get_element_by_id("faq"), Some(a));
        assert_eq!(doc.elements_with_id("faq"), vec![a, b]);
        assert!(!doc.is_connected(detached));
    }

    #[test]
    fn test_focus_transitions() {
        let mut doc = blank();
        let body = doc.body();
        let button = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(body, button).unwrap();

        let first = doc.focus(button).unwrap();
        assert_eq!(first.previous, None);
        assert!(first.is_change());

        let again = doc.focus(button).unwrap();
        assert!(!again.is_change());

        let blurred = doc.blur();
        assert_eq!(blurred.previous, Some(button));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_focus_requires_element() {
        let mut doc = blank();
        let text = doc.tree_mut().create_text("x");
        assert_eq!(doc.focus(text), Err(DomError::NotAnElement(text)));
    }
}
