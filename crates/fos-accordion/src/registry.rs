//! Document id registry
//!
//! Answers "is this id already used in the document?" while items are
//! validated. Each accepted item claims its id so a later duplicate fails.

use std::collections::HashSet;

use fos_dom::{Document, NodeId};

/// Id uniqueness oracle
pub trait IdRegistry {
    /// Whether the id is already used
    fn is_taken(&self, id: &str) -> bool;

    /// Record the id as used
    fn claim(&mut self, id: &str);
}

/// Ids collected from a document
#[derive(Debug, Clone, Default)]
pub struct DocumentIds {
    taken: HashSet<String>,
}

impl DocumentIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every connected id, ignoring elements for which `skip` holds
    pub fn scan(document: &Document, skip: impl Fn(NodeId) -> bool) -> Self {
        let tree = document.tree();
        let taken = tree
            .descendants(tree.root())
            .into_iter()
            .filter(|&node| !skip(node))
            .filter_map(|node| tree.get_attribute(node, "id"))
            .map(String::from)
            .collect();
        Self { taken }
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

impl IdRegistry for DocumentIds {
    fn is_taken(&self, id: &str) -> bool {
        self.taken.contains(id)
    }

    fn claim(&mut self, id: &str) {
        self.taken.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_and_claim() {
        let mut doc = Document::new("about:blank").unwrap();
        let body = doc.body();
        let tree = doc.tree_mut();
        let header = tree.create_element("header");
        let item = tree.create_element("nav-accordion-item");
        tree.set_attribute(header, "id", "top").unwrap();
        tree.set_attribute(item, "id", "faq").unwrap();
        tree.append_child(body, header).unwrap();
        tree.append_child(body, item).unwrap();

        let mut ids = DocumentIds::scan(&doc, |node| node == item);
        assert_eq!(ids.len(), 1);
        assert!(ids.is_taken("top"));
        assert!(!ids.is_taken("faq"));

        ids.claim("faq");
        assert!(ids.is_taken("faq"));
    }

    #[test]
    fn test_detached_ids_ignored() {
        let mut doc = Document::new("about:blank").unwrap();
        let loose = doc.tree_mut().create_element("div");
        doc.tree_mut().set_attribute(loose, "id", "loose").unwrap();
        let ids = DocumentIds::scan(&doc, |_| false);
        assert!(ids.is_empty());
    }
}
