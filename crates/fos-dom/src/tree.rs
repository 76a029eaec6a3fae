//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; detaching only unlinks them, so a `NodeId` stays
//! valid for the lifetime of the tree.

use crate::selector::SelectorList;
use crate::{dataset, DOMTokenList, DomError, DomResult, ElementData, InternedString, Node, NodeId, StringInterner};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree containing only the document node
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(Node::document());
        Self {
            nodes,
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve an interned name
    pub fn resolve(&self, name: InternedString) -> &str {
        self.interner.get(name)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn element_data(&self, id: NodeId) -> DomResult<&ElementData> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    fn element_data_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Inclusive ancestor check
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Unlink a node from its parent. Detached nodes are left untouched.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Insert `child` before `reference` (or at the end when `reference` is NONE).
    /// The child is moved if it is already attached somewhere.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) -> DomResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if reference.is_valid() {
            if self.node(reference)?.parent != parent {
                return Err(DomError::NotAChild(reference));
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child)?;

        if reference.is_valid() {
            let prev = self.nodes[reference.index()].prev_sibling;
            {
                let node = &mut self.nodes[child.index()];
                node.parent = parent;
                node.prev_sibling = prev;
                node.next_sibling = reference;
            }
            self.nodes[reference.index()].prev_sibling = child;
            if prev.is_valid() {
                self.nodes[prev.index()].next_sibling = child;
            } else {
                self.nodes[parent.index()].first_child = child;
            }
        } else {
            let last = self.nodes[parent.index()].last_child;
            {
                let node = &mut self.nodes[child.index()];
                node.parent = parent;
                node.prev_sibling = last;
                node.next_sibling = NodeId::NONE;
            }
            if last.is_valid() {
                self.nodes[last.index()].next_sibling = child;
            } else {
                self.nodes[parent.index()].first_child = child;
            }
            self.nodes[parent.index()].last_child = child;
        }
        Ok(())
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, NodeId::NONE)
    }

    /// Insert a child as the first child
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let first = self.node(parent)?.first_child;
        self.insert_before(parent, child, first)
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Direct children that are elements
    pub fn element_children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// All descendants in document (pre-)order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).map(|(id, _)| id).collect();
        stack.reverse();

        while let Some(id) = stack.pop() {
            out.push(id);
            let before = stack.len();
            stack.extend(self.children(id).map(|(child, _)| child));
            stack[before..].reverse();
        }
        out
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    // ------------------------------------------------------------------
    // Elements & attributes
    // ------------------------------------------------------------------

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.interner.get(elem.name))
    }

    /// Check an element's tag name
    pub fn is_element_named(&self, id: NodeId, tag: &str) -> bool {
        self.tag_name(id).is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute, returning the previous value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> DomResult<Option<String>> {
        let name = self.interner.intern(name);
        Ok(self.element_data_mut(id)?.set_attr(name, value.into()))
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        match self.interner.lookup(name) {
            Some(name) => Ok(self.element_data_mut(id)?.remove_attr(name)),
            None => {
                self.element_data(id)?;
                Ok(None)
            }
        }
    }

    /// Attributes of an element as (name, value) pairs
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.get(id)
            .and_then(Node::as_element)
            .into_iter()
            .flat_map(move |elem| {
                elem.attrs
                    .iter()
                    .map(move |attr| (self.interner.get(attr.name), attr.value.as_str()))
            })
    }

    /// Parsed class attribute
    pub fn class_list(&self, id: NodeId) -> DOMTokenList {
        DOMTokenList::from_string(self.get_attribute(id, "class").unwrap_or(""))
    }

    pub fn has_class(&self, id: NodeId, token: &str) -> bool {
        self.class_list(id).contains(token)
    }

    pub fn add_class(&mut self, id: NodeId, token: &str) -> DomResult<()> {
        let mut list = self.class_list(id);
        if list.contains(token) {
            return Ok(());
        }
        list.add(&[token]);
        self.set_attribute(id, "class", list.value())?;
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, token: &str) -> DomResult<()> {
        let mut list = self.class_list(id);
        if !list.contains(token) {
            return Ok(());
        }
        list.remove(&[token]);
        self.set_attribute(id, "class", list.value())?;
        Ok(())
    }

    /// Set a `data-*` attribute from its camelCase dataset key
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) -> DomResult<()> {
        self.set_attribute(id, &dataset::attribute_name(key), value)?;
        Ok(())
    }

    /// Read a `data-*` attribute by its camelCase dataset key
    pub fn get_data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.get_attribute(id, &dataset::attribute_name(key))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Check if an element matches a selector list
    pub fn matches(&self, id: NodeId, selectors: &SelectorList) -> bool {
        selectors.matches(self, id)
    }

    /// All descendant elements of `root` matching `selectors`, in document order
    pub fn query_selector_all(&self, root: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| selectors.matches(self, id))
            .collect()
    }

    /// First descendant element of `root` matching `selectors`
    pub fn query_selector(&self, root: NodeId, selectors: &SelectorList) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| selectors.matches(self, id))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_ids(tree: &DomTree, parent: NodeId) -> Vec<NodeId> {
        tree.children(parent).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_append_and_siblings() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        assert_eq!(child_ids(&tree, ul), vec![a, b]);
        assert_eq!(tree.get(a).unwrap().next_sibling, b);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
        assert_eq!(tree.parent(a), Some(ul));
    }

    #[test]
    fn test_prepend_moves_existing_child() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("p");
        let b = tree.create_element("p");
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();

        tree.prepend_child(div, b).unwrap();
        assert_eq!(child_ids(&tree, div), vec![b, a]);
        assert_eq!(tree.get(div).unwrap().last_child, a);
    }

    #[test]
    fn test_move_between_parents() {
        let mut tree = DomTree::new();
        let from = tree.create_element("div");
        let to = tree.create_element("div");
        let text = tree.create_text("hello");
        tree.append_child(from, text).unwrap();

        tree.append_child(to, text).unwrap();
        assert!(child_ids(&tree, from).is_empty());
        assert_eq!(child_ids(&tree, to), vec![text]);
        assert_eq!(tree.text_content(to), "hello");
    }

    #[test]
    fn test_hierarchy_request() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
    }

    #[test]
    fn test_descendants_preorder() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let span = tree.create_element("span");
        let em = tree.create_element("em");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p).unwrap();
        tree.append_child(p, span).unwrap();
        tree.append_child(div, em).unwrap();

        assert_eq!(tree.descendants(tree.root()), vec![div, p, span, em]);
        assert!(tree.contains(div, span));
        assert!(!tree.contains(p, em));
    }

    #[test]
    fn test_attributes() {
        let mut tree = DomTree::new();
        let button = tree.create_element("BUTTON");
        assert_eq!(tree.tag_name(button), Some("button"));

        tree.set_attribute(button, "aria-expanded", "false").unwrap();
        assert_eq!(tree.get_attribute(button, "aria-expanded"), Some("false"));
        assert_eq!(
            tree.set_attribute(button, "aria-expanded", "true").unwrap(),
            Some("false".to_string())
        );

        assert_eq!(tree.remove_attribute(button, "aria-expanded").unwrap(), Some("true".to_string()));
        assert!(!tree.has_attribute(button, "aria-expanded"));
        assert_eq!(tree.remove_attribute(button, "never-interned").unwrap(), None);
    }

    #[test]
    fn test_attributes_on_text_fail() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        assert_eq!(tree.set_attribute(text, "id", "a"), Err(DomError::NotAnElement(text)));
    }

    #[test]
    fn test_class_helpers() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attribute(div, "class", "panel").unwrap();

        tree.add_class(div, "focus").unwrap();
        assert!(tree.has_class(div, "focus"));
        assert_eq!(tree.get_attribute(div, "class"), Some("panel focus"));

        tree.remove_class(div, "focus").unwrap();
        assert!(!tree.has_class(div, "focus"));
        assert_eq!(tree.get_attribute(div, "class"), Some("panel"));
    }

    #[test]
    fn test_dataset_helpers() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_data(div, "accordionItemSection", "").unwrap();
        assert!(tree.has_attribute(div, "data-accordion-item-section"));
        assert_eq!(tree.get_data(div, "accordionItemSection"), Some(""));
    }
}
