//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree used to host custom elements: attributes, class
//! lists, selector queries, focus tracking and UI events.

mod classlist;
mod custom_elements;
pub mod dataset;
mod document;
mod dom_events;
mod interner;
mod node;
pub mod selector;
pub mod serialize;
mod tree;

pub use classlist::DOMTokenList;
pub use custom_elements::{CustomElementError, CustomElementRegistry};
pub use document::{Document, FocusTransition};
pub use dom_events::{UiEvent, UiEventType};
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::SelectorList;
pub use tree::{Children, DomTree};

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Position in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0} not found")]
    NotFound(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot insert {child} into {parent}: hierarchy request error")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0} is not a child of the target parent")]
    NotAChild(NodeId),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
