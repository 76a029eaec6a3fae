//! Custom Elements
//!
//! Registry of defined custom element names and upgrade candidate lookup.

use std::collections::HashSet;

use crate::{DomTree, NodeId};

/// Custom element registry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomElementError {
    #[error("Invalid custom element name: {0}")]
    InvalidName(String),

    #[error("Custom element already defined: {0}")]
    AlreadyDefined(String),
}

/// Custom elements registry
#[derive(Debug, Default)]
pub struct CustomElementRegistry {
    definitions: HashSet<String>,
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a custom element name
    pub fn define(&mut self, name: &str) -> Result<(), CustomElementError> {
        if !Self::is_valid_name(name) {
            return Err(CustomElementError::InvalidName(name.to_string()));
        }
        if !self.definitions.insert(name.to_string()) {
            return Err(CustomElementError::AlreadyDefined(name.to_string()));
        }
        tracing::debug!("defined custom element <{}>", name);
        Ok(())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Descendants of `root` whose tag is defined, in document order
    pub fn upgrade_candidates(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        tree.descendants(root)
            .into_iter()
            .filter(|&id| tree.tag_name(id).is_some_and(|tag| self.is_defined(tag)))
            .collect()
    }

    /// Validate custom element name
    fn is_valid_name(name: &str) -> bool {
        // Must contain hyphen
        if !name.contains('-') {
            return false;
        }

        // Must start with lowercase letter
        if !name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
            return false;
        }

        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return false;
        }

        let reserved = [
            "annotation-xml", "color-profile", "font-face", "font-face-src",
            "font-face-uri", "font-face-format", "font-face-name", "missing-glyph",
        ];
        !reserved.contains(&name)
    }
}
