//! Accordion errors
//!
//! Every configuration problem is detected while mounting and is fatal for
//! that accordion.

use fos_dom::{CustomElementError, DomError, NodeId};

/// Accordion error
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    #[error("Accordion item {node} has no label")]
    MissingLabel { node: NodeId },

    #[error("Accordion item {node} has no id")]
    MissingId { node: NodeId },

    #[error("The id {0:?} is not a slug (letters and digits separated by single hyphens)")]
    InvalidId(String),

    #[error("The id {0:?} already exists in the document")]
    DuplicateId(String),

    #[error("<nav-accordion> children must be <nav-accordion-item>, found <{found}>")]
    NotAnItem { node: NodeId, found: String },

    #[error("<nav-accordion-item> {node} must be a child of <nav-accordion>, found {found}")]
    NotAnAccordion { node: NodeId, found: String },

    #[error("Expected <{expected}> at {node}, found {found}")]
    UnexpectedElement { node: NodeId, expected: &'static str, found: String },

    #[error("{count} items are declared expanded but the accordion does not allow multiple")]
    MultipleExpanded { count: usize },

    #[error("No accordion item at index {0}")]
    ItemNotFound(usize),

    #[error("No accordion item with id {0:?}")]
    UnknownItem(String),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    CustomElement(#[from] CustomElementError),

    #[error(transparent)]
    Parse(#[from] fos_html::ParseError),
}

impl AccordionError {
    /// Whether this error comes from invalid declarative markup
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingLabel { .. }
                | Self::MissingId { .. }
                | Self::InvalidId(_)
                | Self::DuplicateId(_)
                | Self::NotAnItem { .. }
                | Self::NotAnAccordion { .. }
                | Self::MultipleExpanded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors() {
        assert!(AccordionError::InvalidId("a_b".into()).is_configuration_error());
        assert!(AccordionError::MultipleExpanded { count: 2 }.is_configuration_error());
        assert!(!AccordionError::ItemNotFound(3).is_configuration_error());
        assert!(!AccordionError::Dom(DomError::InvalidSelector("?".into())).is_configuration_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AccordionError::DuplicateId("faq".into()).to_string(),
            "The id \"faq\" already exists in the document"
        );
        assert_eq!(
            AccordionError::NotAnItem { node: NodeId::NONE, found: "div".into() }.to_string(),
            "<nav-accordion> children must be <nav-accordion-item>, found <div>"
        );
    }
}
