//! fOS Accordion
//!
//! Accessible accordion built from two custom elements: `<nav-accordion>`
//! and its `<nav-accordion-item>` children. Items get a generated trigger
//! button and content region whose ARIA attributes always mirror the item's
//! expansion state. Keyboard navigation follows the WAI-ARIA accordion
//! pattern.

pub mod accordion;
mod error;
pub mod host;
pub mod item;
mod options;
mod registry;
mod slug;
mod snapshot;
mod state;

pub use accordion::Accordion;
pub use error::AccordionError;
pub use host::AccordionHost;
pub use item::{AccordionItem, ItemDeclaration};
pub use options::{AccordionOptions, ALLOW_MULTIPLE_ATTR, ALLOW_TOGGLE_ATTR, DISABLE_USER_EVENTS_ATTR};
pub use registry::{DocumentIds, IdRegistry};
pub use slug::{is_slug, ItemId};
pub use snapshot::{AccordionSnapshot, ItemSnapshot, PageSnapshot};
pub use state::{ExpandState, EXPANDED_ATTR};

use fos_dom::{CustomElementError, CustomElementRegistry};

/// Container element name
pub const ACCORDION_TAG: &str = "nav-accordion";
/// Item element name
pub const ITEM_TAG: &str = "nav-accordion-item";
/// Class set on the container while focus is inside it
pub const FOCUS_CLASS: &str = "focus";

/// Register both accordion elements
pub fn define_elements(registry: &mut CustomElementRegistry) -> Result<(), CustomElementError> {
    registry.define(ACCORDION_TAG)?;
    registry.define(ITEM_TAG)?;
    Ok(())
}
