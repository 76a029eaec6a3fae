//! Serializable view of mounted accordions, read back from the DOM.

use fos_a11y::AriaAttributes;
use fos_dom::DomTree;
use serde::Serialize;

use crate::item::AccordionItem;
use crate::{AccordionOptions, ExpandState, ItemId};

/// One item as assistive technology would see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub label: String,
    pub state: ExpandState,
    /// `aria-expanded` on the trigger
    pub trigger_expanded: Option<bool>,
    /// `aria-disabled` on the trigger
    pub trigger_disabled: bool,
    /// `aria-hidden` on the region
    pub region_hidden: Option<bool>,
}

impl ItemSnapshot {
    pub fn capture(tree: &DomTree, item: &AccordionItem) -> Self {
        let trigger = AriaAttributes::from_attributes(tree.attributes(item.trigger()));
        let region = AriaAttributes::from_attributes(tree.attributes(item.region()));
        Self {
            id: item.id().clone(),
            label: item.label().to_string(),
            state: item.state(),
            trigger_expanded: trigger.is_expanded(),
            trigger_disabled: trigger.is_disabled(),
            region_hidden: region.is_hidden(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccordionSnapshot {
    pub options: AccordionOptions,
    /// Container carries the `focus` class
    pub focus_within: bool,
    pub items: Vec<ItemSnapshot>,
}

/// Every accordion on a page plus the focused element's id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub focused: Option<String>,
    pub accordions: Vec<AccordionSnapshot>,
}
