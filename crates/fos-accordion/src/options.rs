//! Container options
//!
//! Read once from the `<nav-accordion>` attributes when the container is
//! mounted.

use fos_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

/// `allow-multiple` attribute
pub const ALLOW_MULTIPLE_ATTR: &str = "allow-multiple";
/// `allow-toggle` attribute
pub const ALLOW_TOGGLE_ATTR: &str = "allow-toggle";
/// `disable-user-events` attribute
pub const DISABLE_USER_EVENTS_ATTR: &str = "disable-user-events";

/// Expansion policy of one accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionOptions {
    /// Several items may be expanded at once
    #[serde(rename = "allow-multiple")]
    pub multiple: bool,
    /// Declared `allow-toggle`; see [`AccordionOptions::allow_toggle`]
    #[serde(rename = "allow-toggle")]
    pub toggle: bool,
    /// Clicks and activation keys are ignored
    #[serde(rename = "disable-user-events")]
    pub user_events_disabled: bool,
}

impl AccordionOptions {
    /// Boolean attributes count when present, whatever their value
    pub fn from_element(tree: &DomTree, element: NodeId) -> Self {
        Self {
            multiple: tree.has_attribute(element, ALLOW_MULTIPLE_ATTR),
            toggle: tree.has_attribute(element, ALLOW_TOGGLE_ATTR),
            user_events_disabled: tree.has_attribute(element, DISABLE_USER_EVENTS_ATTR),
        }
    }

    pub fn allow_multiple(&self) -> bool {
        self.multiple
    }

    /// Multiple expansion implies toggling
    pub fn allow_toggle(&self) -> bool {
        self.multiple || self.toggle
    }

    pub fn allow_user_events(&self) -> bool {
        !self.user_events_disabled
    }
}
