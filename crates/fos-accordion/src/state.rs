//! Expansion state
//!
//! The single source of truth for an item. Every visible attribute of the
//! item, its trigger and its region is a projection of [`ExpandState`].

use fos_a11y::{AriaState, TabIndex};
use serde::{Deserialize, Serialize};

use crate::AccordionOptions;

/// `expanded` attribute on `<nav-accordion-item>`
pub const EXPANDED_ATTR: &str = "expanded";

/// Item expansion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    /// Only the literal `"true"` means expanded
    pub fn from_attribute(value: Option<&str>) -> Self {
        Self::from(value == Some("true"))
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Value reflected to the `expanded` attribute
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Collapsed => "false",
            Self::Expanded => "true",
        }
    }

    /// `aria-expanded` on the trigger
    pub fn trigger_state(self) -> AriaState {
        AriaState::Expanded(self.is_expanded())
    }

    /// `aria-hidden` on the region
    pub fn region_state(self) -> AriaState {
        AriaState::Hidden(!self.is_expanded())
    }

    /// `tabindex` of focusable content inside the region
    pub fn content_tab_index(self) -> TabIndex {
        match self {
            Self::Collapsed => TabIndex::NotFocusable,
            Self::Expanded => TabIndex::REACHABLE,
        }
    }

    /// `aria-disabled` on the trigger: set while the user cannot act on it
    pub fn trigger_disabled(self, options: &AccordionOptions) -> bool {
        !options.allow_user_events() || (!options.allow_toggle() && self.is_expanded())
    }
}

impl From<bool> for ExpandState {
    fn from(expanded: bool) -> Self {
        if expanded { Self::Expanded } else { Self::Collapsed }
    }
}
