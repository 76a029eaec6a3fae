//! fOS Accessibility
//!
//! Accessibility building blocks for fOS widgets:
//! - ARIA roles and states, projected to and parsed from attributes
//! - Tab index handling and the focusable-element selector set
//! - Roving focus order with wrap-around
//! - Keyboard code to navigation action mapping

pub mod aria;
pub mod focus;
pub mod keyboard_nav;

pub use aria::{AriaAttributes, AriaRole, AriaState};
pub use focus::{FocusOrder, TabIndex, FOCUSABLE_SELECTORS};
pub use keyboard_nav::{KeyMap, NavAction};

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Invalid value {value:?} for {attribute}")]
    InvalidValue { attribute: &'static str, value: String },
}
