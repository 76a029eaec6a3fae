//! UI Events
//!
//! Click, keyboard and focus events delivered to element handlers.

use crate::NodeId;

/// UI event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEventType {
    Click,
    KeyDown,
    FocusIn,
    FocusOut,
}

impl UiEventType {
    /// DOM event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
        }
    }
}

/// UI event
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub event_type: UiEventType,
    pub target: NodeId,
    /// Other side of a focus change
    pub related_target: Option<NodeId>,
    /// `KeyboardEvent.code` for keydown events
    pub code: Option<String>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

impl UiEvent {
    fn new(event_type: UiEventType, target: NodeId, cancelable: bool) -> Self {
        Self {
            event_type,
            target,
            related_target: None,
            code: None,
            bubbles: true,
            cancelable,
            default_prevented: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(UiEventType::Click, target, true)
    }

    pub fn key_down(target: NodeId, code: &str) -> Self {
        let mut event = Self::new(UiEventType::KeyDown, target, true);
        event.code = Some(code.to_string());
        event
    }

    pub fn focus_in(target: NodeId, related: Option<NodeId>) -> Self {
        let mut event = Self::new(UiEventType::FocusIn, target, false);
        event.related_target = related;
        event
    }

    pub fn focus_out(target: NodeId, related: Option<NodeId>) -> Self {
        let mut event = Self::new(UiEventType::FocusOut, target, false);
        event.related_target = related;
        event
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Prevent default action (no-op for non-cancelable events)
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
