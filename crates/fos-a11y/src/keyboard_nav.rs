//! Keyboard Navigation
//!
//! Maps `KeyboardEvent.code` values to navigation actions of composite
//! widgets.

use std::collections::HashMap;

/// Navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Space / Enter on a trigger
    Activate,
    Previous,
    Next,
    First,
    Last,
}

/// Key code registry
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<String, NavAction>,
}

impl KeyMap {
    /// Empty key map
    pub fn new() -> Self {
        Self::default()
    }

    /// WAI-ARIA accordion bindings
    pub fn accordion() -> Self {
        let mut map = Self::new();
        map.bind("Space", NavAction::Activate);
        map.bind("Enter", NavAction::Activate);
        map.bind("ArrowUp", NavAction::Previous);
        map.bind("ArrowDown", NavAction::Next);
        map.bind("Home", NavAction::First);
        map.bind("End", NavAction::Last);
        map
    }

    /// Bind a key code, replacing any previous binding
    pub fn bind(&mut self, code: &str, action: NavAction) {
        self.bindings.insert(code.to_string(), action);
    }

    pub fn unbind(&mut self, code: &str) -> Option<NavAction> {
        self.bindings.remove(code)
    }

    /// Action for a key code, if bound
    pub fn action_for(&self, code: &str) -> Option<NavAction> {
        self.bindings.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_bindings() {
        let map = KeyMap::accordion();
        assert_eq!(map.len(), 6);
        assert_eq!(map.action_for("Space"), Some(NavAction::Activate));
        assert_eq!(map.action_for("Enter"), Some(NavAction::Activate));
        assert_eq!(map.action_for("ArrowUp"), Some(NavAction::Previous));
        assert_eq!(map.action_for("ArrowDown"), Some(NavAction::Next));
        assert_eq!(map.action_for("Home"), Some(NavAction::First));
        assert_eq!(map.action_for("End"), Some(NavAction::Last));
        assert_eq!(map.action_for("Tab"), None);
    }

    #[test]
    fn test_custom_binding() {
        let mut map = KeyMap::accordion();
        map.bind("NumpadEnter", NavAction::Activate);
        assert_eq!(map.action_for("NumpadEnter"), Some(NavAction::Activate));
        assert_eq!(map.unbind("Home"), Some(NavAction::First));
        assert_eq!(map.action_for("Home"), None);
    }
}
