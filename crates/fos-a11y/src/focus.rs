//! Focus Management
//!
//! Tab index values, the focusable-element selector set and roving focus
//! order for composite widgets.

use std::fmt;
use std::str::FromStr;

use crate::A11yError;

/// Selectors matching elements that take part in keyboard focus
pub const FOCUSABLE_SELECTORS: &[&str] = &[
    "a",
    r#"[role="checkbox"]"#,
    "[href]",
    "button:not([disabled])",
    "input:not([disabled])",
    "select:not([disabled])",
    "textarea:not([disabled])",
    r#"[tabindex]:not([tabindex="-1"])"#,
];

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Negative tabindex: focusable by script only
    NotFocusable,
    /// Zero or positive tabindex
    Sequential(i32),
}

impl TabIndex {
    /// In sequential order at its DOM position
    pub const REACHABLE: TabIndex = TabIndex::Sequential(0);

    /// Lenient parse: anything unparsable is not focusable
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or(Self::NotFocusable)
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }

    /// Attribute value for `tabindex`
    pub fn as_attribute(&self) -> String {
        match self {
            Self::NotFocusable => "-1".to_string(),
            Self::Sequential(n) => n.to_string(),
        }
    }
}

impl FromStr for TabIndex {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(n) if n < 0 => Ok(Self::NotFocusable),
            Ok(n) => Ok(Self::Sequential(n)),
            Err(_) => Err(A11yError::InvalidValue {
                attribute: "tabindex",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_attribute())
    }
}

/// Roving focus order over `len` entries, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusOrder {
    len: usize,
}

impl FocusOrder {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<usize> {
        (self.len > 0).then_some(0)
    }

    pub fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Entry after `current`; the last entry wraps to the first
    pub fn next(&self, current: usize) -> Option<usize> {
        if current >= self.len {
            return None;
        }
        Some(if current + 1 == self.len { 0 } else { current + 1 })
    }

    /// Entry before `current`; the first entry wraps to the last
    pub fn previous(&self, current: usize) -> Option<usize> {
        if current >= self.len {
            return None;
        }
        Some(if current == 0 { self.len - 1 } else { current - 1 })
    }
}
