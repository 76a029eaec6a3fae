//! ARIA Support
//!
//! ARIA roles and the states/properties used by disclosure widgets.

use std::fmt;
use std::str::FromStr;

use crate::A11yError;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    /// Landmark for a labelled content section
    Region,
}

impl AriaRole {
    /// Attribute value for `role`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
        }
    }
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(Self::Region),
            _ => Err(A11yError::InvalidRole(s.to_string())),
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ARIA state/property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Disabled(bool),
    Expanded(bool),
    Hidden(bool),
    Label(String),
    /// IDREF list
    LabelledBy(Vec<String>),
    /// IDREF list
    Controls(Vec<String>),
}

impl AriaState {
    /// Attribute name, e.g. `aria-expanded`
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Disabled(_) => "aria-disabled",
            Self::Expanded(_) => "aria-expanded",
            Self::Hidden(_) => "aria-hidden",
            Self::Label(_) => "aria-label",
            Self::LabelledBy(_) => "aria-labelledby",
            Self::Controls(_) => "aria-controls",
        }
    }

    /// Serialized attribute value
    pub fn attribute_value(&self) -> String {
        match self {
            Self::Disabled(b) | Self::Expanded(b) | Self::Hidden(b) => b.to_string(),
            Self::Label(label) => label.clone(),
            Self::LabelledBy(ids) | Self::Controls(ids) => ids.join(" "),
        }
    }

    /// Parse from an `aria-*` attribute
    pub fn parse(attribute: &str, value: &str) -> Option<Self> {
        let ids = || -> Vec<String> { value.split_whitespace().map(String::from).collect() };
        Some(match attribute.strip_prefix("aria-")? {
            "disabled" => Self::Disabled(value == "true"),
            "expanded" => Self::Expanded(value == "true"),
            "hidden" => Self::Hidden(value == "true"),
            "label" => Self::Label(value.to_string()),
            "labelledby" => Self::LabelledBy(ids()),
            "controls" => Self::Controls(ids()),
            _ => return None,
        })
    }
}

/// ARIA role and states of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    pub role: Option<AriaRole>,
    pub states: Vec<AriaState>,
}

impl AriaAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect role and known `aria-*` states from (name, value) pairs
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut aria = Self::new();
        for (name, value) in attrs {
            if name == "role" {
                aria.role = value.parse().ok();
            } else if let Some(state) = AriaState::parse(name, value) {
                aria.states.push(state);
            }
        }
        aria
    }

    fn flag(&self, pick: fn(&AriaState) -> Option<bool>) -> Option<bool> {
        self.states.iter().find_map(pick)
    }

    pub fn is_expanded(&self) -> Option<bool> {
        self.flag(|s| match s {
            AriaState::Expanded(b) => Some(*b),
            _ => None,
        })
    }

    pub fn is_hidden(&self) -> Option<bool> {
        self.flag(|s| match s {
            AriaState::Hidden(b) => Some(*b),
            _ => None,
        })
    }

    /// Absent `aria-disabled` means enabled
    pub fn is_disabled(&self) -> bool {
        self.flag(|s| match s {
            AriaState::Disabled(b) => Some(*b),
            _ => None,
        })
        .unwrap_or(false)
    }

    /// IDREFs of `aria-controls`
    pub fn controls(&self) -> &[String] {
        self.states
            .iter()
            .find_map(|s| match s {
                AriaState::Controls(ids) => Some(ids.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// IDREFs of `aria-labelledby`
    pub fn labelled_by(&self) -> &[String] {
        self.states
            .iter()
            .find_map(|s| match s {
                AriaState::LabelledBy(ids) => Some(ids.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
