//! Item ids
//!
//! Item ids are slugs: ASCII letters and digits in runs separated by single
//! hyphens. Generated trigger and region ids derive from them.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::AccordionError;

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("slug pattern is valid"));

/// Check whether a string is a slug
pub fn is_slug(value: &str) -> bool {
    SLUG.is_match(value)
}

/// Validated item id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(value: &str) -> Result<Self, AccordionError> {
        if is_slug(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AccordionError::InvalidId(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the generated trigger button
    pub fn trigger_id(&self) -> String {
        format!("label-{}", self.0)
    }

    /// Id of the generated content region
    pub fn region_id(&self) -> String {
        format!("section-{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = AccordionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
