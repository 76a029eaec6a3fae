//! Selector matching
//!
//! A compound-selector subset of CSS: type and universal selectors, `#id`,
//! `.class`, `[attr]`, `[attr="value"]` and `:not(<simple>)`, combined into
//! comma-separated lists. Combinators are not supported.

use std::str::FromStr;

use crate::{DomError, DomResult, DomTree, NodeId};

/// Simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Tag(String),
    Id(String),
    Class(String),
    Attribute { name: String, value: Option<String> },
    Not(Box<SimpleSelector>),
}

impl SimpleSelector {
    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => tree.is_element_named(node, tag),
            Self::Id(id) => tree.get_attribute(node, "id") == Some(id.as_str()),
            Self::Class(class) => tree.has_class(node, class),
            Self::Attribute { name, value: None } => tree.has_attribute(node, name),
            Self::Attribute { name, value: Some(value) } => {
                tree.get_attribute(node, name) == Some(value.as_str())
            }
            Self::Not(inner) => !inner.matches(tree, node),
        }
    }
}

/// Sequence of simple selectors that must all match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.parts.iter().all(|part| part.matches(tree, node))
    }
}

/// Comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<CompoundSelector>,
}

impl SelectorList {
    /// Parse a selector list such as `a, button:not([disabled])`
    pub fn parse(input: &str) -> DomResult<Self> {
        let selectors = input
            .split(',')
            .map(|part| Cursor::new(part.trim()).compound())
            .collect::<DomResult<Vec<_>>>()?;
        Ok(Self { selectors })
    }

    /// Parse several selectors and join them into one list
    pub fn from_parts(parts: &[&str]) -> DomResult<Self> {
        Self::parse(&parts.join(", "))
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn selectors(&self) -> &[CompoundSelector] {
        &self.selectors
    }

    /// Only elements can match
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        if !tree.get(node).is_some_and(|n| n.is_element()) {
            return false;
        }
        self.selectors.iter().any(|s| s.matches(tree, node))
    }
}

impl FromStr for SelectorList {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Cursor<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self) -> DomError {
        DomError::InvalidSelector(self.source.to_string())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> DomResult<()> {
        if self.eat(expected) { Ok(()) } else { Err(self.error()) }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn ident(&mut self) -> DomResult<String> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn value(&mut self) -> DomResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != quote) {
                    self.pos += 1;
                }
                let value = self.chars[start..self.pos].iter().collect();
                self.expect(quote)?;
                Ok(value)
            }
            _ => self.ident(),
        }
    }

    /// Optional type/universal selector at the head of a compound
    fn head(&mut self) -> DomResult<Option<SimpleSelector>> {
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                Ok(Some(SimpleSelector::Universal))
            }
            Some(c) if is_ident_char(c) => Ok(Some(SimpleSelector::Tag(self.ident()?.to_ascii_lowercase()))),
            _ => Ok(None),
        }
    }

    fn simple(&mut self) -> DomResult<SimpleSelector> {
        match self.bump() {
            Some('#') => Ok(SimpleSelector::Id(self.ident()?)),
            Some('.') => Ok(SimpleSelector::Class(self.ident()?)),
            Some('[') => {
                self.skip_whitespace();
                let name = self.ident()?.to_ascii_lowercase();
                self.skip_whitespace();
                let value = if self.eat('=') {
                    self.skip_whitespace();
                    Some(self.value()?)
                } else {
                    None
                };
                self.skip_whitespace();
                self.expect(']')?;
                Ok(SimpleSelector::Attribute { name, value })
            }
            Some(':') => {
                let pseudo = self.ident()?;
                if !pseudo.eq_ignore_ascii_case("not") {
                    return Err(self.error());
                }
                self.expect('(')?;
                self.skip_whitespace();
                let inner = match self.head()? {
                    Some(head) => head,
                    None => self.simple()?,
                };
                self.skip_whitespace();
                self.expect(')')?;
                Ok(SimpleSelector::Not(Box::new(inner)))
            }
            _ => Err(self.error()),
        }
    }

    fn compound(mut self) -> DomResult<CompoundSelector> {
        let mut parts = Vec::new();
        if let Some(head) = self.head()? {
            parts.push(head);
        }
        while self.peek().is_some() {
            parts.push(self.simple()?);
        }
        if parts.is_empty() {
            return Err(self.error());
        }
        Ok(CompoundSelector { parts })
    }
}
