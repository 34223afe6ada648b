//! Declarative element schemas.
//!
//! Each element kind publishes a static [`ElementSchema`]: the permitted
//! child tags with their cardinality and successor set, and the permitted
//! attributes with their value types. The schema-constrained operations in
//! [`crate::node`] consult these tables instead of hard-coding per-element
//! behavior.

use crate::error::{OxmlError, Result};
use crate::simple_types::AttributeType;

/// How many times a child tag may appear under its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one, present from construction onward.
    OneAndOnlyOne,
    /// At most one.
    ZeroOrOne,
    /// Any number, in insertion order among themselves.
    ZeroOrMore,
}

/// Declaration of one permitted child tag.
#[derive(Debug)]
pub struct ChildRule {
    /// Qualified tag name of the child (e.g. `w:lvlOverride`).
    pub tag: &'static str,

    pub cardinality: Cardinality,

    /// Sibling tags that must come after this child when it is present.
    /// A new child is inserted immediately before the first existing
    /// sibling whose tag appears here, or at the end when none does.
    pub successors: &'static [&'static str],
}

/// Declaration of one permitted attribute.
#[derive(Debug)]
pub struct AttributeRule {
    /// Qualified attribute name (e.g. `w:numId`).
    pub name: &'static str,

    pub ty: AttributeType,
}

/// Full schema for one element kind.
#[derive(Debug)]
pub struct ElementSchema {
    /// Qualified tag name of the element this schema describes.
    pub tag: &'static str,

    pub children: &'static [ChildRule],
    pub attributes: &'static [AttributeRule],
}

impl ElementSchema {
    /// Look up the rule for a child tag.
    pub fn child_rule(&self, tag: &str) -> Result<&ChildRule> {
        self.children
            .iter()
            .find(|rule| rule.tag == tag)
            .ok_or_else(|| OxmlError::UndeclaredChild {
                element: self.tag.to_string(),
                child: tag.to_string(),
            })
    }

    /// Look up the rule for an attribute name.
    pub fn attribute_rule(&self, name: &str) -> Result<&AttributeRule> {
        self.attributes
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| OxmlError::UndeclaredAttribute {
                element: self.tag.to_string(),
                attribute: name.to_string(),
            })
    }
}
