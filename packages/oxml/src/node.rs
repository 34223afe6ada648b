//! Schema-constrained access to tree nodes.
//!
//! These operations enforce the cardinality and ordering contracts declared
//! in an [`ElementSchema`]: required singletons must be present, optional
//! singletons are created at most once, and repeatable children are
//! inserted immediately before the first sibling named in their successor
//! set. Attribute assignment is validated by the declared simple type at
//! the call site; a rejected value leaves the previous one untouched.

use crate::error::{OxmlError, Result};
use crate::schema::ElementSchema;
use crate::tree::{NodeId, Tree};

impl Tree {
    /// First direct child with the given qualified tag name.
    #[must_use]
    pub fn find_child(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.tag(child) == tag)
    }

    /// The required singleton child declared by `schema`.
    pub fn required_singleton(
        &self,
        parent: NodeId,
        schema: &ElementSchema,
        tag: &str,
    ) -> Result<NodeId> {
        schema.child_rule(tag)?;
        self.find_child(parent, tag)
            .ok_or_else(|| OxmlError::SchemaViolation {
                element: schema.tag.to_string(),
                child: tag.to_string(),
            })
    }

    /// The optional singleton child declared by `schema`, if present.
    pub fn optional_singleton(
        &self,
        parent: NodeId,
        schema: &ElementSchema,
        tag: &str,
    ) -> Result<Option<NodeId>> {
        schema.child_rule(tag)?;
        Ok(self.find_child(parent, tag))
    }

    /// The optional singleton child, created in schema position on first use.
    pub fn get_or_create_singleton(
        &mut self,
        parent: NodeId,
        schema: &ElementSchema,
        tag: &str,
    ) -> Result<NodeId> {
        if let Some(existing) = self.find_child(parent, tag) {
            return Ok(existing);
        }
        tracing::debug!(element = schema.tag, child = tag, "Creating singleton child");
        let child = self.new_element(tag);
        self.insert_in_order(parent, schema, child)?;
        Ok(child)
    }

    /// Direct children with the given tag, in document order.
    pub fn repeatable<'a>(
        &'a self,
        parent: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent)
            .iter()
            .copied()
            .filter(move |&child| self.tag(child) == tag)
    }

    /// Insert a detached element under `parent` at its schema position.
    ///
    /// The new child goes immediately before the first existing sibling
    /// whose tag appears in the child's successor set, or last when none
    /// does. Same-kind repeatable siblings therefore keep insertion order.
    pub fn insert_in_order(
        &mut self,
        parent: NodeId,
        schema: &ElementSchema,
        child: NodeId,
    ) -> Result<NodeId> {
        let rule = schema.child_rule(self.tag(child))?;
        let position = self
            .children(parent)
            .iter()
            .position(|&sibling| {
                let tag = self.tag(sibling);
                rule.successors.iter().any(|&successor| successor == tag)
            })
            .unwrap_or_else(|| self.children(parent).len());
        self.insert_child(parent, position, child);
        Ok(child)
    }

    /// Set an attribute after validating the value against its declared type.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        schema: &ElementSchema,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let rule = schema.attribute_rule(name)?;
        if !rule.ty.is_valid(value) {
            return Err(OxmlError::InvalidAttributeValue {
                attribute: name.to_string(),
                value: value.to_string(),
                expected: rule.ty.expected(),
            });
        }
        self.set_attribute_raw(node, name, value);
        Ok(())
    }

    /// A required attribute's value.
    pub fn required_attribute(&self, node: NodeId, name: &str) -> Result<&str> {
        self.attribute(node, name)
            .ok_or_else(|| OxmlError::MissingAttribute {
                element: self.tag(node).to_string(),
                attribute: name.to_string(),
            })
    }

    /// A required attribute's value parsed as a non-negative integer.
    pub fn decimal_attribute(&self, node: NodeId, name: &str) -> Result<u32> {
        let value = self.required_attribute(node, name)?;
        value
            .parse()
            .map_err(|_| OxmlError::InvalidAttributeValue {
                attribute: name.to_string(),
                value: value.to_string(),
                expected: "a non-negative integer",
            })
    }

    /// Attribute values of matching direct children, in document order.
    ///
    /// Children lacking the attribute are skipped. This is the structural
    /// query primitive behind identifier allocation and lookup.
    #[must_use]
    pub fn child_attribute_values(
        &self,
        parent: NodeId,
        child_tag: &str,
        attribute: &str,
    ) -> Vec<&str> {
        self.repeatable(parent, child_tag)
            .filter_map(|child| self.attribute(child, attribute))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeRule, Cardinality, ChildRule};
    use crate::simple_types::AttributeType;
    use pretty_assertions::assert_eq;

    const PARENT: ElementSchema = ElementSchema {
        tag: "w:parent",
        children: &[
            ChildRule {
                tag: "w:head",
                cardinality: Cardinality::OneAndOnlyOne,
                successors: &["w:item", "w:tail"],
            },
            ChildRule {
                tag: "w:item",
                cardinality: Cardinality::ZeroOrMore,
                successors: &["w:tail"],
            },
            ChildRule {
                tag: "w:tail",
                cardinality: Cardinality::ZeroOrOne,
                successors: &[],
            },
        ],
        attributes: &[AttributeRule {
            name: "w:id",
            ty: AttributeType::DecimalNumber,
        }],
    };

    #[test]
    fn test_required_singleton_present() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let head = tree.new_element("w:head");
        tree.append_child(parent, head);

        assert_eq!(tree.required_singleton(parent, &PARENT, "w:head").unwrap(), head);
    }

    #[test]
    fn test_required_singleton_absent_is_schema_violation() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let err = tree.required_singleton(parent, &PARENT, "w:head").unwrap_err();
        assert!(matches!(err, OxmlError::SchemaViolation { .. }));
    }

    #[test]
    fn test_optional_singleton_absent() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        assert_eq!(tree.optional_singleton(parent, &PARENT, "w:tail").unwrap(), None);
    }

    #[test]
    fn test_get_or_create_singleton_is_idempotent() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let first = tree.get_or_create_singleton(parent, &PARENT, "w:tail").unwrap();
        let second = tree.get_or_create_singleton(parent, &PARENT, "w:tail").unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.children(parent).len(), 1);
    }

    #[test]
    fn test_insert_in_order_respects_successors() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let tail = tree.new_element("w:tail");
        tree.append_child(parent, tail);

        // items sort before the tail, after each other
        let first = tree.new_element("w:item");
        tree.insert_in_order(parent, &PARENT, first).unwrap();
        let second = tree.new_element("w:item");
        tree.insert_in_order(parent, &PARENT, second).unwrap();
        // the head sorts before everything
        let head = tree.new_element("w:head");
        tree.insert_in_order(parent, &PARENT, head).unwrap();

        assert_eq!(tree.children(parent), &[head, first, second, tail]);
    }

    #[test]
    fn test_insert_in_order_undeclared_child() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let stray = tree.new_element("w:stray");
        let err = tree.insert_in_order(parent, &PARENT, stray).unwrap_err();
        assert!(matches!(err, OxmlError::UndeclaredChild { .. }));
    }

    #[test]
    fn test_set_attribute_validated() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        tree.set_attribute(parent, &PARENT, "w:id", "7").unwrap();
        assert_eq!(tree.attribute(parent, "w:id"), Some("7"));
    }

    #[test]
    fn test_set_attribute_invalid_leaves_previous_value() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        tree.set_attribute(parent, &PARENT, "w:id", "7").unwrap();

        let err = tree.set_attribute(parent, &PARENT, "w:id", "-3").unwrap_err();
        assert!(matches!(err, OxmlError::InvalidAttributeValue { .. }));
        let err = tree.set_attribute(parent, &PARENT, "w:id", "abc").unwrap_err();
        assert!(matches!(err, OxmlError::InvalidAttributeValue { .. }));

        assert_eq!(tree.attribute(parent, "w:id"), Some("7"));
    }

    #[test]
    fn test_decimal_attribute_missing() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        let err = tree.decimal_attribute(parent, "w:id").unwrap_err();
        assert!(matches!(err, OxmlError::MissingAttribute { .. }));
    }

    #[test]
    fn test_child_attribute_values_in_document_order() {
        let mut tree = Tree::new();
        let parent = tree.new_element("w:parent");
        for id in ["4", "1", "2"] {
            let item = tree.new_element("w:item");
            tree.set_attribute_raw(item, "w:id", id);
            tree.append_child(parent, item);
        }
        // a child without the attribute is skipped
        let bare = tree.new_element("w:item");
        tree.append_child(parent, bare);

        assert_eq!(
            tree.child_attribute_values(parent, "w:item", "w:id"),
            vec!["4", "1", "2"]
        );
    }
}
