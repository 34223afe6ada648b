//! `<w:numPr>` — numbering properties applied to a paragraph.

use wordml_oxml::{NodeId, Tree};

use crate::error::Result;
use crate::schema;

/// Handle to a `<w:numPr>` element, attaching a paragraph to a concrete
/// numbering instance at a given level.
///
/// Both children are optional singletons with upsert semantics: the first
/// set creates the child in schema position, later sets update its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingProperties(NodeId);

impl NumberingProperties {
    /// Create a detached `<w:numPr>` element.
    pub fn create(tree: &mut Tree) -> Self {
        Self(tree.new_element(schema::NUM_PR.tag))
    }

    /// Wrap an existing `<w:numPr>` node, e.g. one found inside a parsed
    /// paragraph-properties element.
    #[must_use]
    pub fn from_node(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// The referenced level index, if set.
    pub fn ilvl(self, tree: &Tree) -> Result<Option<u32>> {
        match tree.optional_singleton(self.0, &schema::NUM_PR, "w:ilvl")? {
            Some(child) => Ok(Some(tree.decimal_attribute(child, "w:val")?)),
            None => Ok(None),
        }
    }

    /// The referenced concrete instance's numId, if set.
    pub fn num_id(self, tree: &Tree) -> Result<Option<u32>> {
        match tree.optional_singleton(self.0, &schema::NUM_PR, "w:numId")? {
            Some(child) => Ok(Some(tree.decimal_attribute(child, "w:val")?)),
            None => Ok(None),
        }
    }

    /// Set the level index, creating the `<w:ilvl>` child on first use.
    pub fn set_ilvl(self, tree: &mut Tree, val: u32) -> Result<()> {
        let child = tree.get_or_create_singleton(self.0, &schema::NUM_PR, "w:ilvl")?;
        tree.set_attribute(child, &schema::ILVL_REF, "w:val", &val.to_string())?;
        Ok(())
    }

    /// Set the instance reference, creating the `<w:numId>` child on first use.
    pub fn set_num_id(self, tree: &mut Tree, val: u32) -> Result<()> {
        let child = tree.get_or_create_singleton(self.0, &schema::NUM_PR, "w:numId")?;
        tree.set_attribute(child, &schema::NUM_ID_REF, "w:val", &val.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unset_properties_read_as_none() {
        let mut tree = Tree::new();
        let props = NumberingProperties::create(&mut tree);
        assert_eq!(props.ilvl(&tree).unwrap(), None);
        assert_eq!(props.num_id(&tree).unwrap(), None);
    }

    #[test]
    fn test_set_ilvl_twice_keeps_one_child() {
        let mut tree = Tree::new();
        let props = NumberingProperties::create(&mut tree);
        props.set_ilvl(&mut tree, 1).unwrap();
        props.set_ilvl(&mut tree, 3).unwrap();

        assert_eq!(props.ilvl(&tree).unwrap(), Some(3));
        assert_eq!(tree.children(props.node()).len(), 1);
    }

    #[test]
    fn test_ilvl_precedes_num_id_regardless_of_set_order() {
        let mut tree = Tree::new();
        let props = NumberingProperties::create(&mut tree);
        props.set_num_id(&mut tree, 7).unwrap();
        props.set_ilvl(&mut tree, 0).unwrap();

        let tags: Vec<&str> = tree
            .children(props.node())
            .iter()
            .map(|&child| tree.tag(child))
            .collect();
        assert_eq!(tags, vec!["w:ilvl", "w:numId"]);
        assert_eq!(props.num_id(&tree).unwrap(), Some(7));
    }
}
