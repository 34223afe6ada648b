//! `<w:abstractNum>` — reusable list-formatting templates.

use wordml_oxml::{NodeId, Tree};

use crate::error::Result;
use crate::level::Level;
use crate::schema;

/// Handle to a `<w:abstractNum>` element.
///
/// Abstract definitions come from parsed documents; this model provides
/// no factory for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbstractNum(NodeId);

impl AbstractNum {
    pub(crate) fn from_node(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// The template's identifier, unique among its siblings.
    pub fn abstract_num_id(self, tree: &Tree) -> Result<u32> {
        Ok(tree.decimal_attribute(self.0, "w:abstractNumId")?)
    }

    /// Reassign the template's identifier.
    pub fn set_abstract_num_id(self, tree: &mut Tree, id: u32) -> Result<()> {
        tree.set_attribute(self.0, &schema::ABSTRACT_NUM, "w:abstractNumId", &id.to_string())?;
        Ok(())
    }

    /// The opaque numbering-set identifier from the `<w:nsid>` child.
    pub fn nsid(self, tree: &Tree) -> Result<&str> {
        let child = tree.required_singleton(self.0, &schema::ABSTRACT_NUM, "w:nsid")?;
        Ok(tree.required_attribute(child, "w:val")?)
    }

    /// The template kind from the `<w:multiLevelType>` child.
    pub fn multi_level_type(self, tree: &Tree) -> Result<&str> {
        let child = tree.required_singleton(self.0, &schema::ABSTRACT_NUM, "w:multiLevelType")?;
        Ok(tree.required_attribute(child, "w:val")?)
    }

    /// The template's level definitions, in document order.
    #[must_use]
    pub fn levels(self, tree: &Tree) -> Vec<Level> {
        tree.repeatable(self.0, schema::LVL.tag)
            .map(Level::from_node)
            .collect()
    }
}
