//! `<w:num>` — concrete numbering instances.

use wordml_oxml::{NodeId, Tree};

use crate::error::Result;
use crate::level::LevelOverride;
use crate::schema;

/// Handle to a `<w:num>` element: a usable list definition bound to one
/// abstract template, optionally overriding specific levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Num(NodeId);

impl Num {
    pub(crate) fn from_node(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// Build a detached `<w:num>` carrying `num_id` and a
    /// `<w:abstractNumId>` reference child valued `abstract_num_id`.
    ///
    /// The subtree is complete before any caller attaches it, so a failed
    /// validation never leaves a half-built instance in the document.
    pub(crate) fn build(tree: &mut Tree, num_id: u32, abstract_num_id: u32) -> Result<Self> {
        let node = tree.new_element(schema::NUM.tag);
        tree.set_attribute(node, &schema::NUM, "w:numId", &num_id.to_string())?;

        let reference = tree.new_element(schema::ABSTRACT_NUM_ID_REF.tag);
        tree.set_attribute(
            reference,
            &schema::ABSTRACT_NUM_ID_REF,
            "w:val",
            &abstract_num_id.to_string(),
        )?;
        tree.append_child(node, reference);
        Ok(Self(node))
    }

    /// The instance's own numId.
    pub fn num_id(self, tree: &Tree) -> Result<u32> {
        Ok(tree.decimal_attribute(self.0, "w:numId")?)
    }

    /// The abstractNumId of the template this instance is bound to.
    pub fn abstract_num_id(self, tree: &Tree) -> Result<u32> {
        let reference = tree.required_singleton(self.0, &schema::NUM, "w:abstractNumId")?;
        Ok(tree.decimal_attribute(reference, "w:val")?)
    }

    /// The instance's level overrides, in document order.
    #[must_use]
    pub fn level_overrides(self, tree: &Tree) -> Vec<LevelOverride> {
        tree.repeatable(self.0, schema::LVL_OVERRIDE.tag)
            .map(LevelOverride::from_node)
            .collect()
    }

    /// Add a `<w:lvlOverride>` for level `ilvl`.
    ///
    /// A `start` value is materialized as a `<w:startOverride>` child.
    /// `num_fmt` is accepted for forward compatibility but not yet
    /// written: a format override needs a full `<w:lvl>` redefinition
    /// child, which this model does not build. Whether `ilvl` duplicates
    /// an existing override is not checked; sibling uniqueness is a
    /// referential rule left to callers.
    pub fn add_level_override(
        self,
        tree: &mut Tree,
        ilvl: u32,
        start: Option<u32>,
        num_fmt: Option<&str>,
    ) -> Result<LevelOverride> {
        let node = tree.new_element(schema::LVL_OVERRIDE.tag);
        tree.set_attribute(node, &schema::LVL_OVERRIDE, "w:ilvl", &ilvl.to_string())?;

        let over = LevelOverride::from_node(node);
        if let Some(start) = start {
            over.add_start_override(tree, start)?;
        }
        if num_fmt.is_some() {
            tracing::warn!(ilvl, "Ignoring num_fmt: level redefinitions are not materialized");
        }

        tree.insert_in_order(self.0, &schema::NUM, node)?;
        tracing::debug!(ilvl, "Added level override");
        Ok(over)
    }
}
