//! `<w:lvl>` level definitions and `<w:lvlOverride>` per-instance overrides.

use wordml_oxml::{NodeId, Tree};

use crate::error::Result;
use crate::schema;

/// Handle to a `<w:lvl>` element: one indentation level's default
/// formatting inside an abstract template. Levels come from parsed
/// documents; this model provides no factory for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(NodeId);

impl Level {
    pub(crate) fn from_node(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// The level index, unique within the parent template.
    pub fn ilvl(self, tree: &Tree) -> Result<u32> {
        Ok(tree.decimal_attribute(self.0, "w:ilvl")?)
    }

    /// The first value used at this level, from the `<w:start>` child.
    pub fn start(self, tree: &Tree) -> Result<u32> {
        let child = tree.required_singleton(self.0, &schema::LVL, "w:start")?;
        Ok(tree.decimal_attribute(child, "w:val")?)
    }

    /// The number format, from the `<w:numFmt>` child.
    pub fn number_format(self, tree: &Tree) -> Result<&str> {
        let child = tree.required_singleton(self.0, &schema::LVL, "w:numFmt")?;
        Ok(tree.required_attribute(child, "w:val")?)
    }
}

/// Handle to a `<w:lvlOverride>` element: a per-instance replacement of
/// one level's starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOverride(NodeId);

impl LevelOverride {
    pub(crate) fn from_node(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// The overridden level's index.
    pub fn ilvl(self, tree: &Tree) -> Result<u32> {
        Ok(tree.decimal_attribute(self.0, "w:ilvl")?)
    }

    /// The overriding start value, when a `<w:startOverride>` is present.
    pub fn start_override(self, tree: &Tree) -> Result<Option<u32>> {
        match tree.optional_singleton(self.0, &schema::LVL_OVERRIDE, "w:startOverride")? {
            Some(child) => Ok(Some(tree.decimal_attribute(child, "w:val")?)),
            None => Ok(None),
        }
    }

    /// Create or update the `<w:startOverride>` child with `val`.
    ///
    /// A second call updates the existing child in place; the override
    /// never carries two of them.
    pub fn add_start_override(self, tree: &mut Tree, val: u32) -> Result<NodeId> {
        let child = tree.get_or_create_singleton(self.0, &schema::LVL_OVERRIDE, "w:startOverride")?;
        tree.set_attribute(child, &schema::START_OVERRIDE, "w:val", &val.to_string())?;
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::NumberingPart;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_start_override_twice_updates_in_place() {
        let mut part = NumberingPart::new();
        let num = part.add_num(0).unwrap();
        let over = num
            .add_level_override(part.tree_mut(), 2, Some(5), None)
            .unwrap();

        let first = over.add_start_override(part.tree_mut(), 8).unwrap();
        let second = over.add_start_override(part.tree_mut(), 11).unwrap();

        assert_eq!(first, second);
        assert_eq!(over.start_override(part.tree()).unwrap(), Some(11));
        assert_eq!(part.tree().children(over.node()).len(), 1);
    }

    #[test]
    fn test_level_accessors_from_parsed_template() {
        let xml = concat!(
            r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            r#"<w:abstractNum w:abstractNumId="0">"#,
            r#"<w:nsid w:val="FFFFFF89"/><w:multiLevelType w:val="singleLevel"/>"#,
            r#"<w:lvl w:ilvl="0"><w:start w:val="3"/><w:numFmt w:val="lowerRoman"/></w:lvl>"#,
            r#"</w:abstractNum>"#,
            r#"</w:numbering>"#
        );
        let part = NumberingPart::from_xml(xml).unwrap();
        let level = part.abstract_nums()[0].levels(part.tree())[0];

        assert_eq!(level.ilvl(part.tree()).unwrap(), 0);
        assert_eq!(level.start(part.tree()).unwrap(), 3);
        assert_eq!(level.number_format(part.tree()).unwrap(), "lowerRoman");
    }
}
