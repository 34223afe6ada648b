//! The numbering part root: `<w:numbering>`, numId allocation and lookup.

use wordml_oxml::{parse, serialize, NodeId, Tree};

use crate::abstract_num::AbstractNum;
use crate::error::{NumberingError, Result};
use crate::num::Num;
use crate::schema;

/// The whole numbering definition set of a document (`numbering.xml`).
///
/// Owns the element tree. Entity handles ([`AbstractNum`], [`Num`], ...)
/// are plain node references into this tree; their accessors take the
/// tree explicitly via [`NumberingPart::tree`] / [`NumberingPart::tree_mut`].
#[derive(Debug)]
pub struct NumberingPart {
    tree: Tree,
    root: NodeId,
}

impl NumberingPart {
    /// Create an empty numbering part.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Tree::new();
        tree.declare_namespace(schema::W_PREFIX, schema::W_NS);
        let root = tree.new_element(schema::NUMBERING.tag);
        tree.set_root(root);
        Self { tree, root }
    }

    /// Parse a numbering part from XML text.
    ///
    /// # Errors
    /// Fails with [`NumberingError::UnexpectedRoot`] when the document's
    /// root element is not `<w:numbering>`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let tree = parse(xml)?;
        let root = tree
            .root()
            .ok_or_else(|| NumberingError::UnexpectedRoot {
                tag: String::new(),
            })?;
        if tree.tag(root) != schema::NUMBERING.tag {
            return Err(NumberingError::UnexpectedRoot {
                tag: tree.tag(root).to_string(),
            });
        }
        Ok(Self { tree, root })
    }

    /// Serialize the part back to XML text.
    #[must_use]
    pub fn to_xml(&self) -> String {
        serialize(&self.tree)
    }

    /// The element tree of this part.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to the element tree of this part.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The `<w:numbering>` root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// All abstract numbering definitions, in document order.
    #[must_use]
    pub fn abstract_nums(&self) -> Vec<AbstractNum> {
        self.tree
            .repeatable(self.root, schema::ABSTRACT_NUM.tag)
            .map(AbstractNum::from_node)
            .collect()
    }

    /// All concrete numbering instances, in document order.
    #[must_use]
    pub fn nums(&self) -> Vec<Num> {
        self.tree
            .repeatable(self.root, schema::NUM.tag)
            .map(Num::from_node)
            .collect()
    }

    /// Insert a prebuilt `<w:abstractNum>` element in schema order, before
    /// any `<w:num>` children regardless of when those were added.
    pub fn insert_abstract_num(&mut self, node: NodeId) -> Result<AbstractNum> {
        self.tree
            .insert_in_order(self.root, &schema::NUMBERING, node)?;
        Ok(AbstractNum::from_node(node))
    }

    /// Add a concrete numbering instance referencing `abstract_num_id`.
    ///
    /// Allocates the lowest free numId, builds the `<w:num>` with its
    /// `<w:abstractNumId>` reference child, and inserts it in schema order.
    /// Whether `abstract_num_id` resolves to an existing
    /// `<w:abstractNum>` is not checked here; that consistency rule
    /// belongs to the caller.
    pub fn add_num(&mut self, abstract_num_id: u32) -> Result<Num> {
        let num_id = self.next_num_id();
        let num = Num::build(&mut self.tree, num_id, abstract_num_id)?;
        self.tree
            .insert_in_order(self.root, &schema::NUMBERING, num.node())?;
        tracing::debug!(num_id, abstract_num_id, "Added concrete numbering instance");
        Ok(num)
    }

    /// The concrete numbering instance carrying `num_id`.
    ///
    /// # Errors
    /// Fails with [`NumberingError::NumNotFound`] when no `<w:num>` child
    /// has a matching numId.
    pub fn num_with_id(&self, num_id: u32) -> Result<Num> {
        self.tree
            .repeatable(self.root, schema::NUM.tag)
            .find(|&node| {
                self.tree
                    .attribute(node, "w:numId")
                    .and_then(|value| value.parse::<u32>().ok())
                    == Some(num_id)
            })
            .map(Num::from_node)
            .ok_or(NumberingError::NumNotFound { num_id })
    }

    /// The lowest positive numId unused by any `<w:num>` child.
    ///
    /// Fills gaps left by removed instances instead of monotonically
    /// incrementing: existing ids {1, 2, 4} yield 3.
    fn next_num_id(&self) -> u32 {
        let taken: Vec<u32> = self
            .tree
            .child_attribute_values(self.root, schema::NUM.tag, "w:numId")
            .iter()
            .filter_map(|value| value.parse().ok())
            .collect();
        let mut candidate = 1;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        candidate
    }
}

impl Default for NumberingPart {
    fn default() -> Self {
        Self::new()
    }
}
