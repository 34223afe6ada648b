//! Arena-backed mutable element tree.
//!
//! Elements live in one [`Tree`] arena and are addressed by [`NodeId`]
//! handles. A child is owned by exactly one parent; removing a child
//! unlinks its whole subtree from the document (arena slots are not
//! reclaimed, matching the short single-document lifetime of a part).

/// Handle to one element in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    text: Option<String>,
}

/// One mutable XML element tree, e.g. the content of a single part.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Element>,
    namespaces: Vec<(String, String)>,
    root: Option<NodeId>,
}

impl Tree {
    /// Create an empty tree with no root element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new detached element with the given qualified tag name.
    pub fn new_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
            text: None,
        });
        id
    }

    /// The document root element, if one has been designated.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Designate the document root element.
    pub fn set_root(&mut self, node: NodeId) {
        self.root = Some(node);
    }

    /// Record a namespace declaration emitted on the root at serialization.
    pub fn declare_namespace(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.namespaces.push((prefix.into(), uri.into()));
    }

    /// Namespace declarations in declaration order.
    #[must_use]
    pub fn namespaces(&self) -> &[(String, String)] {
        &self.namespaces
    }

    /// Qualified tag name of an element.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    /// Text content of an element, if any.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].text.as_deref()
    }

    /// Set the text content of an element.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = Some(text.into());
    }

    /// Direct children of an element, in document order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// The parent an element is attached to, if any.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Attach a detached element as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none());
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Attach a detached element at `index` among the children of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none());
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
    }

    /// Detach `child` (and its subtree) from `parent`.
    ///
    /// Returns `false` when `child` is not a direct child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        let Some(index) = children.iter().position(|&c| c == child) else {
            return false;
        };
        children.remove(index);
        self.nodes[child.0].parent = None;
        true
    }

    /// Raw attribute value by qualified name.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes of an element, in assignment order.
    #[must_use]
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        &self.nodes[node.0].attributes
    }

    /// Set an attribute without consulting any schema.
    ///
    /// Validated assignment lives in [`crate::node`]; this is the raw
    /// primitive it builds on, also used when copying parsed input.
    pub fn set_attribute_raw(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let attributes = &mut self.nodes[node.0].attributes;
        if let Some(slot) = attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.into();
        } else {
            attributes.push((name, value.into()));
        }
    }
}
