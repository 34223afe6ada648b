//! Parse XML text into a mutable element tree.
//!
//! Qualified names are reconstructed as `prefix:local` from the source
//! document's own namespace declarations, which are captured on the tree
//! for re-emission at serialization. Only element structure, attributes
//! and direct text content are kept; comments and processing instructions
//! are dropped.

use roxmltree::{Attribute, Document, Node};

use crate::error::Result;
use crate::tree::{NodeId, Tree};

/// Parse an XML document into a [`Tree`] with its root designated.
pub fn parse(xml: &str) -> Result<Tree> {
    let doc = Document::parse(xml)?;
    let source_root = doc.root_element();

    let mut tree = Tree::new();
    for ns in source_root.namespaces() {
        if let Some(prefix) = ns.name() {
            tree.declare_namespace(prefix, ns.uri());
        }
    }
    let root = copy_element(&mut tree, source_root);
    tree.set_root(root);
    Ok(tree)
}

/// Qualified `prefix:local` tag name of a source element.
fn qualified_tag(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{prefix}:{}", tag.name()),
        None => tag.name().to_string(),
    }
}

/// Qualified `prefix:local` name of a source attribute.
fn qualified_attribute(node: Node<'_, '_>, attribute: &Attribute<'_, '_>) -> String {
    match attribute
        .namespace()
        .and_then(|uri| node.lookup_prefix(uri))
    {
        Some(prefix) => format!("{prefix}:{}", attribute.name()),
        None => attribute.name().to_string(),
    }
}

fn copy_element(tree: &mut Tree, source: Node<'_, '_>) -> NodeId {
    let node = tree.new_element(qualified_tag(source));

    for attribute in source.attributes() {
        let name = qualified_attribute(source, &attribute);
        tree.set_attribute_raw(node, name, attribute.value());
    }

    let text: String = source
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    let text = text.trim();
    if !text.is_empty() {
        tree.set_text(node, text);
    }

    for child in source.children().filter(Node::is_element) {
        let copied = copy_element(tree, child);
        tree.append_child(node, copied);
    }
    node
}
