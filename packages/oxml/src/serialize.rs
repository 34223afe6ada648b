//! Serialize an element tree back to XML text.

use crate::tree::{NodeId, Tree};

/// Serialize a tree to UTF-8 XML with a standalone declaration.
///
/// Captured namespace declarations are emitted on the root element.
/// Returns only the declaration line when the tree has no root.
#[must_use]
pub fn serialize(tree: &Tree) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    if let Some(root) = tree.root() {
        write_element(tree, root, true, &mut out);
        out.push('\n');
    }
    out
}

fn write_element(tree: &Tree, node: NodeId, is_root: bool, out: &mut String) {
    out.push('<');
    out.push_str(tree.tag(node));

    if is_root {
        for (prefix, uri) in tree.namespaces() {
            out.push_str(" xmlns:");
            out.push_str(prefix);
            out.push_str("=\"");
            escape_into(uri, true, out);
            out.push('"');
        }
    }
    for (name, value) in tree.attributes(node) {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }

    let children = tree.children(node);
    let text = tree.text(node);
    if children.is_empty() && text.is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = text {
        escape_into(text, false, out);
    }
    for &child in children {
        write_element(tree, child, false, out);
    }
    out.push_str("</");
    out.push_str(tree.tag(node));
    out.push('>');
}

/// Append `value` with XML special characters escaped.
fn escape_into(value: &str, in_attribute: bool, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
