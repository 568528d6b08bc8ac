//! Debug markup serializer.
//!
//! Dumps a subtree as indented HTML-ish markup. Attributes are emitted in
//! sorted order so output is deterministic; inline style is re-emitted as a
//! `style` attribute. This is a debugging aid, not an HTML writer: no
//! escaping is performed.

use crate::arena::Document;
use crate::error::Result;
use crate::types::{NodeId, NodeType};

/// Elements serialized without a closing tag when childless.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serialize the whole document (empty string when no root is set).
pub fn serialize(doc: &Document) -> Result<String> {
    match doc.root_id() {
        Some(root_id) => outer_html(doc, root_id),
        None => Ok(String::new()),
    }
}

/// Serialize one subtree.
pub fn outer_html(doc: &Document, node_id: NodeId) -> Result<String> {
    let mut output = String::with_capacity(1024);
    write_node(doc, node_id, 0, &mut output)?;
    Ok(output)
}

fn write_node(doc: &Document, node_id: NodeId, depth: usize, output: &mut String) -> Result<()> {
    let node = doc.get(node_id)?;
    let indent = "  ".repeat(depth);

    match node.node_type {
        NodeType::Element => {
            output.push_str(&indent);
            output.push('<');
            output.push_str(&node.node_name);
            write_attributes(doc, node_id, output)?;

            let is_void =
                VOID_ELEMENTS.contains(&node.node_name.as_str()) && node.children_ids.is_empty();
            output.push_str(">\n");
            if is_void {
                return Ok(());
            }

            for &child_id in &node.children_ids {
                write_node(doc, child_id, depth + 1, output)?;
            }

            output.push_str(&indent);
            output.push_str("</");
            output.push_str(&node.node_name);
            output.push_str(">\n");
        }
        NodeType::Text => {
            let text = node.node_value.trim();
            if !text.is_empty() {
                output.push_str(&indent);
                output.push_str(text);
                output.push('\n');
            }
        }
        NodeType::Comment => {
            output.push_str(&indent);
            output.push_str("<!-- ");
            output.push_str(node.node_value.trim());
            output.push_str(" -->\n");
        }
        NodeType::Document => {
            // Document nodes have no markup of their own
            for &child_id in &node.children_ids {
                write_node(doc, child_id, depth, output)?;
            }
        }
    }

    Ok(())
}

fn write_attributes(doc: &Document, node_id: NodeId, output: &mut String) -> Result<()> {
    let node = doc.get(node_id)?;

    let mut attributes: Vec<(&str, &str)> = node
        .attributes
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    attributes.sort_unstable();

    for (name, value) in attributes {
        output.push_str(&format!(" {}=\"{}\"", name, value));
    }

    let mut namespaced: Vec<(&str, &str, &str)> = node
        .ns_attributes
        .iter()
        .flat_map(|(ns, attributes)| {
            attributes
                .iter()
                .map(move |(name, value)| (ns.as_str(), name.as_str(), value.as_str()))
        })
        .collect();
    namespaced.sort_unstable();

    for (_, name, value) in namespaced {
        output.push_str(&format!(" {}=\"{}\"", name, value));
    }

    if !node.style.is_empty() {
        output.push_str(&format!(" style=\"{}\"", node.style.css_text()));
    }

    Ok(())
}
