//! Build a document from a JSON description.
//!
//! The description is `{"root": <node>}` where a node is one of:
//!
//! ```json
//! "bare text"
//! {"text": "a text node"}
//! {"comment": "a comment node"}
//! {"tag": "input", "attributes": {"type": "checkbox"}, "style": {"color": "red"}, "children": []}
//! ```
//!
//! Unknown keys are rejected. Nesting beyond `DocumentConfig::max_depth` is
//! rejected. Element state properties (`checked`, `selected`, `multiple`,
//! `value`) are seeded from the matching attributes, the way a browser
//! initializes element state from markup; later attribute writes do not
//! re-seed them.

use crate::arena::{Document, DocumentConfig};
use crate::error::{DomError, Result};
use crate::types::{Node, NodeId};
use serde_json::Value;

/// Parse a document description with the default config.
pub fn from_json(description: &Value) -> Result<Document> {
    from_json_with_config(description, DocumentConfig::default())
}

/// Parse a document description. The root node is wrapped in a `#document`
/// node, which becomes the document root.
pub fn from_json_with_config(description: &Value, config: DocumentConfig) -> Result<Document> {
    let root = description
        .get("root")
        .ok_or_else(|| DomError::BadDocument("missing 'root'".to_string()))?;

    let mut doc = Document::with_config(config);
    let document_id = doc.create_document_node();
    let root_id = parse_node(&mut doc, root, 1)?;
    doc.append_child(document_id, root_id)?;
    doc.set_root(document_id)?;

    tracing::debug!("parsed document: {} nodes", doc.len());
    Ok(doc)
}

fn parse_node(doc: &mut Document, description: &Value, depth: usize) -> Result<NodeId> {
    let max = doc.config().max_depth;
    if depth > max {
        return Err(DomError::MaxDepthExceeded {
            current: depth,
            max,
        });
    }

    if let Some(text) = description.as_str() {
        return Ok(doc.create_text_node(text));
    }

    let object = description.as_object().ok_or_else(|| {
        DomError::BadDocument(format!("expected a string or object node, got {}", description))
    })?;

    if let Some(text) = object.get("text") {
        require_keys(object, &["text"])?;
        let text = text
            .as_str()
            .ok_or_else(|| DomError::BadDocument("'text' must be a string".to_string()))?;
        return Ok(doc.create_text_node(text));
    }

    if let Some(comment) = object.get("comment") {
        require_keys(object, &["comment"])?;
        let comment = comment
            .as_str()
            .ok_or_else(|| DomError::BadDocument("'comment' must be a string".to_string()))?;
        return Ok(doc.create_comment(comment));
    }

    require_keys(object, &["tag", "attributes", "style", "children"])?;
    let tag = object
        .get("tag")
        .and_then(Value::as_str)
        .ok_or_else(|| DomError::BadDocument("node object needs 'tag' or 'text'".to_string()))?;

    let node_id = doc.create_element(tag);

    if let Some(attributes) = object.get("attributes") {
        let attributes = attributes
            .as_object()
            .ok_or_else(|| DomError::BadDocument("'attributes' must be an object".to_string()))?;
        let node = doc.get_mut(node_id)?;
        for (name, value) in attributes {
            let value = value.as_str().ok_or_else(|| {
                DomError::BadDocument(format!("attribute {:?} must be a string", name))
            })?;
            node.set_attribute(name, value);
        }
    }

    if let Some(style) = object.get("style") {
        let style = style
            .as_object()
            .ok_or_else(|| DomError::BadDocument("'style' must be an object".to_string()))?;
        let node = doc.get_mut(node_id)?;
        for (name, value) in style {
            let value = value.as_str().ok_or_else(|| {
                DomError::BadDocument(format!("style property {:?} must be a string", name))
            })?;
            node.style.set_property(name, value);
        }
    }

    seed_state_properties(doc.get_mut(node_id)?);

    if let Some(children) = object.get("children") {
        let children = children
            .as_array()
            .ok_or_else(|| DomError::BadDocument("'children' must be an array".to_string()))?;
        for child in children {
            let child_id = parse_node(doc, child, depth + 1)?;
            doc.append_child(node_id, child_id)?;
        }
    }

    Ok(node_id)
}

fn require_keys(object: &serde_json::Map<String, Value>, allowed: &[&str]) -> Result<()> {
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(DomError::BadDocument(format!("unknown key {:?}", key)));
        }
    }
    Ok(())
}

/// Seed the property bag from markup attributes.
fn seed_state_properties(node: &mut Node) {
    if node.attribute("checked").is_some() {
        node.set_property("checked", Value::Bool(true));
    }
    if node.attribute("selected").is_some() {
        node.set_property("selected", Value::Bool(true));
    }
    if node.attribute("multiple").is_some() {
        node.set_property("multiple", Value::Bool(true));
    }
    if let Some(value) = node.attribute("value") {
        let value = value.to_string();
        node.set_property("value", Value::String(value));
    }
}
