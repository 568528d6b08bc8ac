//! Core node definitions.
//!
//! An element carries four kinds of mutable state: attributes, namespaced
//! attributes, an IDL-style property bag, and an inline style declaration.
//! Class state is never cached: it lives in the `class` attribute and the
//! class helpers reparse it on every call.

use crate::error::{DomError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Node identifier (index into the document arena).
///
/// u32 allows 4 billion nodes, enough for any document.
pub type NodeId = u32;

/// Node type codes from the DOM specification (the subset this model
/// instantiates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Element => "element",
            NodeType::Text => "text",
            NodeType::Comment => "comment",
            NodeType::Document => "document",
        }
    }
}

/// Inline style declaration: an insertion-ordered list of camelCase
/// property/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    entries: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property, `None` when it is not set.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property, replacing an existing entry in place (so declaration
    /// order is stable under updates).
    pub fn set_property(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(entry, _)| entry == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove a property, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let position = self.entries.iter().position(|(entry, _)| entry == name)?;
        Some(self.entries.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Serialized form, `name: value; name: value`.
    pub fn css_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single document node.
///
/// Field layout follows the arena design: indices instead of pointers,
/// SmallVec for the common few-children case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub node_id: NodeId,
    pub node_type: NodeType,

    /// Lowercased tag name for elements, `#text`/`#comment`/`#document`
    /// otherwise.
    pub node_name: String,

    /// Text or comment content; empty for elements.
    pub node_value: String,

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,

    // Element state
    pub attributes: AHashMap<String, String>,
    /// namespace URI -> attribute name -> value
    pub ns_attributes: AHashMap<String, AHashMap<String, String>>,
    /// IDL-style element state (`checked`, `value`, `selected`, ...).
    pub properties: AHashMap<String, Value>,
    pub style: StyleDeclaration,
}

impl Node {
    pub(crate) fn new(node_id: NodeId, node_type: NodeType, node_name: String) -> Self {
        Self {
            node_id,
            node_type,
            node_name,
            node_value: String::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
            attributes: AHashMap::new(),
            ns_attributes: AHashMap::new(),
            properties: AHashMap::new(),
            style: StyleDeclaration::new(),
        }
    }

    /// Tag name for element nodes.
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Get a namespaced attribute value.
    pub fn attribute_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.ns_attributes
            .get(namespace)
            .and_then(|attributes| attributes.get(name))
            .map(String::as_str)
    }

    /// Set a namespaced attribute. The namespace URI must be non-empty.
    pub fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) -> Result<()> {
        if namespace.is_empty() {
            return Err(DomError::InvalidNamespace(namespace.to_string()));
        }
        self.ns_attributes
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove_attribute_ns(&mut self, namespace: &str, name: &str) -> Option<String> {
        self.ns_attributes
            .get_mut(namespace)
            .and_then(|attributes| attributes.remove(name))
    }

    /// Get a property value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    /// Class names, parsed from the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes().any(|class| class == name)
    }

    /// Add a class; a no-op when already present.
    pub fn add_class(&mut self, name: &str) {
        if self.has_class(name) {
            return;
        }
        let mut classes = self.attribute("class").unwrap_or("").to_string();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(name);
        self.set_attribute("class", &classes);
    }

    /// Remove a class; a no-op when absent.
    pub fn remove_class(&mut self, name: &str) {
        if !self.has_class(name) {
            return;
        }
        let remaining = self
            .classes()
            .filter(|class| *class != name)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("class", &remaining);
    }
}
