//! Element-type-aware value access.
//!
//! [`element_type`] classifies an element into a logical input type; [`get`]
//! and [`set`] branch on that classification. Checkbox and radio map to
//! checked state plus an optional `value` attribute, selects map to the set
//! of selected options, everything else maps to the `value` property.

use ahash::AHashSet;
use dom::{Document, Node, NodeId, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Logical input type of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalType {
    Select,
    SelectMultiple,
    Checkbox,
    Radio,
    /// Lowercased input-type or tag name (`text`, `textarea`, `button`, ...).
    Other(String),
}

impl LogicalType {
    pub fn as_str(&self) -> &str {
        match self {
            LogicalType::Select => "select",
            LogicalType::SelectMultiple => "select-multiple",
            LogicalType::Checkbox => "checkbox",
            LogicalType::Radio => "radio",
            LogicalType::Other(name) => name,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value read from or written to an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
    Null,
}

impl ElementValue {
    /// JS-style truthiness: `false`, an empty string, an empty list, and
    /// null are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ElementValue::Bool(b) => *b,
            ElementValue::Text(s) => !s.is_empty(),
            ElementValue::List(items) => !items.is_empty(),
            ElementValue::Null => false,
        }
    }

    /// String form used when matching option values and filling text inputs.
    fn to_text(&self) -> String {
        match self {
            ElementValue::Bool(b) => b.to_string(),
            ElementValue::Text(s) => s.clone(),
            ElementValue::List(items) => items.first().cloned().unwrap_or_default(),
            ElementValue::Null => String::new(),
        }
    }
}

impl From<bool> for ElementValue {
    fn from(value: bool) -> Self {
        ElementValue::Bool(value)
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        ElementValue::Text(value.to_string())
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        ElementValue::Text(value)
    }
}

impl From<Vec<String>> for ElementValue {
    fn from(values: Vec<String>) -> Self {
        ElementValue::List(values)
    }
}

impl From<&[&str]> for ElementValue {
    fn from(values: &[&str]) -> Self {
        ElementValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Classify an element into its logical input type.
pub fn element_type(doc: &Document, id: NodeId) -> Result<LogicalType> {
    let node = doc.element(id)?;
    Ok(match node.node_name.as_str() {
        "select" => {
            if is_multiple(node) {
                LogicalType::SelectMultiple
            } else {
                LogicalType::Select
            }
        }
        "input" => {
            let kind = node
                .attribute("type")
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "text".to_string());
            match kind.as_str() {
                "checkbox" => LogicalType::Checkbox,
                "radio" => LogicalType::Radio,
                _ => LogicalType::Other(kind),
            }
        }
        tag => LogicalType::Other(tag.to_string()),
    })
}

/// Read an element's value according to its logical type.
pub fn get(doc: &Document, id: NodeId) -> Result<ElementValue> {
    match element_type(doc, id)? {
        LogicalType::Checkbox | LogicalType::Radio => {
            let node = doc.element(id)?;
            if !is_checked(node) {
                return Ok(ElementValue::Bool(false));
            }
            Ok(match node.attribute("value") {
                Some(value) => ElementValue::Text(value.to_string()),
                None => ElementValue::Bool(true),
            })
        }
        LogicalType::Select => {
            let selected = selected_option_values(doc, id)?;
            Ok(selected
                .into_iter()
                .next()
                .map(ElementValue::Text)
                .unwrap_or(ElementValue::Null))
        }
        LogicalType::SelectMultiple => Ok(ElementValue::List(selected_option_values(doc, id)?)),
        LogicalType::Other(_) => {
            let node = doc.element(id)?;
            Ok(ElementValue::Text(match node.property("value") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            }))
        }
    }
}

/// Write an element's value according to its logical type.
pub fn set(doc: &mut Document, id: NodeId, value: &ElementValue) -> Result<()> {
    match element_type(doc, id)? {
        LogicalType::Checkbox | LogicalType::Radio => {
            doc.element_mut(id)?
                .set_property("checked", Value::Bool(value.is_truthy()));
            Ok(())
        }
        LogicalType::Select => {
            let target = value.to_text();
            let mut found = false;
            for option_id in option_ids(doc, id)? {
                let matches = !found && option_value(doc, option_id)? == target;
                found |= matches;
                doc.get_mut(option_id)?
                    .set_property("selected", Value::Bool(matches));
            }
            Ok(())
        }
        LogicalType::SelectMultiple => {
            let requested: AHashSet<String> = match value {
                ElementValue::List(items) => items.iter().cloned().collect(),
                ElementValue::Null => AHashSet::new(),
                other => std::iter::once(other.to_text()).collect(),
            };
            let options = option_ids(doc, id)?;
            tracing::trace!(
                "syncing {} options against {} requested values",
                options.len(),
                requested.len()
            );
            for option_id in options {
                let selected = requested.contains(&option_value(doc, option_id)?);
                doc.get_mut(option_id)?
                    .set_property("selected", Value::Bool(selected));
            }
            Ok(())
        }
        LogicalType::Other(_) => {
            let text = value.to_text();
            doc.element_mut(id)?
                .set_property("value", Value::String(text));
            Ok(())
        }
    }
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_checked(node: &Node) -> bool {
    node.property("checked").map(value_is_truthy).unwrap_or(false)
}

fn is_multiple(node: &Node) -> bool {
    node.property("multiple").map(value_is_truthy).unwrap_or(false)
        || node.attribute("multiple").is_some()
}

/// Option elements of a select, in document order (depth-first, so optgroup
/// nesting is included).
fn option_ids(doc: &Document, select_id: NodeId) -> Result<Vec<NodeId>> {
    let mut ids = Vec::new();
    doc.traverse_df(select_id, |node| {
        if node.is_element() && node.node_name == "option" {
            ids.push(node.node_id);
        }
        Ok(())
    })?;
    Ok(ids)
}

/// An option's submission value: the `value` attribute, falling back to the
/// option's text content.
fn option_value(doc: &Document, option_id: NodeId) -> Result<String> {
    let node = doc.get(option_id)?;
    if let Some(value) = node.attribute("value") {
        return Ok(value.to_string());
    }
    doc.text_content(option_id)
}

fn selected_option_values(doc: &Document, select_id: NodeId) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for option_id in option_ids(doc, select_id)? {
        let selected = doc
            .get(option_id)?
            .property("selected")
            .map(value_is_truthy)
            .unwrap_or(false);
        if selected {
            values.push(option_value(doc, option_id)?);
        }
    }
    Ok(values)
}
