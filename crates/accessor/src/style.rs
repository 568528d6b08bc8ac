//! Inline style access.
//!
//! Property names are normalized dash-to-camel-case, with `float` mapped to
//! `cssFloat` (its IDL name). Setting an empty value removes the property.

use crate::utils::to_camel_case;
use dom::{Document, NodeId, Result};

fn style_name(name: &str) -> String {
    let name = if name == "float" { "cssFloat" } else { name };
    to_camel_case(name)
}

/// Current value of one inline style property.
pub fn css(doc: &Document, id: NodeId, name: &str) -> Result<Option<String>> {
    let node = doc.element(id)?;
    Ok(node
        .style
        .get_property(&style_name(name))
        .map(str::to_string))
}

/// Set one inline style property; an empty value removes it instead.
pub fn set_css(doc: &mut Document, id: NodeId, name: &str, value: &str) -> Result<()> {
    let name = style_name(name);
    let node = doc.element_mut(id)?;
    if value.is_empty() {
        node.style.remove_property(&name);
    } else {
        node.style.set_property(&name, value);
    }
    Ok(())
}

/// Bulk form: apply pairs in order through [`set_css`], so empty values
/// remove their property.
pub fn set_css_map(doc: &mut Document, id: NodeId, styles: &[(&str, &str)]) -> Result<()> {
    for (name, value) in styles {
        set_css(doc, id, name, value)?;
    }
    Ok(())
}
