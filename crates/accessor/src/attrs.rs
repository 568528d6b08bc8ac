//! Attribute, data-attribute, and property access.
//!
//! Attribute names are normalized dash-to-camel-case before touching the
//! element, with `for` mapped to `htmlFor` (the HTML/IDL naming exception).
//! Both get and set normalize, so round-trips are stable. Setting an empty
//! value removes the attribute instead.
//!
//! Property names are passed through raw.

use crate::utils::to_camel_case;
use dom::{Document, NodeId, Result};
use serde_json::Value;

fn attr_name(name: &str) -> String {
    let name = if name == "for" { "htmlFor" } else { name };
    to_camel_case(name)
}

/// Current value of an attribute, `None` when absent.
pub fn attr(doc: &Document, id: NodeId, name: &str) -> Result<Option<String>> {
    let node = doc.element(id)?;
    Ok(node.attribute(&attr_name(name)).map(str::to_string))
}

/// Set an attribute; an empty value removes it instead.
pub fn set_attr(doc: &mut Document, id: NodeId, name: &str, value: &str) -> Result<()> {
    let name = attr_name(name);
    let node = doc.element_mut(id)?;
    if value.is_empty() {
        node.remove_attribute(&name);
    } else {
        node.set_attribute(&name, value);
    }
    Ok(())
}

/// Current value of a namespaced attribute.
pub fn attr_ns(doc: &Document, id: NodeId, namespace: &str, name: &str) -> Result<Option<String>> {
    let node = doc.element(id)?;
    Ok(node
        .attribute_ns(namespace, &to_camel_case(name))
        .map(str::to_string))
}

/// Set a namespaced attribute; an empty value removes it instead.
pub fn set_attr_ns(
    doc: &mut Document,
    id: NodeId,
    namespace: &str,
    name: &str,
    value: &str,
) -> Result<()> {
    let name = to_camel_case(name);
    let node = doc.element_mut(id)?;
    if value.is_empty() {
        node.remove_attribute_ns(namespace, &name);
        Ok(())
    } else {
        node.set_attribute_ns(namespace, &name, value)
    }
}

/// `data-*` convenience wrapper over [`attr`].
pub fn data(doc: &Document, id: NodeId, name: &str) -> Result<Option<String>> {
    attr(doc, id, &format!("data-{}", name))
}

/// `data-*` convenience wrapper over [`set_attr`].
pub fn set_data(doc: &mut Document, id: NodeId, name: &str, value: &str) -> Result<()> {
    set_attr(doc, id, &format!("data-{}", name), value)
}

/// Current property value, `None` when the property was never set.
pub fn prop(doc: &Document, id: NodeId, name: &str) -> Result<Option<Value>> {
    Ok(doc.element(id)?.property(name).cloned())
}

/// Set a property.
pub fn set_prop(
    doc: &mut Document,
    id: NodeId,
    name: &str,
    value: impl Into<Value>,
) -> Result<()> {
    doc.element_mut(id)?.set_property(name, value.into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::parse;
    use serde_json::json;

    fn single_div() -> (Document, NodeId) {
        let doc = parse::from_json(&json!({
            "root": { "tag": "div", "attributes": { "id": "app" } },
        }))
        .unwrap();
        let id = doc.find_by_id("app").unwrap();
        (doc, id)
    }

    #[test]
    fn attr_round_trip() {
        let (mut doc, div) = single_div();

        set_attr(&mut doc, div, "role", "button").unwrap();
        assert_eq!(attr(&doc, div, "role").unwrap(), Some("button".to_string()));
    }

    #[test]
    fn dashed_names_are_camelized_on_both_paths() {
        let (mut doc, div) = single_div();

        set_attr(&mut doc, div, "aria-label", "Close").unwrap();
        assert_eq!(
            attr(&doc, div, "aria-label").unwrap(),
            Some("Close".to_string())
        );
        // the stored key is the normalized one
        assert_eq!(
            doc.get(div).unwrap().attribute("ariaLabel"),
            Some("Close")
        );
    }

    #[test]
    fn for_maps_to_html_for() {
        let (mut doc, div) = single_div();

        set_attr(&mut doc, div, "for", "email").unwrap();
        assert_eq!(doc.get(div).unwrap().attribute("htmlFor"), Some("email"));
        assert_eq!(attr(&doc, div, "for").unwrap(), Some("email".to_string()));
    }

    #[test]
    fn empty_value_removes_attribute() {
        let (mut doc, div) = single_div();

        set_attr(&mut doc, div, "title", "hint").unwrap();
        set_attr(&mut doc, div, "title", "").unwrap();
        assert_eq!(attr(&doc, div, "title").unwrap(), None);
    }

    #[test]
    fn namespaced_attributes() {
        let (mut doc, div) = single_div();
        let xlink = "http://www.w3.org/1999/xlink";

        set_attr_ns(&mut doc, div, xlink, "href", "#icon").unwrap();
        assert_eq!(
            attr_ns(&doc, div, xlink, "href").unwrap(),
            Some("#icon".to_string())
        );
        assert_eq!(attr(&doc, div, "href").unwrap(), None);

        set_attr_ns(&mut doc, div, xlink, "href", "").unwrap();
        assert_eq!(attr_ns(&doc, div, xlink, "href").unwrap(), None);

        assert!(set_attr_ns(&mut doc, div, "", "href", "#icon").is_err());
    }

    #[test]
    fn data_prefixes_and_delegates() {
        let (mut doc, div) = single_div();

        set_data(&mut doc, div, "user-id", "42").unwrap();
        assert_eq!(data(&doc, div, "user-id").unwrap(), Some("42".to_string()));
        // full dashed name is camelized, as attr would do
        assert_eq!(doc.get(div).unwrap().attribute("dataUserId"), Some("42"));
    }

    #[test]
    fn prop_takes_json_values() {
        let (mut doc, div) = single_div();

        set_prop(&mut doc, div, "tabIndex", 3).unwrap();
        set_prop(&mut doc, div, "hidden", true).unwrap();
        assert_eq!(prop(&doc, div, "tabIndex").unwrap(), Some(json!(3)));
        assert_eq!(prop(&doc, div, "hidden").unwrap(), Some(json!(true)));
        assert_eq!(prop(&doc, div, "missing").unwrap(), None);
    }

    #[test]
    fn errors_pass_through_untranslated() {
        let (mut doc, _) = single_div();
        let text = doc.create_text_node("plain");

        assert!(matches!(
            attr(&doc, text, "id"),
            Err(dom::DomError::NotAnElement { .. })
        ));
        assert!(matches!(
            attr(&doc, 999, "id"),
            Err(dom::DomError::NodeNotFound(999))
        ));
    }
}
