//! Class-list convenience wrappers.
//!
//! Thin pass-throughs to the element's class-attribute capability. Membership
//! is re-checked on every call; no class state is cached anywhere.

use dom::{Document, NodeId, Result};

/// Whether the element has the class.
pub fn has_class(doc: &Document, id: NodeId, name: &str) -> Result<bool> {
    Ok(doc.element(id)?.has_class(name))
}

/// Add a class (idempotent).
pub fn add_class(doc: &mut Document, id: NodeId, name: &str) -> Result<()> {
    doc.element_mut(id)?.add_class(name);
    Ok(())
}

/// Remove a class (idempotent).
pub fn remove_class(doc: &mut Document, id: NodeId, name: &str) -> Result<()> {
    doc.element_mut(id)?.remove_class(name);
    Ok(())
}

/// Toggle a class, returning the new membership state.
pub fn toggle_class(doc: &mut Document, id: NodeId, name: &str) -> Result<bool> {
    if has_class(doc, id, name)? {
        remove_class(doc, id, name)?;
        Ok(false)
    } else {
        add_class(doc, id, name)?;
        Ok(true)
    }
}
