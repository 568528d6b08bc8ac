//! Text-content access.

use dom::{Document, NodeId, Result};

/// Concatenated text of the node's subtree.
pub fn text(doc: &Document, id: NodeId) -> Result<String> {
    doc.text_content(id)
}

/// Replace the node's children with the given text.
pub fn set_text(doc: &mut Document, id: NodeId, value: &str) -> Result<()> {
    doc.set_text_content(id, value)
}
