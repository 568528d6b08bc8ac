//! Arena-based document storage.
//!
//! One `Vec<Node>` holds every node; handles are 4-byte indices. No Rc/Arc,
//! no recursive traversal, a single allocation to grow.
//!
//! Handles never dangle: detached subtrees stay in the arena until `clear`,
//! they just have no parent.

use crate::error::{DomError, Result};
use crate::types::{Node, NodeId, NodeType};
use smallvec::SmallVec;

/// Construction limits for a document.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Pre-allocated node capacity.
    pub capacity: usize,
    /// Maximum nesting depth accepted by the JSON parser.
    pub max_depth: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            max_depth: 64,
        }
    }
}

/// An owned document tree: the host side of every accessor call.
///
/// The document creates and owns nodes; callers hold `NodeId` handles and
/// pass them back in.
#[derive(Debug)]
pub struct Document {
    /// All nodes stored sequentially (cache-friendly).
    nodes: Vec<Node>,
    root_id: Option<NodeId>,
    config: DocumentConfig,
}

impl Document {
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.capacity),
            root_id: None,
            config,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(DocumentConfig {
            capacity,
            ..DocumentConfig::default()
        })
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    fn push_node(&mut self, node_type: NodeType, node_name: String) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(node_id, node_type, node_name));
        node_id
    }

    /// Create a detached element. Tag names are stored lowercased.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeType::Element, tag.to_ascii_lowercase())
    }

    /// Create a detached text node.
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        let node_id = self.push_node(NodeType::Text, "#text".to_string());
        self.nodes[node_id as usize].node_value = text.to_string();
        node_id
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        let node_id = self.push_node(NodeType::Comment, "#comment".to_string());
        self.nodes[node_id as usize].node_value = text.to_string();
        node_id
    }

    pub(crate) fn create_document_node(&mut self) -> NodeId {
        self.push_node(NodeType::Document, "#document".to_string())
    }

    /// Get node by ID (immutable).
    pub fn get(&self, node_id: NodeId) -> Result<&Node> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable).
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get a node, requiring it to be an element.
    pub fn element(&self, node_id: NodeId) -> Result<&Node> {
        let node = self.get(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement {
                id: node_id,
                kind: node.node_type.as_str(),
            });
        }
        Ok(node)
    }

    /// Get a node mutably, requiring it to be an element.
    pub fn element_mut(&mut self, node_id: NodeId) -> Result<&mut Node> {
        let kind = self.get(node_id)?.node_type;
        if kind != NodeType::Element {
            return Err(DomError::NotAnElement {
                id: node_id,
                kind: kind.as_str(),
            });
        }
        self.get_mut(node_id)
    }

    /// Set root node.
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn root(&self) -> Result<&Node> {
        let root_id = self
            .root_id
            .ok_or_else(|| DomError::BadDocument("no root node set".to_string()))?;
        self.get(root_id)
    }

    /// Append a child, detaching it from any previous parent first. Appending
    /// a node into its own subtree is a hierarchy violation.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        self.get(parent_id)?;
        self.get(child_id)?;

        if self.is_same_or_ancestor(child_id, parent_id)? {
            return Err(DomError::Hierarchy(format!(
                "node {} is an ancestor of node {}",
                child_id, parent_id
            )));
        }

        if let Some(old_parent) = self.get(child_id)?.parent_id {
            self.remove_child(old_parent, child_id)?;
        }

        self.get_mut(child_id)?.parent_id = Some(parent_id);
        self.get_mut(parent_id)?.children_ids.push(child_id);
        Ok(())
    }

    /// Whether `candidate` is `node_id` itself or one of its ancestors.
    fn is_same_or_ancestor(&self, candidate: NodeId, node_id: NodeId) -> Result<bool> {
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == candidate {
                return Ok(true);
            }
            current = self.get(id)?.parent_id;
        }
        Ok(false)
    }

    /// Detach a child from its parent. The child stays in the arena.
    pub fn remove_child(&mut self, parent_id: NodeId, child_id: NodeId) -> Result<()> {
        let position = self
            .get(parent_id)?
            .children_ids
            .iter()
            .position(|&id| id == child_id)
            .ok_or(DomError::NotAChild {
                child: child_id,
                parent: parent_id,
            })?;
        self.get_mut(parent_id)?.children_ids.remove(position);
        self.get_mut(child_id)?.parent_id = None;
        Ok(())
    }

    /// Detach every child of a node.
    pub fn remove_children(&mut self, parent_id: NodeId) -> Result<()> {
        let children: SmallVec<[NodeId; 4]> =
            std::mem::take(&mut self.get_mut(parent_id)?.children_ids);
        for child_id in children {
            self.get_mut(child_id)?.parent_id = None;
        }
        Ok(())
    }

    /// Total number of nodes, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| i as NodeId)
    }

    /// Get children of a node.
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&Node>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Get parent of a node.
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&Node>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Traverse a subtree depth-first (iterative, no recursion).
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&Node) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Find nodes matching predicate.
    pub fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| {
                if predicate(node) {
                    Some(idx as NodeId)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Find first node matching predicate.
    pub fn find_one<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.nodes.iter().enumerate().find_map(|(idx, node)| {
            if predicate(node) {
                Some(idx as NodeId)
            } else {
                None
            }
        })
    }

    /// Find all elements by tag name.
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.node_name.eq_ignore_ascii_case(tag))
    }

    /// Find an element by its `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_one(|node| node.is_element() && node.attribute("id") == Some(id))
    }

    /// Concatenated text of every descendant text node, in document order.
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        let mut text = String::new();

        self.traverse_df(node_id, |node| {
            if node.node_type == NodeType::Text {
                text.push_str(&node.node_value);
            }
            Ok(())
        })?;

        Ok(text)
    }

    /// Replace a node's children with a single text node (or nothing, for an
    /// empty string).
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        self.remove_children(node_id)?;
        if !text.is_empty() {
            let text_id = self.create_text_node(text);
            self.append_child(node_id, text_id)?;
        }
        Ok(())
    }

    /// Drop every node (reuses the allocation).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get() {
        let mut doc = Document::new();
        let div = doc.create_element("DIV");

        let node = doc.get(div).unwrap();
        assert_eq!(node.node_name, "div");
        assert!(node.is_element());
        assert!(doc.get(99).is_err());
    }

    #[test]
    fn element_accessor_rejects_text_nodes() {
        let mut doc = Document::new();
        let text = doc.create_text_node("hello");

        assert!(matches!(
            doc.element(text),
            Err(DomError::NotAnElement { kind: "text", .. })
        ));
    }

    #[test]
    fn append_and_remove_children() {
        let mut doc = Document::new();
        let parent = doc.create_element("ul");
        let first = doc.create_element("li");
        let second = doc.create_element("li");

        doc.append_child(parent, first).unwrap();
        doc.append_child(parent, second).unwrap();
        assert_eq!(doc.children(parent).unwrap().len(), 2);
        assert_eq!(doc.parent(first).unwrap().unwrap().node_id, parent);

        doc.remove_child(parent, first).unwrap();
        assert_eq!(doc.children(parent).unwrap().len(), 1);
        assert!(doc.parent(first).unwrap().is_none());

        assert!(matches!(
            doc.remove_child(parent, first),
            Err(DomError::NotAChild { .. })
        ));
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");

        doc.append_child(outer, inner).unwrap();
        assert!(matches!(
            doc.append_child(inner, outer),
            Err(DomError::Hierarchy(_))
        ));
        assert!(matches!(
            doc.append_child(outer, outer),
            Err(DomError::Hierarchy(_))
        ));
    }

    #[test]
    fn reappend_moves_node() {
        let mut doc = Document::new();
        let old_parent = doc.create_element("div");
        let new_parent = doc.create_element("div");
        let child = doc.create_element("span");

        doc.append_child(old_parent, child).unwrap();
        doc.append_child(new_parent, child).unwrap();

        assert!(doc.children(old_parent).unwrap().is_empty());
        assert_eq!(doc.parent(child).unwrap().unwrap().node_id, new_parent);
    }

    #[test]
    fn traverse_df_visits_left_to_right() {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let first = doc.create_element("span");
        let second = doc.create_element("b");
        doc.append_child(root, first).unwrap();
        doc.append_child(root, second).unwrap();

        let mut visited = Vec::new();
        doc.traverse_df(root, |node| {
            visited.push(node.node_name.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(visited, vec!["div", "span", "b"]);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let mut doc = Document::new();
        let root = doc.create_element("p");
        let hello = doc.create_text_node("hello ");
        let em = doc.create_element("em");
        let world = doc.create_text_node("world");

        doc.append_child(root, hello).unwrap();
        doc.append_child(root, em).unwrap();
        doc.append_child(em, world).unwrap();

        assert_eq!(doc.text_content(root).unwrap(), "hello world");
    }

    #[test]
    fn set_text_content_replaces_children() {
        let mut doc = Document::new();
        let root = doc.create_element("p");
        let span = doc.create_element("span");
        doc.append_child(root, span).unwrap();

        doc.set_text_content(root, "plain").unwrap();
        let children = doc.children(root).unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].is_text());
        assert_eq!(doc.text_content(root).unwrap(), "plain");

        doc.set_text_content(root, "").unwrap();
        assert!(doc.children(root).unwrap().is_empty());
    }

    #[test]
    fn find_by_id_and_tag() {
        let mut doc = Document::new();
        let root = doc.create_element("form");
        let input = doc.create_element("input");
        doc.get_mut(input).unwrap().set_attribute("id", "email");
        doc.append_child(root, input).unwrap();

        assert_eq!(doc.find_by_id("email"), Some(input));
        assert_eq!(doc.find_by_id("missing"), None);
        assert_eq!(doc.find_by_tag("INPUT"), vec![input]);
    }
}
