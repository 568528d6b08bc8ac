//! Error types for document operations.
//!
//! Simple, flat error hierarchy. No over-engineering.

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("node {id} is not an element (got {kind} node)")]
    NotAnElement { id: NodeId, kind: &'static str },

    #[error("invalid namespace: {0:?}")]
    InvalidNamespace(String),

    #[error("hierarchy violation: {0}")]
    Hierarchy(String),

    #[error("node {child} is not a child of node {parent}")]
    NotAChild { child: NodeId, parent: NodeId },

    #[error("malformed document description: {0}")]
    BadDocument(String),

    #[error("maximum tree depth exceeded: {current} > {max}")]
    MaxDepthExceeded { current: usize, max: usize },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
