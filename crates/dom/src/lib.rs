//! Host-side DOM document model.
//!
//! Owns the node tree that the accessor crate's functions operate on. The
//! caller owns a [`Document`]; everything else is a 4-byte [`NodeId`] handle
//! into it.
//!
//! ## Core Design
//!
//! ```text
//! JSON description → Document (arena) → NodeId handles → accessor calls
//!                         ↓
//!                  markup::serialize (debug dump)
//! ```
//!
//! - **Arena storage**: one `Vec<Node>`, indices instead of pointers
//! - **No hidden state**: class state lives in the `class` attribute,
//!   element state lives in a property bag
//! - **Synchronous**: every operation completes within the calling turn

pub mod arena;
pub mod error;
pub mod markup;
pub mod parse;
pub mod types;

pub use arena::{Document, DocumentConfig};
pub use error::{DomError, Result};
pub use types::{Node, NodeId, NodeType, StyleDeclaration};
