//! Element accessor functions over a host document.
//!
//! A flat set of stateless functions for manipulating DOM elements:
//! attributes, properties, inline styles, text content, type-aware value
//! access, and class toggling. Every function takes the owning
//! [`dom::Document`] plus a [`dom::NodeId`] element handle; this crate never
//! creates, destroys, or caches elements, and errors are whatever the
//! document model returns, untranslated.
//!
//! ```
//! use accessor::{value, ElementValue};
//! use dom::parse;
//! use serde_json::json;
//!
//! # fn main() -> dom::Result<()> {
//! let mut doc = parse::from_json(&json!({
//!     "root": {
//!         "tag": "form",
//!         "children": [
//!             { "tag": "input", "attributes": { "type": "checkbox", "id": "opt-in" } },
//!         ],
//!     },
//! }))?;
//!
//! let checkbox = doc.find_by_id("opt-in").unwrap();
//! value::set(&mut doc, checkbox, &true.into())?;
//! assert_eq!(value::get(&doc, checkbox)?, ElementValue::Bool(true));
//! # Ok(())
//! # }
//! ```

mod utils;

pub mod attrs;
pub mod classes;
pub mod style;
pub mod text;
pub mod value;

pub use attrs::{attr, attr_ns, data, prop, set_attr, set_attr_ns, set_data, set_prop};
pub use classes::{add_class, has_class, remove_class, toggle_class};
pub use style::{css, set_css, set_css_map};
pub use text::{set_text, text};
pub use value::{element_type, ElementValue, LogicalType};
