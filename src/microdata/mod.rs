//! The microdata model over a parsed HTML document
//!
//! - `document`: the indexed document and top-level item discovery
//! - `element`: per-element microdata attributes and property values
//! - `properties`: property collection of an item
//! - `node_list`: properties sharing one name
//! - `serializer`: conversion into the `{ "items": [...] }` structure

pub mod document;
pub mod element;
pub mod node_list;
pub mod properties;
pub mod serializer;

pub use document::{MicrodataDocument, NodeId, TypeNames};
pub use element::{AttributeValue, Element, ItemValue, MicrodataAttribute, MicrodataElement};
pub use node_list::PropertyNodeList;
pub use properties::{PropertiesCollection, PropertyEntry, PropertyKey};
pub use serializer::{Item, Microdata, PropertyValue};
