//! # Microdata Library
//!
//! Extracts HTML microdata (`itemscope`, `itemprop`, ...) from documents and
//! serializes the items as JSON.
//!
//! ## Module layout
//!
//! - `core` - errors, options and the extraction entry points
//! - `env` - environment variable configuration
//! - `microdata` - the item/property model over a parsed document
//! - `parsers` - HTML parsing and DOM helpers
//! - `utils` - URL resolution
//!
//! ```
//! use microdata::{MicrodataDocument, MicrodataElement, TypeNames};
//!
//! let html = r#"<div itemscope itemtype="http://schema.org/Person">
//!   <span itemprop="name">Elizabeth</span>
//! </div>"#;
//! let document = MicrodataDocument::from_html(html, None).unwrap();
//! let people = document.get_items("http://schema.org/Person");
//!
//! let properties = people[0].properties().unwrap();
//! assert_eq!(properties.names(), &["name"]);
//! assert_eq!(document.get_items(TypeNames::any()).len(), 1);
//! ```

pub mod core;
pub mod env;
pub mod microdata;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::microdata::*;
pub use crate::parsers::*;
pub use crate::utils::*;
