//! # Parsers
//!
//! - `html` - HTML document parsing, DOM access, document metadata

pub mod html;

// Re-export commonly used items for convenience
pub use html::{get_base_url, html_to_dom};
