//! # Utility module
//!
//! - `url` - base URL resolution and scheme detection

pub mod url;

// Re-export commonly used items for convenience
pub use url::{is_url_and_has_protocol, resolve_url, Url};
