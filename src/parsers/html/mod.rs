//! HTML parsing and DOM access
//!
//! - `dom`: parsing and basic node access over `markup5ever_rcdom`
//! - `metadata`: document metadata (`<base>`)
//! - `utils`: attribute token helpers

pub mod dom;
pub mod metadata;
pub mod utils;

pub use dom::{
    find_nodes, get_child_elements, get_node_attr, get_node_name, get_text_content,
    has_node_attr, html_to_dom, is_element,
};
pub use metadata::get_base_url;
pub use utils::{split_tokens, WHITESPACES};
