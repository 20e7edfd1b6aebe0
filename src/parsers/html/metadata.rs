//! Document-level metadata relevant to microdata extraction

use markup5ever_rcdom::Handle;

use super::dom::{find_nodes, get_node_attr};

/// Gets the document base URL from `<base href>`
///
/// Only the first `<base>` inside `<head>` counts; the rest are ignored.
///
/// # Returns
///
/// * `Some(String)` - the `href` of the first `<base>` element, when non-empty
/// * `None` - no `<base>` element, or one without a usable `href`
pub fn get_base_url(handle: &Handle) -> Option<String> {
    let base_node = find_nodes(handle, &["html", "head", "base"]).into_iter().next()?;

    get_node_attr(&base_node, "href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
