use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use markup5ever_rcdom::{Handle, Node, RcDom};
use serde_json::Value;

use crate::core::{MicrodataError, MicrodataResult};
use crate::parsers::html::{
    get_base_url, get_child_elements, get_node_attr, html_to_dom, split_tokens,
};

use super::element::{CachedValue, Element, MicrodataElement};

/// Position of an element in document (pre-)order
pub type NodeId = usize;

/// One element of the document arena
pub(crate) struct ElementEntry {
    pub(crate) handle: Handle,
    pub(crate) children: Vec<NodeId>,
    pub(crate) cache: ElementCache,
}

/// Derived microdata attributes, each computed at most once
#[derive(Default)]
pub(crate) struct ElementCache {
    pub(crate) item_scope: OnceCell<bool>,
    pub(crate) item_type: OnceCell<Option<Vec<String>>>,
    pub(crate) item_id: OnceCell<Option<String>>,
    pub(crate) item_prop: OnceCell<Option<Vec<String>>>,
    pub(crate) item_ref: OnceCell<Option<Vec<String>>>,
    pub(crate) item_value: OnceCell<Option<CachedValue>>,
    pub(crate) properties: OnceCell<Vec<NodeId>>,
    pub(crate) property_names: OnceCell<Vec<String>>,
}

/// A parsed HTML document prepared for microdata queries
///
/// The DOM is indexed once on construction: every element gets a [`NodeId`]
/// in document order, and the first element carrying each `id` is recorded.
/// The tree must not change afterwards; all derived values are cached.
pub struct MicrodataDocument {
    dom: RcDom,
    base_url: Option<String>,
    elements: Vec<ElementEntry>,
    node_ids: HashMap<*const Node, NodeId>,
    ids: HashMap<String, NodeId>,
}

impl MicrodataDocument {
    pub fn new(dom: RcDom, base_url: Option<String>) -> Self {
        let mut document = Self {
            dom,
            base_url,
            elements: Vec::new(),
            node_ids: HashMap::new(),
            ids: HashMap::new(),
        };

        let top_level = get_child_elements(&document.dom.document);
        document.index_elements(top_level);

        document
    }

    /// Parses UTF-8 HTML and indexes it
    ///
    /// Without `base_url`, the document's own `<base href>` is used, if any.
    pub fn from_html(html: &str, base_url: Option<&str>) -> MicrodataResult<Self> {
        Self::from_bytes(html.as_bytes(), "utf-8", base_url)
    }

    /// Decodes `data` using the `encoding` label, parses and indexes it
    pub fn from_bytes(
        data: &[u8],
        encoding: &str,
        base_url: Option<&str>,
    ) -> MicrodataResult<Self> {
        let dom = html_to_dom(data, encoding)?;
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| get_base_url(&dom.document));

        Ok(Self::new(dom, base_url))
    }

    /// Assigns pre-order ids with an explicit stack, so nesting depth is
    /// bounded only by memory
    fn index_elements(&mut self, top_level: Vec<Handle>) {
        let mut stack: Vec<(Handle, Option<NodeId>)> =
            top_level.into_iter().rev().map(|handle| (handle, None)).collect();

        while let Some((handle, parent)) = stack.pop() {
            let node_id = self.elements.len();
            self.node_ids.insert(Rc::as_ptr(&handle), node_id);
            if let Some(id) = get_node_attr(&handle, "id").filter(|id| !id.is_empty()) {
                self.ids.entry(id).or_insert(node_id);
            }
            if let Some(parent) = parent {
                self.elements[parent].children.push(node_id);
            }

            stack.extend(
                get_child_elements(&handle)
                    .into_iter()
                    .rev()
                    .map(|child| (child, Some(node_id))),
            );
            self.elements.push(ElementEntry {
                handle,
                children: Vec::new(),
                cache: ElementCache::default(),
            });
        }
    }

    pub(crate) fn entry(&self, node_id: NodeId) -> &ElementEntry {
        &self.elements[node_id]
    }

    pub fn dom(&self) -> &RcDom {
        &self.dom
    }

    /// Base URI against which URL-valued properties are resolved
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// All elements, in document order
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        (0..self.elements.len()).map(move |node_id| Element::new(self, node_id))
    }

    pub fn element(&self, node_id: NodeId) -> Option<Element<'_>> {
        (node_id < self.elements.len()).then(|| Element::new(self, node_id))
    }

    /// Maps a node of the underlying DOM back to its element facade
    pub fn element_for(&self, handle: &Handle) -> Option<Element<'_>> {
        self.node_ids
            .get(&Rc::as_ptr(handle))
            .map(|&node_id| Element::new(self, node_id))
    }

    /// First element, in document order, whose `id` equals `id` exactly
    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.ids.get(id).map(|&node_id| Element::new(self, node_id))
    }

    /// Top-level items whose types include every one of `types`
    ///
    /// An item is top-level when it has `itemscope` but no `itemprop`. With no
    /// types given, every top-level item is returned.
    pub fn get_items(&self, types: impl Into<TypeNames>) -> Vec<Element<'_>> {
        let required = types.into().tokens();

        self.elements()
            .filter(|element| element.item_scope() && element.item_prop().is_none())
            .filter(|element| {
                required.iter().all(|required_type| {
                    element
                        .item_type()
                        .is_some_and(|item_types| item_types.contains(required_type))
                })
            })
            .collect()
    }

    /// Same as [`get_items`](Self::get_items), for loosely typed input
    ///
    /// Accepts a JSON string (whitespace separated types) or an array of
    /// strings; anything else is rejected with `InvalidArgument`.
    pub fn get_items_from_value(&self, types: &Value) -> MicrodataResult<Vec<Element<'_>>> {
        let types = TypeNames::try_from(types)?;
        Ok(self.get_items(types))
    }
}

impl fmt::Debug for MicrodataDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MicrodataDocument")
            .field("base_url", &self.base_url)
            .field("elements", &self.elements.len())
            .field("ids", &self.ids.len())
            .finish()
    }
}

/// Vocabulary types an item has to carry to be returned by item discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNames {
    List(Vec<String>),
    /// Whitespace separated types, e.g. `"http://schema.org/Person http://schema.org/Thing"`
    Joined(String),
}

impl TypeNames {
    /// No filter: every top-level item matches
    pub fn any() -> Self {
        TypeNames::List(Vec::new())
    }

    /// Trimmed, non-empty type tokens
    pub fn tokens(&self) -> Vec<String> {
        match self {
            TypeNames::List(types) => types
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            TypeNames::Joined(types) => split_tokens(types),
        }
    }
}

impl Default for TypeNames {
    fn default() -> Self {
        Self::any()
    }
}

impl From<&str> for TypeNames {
    fn from(types: &str) -> Self {
        TypeNames::Joined(types.to_string())
    }
}

impl From<String> for TypeNames {
    fn from(types: String) -> Self {
        TypeNames::Joined(types)
    }
}

impl From<Vec<String>> for TypeNames {
    fn from(types: Vec<String>) -> Self {
        TypeNames::List(types)
    }
}

impl From<Vec<&str>> for TypeNames {
    fn from(types: Vec<&str>) -> Self {
        TypeNames::List(types.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TypeNames {
    fn from(types: &[&str]) -> Self {
        TypeNames::List(types.iter().map(|t| t.to_string()).collect())
    }
}

impl TryFrom<&Value> for TypeNames {
    type Error = MicrodataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(types) => Ok(TypeNames::Joined(types.clone())),
            Value::Array(values) => values
                .iter()
                .map(|value| match value {
                    Value::String(t) => Ok(t.clone()),
                    other => Err(MicrodataError::InvalidArgument(format!(
                        "Expected only strings in the type list, got {other}"
                    ))),
                })
                .collect::<MicrodataResult<Vec<String>>>()
                .map(TypeNames::List),
            other => Err(MicrodataError::InvalidArgument(format!(
                "Expected array or string for argument 1, got {other}"
            ))),
        }
    }
}
