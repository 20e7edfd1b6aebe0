use std::fmt;
use std::ptr;
use std::str::FromStr;

use markup5ever_rcdom::Handle;

use crate::core::MicrodataError;
use crate::parsers::html::{get_node_attr, get_node_name, get_text_content, has_node_attr, split_tokens};
use crate::utils::resolve_url;

use super::document::{ElementEntry, MicrodataDocument, NodeId};
use super::properties::PropertiesCollection;

/// The microdata view of an element
pub trait MicrodataElement<'doc> {
    /// Whether the element carries `itemscope`
    fn item_scope(&self) -> bool;

    /// Tokens of `itemtype`, only on elements that create an item
    fn item_type(&self) -> Option<&'doc [String]>;

    /// Raw `itemid`, only on elements that create an item
    fn item_id(&self) -> Option<&'doc str>;

    /// Tokens of `itemprop`
    fn item_prop(&self) -> Option<&'doc [String]>;

    /// Tokens of `itemref`, only on elements that create an item
    fn item_ref(&self) -> Option<&'doc [String]>;

    /// Value the element contributes as a property
    fn item_value(&self) -> Option<ItemValue<'doc>>;

    /// Properties of the item the element creates
    fn properties(&self) -> Option<PropertiesCollection<'doc>>;
}

/// Property value of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemValue<'doc> {
    Text(&'doc str),
    /// Absolute (or base-less) URL taken from `src`, `href` or `data`
    Url(&'doc str),
    /// The element itself, when it creates an item
    Item(Element<'doc>),
}

impl<'doc> ItemValue<'doc> {
    pub fn as_str(&self) -> Option<&'doc str> {
        match *self {
            ItemValue::Text(value) | ItemValue::Url(value) => Some(value),
            ItemValue::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<Element<'doc>> {
        match *self {
            ItemValue::Item(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CachedValue {
    Text(String),
    Url(String),
}

/// Attribute names accepted by [`Element::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MicrodataAttribute {
    ItemScope,
    ItemType,
    ItemId,
    ItemProp,
    ItemRef,
    ItemValue,
    Properties,
}

impl MicrodataAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            MicrodataAttribute::ItemScope => "itemScope",
            MicrodataAttribute::ItemType => "itemType",
            MicrodataAttribute::ItemId => "itemId",
            MicrodataAttribute::ItemProp => "itemProp",
            MicrodataAttribute::ItemRef => "itemRef",
            MicrodataAttribute::ItemValue => "itemValue",
            MicrodataAttribute::Properties => "properties",
        }
    }
}

impl fmt::Display for MicrodataAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MicrodataAttribute {
    type Err = MicrodataError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "itemScope" => Ok(MicrodataAttribute::ItemScope),
            "itemType" => Ok(MicrodataAttribute::ItemType),
            "itemId" => Ok(MicrodataAttribute::ItemId),
            "itemProp" => Ok(MicrodataAttribute::ItemProp),
            "itemRef" => Ok(MicrodataAttribute::ItemRef),
            "itemValue" => Ok(MicrodataAttribute::ItemValue),
            "properties" => Ok(MicrodataAttribute::Properties),
            _ => Err(MicrodataError::UndefinedAttribute(name.to_string())),
        }
    }
}

/// Result of a dynamic attribute read through [`Element::get`]
#[derive(Debug, Clone)]
pub enum AttributeValue<'doc> {
    Flag(bool),
    Tokens(Option<&'doc [String]>),
    Text(Option<&'doc str>),
    Value(Option<ItemValue<'doc>>),
    Properties(Option<PropertiesCollection<'doc>>),
}

/// An element of a [`MicrodataDocument`]
///
/// Cheap to copy; all derived values live in the document and are computed
/// on first access.
#[derive(Clone, Copy)]
pub struct Element<'doc> {
    document: &'doc MicrodataDocument,
    node_id: NodeId,
}

impl<'doc> Element<'doc> {
    pub(crate) fn new(document: &'doc MicrodataDocument, node_id: NodeId) -> Self {
        Self { document, node_id }
    }

    pub(crate) fn entry(&self) -> &'doc ElementEntry {
        self.document.entry(self.node_id)
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn document(&self) -> &'doc MicrodataDocument {
        self.document
    }

    pub fn handle(&self) -> &'doc Handle {
        &self.entry().handle
    }

    /// Lowercase local name
    pub fn tag_name(&self) -> &'doc str {
        get_node_name(self.handle()).unwrap_or_default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        get_node_attr(self.handle(), name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        has_node_attr(self.handle(), name)
    }

    /// Element children, in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Element<'doc>> + 'doc {
        let document = self.document;
        self.entry()
            .children
            .iter()
            .map(move |&node_id| Element::new(document, node_id))
    }

    pub fn text_content(&self) -> String {
        get_text_content(self.handle())
    }

    /// Reads a microdata attribute by its DOM property name (`itemScope`, `itemType`, ...)
    pub fn get(&self, name: &str) -> Result<AttributeValue<'doc>, MicrodataError> {
        let attribute = name.parse::<MicrodataAttribute>()?;
        Ok(self.get_attribute(attribute))
    }

    pub fn get_attribute(&self, attribute: MicrodataAttribute) -> AttributeValue<'doc> {
        match attribute {
            MicrodataAttribute::ItemScope => AttributeValue::Flag(self.item_scope()),
            MicrodataAttribute::ItemType => AttributeValue::Tokens(self.item_type()),
            MicrodataAttribute::ItemId => AttributeValue::Text(self.item_id()),
            MicrodataAttribute::ItemProp => AttributeValue::Tokens(self.item_prop()),
            MicrodataAttribute::ItemRef => AttributeValue::Tokens(self.item_ref()),
            MicrodataAttribute::ItemValue => AttributeValue::Value(self.item_value()),
            MicrodataAttribute::Properties => AttributeValue::Properties(self.properties()),
        }
    }

    fn derive_value(&self) -> Option<CachedValue> {
        match self.tag_name() {
            "meta" => Some(CachedValue::Text(
                self.attribute("content").unwrap_or_default(),
            )),
            "audio" | "embed" | "iframe" | "img" | "source" | "track" | "video" => {
                self.url_attribute("src")
            }
            "a" | "area" | "link" => self.url_attribute("href"),
            "object" => self.url_attribute("data"),
            "data" | "meter" => self.attribute("value").map(CachedValue::Text),
            "time" => self.attribute("datetime").map(CachedValue::Text),
            _ => Some(CachedValue::Text(
                self.attribute("content")
                    .unwrap_or_else(|| self.text_content()),
            )),
        }
    }

    fn url_attribute(&self, name: &str) -> Option<CachedValue> {
        self.attribute(name)
            .map(|url| CachedValue::Url(resolve_url(self.document.base_url(), &url)))
    }
}

impl<'doc> MicrodataElement<'doc> for Element<'doc> {
    fn item_scope(&self) -> bool {
        *self
            .entry()
            .cache
            .item_scope
            .get_or_init(|| self.has_attribute("itemscope"))
    }

    fn item_type(&self) -> Option<&'doc [String]> {
        self.entry()
            .cache
            .item_type
            .get_or_init(|| {
                if !self.item_scope() {
                    return None;
                }
                self.attribute("itemtype").map(|value| split_tokens(&value))
            })
            .as_deref()
    }

    fn item_id(&self) -> Option<&'doc str> {
        self.entry()
            .cache
            .item_id
            .get_or_init(|| {
                if !self.item_scope() {
                    return None;
                }
                self.attribute("itemid")
            })
            .as_deref()
    }

    fn item_prop(&self) -> Option<&'doc [String]> {
        self.entry()
            .cache
            .item_prop
            .get_or_init(|| self.attribute("itemprop").map(|value| split_tokens(&value)))
            .as_deref()
    }

    fn item_ref(&self) -> Option<&'doc [String]> {
        self.entry()
            .cache
            .item_ref
            .get_or_init(|| {
                if !self.item_scope() {
                    return None;
                }
                Some(
                    self.attribute("itemref")
                        .map(|value| split_tokens(&value))
                        .unwrap_or_default(),
                )
            })
            .as_deref()
    }

    fn item_value(&self) -> Option<ItemValue<'doc>> {
        self.item_prop()?;

        if self.item_scope() {
            return Some(ItemValue::Item(*self));
        }

        self.entry()
            .cache
            .item_value
            .get_or_init(|| self.derive_value())
            .as_ref()
            .map(|value| match value {
                CachedValue::Text(text) => ItemValue::Text(text),
                CachedValue::Url(url) => ItemValue::Url(url),
            })
    }

    fn properties(&self) -> Option<PropertiesCollection<'doc>> {
        self.item_scope().then(|| PropertiesCollection::new(*self))
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.document, other.document) && self.node_id == other.node_id
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .field("node_id", &self.node_id)
            .finish()
    }
}
