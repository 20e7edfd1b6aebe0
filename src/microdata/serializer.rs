//! Conversion of items into the plain `{ "items": [...] }` structure

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::MicrodataResult;

use super::document::{MicrodataDocument, NodeId, TypeNames};
use super::element::{Element, ItemValue, MicrodataElement};
use super::properties::PropertiesCollection;

/// Top-level microdata of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Microdata {
    pub items: Vec<Item>,
}

/// One item with its properties grouped by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<Vec<String>>,
    pub properties: IndexMap<String, Vec<PropertyValue>>,
}

/// A property value: text (URLs included), a nested item, or `null` when
/// the element has no value (e.g. `<img>` without `src`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Item(Item),
    Missing,
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl Microdata {
    /// Serializes each element that creates an item; others are skipped
    pub fn from_items(items: &[Element<'_>]) -> Self {
        Self {
            items: items.iter().filter_map(Element::to_item).collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> MicrodataResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl Item {
    /// First value of the named property
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).and_then(|values| values.first())
    }
}

impl Element<'_> {
    /// Converts the item this element creates into its serializable form
    pub fn to_item(&self) -> Option<Item> {
        self.item_scope()
            .then(|| serialize_item(*self, &mut Vec::new()))
    }
}

impl PropertiesCollection<'_> {
    /// Property values grouped by name, in first-appearance order
    pub fn to_map(&self) -> IndexMap<String, Vec<PropertyValue>> {
        serialize_properties(*self, &mut vec![self.owner().node_id()])
    }
}

impl MicrodataDocument {
    /// Serializes every top-level item of the document
    pub fn to_microdata(&self) -> Microdata {
        Microdata::from_items(&self.get_items(TypeNames::any()))
    }
}

fn serialize_item(element: Element<'_>, stack: &mut Vec<NodeId>) -> Item {
    let mut item = Item {
        id: element
            .item_id()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        item_type: element.item_type().map(<[String]>::to_vec),
        properties: IndexMap::new(),
    };

    if stack.contains(&element.node_id()) {
        tracing::warn!(
            "Item <{}> (node {}) contains itself; emitting it without properties",
            element.tag_name(),
            element.node_id()
        );
        return item;
    }

    if let Some(properties) = element.properties() {
        stack.push(element.node_id());
        item.properties = serialize_properties(properties, stack);
        stack.pop();
    }

    item
}

fn serialize_properties(
    properties: PropertiesCollection<'_>,
    stack: &mut Vec<NodeId>,
) -> IndexMap<String, Vec<PropertyValue>> {
    let mut map: IndexMap<String, Vec<PropertyValue>> = IndexMap::new();

    for property in properties.iter() {
        let value = match property.item_value() {
            Some(ItemValue::Item(nested)) => PropertyValue::Item(serialize_item(nested, stack)),
            Some(ItemValue::Text(text)) | Some(ItemValue::Url(text)) => {
                PropertyValue::Text(text.to_string())
            }
            None => PropertyValue::Missing,
        };

        for name in property.item_prop().unwrap_or_default() {
            map.entry(name.clone()).or_default().push(value.clone());
        }
    }

    map
}
