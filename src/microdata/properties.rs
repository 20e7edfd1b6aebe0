use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;
use serde_json::Value;

use crate::core::{MicrodataError, MicrodataResult};

use super::document::NodeId;
use super::element::{Element, MicrodataElement};
use super::node_list::PropertyNodeList;

/// Collects the property elements of the item created by `root`
///
/// Elements referenced through `itemref` come first, then the item's own
/// subtree in pre-order. Descent stops below nested items, and every element
/// is visited at most once so `itemref` cycles terminate.
pub(crate) fn build_property_list(root: Element<'_>) -> Vec<NodeId> {
    let document = root.document();
    let mut roots = Vec::new();

    for id in root.item_ref().unwrap_or_default() {
        match document.get_element_by_id(id) {
            Some(referenced) => roots.push(referenced),
            None => tracing::debug!("itemref '{id}' does not match any element"),
        }
    }
    roots.extend(root.children());

    crawl_properties(roots, HashSet::from([root.node_id()]))
}

fn crawl_properties(roots: Vec<Element<'_>>, mut visited: HashSet<NodeId>) -> Vec<NodeId> {
    let mut properties = Vec::new();
    let mut stack: Vec<Element<'_>> = roots.into_iter().rev().collect();

    while let Some(element) = stack.pop() {
        if !visited.insert(element.node_id()) {
            tracing::debug!(
                "Skipping <{}> (node {}): already visited while collecting properties",
                element.tag_name(),
                element.node_id()
            );
            continue;
        }

        if element.item_prop().is_some() {
            properties.push(element.node_id());
        }

        if !element.item_scope() {
            stack.extend(element.children().rev());
        }
    }

    properties
}

/// Key for [`PropertiesCollection::get`]: a property name or a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Name(String),
    Index(usize),
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        PropertyKey::Index(index)
    }
}

impl TryFrom<&Value> for PropertyKey {
    type Error = MicrodataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(PropertyKey::Name(name.clone())),
            Value::Number(number) => number
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .map(PropertyKey::Index)
                .ok_or_else(|| MicrodataError::UnsupportedKey(value.to_string())),
            other => Err(MicrodataError::UnsupportedKey(other.to_string())),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => write!(f, "{name}"),
            PropertyKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// What [`PropertiesCollection::get`] yields for a key
#[derive(Debug, Clone)]
pub enum PropertyEntry<'doc> {
    /// All properties with the requested name
    Named(PropertyNodeList<'doc>),
    /// The property at the requested position
    Element(Element<'doc>),
}

impl<'doc> PropertyEntry<'doc> {
    pub fn as_node_list(&self) -> Option<&PropertyNodeList<'doc>> {
        match self {
            PropertyEntry::Named(list) => Some(list),
            PropertyEntry::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<Element<'doc>> {
        match self {
            PropertyEntry::Element(element) => Some(*element),
            PropertyEntry::Named(_) => None,
        }
    }
}

/// Read-only view of the properties of one item
#[derive(Clone, Copy)]
pub struct PropertiesCollection<'doc> {
    owner: Element<'doc>,
}

impl<'doc> PropertiesCollection<'doc> {
    pub(crate) fn new(owner: Element<'doc>) -> Self {
        Self { owner }
    }

    /// The element whose item these properties belong to
    pub fn owner(&self) -> Element<'doc> {
        self.owner
    }

    fn members(&self) -> &'doc [NodeId] {
        let owner = self.owner;
        owner
            .entry()
            .cache
            .properties
            .get_or_init(|| build_property_list(owner))
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// Property elements, references first, then in tree order
    pub fn iter(&self) -> impl Iterator<Item = Element<'doc>> + 'doc {
        let document = self.owner.document();
        self.members()
            .iter()
            .map(move |&node_id| Element::new(document, node_id))
    }

    /// Distinct property names, in first-appearance order
    pub fn names(&self) -> &'doc [String] {
        let collection = *self;
        self.owner
            .entry()
            .cache
            .property_names
            .get_or_init(|| {
                let mut names = IndexSet::new();
                for property in collection.iter() {
                    names.extend(property.item_prop().unwrap_or_default().iter().cloned());
                }
                names.into_iter().collect()
            })
    }

    pub fn item(&self, index: usize) -> MicrodataResult<Element<'doc>> {
        let members = self.members();
        members
            .get(index)
            .map(|&node_id| Element::new(self.owner.document(), node_id))
            .ok_or(MicrodataError::OutOfRange {
                index,
                length: members.len(),
            })
    }

    pub fn get_item(&self, index: usize) -> MicrodataResult<Element<'doc>> {
        self.item(index)
    }

    /// Properties whose names include `name`; empty when there is none
    pub fn named_item(&self, name: &str) -> PropertyNodeList<'doc> {
        let nodes = self
            .iter()
            .filter(|property| {
                property
                    .item_prop()
                    .is_some_and(|names| names.iter().any(|n| n == name))
            })
            .map(|property| property.node_id())
            .collect();

        PropertyNodeList::new(self.owner.document(), nodes)
    }

    pub fn get_named_item(&self, name: &str) -> PropertyNodeList<'doc> {
        self.named_item(name)
    }

    /// Looks up properties by name or by position
    pub fn get(&self, key: impl Into<PropertyKey>) -> MicrodataResult<PropertyEntry<'doc>> {
        match key.into() {
            PropertyKey::Name(name) => Ok(PropertyEntry::Named(self.named_item(&name))),
            PropertyKey::Index(index) => self.item(index).map(PropertyEntry::Element),
        }
    }

    /// Whether `get` would find something for the key
    ///
    /// A name is present when at least one property carries it.
    pub fn contains(&self, key: impl Into<PropertyKey>) -> bool {
        match key.into() {
            PropertyKey::Name(name) => self.names().contains(&name),
            PropertyKey::Index(index) => index < self.len(),
        }
    }

    pub fn set(&self, _key: impl Into<PropertyKey>, _value: Element<'doc>) -> MicrodataResult<()> {
        Err(MicrodataError::ImmutableMutation)
    }

    pub fn remove(&self, _key: impl Into<PropertyKey>) -> MicrodataResult<()> {
        Err(MicrodataError::ImmutableMutation)
    }
}

impl<'doc> IntoIterator for PropertiesCollection<'doc> {
    type Item = Element<'doc>;
    type IntoIter = Box<dyn Iterator<Item = Element<'doc>> + 'doc>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Debug for PropertiesCollection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesCollection")
            .field("owner", &self.owner)
            .field("names", &self.names())
            .finish()
    }
}
