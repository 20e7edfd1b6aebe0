use crate::core::{MicrodataError, MicrodataResult};

use super::document::{MicrodataDocument, NodeId};
use super::element::{Element, ItemValue, MicrodataElement};

/// Ordered, read-only list of the properties sharing one name
#[derive(Debug, Clone)]
pub struct PropertyNodeList<'doc> {
    document: &'doc MicrodataDocument,
    nodes: Vec<NodeId>,
}

impl<'doc> PropertyNodeList<'doc> {
    pub(crate) fn new(document: &'doc MicrodataDocument, nodes: Vec<NodeId>) -> Self {
        Self { document, nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Element<'doc>> + '_ {
        self.nodes
            .iter()
            .map(|&node_id| Element::new(self.document, node_id))
    }

    pub fn item(&self, index: usize) -> MicrodataResult<Element<'doc>> {
        self.get(index).ok_or(MicrodataError::OutOfRange {
            index,
            length: self.nodes.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<Element<'doc>> {
        self.nodes
            .get(index)
            .map(|&node_id| Element::new(self.document, node_id))
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.nodes.len()
    }

    /// Values of the listed properties, in list order
    pub fn values(&self) -> Vec<Option<ItemValue<'doc>>> {
        self.iter().map(|element| element.item_value()).collect()
    }

    /// Alias of [`values`](Self::values)
    pub fn get_values(&self) -> Vec<Option<ItemValue<'doc>>> {
        self.values()
    }

    pub fn set(&self, _index: usize, _value: Element<'doc>) -> MicrodataResult<()> {
        Err(MicrodataError::ImmutableMutation)
    }

    pub fn remove(&self, _index: usize) -> MicrodataResult<()> {
        Err(MicrodataError::ImmutableMutation)
    }
}

impl<'a, 'doc> IntoIterator for &'a PropertyNodeList<'doc> {
    type Item = Element<'doc>;
    type IntoIter = Box<dyn Iterator<Item = Element<'doc>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
