//! Ordered position-indexed container nodes.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::node::Node;

/// An ordered index→node container.
///
/// Items are full nodes; plain values passed to [`add`](Sequence::add) are
/// wrapped into scalars via their `Into<Node>` conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    items: Vec<Node>,
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn add(&mut self, item: impl Into<Node>) {
        self.items.push(item.into());
    }

    /// Replace the item at `index`. Returns whether an item existed there.
    pub fn set(&mut self, index: usize, item: impl Into<Node>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item.into();
                true
            }
            None => false,
        }
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Remove the item at `index`. Returns whether an item was removed.
    pub fn delete(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The items in order.
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to a plain ordered list.
    pub fn to_plain(&self) -> Value {
        Value::Array(self.items.iter().map(Node::to_plain).collect())
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
