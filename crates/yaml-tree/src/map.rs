//! Ordered key-indexed container nodes.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::pair::{Pair, PairValue};

/// An ordered key→value container node.
///
/// Keys are unique. `set` on an existing key replaces the value in place so
/// the entry keeps its original position; `delete` removes the entry
/// entirely. Serialization reflects the current entries only — mutation
/// history leaves no trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    items: Vec<Pair>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an existing entry in place or
    /// appending a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PairValue>) {
        let key = key.into();
        match self.items.iter_mut().find(|p| p.key() == key) {
            Some(pair) => pair.set_value(value),
            None => self.items.push(Pair::new(key, value)),
        }
    }

    /// Look up the value slot for `key`.
    pub fn get(&self, key: &str) -> Option<&PairValue> {
        self.items.iter().find(|p| p.key() == key).map(Pair::value)
    }

    /// Whether an entry for `key` exists.
    pub fn has(&self, key: &str) -> bool {
        self.items.iter().any(|p| p.key() == key)
    }

    /// Remove the entry for `key`. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.key() != key);
        self.items.len() != before
    }

    /// The entries in insertion order.
    pub fn items(&self) -> &[Pair] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to a plain mapping, preserving entry order.
    pub fn to_plain(&self) -> Value {
        let mut map = Map::new();
        for pair in &self.items {
            map.insert(pair.key().to_string(), pair.value().to_plain());
        }
        Value::Object(map)
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
