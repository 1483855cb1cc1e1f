//! Key/value association nodes.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::map::Mapping;
use crate::node::Node;
use crate::scalar::Scalar;
use crate::seq::Sequence;

/// The value slot of a [`Pair`]: unset, a raw plain value, or a nested node.
#[derive(Debug, Clone, PartialEq)]
pub enum PairValue {
    /// The slot was never assigned.
    Undefined,
    /// A raw plain value, stored without a node wrapper.
    Plain(Value),
    /// A nested node. A pair's value is never itself a pair in practice;
    /// containers hold further pairs, not the other way around.
    Node(Box<Node>),
}

impl PairValue {
    /// Serialize to a plain value. Unset slots serialize as null.
    pub fn to_plain(&self) -> Value {
        match self {
            PairValue::Undefined => Value::Null,
            PairValue::Plain(v) => v.clone(),
            PairValue::Node(n) => n.to_plain(),
        }
    }
}

impl From<Node> for PairValue {
    fn from(node: Node) -> Self {
        PairValue::Node(Box::new(node))
    }
}

impl From<Scalar> for PairValue {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar).into()
    }
}

impl From<Mapping> for PairValue {
    fn from(map: Mapping) -> Self {
        Node::Map(map).into()
    }
}

impl From<Sequence> for PairValue {
    fn from(seq: Sequence) -> Self {
        Node::Seq(seq).into()
    }
}

impl From<Value> for PairValue {
    fn from(value: Value) -> Self {
        PairValue::Plain(value)
    }
}

impl From<&str> for PairValue {
    fn from(value: &str) -> Self {
        PairValue::Plain(value.into())
    }
}

impl From<String> for PairValue {
    fn from(value: String) -> Self {
        PairValue::Plain(value.into())
    }
}

impl From<i64> for PairValue {
    fn from(value: i64) -> Self {
        PairValue::Plain(value.into())
    }
}

impl From<f64> for PairValue {
    fn from(value: f64) -> Self {
        PairValue::Plain(value.into())
    }
}

impl From<bool> for PairValue {
    fn from(value: bool) -> Self {
        PairValue::Plain(value.into())
    }
}

impl From<()> for PairValue {
    fn from(_: ()) -> Self {
        PairValue::Plain(Value::Null)
    }
}

/// A key/value association node. Keys are plain strings; the value slot may
/// hold a raw value or a nested node.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    key: String,
    value: PairValue,
}

impl Pair {
    /// Create a pair from a key and anything convertible to a value slot.
    pub fn new(key: impl Into<String>, value: impl Into<PairValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &PairValue {
        &self.value
    }

    /// Replace the value slot.
    pub fn set_value(&mut self, value: impl Into<PairValue>) {
        self.value = value.into();
    }

    /// Serialize to a single-entry plain mapping `{key: value}`.
    pub fn to_plain(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.key.clone(), self.value.to_plain());
        Value::Object(map)
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
