//! Assertion subjects, comparison values, and node classification.

use serde_json::Value;
use yaml_tree::{Document, Mapping, Node, NodeKind, NodeRef, Pair, Scalar, Sequence};

/// The subject of an assertion chain: a borrowed document node or an owned
/// plain value.
///
/// Classification is total — every subject is either a node of exactly one
/// kind or plain, and nothing else.
#[derive(Debug, Clone)]
pub enum Subject<'a> {
    Node(NodeRef<'a>),
    Plain(Value),
}

impl<'a> Subject<'a> {
    /// The subject's node kind, or `None` for plain values.
    pub fn classify(&self) -> Option<NodeKind> {
        match self {
            Subject::Node(node) => Some(node.kind()),
            Subject::Plain(_) => None,
        }
    }

    /// Whether the subject is a document node at all.
    pub fn is_node(&self) -> bool {
        self.classify().is_some()
    }
}

impl<'a> From<NodeRef<'a>> for Subject<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Subject::Node(node)
    }
}

impl<'a> From<&'a Node> for Subject<'a> {
    fn from(node: &'a Node) -> Self {
        Subject::Node(node.view())
    }
}

impl<'a> From<&'a Scalar> for Subject<'a> {
    fn from(scalar: &'a Scalar) -> Self {
        Subject::Node(NodeRef::Scalar(scalar))
    }
}

impl<'a> From<&'a Pair> for Subject<'a> {
    fn from(pair: &'a Pair) -> Self {
        Subject::Node(NodeRef::Pair(pair))
    }
}

impl<'a> From<&'a Mapping> for Subject<'a> {
    fn from(map: &'a Mapping) -> Self {
        Subject::Node(NodeRef::Map(map))
    }
}

impl<'a> From<&'a Sequence> for Subject<'a> {
    fn from(seq: &'a Sequence) -> Self {
        Subject::Node(NodeRef::Seq(seq))
    }
}

impl<'a> From<&'a Document> for Subject<'a> {
    fn from(doc: &'a Document) -> Self {
        Subject::Node(NodeRef::Document(doc))
    }
}

impl From<Value> for Subject<'_> {
    fn from(value: Value) -> Self {
        Subject::Plain(value)
    }
}

impl From<&str> for Subject<'_> {
    fn from(value: &str) -> Self {
        Subject::Plain(value.into())
    }
}

impl From<String> for Subject<'_> {
    fn from(value: String) -> Self {
        Subject::Plain(value.into())
    }
}

impl From<i64> for Subject<'_> {
    fn from(value: i64) -> Self {
        Subject::Plain(value.into())
    }
}

impl From<f64> for Subject<'_> {
    fn from(value: f64) -> Self {
        Subject::Plain(value.into())
    }
}

impl From<bool> for Subject<'_> {
    fn from(value: bool) -> Self {
        Subject::Plain(value.into())
    }
}

impl From<()> for Subject<'_> {
    fn from(_: ()) -> Self {
        Subject::Plain(Value::Null)
    }
}

/// A comparison value handed to `eq` or `contains_value`: a borrowed node
/// of any kind, or an owned plain value.
#[derive(Debug, Clone)]
pub enum Expected<'a> {
    Node(NodeRef<'a>),
    Plain(Value),
}

impl<'a> From<NodeRef<'a>> for Expected<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Expected::Node(node)
    }
}

impl<'a> From<&'a Node> for Expected<'a> {
    fn from(node: &'a Node) -> Self {
        Expected::Node(node.view())
    }
}

impl<'a> From<&'a Scalar> for Expected<'a> {
    fn from(scalar: &'a Scalar) -> Self {
        Expected::Node(NodeRef::Scalar(scalar))
    }
}

impl<'a> From<&'a Pair> for Expected<'a> {
    fn from(pair: &'a Pair) -> Self {
        Expected::Node(NodeRef::Pair(pair))
    }
}

impl<'a> From<&'a Mapping> for Expected<'a> {
    fn from(map: &'a Mapping) -> Self {
        Expected::Node(NodeRef::Map(map))
    }
}

impl<'a> From<&'a Sequence> for Expected<'a> {
    fn from(seq: &'a Sequence) -> Self {
        Expected::Node(NodeRef::Seq(seq))
    }
}

impl<'a> From<&'a Document> for Expected<'a> {
    fn from(doc: &'a Document) -> Self {
        Expected::Node(NodeRef::Document(doc))
    }
}

impl From<Value> for Expected<'_> {
    fn from(value: Value) -> Self {
        Expected::Plain(value)
    }
}

impl From<&str> for Expected<'_> {
    fn from(value: &str) -> Self {
        Expected::Plain(value.into())
    }
}

impl From<String> for Expected<'_> {
    fn from(value: String) -> Self {
        Expected::Plain(value.into())
    }
}

impl From<i64> for Expected<'_> {
    fn from(value: i64) -> Self {
        Expected::Plain(value.into())
    }
}

impl From<f64> for Expected<'_> {
    fn from(value: f64) -> Self {
        Expected::Plain(value.into())
    }
}

impl From<bool> for Expected<'_> {
    fn from(value: bool) -> Self {
        Expected::Plain(value.into())
    }
}

impl From<()> for Expected<'_> {
    fn from(_: ()) -> Self {
        Expected::Plain(Value::Null)
    }
}
