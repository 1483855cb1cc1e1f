//! The node sum type, kind tags, and borrowed views.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::document::Document;
use crate::map::Mapping;
use crate::pair::Pair;
use crate::scalar::Scalar;
use crate::seq::Sequence;

/// The closed set of node kinds a document tree is built from.
///
/// Kinds are copied by value wherever classification is recorded, so a
/// recorded kind never keeps the node it came from alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Pair,
    Map,
    Seq,
    Document,
}

/// An owned document-tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Pair(Pair),
    Map(Mapping),
    Seq(Sequence),
    Document(Document),
}

impl Node {
    /// The kind tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Pair(_) => NodeKind::Pair,
            Node::Map(_) => NodeKind::Map,
            Node::Seq(_) => NodeKind::Seq,
            Node::Document(_) => NodeKind::Document,
        }
    }

    /// A borrowed, kind-tagged view of this node.
    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Node::Scalar(s) => NodeRef::Scalar(s),
            Node::Pair(p) => NodeRef::Pair(p),
            Node::Map(m) => NodeRef::Map(m),
            Node::Seq(s) => NodeRef::Seq(s),
            Node::Document(d) => NodeRef::Document(d),
        }
    }

    /// Build a node tree from a plain value: objects become mappings,
    /// arrays become sequences, everything else a scalar.
    pub fn from_plain(value: Value) -> Node {
        match value {
            Value::Object(map) => {
                let mut out = Mapping::new();
                for (key, value) in map {
                    out.set(key, Node::from_plain(value));
                }
                Node::Map(out)
            }
            Value::Array(items) => {
                let mut out = Sequence::new();
                for item in items {
                    out.add(Node::from_plain(item));
                }
                Node::Seq(out)
            }
            leaf => Node::Scalar(Scalar::new(leaf)),
        }
    }

    /// Serialize to a plain value.
    pub fn to_plain(&self) -> Value {
        match self {
            Node::Scalar(s) => s.to_plain(),
            Node::Pair(p) => p.to_plain(),
            Node::Map(m) => m.to_plain(),
            Node::Seq(s) => s.to_plain(),
            Node::Document(d) => d.to_plain(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<Pair> for Node {
    fn from(pair: Pair) -> Self {
        Node::Pair(pair)
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Node::Map(map)
    }
}

impl From<Sequence> for Node {
    fn from(seq: Sequence) -> Self {
        Node::Seq(seq)
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        Node::Document(doc)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from_plain(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::new(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::new(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Scalar::new(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::new(value))
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Scalar(Scalar::null())
    }
}

/// A borrowed view of a node, tagged by kind.
///
/// Views are `Copy` and compare by the address of the node they borrow,
/// which is what instance identity means for containers.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Scalar(&'a Scalar),
    Pair(&'a Pair),
    Map(&'a Mapping),
    Seq(&'a Sequence),
    Document(&'a Document),
}

impl<'a> NodeRef<'a> {
    /// The kind tag of the viewed node.
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Scalar(_) => NodeKind::Scalar,
            NodeRef::Pair(_) => NodeKind::Pair,
            NodeRef::Map(_) => NodeKind::Map,
            NodeRef::Seq(_) => NodeKind::Seq,
            NodeRef::Document(_) => NodeKind::Document,
        }
    }

    /// Whether both views borrow the very same node.
    pub fn same_instance(self, other: NodeRef<'_>) -> bool {
        match (self, other) {
            (NodeRef::Scalar(a), NodeRef::Scalar(b)) => std::ptr::eq(a, b),
            (NodeRef::Pair(a), NodeRef::Pair(b)) => std::ptr::eq(a, b),
            (NodeRef::Map(a), NodeRef::Map(b)) => std::ptr::eq(a, b),
            (NodeRef::Seq(a), NodeRef::Seq(b)) => std::ptr::eq(a, b),
            (NodeRef::Document(a), NodeRef::Document(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }

    /// Serialize the viewed node to a plain value.
    pub fn to_plain(self) -> Value {
        match self {
            NodeRef::Scalar(s) => s.to_plain(),
            NodeRef::Pair(p) => p.to_plain(),
            NodeRef::Map(m) => m.to_plain(),
            NodeRef::Seq(s) => s.to_plain(),
            NodeRef::Document(d) => d.to_plain(),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        node.view()
    }
}

impl<'a> From<&'a Scalar> for NodeRef<'a> {
    fn from(scalar: &'a Scalar) -> Self {
        NodeRef::Scalar(scalar)
    }
}

impl<'a> From<&'a Pair> for NodeRef<'a> {
    fn from(pair: &'a Pair) -> Self {
        NodeRef::Pair(pair)
    }
}

impl<'a> From<&'a Mapping> for NodeRef<'a> {
    fn from(map: &'a Mapping) -> Self {
        NodeRef::Map(map)
    }
}

impl<'a> From<&'a Sequence> for NodeRef<'a> {
    fn from(seq: &'a Sequence) -> Self {
        NodeRef::Seq(seq)
    }
}

impl<'a> From<&'a Document> for NodeRef<'a> {
    fn from(doc: &'a Document) -> Self {
        NodeRef::Document(doc)
    }
}
