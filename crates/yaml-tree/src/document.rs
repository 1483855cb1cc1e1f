//! Top-level document wrappers.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::node::Node;

/// A whole-document wrapper whose contents is the root node of a tree, or
/// absent for an empty document.
///
/// `Document::new(v)` accepts anything convertible to a node, so plain
/// values build the tree via [`Node::from_plain`]: `Document::new(11)`
/// wraps a scalar, `Document::new(json!({"a": 1}))` a mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    contents: Option<Box<Node>>,
}

impl Document {
    /// Create a document with absent contents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a document rooted at `contents`.
    pub fn new(contents: impl Into<Node>) -> Self {
        Self {
            contents: Some(Box::new(contents.into())),
        }
    }

    /// The root node, or `None` for an empty document.
    pub fn contents(&self) -> Option<&Node> {
        self.contents.as_deref()
    }

    /// Replace the root node.
    pub fn set_contents(&mut self, contents: impl Into<Node>) {
        self.contents = Some(Box::new(contents.into()));
    }

    /// Remove the root node, leaving the document empty.
    pub fn clear_contents(&mut self) {
        self.contents = None;
    }

    /// Serialize to a plain value. An empty document serializes as null.
    pub fn to_plain(&self) -> Value {
        match &self.contents {
            Some(node) => node.to_plain(),
            None => Value::Null,
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
