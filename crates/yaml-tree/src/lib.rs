//! # yaml-tree
//!
//! Programmatic YAML-style document trees: scalars, key/value pairs, ordered
//! maps, sequences, and whole-document wrappers.
//!
//! Trees are built directly through constructors and container mutation, not
//! by parsing text. Every node serializes to a plain [`serde_json::Value`]
//! via `to_plain`, which is also how nodes implement [`serde::Serialize`].
//!
//! ## Quick start
//!
//! ```rust
//! use yaml_tree::{Document, Mapping, Node};
//!
//! let mut map = Mapping::new();
//! map.set("hi", "hello");
//! let doc = Document::new(Node::Map(map));
//! assert_eq!(doc.to_plain(), serde_json::json!({"hi": "hello"}));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the [`Node`] sum type, [`NodeKind`] tags, borrowed [`NodeRef`] views
//! - [`scalar`] — leaf nodes wrapping a single plain value
//! - [`pair`] — key/value association nodes
//! - [`map`] — ordered key-indexed containers
//! - [`seq`] — ordered position-indexed containers
//! - [`document`] — top-level wrappers around a root node

pub mod document;
pub mod map;
pub mod node;
pub mod pair;
pub mod scalar;
pub mod seq;

pub use document::Document;
pub use map::Mapping;
pub use node::{Node, NodeKind, NodeRef};
pub use pair::{Pair, PairValue};
pub use scalar::Scalar;
pub use seq::Sequence;
