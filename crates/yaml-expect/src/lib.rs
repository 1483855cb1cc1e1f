//! # yaml-expect
//!
//! Node-aware fluent assertions over [`yaml_tree`] document nodes.
//!
//! An assertion chain starts with [`expect`] and reads left to right:
//! builder methods (`value`, `deep`, `not`) set per-chain flags, finisher
//! methods (`eq`, `is_null`, `is_undefined`, ...) produce the verdict.
//! Entering `value` mode makes the finishers compare the node's logical
//! value — the unwrapped scalar payload, a pair's value slot, a document's
//! contents — instead of the node object itself. Chains over plain values
//! keep ordinary strict-equality semantics; the node-aware engine never
//! interferes with them.
//!
//! ```rust
//! use yaml_expect::expect;
//! use yaml_tree::{Document, Scalar};
//!
//! let node = Scalar::new("hello");
//! expect(&node).value().eq("hello");
//!
//! let doc = Document::empty();
//! expect(&doc).value().is_null();
//! ```
//!
//! Every panicking finisher has a `try_`-prefixed twin returning
//! [`Result`], which is what test helpers use to inspect failures.
//!
//! ## Modules
//!
//! - [`expect`](mod@expect) — the assertion chain and its finishers
//! - [`subject`] — subjects, comparison values, and node classification
//! - [`mode`] — the per-chain mode tracker
//! - [`engine`] — unwrapping plus the equality/nullability verdicts
//! - [`error`] — failure reporting

pub mod engine;
pub mod error;
pub mod expect;
pub mod mode;
pub mod subject;

pub use error::{AssertionError, Result};
pub use expect::{expect, Assertion};
pub use mode::{NodeMode, Property};
pub use subject::{Expected, Subject};
