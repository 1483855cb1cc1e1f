//! Unwrapping and the node-aware equality/nullability verdicts.
//!
//! Every verdict function first consults the chain's recorded mode. When
//! value mode was never entered it returns `None`, which tells the chain to
//! run the host default instead — the engine never interferes with ordinary
//! plain-value assertions.

use serde_json::Value;
use yaml_tree::{Mapping, NodeRef, PairValue, Sequence};

use crate::mode::NodeMode;
use crate::subject::{Expected, Subject};

static NULL: Value = Value::Null;

/// A node unwrapped to its comparable payload.
///
/// Leaves unwrap to plain values (or the unset state). Containers stay as
/// themselves: their identity is what shallow equality compares, and their
/// serialized form is what deep equality compares.
#[derive(Debug, Clone, Copy)]
pub enum Unwrapped<'a> {
    /// The value slot was never set.
    Undefined,
    /// A plain leaf value, including null.
    Plain(&'a Value),
    Map(&'a Mapping),
    Seq(&'a Sequence),
}

/// Recursively extract a node's comparable payload.
///
/// Pairs delegate to their value slot, documents to their contents. Absent
/// document contents read as null. Recursion terminates because node trees
/// are finite by ownership.
pub fn unwrap(node: NodeRef<'_>) -> Unwrapped<'_> {
    match node {
        NodeRef::Scalar(scalar) => match scalar.value() {
            Some(value) => Unwrapped::Plain(value),
            None => Unwrapped::Undefined,
        },
        NodeRef::Pair(pair) => match pair.value() {
            PairValue::Undefined => Unwrapped::Undefined,
            PairValue::Plain(value) => Unwrapped::Plain(value),
            PairValue::Node(node) => unwrap(node.view()),
        },
        NodeRef::Map(map) => Unwrapped::Map(map),
        NodeRef::Seq(seq) => Unwrapped::Seq(seq),
        NodeRef::Document(doc) => match doc.contents() {
            Some(contents) => unwrap(contents.view()),
            None => Unwrapped::Plain(&NULL),
        },
    }
}

/// Render an unwrapped comparable for failure messages.
pub fn describe(unwrapped: Unwrapped<'_>) -> String {
    match to_plain(unwrapped) {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// Normalize to the serialized plain form; `None` is the unset state.
fn to_plain(unwrapped: Unwrapped<'_>) -> Option<Value> {
    match unwrapped {
        Unwrapped::Undefined => None,
        Unwrapped::Plain(value) => Some(value.clone()),
        Unwrapped::Map(map) => Some(map.to_plain()),
        Unwrapped::Seq(seq) => Some(seq.to_plain()),
    }
}

/// Shallow equality: instance identity for containers, strict equality for
/// leaves. Structurally identical but distinct containers are not equal,
/// and a container never equals a leaf.
fn shallow_eq(actual: Unwrapped<'_>, expected: Unwrapped<'_>) -> bool {
    match (actual, expected) {
        (Unwrapped::Undefined, Unwrapped::Undefined) => true,
        (Unwrapped::Plain(a), Unwrapped::Plain(b)) => a == b,
        (Unwrapped::Map(a), Unwrapped::Map(b)) => std::ptr::eq(a, b),
        (Unwrapped::Seq(a), Unwrapped::Seq(b)) => std::ptr::eq(a, b),
        _ => false,
    }
}

/// Deep equality: both sides normalized to their serialized plain form and
/// compared structurally. Mapping comparison is key-set based regardless of
/// insertion order; sequence comparison is positional.
fn deep_eq(actual: Unwrapped<'_>, expected: Unwrapped<'_>) -> bool {
    to_plain(actual) == to_plain(expected)
}

/// The subject as a node, provided the chain is in value mode.
fn value_subject<'a>(mode: &NodeMode, subject: &Subject<'a>) -> Option<NodeRef<'a>> {
    if !mode.is_value() {
        return None;
    }
    match subject {
        Subject::Node(node) => Some(*node),
        Subject::Plain(_) => None,
    }
}

fn unwrap_expected<'a>(expected: &'a Expected<'a>) -> Unwrapped<'a> {
    match expected {
        Expected::Node(node) => unwrap(*node),
        Expected::Plain(value) => Unwrapped::Plain(value),
    }
}

/// Node-aware `eq`. `None` when value mode is not active.
pub(crate) fn value_eq(
    mode: &NodeMode,
    subject: &Subject<'_>,
    expected: &Expected<'_>,
    deep: bool,
) -> Option<bool> {
    let node = value_subject(mode, subject)?;
    let actual = unwrap(node);
    let expected = unwrap_expected(expected);
    Some(if deep {
        deep_eq(actual, expected)
    } else {
        shallow_eq(actual, expected)
    })
}

/// Node-aware null check: true iff the unwrapped comparable is exactly
/// null. Containers are never null, even when empty; an unset slot is not
/// null either. `None` when value mode is not active.
pub(crate) fn value_null(mode: &NodeMode, subject: &Subject<'_>) -> Option<bool> {
    let node = value_subject(mode, subject)?;
    Some(matches!(unwrap(node), Unwrapped::Plain(Value::Null)))
}

/// Node-aware undefined check: true iff the unwrapped comparable is the
/// unset state. Same container exclusion as the null check. `None` when
/// value mode is not active.
pub(crate) fn value_undefined(mode: &NodeMode, subject: &Subject<'_>) -> Option<bool> {
    let node = value_subject(mode, subject)?;
    Some(matches!(unwrap(node), Unwrapped::Undefined))
}

/// Node-aware containment: whether some entry of the subject container
/// unwraps equal to the expected comparable. Entry comparison is the
/// shallow one — containment looks for a matching leaf, not a matching
/// structure. Non-container subjects contain nothing. `None` when value
/// mode is not active.
pub(crate) fn value_contains(
    mode: &NodeMode,
    subject: &Subject<'_>,
    expected: &Expected<'_>,
) -> Option<bool> {
    let node = value_subject(mode, subject)?;
    let want = unwrap_expected(expected);
    Some(match unwrap(node) {
        Unwrapped::Map(map) => map
            .items()
            .iter()
            .any(|pair| shallow_eq(unwrap(NodeRef::Pair(pair)), want)),
        Unwrapped::Seq(seq) => seq
            .items()
            .iter()
            .any(|item| shallow_eq(unwrap(item.view()), want)),
        _ => false,
    })
}
