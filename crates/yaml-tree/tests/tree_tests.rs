/// Contract tests for tree construction, container mutation, and
/// serialization to plain values.
use serde_json::{json, Value};
use yaml_tree::{Document, Mapping, Node, NodeKind, Pair, PairValue, Scalar, Sequence};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalar_wraps_value() {
    let node = Scalar::new("hello");
    assert_eq!(node.value(), Some(&json!("hello")));
    assert_eq!(node.to_plain(), json!("hello"));
}

#[test]
fn scalar_null_is_set() {
    let node = Scalar::null();
    assert_eq!(node.value(), Some(&Value::Null));
    assert_eq!(node.to_plain(), Value::Null);
}

#[test]
fn scalar_undefined_slot_is_unset() {
    let node = Scalar::undefined();
    assert_eq!(node.value(), None);
    // The plain representation has no unset state.
    assert_eq!(node.to_plain(), Value::Null);
}

#[test]
fn scalar_set_replaces_value() {
    let mut node = Scalar::undefined();
    node.set(42);
    assert_eq!(node.value(), Some(&json!(42)));
}

// ============================================================================
// Pairs
// ============================================================================

#[test]
fn pair_serializes_to_single_entry_mapping() {
    let pair = Pair::new("hi", "hello");
    assert_eq!(pair.to_plain(), json!({"hi": "hello"}));
}

#[test]
fn pair_value_can_be_a_nested_node() {
    let pair = Pair::new("nested", Scalar::new(5));
    match pair.value() {
        PairValue::Node(node) => assert_eq!(node.kind(), NodeKind::Scalar),
        other => panic!("expected a node slot, got: {other:?}"),
    }
    assert_eq!(pair.to_plain(), json!({"nested": 5}));
}

#[test]
fn pair_undefined_slot_serializes_as_null() {
    let pair = Pair::new("maybe", PairValue::Undefined);
    assert_eq!(pair.to_plain(), json!({"maybe": null}));
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn mapping_set_appends_in_order() {
    let mut map = Mapping::new();
    map.set("a", 1);
    map.set("b", 2);
    let keys: Vec<&str> = map.items().iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.to_plain(), json!({"a": 1, "b": 2}));
}

#[test]
fn mapping_set_existing_key_replaces_in_place() {
    let mut map = Mapping::new();
    map.set("a", 1);
    map.set("b", 2);
    map.set("a", 10);
    let keys: Vec<&str> = map.items().iter().map(|p| p.key()).collect();
    // Replacement keeps the original position.
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&PairValue::Plain(json!(10))));
}

#[test]
fn mapping_delete_removes_entry() {
    let mut map = Mapping::new();
    map.set("a", 1);
    map.set("b", 2);
    assert!(map.delete("a"));
    assert!(!map.delete("a"));
    assert!(!map.has("a"));
    assert_eq!(map.to_plain(), json!({"b": 2}));
}

#[test]
fn mapping_get_missing_key() {
    let map = Mapping::new();
    assert_eq!(map.get("nope"), None);
    assert!(map.is_empty());
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn sequence_add_and_serialize() {
    let mut seq = Sequence::new();
    seq.add("hi");
    seq.add("hello2");
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.to_plain(), json!(["hi", "hello2"]));
}

#[test]
fn sequence_set_replaces_existing_index_only() {
    let mut seq = Sequence::new();
    seq.add(1);
    seq.add(2);
    assert!(seq.set(1, 20));
    assert!(!seq.set(5, 50));
    assert_eq!(seq.to_plain(), json!([1, 20]));
}

#[test]
fn sequence_delete_and_clear() {
    let mut seq = Sequence::new();
    seq.add("a");
    seq.add("b");
    assert!(seq.delete(0));
    assert!(!seq.delete(7));
    assert_eq!(seq.to_plain(), json!(["b"]));
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.to_plain(), json!([]));
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn empty_document_serializes_as_null() {
    let doc = Document::empty();
    assert_eq!(doc.contents(), None);
    assert_eq!(doc.to_plain(), Value::Null);
}

#[test]
fn document_wraps_plain_values_as_trees() {
    let doc = Document::new(json!({"a": [1, 2]}));
    assert_eq!(doc.contents().map(Node::kind), Some(NodeKind::Map));
    assert_eq!(doc.to_plain(), json!({"a": [1, 2]}));
}

#[test]
fn document_contents_can_be_cleared() {
    let mut doc = Document::new(11);
    assert_eq!(doc.to_plain(), json!(11));
    doc.clear_contents();
    assert_eq!(doc.to_plain(), Value::Null);
}

// ============================================================================
// Node conversions and kinds
// ============================================================================

#[test]
fn from_plain_builds_the_expected_kinds() {
    assert_eq!(Node::from_plain(json!("x")).kind(), NodeKind::Scalar);
    assert_eq!(Node::from_plain(json!(null)).kind(), NodeKind::Scalar);
    assert_eq!(Node::from_plain(json!({})).kind(), NodeKind::Map);
    assert_eq!(Node::from_plain(json!([])).kind(), NodeKind::Seq);
}

#[test]
fn from_plain_to_plain_roundtrips_nested_trees() {
    let value = json!({
        "name": "Alice",
        "scores": [95, 87, 92],
        "meta": {"active": true, "note": null}
    });
    assert_eq!(Node::from_plain(value.clone()).to_plain(), value);
}

#[test]
fn all_kinds_are_distinct() {
    let nodes: Vec<Node> = vec![
        Scalar::new(1).into(),
        Pair::new("k", 1).into(),
        Mapping::new().into(),
        Sequence::new().into(),
        Document::empty().into(),
    ];
    let kinds: Vec<NodeKind> = nodes.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Scalar,
            NodeKind::Pair,
            NodeKind::Map,
            NodeKind::Seq,
            NodeKind::Document,
        ]
    );
}

#[test]
fn serde_serialization_matches_to_plain() {
    let node = Node::from_plain(json!({"a": [1, {"b": null}]}));
    assert_eq!(serde_json::to_value(&node).unwrap(), node.to_plain());

    let doc = Document::empty();
    assert_eq!(serde_json::to_value(&doc).unwrap(), Value::Null);
}
