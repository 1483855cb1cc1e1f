/// Document unwrap chain: a document compares as whatever its contents
/// unwrap to, and absent contents read as null.
use serde_json::{json, Value};
use yaml_expect::expect;
use yaml_tree::{Document, Scalar};

#[test]
fn empty_document_is_null() {
    let doc = Document::empty();
    expect(&doc).value().is_null();
    expect(&doc).value().try_undefined().unwrap_err();
}

#[test]
fn document_of_explicit_null_is_null() {
    let doc = Document::new(Value::Null);
    expect(&doc).value().is_null();
}

#[test]
fn document_scalar_contents_compare_as_the_leaf() {
    expect(&Document::new("hello")).value().eq("hello");
    expect(&Document::new(11)).value().eq(11);
    expect(&Document::new(11)).value().not().eq(12);
}

#[test]
fn document_compares_equal_to_a_scalar_with_the_same_payload() {
    let doc = Document::new(11);
    let scalar = Scalar::new(11);
    expect(&doc).value().eq(&scalar);
}

#[test]
fn document_map_contents_deep_equal_plain_mapping() {
    let doc = Document::new(json!({}));
    expect(&doc).value().deep().eq(json!({}));

    let doc = Document::new(json!({"hi": "hello"}));
    expect(&doc).value().deep().eq(json!({"hi": "hello"}));
    // Shallow comparison against a plain mapping is an identity check and fails.
    expect(&doc).value().try_eq(json!({"hi": "hello"})).unwrap_err();
}

#[test]
fn document_seq_contents_deep_equal_plain_list() {
    let doc = Document::new(json!([1]));
    expect(&doc).value().deep().eq(json!([1]));
    expect(&doc).value().deep().try_eq(json!([2])).unwrap_err();
}

#[test]
fn document_unwraps_through_nested_scalar_contents() {
    let doc = Document::new(Scalar::new("x"));
    expect(&doc).value().eq("x");
}

#[test]
fn two_documents_compare_by_unwrapped_contents() {
    let a = Document::new("same");
    let b = Document::new("same");
    expect(&a).value().eq(&b);

    let empty_a = Document::empty();
    let empty_b = Document::empty();
    // Both unwrap to null, a leaf, so even shallow equality holds.
    expect(&empty_a).value().eq(&empty_b);
}

#[test]
fn document_with_container_contents_is_not_null() {
    let doc = Document::new(json!({}));
    expect(&doc).value().try_null().unwrap_err();
}
