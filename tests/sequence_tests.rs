//! The bare-sequence entry point and its unwrap heuristic.

use serde_json::json;
use valxml::{RenderConfig, sequence_to_xml, value_to_xml};

fn flat() -> RenderConfig {
    RenderConfig::new().with_pretty_print(false)
}

#[test]
fn scalars_take_the_root_tag_as_their_item_tag() {
    let out = sequence_to_xml(&[json!(1), json!(2)], &flat().with_root_tag("root")).unwrap();
    assert_eq!(out, "<root>1</root><root>2</root>");
}

#[test]
fn single_key_object_wrappers_are_promoted() {
    let out = sequence_to_xml(
        &[json!({"w": {"f": 1}})],
        &flat().with_root_tag("root"),
    )
    .unwrap();
    assert_eq!(out, "<root><w><f>1</f></w></root>");
}

#[test]
fn promotion_inspects_one_level_only() {
    // The wrapper's value is itself a single-key wrapper; the inner
    // double-wrap is passed through unchanged.
    let out = sequence_to_xml(
        &[json!({"w": {"v": {"f": 1}}})],
        &flat().with_root_tag("root"),
    )
    .unwrap();
    assert_eq!(out, "<root><w><v><f>1</f></v></w></root>");
}

#[test]
fn multi_key_objects_are_not_promoted() {
    let out = sequence_to_xml(
        &[json!({"a": 1, "b": 2})],
        &flat().with_root_tag("item"),
    )
    .unwrap();
    assert_eq!(out, "<item><a>1</a><b>2</b></item>");
}

#[test]
fn nulls_in_a_sequence_become_empty_item_tags() {
    let out = sequence_to_xml(&[json!(null), json!(1)], &flat().with_root_tag("x")).unwrap();
    assert_eq!(out, "<x></x><x>1</x>");
}

#[test]
fn accumulated_inner_sequences_nest_one_level_deeper() {
    // The first accumulation stores the inner list itself; the second
    // grows the slot into an array of lists, each wrapped one level down.
    let out = value_to_xml(&json!([[1, 2]]), &flat().with_root_tag("x")).unwrap();
    assert_eq!(out, "<x>1</x><x>2</x>");

    let out = value_to_xml(&json!([[1, 2], [3]]), &flat().with_root_tag("x")).unwrap();
    assert_eq!(out, "<x><x>1</x><x>2</x></x><x><x>3</x></x>");
}

#[test]
fn empty_sequence_renders_an_empty_document() {
    let out = sequence_to_xml(&[], &flat().with_root_tag("x")).unwrap();
    assert_eq!(out, "");
}

#[test]
fn prolog_flows_through_the_sequence_path() {
    let config = flat().with_root_tag("r").with_prolog(true);
    let out = sequence_to_xml(&[json!(1)], &config).unwrap();
    assert_eq!(
        out,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><r>1</r>"
    );
}

#[test]
fn pretty_sequence_indents_each_item() {
    let config = RenderConfig::new().with_indent_width(2).with_root_tag("x");
    let out = sequence_to_xml(&[json!(1), json!(2)], &config).unwrap();
    assert_eq!(out, "\n<x>1</x>\n<x>2</x>");
}
