//! Tests for system definition shape parsing and tag lookup

use bikes_domain::{Error, RecordShape, SystemDefinition};
use serde_json::json;

fn parse(value: serde_json::Value) -> bikes_domain::Result<SystemDefinition> {
    SystemDefinition::from_value("sys", value)
}

#[test]
fn test_flat_tags_preserve_document_order() {
    let definition = parse(json!({
        "class": "FooProvider",
        "instances": [
            {"tag": "c", "city": "Z"},
            {"tag": "a", "city": "X"},
            {"tag": "b", "city": "Y"}
        ]
    }))
    .expect("flat record should parse");

    assert!(!definition.is_namespaced());
    assert_eq!(definition.tags(), vec!["c", "a", "b"]);
    assert_eq!(definition.class_names(), vec!["FooProvider"]);
    assert_eq!(definition.len(), 3);
}

#[test]
fn test_namespaced_tags_grouped_by_class() {
    let definition = parse(json!({
        "class": {
            "Zeta": {"instances": [{"tag": "z1"}, {"tag": "z2"}]},
            "Alpha": {"instances": [{"tag": "a1"}]}
        }
    }))
    .expect("namespaced record should parse");

    assert!(definition.is_namespaced());
    // Document order, not alphabetical order
    assert_eq!(definition.class_names(), vec!["Zeta", "Alpha"]);
    assert_eq!(definition.tags(), vec!["z1", "z2", "a1"]);
}

#[test]
fn test_find_returns_owning_class() {
    let definition = parse(json!({
        "class": {
            "Bar": {"instances": [{"tag": "b1"}]},
            "Baz": {"instances": [{"tag": "b2"}]}
        }
    }))
    .unwrap();

    let found = definition.find("b2").expect("b2 should be found");
    assert_eq!(found.class_name, "Baz");
    assert_eq!(found.metadata.tag(), Some("b2"));
    assert!(definition.find("b3").is_none());
}

#[test]
fn test_duplicate_tags_first_match_wins() {
    let definition = parse(json!({
        "class": {
            "First": {"instances": [{"tag": "dup", "n": 1}]},
            "Second": {"instances": [{"tag": "dup", "n": 2}]}
        }
    }))
    .unwrap();

    let found = definition.find("dup").unwrap();
    assert_eq!(found.class_name, "First");
    assert_eq!(found.metadata.get("n"), Some(&json!(1)));
    assert_eq!(definition.tags(), vec!["dup", "dup"]);
}

#[test]
fn test_class_number_is_malformed() {
    let result = parse(json!({"class": 42, "instances": []}));
    assert!(matches!(result, Err(Error::MalformedRecord { .. })));
}

#[test]
fn test_class_list_is_malformed() {
    let result = parse(json!({"class": ["Foo"], "instances": []}));
    match result {
        Err(Error::MalformedRecord { system, reason }) => {
            assert_eq!(system, "sys");
            assert!(reason.contains("list"), "reason: {reason}");
        }
        other => panic!("Expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_missing_class_is_malformed() {
    let result = parse(json!({"instances": [{"tag": "a"}]}));
    assert!(matches!(result, Err(Error::MalformedRecord { .. })));
}

#[test]
fn test_non_object_document_is_malformed() {
    assert!(matches!(
        parse(json!([1, 2, 3])),
        Err(Error::MalformedRecord { .. })
    ));
}

#[test]
fn test_instance_without_tag_is_malformed() {
    let result = parse(json!({"class": "Foo", "instances": [{"city": "X"}]}));
    match result {
        Err(Error::MalformedRecord { reason, .. }) => assert!(reason.contains("instance 0")),
        other => panic!("Expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_namespaced_sub_record_must_be_object() {
    let result = parse(json!({"class": {"Foo": [{"tag": "a"}]}}));
    assert!(matches!(result, Err(Error::MalformedRecord { .. })));
}

#[test]
fn test_flat_without_instances_is_malformed() {
    let result = parse(json!({"class": "Foo"}));
    assert!(matches!(result, Err(Error::MalformedRecord { .. })));
}

#[test]
fn test_from_json_str_reports_parse_errors_as_json() {
    let result = SystemDefinition::from_json_str("sys", "{not json");
    assert!(matches!(result, Err(Error::Json { .. })));
}

#[test]
fn test_empty_namespaced_record_has_no_tags() {
    let definition = parse(json!({"class": {}})).unwrap();
    assert!(definition.is_empty());
    assert!(definition.tags().is_empty());
    assert!(matches!(definition.shape(), RecordShape::Namespaced { classes } if classes.is_empty()));
}
