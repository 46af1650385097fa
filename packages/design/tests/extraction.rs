use figcode_design::{extract, list_exportable_node_ids, unwrap_document, DesignNode, PLACEHOLDER_SVG};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_empty_object_yields_placeholder() {
    let svg = extract(&json!({}));
    assert_eq!(svg, PLACEHOLDER_SVG);
    assert!(svg.contains("width=\"400\" height=\"300\""));
    assert!(svg.contains("Generated from Figma"));
}

#[test]
fn test_malformed_inputs_never_fail() {
    let inputs = vec![
        Value::Null,
        json!(42),
        json!("document"),
        json!([1, 2, 3]),
        json!({ "children": "nope" }),
        json!({ "children": [] }),
        json!({ "document": { "children": [{ "type": "RECTANGLE" }] } }),
        json!({ "file": { "document": { "children": [42, null, {}] } } }),
    ];

    for input in inputs {
        let svg = extract(&input);
        assert!(!svg.is_empty(), "empty output for {input}");
        assert_eq!(svg, PLACEHOLDER_SVG, "expected placeholder for {input}");
    }
}

#[test]
fn test_nested_file_document_is_extracted() {
    let svg = extract(&json!({
        "file": {
            "document": {
                "id": "0:0",
                "type": "DOCUMENT",
                "children": [{ "id": "1:1", "type": "ELLIPSE",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 100, "height": 50 } }]
            }
        }
    }));

    assert_ne!(svg, PLACEHOLDER_SVG);
    assert!(svg.contains("<ellipse cx=\"50\" cy=\"25\" rx=\"50\" ry=\"25\""));
}

#[test]
fn test_exportable_ids_from_wrapped_input() {
    let input = json!({
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [
                { "id": "1:1", "type": "CANVAS", "children": [
                    { "id": "2:1", "type": "FRAME" },
                    { "id": "2:2", "type": "TEXT" },
                    { "id": "2:3", "type": "COMPONENT" }
                ]}
            ]
        }
    });

    let root = DesignNode::from_value(unwrap_document(&input)).unwrap();
    assert_eq!(list_exportable_node_ids(&root), vec!["2:1", "2:3"]);
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[A-Z]{0,10}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            (
                prop::sample::select(vec!["children", "type", "id", "absoluteBoundingBox", "document"]),
                inner
            )
                .prop_map(|(k, v)| json!({ k: v })),
        ]
    })
}

proptest! {
    #[test]
    fn prop_extract_is_total(input in arb_json()) {
        let svg = extract(&input);
        prop_assert!(svg.starts_with("<svg"));
        prop_assert!(svg.ends_with("</svg>"));
    }
}
