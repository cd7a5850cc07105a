//! Property-based integration tests for the document model.
//!
//! These tests verify that universal properties hold across generated
//! element trees, column sets and monetary values, using `proptest`.

use proptest::prelude::*;
use reportkit_core::element::{make_node, serialize, text, to_json_string, Element, Tag};
use reportkit_core::json::{self, number, JsonObject};
use reportkit_core::table::{ColumnDefinition, TableBuilder};
use reportkit_core::utils::{format_truncated, truncate_fixed};
use serde_json::Value;
use std::collections::HashSet;

// =============================================================================
// Generators
// =============================================================================

/// Generates a scalar prop value.
fn arb_prop_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e9f64..1.0e9).prop_map(number),
        "[a-zA-Z0-9 \n\t\"\\\\]{0,12}".prop_map(Value::String),
    ]
}

/// Generates a props map with up to four entries.
fn arb_props() -> impl Strategy<Value = JsonObject> {
    proptest::collection::vec(("[a-zA-Z]{1,8}", arb_prop_value()), 0..4).prop_map(json::object)
}

/// Generates a non-empty tag from the open vocabulary.
fn arb_tag() -> impl Strategy<Value = Tag> {
    "[a-zA-Z][a-zA-Z0-9-]{0,8}".prop_map(|name| Tag::new(name).unwrap())
}

/// Generates an element tree up to four levels deep.
fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = "[ -~]{0,16}".prop_map(text);
    leaf.prop_recursive(4, 48, 4, |inner| {
        (arb_tag(), proptest::collection::vec(inner, 0..4), arb_props())
            .prop_map(|(tag, children, props)| make_node(tag, children, props))
    })
}

/// Generates columns with unique keys and optional explicit orders.
fn arb_columns() -> impl Strategy<Value = Vec<ColumnDefinition>> {
    proptest::collection::vec(("[a-z]{1,6}", proptest::option::of(-5i32..5)), 0..10).prop_map(
        |specs| {
            let mut seen = HashSet::new();
            specs
                .into_iter()
                .filter(|(key, _)| seen.insert(key.clone()))
                .map(|(key, order)| {
                    let column = ColumnDefinition::new(key.clone(), key.to_uppercase());
                    match order {
                        Some(order) => column.with_order(order),
                        None => column,
                    }
                })
                .collect()
        },
    )
}

/// Checks the `{type, props, children}` shape recursively.
fn assert_node_shape(value: &Value, node: &Element) {
    let obj = value.as_object().expect("node must serialize to an object");
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["type", "props", "children"]);
    assert_eq!(obj["type"], node.tag().as_str());
    assert_eq!(obj["props"].as_object(), Some(node.props()));

    let children = obj["children"].as_array().expect("children must be an array");
    assert_eq!(children.len(), node.children().len());
    for (child_value, child) in children.iter().zip(node.children()) {
        assert_node_shape(child_value, child);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Serializing the same tree twice yields byte-identical text.
    #[test]
    fn prop_serialization_is_deterministic(tree in arb_element()) {
        let first = to_json_string(&tree);
        let second = to_json_string(&tree.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(serialize(&tree), serialize(&tree));
    }

    /// The text form parses back to the same wire value.
    #[test]
    fn prop_serialized_text_round_trips(tree in arb_element()) {
        let value = serialize(&tree);
        let parsed: Value = serde_json::from_str(&to_json_string(&tree)).unwrap();
        prop_assert_eq!(&parsed, &value);
        prop_assert_eq!(json::to_canonical_string(&parsed), to_json_string(&tree));
    }

    /// Every node keeps the fixed key order and its children in order.
    #[test]
    fn prop_serialized_shape_mirrors_tree(tree in arb_element()) {
        assert_node_shape(&serialize(&tree), &tree);
    }

    /// Materialized columns: explicit orders ascending, ties and unordered
    /// columns in declaration order, unordered columns last.
    #[test]
    fn prop_materialized_column_order(columns in arb_columns()) {
        let mut builder = TableBuilder::new("T");
        for column in &columns {
            builder.add_column(column.clone()).unwrap();
        }
        let props = builder.materialize().unwrap();
        let actual: Vec<String> = props["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["key"].as_str().unwrap().to_string())
            .collect();

        let mut expected: Vec<(usize, &ColumnDefinition)> = columns.iter().enumerate().collect();
        expected.sort_by(|(ia, a), (ib, b)| match (a.order, b.order) {
            (Some(x), Some(y)) => x.cmp(&y).then(ia.cmp(ib)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ia.cmp(ib),
        });
        let expected: Vec<String> = expected.into_iter().map(|(_, c)| c.key.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Truncation moves toward zero by less than one unit of the last digit.
    #[test]
    fn prop_truncation_moves_toward_zero(value in -1.0e6f64..1.0e6, digits in 0u32..6) {
        let truncated = truncate_fixed(value, digits);
        prop_assert!(truncated.abs() <= value.abs());
        prop_assert!(truncated == 0.0 || truncated.signum() == value.signum());
        let step = 10f64.powi(-(digits as i32));
        prop_assert!((value - truncated).abs() < step + 1.0e-9);
    }

    /// Truncating an already truncated value changes nothing.
    #[test]
    fn prop_truncation_is_idempotent(value in -1.0e6f64..1.0e6, digits in 0u32..6) {
        let once = truncate_fixed(value, digits);
        prop_assert_eq!(truncate_fixed(once, digits), once);
    }

    /// Formatted output always carries exactly `digits` decimals.
    #[test]
    fn prop_formatted_digit_count(value in -1.0e6f64..1.0e6, digits in 1u32..6) {
        let formatted = format_truncated(value, digits);
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), digits as usize);
        prop_assert!(!formatted.contains(','));
    }
}
