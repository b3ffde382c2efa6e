//! proptest strategies for value trees the parser can read back.
//!
//! Generated trees respect the parser's limits: strings and keys contain no
//! `"`, `\` or control characters, numbers are finite, and every array holds
//! elements of a single variant.

use std::collections::HashMap;

use jsontree_core::Value;
use proptest::prelude::*;

/// Object key: printable ASCII without quote or backslash.
pub fn arb_key() -> impl Strategy<Value = String> {
    "[ !#-\\[\\]-~]{0,12}"
}

/// String payload: printable ASCII without quote or backslash.
pub fn arb_string() -> impl Strategy<Value = String> {
    "[ !#-\\[\\]-~]{0,24}"
}

/// Finite numbers of either sign.
pub fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop::num::f64::NORMAL,
        prop::num::f64::ZERO,
        (-1_000_000i64..1_000_000).prop_map(|n| n as f64),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        arb_number().prop_map(Value::Number),
        arb_string().prop_map(Value::String),
    ]
}

/// Keep only the elements sharing the first element's variant.
fn homogeneous(items: Vec<Value>) -> Value {
    let Some(kind) = items.first().map(Value::json_type) else {
        return Value::Array(items);
    };
    Value::Array(items.into_iter().filter(|v| v.json_type() == kind).collect())
}

/// Any value tree, up to four levels deep.
pub fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(homogeneous),
            prop::collection::hash_map(arb_key(), inner, 0..8)
                .prop_map(|map: HashMap<String, Value>| Value::Object(map)),
        ]
    })
}

/// A document: top-level array or object.
pub fn arb_document() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(arb_tree(), 0..6).prop_map(homogeneous),
        prop::collection::hash_map(arb_key(), arb_tree(), 0..6).prop_map(Value::Object),
    ]
}
