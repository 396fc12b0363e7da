//! `proptest` strategies for arrays.
//!
//! Floats are kept finite so strict equality stays reflexive.

use arrkit_core::{Array, Value};
use proptest::prelude::*;

/// Any non-array value.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6_f64).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

/// A list whose elements are scalars or nested lists, up to four levels deep.
pub fn arb_nested_list() -> impl Strategy<Value = Array> {
    let element = arb_scalar().prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(|items| Value::Array(Array::list(items)))
    });
    prop::collection::vec(element, 0..8).prop_map(Array::list)
}

/// A record keyed by lowercase names with non-empty nested records.
///
/// Names never contain `.` and never look like integers, and no nested
/// record is empty, so `undot(dot(a)) == a` holds for every sample.
pub fn arb_keyed_tree() -> impl Strategy<Value = Array> {
    let node = arb_scalar().prop_recursive(3, 48, 4, |inner| {
        prop::collection::vec(("[a-z]{1,5}", inner), 1..4)
            .prop_map(|pairs| Value::Array(Array::from_pairs(pairs)))
    });
    prop::collection::vec(("[a-z]{1,5}", node), 0..5).prop_map(Array::from_pairs)
}
