//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! JSON arrays become list-shaped [`Array`]s and objects become arrays
//! keyed by name, in document order. Numbers that fit `i64` become
//! [`Value::Int`], all others [`Value::Float`]. Going back, list-shaped
//! arrays become JSON arrays, every other array becomes an object, and
//! non-finite floats become JSON `null`.
//!
//! The round trip is lossy for objects that look like lists. An empty
//! object becomes an empty array, which is list-shaped, and converts back
//! as `[]`. Likewise `{"0": "a", "1": "b"}` comes back as `["a", "b"]`
//! because its keys coerce to `0, 1`.

use crate::array::Array;
use crate::key::Key;
use crate::value::Value;
use serde_json::{Map, Number};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Array(Array::list(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(map) => Self::Array(Array::from_pairs(
                map.into_iter().map(|(k, v)| (Key::from(k), Value::from(v))),
            )),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(i) => Self::Number(Number::from(i)),
            Value::Float(f) => Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::Str(s) => Self::String(s),
            Value::Array(arr) if arr.is_list() => {
                Self::Array(arr.into_iter().map(|(_, v)| v.into()).collect())
            }
            Value::Array(arr) => {
                let mut map = Map::with_capacity(arr.len());
                for (key, v) in arr {
                    map.insert(key.to_string(), v.into());
                }
                Self::Object(map)
            }
        }
    }
}

impl From<Array> for serde_json::Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr).into()
    }
}
