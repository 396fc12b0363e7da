//! arrkit: convenience operations over ordered, PHP-style arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the arrkit sub-crates. For most users, adding `arrkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use arrkit::prelude::*;
//!
//! let mut user = Array::new();
//! user.insert("name", "Ada");
//! user.insert("langs", Array::list(["en", "pt"]));
//! let mut root = Array::new();
//! root.insert("user", user);
//!
//! assert!(Arr::has(&root, ["user.name", "user.langs.1"]));
//! assert_eq!(*Arr::get(&root, Some(&Key::from("user.langs.0")), Value::Null), Value::from("en"));
//!
//! let nested = Array::list([Value::Int(1), Value::from(vec![2, 3])]);
//! assert_eq!(Arr::flat(&nested, Depth::Unbounded), Array::list([1, 2, 3]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `arrkit-core` | `Key`, `Value`, `Array`, `Path`, `ArrConfig`, `ArrError` |
//! | [`ops`] | `arrkit-ops` | Lookup, search, transform and mutation functions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::borrow::Cow;

/// Core data model (`arrkit-core`).
pub use arrkit_core as types;

/// Array operations as free functions (`arrkit-ops`).
pub use arrkit_ops as ops;

use arrkit_core::{ArrConfig, Array, Key, Value};
use arrkit_ops::Depth;

/// Static helpers over [`Array`], one associated function per operation.
///
/// Each function delegates to the free function of the same name in
/// [`ops`]; config-sensitive ones use [`ArrConfig::default`] unless they
/// end in `_with`.
pub struct Arr;

impl Arr {
    /// Returns `true` if `key` is present. See [`ops::exists`].
    pub fn exists(array: &Array, key: &Key) -> bool {
        arrkit_ops::exists(array, key)
    }

    /// Look up a key or dotted path. See [`ops::get_with`].
    pub fn get<'a>(array: &'a Array, key: Option<&Key>, default: Value) -> Cow<'a, Value> {
        arrkit_ops::get(array, key, default)
    }

    /// [`Arr::get`] with an explicit config.
    pub fn get_with<'a>(
        array: &'a Array,
        key: Option<&Key>,
        default: Value,
        config: &ArrConfig,
    ) -> Cow<'a, Value> {
        arrkit_ops::get_with(array, key, default, config)
    }

    /// Returns `true` if every key resolves. See [`ops::has_with`].
    pub fn has<I, K>(array: &Array, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        arrkit_ops::has(array, keys)
    }

    /// [`Arr::has`] with an explicit config.
    pub fn has_with<I, K>(array: &Array, keys: I, config: &ArrConfig) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        arrkit_ops::has_with(array, keys, config)
    }

    /// Flatten to dotted keys. See [`ops::dot_with`].
    pub fn dot(array: &Array, prefix: &str) -> Array {
        arrkit_ops::dot(array, prefix)
    }

    /// [`Arr::dot`] with an explicit config.
    pub fn dot_with(array: &Array, prefix: &str, config: &ArrConfig) -> Array {
        arrkit_ops::dot_with(array, prefix, config)
    }

    /// Expand dotted keys into nested arrays. See [`ops::undot_with`].
    pub fn undot(array: &Array) -> Array {
        arrkit_ops::undot(array)
    }

    /// [`Arr::undot`] with an explicit config.
    pub fn undot_with(array: &Array, config: &ArrConfig) -> Array {
        arrkit_ops::undot_with(array, config)
    }

    /// Store a value, creating nested arrays along a dotted path.
    pub fn set(array: &mut Array, key: impl Into<Key>, value: impl Into<Value>) {
        arrkit_ops::set(array, key, value);
    }

    /// [`Arr::set`] with an explicit config.
    pub fn set_with(
        array: &mut Array,
        key: impl Into<Key>,
        value: impl Into<Value>,
        config: &ArrConfig,
    ) {
        arrkit_ops::set_with(array, key, value, config);
    }

    /// Set `key` unless it already holds a non-null value. See [`ops::add_with`].
    pub fn add(array: Array, key: impl Into<Key>, value: impl Into<Value>) -> Array {
        arrkit_ops::add(array, key, value)
    }

    /// [`Arr::add`] with an explicit config.
    pub fn add_with(
        array: Array,
        key: impl Into<Key>,
        value: impl Into<Value>,
        config: &ArrConfig,
    ) -> Array {
        arrkit_ops::add_with(array, key, value, config)
    }

    /// Number of entries.
    pub fn length(array: &Array) -> usize {
        arrkit_ops::length(array)
    }

    /// Position of the first match. See [`ops::find_index`].
    pub fn find_index<F>(array: &Array, pred: F) -> Option<usize>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        arrkit_ops::find_index(array, pred)
    }

    /// First match. See [`ops::find`].
    pub fn find<F>(array: &Array, pred: F) -> Option<&Value>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        arrkit_ops::find(array, pred)
    }

    /// First match, or `default`. See [`ops::find_or`].
    pub fn find_or<F>(array: &Array, pred: F, default: Value) -> Value
    where
        F: FnMut(&Value, usize) -> bool,
    {
        arrkit_ops::find_or(array, pred, default)
    }

    /// First value in insertion order.
    pub fn first(array: &Array) -> Option<&Value> {
        arrkit_ops::first(array)
    }

    /// Returns `true` if any entry matches.
    pub fn some<F>(array: &Array, pred: F) -> bool
    where
        F: FnMut(&Value, usize) -> bool,
    {
        arrkit_ops::some(array, pred)
    }

    /// Returns `true` if every entry matches.
    pub fn every<F>(array: &Array, pred: F) -> bool
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        arrkit_ops::every(array, pred)
    }

    /// Strict membership test.
    pub fn contains(array: &Array, needle: &Value) -> bool {
        arrkit_ops::contains(array, needle)
    }

    /// Flatten nested arrays. See [`ops::flat`].
    pub fn flat(array: &Array, depth: Depth) -> Array {
        arrkit_ops::flat(array, depth)
    }

    /// Map over the fully flattened array.
    pub fn flat_map<F>(array: &Array, f: F) -> Array
    where
        F: FnMut(&Value) -> Value,
    {
        arrkit_ops::flat_map(array, f)
    }

    /// Append `second` to `first`. See [`ops::concat`].
    pub fn concat(first: &Array, second: &Array) -> Array {
        arrkit_ops::concat(first, second)
    }

    /// Wrap a value in an array. See [`ops::wrap`].
    pub fn wrap(value: Value) -> Array {
        arrkit_ops::wrap(value)
    }

    /// Keep matching entries under their original keys.
    pub fn filter<F>(array: &Array, pred: F) -> Array
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        arrkit_ops::filter(array, pred)
    }

    /// Remove the first strictly equal value. See [`ops::forget`].
    pub fn forget(array: &mut Array, needle: &Value) -> Option<(Key, Value)> {
        arrkit_ops::forget(array, needle)
    }
}

/// Common imports for typical arrkit usage.
///
/// ```rust
/// use arrkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Arr;

    pub use arrkit_core::{ArrConfig, ArrError, Array, Key, MissingKey, Path, Value};

    pub use arrkit_ops::Depth;
}
