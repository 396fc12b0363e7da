//! Key lookup, existence checks and dot-notation access.
//!
//! Dotted keys are only split when the literal key is absent, so an entry
//! stored under `"a.b"` is found before the nested path `a -> b`.

use std::borrow::Cow;

use arrkit_core::{ArrConfig, Array, Key, MissingKey, Path, Value};
use tracing::{debug, trace};

/// Returns the array inside `value` if it can be traversed by key.
///
/// This is the single definition of "array-like" used by [`has`], [`get`],
/// [`dot`] and the flatten operations.
pub fn accessible(value: &Value) -> Option<&Array> {
    value.as_array()
}

/// Returns `true` if `value` can be traversed by key.
pub fn is_array_like(value: &Value) -> bool {
    accessible(value).is_some()
}

/// Returns `true` if `key` is present in `array`, even when its value is null.
///
/// No dot-path resolution happens here.
pub fn exists(array: &Array, key: &Key) -> bool {
    array.contains_key(key)
}

/// Number of entries in `array`.
pub fn length(array: &Array) -> usize {
    array.len()
}

/// Find `key` directly, then as a dotted path through nested arrays.
fn resolve<'a>(array: &'a Array, key: &Key, config: &ArrConfig) -> Option<&'a Value> {
    if let Some(value) = array.get(key) {
        return Some(value);
    }
    let path = Path::parse(key, config);
    if !path.is_nested() {
        return None;
    }
    let (parents, last) = path.split_last();
    let mut current = array;
    for segment in parents {
        current = current.get(segment).and_then(accessible)?;
    }
    current.get(last)
}

/// Look up `key` with the default [`ArrConfig`].
///
/// See [`get_with`].
pub fn get<'a>(array: &'a Array, key: Option<&Key>, default: Value) -> Cow<'a, Value> {
    get_with(array, key, default, &ArrConfig::default())
}

/// Look up `key` in `array`.
///
/// - `None` key: a copy of the whole array.
/// - Present key, or a dotted key whose every segment resolves: that value.
/// - Otherwise: `default`, or a copy of the whole array under
///   [`MissingKey::WholeArray`].
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use arrkit_core::{Array, Key, Value};
/// use arrkit_ops::get;
///
/// let mut user = Array::new();
/// user.insert("name", "Ada");
/// let mut root = Array::new();
/// root.insert("user", user);
///
/// let name = get(&root, Some(&Key::from("user.name")), Value::Null);
/// assert_eq!(name, Cow::Borrowed(&Value::from("Ada")));
///
/// let missing = get(&root, Some(&Key::from("user.age")), Value::Int(0));
/// assert_eq!(*missing, Value::Int(0));
/// ```
pub fn get_with<'a>(
    array: &'a Array,
    key: Option<&Key>,
    default: Value,
    config: &ArrConfig,
) -> Cow<'a, Value> {
    let Some(key) = key else {
        return Cow::Owned(Value::Array(array.clone()));
    };
    if let Some(value) = resolve(array, key, config) {
        return Cow::Borrowed(value);
    }
    match config.missing_key {
        MissingKey::Default => Cow::Owned(default),
        MissingKey::WholeArray => {
            trace!(key = %key, "get: key missing, returning whole array");
            Cow::Owned(Value::Array(array.clone()))
        }
    }
}

/// Check keys with the default [`ArrConfig`].
///
/// See [`has_with`].
pub fn has<I, K>(array: &Array, keys: I) -> bool
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    has_with(array, keys, &ArrConfig::default())
}

/// Returns `true` if every key in `keys` resolves in `array`.
///
/// Each key is checked literally first, then as a dotted path. An empty
/// array or an empty key list yields `false`.
///
/// # Examples
///
/// ```
/// use arrkit_core::Array;
/// use arrkit_ops::has;
///
/// let mut address = Array::new();
/// address.insert("city", "Porto");
/// let mut root = Array::new();
/// root.insert("address", address);
///
/// assert!(has(&root, ["address.city"]));
/// assert!(!has(&root, ["address.city", "address.zip"]));
/// assert!(!has(&root, Vec::<&str>::new()));
/// ```
pub fn has_with<I, K>(array: &Array, keys: I, config: &ArrConfig) -> bool
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    let mut keys = keys.into_iter().peekable();
    if array.is_empty() || keys.peek().is_none() {
        return false;
    }
    keys.all(|key| resolve(array, &key.into(), config).is_some())
}

/// Flatten with the default [`ArrConfig`].
///
/// See [`dot_with`].
pub fn dot(array: &Array, prefix: &str) -> Array {
    dot_with(array, prefix, &ArrConfig::default())
}

/// Flatten nested arrays into one level keyed by dotted paths.
///
/// Non-empty nested arrays are descended into; scalars and empty arrays
/// are stored under `prefix` followed by their full path. When two paths
/// collide the later one wins.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Key, Value};
/// use arrkit_ops::dot;
///
/// let mut inner = Array::new();
/// inner.insert("b", 1);
/// let mut root = Array::new();
/// root.insert("a", inner);
/// root.insert("c", Array::new());
///
/// let flat = dot(&root, "");
/// assert_eq!(flat.get(&Key::from("a.b")), Some(&Value::Int(1)));
/// assert_eq!(flat.get(&Key::from("c")), Some(&Value::Array(Array::new())));
/// ```
pub fn dot_with(array: &Array, prefix: &str, config: &ArrConfig) -> Array {
    let mut out = Array::new();
    dot_into(array, prefix, config.separator(), &mut out);
    out
}

fn dot_into(array: &Array, prefix: &str, separator: &str, out: &mut Array) {
    for (key, value) in array {
        let full = format!("{prefix}{key}");
        match value {
            Value::Array(inner) if !inner.is_empty() => {
                dot_into(inner, &format!("{full}{separator}"), separator, out);
            }
            _ => {
                out.insert(full, value.clone());
            }
        }
    }
}

/// Rebuild nested arrays with the default [`ArrConfig`].
///
/// See [`undot_with`].
pub fn undot(array: &Array) -> Array {
    undot_with(array, &ArrConfig::default())
}

/// Expand dotted keys back into nested arrays.
///
/// The inverse of [`dot_with`] for arrays whose names do not contain the
/// separator and whose nested arrays are non-empty.
pub fn undot_with(array: &Array, config: &ArrConfig) -> Array {
    let mut out = Array::new();
    for (key, value) in array {
        set_with(&mut out, key, value.clone(), config);
    }
    out
}

/// Store a value with the default [`ArrConfig`].
///
/// See [`set_with`].
pub fn set(array: &mut Array, key: impl Into<Key>, value: impl Into<Value>) {
    set_with(array, key, value, &ArrConfig::default());
}

/// Store `value` under `key`, creating nested arrays along a dotted path.
///
/// A key already present literally is overwritten in place, matching the
/// literal-first lookup of [`get_with`]. An intermediate segment that is
/// missing or holds a scalar is replaced by an empty array.
pub fn set_with(
    array: &mut Array,
    key: impl Into<Key>,
    value: impl Into<Value>,
    config: &ArrConfig,
) {
    let key = key.into();
    if array.contains_key(&key) {
        array.insert(key, value);
        return;
    }
    let path = Path::parse(&key, config);
    let (parents, last) = path.split_last();

    let mut current = array;
    for segment in parents {
        match current.get(segment) {
            Some(Value::Array(_)) => {}
            Some(old) => {
                debug!(
                    key = %key,
                    segment = %segment,
                    replaced = old.type_name(),
                    "set: replacing scalar with array"
                );
                current.insert(segment.clone(), Array::new());
            }
            None => {
                current.insert(segment.clone(), Array::new());
            }
        }
        let Some(next) = current.get_mut(segment).and_then(Value::as_array_mut) else {
            return;
        };
        current = next;
    }
    current.insert(last.clone(), value);
}

/// Add a value with the default [`ArrConfig`].
///
/// See [`add_with`].
pub fn add(array: Array, key: impl Into<Key>, value: impl Into<Value>) -> Array {
    add_with(array, key, value, &ArrConfig::default())
}

/// Set `key` to `value` unless [`get_with`] already yields a non-null value.
///
/// Under [`MissingKey::WholeArray`] a missing key resolves to the whole
/// array, which is never null, so only keys holding null get filled.
pub fn add_with(
    mut array: Array,
    key: impl Into<Key>,
    value: impl Into<Value>,
    config: &ArrConfig,
) -> Array {
    let key = key.into();
    if get_with(&array, Some(&key), Value::Null, config).is_null() {
        set_with(&mut array, key, value, config);
    } else {
        trace!(key = %key, "add: key already holds a value");
    }
    array
}
