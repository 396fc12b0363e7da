//! Predicate and membership searches.
//!
//! Positional searches walk entries in insertion order and report the
//! insertion position. For list-shaped arrays that position is also the
//! integer key; for other arrays it is not, and callers wanting keys should
//! map the position through [`Array::get_index`].

use arrkit_core::{Array, Key, Value};

/// Position of the first entry for which `pred(value, position)` holds.
///
/// `None` for an empty array or when nothing matches.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Value};
/// use arrkit_ops::find_index;
///
/// let arr = Array::list([3, 8, 10]);
/// assert_eq!(find_index(&arr, |v, _| v.as_int().is_some_and(|n| n % 2 == 0)), Some(1));
/// assert_eq!(find_index(&arr, |v, _| *v == Value::Int(7)), None);
/// ```
pub fn find_index<F>(array: &Array, mut pred: F) -> Option<usize>
where
    F: FnMut(&Value, usize) -> bool,
{
    array
        .values()
        .enumerate()
        .find(|&(pos, value)| pred(value, pos))
        .map(|(pos, _)| pos)
}

/// The first value in insertion order.
pub fn first(array: &Array) -> Option<&Value> {
    array.values().next()
}

/// The first value for which `pred(value, position)` holds.
pub fn find<F>(array: &Array, pred: F) -> Option<&Value>
where
    F: FnMut(&Value, usize) -> bool,
{
    let pos = find_index(array, pred)?;
    array.get_index(pos).map(|(_, value)| value)
}

/// Like [`find`], returning `default` when nothing matches.
pub fn find_or<F>(array: &Array, pred: F, default: Value) -> Value
where
    F: FnMut(&Value, usize) -> bool,
{
    find(array, pred).cloned().unwrap_or(default)
}

/// Returns `true` if any entry satisfies `pred`.
pub fn some<F>(array: &Array, pred: F) -> bool
where
    F: FnMut(&Value, usize) -> bool,
{
    find_index(array, pred).is_some()
}

/// Returns `true` if every entry satisfies `pred(value, key)`.
///
/// Stops at the first failure. The empty array satisfies any predicate.
pub fn every<F>(array: &Array, mut pred: F) -> bool
where
    F: FnMut(&Value, &Key) -> bool,
{
    array.iter().all(|(key, value)| pred(value, key))
}

/// Returns `true` if some value is strictly equal to `needle`.
pub fn contains(array: &Array, needle: &Value) -> bool {
    array.values().any(|value| value == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrkit_test_utils::{list, CallCounter};

    fn is_even(value: &Value) -> bool {
        value.as_int().is_some_and(|n| n % 2 == 0)
    }

    #[test]
    fn find_index_reports_position() {
        let arr = list![1, 3, 4, 6];
        assert_eq!(find_index(&arr, |v, _| is_even(v)), Some(2));
    }

    #[test]
    fn find_index_passes_position_to_predicate() {
        let arr = list!["a", "b", "c"];
        assert_eq!(find_index(&arr, |_, pos| pos == 2), Some(2));
    }

    #[test]
    fn find_index_empty_or_no_match() {
        assert_eq!(find_index(&Array::new(), |_, _| true), None);
        assert_eq!(find_index(&list![1, 3], |v, _| is_even(v)), None);
    }

    #[test]
    fn find_index_stops_at_first_match() {
        let counter = CallCounter::new();
        let arr = list![2, 4, 6];
        assert_eq!(find_index(&arr, |v, _| counter.tick(is_even(v))), Some(0));
        assert_eq!(counter.calls(), 1);
    }

    #[test]
    fn find_index_on_keyed_array_uses_insertion_position() {
        let mut arr = Array::new();
        arr.insert("x", 1);
        arr.insert("y", 2);
        let pos = find_index(&arr, |v, _| is_even(v)).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(arr.get_index(pos).map(|(k, _)| k), Some(&Key::from("y")));
    }

    #[test]
    fn find_returns_value_or_default() {
        let arr = list![1, 3, 4];
        assert_eq!(find(&arr, |v, _| is_even(v)), Some(&Value::Int(4)));
        assert_eq!(find(&arr, |v, _| v.is_null()), None);
        assert_eq!(find_or(&arr, |v, _| v.is_null(), Value::from("none")), Value::from("none"));
        assert_eq!(find_or(&Array::new(), |_, _| true, Value::Int(-1)), Value::Int(-1));
    }

    #[test]
    fn first_without_predicate() {
        assert_eq!(first(&list!["a", "b"]), Some(&Value::from("a")));
        assert_eq!(first(&Array::new()), None);
        assert_eq!(
            first(&Array::new()).cloned().unwrap_or(Value::from("default")),
            Value::from("default")
        );
    }

    #[test]
    fn some_and_every() {
        assert!(some(&list![1, 2, 4], |v, _| is_even(v)));
        assert!(!some(&list![1, 3], |v, _| is_even(v)));
        assert!(every(&list![2, 4], |v, _| is_even(v)));
        assert!(!every(&list![2, 3], |v, _| is_even(v)));
        assert!(every(&Array::new(), |_, _| false));
    }

    #[test]
    fn every_passes_keys() {
        let mut arr = Array::new();
        arr.insert("a", 1);
        arr.insert("b", 2);
        assert!(every(&arr, |_, k| k.as_name().is_some()));
        assert!(!every(&list![1], |_, k| k.as_name().is_some()));
    }

    #[test]
    fn every_short_circuits() {
        let counter = CallCounter::new();
        assert!(!every(&list![1, 2, 4], |v, _| counter.tick(is_even(v))));
        assert_eq!(counter.calls(), 1);
    }

    #[test]
    fn contains_is_strict() {
        let arr = list!["a", "b"];
        assert!(contains(&arr, &Value::from("a")));
        assert!(!contains(&arr, &Value::from("A")));
        assert!(!contains(&list![1], &Value::Float(1.0)));
        assert!(!contains(&list![1], &Value::from("1")));
        assert!(contains(&list![list![1]], &Value::Array(list![1])));
    }
}
