//! Flatten, concatenate, map and wrap.
//!
//! Every function here builds a new array; inputs are never modified.

use arrkit_core::{ArrError, Array, Key, Value};

/// How many levels of nesting [`flat`] removes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Depth {
    /// Flatten completely.
    #[default]
    Unbounded,
    /// Flatten this many levels. `Levels(0)` only renumbers.
    Levels(u32),
}

impl Depth {
    fn deeper(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Levels(n) => Self::Levels(n.saturating_sub(1)),
        }
    }
}

impl From<u32> for Depth {
    fn from(levels: u32) -> Self {
        Self::Levels(levels)
    }
}

impl TryFrom<i64> for Depth {
    type Error = ArrError;

    /// Levels larger than `u32::MAX` are treated as unbounded.
    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        if depth < 0 {
            return Err(ArrError::InvalidDepth { depth });
        }
        Ok(u32::try_from(depth).map_or(Self::Unbounded, Self::Levels))
    }
}

/// Flatten nested arrays into a list, depth first, left to right.
///
/// Keys of nested arrays are discarded; the result is keyed `0..n`.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Value};
/// use arrkit_ops::{flat, Depth};
///
/// let nested = Array::list([
///     Value::Int(1),
///     Value::from(vec![Value::Int(2), Value::from(vec![3])]),
/// ]);
/// assert_eq!(
///     flat(&nested, Depth::Levels(1)),
///     Array::list([Value::Int(1), Value::Int(2), Value::from(vec![3])]),
/// );
/// assert_eq!(flat(&nested, Depth::Unbounded), Array::list([1, 2, 3]));
/// ```
pub fn flat(array: &Array, depth: Depth) -> Array {
    let mut out = Vec::with_capacity(array.len());
    flat_into(array, depth, &mut out);
    Array::list(out)
}

fn flat_into(array: &Array, depth: Depth, out: &mut Vec<Value>) {
    for value in array.values() {
        match (value, depth) {
            (Value::Array(_), Depth::Levels(0)) => out.push(value.clone()),
            (Value::Array(inner), Depth::Levels(1)) => out.extend(inner.values().cloned()),
            (Value::Array(inner), _) => flat_into(inner, depth.deeper(), out),
            _ => out.push(value.clone()),
        }
    }
}

/// Apply `f` to every value of the fully flattened array.
pub fn flat_map<F>(array: &Array, mut f: F) -> Array
where
    F: FnMut(&Value) -> Value,
{
    Array::list(flat(array, Depth::Unbounded).values().map(|value| f(value)))
}

/// Entries of `first` followed by entries of `second`.
///
/// Integer-keyed entries are appended and renumbered from 0. Named entries
/// keep their key; a name seen again takes the later value but keeps its
/// first position. Two lists therefore concatenate as sequences.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Key, Value};
/// use arrkit_ops::concat;
///
/// assert_eq!(concat(&Array::list([1, 2]), &Array::list([3, 4])), Array::list([1, 2, 3, 4]));
///
/// let a = Array::from_pairs([(Key::from("id"), Value::Int(1)), (Key::Index(9), Value::from("x"))]);
/// let b = Array::from_pairs([(Key::from("id"), Value::Int(2)), (Key::Index(9), Value::from("y"))]);
/// let merged = concat(&a, &b);
/// assert_eq!(merged.get(&Key::from("id")), Some(&Value::Int(2)));
/// assert_eq!(merged.get(&Key::Index(0)), Some(&Value::from("x")));
/// assert_eq!(merged.get(&Key::Index(1)), Some(&Value::from("y")));
/// ```
pub fn concat(first: &Array, second: &Array) -> Array {
    let mut out = Array::with_capacity(first.len() + second.len());
    let mut next = 0_i64;
    for (key, value) in first.iter().chain(second.iter()) {
        match key {
            Key::Index(_) => {
                out.insert(next, value.clone());
                next += 1;
            }
            Key::Name(_) => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out
}

/// Wrap `value` in an array.
///
/// Null becomes the empty array, an array is returned as is, and any
/// other value becomes a one-element list.
pub fn wrap(value: Value) -> Array {
    match value {
        Value::Null => Array::new(),
        Value::Array(arr) => arr,
        other => Array::list([other]),
    }
}

/// Entries for which `pred(value, key)` holds, under their original keys.
///
/// The result is not renumbered.
pub fn filter<F>(array: &Array, mut pred: F) -> Array
where
    F: FnMut(&Value, &Key) -> bool,
{
    array
        .iter()
        .filter(|&(key, value)| pred(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrkit_test_utils::fixtures::nested_list;
    use arrkit_test_utils::list;

    #[test]
    fn flat_one_level() {
        assert_eq!(
            flat(&nested_list(), Depth::Levels(1)),
            list![1, 2, 3, 4, list![5, 6]]
        );
    }

    #[test]
    fn flat_unbounded() {
        assert_eq!(flat(&nested_list(), Depth::Unbounded), list![1, 2, 3, 4, 5, 6]);
        assert_eq!(flat(&nested_list(), Depth::Levels(2)), list![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn flat_zero_levels_renumbers_only() {
        let mut arr = Array::new();
        arr.insert("a", list![1]);
        arr.insert("b", 2);
        assert_eq!(flat(&arr, Depth::Levels(0)), list![list![1], 2]);
    }

    #[test]
    fn flat_discards_nested_keys() {
        let mut inner = Array::new();
        inner.insert("x", 1);
        inner.insert("y", 2);
        assert_eq!(flat(&list![0, inner], Depth::Unbounded), list![0, 1, 2]);
    }

    #[test]
    fn flat_skips_empty_arrays() {
        assert_eq!(flat(&list![1, list![], list![list![]]], Depth::Unbounded), list![1]);
    }

    #[test]
    fn depth_from_integers() {
        assert_eq!(Depth::try_from(3_i64), Ok(Depth::Levels(3)));
        assert_eq!(Depth::try_from(-1_i64), Err(ArrError::InvalidDepth { depth: -1 }));
        assert_eq!(Depth::try_from(i64::MAX), Ok(Depth::Unbounded));
        assert_eq!(Depth::from(2_u32), Depth::Levels(2));
        assert_eq!(Depth::default(), Depth::Unbounded);
    }

    #[test]
    fn concat_lists() {
        assert_eq!(concat(&list![1, 2], &list![3, 4]), list![1, 2, 3, 4]);
        assert_eq!(concat(&Array::new(), &list![1]), list![1]);
    }

    #[test]
    fn concat_renumbers_gapped_lists() {
        let mut a = list![1, 2, 3];
        a.remove(&Key::Index(1));
        assert_eq!(concat(&a, &list![4]), list![1, 3, 4]);
    }

    #[test]
    fn concat_named_keys_overwrite_in_place() {
        let mut a = Array::new();
        a.insert("a", 1);
        a.insert("b", 2);
        let mut b = Array::new();
        b.insert("a", 9);
        b.insert("c", 3);
        let merged = concat(&a, &b);
        let pairs: Vec<_> = merged.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_owned(), Value::Int(9)),
                ("b".to_owned(), Value::Int(2)),
                ("c".to_owned(), Value::Int(3)),
            ]
        );
    }

    #[test]
    fn flat_map_doubles() {
        let doubled = flat_map(&nested_list(), |v| Value::from(v.as_int().map(|n| n * 2)));
        assert_eq!(doubled, list![2, 4, 6, 8, 10, 12]);
    }

    #[test]
    fn wrap_cases() {
        assert_eq!(wrap(Value::Null), Array::new());
        assert_eq!(wrap(Value::Array(list![1])), list![1]);
        assert_eq!(wrap(Value::Int(1)), list![1]);
        assert_eq!(wrap(Value::from("")), list![""]);
    }

    #[test]
    fn filter_keeps_original_keys() {
        let kept = filter(&list![1, 2, 3, 4], |v, _| v.as_int().is_some_and(|n| n % 2 == 0));
        let keys: Vec<_> = kept.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(1), Key::Index(3)]);
        assert!(!kept.is_list());
    }

    #[test]
    fn filter_by_key() {
        let mut arr = Array::new();
        arr.insert("keep", 1);
        arr.insert("drop", 2);
        let kept = filter(&arr, |_, k| k.as_name() == Some("keep"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.get(&Key::from("keep")), Some(&Value::Int(1)));
    }
}
