//! The ordered [`Array`] container.

use crate::error::ArrError;
use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;

/// Iterator over `(key, value)` pairs of an [`Array`], in insertion order.
pub type Iter<'a> = indexmap::map::Iter<'a, Key, Value>;

/// An ordered map from [`Key`] to [`Value`].
///
/// Entries keep their insertion order. Overwriting an existing key keeps
/// its position. The array also tracks the next free integer key:
/// [`push`](Array::push) appends under one more than the largest integer
/// key ever inserted (starting at 0), and removing an entry does not lower
/// it, so removals leave gaps.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Key, Value};
///
/// let mut arr = Array::list([10, 20, 30]);
/// assert!(arr.is_list());
///
/// arr.remove(&Key::Index(1));
/// assert!(!arr.is_list());
///
/// // The gap stays; the next push continues after the highest key.
/// assert_eq!(arr.push(40).unwrap(), Key::Index(3));
/// assert_eq!(arr.get(&Key::Index(3)), Some(&Value::Int(40)));
/// ```
#[derive(Clone, Debug)]
pub struct Array {
    entries: IndexMap<Key, Value>,
    /// `None` once an entry was stored under `i64::MAX`.
    next_index: Option<i64>,
}

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Create an empty array with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Build a list: values keyed `0..n` in iteration order.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let iter = values.into_iter();
        let mut arr = Self::with_capacity(iter.size_hint().0);
        for (i, value) in (0_i64..).zip(iter) {
            arr.entries.insert(Key::Index(i), value.into());
            arr.next_index = i.checked_add(1);
        }
        arr
    }

    /// Build an array from `(key, value)` pairs. Repeated keys overwrite.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut arr = Self::new();
        for (key, value) in pairs {
            arr.insert(key, value);
        }
        arr
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present, whatever its value.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Entry at insertion position `pos`.
    pub fn get_index(&self, pos: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(pos)
    }

    /// Insertion position of `key`.
    pub fn position_of(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// First entry in insertion order.
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.entries.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    /// Returns `true` if the keys are exactly `0, 1, .., len - 1` in order.
    ///
    /// The empty array is a list.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .zip(0_i64..)
            .all(|(key, i)| *key == Key::Index(i))
    }

    /// The key the next [`push`](Array::push) will use, if one is left.
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    /// Store `value` under `key`, returning the previous value.
    ///
    /// An existing key keeps its position; a new key goes last.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Index(i) = key {
            self.bump_next_index(i);
        }
        self.entries.insert(key, value.into())
    }

    /// Append `value` under the next free integer key.
    ///
    /// Returns [`ArrError::IndexOverflow`] once an entry has been stored
    /// under `i64::MAX`.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<Key, ArrError> {
        let index = self.next_index.ok_or(ArrError::IndexOverflow)?;
        self.next_index = index.checked_add(1);
        let key = Key::Index(index);
        self.entries.insert(key.clone(), value.into());
        Ok(key)
    }

    /// Remove the entry under `key`.
    ///
    /// Remaining entries keep their keys and relative order.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Remove the entry at insertion position `pos`.
    pub fn remove_index(&mut self, pos: usize) -> Option<(Key, Value)> {
        self.entries.shift_remove_index(pos)
    }

    // Negative keys never lower the counter.
    fn bump_next_index(&mut self, i: i64) {
        if let Some(next) = self.next_index {
            if i >= next {
                self.next_index = i.checked_add(1);
            }
        }
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::list(iter)
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
