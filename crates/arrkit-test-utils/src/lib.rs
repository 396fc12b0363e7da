//! Test utilities for arrkit development.
//!
//! Provides the [`list!`] builder macro, reusable [`fixtures`], `proptest`
//! [`strategies`] and a [`CallCounter`] for asserting how often an
//! operation invokes its callback.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;

pub mod fixtures;
pub mod strategies;

#[doc(hidden)]
pub use arrkit_core;

/// Build a list-shaped `Array` from heterogeneous values.
///
/// Every element goes through `Value::from`, so nested `list!` calls,
/// integers, strings, booleans and `Value`s can be mixed.
///
/// ```
/// use arrkit_test_utils::list;
///
/// let arr = list![1, "two", list![3, 4]];
/// assert_eq!(arr.len(), 3);
/// assert!(arr.is_list());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::arrkit_core::Array::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::arrkit_core::Array::list([
            $($crate::arrkit_core::Value::from($value)),+
        ])
    };
}

/// Counts how many times a wrapped predicate runs.
///
/// Uses a `Cell` so the counter can be read while a closure borrowing it
/// is still alive.
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    /// Record one call and return `result` unchanged.
    pub fn tick<T>(&self, result: T) -> T {
        self.calls.set(self.calls.get() + 1);
        result
    }

    /// Number of recorded calls.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Default for CallCounter {
    fn default() -> Self {
        Self::new()
    }
}
