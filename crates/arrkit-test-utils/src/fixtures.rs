//! Reusable arrays for tests.
//!
//! - [`thousand_list`]: `[0, 1, .., 999]`.
//! - [`nested_list`]: `[1, 2, [3, 4, [5, 6]]]`.
//! - [`user_record`]: a keyed record with nested arrays, a null leaf, an
//!   empty array and a literal dotted key.

use arrkit_core::{Array, Value};

use crate::list;

/// The integers `0..1000` as a list.
pub fn thousand_list() -> Array {
    Array::list(0_i64..1000)
}

/// `[1, 2, [3, 4, [5, 6]]]`.
pub fn nested_list() -> Array {
    list![1, 2, list![3, 4, list![5, 6]]]
}

/// A keyed record:
///
/// ```text
/// {
///   "user": {
///     "name": "Taylor",
///     "address": { "city": "Lisbon", "zip": null },
///     "tags": ["admin", "dev"]
///   },
///   "products.desk": { "price": 100 },
///   "empty": []
/// }
/// ```
pub fn user_record() -> Array {
    let mut address = Array::new();
    address.insert("city", "Lisbon");
    address.insert("zip", Value::Null);

    let mut user = Array::new();
    user.insert("name", "Taylor");
    user.insert("address", address);
    user.insert("tags", list!["admin", "dev"]);

    let mut desk = Array::new();
    desk.insert("price", 100);

    let mut root = Array::new();
    root.insert("user", user);
    root.insert("products.desk", desk);
    root.insert("empty", Array::new());
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrkit_core::Key;

    #[test]
    fn thousand_list_is_dense() {
        let arr = thousand_list();
        assert_eq!(arr.len(), 1000);
        assert!(arr.is_list());
        assert_eq!(arr.get(&Key::Index(999)), Some(&Value::Int(999)));
    }

    #[test]
    fn user_record_keys_in_order() {
        let keys: Vec<_> = user_record().keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["user", "products.desk", "empty"]);
    }
}
