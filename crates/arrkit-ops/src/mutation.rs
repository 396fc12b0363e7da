//! In-place removal by value.

use arrkit_core::{Array, Key, Value};
use tracing::debug;

/// Remove the first entry strictly equal to `needle`.
///
/// The removed key leaves a gap: other entries keep their keys and the
/// next pushed index does not move back. Returns the removed entry, or
/// `None` with the array untouched.
///
/// # Examples
///
/// ```
/// use arrkit_core::{Array, Key, Value};
/// use arrkit_ops::forget;
///
/// let mut arr = Array::list(["a", "b", "a"]);
/// let removed = forget(&mut arr, &Value::from("a"));
/// assert_eq!(removed, Some((Key::Index(0), Value::from("a"))));
/// assert_eq!(arr.keys().cloned().collect::<Vec<_>>(), [Key::Index(1), Key::Index(2)]);
/// ```
pub fn forget(array: &mut Array, needle: &Value) -> Option<(Key, Value)> {
    let pos = array.values().position(|value| value == needle)?;
    let removed = array.remove_index(pos);
    if let Some((key, _)) = &removed {
        debug!(key = %key, position = pos, "forget: removed entry");
    }
    removed
}
