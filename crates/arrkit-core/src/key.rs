//! Array keys.

use std::fmt;

/// Identifies an entry in an [`Array`](crate::Array).
///
/// A key is either an integer position or a string name. Strings that
/// spell a canonical decimal integer (`"5"`, `"-3"`, but not `"05"`,
/// `"+1"` or `"-0"`) become [`Key::Index`] when converted, so `"5"` and
/// `5` address the same entry.
///
/// Coercion happens in the `From` impls only. Building `Key::Name("5")`
/// directly skips it, and that key is distinct from `Key::Index(5)`, so
/// an array may hold both. Use [`Key::from`] for keys that come from text.
///
/// # Examples
///
/// ```
/// use arrkit_core::Key;
///
/// assert_eq!(Key::from("5"), Key::Index(5));
/// assert_eq!(Key::from("05"), Key::Name("05".into()));
/// assert_eq!(Key::from("user.name").to_string(), "user.name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key.
    Index(i64),
    /// String key.
    Name(String),
}

impl Key {
    /// Returns the integer if this is an index key.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Parse a canonical decimal integer, the way string keys are coerced.
    fn canonical_index(s: &str) -> Option<i64> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        if s == "-0" {
            return None;
        }
        s.parse().ok()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Self::Index(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Self::Index(i64::from(v))
    }
}

impl From<u32> for Key {
    fn from(v: u32) -> Self {
        Self::Index(i64::from(v))
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        match i64::try_from(v) {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(v.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match Self::canonical_index(s) {
            Some(i) => Self::Index(i),
            None => Self::Name(s.to_owned()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match Self::canonical_index(&s) {
            Some(i) => Self::Index(i),
            None => Self::Name(s),
        }
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
