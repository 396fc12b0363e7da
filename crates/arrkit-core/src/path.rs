//! Dot-notation paths into nested arrays.

use crate::config::ArrConfig;
use crate::key::Key;
use smallvec::SmallVec;

/// Path segments.
///
/// Uses `SmallVec<[Key; 4]>` to avoid heap allocation for paths up to
/// four levels deep.
pub type Segments = SmallVec<[Key; 4]>;

/// A key split on the configured separator.
///
/// `"user.address.0"` becomes `[Name("user"), Name("address"), Index(0)]`.
/// Integer keys and names without the separator are single-segment paths.
/// Empty segments are kept, so `"a..b"` walks through a key named `""`.
///
/// # Examples
///
/// ```
/// use arrkit_core::{ArrConfig, Key, Path};
///
/// let path = Path::parse(&Key::from("user.tags.0"), &ArrConfig::default());
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.segments()[2], Key::Index(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Segments,
}

impl Path {
    /// Split `key` on `config`'s separator.
    pub fn parse(key: &Key, config: &ArrConfig) -> Self {
        let segments = match key {
            Key::Name(name) if name.contains(config.separator()) => {
                name.split(config.separator()).map(Key::from).collect()
            }
            other => SmallVec::from_elem(other.clone(), 1),
        };
        Self { segments }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always returns `false`: a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the key actually contained the separator.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Split into the parent segments and the final segment.
    pub fn split_last(&self) -> (&[Key], &Key) {
        let n = self.segments.len();
        (&self.segments[..n - 1], &self.segments[n - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Path {
        Path::parse(&Key::from(s), &ArrConfig::default())
    }

    #[test]
    fn plain_name_is_single_segment() {
        let path = parse("name");
        assert_eq!(path.segments(), &[Key::from("name")]);
        assert!(!path.is_nested());
    }

    #[test]
    fn numeric_segments_become_indices() {
        let path = parse("items.1.id");
        assert_eq!(
            path.segments(),
            &[Key::from("items"), Key::Index(1), Key::from("id")]
        );
    }

    #[test]
    fn empty_segments_are_kept() {
        let path = parse("a..b");
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments()[1], Key::Name(String::new()));
    }

    #[test]
    fn custom_separator() {
        let config = ArrConfig::new("/").unwrap();
        let path = Path::parse(&Key::from("a/b.c"), &config);
        assert_eq!(path.segments(), &[Key::from("a"), Key::from("b.c")]);
    }

    #[test]
    fn index_key_is_single_segment() {
        let path = Path::parse(&Key::Index(4), &ArrConfig::default());
        let (parents, last) = path.split_last();
        assert!(parents.is_empty());
        assert_eq!(last, &Key::Index(4));
    }
}
