//! Configuration shared by the path-aware operations.

use crate::error::ArrError;

/// What `get` returns when a non-null key resolves to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingKey {
    /// Return the caller's default value.
    #[default]
    Default,
    /// Return the whole input array, ignoring the default.
    ///
    /// Kept for callers that depend on the historical lookup behaviour.
    /// Under this policy `add` never inserts a missing key, because the
    /// whole array is never null.
    WholeArray,
}

/// Configuration for dot-path operations (`get`, `has`, `set`, `dot`, `undot`).
///
/// All values are immutable after creation. The plain operations use
/// [`ArrConfig::default`]; their `*_with` forms take an explicit config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrConfig {
    separator: String,
    /// Lookup policy for absent keys.
    pub missing_key: MissingKey,
}

impl ArrConfig {
    /// Default path separator.
    pub const DEFAULT_SEPARATOR: &'static str = ".";

    /// Create a config with a custom path separator.
    ///
    /// Returns `Err(ArrError::EmptySeparator)` if `separator` is empty.
    pub fn new(separator: impl Into<String>) -> Result<Self, ArrError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ArrError::EmptySeparator);
        }
        Ok(Self {
            separator,
            missing_key: MissingKey::default(),
        })
    }

    /// Replace the missing-key policy.
    pub fn with_missing_key(mut self, missing_key: MissingKey) -> Self {
        self.missing_key = missing_key;
        self
    }

    /// The path separator. Never empty.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for ArrConfig {
    fn default() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_owned(),
            missing_key: MissingKey::Default,
        }
    }
}
