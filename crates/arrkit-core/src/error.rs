//! Error types for arrkit.
//!
//! Missing keys, empty arrays and failed searches are not errors: they
//! resolve to `Option`, `bool` or a caller-supplied default. [`ArrError`]
//! only covers inputs that cannot be honoured at all.

use std::error::Error;
use std::fmt;

/// Errors from array construction, configuration and flatten depths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrError {
    /// A dot-path separator must contain at least one character.
    EmptySeparator,
    /// A flatten depth was negative.
    InvalidDepth {
        /// The rejected depth.
        depth: i64,
    },
    /// Appending would need an integer key above `i64::MAX`.
    IndexOverflow,
}

impl fmt::Display for ArrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeparator => write!(f, "path separator must not be empty"),
            Self::InvalidDepth { depth } => {
                write!(f, "invalid flatten depth {depth}: must be zero or positive")
            }
            Self::IndexOverflow => {
                write!(f, "cannot append: the next integer key would exceed i64::MAX")
            }
        }
    }
}

impl Error for ArrError {}
