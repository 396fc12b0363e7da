//! Core data model for arrkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! container every arrkit operation works on: an ordered [`Array`] keyed by
//! [`Key`]s and holding dynamically typed [`Value`]s, plus dot-notation
//! [`Path`]s, the shared [`ArrConfig`] and the [`ArrError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod key;
pub mod path;
pub mod value;

pub use array::{Array, Iter};
pub use config::{ArrConfig, MissingKey};
pub use error::ArrError;
pub use key::Key;
pub use path::{Path, Segments};
pub use value::Value;
