//! Operations over arrkit arrays.
//!
//! Every function is stateless and works on caller-owned data. Only
//! [`set`] and [`forget`] mutate, through `&mut Array`; [`add`] takes the
//! array by value and hands it back.
//!
//! # Groups
//!
//! - [`lookup`]: [`exists`], [`get`], [`has`], [`dot`], [`undot`], [`set`],
//!   [`add`], [`length`]
//! - [`search`]: [`find_index`], [`find`], [`some`], [`every`], [`contains`]
//! - [`transform`]: [`flat`], [`flat_map`], [`concat`], [`wrap`], [`filter`]
//! - [`mutation`]: [`forget`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lookup;
pub mod mutation;
pub mod search;
pub mod transform;

pub use lookup::{
    accessible, add, add_with, dot, dot_with, exists, get, get_with, has, has_with,
    is_array_like, length, set, set_with, undot, undot_with,
};
pub use mutation::forget;
pub use search::{contains, every, find, find_index, find_or, first, some};
pub use transform::{concat, filter, flat, flat_map, wrap, Depth};
