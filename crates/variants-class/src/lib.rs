//! Class-name tokens and class-merge resolvers.
//!
//! This crate is the bottom layer of the variants workspace. It knows nothing
//! about variant axes; it only deals with class-name values:
//!
//! - [`token`]: [`ClassValue`] (a string or a list of strings), the
//!   [`normalize`] helper and the canonical [`StyleFragment`]
//! - [`merge`]: the [`ClassMerge`] seam and the stock resolvers
//!   [`TokenMerge`] and [`ConflictMerge`]

pub mod error;
pub mod merge;
pub mod token;

pub use error::{Error, Result};
pub use merge::{ClassMerge, ConflictGroup, ConflictMerge, TokenMerge};
pub use token::{ClassValue, StyleFragment, normalize};
