//! Class-merge resolvers
//!
//! The engines never concatenate class strings themselves. Every time a
//! fragment is appended they call a [`ClassMerge`] implementation, which is
//! free to deduplicate tokens and to let later utilities override earlier,
//! conflicting ones.
//!
//! Two resolvers are provided:
//!
//! - [`TokenMerge`]: whitespace normalization plus exact-duplicate removal
//! - [`ConflictMerge`]: "last writer wins" per conflict group, with a
//!   built-in Tailwind-style group table

mod conflict;
mod tailwind;

use std::collections::HashSet;
use std::fmt;

pub use conflict::{ConflictGroup, ConflictMerge};

/// Combines an ordered list of class fragments into one class string.
///
/// Implementations must be pure and idempotent on repeated identical input.
/// When two fragments disagree, the fragment listed later wins.
pub trait ClassMerge: Send + Sync + fmt::Debug {
    /// Merge `fragments` in order into a single class string.
    fn merge(&self, fragments: &[&str]) -> String;

    /// Merge two fragments; `b` wins over `a`.
    fn merge_pair(&self, a: &str, b: &str) -> String {
        self.merge(&[a, b])
    }
}

/// Joins fragments token by token, dropping exact duplicates.
///
/// The last occurrence of a duplicated token is the one kept, so
/// `merge(["a b", "a"])` yields `"b a"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMerge;

impl TokenMerge {
    pub fn new() -> Self {
        Self
    }
}

impl ClassMerge for TokenMerge {
    fn merge(&self, fragments: &[&str]) -> String {
        let tokens: Vec<&str> = fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .collect();

        let mut seen = HashSet::with_capacity(tokens.len());
        let mut kept: Vec<&str> = tokens
            .into_iter()
            .rev()
            .filter(|token| seen.insert(*token))
            .collect();
        kept.reverse();
        kept.join(" ")
    }
}
