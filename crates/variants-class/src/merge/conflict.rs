//! Conflict-group class merging
//!
//! A class token such as `md:hover:!px-4` is split into its modifiers
//! (`md`, `hover`), the important marker and the bare utility (`px-4`). The
//! utility is classified against an ordered list of [`ConflictGroup`]s. Two
//! tokens conflict when they share a group, the same modifier set and the same
//! importance; the one listed later survives.

use std::collections::HashSet;

use regex::Regex;

use super::ClassMerge;
use super::tailwind;
use crate::{Error, Result};

/// A named set of utilities that set the same CSS property.
#[derive(Debug, Clone)]
pub struct ConflictGroup {
    id: String,
    pattern: Regex,
    overrides: Vec<String>,
}

impl ConflictGroup {
    /// Create a group whose members are the utilities matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(id: impl Into<String>, pattern: &str) -> Result<Self> {
        let id = id.into();
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            group: id.clone(),
            source,
        })?;
        Ok(Self {
            id,
            pattern,
            overrides: Vec::new(),
        })
    }

    /// Declare groups that a member of this group also overrides.
    ///
    /// A later `p-4` removes an earlier `px-2`, but a later `px-2` leaves an
    /// earlier `p-4` in place.
    pub fn overriding<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    /// Check whether a bare utility (no modifiers) belongs to this group.
    pub fn matches(&self, utility: &str) -> bool {
        self.pattern.is_match(utility)
    }
}

/// Class merger that resolves conflicts between utilities of the same group.
///
/// Tokens that belong to no group only conflict with identical tokens.
///
/// # Example
///
/// ```
/// use variants_class::{ClassMerge, ConflictMerge};
///
/// let merger = ConflictMerge::tailwind();
/// assert_eq!(merger.merge_pair("p-2 text-md", "text-lg"), "p-2 text-lg");
/// assert_eq!(merger.merge_pair("px-2", "p-4"), "p-4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictMerge {
    groups: Vec<ConflictGroup>,
}

impl ConflictMerge {
    /// A merger with no groups; behaves like exact-duplicate removal.
    pub fn new() -> Self {
        Self::default()
    }

    /// A merger preloaded with the built-in Tailwind-style group table.
    pub fn tailwind() -> Self {
        Self {
            groups: tailwind::builtin_groups().to_vec(),
        }
    }

    /// Add a group. Groups added later are consulted before earlier ones and
    /// before the built-in table.
    pub fn with_group(mut self, group: ConflictGroup) -> Self {
        self.groups.insert(0, group);
        self
    }

    pub fn groups(&self) -> &[ConflictGroup] {
        &self.groups
    }

    /// Check that every `overrides` entry names a known group.
    pub fn validate(&self) -> Result<()> {
        let known: HashSet<&str> = self.groups.iter().map(|g| g.id.as_str()).collect();
        for group in &self.groups {
            if let Some(target) = group.overrides.iter().find(|t| !known.contains(t.as_str())) {
                return Err(Error::UnknownOverride {
                    group: group.id.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Find the group a bare utility belongs to, if any.
    pub fn classify(&self, utility: &str) -> Option<&ConflictGroup> {
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        self.groups.iter().find(|group| group.matches(utility))
    }
}

impl ClassMerge for ConflictMerge {
    fn merge(&self, fragments: &[&str]) -> String {
        let tokens: Vec<&str> = fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .collect();

        let mut claimed: HashSet<String> = HashSet::with_capacity(tokens.len());
        let mut kept = Vec::with_capacity(tokens.len());

        for token in tokens.into_iter().rev() {
            let parsed = ParsedClass::parse(token);
            let scope = parsed.scope();

            match self.classify(parsed.utility) {
                Some(group) => {
                    if !claimed.insert(format!("{scope}{}", group.id)) {
                        continue;
                    }
                    for target in &group.overrides {
                        claimed.insert(format!("{scope}{target}"));
                    }
                }
                None => {
                    if !claimed.insert(format!("={token}")) {
                        continue;
                    }
                }
            }
            kept.push(token);
        }

        kept.reverse();
        let merged = kept.join(" ");
        tracing::trace!(%merged, "Merged class fragments");
        merged
    }
}

/// A class token split into modifiers, importance and utility.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    utility: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let (modifiers, base) = split_modifiers(token);

        let (important, utility) = if let Some(rest) = base.strip_prefix('!') {
            (true, rest)
        } else if let Some(rest) = base.strip_suffix('!') {
            (true, rest)
        } else {
            (false, base)
        };

        Self {
            modifiers,
            important,
            utility,
        }
    }

    /// Conflict scope: tokens only conflict within the same scope.
    fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        scope.push(':');
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// Split `hover:md:p-4` into (`["hover", "md"]`, `"p-4"`).
///
/// Colons inside brackets or parentheses (arbitrary values and variants such
/// as `data-[pressed=true]:` or `[&>svg]:`) do not split.
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut modifiers = Vec::new();
    let mut start = 0usize;

    for (idx, ch) in class.char_indices() {
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            ':' if paren_depth == 0 && bracket_depth == 0 => {
                modifiers.push(&class[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    (modifiers, &class[start..])
}
