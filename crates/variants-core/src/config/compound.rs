//! Compound variant rules
//!
//! A compound rule adds classes only when several axes resolve to a given
//! combination at once. In configuration it is a single object: every key
//! other than `class` and `className` is an axis condition.
//!
//! ```json
//! { "color": "primary", "size": ["md", "lg"], "className": "font-bold" }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use variants_class::{ClassMerge, StyleFragment};

use super::SlotStyles;
use super::value::Requirement;
use crate::axis::Selection;

/// A conditional style addition.
///
/// `A` is the action payload: a [`StyleFragment`] for the flat engine, a
/// partial [`SlotStyles`] map for the slotted engine. Both `class` and
/// `className` are applied when present, `className` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRule<A> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<A>,

    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<A>,

    /// Axis name to required value(s)
    #[serde(flatten)]
    pub conditions: IndexMap<String, Requirement>,
}

impl<A> Default for CompoundRule<A> {
    fn default() -> Self {
        Self {
            class: None,
            class_name: None,
            conditions: IndexMap::new(),
        }
    }
}

impl<A> CompoundRule<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `axis` to resolve to `requirement`.
    pub fn when(mut self, axis: impl Into<String>, requirement: impl Into<Requirement>) -> Self {
        self.conditions.insert(axis.into(), requirement.into());
        self
    }

    /// Set the `className` action.
    pub fn class_name(mut self, action: impl Into<A>) -> Self {
        self.class_name = Some(action.into());
        self
    }

    /// Set the `class` action.
    pub fn class(mut self, action: impl Into<A>) -> Self {
        self.class = Some(action.into());
        self
    }

    /// Check the rule against the resolved value of every axis.
    ///
    /// A condition on an axis that has no resolved value never holds. A rule
    /// without conditions always matches.
    pub fn matches(&self, selection: &Selection) -> bool {
        self.conditions.iter().all(|(axis, requirement)| {
            selection
                .get(axis)
                .is_some_and(|resolved| requirement.accepts(resolved))
        })
    }
}

impl CompoundRule<StyleFragment> {
    /// Merge `className` and `class` into the string this rule contributes.
    pub fn class_string(&self, merger: &dyn ClassMerge) -> String {
        merger.merge_pair(&fragment_string(self.class_name.as_ref()), &fragment_string(self.class.as_ref()))
    }
}

impl CompoundRule<SlotStyles> {
    /// Merge `className[slot]` and `class[slot]` into the string this rule
    /// contributes to `slot`.
    pub fn slot_class_string(&self, slot: &str, merger: &dyn ClassMerge) -> String {
        let class_name = self.class_name.as_ref().and_then(|styles| styles.get(slot));
        let class = self.class.as_ref().and_then(|styles| styles.get(slot));
        merger.merge_pair(&fragment_string(class_name), &fragment_string(class))
    }

    /// Whether this rule styles `slot` at all.
    pub fn touches_slot(&self, slot: &str) -> bool {
        [&self.class_name, &self.class]
            .into_iter()
            .flatten()
            .any(|styles| styles.contains_key(slot))
    }
}

fn fragment_string(fragment: Option<&StyleFragment>) -> String {
    fragment.map(StyleFragment::as_class_string).unwrap_or_default()
}
