//! Slotted engine: one class string per slot

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use variants_class::{ClassMerge, ClassValue, ConflictMerge, normalize};

use crate::Result;
use crate::axis::{self, PropSchema, Selection};
use crate::config::SlottedConfig;
use crate::props::Props;

/// Create a slotted engine with the default [`ConflictMerge::tailwind`] resolver.
pub fn create_slotted_variants(config: SlottedConfig) -> Result<SlottedVariants> {
    SlottedVariants::new(config)
}

/// A resolver over an immutable [`SlottedConfig`].
///
/// Each slot is resolved independently: an axis value or compound rule
/// only affects the slots it names. Axis values and compound matching are
/// still decided once per resolution, from the props and defaults alone.
///
/// # Example
///
/// ```
/// use variants_core::config::slot_styles;
/// use variants_core::{Props, SlottedConfig, create_slotted_variants};
///
/// let card = create_slotted_variants(
///     SlottedConfig::new()
///         .slot("root", "flex flex-col")
///         .slot("title", "font-bold")
///         .axis("size", [
///             ("sm", slot_styles([("title", "text-sm")])),
///             ("lg", slot_styles([("title", "text-lg")])),
///         ]),
/// )
/// .unwrap();
///
/// let classes = card.resolve(&Props::new().with("size", "lg"));
/// assert_eq!(classes.get("root"), Some("flex flex-col"));
/// assert_eq!(classes.slot("title").unwrap().with("mt-2"), "font-bold text-lg mt-2");
/// ```
#[derive(Debug, Clone)]
pub struct SlottedVariants {
    config: Arc<SlottedConfig>,
    merger: Arc<dyn ClassMerge>,
}

impl SlottedVariants {
    /// Validate `config` and build an engine using [`ConflictMerge::tailwind`].
    pub fn new(config: SlottedConfig) -> Result<Self> {
        Self::with_merger(config, Arc::new(ConflictMerge::tailwind()))
    }

    /// Validate `config` and build an engine using `merger` for every merge.
    pub fn with_merger(config: SlottedConfig, merger: Arc<dyn ClassMerge>) -> Result<Self> {
        axis::validate_axes(&config.variants)?;
        axis::report_inert(&config.variants, &config.compound_variants, &config.default_variants);

        for (axis, values) in &config.variants {
            for (value, styles) in values {
                for slot in styles.keys().filter(|slot| !config.slots.contains_key(*slot)) {
                    tracing::debug!(%axis, %value, %slot, "Axis value styles an undeclared slot");
                }
            }
        }

        tracing::debug!(
            slots = config.slots.len(),
            axes = config.variants.len(),
            compound_rules = config.compound_variants.len(),
            "Created slotted variants engine"
        );

        Ok(Self {
            config: Arc::new(config),
            merger,
        })
    }

    pub fn config(&self) -> &SlottedConfig {
        &self.config
    }

    pub fn merger(&self) -> &Arc<dyn ClassMerge> {
        &self.merger
    }

    /// Compute every slot's classes for `props`.
    ///
    /// For each declared slot, in order: the slot's base, then each axis's
    /// fragment for that slot, then each matching compound rule's fragment
    /// for that slot. Caller classes are added per slot through
    /// [`SlotClass::with`].
    pub fn resolve(&self, props: &Props) -> SlotClasses {
        let config = &*self.config;
        let selection = self.selected_values(props);

        let classes = config
            .slots
            .iter()
            .map(|(slot, base)| (slot.clone(), self.resolve_slot(slot, base.as_class_string(), &selection)))
            .collect();

        SlotClasses {
            classes,
            merger: Arc::clone(&self.merger),
        }
    }

    /// Compute every slot's classes with no props.
    pub fn resolve_default(&self) -> SlotClasses {
        self.resolve(&Props::new())
    }

    fn resolve_slot(&self, slot: &str, mut style: String, selection: &Selection) -> String {
        let config = &*self.config;

        for (axis, values) in &config.variants {
            let fragment = selection
                .get(axis)
                .and_then(|value| values.get(value))
                .and_then(|styles| styles.get(slot));
            if let Some(fragment) = fragment {
                style = self.merger.merge_pair(&style, &fragment.as_class_string());
            }
        }

        for rule in &config.compound_variants {
            if rule.touches_slot(slot) && rule.matches(selection) {
                style = self.merger.merge_pair(&style, &rule.slot_class_string(slot, &*self.merger));
            }
        }

        tracing::trace!(%slot, %style, "Resolved slot");
        style
    }

    /// The value each axis resolves to for `props`.
    pub fn selected_values(&self, props: &Props) -> Selection {
        axis::resolve_selection(&self.config.variants, props, &self.config.default_variants)
    }

    /// Axis names and the values each accepts.
    pub fn prop_schema(&self) -> PropSchema {
        axis::schema_of(&self.config.variants)
    }

    /// Declared slot names, in output order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.config.slots.keys().map(String::as_str)
    }

    /// Derive a new engine from this one plus `delta`, leaving this one
    /// untouched. See [`SlottedConfig::merged`].
    pub fn extend(&self, delta: SlottedConfig) -> Result<Self> {
        let merged = self.config.merged(&delta);

        tracing::debug!(
            added_slots = delta.slots.keys().filter(|slot| !self.config.slots.contains_key(*slot)).count(),
            added_rules = delta.compound_variants.len(),
            "Extending slotted variants engine"
        );

        Self::with_merger(merged, Arc::clone(&self.merger))
    }
}

/// The resolved classes of every slot, in slot declaration order.
#[derive(Clone)]
pub struct SlotClasses {
    classes: IndexMap<String, String>,
    merger: Arc<dyn ClassMerge>,
}

impl SlotClasses {
    /// A handle for one slot, or `None` if the slot is not declared.
    pub fn slot(&self, name: &str) -> Option<SlotClass<'_>> {
        self.classes.get_key_value(name).map(|(name, style)| SlotClass {
            name,
            style,
            merger: &*self.merger,
        })
    }

    /// The slot's classes without caller additions.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = SlotClass<'_>> {
        self.classes.iter().map(|(name, style)| SlotClass {
            name,
            style,
            merger: &*self.merger,
        })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Slot name to classes, without caller additions.
    pub fn into_map(self) -> IndexMap<String, String> {
        self.classes
    }
}

impl fmt::Debug for SlotClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.classes.iter()).finish()
    }
}

/// One slot of a [`SlotClasses`] result.
///
/// Caller classes are merged when asked for, so the same resolution can be
/// rendered several times with different extras.
#[derive(Debug, Clone, Copy)]
pub struct SlotClass<'a> {
    name: &'a str,
    style: &'a str,
    merger: &'a dyn ClassMerge,
}

impl<'a> SlotClass<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The slot's classes.
    pub fn class(&self) -> String {
        self.merger.merge_pair(self.style, "")
    }

    /// The slot's classes merged with `extra`, which wins conflicts.
    pub fn with(&self, extra: impl Into<ClassValue>) -> String {
        self.with_optional(Some(&extra.into()))
    }

    /// Like [`with`](Self::with) for an extra that may be absent.
    pub fn with_optional(&self, extra: Option<&ClassValue>) -> String {
        self.merger.merge_pair(self.style, &normalize(extra))
    }
}
