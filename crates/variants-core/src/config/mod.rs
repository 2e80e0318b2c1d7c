//! Variant configuration model
//!
//! A configuration is plain data: base classes (or slots), variant axes,
//! compound rules and default selections. Every map is an [`IndexMap`]
//! because declaration order is meaningful: the first declared value of an
//! axis is its fallback, and axes, slots and rules are applied in order.
//!
//! Configurations can be built in code or parsed from TOML, JSON or YAML
//! text, using the same camelCase keys in every format:
//!
//! ```toml
//! base = "inline-flex items-center"
//!
//! [variants.size]
//! sm = "px-3 text-sm"
//! lg = "px-6 text-lg"
//!
//! [defaultVariants]
//! size = "sm"
//!
//! [[compoundVariants]]
//! size = "lg"
//! className = "font-semibold"
//! ```

mod compound;
mod flat;
mod format;
mod slotted;
mod value;

use indexmap::IndexMap;
use variants_class::StyleFragment;

pub use compound::CompoundRule;
pub use flat::VariantsConfig;
pub use format::{ConfigFormat, parse_config};
pub use slotted::SlottedConfig;
pub use value::{Requirement, VariantValue};

/// Axis name to value name to style fragment.
pub type VariantAxes = IndexMap<String, IndexMap<String, StyleFragment>>;

/// Slot name to style fragment. Used both for slot bases and for the
/// partial per-slot styles of a slotted axis value or compound rule.
pub type SlotStyles = IndexMap<String, StyleFragment>;

/// Axis name to value name to partial slot styles.
pub type SlottedAxes = IndexMap<String, IndexMap<String, SlotStyles>>;

/// Axis name to default selection.
pub type DefaultVariants = IndexMap<String, VariantValue>;

/// Build a [`SlotStyles`] map from `(slot, classes)` pairs.
///
/// # Example
///
/// ```
/// use variants_core::config::slot_styles;
///
/// let styles = slot_styles([("root", "flex"), ("title", "font-bold")]);
/// assert_eq!(styles["title"].as_class_string(), "font-bold");
/// ```
pub fn slot_styles<I, K, F>(entries: I) -> SlotStyles
where
    I: IntoIterator<Item = (K, F)>,
    K: Into<String>,
    F: Into<StyleFragment>,
{
    entries
        .into_iter()
        .map(|(slot, fragment)| (slot.into(), fragment.into()))
        .collect()
}
