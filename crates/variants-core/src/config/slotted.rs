//! Configuration for the slotted engine

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use variants_class::StyleFragment;

use super::format::ConfigFormat;
use super::{CompoundRule, DefaultVariants, SlotStyles, SlottedAxes, VariantValue};
use crate::Result;
use crate::merge::{concat_rules, merge_slotted_axes, overlay_defaults, overlay_slots};

/// Configuration of a [`SlottedVariants`](crate::SlottedVariants) engine.
///
/// Axis values and compound actions carry partial slot maps: only the slots
/// they style need to be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlottedConfig {
    /// Slot base classes, in output order
    #[serde(default)]
    pub slots: SlotStyles,

    /// Variant axes in declaration order
    #[serde(default)]
    pub variants: SlottedAxes,

    /// Compound rules whose actions are partial slot maps
    #[serde(default)]
    pub compound_variants: Vec<CompoundRule<SlotStyles>>,

    /// Selections used when the caller does not pick a value
    #[serde(default)]
    pub default_variants: DefaultVariants,
}

impl SlottedConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        ConfigFormat::Toml.parse(content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        ConfigFormat::Json.parse(content)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        ConfigFormat::Yaml.parse(content)
    }

    /// Declare a slot with its base classes.
    pub fn slot(mut self, name: impl Into<String>, base: impl Into<StyleFragment>) -> Self {
        self.slots.insert(name.into(), base.into());
        self
    }

    /// Declare an axis whose values style one or more slots.
    pub fn axis<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, SlotStyles)>,
        V: Into<String>,
    {
        let values: IndexMap<String, SlotStyles> = values
            .into_iter()
            .map(|(value, styles)| (value.into(), styles))
            .collect();
        self.variants.insert(name.into(), values);
        self
    }

    /// Append a compound rule.
    pub fn compound(mut self, rule: CompoundRule<SlotStyles>) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Set the default selection for an axis.
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.default_variants.insert(axis.into(), value.into());
        self
    }

    /// Fold `delta` into a copy of this configuration.
    ///
    /// - `slots`: delta overlaid, new slots appended
    /// - `variants`: axis-wise union; a value on both sides has its slot
    ///   styles merged slot by slot, delta winning per slot
    /// - `compoundVariants`: this configuration's rules, then the delta's
    /// - `defaultVariants`: delta overlaid on this configuration
    pub fn merged(&self, delta: &SlottedConfig) -> SlottedConfig {
        SlottedConfig {
            slots: overlay_slots(&self.slots, &delta.slots),
            variants: merge_slotted_axes(&self.variants, &delta.variants),
            compound_variants: concat_rules(&self.compound_variants, &delta.compound_variants),
            default_variants: overlay_defaults(&self.default_variants, &delta.default_variants),
        }
    }
}
