//! Configuration for the non-slot engine

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use variants_class::{ClassMerge, StyleFragment};

use super::format::ConfigFormat;
use super::{CompoundRule, DefaultVariants, VariantAxes, VariantValue};
use crate::Result;
use crate::merge::{concat_rules, merge_flat_axes, overlay_defaults};

/// Configuration of a [`Variants`](crate::Variants) engine.
///
/// Every field is optional in configuration text; a missing field is empty.
/// The same type is used as the delta passed to
/// [`Variants::extend`](crate::Variants::extend).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsConfig {
    /// Classes applied before any variant
    #[serde(default)]
    pub base: StyleFragment,

    /// Variant axes in declaration order
    #[serde(default)]
    pub variants: VariantAxes,

    /// Compound rules, evaluated in order after all axes
    #[serde(default)]
    pub compound_variants: Vec<CompoundRule<StyleFragment>>,

    /// Selections used when the caller does not pick a value
    #[serde(default)]
    pub default_variants: DefaultVariants,
}

impl VariantsConfig {
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

    /// Set the base classes.
    pub fn base(mut self, base: impl Into<StyleFragment>) -> Self {
        self.base = base.into();
        self
    }

    /// Declare an axis with its values, in order.
    ///
    /// Declaring an axis twice replaces its values but keeps its position.
    pub fn axis<I, V, F>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, F)>,
        V: Into<String>,
        F: Into<StyleFragment>,
    {
        let values: IndexMap<String, StyleFragment> = values
            .into_iter()
            .map(|(value, fragment)| (value.into(), fragment.into()))
            .collect();
        self.variants.insert(name.into(), values);
        self
    }

    /// Append a compound rule.
    pub fn compound(mut self, rule: CompoundRule<StyleFragment>) -> Self {
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
    /// - `base`: merged with `merger`, delta last
    /// - `variants`: axis-wise union, delta wins per value
    /// - `compoundVariants`: this configuration's rules, then the delta's
    /// - `defaultVariants`: delta overlaid on this configuration
    pub fn merged(&self, delta: &VariantsConfig, merger: &dyn ClassMerge) -> VariantsConfig {
        let base = merger.merge_pair(&self.base.as_class_string(), &delta.base.as_class_string());

        VariantsConfig {
            base: StyleFragment::from(base),
            variants: merge_flat_axes(&self.variants, &delta.variants),
            compound_variants: concat_rules(&self.compound_variants, &delta.compound_variants),
            default_variants: overlay_defaults(&self.default_variants, &delta.default_variants),
        }
    }
}
