//! Non-slot engine: one class string per resolution

use std::sync::Arc;

use variants_class::{ClassMerge, ConflictMerge};

use crate::Result;
use crate::axis::{self, PropSchema, Selection};
use crate::config::VariantsConfig;
use crate::props::Props;

/// Create a non-slot engine with the default [`ConflictMerge::tailwind`]
/// resolver.
///
/// # Errors
///
/// Returns [`Error::EmptyAxis`](crate::Error::EmptyAxis) if an axis declares
/// no values.
pub fn create_variants(config: VariantsConfig) -> Result<Variants> {
    Variants::new(config)
}

/// A resolver over an immutable [`VariantsConfig`].
///
/// Cloning is cheap and clones share the configuration. Resolution only
/// reads the configuration, so one engine may be used from many threads.
///
/// # Example
///
/// ```
/// use variants_core::{Props, VariantsConfig, create_variants};
///
/// let button = create_variants(
///     VariantsConfig::new()
///         .base("b")
///         .axis("size", [("sm", "s"), ("lg", "l")])
///         .default_variant("size", "sm"),
/// )
/// .unwrap();
///
/// assert_eq!(button.resolve_default(), "b s");
/// assert_eq!(button.resolve(&Props::new().with("size", "lg")), "b l");
/// ```
#[derive(Debug, Clone)]
pub struct Variants {
    config: Arc<VariantsConfig>,
    merger: Arc<dyn ClassMerge>,
}

impl Variants {
    /// Validate `config` and build an engine using [`ConflictMerge::tailwind`].
    ///
    /// Pass [`TokenMerge`](variants_class::TokenMerge) to [`Variants::with_merger`]
    /// to keep every utility and only drop exact duplicates.
    pub fn new(config: VariantsConfig) -> Result<Self> {
        Self::with_merger(config, Arc::new(ConflictMerge::tailwind()))
    }

    /// Validate `config` and build an engine using `merger` for every merge.
    pub fn with_merger(config: VariantsConfig, merger: Arc<dyn ClassMerge>) -> Result<Self> {
        axis::validate_axes(&config.variants)?;
        axis::report_inert(&config.variants, &config.compound_variants, &config.default_variants);

        tracing::debug!(
            axes = config.variants.len(),
            compound_rules = config.compound_variants.len(),
            "Created variants engine"
        );

        Ok(Self {
            config: Arc::new(config),
            merger,
        })
    }

    pub fn config(&self) -> &VariantsConfig {
        &self.config
    }

    pub fn merger(&self) -> &Arc<dyn ClassMerge> {
        &self.merger
    }

    /// Compute the class string for `props`.
    ///
    /// Fragments are merged in this order, later ones winning conflicts:
    /// base, each axis in declaration order, each matching compound rule in
    /// declaration order, then the caller's `className` and `class`.
    pub fn resolve(&self, props: &Props) -> String {
        let config = &*self.config;
        let selection = self.selected_values(props);
        let mut result = config.base.as_class_string();

        for (axis, values) in &config.variants {
            let fragment = selection.get(axis).and_then(|value| values.get(value));
            if let Some(fragment) = fragment {
                result = self.merger.merge_pair(&result, &fragment.as_class_string());
            }
        }

        for rule in &config.compound_variants {
            if rule.matches(&selection) {
                result = self.merger.merge_pair(&result, &rule.class_string(&*self.merger));
            }
        }

        let result = self.merger.merge_pair(&result, &props.caller_classes(&*self.merger));
        tracing::trace!(%result, "Resolved variants");
        result
    }

    /// Compute the class string with no props: every axis takes its default
    /// or its first declared value.
    pub fn resolve_default(&self) -> String {
        self.resolve(&Props::new())
    }

    /// The value each axis resolves to for `props`, as used for compound
    /// matching.
    pub fn selected_values(&self, props: &Props) -> Selection {
        axis::resolve_selection(&self.config.variants, props, &self.config.default_variants)
    }

    /// Axis names and the values each accepts.
    pub fn prop_schema(&self) -> PropSchema {
        axis::schema_of(&self.config.variants)
    }

    /// Derive a new engine from this one plus `delta`.
    ///
    /// This engine and its configuration are left untouched; the new engine
    /// shares this engine's merger. See [`VariantsConfig::merged`] for how
    /// each field is combined.
    pub fn extend(&self, delta: VariantsConfig) -> Result<Self> {
        let merged = self.config.merged(&delta, &*self.merger);

        tracing::debug!(
            added_axes = delta.variants.keys().filter(|axis| !self.config.variants.contains_key(*axis)).count(),
            added_rules = delta.compound_variants.len(),
            "Extending variants engine"
        );

        Self::with_merger(merged, Arc::clone(&self.merger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::config::CompoundRule;
    use variants_class::TokenMerge;

    fn color_size() -> Variants {
        create_variants(
            VariantsConfig::new()
                .base("base")
                .axis("color", [("a", "ca"), ("b", "cb")])
                .axis("size", [("sm", "ss"), ("lg", "sl")])
                .compound(CompoundRule::new().when("color", "a").when("size", "lg").class_name("X")),
        )
        .unwrap()
    }

    #[test]
    fn test_base_only() {
        let variants = create_variants(VariantsConfig::new().base(["base", "style"])).unwrap();
        assert_eq!(variants.resolve_default(), "base style");
        assert_eq!(variants.resolve(&Props::new().class_name("extra")), "base style extra");
    }

    #[test]
    fn test_override_precedence() {
        let variants = create_variants(
            VariantsConfig::new()
                .base("b")
                .axis("size", [("sm", "s"), ("lg", "l")])
                .default_variant("size", "sm"),
        )
        .unwrap();

        assert_eq!(variants.resolve_default(), "b s");
        assert_eq!(variants.resolve(&Props::new().with("size", "lg")), "b l");
    }

    #[test]
    fn test_compound_only_for_exact_combination() {
        let variants = color_size();

        for color in ["a", "b"] {
            for size in ["sm", "lg"] {
                let result = variants.resolve(&Props::new().with("color", color).with("size", size));
                let has_x = result.split_whitespace().any(|t| t == "X");
                assert_eq!(has_x, color == "a" && size == "lg", "{color}/{size}: {result}");
            }
        }
    }

    #[test]
    fn test_boolean_axis() {
        let variants = create_variants(VariantsConfig::new().axis("isOn", [("true", "on")])).unwrap();

        assert_eq!(variants.resolve(&Props::new().with("isOn", true)), "on");
        assert_eq!(variants.resolve(&Props::new().with("isOn", false)), "");
        assert_eq!(variants.resolve_default(), "");
    }

    #[test]
    fn test_empty_axis_is_rejected() {
        let result = create_variants(VariantsConfig::new().axis("size", Vec::<(&str, &str)>::new()));
        assert!(matches!(result, Err(Error::EmptyAxis { ref axis }) if axis == "size"));
    }

    #[test]
    fn test_extend_does_not_mutate_original() {
        let original = color_size();
        let before = original.resolve(&Props::new().with("color", "b"));

        let extended = original
            .extend(VariantsConfig::new().axis("color", [("b", "changed")]).base("more"))
            .unwrap();

        assert_eq!(original.resolve(&Props::new().with("color", "b")), before);
        assert_eq!(extended.resolve(&Props::new().with("color", "b")), "base more changed ss");
    }

    #[test]
    fn test_conflicting_classes_with_conflict_merge() {
        let config = VariantsConfig::new()
            .base("base-style text-md")
            .axis("color", [("primary", "text-blue-50"), ("secondary", "text-purple-50")])
            .axis("size", [("small", "text-sm"), ("large", "text-lg")])
            .compound(
                CompoundRule::new()
                    .when("color", "primary")
                    .when("size", "large")
                    .class_name("compound-class"),
            )
            .default_variant("color", "primary")
            .default_variant("size", "large");
        let variants = Variants::with_merger(config, Arc::new(ConflictMerge::tailwind())).unwrap();

        assert_eq!(variants.resolve_default(), "base-style text-blue-50 text-lg compound-class");
        assert_eq!(
            variants.resolve(&Props::new().with("color", "secondary")),
            "base-style text-purple-50 text-lg"
        );
        assert_eq!(
            variants.resolve(&Props::new().with("size", "small")),
            "base-style text-blue-50 text-sm"
        );

        let extended = variants.extend(VariantsConfig::new().base("text-xl")).unwrap();
        assert_eq!(extended.config().base.as_class_string(), "base-style text-xl");
    }

    #[test]
    fn test_default_merger_drops_overridden_utilities() {
        let variants = create_variants(
            VariantsConfig::new()
                .base("px-2 text-sm")
                .axis("size", [("lg", "px-4 text-lg")]),
        )
        .unwrap();

        assert_eq!(variants.resolve_default(), "px-4 text-lg");
    }

    #[test]
    fn test_token_merge_keeps_overridden_utilities() {
        let config = VariantsConfig::new()
            .base("px-2 text-sm")
            .axis("size", [("lg", "px-4 text-lg")]);
        let variants = Variants::with_merger(config, Arc::new(TokenMerge::new())).unwrap();

        assert_eq!(variants.resolve_default(), "px-2 text-sm px-4 text-lg");
    }

    #[test]
    fn test_selected_values() {
        let selection = color_size().selected_values(&Props::new().with("size", "lg"));
        assert_eq!(selection["color"], "a");
        assert_eq!(selection["size"], "lg");
    }
}
