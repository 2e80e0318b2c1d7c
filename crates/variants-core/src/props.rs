//! Caller-supplied selections

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use variants_class::{ClassMerge, ClassValue, normalize};

use crate::config::VariantValue;

/// The selections a caller passes to a resolver.
///
/// Holds one value per axis plus optional extra classes (`className` and
/// `class`) that the non-slot engine appends last. Empty props are
/// equivalent to passing nothing: every axis falls back to its default or
/// first declared value.
///
/// # Example
///
/// ```
/// use variants_core::Props;
///
/// let props = Props::new()
///     .with("size", "lg")
///     .with("isDisabled", true)
///     .class_name("mt-4");
/// assert_eq!(props.get("size").map(|v| v.to_string()), Some("lg".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    class_name: Option<ClassValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    class: Option<ClassValue>,

    #[serde(flatten)]
    values: IndexMap<String, VariantValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `axis`.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.set(axis, value);
        self
    }

    /// Select `value` for `axis` in place.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<VariantValue>) {
        self.values.insert(axis.into(), value.into());
    }

    /// Set the caller's `className`.
    pub fn class_name(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class_name = Some(classes.into());
        self
    }

    /// Set the caller's `class`.
    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class = Some(classes.into());
        self
    }

    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)
    }

    pub fn values(&self) -> &IndexMap<String, VariantValue> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.class_name.is_none() && self.class.is_none()
    }

    /// The caller's extra classes, `className` then `class`.
    pub(crate) fn caller_classes(&self, merger: &dyn ClassMerge) -> String {
        merger.merge_pair(&normalize(self.class_name.as_ref()), &normalize(self.class.as_ref()))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (axis, value) in iter {
            props.set(axis, value);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variants_class::TokenMerge;

    #[test]
    fn test_new_props_are_empty() {
        assert!(Props::new().is_empty());
        assert!(!Props::new().class("x").is_empty());
    }

    #[test]
    fn test_later_selection_replaces_earlier() {
        let props = Props::new().with("size", "sm").with("size", "lg");
        assert_eq!(props.get("size"), Some(&VariantValue::from("lg")));
        assert_eq!(props.values().len(), 1);
    }

    #[test]
    fn test_caller_classes_merge_class_name_then_class() {
        let props = Props::new().class_name(["a", "b"]).class("c");
        assert_eq!(props.caller_classes(&TokenMerge::new()), "a b c");
    }

    #[test]
    fn test_from_iterator() {
        let props: Props = [("color", "primary"), ("size", "lg")].into_iter().collect();
        assert_eq!(props.get("color"), Some(&VariantValue::from("primary")));
    }

    #[test]
    fn test_deserialize_json_props() {
        let props: Props =
            serde_json::from_str(r#"{"size": "lg", "isOn": true, "className": ["x", "y"]}"#).unwrap();

        assert_eq!(props.get("size"), Some(&VariantValue::from("lg")));
        assert_eq!(props.get("isOn"), Some(&VariantValue::Bool(true)));
        assert_eq!(props.get("className"), None);
        assert_eq!(props.caller_classes(&TokenMerge::new()), "x y");
    }
}
