//! Axis classification and value resolution shared by both engines

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{CompoundRule, DefaultVariants, VariantValue};
use crate::props::Props;
use crate::{Error, Result};

/// Axis name to resolved value name, in axis declaration order.
pub type Selection = IndexMap<String, String>;

/// Axis name to the kind of value it accepts.
pub type PropSchema = IndexMap<String, AxisKind>;

/// What a caller may pass for an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum AxisKind {
    /// The axis declares only `true` and/or `false`; select it with a bool.
    Boolean,
    /// Any of the declared value names, in declaration order.
    Enum(Vec<String>),
}

impl AxisKind {
    /// Classify an axis by its declared value names.
    ///
    /// An axis whose value-name set is exactly `{true}`, `{false}` or
    /// `{true, false}` is boolean.
    pub fn of<T>(values: &IndexMap<String, T>) -> Self {
        if is_boolean_axis(values) {
            AxisKind::Boolean
        } else {
            AxisKind::Enum(values.keys().cloned().collect())
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, AxisKind::Boolean)
    }
}

fn is_boolean_axis<T>(values: &IndexMap<String, T>) -> bool {
    !values.is_empty() && values.keys().all(|name| name == "true" || name == "false")
}

pub(crate) fn schema_of<T>(axes: &IndexMap<String, IndexMap<String, T>>) -> PropSchema {
    axes.iter()
        .map(|(axis, values)| (axis.clone(), AxisKind::of(values)))
        .collect()
}

/// Reject axes without values; they have no first declared value.
pub(crate) fn validate_axes<T>(axes: &IndexMap<String, IndexMap<String, T>>) -> Result<()> {
    match axes.iter().find(|(_, values)| values.is_empty()) {
        Some((axis, _)) => Err(Error::EmptyAxis { axis: axis.clone() }),
        None => Ok(()),
    }
}

/// Log configuration that is legal but can never have an effect.
pub(crate) fn report_inert<T, A>(
    axes: &IndexMap<String, IndexMap<String, T>>,
    rules: &[CompoundRule<A>],
    defaults: &DefaultVariants,
) {
    for (index, rule) in rules.iter().enumerate() {
        for axis in rule.conditions.keys().filter(|axis| !axes.contains_key(*axis)) {
            tracing::debug!(rule = index, %axis, "Compound rule names an undeclared axis and will never match");
        }
    }

    for (axis, value) in defaults {
        match axes.get(axis) {
            None => tracing::debug!(%axis, "Default names an undeclared axis"),
            Some(values) if !is_boolean_axis(values) && !values.contains_key(&*value.as_name()) => {
                tracing::debug!(%axis, %value, "Default names an undeclared value; first value is used instead");
            }
            Some(_) => {}
        }
    }
}

/// Resolve the selected value name of every axis.
///
/// For each axis, in declaration order:
/// - boolean axes take the caller's value, else the default, coerced to
///   `"true"` or `"false"`; anything that is not a boolean counts as `false`
/// - other axes take the caller's value, else the default, else the first
///   declared value; a value the axis does not declare counts as absent
///
/// The result depends only on the axes, the props and the defaults, never
/// on a slot.
pub(crate) fn resolve_selection<T>(
    axes: &IndexMap<String, IndexMap<String, T>>,
    props: &Props,
    defaults: &DefaultVariants,
) -> Selection {
    axes.iter()
        .filter_map(|(axis, values)| {
            resolve_value(axis, values, props, defaults).map(|value| (axis.clone(), value))
        })
        .collect()
}

fn resolve_value<T>(
    axis: &str,
    values: &IndexMap<String, T>,
    props: &Props,
    defaults: &DefaultVariants,
) -> Option<String> {
    if is_boolean_axis(values) {
        let on = props
            .get(axis)
            .or_else(|| defaults.get(axis))
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        return Some(on.to_string());
    }

    let declared = |value: &&VariantValue| values.contains_key(&*value.as_name());

    props
        .get(axis)
        .filter(declared)
        .or_else(|| defaults.get(axis).filter(declared))
        .map(|value| value.as_name().into_owned())
        .or_else(|| values.keys().next().cloned())
}
